use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub cloudinary_cloud_name: String,
    pub cloudinary_api_key: String,
    pub cloudinary_api_secret: String,
}

impl Config {
    pub fn init() -> Config {
        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
        let jwt_secret = env::var("JWT_SECRET").expect("JWT_SECRET must be set");
        let cloudinary_cloud_name =
            env::var("CLOUDINARY_CLOUD_NAME").expect("CLOUDINARY_CLOUD_NAME must be set");
        let cloudinary_api_key =
            env::var("CLOUDINARY_API_KEY").expect("CLOUDINARY_API_KEY must be set");
        let cloudinary_api_secret =
            env::var("CLOUDINARY_API_SECRET").expect("CLOUDINARY_API_SECRET must be set");

        Config {
            database_url,
            jwt_secret,
            cloudinary_cloud_name,
            cloudinary_api_key,
            cloudinary_api_secret,
        }
    }
}
