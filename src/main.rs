use config::Config;
use dotenv::dotenv;
use media::cloudinary::CloudinaryUploader;
use repositories::PostgresRepo;
use routes::{configure_cors, create_routes};
use services::{auth::AuthService, posts::PostsService};
use sqlx::{postgres::PgPoolOptions, PgPool};
use tracing::info;

use std::{env, sync::Arc};

pub use self::errors::{Error, Result};

mod config;
mod errors;
mod handlers;
mod media;
mod middleware;
mod models;
mod repositories;
mod routes;
mod services;

#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub auth_service: AuthService,
    pub posts_service: PostsService<PostgresRepo, CloudinaryUploader>,
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,backend_socialfeed=debug".into()),
        )
        .init();

    let config = Config::init();

    let pool = match PgPoolOptions::new()
        .max_connections(10)
        .connect(&config.database_url)
        .await
    {
        Ok(pool) => {
            info!("✅ Connection to the database is successful!");
            pool
        }
        Err(err) => {
            tracing::error!("🔥 Failed to connect to the database: {:?}", err);
            std::process::exit(1);
        }
    };

    if let Err(err) = sqlx::migrate!().run(&pool).await {
        tracing::error!("🔥 Failed to run migrations: {:?}", err);
        std::process::exit(1);
    }

    let repo = PostgresRepo::new(pool.clone());
    let uploader = CloudinaryUploader::new(
        config.cloudinary_cloud_name,
        config.cloudinary_api_key,
        config.cloudinary_api_secret,
    );

    let app_state = AppState {
        db_pool: pool,
        auth_service: AuthService::new(config.jwt_secret),
        posts_service: PostsService::new(repo, uploader),
    };

    let app = create_routes(Arc::new(app_state)).layer(configure_cors());

    let addr = format!(
        "[::]:{}",
        env::var("PORT").unwrap_or_else(|_| "8080".to_string())
    );
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    info!("🚀 Server is running on {}", addr);
    axum::serve(listener, app).await.unwrap();
}
