use async_trait::async_trait;
use chrono::Utc;
use reqwest::{multipart, Client};
use serde::Deserialize;
use sha1::{Digest, Sha1};
use tracing::error;

use super::MediaUploader;
use crate::{Error, Result};

#[derive(Debug, Clone)]
pub struct CloudinaryUploader {
    client: Client,
    cloud_name: String,
    api_key: String,
    api_secret: String,
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: String,
}

impl CloudinaryUploader {
    pub fn new(cloud_name: String, api_key: String, api_secret: String) -> Self {
        Self {
            client: Client::new(),
            cloud_name,
            api_key,
            api_secret,
        }
    }

    // Signature over the non-auth params (here only `timestamp`), suffixed
    // with the API secret, per Cloudinary's signed-upload scheme.
    fn sign(&self, timestamp: i64) -> String {
        let mut hasher = Sha1::new();
        hasher.update(format!("timestamp={}{}", timestamp, self.api_secret));
        hex::encode(hasher.finalize())
    }
}

#[async_trait]
impl MediaUploader for CloudinaryUploader {
    async fn upload(&self, payload: &str) -> Result<String> {
        let url = format!(
            "https://api.cloudinary.com/v1_1/{}/image/upload",
            self.cloud_name
        );

        let timestamp = Utc::now().timestamp();
        let form = multipart::Form::new()
            .text("file", payload.to_string())
            .text("api_key", self.api_key.clone())
            .text("timestamp", timestamp.to_string())
            .text("signature", self.sign(timestamp));

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|err| {
                error!("Upload request failed: {:?}", err);
                Error::UploadFailed(err.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Media host rejected upload ({}): {}", status, body);
            return Err(Error::UploadFailed(body));
        }

        let uploaded = response.json::<UploadResponse>().await.map_err(|err| {
            error!("Failed to parse upload response: {}", err);
            Error::UploadFailed(err.to_string())
        })?;

        Ok(uploaded.secure_url)
    }
}
