use async_trait::async_trait;

use crate::Result;

pub mod cloudinary;

/// Hands an image payload (inline data URI or a URL the provider can fetch)
/// to the media host and returns the durable, publicly resolvable URL.
/// Stateless; safe to call concurrently for unrelated requests.
#[async_trait]
pub trait MediaUploader: Send + Sync {
    async fn upload(&self, payload: &str) -> Result<String>;
}
