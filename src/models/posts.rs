use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A persisted feed post. `text` and `image` are each optional but never
/// both absent; `image` always holds the durable media-host URL, never the
/// raw payload the client sent.
#[derive(Debug, Deserialize, Serialize, sqlx::FromRow, Clone)]
pub struct Post {
    pub id: Uuid,
    #[serde(rename = "authorId")]
    pub author_id: Uuid,
    pub text: Option<String>,
    pub image: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct CreatePostDto {
    pub text: Option<String>,
    pub img: Option<String>,
}
