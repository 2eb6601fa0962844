use async_trait::async_trait;
use uuid::Uuid;

use super::PostgresRepo;
use crate::{models::posts::Post, Result};

#[async_trait]
pub trait PostsRepository: Send + Sync {
    async fn create_post(
        &self,
        author_id: Uuid,
        text: Option<String>,
        image: Option<String>,
    ) -> Result<Post>;
    async fn get_posts(&self) -> Result<Vec<Post>>;
}

#[async_trait]
impl PostsRepository for PostgresRepo {
    async fn create_post(
        &self,
        author_id: Uuid,
        text: Option<String>,
        image: Option<String>,
    ) -> Result<Post> {
        let id = Uuid::now_v7();

        let post = sqlx::query_as::<_, Post>(
            r#"
            INSERT INTO posts (id, author_id, text, image, created_at)
            VALUES ($1, $2, $3, $4, NOW())
            RETURNING id, author_id, text, image, created_at
            "#,
        )
        .bind(id)
        .bind(author_id)
        .bind(text)
        .bind(image)
        .fetch_one(&self.pool)
        .await?;

        Ok(post)
    }

    async fn get_posts(&self) -> Result<Vec<Post>> {
        let posts = sqlx::query_as::<_, Post>(
            r#"
            SELECT id, author_id, text, image, created_at
            FROM posts
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(posts)
    }
}
