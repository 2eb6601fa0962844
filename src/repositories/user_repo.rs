use async_trait::async_trait;
use uuid::Uuid;

use super::PostgresRepo;
use crate::{models::users::User, Result};

/// Existence lookup against the user directory. Returns `None` rather than
/// an error so callers decide how a missing user maps onto their contract.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_user(&self, user_id: Uuid) -> Result<Option<User>>;
}

#[async_trait]
impl UserRepository for PostgresRepo {
    async fn find_user(&self, user_id: Uuid) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }
}
