use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::post::SavedPost;
use crate::posts::PostStore;

/// `saved_posts` table in PostgreSQL. Rows are inserted and deleted, never updated.
pub struct PgPostStore {
    pool: PgPool,
}

impl PgPostStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostStore for PgPostStore {
    async fn insert(&self, text: &str) -> Result<SavedPost, AppError> {
        let post = sqlx::query_as::<_, SavedPost>(
            "INSERT INTO saved_posts (text) VALUES ($1) RETURNING id, text, created_at",
        )
        .bind(text)
        .fetch_one(&self.pool)
        .await?;
        Ok(post)
    }

    async fn list(&self) -> Result<Vec<SavedPost>, AppError> {
        let posts = sqlx::query_as::<_, SavedPost>(
            "SELECT id, text, created_at FROM saved_posts ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(posts)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM saved_posts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
