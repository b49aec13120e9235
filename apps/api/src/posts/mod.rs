//! Saved posts: a trait-based store for candidates the user keeps.
//!
//! `PgPostStore` talks to the managed PostgreSQL database.
//! `MemoryPostStore` keeps posts in process when no database is configured.
//!
//! `AppState` holds an `Arc<dyn PostStore>`, chosen at startup via `DATABASE_URL`.

pub mod handlers;
pub mod postgres;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::post::SavedPost;

pub use postgres::PgPostStore;

/// Insert, newest-first listing and delete-by-id. Nothing else.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Stores `text` as a new post; the store assigns id and timestamp.
    async fn insert(&self, text: &str) -> Result<SavedPost, AppError>;

    /// All posts, newest first.
    async fn list(&self) -> Result<Vec<SavedPost>, AppError>;

    /// Returns `false` when no post had this id.
    async fn delete(&self, id: Uuid) -> Result<bool, AppError>;
}

/// Validates post text before it reaches a store.
pub fn validate_post_text(text: &str) -> Result<&str, AppError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation("Text is required".to_string()));
    }
    Ok(trimmed)
}

// ────────────────────────────────────────────────────────────────────────────
// In-process backend
// ────────────────────────────────────────────────────────────────────────────

/// Posts held newest-first in memory. Lost on restart.
#[derive(Default)]
pub struct MemoryPostStore {
    posts: RwLock<Vec<SavedPost>>,
}

impl MemoryPostStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PostStore for MemoryPostStore {
    async fn insert(&self, text: &str) -> Result<SavedPost, AppError> {
        let post = SavedPost {
            id: Uuid::new_v4(),
            text: text.to_string(),
            created_at: Utc::now(),
        };
        self.posts.write().await.insert(0, post.clone());
        Ok(post)
    }

    async fn list(&self) -> Result<Vec<SavedPost>, AppError> {
        Ok(self.posts.read().await.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let mut posts = self.posts.write().await;
        let before = posts.len();
        posts.retain(|p| p.id != id);
        Ok(posts.len() != before)
    }
}
