//! Comment storage interface.
//!
//! The service only ever talks to `dyn CommentRepo`, so the backend can be swapped
//! (PostgreSQL, in-memory, cached) without touching request handling.
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::repos::error::RepoResult;

/// A persisted comment, as the repository hands it out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct CommentRow {
    pub id: Uuid,
    pub video_id: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A comment that has not been stored yet (the repository assigns the id).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub video_id: String,
    pub content: String,
}

/// Replacement content for an existing comment. `video_id` is never updated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentUpdate {
    pub id: Uuid,
    pub content: String,
}

#[async_trait]
pub trait CommentRepo: Send + Sync {
    // Backend name (for logging).
    fn backend_name(&self) -> &'static str;

    // Comments for `video_id` (all videos when empty), newest first.
    async fn list(&self, video_id: &str, limit: u32, skip: u32) -> RepoResult<Vec<CommentRow>>;

    // Store a new comment and return its freshly assigned id.
    async fn create(&self, comment: NewComment) -> RepoResult<Uuid>;

    // Replace the content of an existing comment.
    //
    // Returns `RepoError::NotFound` if no comment has this id.
    async fn update(&self, comment: CommentUpdate) -> RepoResult<()>;

    // Remove a comment.
    //
    // Returns `RepoError::NotFound` if no comment has this id.
    async fn delete(&self, id: Uuid) -> RepoResult<()>;
}
