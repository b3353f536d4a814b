use async_trait::async_trait;
use chrono::{Duration, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::repos::comment_repo::{CommentRepo, CommentRow, CommentUpdate, NewComment};
use crate::repos::error::{RepoError, RepoResult};

/// Process-local comment storage.
///
/// Used when no DATABASE_URL is configured (development) and as the test double.
/// `list` orders by `created_at` descending, ties broken by ascending id, which is
/// the `ORDER BY created_at DESC, id` of the PostgreSQL backend. `create` keeps
/// `created_at` strictly increasing so insertion order and timestamp order agree.
#[derive(Debug, Default)]
pub struct InMemoryCommentRepo {
    rows: RwLock<Vec<CommentRow>>,
}

impl InMemoryCommentRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CommentRepo for InMemoryCommentRepo {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn list(&self, video_id: &str, limit: u32, skip: u32) -> RepoResult<Vec<CommentRow>> {
        let rows = self.rows.read().await;

        let mut matching: Vec<&CommentRow> = rows
            .iter()
            .filter(|row| video_id.is_empty() || row.video_id == video_id)
            .collect();
        matching.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| a.id.cmp(&b.id))
        });

        Ok(matching
            .into_iter()
            .skip(skip as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn create(&self, comment: NewComment) -> RepoResult<Uuid> {
        let mut rows = self.rows.write().await;

        // Never behind the previous row, even if the clock stalls or steps back.
        let mut now = Utc::now();
        if let Some(last) = rows.last()
            && now <= last.created_at
        {
            now = last.created_at + Duration::microseconds(1);
        }

        let mut id = Uuid::new_v4();
        while rows.iter().any(|row| row.id == id) {
            id = Uuid::new_v4();
        }

        rows.push(CommentRow {
            id,
            video_id: comment.video_id,
            content: comment.content,
            created_at: now,
            updated_at: now,
        });

        Ok(id)
    }

    async fn update(&self, comment: CommentUpdate) -> RepoResult<()> {
        let mut rows = self.rows.write().await;
        let row = rows
            .iter_mut()
            .find(|row| row.id == comment.id)
            .ok_or(RepoError::NotFound)?;

        row.content = comment.content;
        row.updated_at = Utc::now();
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let mut rows = self.rows.write().await;
        let pos = rows
            .iter()
            .position(|row| row.id == id)
            .ok_or(RepoError::NotFound)?;

        rows.remove(pos);
        Ok(())
    }
}
