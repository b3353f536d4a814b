use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::repos::comment_repo::{CommentRepo, CommentRow, CommentUpdate, NewComment};
use crate::repos::error::{RepoError, RepoResult};

/// PostgreSQL-backed comment storage.
///
/// Notes:
/// - The schema is assumed to have at least these columns:
///   - comments.id (uuid, primary key)
///   - comments.video_id (text, indexed)
///   - comments.content (text)
///   - comments.created_at (timestamptz)
///   - comments.updated_at (timestamptz)
/// - Ids are generated here (v4), not by the database.
#[derive(Clone, Debug)]
pub struct PgCommentRepo {
    pool: PgPool,
}

impl PgCommentRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepo for PgCommentRepo {
    fn backend_name(&self) -> &'static str {
        "postgres"
    }

    async fn list(&self, video_id: &str, limit: u32, skip: u32) -> RepoResult<Vec<CommentRow>> {
        // An empty video_id disables the filter.
        let rows = sqlx::query_as::<_, CommentRow>(
            r#"
            SELECT id, video_id, content, created_at, updated_at
            FROM comments
            WHERE ($1 = '' OR video_id = $1)
            ORDER BY created_at DESC, id ASC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(video_id)
        .bind(i64::from(limit))
        .bind(i64::from(skip))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn create(&self, comment: NewComment) -> RepoResult<Uuid> {
        let now = Utc::now();

        let id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO comments (id, video_id, content, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $4)
            RETURNING id
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&comment.video_id)
        .bind(&comment.content)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn update(&self, comment: CommentUpdate) -> RepoResult<()> {
        let done = sqlx::query(
            r#"
            UPDATE comments
            SET content = $2,
                updated_at = $3
            WHERE id = $1
            "#,
        )
        .bind(comment.id)
        .bind(&comment.content)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        if done.rows_affected() == 0 {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let done = sqlx::query(
            r#"
            DELETE FROM comments
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        if done.rows_affected() == 0 {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}
