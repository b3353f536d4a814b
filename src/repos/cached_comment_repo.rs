//! Read-through cache in front of any `CommentRepo`.
//!
//! List pages are cached under a key that embeds a generation counter. Every
//! successful write bumps the counter, so pages cached before the write are never
//! read again and simply expire.
//!
//! The cache is fail-open: cache errors are logged and the inner repo answers.
//! A write whose generation bump failed leaves pages that still look current, so
//! such a failure is remembered and `list` stays off the cache until a later bump
//! goes through.
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::repos::comment_repo::{CommentRepo, CommentRow, CommentUpdate, NewComment};
use crate::repos::error::RepoResult;
use crate::services::cache::{CacheClient, CacheError, CacheResult};

const GENERATION_KEY: &str = "comments:generation";

fn list_key(generation: i64, video_id: &str, limit: u32, skip: u32) -> String {
    format!("comments:list:{generation}:{video_id}:{limit}:{skip}")
}

pub struct CachedCommentRepo<C: CacheClient> {
    inner: Arc<dyn CommentRepo>,
    cache: C,
    ttl: Duration,
    // Writes whose generation bump has not reached the cache yet.
    missed_bumps: AtomicU64,
}

impl<C: CacheClient> CachedCommentRepo<C> {
    pub fn new(inner: Arc<dyn CommentRepo>, cache: C, ttl: Duration) -> Self {
        Self {
            inner,
            cache,
            ttl,
            missed_bumps: AtomicU64::new(0),
        }
    }

    async fn generation(&self) -> CacheResult<i64> {
        match self.cache.get_string(GENERATION_KEY).await? {
            Some(raw) => raw
                .parse::<i64>()
                .map_err(|e| CacheError::InvalidValue(e.to_string())),
            None => Ok(0),
        }
    }

    async fn invalidate(&self) {
        if let Err(err) = self.cache.incr(GENERATION_KEY).await {
            self.missed_bumps.fetch_add(1, Ordering::SeqCst);
            warn!(
                error = %err,
                backend = self.cache.backend_name(),
                "failed to bump comment cache generation, cache reads suspended"
            );
        }
    }

    /// Replay a missed generation bump. `false` means cached pages may be stale.
    async fn catch_up(&self) -> bool {
        let missed = self.missed_bumps.load(Ordering::SeqCst);
        if missed == 0 {
            return true;
        }

        match self.cache.incr(GENERATION_KEY).await {
            Ok(_) => {
                // A failure recorded meanwhile keeps the counter non-zero.
                let _ = self.missed_bumps.compare_exchange(
                    missed,
                    0,
                    Ordering::SeqCst,
                    Ordering::SeqCst,
                );
                debug!(missed, "comment cache generation caught up");
                true
            }
            Err(err) => {
                warn!(error = %err, missed, "comment cache still behind, bypassing cache");
                false
            }
        }
    }

    async fn cached_page(&self, key: &str) -> Option<Vec<CommentRow>> {
        let raw = match self.cache.get_string(key).await {
            Ok(raw) => raw?,
            Err(err) => {
                warn!(error = %err, key, "comment cache read failed");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(rows) => Some(rows),
            Err(err) => {
                warn!(error = %err, key, "dropping undecodable comment cache entry");
                None
            }
        }
    }

    async fn store_page(&self, key: &str, rows: &[CommentRow]) {
        let raw = match serde_json::to_string(rows) {
            Ok(raw) => raw,
            Err(err) => {
                warn!(error = %err, key, "failed to encode comment page for cache");
                return;
            }
        };

        if let Err(err) = self.cache.set_with_ttl(key, &raw, self.ttl).await {
            warn!(error = %err, key, "comment cache write failed");
        }
    }
}

#[async_trait]
impl<C: CacheClient> CommentRepo for CachedCommentRepo<C> {
    fn backend_name(&self) -> &'static str {
        self.inner.backend_name()
    }

    async fn list(&self, video_id: &str, limit: u32, skip: u32) -> RepoResult<Vec<CommentRow>> {
        if !self.catch_up().await {
            return self.inner.list(video_id, limit, skip).await;
        }

        let key = match self.generation().await {
            Ok(generation) => Some(list_key(generation, video_id, limit, skip)),
            Err(err) => {
                warn!(error = %err, "comment cache generation unavailable, bypassing cache");
                None
            }
        };

        if let Some(key) = &key
            && let Some(rows) = self.cached_page(key).await
        {
            debug!(key, "comment cache hit");
            return Ok(rows);
        }

        let rows = self.inner.list(video_id, limit, skip).await?;

        if let Some(key) = &key {
            self.store_page(key, &rows).await;
        }

        Ok(rows)
    }

    async fn create(&self, comment: NewComment) -> RepoResult<Uuid> {
        let id = self.inner.create(comment).await?;
        self.invalidate().await;
        Ok(id)
    }

    async fn update(&self, comment: CommentUpdate) -> RepoResult<()> {
        self.inner.update(comment).await?;
        self.invalidate().await;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        self.inner.delete(id).await?;
        self.invalidate().await;
        Ok(())
    }
}
