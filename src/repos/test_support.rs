#![cfg(test)]
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use uuid::Uuid;

use crate::repos::comment_repo::{CommentRepo, CommentRow, CommentUpdate, NewComment};
use crate::repos::error::RepoResult;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RepoCalls {
    pub list: usize,
    pub create: usize,
    pub update: usize,
    pub delete: usize,
}

impl RepoCalls {
    pub fn total(&self) -> usize {
        self.list + self.create + self.update + self.delete
    }
}

// Wraps a repo and counts how often each operation reached it.
pub struct CountingRepo {
    inner: Box<dyn CommentRepo>,
    list: AtomicUsize,
    create: AtomicUsize,
    update: AtomicUsize,
    delete: AtomicUsize,
}

impl CountingRepo {
    pub fn new(inner: impl CommentRepo + 'static) -> Self {
        Self {
            inner: Box::new(inner),
            list: AtomicUsize::new(0),
            create: AtomicUsize::new(0),
            update: AtomicUsize::new(0),
            delete: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> RepoCalls {
        RepoCalls {
            list: self.list.load(Ordering::SeqCst),
            create: self.create.load(Ordering::SeqCst),
            update: self.update.load(Ordering::SeqCst),
            delete: self.delete.load(Ordering::SeqCst),
        }
    }
}

#[async_trait]
impl CommentRepo for CountingRepo {
    fn backend_name(&self) -> &'static str {
        self.inner.backend_name()
    }

    async fn list(&self, video_id: &str, limit: u32, skip: u32) -> RepoResult<Vec<CommentRow>> {
        self.list.fetch_add(1, Ordering::SeqCst);
        self.inner.list(video_id, limit, skip).await
    }

    async fn create(&self, comment: NewComment) -> RepoResult<Uuid> {
        self.create.fetch_add(1, Ordering::SeqCst);
        self.inner.create(comment).await
    }

    async fn update(&self, comment: CommentUpdate) -> RepoResult<()> {
        self.update.fetch_add(1, Ordering::SeqCst);
        self.inner.update(comment).await
    }

    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        self.delete.fetch_add(1, Ordering::SeqCst);
        self.inner.delete(id).await
    }
}

// Every call fails as if the database were unreachable.
pub struct FailingRepo;

#[async_trait]
impl CommentRepo for FailingRepo {
    fn backend_name(&self) -> &'static str {
        "failing"
    }

    async fn list(&self, _video_id: &str, _limit: u32, _skip: u32) -> RepoResult<Vec<CommentRow>> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn create(&self, _comment: NewComment) -> RepoResult<Uuid> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn update(&self, _comment: CommentUpdate) -> RepoResult<()> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn delete(&self, _id: Uuid) -> RepoResult<()> {
        Err(sqlx::Error::PoolTimedOut.into())
    }
}

// `list` never completes, as if the query were stuck; writes delegate.
pub struct StalledRepo {
    inner: Box<dyn CommentRepo>,
}

impl StalledRepo {
    pub fn new(inner: impl CommentRepo + 'static) -> Self {
        Self {
            inner: Box::new(inner),
        }
    }
}

#[async_trait]
impl CommentRepo for StalledRepo {
    fn backend_name(&self) -> &'static str {
        "stalled"
    }

    async fn list(&self, _video_id: &str, _limit: u32, _skip: u32) -> RepoResult<Vec<CommentRow>> {
        std::future::pending::<RepoResult<Vec<CommentRow>>>().await
    }

    async fn create(&self, comment: NewComment) -> RepoResult<Uuid> {
        self.inner.create(comment).await
    }

    async fn update(&self, comment: CommentUpdate) -> RepoResult<()> {
        self.inner.update(comment).await
    }

    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        self.inner.delete(id).await
    }
}
