/**
 * Responsibility
 * - What the repo layer tells the layers above it
 * - `NotFound` is the repo's own signal; services translate it where it matters
 */
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("comment not found")]
    NotFound,
    #[error("db error")]
    Db(#[from] sqlx::Error),
}

pub type RepoResult<T> = Result<T, RepoError>;
