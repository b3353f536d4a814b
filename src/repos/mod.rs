/*
 * Responsibility
 * - Storage-facing side of the service (trait + backends)
 */
pub mod cached_comment_repo;
pub mod comment_repo;
pub mod error;
pub mod memory_comment_repo;
pub mod pg_comment_repo;
#[cfg(test)]
pub mod test_support;

pub use cached_comment_repo::CachedCommentRepo;
pub use comment_repo::{CommentRepo, CommentRow, CommentUpdate, NewComment};
pub use error::RepoError;
pub use memory_comment_repo::InMemoryCommentRepo;
pub use pg_comment_repo::PgCommentRepo;
