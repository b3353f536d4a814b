/*
 * Responsibility
 * - Request handling core (comment_service) and its helpers
 */
pub mod cache;
pub mod comment_service;
pub mod id_codec;

pub use comment_service::{CommentError, CommentService};
