/*
 * Responsibility
 * - Shared context handed to every handler (AppState)
 * - Clone is cheap (CommentService holds an Arc)
 */
use crate::services::CommentService;

#[derive(Clone)]
pub struct AppState {
    pub comments: CommentService,
}

impl AppState {
    pub fn new(comments: CommentService) -> Self {
        Self { comments }
    }
}
