/*
 * Responsibility
 * - URL layout of the comment RPC surface: POST /comment.v1.Comment/<Operation>
 * - Nested under /rpc by app.rs
 */
use axum::{Router, routing::post};

use crate::state::AppState;

use crate::api::v1::handlers::{
    comments::{create_comment, delete_comment, list_comment, update_comment},
    health::healthz,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/comment.v1.Comment/Healthz", post(healthz))
        .route("/comment.v1.Comment/ListComment", post(list_comment))
        .route("/comment.v1.Comment/CreateComment", post(create_comment))
        .route("/comment.v1.Comment/UpdateComment", post(update_comment))
        .route("/comment.v1.Comment/DeleteComment", post(delete_comment))
}
