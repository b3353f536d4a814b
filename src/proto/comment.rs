/*
 * Responsibility
 * - Request/response messages of comment.v1.Comment
 * - Missing fields decode to their zero value (empty string / 0)
 */
use serde::{Deserialize, Serialize};

// No fields and never decoded: the Healthz handler does not read the body.
#[derive(Debug, Default)]
pub struct HealthzRequest {}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthzResponse {
    pub status: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ListCommentRequest {
    // Empty => every video
    pub video_id: String,
    pub limit: u32,
    pub skip: u32,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListCommentResponse {
    pub comments: Vec<CommentInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommentInfo {
    pub id: String,
    pub video_id: String,
    pub content: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateCommentRequest {
    pub video_id: String,
    pub content: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateCommentResponse {
    pub id: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpdateCommentRequest {
    pub id: String,
    pub content: String,
}

#[derive(Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateCommentResponse {}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DeleteCommentRequest {
    pub id: String,
}

#[derive(Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeleteCommentResponse {}
