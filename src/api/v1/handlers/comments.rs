/*
 * Responsibility
 * - Comment RPC handlers
 * - Decode the request message, hand it to CommentService, encode the reply
 * - No logic here; CommentService owns validation and error translation
 */
use axum::{Json, extract::State};

use crate::{
    api::v1::extractors::RpcRequest,
    error::AppError,
    proto::comment::{
        CreateCommentRequest, CreateCommentResponse, DeleteCommentRequest, DeleteCommentResponse,
        ListCommentRequest, ListCommentResponse, UpdateCommentRequest, UpdateCommentResponse,
    },
    state::AppState,
};

pub async fn list_comment(
    State(state): State<AppState>,
    RpcRequest(req): RpcRequest<ListCommentRequest>,
) -> Result<Json<ListCommentResponse>, AppError> {
    Ok(Json(state.comments.list_comment(req).await?))
}

pub async fn create_comment(
    State(state): State<AppState>,
    RpcRequest(req): RpcRequest<CreateCommentRequest>,
) -> Result<Json<CreateCommentResponse>, AppError> {
    Ok(Json(state.comments.create_comment(req).await?))
}

pub async fn update_comment(
    State(state): State<AppState>,
    RpcRequest(req): RpcRequest<UpdateCommentRequest>,
) -> Result<Json<UpdateCommentResponse>, AppError> {
    Ok(Json(state.comments.update_comment(req).await?))
}

pub async fn delete_comment(
    State(state): State<AppState>,
    RpcRequest(req): RpcRequest<DeleteCommentRequest>,
) -> Result<Json<DeleteCommentResponse>, AppError> {
    Ok(Json(state.comments.delete_comment(req).await?))
}
