/*
 * Responsibility
 * - Decode the JSON body of an RPC call into its request message
 * - Turn decoding failures into AppError (INVALID_REQUEST) instead of axum's plain-text rejection
 */
use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

#[derive(Debug, Clone, Copy, Default)]
pub struct RpcRequest<T>(pub T);

impl<S, T> FromRequest<S> for RpcRequest<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::bad_request("INVALID_REQUEST", rejection.body_text()))?;
        Ok(Self(value))
    }
}
