//! Client wrappers for personal access token management. Minting lives in
//! the auth feature because it takes credentials.

use crate::{api::ApiClient, errors::AppError};
use serde_json::Value;

/// Lists the caller's tokens.
pub async fn list(api: &ApiClient) -> Result<Value, AppError> {
    api.get_json("/api/tokens").await
}

/// Revokes the current token.
pub async fn revoke(api: &ApiClient) -> Result<(), AppError> {
    api.post_empty("/api/tokens/revoke").await
}

/// Revokes every token belonging to the caller.
pub async fn revoke_all(api: &ApiClient) -> Result<(), AppError> {
    api.post_empty("/api/tokens/revoke-all").await
}
