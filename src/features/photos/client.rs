//! Client wrappers for the assistant photo-review queue.

use crate::{api::ApiClient, errors::AppError, features::users::types::User};
use serde_json::{json, Value};

/// Fetches users whose photos await review.
pub async fn pending(api: &ApiClient) -> Result<Vec<User>, AppError> {
    api.get_json("/api/photos/pending").await
}

/// Approves a user's photo.
pub async fn approve(api: &ApiClient, user_id: i64) -> Result<(), AppError> {
    api.post_empty(&format!("/api/photos/{user_id}/approve")).await
}

/// Rejects a user's photo, optionally with a reason.
pub async fn reject(api: &ApiClient, user_id: i64, reason: Option<&str>) -> Result<(), AppError> {
    api.post_json_empty(
        &format!("/api/photos/{user_id}/reject"),
        &json!({ "reason": reason }),
    )
    .await
}

/// Fetches photo-review counters.
pub async fn stats(api: &ApiClient) -> Result<Value, AppError> {
    api.get_json("/api/photos/stats").await
}
