//! Client wrappers for the registration-review queue. Approval carries the
//! photo decision and an optional initial group assignment in one command.

use crate::{
    api::ApiClient,
    errors::AppError,
    features::{registrations::types::PhotoDecision, users::types::User},
};
use serde_json::{json, Value};

/// Fetches registrations awaiting review.
pub async fn pending(api: &ApiClient) -> Result<Vec<User>, AppError> {
    api.get_json("/api/registrations/pending").await
}

/// Approves a registration, deciding the photo and optionally assigning a
/// group in the same call.
pub async fn approve(
    api: &ApiClient,
    user_id: i64,
    photo_decision: PhotoDecision,
    group_id: Option<i64>,
) -> Result<(), AppError> {
    api.post_json_empty(
        &format!("/api/registrations/{user_id}/approve"),
        &json!({ "photo_decision": photo_decision, "group_id": group_id }),
    )
    .await
}

/// Rejects a registration, optionally with a reason.
pub async fn reject(api: &ApiClient, user_id: i64, reason: Option<&str>) -> Result<(), AppError> {
    api.post_json_empty(
        &format!("/api/registrations/{user_id}/reject"),
        &json!({ "reason": reason }),
    )
    .await
}

/// Fetches registration-review counters.
pub async fn stats(api: &ApiClient) -> Result<Value, AppError> {
    api.get_json("/api/registrations/stats").await
}
