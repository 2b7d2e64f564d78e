//! Client wrappers for user endpoints: the REST-style resource operations
//! plus the admin moderation commands, which are command-style POSTs keyed by
//! `user_id`. No business logic lives here; callers refetch after mutations.

use crate::{
    api::ApiClient,
    errors::AppError,
    features::users::types::{
        AdminUserUpdate, ProfileUpdate, User, UsersByTabPage, UsersByTabParams,
    },
};
use serde_json::json;

/// Fetches every user.
pub async fn all(api: &ApiClient) -> Result<Vec<User>, AppError> {
    api.get_json("/api/users").await
}

/// Fetches users seen within the last `minutes` minutes.
pub async fn connected(api: &ApiClient, minutes: u32) -> Result<Vec<User>, AppError> {
    api.get_json_with_query("/api/users/connected", &[("minutes", minutes)])
        .await
}

/// Fetches a single user by id.
pub async fn show(api: &ApiClient, id: i64) -> Result<User, AppError> {
    api.get_json(&format!("/api/users/{id}")).await
}

/// Updates a user record by id.
pub async fn update(api: &ApiClient, id: i64, fields: &AdminUserUpdate) -> Result<User, AppError> {
    api.put_json(&format!("/api/users/{id}"), fields).await
}

/// Updates the authenticated user's own profile.
pub async fn update_profile(api: &ApiClient, fields: &ProfileUpdate) -> Result<User, AppError> {
    api.put_json("/api/users/profile", fields).await
}

/// Deletes a user record by id.
pub async fn destroy(api: &ApiClient, id: i64) -> Result<(), AppError> {
    api.delete_empty(&format!("/api/users/{id}")).await
}

/// Fetches one server-filtered, paginated tab of the user list.
pub async fn by_tab(api: &ApiClient, params: &UsersByTabParams) -> Result<UsersByTabPage, AppError> {
    api.post_json("/api/users/by-tab", params).await
}

/// Approves a user's pending photo.
pub async fn approve_photo(api: &ApiClient, user_id: i64) -> Result<(), AppError> {
    api.post_json_empty("/api/users/approve-photo", &json!({ "user_id": user_id }))
        .await
}

/// Rejects a user's pending photo with a reason.
pub async fn reject_photo(api: &ApiClient, user_id: i64, reason: &str) -> Result<(), AppError> {
    api.post_json_empty(
        "/api/users/reject-photo",
        &json!({ "user_id": user_id, "reason": reason }),
    )
    .await
}

/// Approves a pending account.
pub async fn approve_account(api: &ApiClient, user_id: i64) -> Result<(), AppError> {
    api.post_json_empty("/api/users/approve-account", &json!({ "user_id": user_id }))
        .await
}

/// Rejects a pending account with a reason.
pub async fn reject_account(api: &ApiClient, user_id: i64, reason: &str) -> Result<(), AppError> {
    api.post_json_empty(
        "/api/users/reject-account",
        &json!({ "user_id": user_id, "reason": reason }),
    )
    .await
}

/// Command-style account edit used by the admin screens.
pub async fn admin_update(
    api: &ApiClient,
    user_id: i64,
    fields: &AdminUserUpdate,
) -> Result<(), AppError> {
    let mut body = serde_json::to_value(fields)
        .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;
    body["user_id"] = json!(user_id);
    api.post_json_empty("/api/users/update", &body).await
}

/// Command-style account removal used by the admin screens.
pub async fn admin_delete(api: &ApiClient, user_id: i64) -> Result<(), AppError> {
    api.post_json_empty("/api/users/delete", &json!({ "user_id": user_id }))
        .await
}
