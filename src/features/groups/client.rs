//! Client wrappers for group CRUD and roster commands. Membership is
//! backend-authoritative: assign/remove/unban are fire-and-forget commands
//! and callers refetch the roster afterwards instead of merging locally.

use crate::{
    api::ApiClient,
    errors::AppError,
    features::{
        groups::types::{AllGroups, CreateGroup, Group, UpdateGroup},
        users::types::User,
    },
};
use serde_json::json;

/// Fetches all groups.
pub async fn all(api: &ApiClient) -> Result<Vec<Group>, AppError> {
    api.get_json("/api/groups").await
}

/// Fetches the composite roster snapshot: groups with members, members
/// without a group, and banned members.
pub async fn all_groups(api: &ApiClient) -> Result<AllGroups, AppError> {
    api.get_json("/api/groups/all-groups").await
}

/// Creates a group.
pub async fn create(api: &ApiClient, group: &CreateGroup) -> Result<Group, AppError> {
    api.post_json("/api/groups", group).await
}

/// Fetches a single group by id.
pub async fn show(api: &ApiClient, id: i64) -> Result<Group, AppError> {
    api.get_json(&format!("/api/groups/{id}")).await
}

/// Updates a group.
pub async fn update(api: &ApiClient, id: i64, fields: &UpdateGroup) -> Result<Group, AppError> {
    api.put_json(&format!("/api/groups/{id}"), fields).await
}

/// Deletes a group.
pub async fn destroy(api: &ApiClient, id: i64) -> Result<(), AppError> {
    api.delete_empty(&format!("/api/groups/{id}")).await
}

/// Assigns a user to a group.
pub async fn assign_user(api: &ApiClient, group_id: i64, user_id: i64) -> Result<(), AppError> {
    api.post_json_empty(
        &format!("/api/groups/{group_id}/assign"),
        &json!({ "user_id": user_id }),
    )
    .await
}

/// Removes a user from a group, banning them with the given reason.
pub async fn remove_user(
    api: &ApiClient,
    group_id: i64,
    user_id: i64,
    ban_reason: &str,
) -> Result<(), AppError> {
    api.post_json_empty(
        &format!("/api/groups/{group_id}/remove"),
        &json!({ "user_id": user_id, "ban_reason": ban_reason }),
    )
    .await
}

/// Fetches users not assigned to any group.
pub async fn users_without_group(api: &ApiClient) -> Result<Vec<User>, AppError> {
    api.get_json("/api/groups/users/without-group").await
}

/// Fetches banned users.
pub async fn banned_users(api: &ApiClient) -> Result<Vec<User>, AppError> {
    api.get_json("/api/groups/users/banned").await
}

/// Lifts a user's ban.
pub async fn unban_user(api: &ApiClient, user_id: i64) -> Result<(), AppError> {
    api.post_json_empty("/api/groups/users/unban", &json!({ "user_id": user_id }))
        .await
}

/// Fetches the roster detail view of a single user.
pub async fn user_detail(api: &ApiClient, id: i64) -> Result<User, AppError> {
    api.get_json(&format!("/api/groups/user-detail/{id}")).await
}
