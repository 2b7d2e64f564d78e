//! Client wrappers for questionaries (simple polls). All operations are
//! command-style POSTs; votes are fire-and-forget followed by a stats
//! refetch on the caller's side.

use crate::{
    api::ApiClient,
    errors::AppError,
    features::{
        questionaries::types::{Questionary, QuestionaryDraft, VoteRequest},
        users::types::User,
    },
};
use serde_json::json;

/// Fetches questionaries filtered by status.
pub async fn list(api: &ApiClient, status: &str) -> Result<Vec<Questionary>, AppError> {
    api.post_json("/api/questionaries", &json!({ "status": status }))
        .await
}

/// Fetches a single questionary.
pub async fn show(api: &ApiClient, id: i64) -> Result<Questionary, AppError> {
    api.post_json("/api/questionaries/show", &json!({ "id": id }))
        .await
}

/// Fetches questionaries with vote counters and the given user's own vote.
pub async fn show_with_stats(
    api: &ApiClient,
    status: &str,
    user_id: i64,
) -> Result<Vec<Questionary>, AppError> {
    api.post_json(
        "/api/questionaries/show-with-stats",
        &json!({ "status": status, "user_id": user_id }),
    )
    .await
}

/// Creates a questionary.
pub async fn store(api: &ApiClient, draft: &QuestionaryDraft) -> Result<Questionary, AppError> {
    api.post_json("/api/questionaries/store", draft).await
}

/// Updates an existing questionary and its questions.
pub async fn update(api: &ApiClient, questionary: &Questionary) -> Result<Questionary, AppError> {
    api.post_json("/api/questionaries/update", questionary).await
}

/// Deletes a questionary.
pub async fn destroy(api: &ApiClient, id: i64) -> Result<(), AppError> {
    api.post_json_empty("/api/questionaries/destroy", &json!({ "id": id }))
        .await
}

/// Records a vote for one question.
pub async fn vote(api: &ApiClient, request: &VoteRequest) -> Result<(), AppError> {
    api.post_json_empty("/api/questionaries/response/store", request)
        .await
}

/// Fetches the users who voted for a given question.
pub async fn users_by_option(api: &ApiClient, question_id: i64) -> Result<Vec<User>, AppError> {
    api.post_json(
        "/api/questionaries/users-by-option",
        &json!({ "question_id": question_id }),
    )
    .await
}
