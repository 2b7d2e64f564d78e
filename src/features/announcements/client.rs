//! Client wrappers for announcements. The backend exposes these as
//! command-style POSTs (listing included) except for the PATCH update.

use crate::{
    api::ApiClient,
    errors::AppError,
    features::announcements::types::{Announcement, AnnouncementDraft, ListAnnouncements},
};
use serde_json::json;

/// Fetches announcements filtered by status.
pub async fn list(api: &ApiClient, status: &str) -> Result<Vec<Announcement>, AppError> {
    let params = ListAnnouncements {
        status: status.to_string(),
    };
    api.post_json("/api/announcements", &params).await
}

/// Fetches a single announcement.
pub async fn show(api: &ApiClient, id: i64) -> Result<Announcement, AppError> {
    api.post_json("/api/announcements/show", &json!({ "id": id }))
        .await
}

/// Creates an announcement.
pub async fn store(api: &ApiClient, draft: &AnnouncementDraft) -> Result<Announcement, AppError> {
    api.post_json("/api/announcements/store", draft).await
}

/// Updates an existing announcement.
pub async fn update(api: &ApiClient, announcement: &Announcement) -> Result<Announcement, AppError> {
    api.patch_json("/api/announcements/update", announcement)
        .await
}

/// Deletes an announcement.
pub async fn destroy(api: &ApiClient, id: i64) -> Result<(), AppError> {
    api.post_json_empty("/api/announcements/destroy", &json!({ "id": id }))
        .await
}
