//! User records and list payloads. `User` is the canonical superset schema;
//! endpoints that return partial projections simply leave the extra fields
//! unset.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SocialNetwork {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub logo_url: Option<String>,
}

/// Lightweight group embedded inside a user record.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GroupRef {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub group_img_url: Option<String>,
}

/// Canonical user record. `role_id` is the sole authorization signal the
/// client consumes; everything else is read-mostly profile data owned by the
/// backend.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub role_id: Option<i64>,
    #[serde(default)]
    pub birthdate: Option<String>,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub photo_status: Option<String>,
    #[serde(default)]
    pub account_status: Option<String>,
    #[serde(default)]
    pub rejection_reason: Option<String>,
    #[serde(default)]
    pub photo_rejection_reason: Option<String>,
    #[serde(default)]
    pub group_id: Option<i64>,
    #[serde(default)]
    pub group: Option<GroupRef>,
    #[serde(default)]
    pub social_network_id: Option<i64>,
    #[serde(default)]
    pub social_network: Option<SocialNetwork>,
    #[serde(default)]
    pub banned_at: Option<String>,
    #[serde(default)]
    pub ban_reason: Option<String>,
    #[serde(default)]
    pub banned_by: Option<i64>,
    #[serde(default)]
    pub last_seen: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Server-side filter request for the per-tab user list.
#[derive(Clone, Debug, Serialize)]
pub struct UsersByTabParams {
    pub tab: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl UsersByTabParams {
    #[must_use]
    pub fn new(tab: u32) -> Self {
        Self {
            tab,
            per_page: None,
            page: None,
            search: None,
        }
    }
}

/// Paginated page of users returned by the by-tab endpoint.
#[derive(Clone, Debug, Deserialize)]
pub struct UsersByTabPage {
    pub data: Vec<User>,
    #[serde(default)]
    pub current_page: Option<u32>,
    #[serde(default)]
    pub last_page: Option<u32>,
    #[serde(default)]
    pub per_page: Option<u32>,
    #[serde(default)]
    pub total: Option<u64>,
}

/// Profile fields a member may edit for themselves.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthdate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social_network_id: Option<i64>,
}

/// Account fields an administrator may change on behalf of a user.
#[derive(Clone, Debug, Default, Serialize)]
pub struct AdminUserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}
