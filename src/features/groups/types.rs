use crate::features::users::types::User;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Group {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub group_img_url: Option<String>,
    #[serde(default)]
    pub users: Option<Vec<User>>,
    #[serde(default)]
    pub users_count: Option<u64>,
}

/// Full roster snapshot returned by the composite all-groups endpoint.
#[derive(Clone, Debug, Deserialize)]
pub struct AllGroups {
    pub users_without_group: Vec<User>,
    pub users_banned: Vec<User>,
    pub groups_with_users: Vec<Group>,
}

#[derive(Clone, Debug, Serialize)]
pub struct CreateGroup {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_img_url: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct UpdateGroup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_img_url: Option<String>,
}
