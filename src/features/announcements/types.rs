use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Announcement record. `is_video` arrives as either a boolean or a 0/1
/// numeric flag depending on the backend serializer.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Announcement {
    pub id: i64,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "flexible_bool")]
    pub is_video: Option<bool>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
pub struct ListAnnouncements {
    pub status: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct AnnouncementDraft {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_video: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

fn flexible_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Bool(flag)) => Ok(Some(flag)),
        Some(Value::Number(number)) => Ok(Some(number.as_i64().unwrap_or(0) != 0)),
        Some(other) => Err(de::Error::custom(format!(
            "expected bool or number, got {other}"
        ))),
    }
}
