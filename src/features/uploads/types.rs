use serde::Deserialize;
use std::fmt;

/// Short-lived signature the backend mints for a direct image upload.
#[derive(Clone, Debug, Deserialize)]
pub struct CloudinarySignature {
    pub signature: String,
    pub timestamp: Timestamp,
    pub api_key: String,
    pub cloud_name: String,
    #[serde(default)]
    pub folder: Option<String>,
}

/// The backend serializes the signature timestamp as either a number or a
/// string; the upload form wants it back as text either way.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    Number(i64),
    Text(String),
}

impl fmt::Display for Timestamp {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Timestamp::Number(value) => write!(formatter, "{value}"),
            Timestamp::Text(value) => write!(formatter, "{value}"),
        }
    }
}

/// Upload receipt; only the hosted URL matters to the client.
#[derive(Clone, Debug, Deserialize)]
pub struct UploadedImage {
    pub secure_url: String,
}
