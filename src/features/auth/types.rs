//! Request and response types for auth calls. These payloads carry
//! credentials, so they must never be logged.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
    pub birthdate: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
pub struct CreateTokenRequest {
    pub email: String,
    pub password: String,
    pub token_name: String,
}

/// Personal access token minted by the backend.
#[derive(Clone, Debug, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}
