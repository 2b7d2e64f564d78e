//! Client wrappers for session endpoints. Login must be preceded by the CSRF
//! bootstrap call so the backend issues the `XSRF-TOKEN` cookie; the session
//! store sequences that, not this module.

use crate::{
    api::ApiClient,
    errors::AppError,
    features::{
        auth::types::{CreateTokenRequest, LoginRequest, RegisterRequest, TokenResponse},
        users::types::User,
    },
};
use secrecy::{ExposeSecret, SecretString};
use serde_json::{json, Value};

/// Asks the backend to (re)issue the CSRF cookie. Idempotent; safe to call on
/// every login attempt.
pub async fn csrf_cookie(api: &ApiClient) -> Result<(), AppError> {
    api.get_empty("/sanctum/csrf-cookie").await
}

/// Submits credentials and returns the authenticated user. The backend sets
/// the session cookie on success.
pub async fn login(api: &ApiClient, email: &str, password: &SecretString) -> Result<User, AppError> {
    let request = LoginRequest {
        email: email.to_string(),
        password: password.expose_secret().to_string(),
    };
    api.post_json("/login", &request).await
}

/// Registers a new account pending review.
pub async fn register(api: &ApiClient, request: &RegisterRequest) -> Result<User, AppError> {
    api.post_json("/register", request).await
}

/// Clears the server-side session. Local state cleanup is the caller's job
/// and must happen even when this call fails.
pub async fn logout(api: &ApiClient) -> Result<(), AppError> {
    api.post_empty("/logout").await
}

/// Fetches the authenticated user, failing with 401 when no session exists.
pub async fn me(api: &ApiClient) -> Result<User, AppError> {
    api.get_json("/api/users/me").await
}

/// Replaces the authenticated user's photo, resetting it to pending review.
pub async fn update_photo(api: &ApiClient, photo_url: &str) -> Result<(), AppError> {
    api.post_json_empty("/api/users/photo", &json!({ "photo_url": photo_url }))
        .await
}

/// Mints a named personal access token for API use.
pub async fn create_token(
    api: &ApiClient,
    email: &str,
    password: &SecretString,
    token_name: &str,
) -> Result<TokenResponse, AppError> {
    let request = CreateTokenRequest {
        email: email.to_string(),
        password: password.expose_secret().to_string(),
        token_name: token_name.to_string(),
    };
    api.post_json("/api/tokens/create", &request).await
}

/// Unauthenticated backend status probe.
pub async fn status(api: &ApiClient) -> Result<Value, AppError> {
    api.get_json("/api/status").await
}
