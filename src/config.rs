//! Runtime configuration for the client. A single environment variable
//! selects the backend base URL; everything else (cookies, CSRF, paths) is
//! derived from it. Configuration values are public; do not store secrets
//! here.

use crate::errors::AppError;
use std::env;
use url::Url;

/// Environment variable naming the backend base URL.
pub const API_BASE_URL_VAR: &str = "COMUNIDAD_API_BASE_URL";

/// Client configuration derived from the environment or given explicitly.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_base_url: String,
}

impl AppConfig {
    /// Builds a config from an explicit base URL.
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
        }
    }

    /// Loads the base URL from `COMUNIDAD_API_BASE_URL`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` when the variable is unset, empty, or not a
    /// valid absolute URL.
    pub fn from_env() -> Result<Self, AppError> {
        let raw = env::var(API_BASE_URL_VAR)
            .map_err(|_| AppError::Config(format!("{API_BASE_URL_VAR} is not set")))?;

        let base = normalize_base_url(&raw)
            .ok_or_else(|| AppError::Config(format!("{API_BASE_URL_VAR} is empty")))?;

        Url::parse(&base)
            .map_err(|err| AppError::Config(format!("{API_BASE_URL_VAR} is not a valid URL: {err}")))?;

        Ok(Self { api_base_url: base })
    }
}

/// Trims whitespace and trailing slashes, rejecting empty values.
fn normalize_base_url(value: &str) -> Option<String> {
    let trimmed = value.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
