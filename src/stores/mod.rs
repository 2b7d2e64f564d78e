//! Per-feature state containers. Each store caches the last fetched result
//! plus loading/error flags and goes through the service wrappers for all
//! I/O. Roster and moderation mutations follow a "command then reload"
//! contract: the backend does not guarantee read-after-write, so stores
//! always refetch instead of merging optimistically.

pub mod announcements;
pub mod groups;
pub mod profile;
pub mod users;

use crate::errors::AppError;

/// Discriminated result of a store action; callers branch on `success`.
#[derive(Clone, Debug)]
pub struct StoreOutcome {
    pub success: bool,
    pub error: Option<String>,
}

impl StoreOutcome {
    #[must_use]
    pub(crate) fn succeeded() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    #[must_use]
    pub(crate) fn failed(message: String) -> Self {
        Self {
            success: false,
            error: Some(message),
        }
    }
}

/// Converts an adapter failure into a user-facing message, preferring the
/// backend-supplied one.
pub(crate) fn error_message(err: &AppError, fallback: &str) -> String {
    err.backend_message().unwrap_or(fallback).to_string()
}
