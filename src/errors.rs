use thiserror::Error;

/// Error taxonomy shared by the HTTP adapter, service wrappers, and stores.
/// The adapter never swallows failures; stores convert these into
/// user-facing messages at the action boundary.
#[derive(Clone, Debug, Error)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Timeout: {0}")]
    Timeout(String),
    #[error("Request failed ({status}): {message}")]
    Http { status: u16, message: String },
    #[error("Response error: {0}")]
    Parse(String),
    #[error("Request error: {0}")]
    Serialization(String),
    #[error("Validation error: {0}")]
    Validation(String),
}

impl AppError {
    /// HTTP status code when the failure came from a server response.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Backend-supplied message for HTTP failures, `None` otherwise.
    /// Stores prefer this over their generic fallbacks.
    #[must_use]
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            AppError::Http { message, .. } if !message.is_empty() => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::AppError;

    #[test]
    fn http_errors_expose_status_and_message() {
        let err = AppError::Http {
            status: 401,
            message: "Invalid credentials".to_string(),
        };
        assert_eq!(err.status(), Some(401));
        assert_eq!(err.backend_message(), Some("Invalid credentials"));
        assert_eq!(
            err.to_string(),
            "Request failed (401): Invalid credentials"
        );
    }

    #[test]
    fn non_http_errors_have_no_status() {
        let err = AppError::Network("connection refused".to_string());
        assert_eq!(err.status(), None);
        assert_eq!(err.backend_message(), None);
    }
}
