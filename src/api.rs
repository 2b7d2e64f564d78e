//! HTTP adapter shared by every service wrapper. One client per backend:
//! cookie-carrying requests against a fixed base URL, the CSRF header
//! injected from the cookie jar on every call, and a predictable timeout.
//! Authentication failures are logged here but always propagated to the
//! caller; redirect decisions belong to the route guard, not this layer.

use crate::{
    config::AppConfig,
    cookies::{CookieJar, XSRF_COOKIE},
    errors::AppError,
};
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE},
    RequestBuilder, Response,
};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error, warn};
use url::Url;

pub(crate) static APP_USER_AGENT: &str =
    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Header echoing the CSRF cookie back to the backend on every request.
pub const CSRF_HEADER: &str = "X-XSRF-TOKEN";

/// Default request timeout applied to all calls.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
/// Maximum number of error body characters surfaced to callers.
const MAX_ERROR_CHARS: usize = 200;

/// Cookie-aware JSON client bound to one backend base URL.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    cookies: CookieJar,
}

impl ApiClient {
    /// Builds a client for the configured backend.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` when the base URL is invalid.
    pub fn new(config: &AppConfig) -> Result<Self, AppError> {
        let origin = Url::parse(&config.api_base_url)
            .map_err(|err| AppError::Config(format!("Invalid API base URL: {err}")))?;
        let cookies = CookieJar::new(origin);

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .user_agent(APP_USER_AGENT)
            .default_headers(headers)
            .cookie_provider(cookies.provider())
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .map_err(|err| AppError::Config(format!("Failed to build HTTP client: {err}")))?;

        Ok(Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            cookies,
        })
    }

    /// Read access to the cookie jar, mainly for CSRF inspection in tests.
    #[must_use]
    pub fn cookies(&self) -> &CookieJar {
        &self.cookies
    }

    /// `GET` returning a parsed JSON body.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        let response = self.execute(path, self.http.get(self.endpoint_url(path))).await?;
        handle_json(response).await
    }

    /// `GET` with query parameters returning a parsed JSON body.
    pub async fn get_json_with_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<T, AppError> {
        let builder = self.http.get(self.endpoint_url(path)).query(query);
        let response = self.execute(path, builder).await?;
        handle_json(response).await
    }

    /// `GET` where the interesting side effect is a cookie, not the body.
    pub async fn get_empty(&self, path: &str) -> Result<(), AppError> {
        self.execute(path, self.http.get(self.endpoint_url(path)))
            .await
            .map(|_| ())
    }

    /// `POST` with a JSON body returning a parsed JSON response.
    pub async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        let builder = self.http.post(self.endpoint_url(path)).body(encode(body)?);
        let response = self.execute(path, builder).await?;
        handle_json(response).await
    }

    /// `POST` with a JSON body where the response body is ignored.
    pub async fn post_json_empty<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), AppError> {
        let builder = self.http.post(self.endpoint_url(path)).body(encode(body)?);
        self.execute(path, builder).await.map(|_| ())
    }

    /// `POST` with an empty body, used to clear a session.
    pub async fn post_empty(&self, path: &str) -> Result<(), AppError> {
        self.execute(path, self.http.post(self.endpoint_url(path)))
            .await
            .map(|_| ())
    }

    /// `PUT` with a JSON body returning a parsed JSON response.
    pub async fn put_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        let builder = self.http.put(self.endpoint_url(path)).body(encode(body)?);
        let response = self.execute(path, builder).await?;
        handle_json(response).await
    }

    /// `PATCH` with a JSON body returning a parsed JSON response.
    pub async fn patch_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        let builder = self.http.patch(self.endpoint_url(path)).body(encode(body)?);
        let response = self.execute(path, builder).await?;
        handle_json(response).await
    }

    /// `DELETE` where the response body is ignored.
    pub async fn delete_empty(&self, path: &str) -> Result<(), AppError> {
        self.execute(path, self.http.delete(self.endpoint_url(path)))
            .await
            .map(|_| ())
    }

    /// Joins the base URL and path without doubling slashes.
    fn endpoint_url(&self, path: &str) -> String {
        let path = path.trim().trim_start_matches('/');
        if self.base_url.is_empty() {
            path.to_string()
        } else {
            format!("{}/{path}", self.base_url)
        }
    }

    /// Attaches the CSRF header when the cookie is present, sends, and maps
    /// non-success statuses into `AppError::Http` after logging diagnostics.
    /// The rejection is always propagated; nothing is retried here.
    async fn execute(&self, path: &str, builder: RequestBuilder) -> Result<Response, AppError> {
        let builder = match self.cookies.get(XSRF_COOKIE) {
            Some(token) => builder.header(CSRF_HEADER, token),
            None => builder,
        };

        debug!(path, "sending request");
        let response = builder.send().await.map_err(map_transport_error)?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        match status.as_u16() {
            401 => warn!(path, "session expired or request unauthenticated"),
            419 => error!(path, "CSRF token missing or mismatched"),
            _ => {}
        }

        let body = response.text().await.unwrap_or_default();
        Err(AppError::Http {
            status: status.as_u16(),
            message: extract_message(&body),
        })
    }
}

/// Encodes a request body up front so serialization failures are reported
/// as such instead of surfacing as transport errors.
fn encode<B: Serialize + ?Sized>(body: &B) -> Result<String, AppError> {
    serde_json::to_string(body)
        .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))
}

/// Maps transport failures into `AppError` variants with timeout detection.
fn map_transport_error(err: reqwest::Error) -> AppError {
    if err.is_timeout() {
        AppError::Timeout("Request timed out. Please try again.".to_string())
    } else {
        AppError::Network(format!("Unable to reach the server: {err}"))
    }
}

/// Parses a JSON response body.
async fn handle_json<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    response
        .json::<T>()
        .await
        .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
}

/// Prefers the backend-supplied `message` field, falling back to the
/// sanitized raw body.
fn extract_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        if let Some(message) = value["message"].as_str() {
            let trimmed = message.trim();
            if !trimmed.is_empty() {
                return trimmed.to_string();
            }
        }
    }

    sanitize_body(body)
}

/// Sanitizes HTTP error bodies for user-facing messages by trimming and
/// truncating.
fn sanitize_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}
