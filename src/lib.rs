//! Client library for the Comunidad community platform API: cookie-based
//! sessions with CSRF echo, a session store with role-derived predicates, a
//! navigation guard, per-resource service wrappers, and small state
//! containers for the admin screens.
//!
//! The backend owns all data; this crate holds read-mostly caches and never
//! retries, merges optimistically, or redirects inside the HTTP layer.

pub mod api;
pub mod config;
pub mod cookies;
pub mod errors;
pub mod features;
pub mod guard;
pub mod roles;
pub mod routes;
pub mod session;
pub mod stores;

pub use api::ApiClient;
pub use config::AppConfig;
pub use cookies::{CookieJar, XSRF_COOKIE};
pub use errors::AppError;
pub use features::users::types::User;
pub use guard::{before_each, GuardDecision};
pub use roles::Role;
pub use routes::{RouteName, RouteRequirement};
pub use session::{ActionOutcome, SessionStore};
