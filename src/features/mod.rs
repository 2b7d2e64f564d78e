//! Domain-level API features. Each module pairs request/response types with
//! stateless client wrappers so stores and callers never touch paths or
//! payload shapes directly.

pub mod announcements;
pub mod auth;
pub mod groups;
pub mod photos;
pub mod questionaries;
pub mod registrations;
pub mod tokens;
pub mod uploads;
pub mod users;
