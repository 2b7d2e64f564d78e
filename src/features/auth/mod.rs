//! Auth feature covering the CSRF bootstrap, credential login, registration,
//! and session probing. The backend tracks the session in an opaque cookie;
//! these wrappers only move credentials and must never log them.

pub mod client;
pub mod types;
