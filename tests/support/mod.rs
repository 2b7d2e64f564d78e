//! Shared helpers for integration tests: a throwaway axum backend bound to
//! an ephemeral port plus canned user payloads.
#![allow(dead_code)]

use comunidad::{ApiClient, AppConfig, SessionStore};
use axum::Router;
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::net::TcpListener;

/// Serves the router on an ephemeral local port and returns its base URL.
pub async fn spawn_backend(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("read local addr");

    tokio::spawn(async move {
        axum::serve(listener, router.into_make_service())
            .await
            .expect("serve test backend");
    });

    format!("http://{addr}")
}

/// Client pointed at the test backend.
pub fn client(base_url: &str) -> Arc<ApiClient> {
    Arc::new(ApiClient::new(&AppConfig::new(base_url)).expect("build test client"))
}

/// Fresh anonymous session against the test backend.
pub fn session(base_url: &str) -> SessionStore {
    SessionStore::new(client(base_url))
}

/// Minimal user record with the given role id.
pub fn user_json(id: i64, name: &str, role_id: i64) -> Value {
    json!({
        "id": id,
        "name": name,
        "email": format!("{}@comunidad.test", name.to_lowercase()),
        "role_id": role_id,
        "account_status": "active",
    })
}
