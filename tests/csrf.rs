//! CSRF cookie handling end to end: the bootstrap call stores the cookie,
//! every later request echoes it percent-decoded in the `X-XSRF-TOKEN`
//! header, and a 419 rejection propagates to the caller.

mod support;

use anyhow::Result;
use axum::{
    http::{header, HeaderMap, StatusCode},
    routing::get,
    Json, Router,
};
use comunidad::{features::auth, AppError, XSRF_COOKIE};
use serde_json::{json, Value};
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};
use support::{client, spawn_backend};

fn echo_routes(cookie: &'static str) -> Router {
    Router::new()
        .route(
            "/sanctum/csrf-cookie",
            get(move || async move { (StatusCode::NO_CONTENT, [(header::SET_COOKIE, cookie)]) }),
        )
        .route(
            "/api/echo",
            get(|headers: HeaderMap| async move {
                let token = headers
                    .get("x-xsrf-token")
                    .and_then(|value| value.to_str().ok())
                    .map(str::to_string);
                Json(json!({ "token": token }))
            }),
        )
}

#[tokio::test]
async fn bootstrap_cookie_is_echoed_percent_decoded() -> Result<()> {
    let base = spawn_backend(echo_routes("XSRF-TOKEN=abc%3D; Path=/")).await;
    let api = client(&base);

    auth::client::csrf_cookie(&api).await?;
    assert_eq!(api.cookies().get(XSRF_COOKIE).as_deref(), Some("abc="));

    let echoed: Value = api.get_json("/api/echo").await?;
    assert_eq!(echoed["token"], json!("abc="));
    Ok(())
}

#[tokio::test]
async fn requests_without_the_cookie_carry_no_header() -> Result<()> {
    let base = spawn_backend(echo_routes("XSRF-TOKEN=unused; Path=/")).await;
    let api = client(&base);

    // No bootstrap call, so the jar is empty.
    assert_eq!(api.cookies().get(XSRF_COOKIE), None);

    let echoed: Value = api.get_json("/api/echo").await?;
    assert_eq!(echoed["token"], Value::Null);
    Ok(())
}

#[tokio::test]
async fn rebootstrap_rotates_the_stored_token() -> Result<()> {
    let issued = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&issued);
    let router = echo_routes("XSRF-TOKEN=unused; Path=/").route(
        "/sanctum/rotating-csrf-cookie",
        get(move || {
            let counter = Arc::clone(&counter);
            async move {
                let nth = counter.fetch_add(1, Ordering::SeqCst);
                (
                    StatusCode::NO_CONTENT,
                    [(header::SET_COOKIE, format!("XSRF-TOKEN=token-{nth}; Path=/"))],
                )
            }
        }),
    );
    let base = spawn_backend(router).await;
    let api = client(&base);

    api.get_empty("/sanctum/rotating-csrf-cookie").await?;
    assert_eq!(api.cookies().get(XSRF_COOKIE).as_deref(), Some("token-0"));

    // The jar keeps the latest value the backend issued for the same name.
    api.get_empty("/sanctum/rotating-csrf-cookie").await?;
    let echoed: Value = api.get_json("/api/echo").await?;
    assert_eq!(echoed["token"], json!("token-1"));
    Ok(())
}

#[tokio::test]
async fn csrf_rejection_propagates_as_http_419() -> Result<()> {
    let router = Router::new().route(
        "/api/echo",
        get(|| async {
            (
                StatusCode::from_u16(419).expect("status 419"),
                Json(json!({ "message": "CSRF token mismatch." })),
            )
        }),
    );
    let base = spawn_backend(router).await;
    let api = client(&base);

    let err = api
        .get_json::<Value>("/api/echo")
        .await
        .expect_err("419 must propagate");

    assert!(matches!(err, AppError::Http { status: 419, .. }));
    assert_eq!(err.backend_message(), Some("CSRF token mismatch."));
    Ok(())
}
