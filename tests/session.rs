//! Session store behavior against a mock backend: the user/authentication
//! invariant, local sign-out on backend failure, probe error suppression,
//! and the documented login/probe race.

mod support;

use anyhow::Result;
use axum::{
    http::{header, StatusCode},
    routing::{get, post},
    Json, Router,
};
use secrecy::SecretString;
use serde_json::json;
use std::time::Duration;
use support::{session, spawn_backend, user_json};
use tokio::time::sleep;

fn csrf_routes(router: Router) -> Router {
    router.route(
        "/sanctum/csrf-cookie",
        get(|| async {
            (
                StatusCode::NO_CONTENT,
                [(header::SET_COOKIE, "XSRF-TOKEN=test-token; Path=/")],
            )
        }),
    )
}

#[tokio::test]
async fn login_success_caches_user_and_holds_invariant() -> Result<()> {
    let router = csrf_routes(Router::new().route(
        "/login",
        post(|| async { Json(user_json(7, "Ana", 1)) }),
    ));
    let base = spawn_backend(router).await;
    let session = session(&base);

    assert!(!session.is_authenticated());
    assert_eq!(session.is_authenticated(), session.current_user().is_some());

    let outcome = session
        .login("ana@comunidad.test", &SecretString::from("secret".to_string()))
        .await;

    assert!(outcome.success);
    assert_eq!(outcome.user.as_ref().map(|user| user.id), Some(7));
    assert!(session.is_authenticated());
    assert_eq!(session.is_authenticated(), session.current_user().is_some());
    assert_eq!(session.last_error(), None);
    assert!(!session.is_loading());
    Ok(())
}

#[tokio::test]
async fn login_failure_surfaces_backend_message() -> Result<()> {
    let router = csrf_routes(Router::new().route(
        "/login",
        post(|| async {
            (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "message": "Invalid credentials" })),
            )
        }),
    ));
    let base = spawn_backend(router).await;
    let session = session(&base);

    let outcome = session
        .login("a@b.com", &SecretString::from("wrong".to_string()))
        .await;

    assert!(!outcome.success);
    assert_eq!(outcome.error.as_deref(), Some("Invalid credentials"));
    assert!(session.current_user().is_none());
    assert_eq!(session.is_authenticated(), session.current_user().is_some());
    assert_eq!(session.last_error().as_deref(), Some("Invalid credentials"));
    Ok(())
}

#[tokio::test]
async fn logout_clears_local_state_even_when_backend_fails() -> Result<()> {
    let router = Router::new().route(
        "/logout",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let base = spawn_backend(router).await;
    let session = session(&base);
    session.set_user(Some(serde_json::from_value(user_json(1, "Ana", 1))?));
    assert!(session.is_authenticated());

    let outcome = session.logout().await;

    assert!(!outcome.success);
    assert!(outcome.error.is_some());
    assert!(!session.is_authenticated());
    assert!(session.current_user().is_none());
    assert_eq!(session.is_authenticated(), session.current_user().is_some());
    Ok(())
}

#[tokio::test]
async fn failed_probe_suppresses_the_error() -> Result<()> {
    let router = Router::new().route(
        "/api/users/me",
        get(|| async {
            (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "message": "Unauthenticated." })),
            )
        }),
    );
    let base = spawn_backend(router).await;
    let session = session(&base);

    let outcome = session.fetch_user().await;

    assert!(!outcome.success);
    assert_eq!(outcome.error, None);
    assert_eq!(session.last_error(), None);
    assert!(!session.is_authenticated());
    Ok(())
}

#[tokio::test]
async fn successful_probe_hydrates_the_session() -> Result<()> {
    let router = Router::new().route(
        "/api/users/me",
        get(|| async { Json(user_json(3, "Eva", 3)) }),
    );
    let base = spawn_backend(router).await;
    let session = session(&base);

    let outcome = session.fetch_user().await;

    assert!(outcome.success);
    assert!(session.is_assistant());
    assert_eq!(session.is_authenticated(), session.current_user().is_some());
    Ok(())
}

#[tokio::test]
async fn reset_returns_to_the_initial_state() -> Result<()> {
    let router = Router::new();
    let base = spawn_backend(router).await;
    let session = session(&base);
    session.set_user(Some(serde_json::from_value(user_json(1, "Ana", 1))?));

    session.reset();

    assert!(!session.is_authenticated());
    assert_eq!(session.last_error(), None);
    assert!(!session.is_loading());
    Ok(())
}

/// Documents the accepted race: with no cancellation, the last-resolved call
/// wins. Here the probe resolves after the login and its 401 result stands.
#[tokio::test]
async fn last_resolved_call_wins_the_race() -> Result<()> {
    let router = csrf_routes(
        Router::new()
            .route("/login", post(|| async { Json(user_json(7, "Ana", 1)) }))
            .route(
                "/api/users/me",
                get(|| async {
                    sleep(Duration::from_millis(150)).await;
                    StatusCode::UNAUTHORIZED
                }),
            ),
    );
    let base = spawn_backend(router).await;
    let session = session(&base);

    let password = SecretString::from("secret".to_string());
    let (login_outcome, probe_outcome) = tokio::join!(
        session.login("ana@comunidad.test", &password),
        session.fetch_user(),
    );

    assert!(login_outcome.success);
    assert!(!probe_outcome.success);
    // The slower probe overwrote the login result.
    assert!(!session.is_authenticated());
    assert_eq!(session.is_authenticated(), session.current_user().is_some());
    Ok(())
}
