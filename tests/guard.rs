//! Navigation guard decisions: landing-page redirects away from the entry
//! routes, the reconciliation probe, and per-role route gating.

mod support;

use anyhow::Result;
use axum::{http::StatusCode, routing::get, Json, Router};
use comunidad::{before_each, GuardDecision, RouteName};
use support::{session, spawn_backend, user_json};

#[tokio::test]
async fn authenticated_users_leave_login_for_their_landing_page() -> Result<()> {
    // In-memory decision, no backend involved.
    let base = spawn_backend(Router::new()).await;

    for (role_id, landing) in [
        (1, RouteName::CeoUsers),
        (3, RouteName::AssistantUsers),
        (2, RouteName::UserGroups),
    ] {
        let session = session(&base);
        session.set_user(Some(serde_json::from_value(user_json(1, "Ana", role_id))?));

        let decision = before_each(&session, RouteName::Login).await;
        assert_eq!(decision, GuardDecision::Redirect(landing));

        let decision = before_each(&session, RouteName::Register).await;
        assert_eq!(decision, GuardDecision::Redirect(landing));
    }
    Ok(())
}

#[tokio::test]
async fn login_probe_reconciles_a_live_backend_session() -> Result<()> {
    let router = Router::new().route(
        "/api/users/me",
        get(|| async { Json(user_json(7, "Ana", 1)) }),
    );
    let base = spawn_backend(router).await;
    let session = session(&base);
    assert!(!session.is_authenticated());

    let decision = before_each(&session, RouteName::Login).await;

    assert_eq!(decision, GuardDecision::Redirect(RouteName::CeoUsers));
    assert!(session.is_authenticated());
    Ok(())
}

#[tokio::test]
async fn anonymous_visitors_may_enter_login() -> Result<()> {
    let router = Router::new().route("/api/users/me", get(|| async { StatusCode::UNAUTHORIZED }));
    let base = spawn_backend(router).await;
    let session = session(&base);

    let decision = before_each(&session, RouteName::Login).await;

    assert_eq!(decision, GuardDecision::Allow);
    Ok(())
}

#[tokio::test]
async fn protected_routes_redirect_anonymous_visitors_to_login() -> Result<()> {
    let router = Router::new().route("/api/users/me", get(|| async { StatusCode::UNAUTHORIZED }));
    let base = spawn_backend(router).await;
    let session = session(&base);

    let decision = before_each(&session, RouteName::UserGroups).await;

    assert_eq!(decision, GuardDecision::Redirect(RouteName::Login));
    Ok(())
}

#[tokio::test]
async fn protected_routes_accept_a_freshly_probed_identity() -> Result<()> {
    let router = Router::new().route(
        "/api/users/me",
        get(|| async { Json(user_json(2, "Eva", 2)) }),
    );
    let base = spawn_backend(router).await;
    let session = session(&base);

    let decision = before_each(&session, RouteName::UserGroups).await;

    assert_eq!(decision, GuardDecision::Allow);
    assert!(session.is_authenticated());
    Ok(())
}

#[tokio::test]
async fn assistant_routes_reject_plain_members() -> Result<()> {
    let base = spawn_backend(Router::new()).await;
    let session = session(&base);
    session.set_user(Some(serde_json::from_value(user_json(2, "Eva", 2))?));

    let decision = before_each(&session, RouteName::AssistantUsers).await;

    assert_eq!(decision, GuardDecision::Redirect(RouteName::UserGroups));
    Ok(())
}

#[tokio::test]
async fn staff_routes_reject_plain_members() -> Result<()> {
    let base = spawn_backend(Router::new()).await;
    let session = session(&base);
    session.set_user(Some(serde_json::from_value(user_json(2, "Eva", 2))?));

    let decision = before_each(&session, RouteName::CeoUsers).await;

    assert_eq!(decision, GuardDecision::Redirect(RouteName::UserGroups));
    Ok(())
}

#[tokio::test]
async fn member_routes_bounce_staff_to_their_landing() -> Result<()> {
    let base = spawn_backend(Router::new()).await;
    let session = session(&base);
    session.set_user(Some(serde_json::from_value(user_json(1, "Ana", 1))?));

    let decision = before_each(&session, RouteName::UserAnnouncements).await;

    assert_eq!(decision, GuardDecision::Redirect(RouteName::CeoUsers));
    Ok(())
}

#[tokio::test]
async fn staff_members_reach_their_own_screens() -> Result<()> {
    let base = spawn_backend(Router::new()).await;

    let admin = session(&base);
    admin.set_user(Some(serde_json::from_value(user_json(1, "Ana", 1))?));
    assert_eq!(
        before_each(&admin, RouteName::CeoGroups).await,
        GuardDecision::Allow
    );

    let assistant = session(&base);
    assistant.set_user(Some(serde_json::from_value(user_json(3, "Eva", 3))?));
    assert_eq!(
        before_each(&assistant, RouteName::AssistantGroups).await,
        GuardDecision::Allow
    );
    // Assistants share the admin screens, but not the other way around.
    assert_eq!(
        before_each(&assistant, RouteName::CeoUsers).await,
        GuardDecision::Allow
    );
    Ok(())
}
