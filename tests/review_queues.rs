//! Review-queue wrappers: the photo and registration queues plus token
//! management, checking paths and command payload shapes.

mod support;

use anyhow::Result;
use axum::{
    extract::{Json as BodyJson, Path},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use comunidad::features::{photos, registrations, registrations::types::PhotoDecision, tokens};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use support::{client, spawn_backend, user_json};

#[tokio::test]
async fn photo_queue_round_trip() -> Result<()> {
    let router = Router::new()
        .route(
            "/api/photos/pending",
            get(|| async { Json(json!([user_json(4, "Mia", 2)])) }),
        )
        .route(
            "/api/photos/:id/approve",
            post(|Path(_id): Path<i64>| async { StatusCode::NO_CONTENT }),
        )
        .route(
            "/api/photos/stats",
            get(|| async { Json(json!({ "pending": 1, "approved": 12 })) }),
        );
    let base = spawn_backend(router).await;
    let api = client(&base);

    let pending = photos::client::pending(&api).await?;
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].id, 4);

    photos::client::approve(&api, 4).await?;

    let stats = photos::client::stats(&api).await?;
    assert_eq!(stats["pending"], json!(1));
    Ok(())
}

#[tokio::test]
async fn registration_approval_carries_photo_decision_and_group() -> Result<()> {
    let received = Arc::new(Mutex::new(None::<Value>));
    let sink = Arc::clone(&received);
    let router = Router::new().route(
        "/api/registrations/:id/approve",
        post(move |Path(_id): Path<i64>, BodyJson(body): BodyJson<Value>| {
            let sink = Arc::clone(&sink);
            async move {
                *sink.lock().expect("record body") = Some(body);
                StatusCode::NO_CONTENT
            }
        }),
    );
    let base = spawn_backend(router).await;
    let api = client(&base);

    registrations::client::approve(&api, 9, PhotoDecision::Reject, Some(5)).await?;

    let body = received.lock().expect("read body").clone().expect("body sent");
    assert_eq!(body["photo_decision"], json!("reject"));
    assert_eq!(body["group_id"], json!(5));
    Ok(())
}

#[tokio::test]
async fn registration_rejection_sends_the_reason() -> Result<()> {
    let received = Arc::new(Mutex::new(None::<Value>));
    let sink = Arc::clone(&received);
    let router = Router::new().route(
        "/api/registrations/:id/reject",
        post(move |Path(_id): Path<i64>, BodyJson(body): BodyJson<Value>| {
            let sink = Arc::clone(&sink);
            async move {
                *sink.lock().expect("record body") = Some(body);
                StatusCode::NO_CONTENT
            }
        }),
    );
    let base = spawn_backend(router).await;
    let api = client(&base);

    registrations::client::reject(&api, 9, Some("Incomplete profile")).await?;

    let body = received.lock().expect("read body").clone().expect("body sent");
    assert_eq!(body["reason"], json!("Incomplete profile"));
    Ok(())
}

#[tokio::test]
async fn token_management_hits_the_expected_endpoints() -> Result<()> {
    let router = Router::new()
        .route(
            "/api/tokens",
            get(|| async { Json(json!([{ "id": 1, "name": "ci" }])) }),
        )
        .route("/api/tokens/revoke", post(|| async { StatusCode::NO_CONTENT }))
        .route(
            "/api/tokens/revoke-all",
            post(|| async { StatusCode::NO_CONTENT }),
        );
    let base = spawn_backend(router).await;
    let api = client(&base);

    let listed = tokens::client::list(&api).await?;
    assert_eq!(listed[0]["name"], json!("ci"));

    tokens::client::revoke(&api).await?;
    tokens::client::revoke_all(&api).await?;
    Ok(())
}
