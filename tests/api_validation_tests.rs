// SPDX-License-Identifier: MIT

//! API input validation tests.
//!
//! Validation must run before any store contact: the apps here use an
//! offline mock database whose writes always fail, so a validation
//! rejection (422) proves no write was attempted.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use std::sync::Arc;
use studyquest::config::Config;
use studyquest::identity::IdentityProvider;
use studyquest::AppState;
use tower::ServiceExt;

mod common;

/// Test app in telegram identity mode (payload required).
fn create_telegram_mode_app() -> axum::Router {
    let mut config = Config::test_default();
    config.identity = IdentityProvider::Telegram;
    let state = Arc::new(AppState {
        config,
        db: common::test_db_offline(),
    });
    studyquest::routes::create_router(state)
}

#[tokio::test]
async fn test_settings_blank_email_rejected_before_store() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/educators/ed1/settings")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    r#"{"name":"Ms. Rivera","email":"   ","bio":"hi"}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    // 422, not the 500 the offline mock produces on any write
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_settings_blank_name_rejected_before_store() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/educators/ed1/settings")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"name":"","email":"a@b.example"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_bootstrap_requires_payload_in_telegram_mode() {
    let app = create_telegram_mode_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/bootstrap")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{}"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_award_rejects_non_positive_points() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/users/u1/points")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"points":0,"reason":"quiz"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
