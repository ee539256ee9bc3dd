//! Authentication API integration tests
//!
//! Routing and guard behavior run against the real router without a
//! database; the full register/login flow needs PostgreSQL and is
//! marked `#[ignore]`.

mod common;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use serial_test::serial;
use tower::ServiceExt;
use uuid::Uuid;

use common::auth_helpers::{auth_header, create_test_user, generate_test_token};
use common::database::TestDatabase;
use common::server::{test_app, test_state, test_state_with_pool};

async fn body_json(body: Body) -> Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn health_route_answers_ok() {
    let app = test_app(test_state());

    let response = app
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response.into_body()).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn unknown_route_is_json_404() {
    let app = test_app(test_state());

    let response = app
        .oneshot(Request::get("/api/nope").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response.into_body()).await;
    assert_eq!(body["status"], 404);
}

#[tokio::test]
async fn register_without_database_is_503() {
    let app = test_app(test_state());

    let request = json_request(
        "POST",
        "/api/auth/register",
        json!({ "name": "Ada", "email": "ada@example.com", "password": "password123" }),
    );
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn login_without_database_is_503() {
    let app = test_app(test_state());

    let request = json_request(
        "POST",
        "/api/auth/login",
        json!({ "email": "ada@example.com", "password": "password123" }),
    );
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn me_without_token_is_json_401() {
    let app = test_app(test_state());

    let response = app
        .oneshot(Request::get("/api/auth/me").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    // Guard rejections use the same JSON error shape as handler errors
    let body = body_json(response.into_body()).await;
    assert_eq!(body["error"], "Authentication required");
    assert_eq!(body["status"], 401);
}

#[tokio::test]
async fn me_with_garbage_token_is_json_401() {
    let app = test_app(test_state());

    let response = app
        .oneshot(
            Request::get("/api/auth/me")
                .header(header::AUTHORIZATION, "Bearer not.a.token")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response.into_body()).await;
    assert_eq!(body["error"], "Invalid or expired token");
    assert_eq!(body["status"], 401);
}

#[tokio::test]
async fn logout_with_valid_token_succeeds_without_database() {
    let app = test_app(test_state());
    let token = generate_test_token(Uuid::new_v4(), "ada@example.com");

    let response = app
        .oneshot(
            Request::post("/api/auth/logout")
                .header(header::AUTHORIZATION, auth_header(&token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response.into_body()).await;
    assert_eq!(body["message"], "Logged out");
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
#[serial]
async fn register_login_me_flow() {
    let db = TestDatabase::new().await;
    db.cleanup().await.unwrap();
    let app = test_app(test_state_with_pool(db.pool().clone()));

    // Register
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/auth/register",
            json!({ "name": "Ada", "email": "ada@example.com", "password": "password123" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response.into_body()).await;
    assert!(body["token"].is_string());
    assert_eq!(body["user"]["name"], "Ada");
    assert!(body["user"].get("passwordHash").is_none());

    // Duplicate email
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/auth/register",
            json!({ "name": "Ada", "email": "ada@example.com", "password": "password123" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // Login with wrong password
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/auth/login",
            json!({ "email": "ada@example.com", "password": "wrong-password" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // Login
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/auth/login",
            json!({ "email": "ada@example.com", "password": "password123" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response.into_body()).await;
    let token = body["token"].as_str().unwrap().to_string();

    // Me
    let response = app
        .oneshot(
            Request::get("/api/auth/me")
                .header(header::AUTHORIZATION, auth_header(&token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response.into_body()).await;
    assert_eq!(body["email"], "ada@example.com");
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
#[serial]
async fn token_of_deleted_user_is_rejected() {
    let db = TestDatabase::new().await;
    db.cleanup().await.unwrap();
    let app = test_app(test_state_with_pool(db.pool().clone()));

    let user = create_test_user(db.pool(), "Ghost", "ghost@example.com", "password123")
        .await
        .unwrap();
    db.cleanup().await.unwrap();

    let response = app
        .oneshot(
            Request::get("/api/auth/me")
                .header(header::AUTHORIZATION, auth_header(&user.token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
