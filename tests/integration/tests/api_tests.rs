//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance with the migrations applied
//! - Environment variables: DATABASE_URL, API_PORT, JWT_SECRET
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use reqwest::StatusCode;
use serde_json::{json, Value};

const CONTENTS_URL: &str = "/api/v1/contents";

fn content_url(id: &str) -> String {
    format!("{CONTENTS_URL}/{id}")
}

/// Register a fresh user and return its auth payload
async fn register_user(server: &TestServer) -> AuthResponse {
    let request = RegisterRequest::unique();
    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

/// Create a content row for the given token and return the detail body
async fn create_content(server: &TestServer, token: &str) -> ContentDetail {
    let request = CreateContentRequest::unique();
    let response = server.post_auth(CONTENTS_URL, token, &request).await.unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_register_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(auth.user.email, request.email);
    assert_eq!(auth.user.role, "Author");
    assert!(!auth.access_token.is_empty());
    assert!(!auth.refresh_token.is_empty());
}

#[tokio::test]
async fn test_register_duplicate_email() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    // First registration
    server.post("/api/v1/auth/register", &request).await.unwrap();

    // Second registration with same email surfaces as 400
    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_register_invalid_phone() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let mut payload = serde_json::to_value(RegisterRequest::unique()).unwrap();
    payload["phone"] = json!("12345");

    let response = server.post("/api/v1/auth/register", &payload).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_login() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    // Register first
    let register_req = RegisterRequest::unique();
    server.post("/api/v1/auth/register", &register_req).await.unwrap();

    // Login
    let login_req = LoginRequest::from_register(&register_req);
    let response = server.post("/api/v1/auth/login", &login_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(auth.user.email, register_req.email);
    assert!(!auth.access_token.is_empty());
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    // Unknown email and wrong password must be indistinguishable: both 401.
    let unknown_email = LoginRequest {
        email: "nonexistent@example.com".to_string(),
        password: "wrongpass123".to_string(),
    };
    let response = server.post("/api/v1/auth/login", &unknown_email).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let register_req = RegisterRequest::unique();
    server.post("/api/v1/auth/register", &register_req).await.unwrap();

    let wrong_password = LoginRequest {
        email: register_req.email.clone(),
        password: "not-the-password".to_string(),
    };
    let response = server.post("/api/v1/auth/login", &wrong_password).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_refresh_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register_user(&server).await;

    let response = server
        .post(
            "/api/v1/auth/refresh",
            &json!({ "refresh_token": auth.refresh_token }),
        )
        .await
        .unwrap();
    let refreshed: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(refreshed.user.id, auth.user.id);
    assert!(!refreshed.access_token.is_empty());
}

#[tokio::test]
async fn test_get_current_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register_user(&server).await;

    let response = server
        .get_auth("/api/v1/users/@me", &auth.access_token)
        .await
        .unwrap();
    let user: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(user.id, auth.user.id);
    assert_eq!(user.email, auth.user.email);
}

// ============================================================================
// Unauthenticated Access Tests
// ============================================================================

#[tokio::test]
async fn test_auth_required_on_every_content_endpoint() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get(CONTENTS_URL).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let response = server
        .post(CONTENTS_URL, &CreateContentRequest::sample())
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let response = server.get(&content_url("1")).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let response = server
        .client
        .delete(format!("{}{}", server.base_url(), content_url("1")))
        .send()
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_invalid_token_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get_auth(CONTENTS_URL, "garbage.token.here").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Content CRUD Tests
// ============================================================================

#[tokio::test]
async fn test_create_content() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register_user(&server).await;

    let request = CreateContentRequest::sample();
    let response = server
        .post_auth(CONTENTS_URL, &auth.access_token, &request)
        .await
        .unwrap();
    let detail: ContentDetail = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(detail.title, request.title);
    assert_eq!(detail.body, request.body);
    assert_eq!(detail.summary, request.summary);
    assert!(!detail.id.is_empty());
}

#[tokio::test]
async fn test_create_ignores_client_submitted_owner_and_id() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register_user(&server).await;
    let other = register_user(&server).await;

    // Payload smuggles an id and another user's id as owner; both are dropped.
    let payload = json!({
        "title": "Sample Content",
        "body": "Sample body",
        "summary": "Sample summary",
        "id": "42",
        "user": other.user.id,
        "owner": other.user.id,
    });
    let response = server
        .post_auth(CONTENTS_URL, &auth.access_token, &payload)
        .await
        .unwrap();
    let detail: ContentDetail = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_ne!(detail.id, "42");

    // The row is visible to its creator...
    let response = server
        .get_auth(&content_url(&detail.id), &auth.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    // ...and invisible to the user named in the payload.
    let response = server
        .get_auth(&content_url(&detail.id), &other.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_create_content_validation() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register_user(&server).await;

    let title_too_long = json!({
        "title": "t".repeat(31),
        "body": "Sample body",
        "summary": "Sample summary",
    });
    let response = server
        .post_auth(CONTENTS_URL, &auth.access_token, &title_too_long)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let missing_summary = json!({
        "title": "T",
        "body": "B",
    });
    let response = server
        .post_auth(CONTENTS_URL, &auth.access_token, &missing_summary)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_retrieve_content_detail() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register_user(&server).await;
    let created = create_content(&server, &auth.access_token).await;

    let response = server
        .get_auth(&content_url(&created.id), &auth.access_token)
        .await
        .unwrap();
    let detail: Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(detail["id"], Value::String(created.id.clone()));
    assert_eq!(detail["title"], Value::String(created.title.clone()));
    // Detail shape carries the body but never the owner.
    assert!(detail.get("body").is_some());
    assert!(detail.get("user").is_none());
    assert!(detail.get("user_id").is_none());
}

#[tokio::test]
async fn test_retrieve_is_idempotent() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register_user(&server).await;
    let created = create_content(&server, &auth.access_token).await;

    let first: Value = assert_json(
        server
            .get_auth(&content_url(&created.id), &auth.access_token)
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();

    let second: Value = assert_json(
        server
            .get_auth(&content_url(&created.id), &auth.access_token)
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_update_content_partial() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register_user(&server).await;
    let created = create_content(&server, &auth.access_token).await;

    let response = server
        .patch_auth(
            &content_url(&created.id),
            &auth.access_token,
            &json!({ "title": "Renamed" }),
        )
        .await
        .unwrap();
    let updated: ContentDetail = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(updated.title, "Renamed");
    // Absent fields keep their stored values.
    assert_eq!(updated.body, created.body);
    assert_eq!(updated.summary, created.summary);
}

#[tokio::test]
async fn test_update_content_via_put() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register_user(&server).await;
    let created = create_content(&server, &auth.access_token).await;

    let response = server
        .put_auth(
            &content_url(&created.id),
            &auth.access_token,
            &json!({ "title": "T2", "body": "B2", "summary": "S2" }),
        )
        .await
        .unwrap();
    let updated: ContentDetail = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(updated.title, "T2");
    assert_eq!(updated.body, "B2");
    assert_eq!(updated.summary, "S2");
}

#[tokio::test]
async fn test_delete_content() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register_user(&server).await;
    let created = create_content(&server, &auth.access_token).await;

    let response = server
        .delete_auth(&content_url(&created.id), &auth.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // Gone afterwards
    let response = server
        .get_auth(&content_url(&created.id), &auth.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_unknown_id_is_404() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register_user(&server).await;

    let response = server
        .get_auth(&content_url("999999999999"), &auth.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Ownership Scoping Tests
// ============================================================================

#[tokio::test]
async fn test_cross_owner_access_is_404_not_403() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let owner = register_user(&server).await;
    let intruder = register_user(&server).await;
    let created = create_content(&server, &owner.access_token).await;

    // Another user's row must be indistinguishable from a missing one.
    let response = server
        .get_auth(&content_url(&created.id), &intruder.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server
        .patch_auth(
            &content_url(&created.id),
            &intruder.access_token,
            &json!({ "title": "Hijacked" }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server
        .delete_auth(&content_url(&created.id), &intruder.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    // The row is untouched for its owner.
    let response = server
        .get_auth(&content_url(&created.id), &owner.access_token)
        .await
        .unwrap();
    let detail: ContentDetail = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(detail.title, created.title);
}

#[tokio::test]
async fn test_list_limited_to_owner_and_summary_shaped() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user_a = register_user(&server).await;
    let user_b = register_user(&server).await;

    let a1 = create_content(&server, &user_a.access_token).await;
    let a2 = create_content(&server, &user_a.access_token).await;
    let _b1 = create_content(&server, &user_b.access_token).await;

    let response = server
        .get_auth(CONTENTS_URL, &user_a.access_token)
        .await
        .unwrap();
    let listed: Vec<Value> = assert_json(response, StatusCode::OK).await.unwrap();

    // Exactly a's two rows, and nothing of b's.
    assert_eq!(listed.len(), 2);
    let ids: Vec<&str> = listed.iter().map(|c| c["id"].as_str().unwrap()).collect();
    assert!(ids.contains(&a1.id.as_str()));
    assert!(ids.contains(&a2.id.as_str()));

    // Summary shape: no body key present at all.
    for item in &listed {
        let object = item.as_object().unwrap();
        assert!(object.contains_key("id"));
        assert!(object.contains_key("title"));
        assert!(object.contains_key("summary"));
        assert!(!object.contains_key("body"));
        assert!(!object.contains_key("user"));
    }
}

#[tokio::test]
async fn test_list_ordered_by_descending_id() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register_user(&server).await;

    let c1 = create_content(&server, &auth.access_token).await;
    let c2 = create_content(&server, &auth.access_token).await;
    let c3 = create_content(&server, &auth.access_token).await;

    let response = server
        .get_auth(CONTENTS_URL, &auth.access_token)
        .await
        .unwrap();
    let listed: Vec<ContentSummary> = assert_json(response, StatusCode::OK).await.unwrap();

    let ids: Vec<&str> = listed.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec![c3.id.as_str(), c2.id.as_str(), c1.id.as_str()]);
}
