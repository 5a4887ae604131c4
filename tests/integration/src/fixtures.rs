//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Registration request
#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub fullname: String,
}

impl RegisterRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            email: format!("test{suffix}@example.com"),
            password: "testpass123".to_string(),
            fullname: format!("Test User {suffix}"),
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            email: reg.email.clone(),
            password: reg.password.clone(),
        }
    }
}

/// Auth response
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub user: UserResponse,
    pub access_token: String,
    pub refresh_token: String,
}

/// User response
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub fullname: String,
    pub role: String,
    pub created_at: String,
}

/// Create content request
#[derive(Debug, Serialize)]
pub struct CreateContentRequest {
    pub title: String,
    pub body: String,
    pub summary: String,
}

impl CreateContentRequest {
    pub fn sample() -> Self {
        Self {
            title: "Sample Content".to_string(),
            body: "Sample body".to_string(),
            summary: "Sample summary".to_string(),
        }
    }

    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            title: format!("Content {suffix}"),
            body: format!("Body of content {suffix}"),
            summary: format!("Summary of content {suffix}"),
        }
    }
}

/// Content detail response: `{id, title, body, summary}`
#[derive(Debug, Deserialize)]
pub struct ContentDetail {
    pub id: String,
    pub title: String,
    pub body: String,
    pub summary: String,
}

/// Content summary response: `{id, title, summary}`
#[derive(Debug, Deserialize)]
pub struct ContentSummary {
    pub id: String,
    pub title: String,
    pub summary: String,
}
