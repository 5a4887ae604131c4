//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. Snowflake ids
//! are serialized as strings for JavaScript compatibility. No content
//! response carries the owner: ownership is an access-control concern, not
//! an output field.

use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// Auth Responses
// ============================================================================

/// Authentication response with tokens
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: CurrentUserResponse,
}

impl AuthResponse {
    pub fn new(
        access_token: String,
        refresh_token: String,
        expires_in: i64,
        user: CurrentUserResponse,
    ) -> Self {
        Self {
            access_token,
            refresh_token,
            token_type: "Bearer".to_string(),
            expires_in,
            user,
        }
    }
}

// ============================================================================
// User Responses
// ============================================================================

/// Current authenticated user response (profile without credential data)
#[derive(Debug, Clone, Serialize)]
pub struct CurrentUserResponse {
    pub id: String,
    pub email: String,
    pub fullname: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pincode: Option<i32>,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Content Responses
// ============================================================================

/// Summary view of a content row: `{id, title, summary}`, no body
#[derive(Debug, Clone, Serialize)]
pub struct ContentSummaryResponse {
    pub id: String,
    pub title: String,
    pub summary: String,
}

/// Detail view of a content row: `{id, title, body, summary}`
#[derive(Debug, Clone, Serialize)]
pub struct ContentDetailResponse {
    pub id: String,
    pub title: String,
    pub body: String,
    pub summary: String,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self { status: "ok" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_shape_has_no_body_key() {
        let response = ContentSummaryResponse {
            id: "1".to_string(),
            title: "T".to_string(),
            summary: "S".to_string(),
        };
        let value = serde_json::to_value(&response).unwrap();
        let object = value.as_object().unwrap();
        assert!(object.contains_key("id"));
        assert!(object.contains_key("title"));
        assert!(object.contains_key("summary"));
        assert!(!object.contains_key("body"));
        assert!(!object.contains_key("user"));
    }

    #[test]
    fn test_detail_shape_fields() {
        let response = ContentDetailResponse {
            id: "1".to_string(),
            title: "T".to_string(),
            body: "B".to_string(),
            summary: "S".to_string(),
        };
        let value = serde_json::to_value(&response).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 4);
        assert!(object.contains_key("body"));
        assert!(!object.contains_key("user"));
    }

    #[test]
    fn test_current_user_omits_empty_profile_fields() {
        let response = CurrentUserResponse {
            id: "1".to_string(),
            email: "user@example.com".to_string(),
            fullname: "Test".to_string(),
            phone: None,
            address: None,
            city: None,
            state: None,
            country: None,
            pincode: None,
            role: "Author".to_string(),
            created_at: Utc::now(),
        };
        let value = serde_json::to_value(&response).unwrap();
        let object = value.as_object().unwrap();
        assert!(!object.contains_key("phone"));
        assert!(!object.contains_key("password"));
    }
}
