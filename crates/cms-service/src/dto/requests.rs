//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input
//! validation. Unknown JSON keys (including any client-submitted `id`,
//! `user` or `owner`) are dropped during deserialization, so ownership can
//! never be smuggled in through a payload.

use cms_core::entities::content::{BODY_MAX_LEN, SUMMARY_MAX_LEN, TITLE_MAX_LEN};
use serde::Deserialize;
use validator::{Validate, ValidationError};

// ============================================================================
// Auth Requests
// ============================================================================

/// User registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub password: String,

    #[validate(length(min = 1, max = 255, message = "Full name must be 1-255 characters"))]
    pub fullname: String,

    #[validate(custom(function = validate_phone, message = "Phone number must be exactly 10 digits"))]
    pub phone: Option<String>,

    #[validate(length(max = 255, message = "Address must be at most 255 characters"))]
    pub address: Option<String>,

    #[validate(length(max = 255, message = "City must be at most 255 characters"))]
    pub city: Option<String>,

    #[validate(length(max = 255, message = "State must be at most 255 characters"))]
    pub state: Option<String>,

    #[validate(length(max = 255, message = "Country must be at most 255 characters"))]
    pub country: Option<String>,

    #[validate(range(min = 0, max = 999_999, message = "Pincode must be 0-999999"))]
    pub pincode: Option<i32>,
}

/// Phone numbers are exactly 10 ASCII digits
fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if phone.len() == 10 && phone.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(ValidationError::new("phone"))
    }
}

/// User login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    pub password: String,
}

/// Token refresh request
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// Account creation input for the user factory.
///
/// Shared by registration and superuser creation; the factory normalizes
/// the email and hashes the password before anything is persisted.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub fullname: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub pincode: Option<i32>,
}

impl From<RegisterRequest> for NewUser {
    fn from(request: RegisterRequest) -> Self {
        Self {
            email: request.email,
            password: request.password,
            fullname: request.fullname,
            phone: request.phone,
            address: request.address,
            city: request.city,
            state: request.state,
            country: request.country,
            pincode: request.pincode,
        }
    }
}

// ============================================================================
// Content Requests
// ============================================================================

/// Create content request.
///
/// Carries no id and no owner: the id is system-assigned and the owner is
/// always the authenticated caller.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateContentRequest {
    #[validate(length(min = 1, max = 30, message = "Title must be 1-30 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 255, message = "Body must be 1-255 characters"))]
    pub body: String,

    #[validate(length(min = 1, max = 255, message = "Summary must be 1-255 characters"))]
    pub summary: String,
}

/// Update content request; absent fields keep their stored values
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateContentRequest {
    #[validate(length(min = 1, max = 30, message = "Title must be 1-30 characters"))]
    pub title: Option<String>,

    #[validate(length(min = 1, max = 255, message = "Body must be 1-255 characters"))]
    pub body: Option<String>,

    #[validate(length(min = 1, max = 255, message = "Summary must be 1-255 characters"))]
    pub summary: Option<String>,
}

// Compile-time tie between the validation bounds above and the entity
// constants.
const _: () = {
    assert!(TITLE_MAX_LEN == 30);
    assert!(BODY_MAX_LEN == 255);
    assert!(SUMMARY_MAX_LEN == 255);
};
