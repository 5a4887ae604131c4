//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use cms_core::entities::{Content, User};

use super::responses::{ContentDetailResponse, ContentSummaryResponse, CurrentUserResponse};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for CurrentUserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email.clone(),
            fullname: user.fullname.clone(),
            phone: user.phone.clone(),
            address: user.address.clone(),
            city: user.city.clone(),
            state: user.state.clone(),
            country: user.country.clone(),
            pincode: user.pincode,
            role: user.role.to_string(),
            created_at: user.created_at,
        }
    }
}

impl From<User> for CurrentUserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

// ============================================================================
// Content Mappers
// ============================================================================

impl From<&Content> for ContentSummaryResponse {
    fn from(content: &Content) -> Self {
        Self {
            id: content.id.to_string(),
            title: content.title.clone(),
            summary: content.summary.clone(),
        }
    }
}

impl From<Content> for ContentSummaryResponse {
    fn from(content: Content) -> Self {
        Self::from(&content)
    }
}

impl From<&Content> for ContentDetailResponse {
    fn from(content: &Content) -> Self {
        Self {
            id: content.id.to_string(),
            title: content.title.clone(),
            body: content.body.clone(),
            summary: content.summary.clone(),
        }
    }
}

impl From<Content> for ContentDetailResponse {
    fn from(content: Content) -> Self {
        Self::from(&content)
    }
}
