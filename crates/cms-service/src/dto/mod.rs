//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs
//! - The operation → shape dispatch table for content serialization

pub mod mappers;
pub mod requests;
pub mod responses;
pub mod shape;

// Re-export commonly used request types
pub use requests::{
    CreateContentRequest, LoginRequest, NewUser, RefreshTokenRequest, RegisterRequest,
    UpdateContentRequest,
};

// Re-export commonly used response types
pub use responses::{
    AuthResponse, ContentDetailResponse, ContentSummaryResponse, CurrentUserResponse,
    HealthResponse,
};

// Re-export the serialization dispatch table
pub use shape::{ContentAction, ContentResponse, ContentShape};
