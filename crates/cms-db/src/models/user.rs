//! User database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for users table
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: i64,
    pub email: String,
    pub password_hash: String,
    pub fullname: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub pincode: Option<i32>,
    pub is_active: bool,
    pub is_staff: bool,
    pub is_superuser: bool,
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserModel {
    /// Check if the account may authenticate
    #[inline]
    pub fn is_active(&self) -> bool {
        self.is_active
    }
}
