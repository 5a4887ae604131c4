//! User entity - an account in the system

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::Snowflake;

/// Role assigned to a user account.
///
/// Stored data only: no operation branches on it. Elevation happens
/// through the superuser factory, which forces `Admin`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UserRole {
    Admin,
    #[default]
    Author,
}

impl UserRole {
    /// Database / wire representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Author => "Author",
        }
    }

    /// Parse from the stored representation, falling back to the default
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s {
            "Admin" => Self::Admin,
            _ => Self::Author,
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User entity. `email` is the login identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Snowflake,
    pub email: String,
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
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new User with required fields and default flags
    pub fn new(id: Snowflake, email: String, fullname: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            email,
            fullname,
            phone: None,
            address: None,
            city: None,
            state: None,
            country: None,
            pincode: None,
            is_active: true,
            is_staff: false,
            is_superuser: false,
            role: UserRole::default(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Normalize an email address: trim, lowercase the domain part.
    ///
    /// The local part is kept as entered, matching the usual
    /// normalize-then-store account semantics.
    #[must_use]
    pub fn normalize_email(email: &str) -> String {
        let email = email.trim();
        match email.rsplit_once('@') {
            Some((local, domain)) => format!("{local}@{}", domain.to_lowercase()),
            None => email.to_string(),
        }
    }

    /// Promote this account to a superuser: elevated flags and `Admin` role
    pub fn elevate_to_superuser(&mut self) {
        self.is_staff = true;
        self.is_superuser = true;
        self.role = UserRole::Admin;
        self.updated_at = Utc::now();
    }

    /// Check whether the account may authenticate
    #[inline]
    pub fn is_active(&self) -> bool {
        self.is_active
    }
}
