//! Content database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for contents table
#[derive(Debug, Clone, FromRow)]
pub struct ContentModel {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub body: String,
    pub summary: String,
    pub document: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ContentModel {
    /// Check if a stored document is attached
    #[inline]
    pub fn has_document(&self) -> bool {
        self.document.is_some()
    }
}
