//! Content entity - a record owned by exactly one user

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Maximum length of a content title
pub const TITLE_MAX_LEN: usize = 30;
/// Maximum length of a content body
pub const BODY_MAX_LEN: usize = 255;
/// Maximum length of a content summary
pub const SUMMARY_MAX_LEN: usize = 255;

/// Content entity.
///
/// `user_id` is fixed at creation and never reassigned; all access goes
/// through owner-scoped queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Content {
    pub id: Snowflake,
    pub user_id: Snowflake,
    pub title: String,
    pub body: String,
    pub summary: String,
    pub document: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Content {
    /// Create a new Content owned by `user_id`
    pub fn new(
        id: Snowflake,
        user_id: Snowflake,
        title: String,
        body: String,
        summary: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            user_id,
            title,
            body,
            summary,
            document: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check whether `user` owns this record
    #[inline]
    pub fn is_owned_by(&self, user: Snowflake) -> bool {
        self.user_id == user
    }

    /// Check whether a stored document is attached
    #[inline]
    pub fn has_document(&self) -> bool {
        self.document.is_some()
    }

    /// Apply a partial edit; absent fields keep their stored values
    pub fn apply_edit(
        &mut self,
        title: Option<String>,
        body: Option<String>,
        summary: Option<String>,
    ) {
        if let Some(title) = title {
            self.title = title;
        }
        if let Some(body) = body {
            self.body = body;
        }
        if let Some(summary) = summary {
            self.summary = summary;
        }
        self.updated_at = Utc::now();
    }
}
