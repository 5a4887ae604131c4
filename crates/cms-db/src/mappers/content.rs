//! Content entity <-> model mapper

use cms_core::entities::Content;
use cms_core::value_objects::Snowflake;

use crate::models::ContentModel;

/// Convert ContentModel to Content entity
impl From<ContentModel> for Content {
    fn from(model: ContentModel) -> Self {
        Content {
            id: Snowflake::new(model.id),
            user_id: Snowflake::new(model.user_id),
            title: model.title,
            body: model.body,
            summary: model.summary,
            document: model.document,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Borrowed view of a Content entity for database insertion
pub struct ContentInsert<'a> {
    pub id: i64,
    pub user_id: i64,
    pub title: &'a str,
    pub body: &'a str,
    pub summary: &'a str,
    pub document: Option<&'a str>,
}

impl<'a> ContentInsert<'a> {
    pub fn new(content: &'a Content) -> Self {
        Self {
            id: content.id.into_inner(),
            user_id: content.user_id.into_inner(),
            title: &content.title,
            body: &content.body,
            summary: &content.summary,
            document: content.document.as_deref(),
        }
    }
}
