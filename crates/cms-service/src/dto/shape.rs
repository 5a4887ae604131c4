//! Operation → shape dispatch table for content serialization
//!
//! An explicit table decides which view of a content row each operation
//! exposes, replacing any action-name-based serializer lookup. The rule is
//! total: listing gets the summary view, everything else the detail view.

use cms_core::entities::Content;
use serde::Serialize;

use super::responses::{ContentDetailResponse, ContentSummaryResponse};

/// The two field subsets exposed for a content row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentShape {
    /// `{id, title, summary}` - collection listings
    Summary,
    /// `{id, title, body, summary}` - single-row operations
    Detail,
}

/// Content operation kinds, as dispatched by the REST surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentAction {
    List,
    Create,
    Retrieve,
    Update,
    Delete,
}

impl ContentAction {
    /// The shape this operation serializes with
    #[must_use]
    pub const fn shape(self) -> ContentShape {
        match self {
            Self::List => ContentShape::Summary,
            Self::Create | Self::Retrieve | Self::Update | Self::Delete => ContentShape::Detail,
        }
    }

    /// Every content operation requires a resolved caller identity
    #[must_use]
    pub const fn requires_auth(self) -> bool {
        true
    }
}

impl ContentShape {
    /// Render a content row in this shape
    #[must_use]
    pub fn render(self, content: &Content) -> ContentResponse {
        match self {
            Self::Summary => ContentResponse::Summary(content.into()),
            Self::Detail => ContentResponse::Detail(content.into()),
        }
    }
}

/// A content row rendered in one of the two shapes
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ContentResponse {
    Summary(ContentSummaryResponse),
    Detail(ContentDetailResponse),
}
