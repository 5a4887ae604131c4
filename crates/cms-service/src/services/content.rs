//! Content service
//!
//! Caller-scoped CRUD over content rows. The caller identity is a required
//! parameter on every operation and becomes the owner of anything created;
//! reads and writes only ever see the caller's own rows. Output shapes come
//! from the operation dispatch table.

use cms_core::entities::Content;
use cms_core::Snowflake;
use tracing::{info, instrument};

use crate::dto::{ContentAction, ContentResponse, CreateContentRequest, UpdateContentRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Content service
pub struct ContentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ContentService<'a> {
    /// Create a new ContentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List the caller's content, newest first, Summary-shaped
    #[instrument(skip(self))]
    pub async fn list(&self, caller: Snowflake) -> ServiceResult<Vec<ContentResponse>> {
        let shape = ContentAction::List.shape();

        let contents = self.ctx.content_repo().list_owned(caller).await?;

        Ok(contents.iter().map(|c| shape.render(c)).collect())
    }

    /// Create a content row owned by the caller, Detail-shaped.
    ///
    /// The owner is the caller, unconditionally; the request cannot carry
    /// one.
    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        caller: Snowflake,
        request: CreateContentRequest,
    ) -> ServiceResult<ContentResponse> {
        let content = Content::new(
            self.ctx.generate_id(),
            caller,
            request.title,
            request.body,
            request.summary,
        );

        self.ctx.content_repo().create(&content).await?;

        info!(content_id = %content.id, "Content created");

        Ok(ContentAction::Create.shape().render(&content))
    }

    /// Retrieve one of the caller's content rows, Detail-shaped.
    ///
    /// An id owned by another user fails exactly like an unknown id.
    #[instrument(skip(self))]
    pub async fn get(&self, caller: Snowflake, id: Snowflake) -> ServiceResult<ContentResponse> {
        let content = self.find_owned(caller, id).await?;

        Ok(ContentAction::Retrieve.shape().render(&content))
    }

    /// Apply a partial update to one of the caller's rows, Detail-shaped
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        caller: Snowflake,
        id: Snowflake,
        request: UpdateContentRequest,
    ) -> ServiceResult<ContentResponse> {
        let mut content = self.find_owned(caller, id).await?;

        content.apply_edit(request.title, request.body, request.summary);

        self.ctx.content_repo().update_owned(caller, &content).await?;

        info!(content_id = %content.id, "Content updated");

        Ok(ContentAction::Update.shape().render(&content))
    }

    /// Delete one of the caller's rows
    #[instrument(skip(self))]
    pub async fn delete(&self, caller: Snowflake, id: Snowflake) -> ServiceResult<()> {
        self.ctx.content_repo().delete_owned(caller, id).await?;

        info!(content_id = %id, "Content deleted");

        Ok(())
    }

    async fn find_owned(&self, caller: Snowflake, id: Snowflake) -> ServiceResult<Content> {
        self.ctx
            .content_repo()
            .find_owned(caller, id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Content", id.to_string()))
    }
}
