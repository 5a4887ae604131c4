//! PostgreSQL implementation of ContentRepository
//!
//! Every query predicate binds the owner's id: the effective row set of any
//! call is the caller's own rows. A cross-owner id behaves exactly like an
//! unknown id.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use cms_core::entities::Content;
use cms_core::traits::{ContentRepository, RepoResult};
use cms_core::value_objects::Snowflake;

use crate::mappers::ContentInsert;
use crate::models::ContentModel;

use super::error::{content_not_found, map_db_error};

const CONTENT_COLUMNS: &str =
    "id, user_id, title, body, summary, document, created_at, updated_at";

/// PostgreSQL implementation of ContentRepository
#[derive(Clone)]
pub struct PgContentRepository {
    pool: PgPool,
}

impl PgContentRepository {
    /// Create a new PgContentRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContentRepository for PgContentRepository {
    #[instrument(skip(self))]
    async fn find_owned(&self, owner: Snowflake, id: Snowflake) -> RepoResult<Option<Content>> {
        let result = sqlx::query_as::<_, ContentModel>(&format!(
            "SELECT {CONTENT_COLUMNS} FROM contents WHERE id = $1 AND user_id = $2"
        ))
        .bind(id.into_inner())
        .bind(owner.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Content::from))
    }

    #[instrument(skip(self))]
    async fn list_owned(&self, owner: Snowflake) -> RepoResult<Vec<Content>> {
        let results = sqlx::query_as::<_, ContentModel>(&format!(
            "SELECT {CONTENT_COLUMNS} FROM contents WHERE user_id = $1 ORDER BY id DESC"
        ))
        .bind(owner.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Content::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, content: &Content) -> RepoResult<()> {
        let insert = ContentInsert::new(content);

        sqlx::query(
            r"
            INSERT INTO contents (id, user_id, title, body, summary, document, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ",
        )
        .bind(insert.id)
        .bind(insert.user_id)
        .bind(insert.title)
        .bind(insert.body)
        .bind(insert.summary)
        .bind(insert.document)
        .bind(content.created_at)
        .bind(content.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update_owned(&self, owner: Snowflake, content: &Content) -> RepoResult<()> {
        // Last-write-wins between concurrent writers of the same row.
        let result = sqlx::query(
            r"
            UPDATE contents
            SET title = $3, body = $4, summary = $5, document = $6, updated_at = NOW()
            WHERE id = $1 AND user_id = $2
            ",
        )
        .bind(content.id.into_inner())
        .bind(owner.into_inner())
        .bind(&content.title)
        .bind(&content.body)
        .bind(&content.summary)
        .bind(content.document.as_deref())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(content_not_found(content.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_owned(&self, owner: Snowflake, id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM contents WHERE id = $1 AND user_id = $2
            ",
        )
        .bind(id.into_inner())
        .bind(owner.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(content_not_found(id));
        }

        Ok(())
    }
}
