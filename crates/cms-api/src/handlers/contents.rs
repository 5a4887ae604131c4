//! Content handlers
//!
//! Endpoints for the per-user content collection. The authenticated caller
//! is the owner scope for every operation; ids that exist but belong to
//! another user produce the same 404 as unknown ids.

use axum::{
    extract::{Path, State},
    Json,
};
use cms_service::{
    ContentResponse, ContentService, CreateContentRequest, UpdateContentRequest,
};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// List the caller's contents (Summary shape)
///
/// GET /contents
pub async fn list_contents(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<ContentResponse>>> {
    let service = ContentService::new(state.service_context());
    let contents = service.list(auth.user_id).await?;
    Ok(Json(contents))
}

/// Create content owned by the caller (Detail shape)
///
/// POST /contents
pub async fn create_content(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateContentRequest>,
) -> ApiResult<Created<Json<ContentResponse>>> {
    let service = ContentService::new(state.service_context());
    let response = service.create(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// Get one of the caller's contents by ID (Detail shape)
///
/// GET /contents/{content_id}
pub async fn get_content(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(content_id): Path<String>,
) -> ApiResult<Json<ContentResponse>> {
    let content_id = content_id
        .parse()
        .map_err(|_| crate::response::ApiError::invalid_path("Invalid content_id format"))?;

    let service = ContentService::new(state.service_context());
    let response = service.get(auth.user_id, content_id).await?;
    Ok(Json(response))
}

/// Update one of the caller's contents (Detail shape)
///
/// PUT/PATCH /contents/{content_id}
pub async fn update_content(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(content_id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateContentRequest>,
) -> ApiResult<Json<ContentResponse>> {
    let content_id = content_id
        .parse()
        .map_err(|_| crate::response::ApiError::invalid_path("Invalid content_id format"))?;

    let service = ContentService::new(state.service_context());
    let response = service.update(auth.user_id, content_id, request).await?;
    Ok(Json(response))
}

/// Delete one of the caller's contents
///
/// DELETE /contents/{content_id}
pub async fn delete_content(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(content_id): Path<String>,
) -> ApiResult<NoContent> {
    let content_id = content_id
        .parse()
        .map_err(|_| crate::response::ApiError::invalid_path("Invalid content_id format"))?;

    let service = ContentService::new(state.service_context());
    service.delete(auth.user_id, content_id).await?;
    Ok(NoContent)
}
