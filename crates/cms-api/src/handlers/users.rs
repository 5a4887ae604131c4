//! User handlers
//!
//! Endpoints for the authenticated user's profile.

use axum::{extract::State, Json};
use cms_service::{CurrentUserResponse, UserService};

use crate::extractors::AuthUser;
use crate::response::ApiResult;
use crate::state::AppState;

/// Get current user
///
/// GET /users/@me
pub async fn get_current_user(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<CurrentUserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.get_current_user(auth.user_id).await?;
    Ok(Json(response))
}
