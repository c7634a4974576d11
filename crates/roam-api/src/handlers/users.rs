//! User profile handlers
//!
//! Public, complete, and own-profile endpoints.

use axum::{
    extract::{Path, State},
    Json,
};
use roam_core::Id;
use roam_service::{
    ApiResponse, CompleteProfileResponse, FullProfileResponse, ProfileService, ProfileView,
};

use crate::extractors::{AuthUser, OptionalAuthUser};
use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

fn parse_user_id(raw: &str) -> Result<Id, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::invalid_path("Invalid user id format"))
}

/// Get a user's profile through the privacy filter
///
/// GET /users/:user_id/profile
pub async fn get_public_profile(
    State(state): State<AppState>,
    viewer: OptionalAuthUser,
    Path(user_id): Path<String>,
) -> ApiResult<Json<ApiResponse<ProfileView>>> {
    let user_id = parse_user_id(&user_id)?;
    let service = ProfileService::new(state.service_context());
    let profile = service.public_profile(user_id, viewer.viewer_id()).await?;
    Ok(Json(ApiResponse::new(profile)))
}

/// Get a user's profile with recent activity and stats
///
/// GET /users/:user_id/profile/complete
pub async fn get_complete_profile(
    State(state): State<AppState>,
    viewer: OptionalAuthUser,
    Path(user_id): Path<String>,
) -> ApiResult<Json<ApiResponse<CompleteProfileResponse>>> {
    let user_id = parse_user_id(&user_id)?;
    let service = ProfileService::new(state.service_context());
    let profile = service.complete_profile(user_id, viewer.viewer_id()).await?;
    Ok(Json(ApiResponse::new(profile)))
}

/// Get the authenticated user's own profile
///
/// GET /users/me/profile
pub async fn get_my_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ApiResponse<FullProfileResponse>>> {
    let service = ProfileService::new(state.service_context());
    let profile = service.my_profile(auth.user_id()).await?;
    Ok(Json(ApiResponse::new(profile)))
}
