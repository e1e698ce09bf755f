use axum::{extract::State, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::requests::UpdateProfileRequest;
use crate::api::extractors::auth::AuthUser;
use crate::api::handlers::auth::profile_of;
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;
use validator::Validate;

pub async fn get_profile(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let account = state.user_repo.find_by_id(&user.id).await?
        .ok_or(AppError::NotFound("User not found".into()))?;
    Ok(Json(profile_of(account)))
}

pub async fn update_profile(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Json(payload): Json<UpdateProfileRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let mut account = state.user_repo.find_by_id(&user.id).await?
        .ok_or(AppError::NotFound("User not found".into()))?;

    if let Some(name) = payload.name { account.name = name.trim().to_string(); }
    if let Some(mobile) = payload.mobile { account.mobile = Some(mobile); }

    let updated = state.user_repo.update_profile(&account).await?;
    info!("Profile updated: {}", updated.id);
    Ok(Json(profile_of(updated)))
}
