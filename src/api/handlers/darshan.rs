use axum::{extract::{State, Path}, http::StatusCode, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::auth::AdminUser;
use crate::api::dtos::requests::{CreateDarshanRequest, UpdateDarshanRequest};
use crate::domain::models::darshan::Darshan;
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;
use validator::Validate;

pub async fn list_public_darshans(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.darshan_repo.list(true).await?))
}

pub async fn list_darshans(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.darshan_repo.list(false).await?))
}

pub async fn get_darshan(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(darshan_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let darshan = state.darshan_repo.find_by_id(&darshan_id).await?
        .ok_or(AppError::NotFound("Darshan not found".into()))?;
    Ok(Json(darshan))
}

pub async fn create_darshan(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Json(payload): Json<CreateDarshanRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let darshan = Darshan::new(
        payload.name.trim().to_string(),
        payload.description.unwrap_or_default(),
        payload.location.unwrap_or_default(),
        payload.timings,
        payload.image_url,
    );
    let created = state.darshan_repo.create(&darshan).await?;
    info!("Darshan listing created: {}", created.id);
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_darshan(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(darshan_id): Path<String>,
    Json(payload): Json<UpdateDarshanRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut darshan = state.darshan_repo.find_by_id(&darshan_id).await?
        .ok_or(AppError::NotFound("Darshan not found".into()))?;

    if let Some(name) = payload.name {
        if name.trim().is_empty() {
            return Err(AppError::Validation("name: Name is required".into()));
        }
        darshan.name = name.trim().to_string();
    }
    if let Some(description) = payload.description { darshan.description = description; }
    if let Some(location) = payload.location { darshan.location = location; }
    if let Some(timings) = payload.timings { darshan.timings = Some(timings); }
    if let Some(image_url) = payload.image_url { darshan.image_url = Some(image_url); }
    if let Some(active) = payload.is_active { darshan.is_active = active; }

    let updated = state.darshan_repo.update(&darshan).await?;
    info!("Darshan listing updated: {}", updated.id);
    Ok(Json(updated))
}

pub async fn delete_darshan(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(darshan_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.darshan_repo.delete(&darshan_id).await?;
    info!("Darshan listing removed: {}", darshan_id);
    Ok(StatusCode::NO_CONTENT)
}
