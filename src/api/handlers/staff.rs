use axum::{extract::{State, Path}, http::StatusCode, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::auth::AdminUser;
use crate::api::dtos::requests::{CreateStaffRequest, UpdateStaffRequest};
use crate::domain::models::staff::Staff;
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;
use validator::Validate;

pub async fn list_staff(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.staff_repo.list().await?))
}

pub async fn get_staff(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(staff_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let staff = state.staff_repo.find_by_id(&staff_id).await?
        .ok_or(AppError::NotFound("Staff member not found".into()))?;
    Ok(Json(staff))
}

pub async fn create_staff(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Json(payload): Json<CreateStaffRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let staff = Staff::new(
        payload.name.trim().to_string(),
        payload.designation.trim().to_string(),
        payload.mobile,
        payload.email,
        payload.salary.unwrap_or(0),
    );
    let created = state.staff_repo.create(&staff).await?;
    info!("Staff member added: {}", created.id);
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_staff(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(staff_id): Path<String>,
    Json(payload): Json<UpdateStaffRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let mut staff = state.staff_repo.find_by_id(&staff_id).await?
        .ok_or(AppError::NotFound("Staff member not found".into()))?;

    if let Some(name) = payload.name { staff.name = name.trim().to_string(); }
    if let Some(designation) = payload.designation { staff.designation = designation; }
    if let Some(mobile) = payload.mobile { staff.mobile = mobile; }
    if let Some(email) = payload.email { staff.email = Some(email); }
    if let Some(salary) = payload.salary { staff.salary = salary; }
    if let Some(active) = payload.is_active { staff.is_active = active; }

    let updated = state.staff_repo.update(&staff).await?;
    info!("Staff member updated: {}", updated.id);
    Ok(Json(updated))
}

pub async fn delete_staff(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(staff_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.staff_repo.delete(&staff_id).await?;
    info!("Staff member removed: {}", staff_id);
    Ok(StatusCode::NO_CONTENT)
}
