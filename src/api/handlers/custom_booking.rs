use axum::{extract::{State, Path}, http::StatusCode, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::auth::AdminUser;
use crate::api::dtos::requests::CustomBookingRequest;
use crate::domain::models::custom_booking::{CustomBooking, NewCustomBookingParams};
use crate::domain::services::lifecycle::LifecycleError;
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;
use validator::Validate;

fn checked(payload: &CustomBookingRequest) -> Result<(), AppError> {
    payload.validate()?;
    if payload.check_out <= payload.check_in {
        return Err(LifecycleError::InvalidDateRange.into());
    }
    Ok(())
}

pub async fn list_custom_bookings(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.custom_booking_repo.list().await?))
}

pub async fn get_custom_booking(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(booking_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let booking = state.custom_booking_repo.find_by_id(&booking_id).await?
        .ok_or(AppError::NotFound("Custom booking not found".into()))?;
    Ok(Json(booking))
}

pub async fn create_custom_booking(
    State(state): State<Arc<AppState>>,
    AdminUser(admin): AdminUser,
    Json(payload): Json<CustomBookingRequest>,
) -> Result<impl IntoResponse, AppError> {
    checked(&payload)?;

    let booking = CustomBooking::new(NewCustomBookingParams {
        guest_name: payload.guest_name.trim().to_string(),
        guest_mobile: payload.guest_mobile,
        guest_email: payload.guest_email,
        room_name: payload.room_name,
        check_in: payload.check_in,
        check_out: payload.check_out,
        guests: payload.guests,
        amount: payload.amount,
        notes: payload.notes,
    });

    let created = state.custom_booking_repo.create(&booking).await?;
    info!(amount = created.amount, "Custom booking {} recorded by admin {}", created.id, admin.id);
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_custom_booking(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(booking_id): Path<String>,
    Json(payload): Json<CustomBookingRequest>,
) -> Result<impl IntoResponse, AppError> {
    checked(&payload)?;

    let mut booking = state.custom_booking_repo.find_by_id(&booking_id).await?
        .ok_or(AppError::NotFound("Custom booking not found".into()))?;

    booking.guest_name = payload.guest_name.trim().to_string();
    booking.guest_mobile = payload.guest_mobile;
    booking.guest_email = payload.guest_email;
    booking.room_name = payload.room_name;
    booking.check_in = payload.check_in;
    booking.check_out = payload.check_out;
    booking.guests = payload.guests;
    booking.amount = payload.amount;
    booking.notes = payload.notes;

    let updated = state.custom_booking_repo.update(&booking).await?;
    info!("Custom booking updated: {}", updated.id);
    Ok(Json(updated))
}

pub async fn delete_custom_booking(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(booking_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.custom_booking_repo.delete(&booking_id).await?;
    info!("Custom booking deleted: {}", booking_id);
    Ok(StatusCode::NO_CONTENT)
}
