use axum::{extract::{State, Path, Query}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::auth::AdminUser;
use crate::api::dtos::requests::{BookingListQuery, UpdateStatusRequest};
use crate::api::dtos::responses::BookingView;
use crate::api::handlers::booking::apply_transition;
use crate::domain::models::notification::{Notification, NotificationKind, Recipient};
use crate::domain::services::lifecycle::{Actor, BookingStatus};
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

pub async fn list_bookings(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Query(query): Query<BookingListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let status = query.status
        .filter(|s| !s.trim().is_empty())
        .map(|s| s.parse::<BookingStatus>())
        .transpose()?;

    let bookings = state.booking_repo.list(status).await?;
    let views: Vec<BookingView> = bookings.into_iter().map(|b| BookingView::new(b, Actor::Admin)).collect();
    Ok(Json(views))
}

pub async fn get_booking(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(booking_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let booking = state.booking_repo.find_by_id(&booking_id).await?
        .ok_or(AppError::NotFound("Booking not found".into()))?;
    Ok(Json(BookingView::new(booking, Actor::Admin)))
}

pub async fn update_booking_status(
    State(state): State<Arc<AppState>>,
    AdminUser(admin): AdminUser,
    Path(booking_id): Path<String>,
    Json(payload): Json<UpdateStatusRequest>,
) -> Result<impl IntoResponse, AppError> {
    let requested: BookingStatus = payload.status.parse()?;

    let booking = state.booking_repo.find_by_id(&booking_id).await?
        .ok_or(AppError::NotFound("Booking not found".into()))?;

    let updated = apply_transition(&state, &booking, requested, Actor::Admin).await?;
    info!("Booking {} moved to {} by admin {}", updated.id, updated.status, admin.id);

    if requested == BookingStatus::Approved {
        state.notifications.publish(Notification::new(
            NotificationKind::BookingApproved,
            updated.id.clone(),
            Recipient::User(updated.user_id.clone()),
            format!("Your booking for {} from {} has been approved", updated.room_name, updated.check_in),
        ));
    }

    Ok(Json(BookingView::new(updated, Actor::Admin)))
}
