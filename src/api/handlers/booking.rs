use axum::{extract::{State, Path}, http::StatusCode, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::auth::AuthUser;
use crate::api::dtos::requests::{CreateBookingRequest, ReviewRequest};
use crate::api::dtos::responses::BookingView;
use crate::domain::models::booking::{Booking, NewBookingParams};
use crate::domain::models::notification::{Notification, NotificationKind, Recipient};
use crate::domain::services::lifecycle::{
    authorize_review, authorize_transition, validate_new_booking, Actor, BookingStatus, StayRequest,
};
use crate::error::AppError;
use std::sync::Arc;
use chrono::Utc;
use tracing::{error, info, warn};
use validator::Validate;

pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Json(payload): Json<CreateBookingRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    if user.is_admin() {
        return Err(AppError::Forbidden("Admins record offline stays as custom bookings".into()));
    }

    let guest = state.user_repo.find_by_id(&user.id).await?
        .ok_or(AppError::Unauthorized)?;

    let room = state.room_repo.find_by_id(&payload.room_id).await?
        .ok_or(AppError::NotFound("Room not found".into()))?;

    if !room.is_available {
        return Err(AppError::Conflict("Room is not available for booking".into()));
    }

    let stay = StayRequest {
        check_in: payload.check_in,
        check_out: payload.check_out,
        guests: payload.guests,
    };
    let quote = validate_new_booking(&stay, &room, Utc::now().date_naive())?;

    let booking = Booking::new(NewBookingParams {
        guest: &guest,
        room: &room,
        check_in: stay.check_in,
        check_out: stay.check_out,
        guests: stay.guests,
        quote,
        special_requests: payload.special_requests,
    });

    let created = state.booking_repo.create(&booking).await?;
    info!(
        booking_id = %created.id,
        nights = quote.nights,
        total_price = created.total_price,
        "Booking created for room {}", created.room_name
    );

    state.notifications.publish(Notification::new(
        NotificationKind::NewBooking,
        created.id.clone(),
        Recipient::Admins,
        format!("New booking from {} for {} ({} to {})", created.guest_name, created.room_name, created.check_in, created.check_out),
    ));

    Ok((StatusCode::CREATED, Json(BookingView::new(created, Actor::Guest))))
}

pub async fn list_my_bookings(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let actor = user.actor();
    let bookings = state.booking_repo.list_by_user(&user.id).await?;
    let views: Vec<BookingView> = bookings.into_iter().map(|b| BookingView::new(b, actor)).collect();
    Ok(Json(views))
}

pub async fn cancel_my_booking(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(booking_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let booking = find_owned_booking(&state, &user, &booking_id).await?;
    let cancelled = apply_transition(&state, &booking, BookingStatus::Cancelled, user.actor()).await?;
    info!("Booking cancelled by guest: {}", cancelled.id);
    Ok(Json(BookingView::new(cancelled, user.actor())))
}

pub async fn submit_review(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(booking_id): Path<String>,
    Json(payload): Json<ReviewRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let booking = find_owned_booking(&state, &user, &booking_id).await?;
    authorize_review(stored_status(&booking)?, booking.reviewed, user.actor(), payload.rating)?;

    let reviewed = state.booking_repo.submit_review(&booking.id, payload.rating, payload.feedback.trim()).await?
        .ok_or_else(|| AppError::Conflict("Booking has already been reviewed".into()))?;

    info!("Review submitted for booking {} (rating {})", reviewed.id, payload.rating);
    Ok(Json(BookingView::new(reviewed, user.actor())))
}

async fn find_owned_booking(state: &AppState, user: &AuthUser, booking_id: &str) -> Result<Booking, AppError> {
    state.booking_repo.find_by_id(booking_id).await?
        .filter(|b| b.user_id == user.id)
        .ok_or(AppError::NotFound("Booking not found".into()))
}

/// A row that fails to parse is a storage fault, not a bad request.
fn stored_status(booking: &Booking) -> Result<BookingStatus, AppError> {
    booking.status().map_err(|e| {
        error!("Booking {} has an unreadable status: {}", booking.id, e);
        AppError::Internal
    })
}

/// Checks the transition table, then writes the new status only if the
/// stored status is still the one the decision was made on.
pub async fn apply_transition(
    state: &AppState,
    booking: &Booking,
    requested: BookingStatus,
    actor: Actor,
) -> Result<Booking, AppError> {
    let current = stored_status(booking)?;
    authorize_transition(current, requested, actor)?;

    match state.booking_repo.transition(&booking.id, current, requested).await? {
        Some(updated) => Ok(updated),
        None => {
            warn!("Booking {} changed status while moving {} -> {}", booking.id, current, requested);
            Err(AppError::Conflict("Booking status changed, refresh and try again".into()))
        }
    }
}
