use axum::{extract::{State, Path, Query}, http::StatusCode, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::auth::AdminUser;
use crate::api::dtos::requests::{AvailabilityQuery, CreateRoomRequest, UpdateRoomRequest};
use crate::api::dtos::responses::{AvailabilityResponse, RoomQuote};
use crate::domain::models::room::Room;
use crate::domain::services::lifecycle::{nights_for, quote, LifecycleError};
use crate::error::AppError;
use std::sync::Arc;
use chrono::Utc;
use tracing::info;
use validator::Validate;

pub async fn list_public_rooms(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let rooms = state.room_repo.list_available(1).await?;
    Ok(Json(rooms))
}

pub async fn get_room(
    State(state): State<Arc<AppState>>,
    Path(room_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let room = state.room_repo.find_by_id(&room_id).await?
        .filter(|r| r.is_available)
        .ok_or(AppError::NotFound("Room not found".into()))?;
    Ok(Json(room))
}

/// Rooms that can take the party, priced for the requested stay.
pub async fn search_availability(
    State(state): State<Arc<AppState>>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<impl IntoResponse, AppError> {
    if query.check_out <= query.check_in {
        return Err(LifecycleError::InvalidDateRange.into());
    }
    if query.check_in < Utc::now().date_naive() {
        return Err(LifecycleError::PastCheckIn.into());
    }
    let guests = query.guests.unwrap_or(1);
    if guests < 1 {
        return Err(AppError::Validation("guests: At least one guest is required".into()));
    }

    let nights = nights_for(query.check_out - query.check_in);
    let rooms = state.room_repo.list_available(guests).await?
        .into_iter()
        .map(|room| {
            let q = quote(query.check_in, query.check_out, room.price, room.discount_price)?;
            Ok(RoomQuote { room, nightly_rate: q.rate, total_price: q.total_price })
        })
        .collect::<Result<Vec<_>, LifecycleError>>()?;

    Ok(Json(AvailabilityResponse {
        check_in: query.check_in,
        check_out: query.check_out,
        nights,
        rooms,
    }))
}

pub async fn list_rooms(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
) -> Result<impl IntoResponse, AppError> {
    let rooms = state.room_repo.list().await?;
    Ok(Json(rooms))
}

pub async fn create_room(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Json(payload): Json<CreateRoomRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let mut room = Room::new(
        payload.name.trim().to_string(),
        payload.room_type.trim().to_string(),
        payload.description.unwrap_or_default(),
        payload.price,
        payload.discount_price.filter(|d| *d > 0),
        payload.capacity,
        payload.image_url,
    );
    if let Some(available) = payload.is_available {
        room.is_available = available;
    }

    let created = state.room_repo.create(&room).await?;
    info!("Room created: {} ({})", created.name, created.id);
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_room(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(room_id): Path<String>,
    Json(payload): Json<UpdateRoomRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let mut room = state.room_repo.find_by_id(&room_id).await?
        .ok_or(AppError::NotFound("Room not found".into()))?;

    if let Some(name) = payload.name { room.name = name.trim().to_string(); }
    if let Some(room_type) = payload.room_type { room.room_type = room_type; }
    if let Some(description) = payload.description { room.description = description; }
    if let Some(price) = payload.price { room.price = price; }
    if let Some(discount) = payload.discount_price {
        room.discount_price = (discount > 0).then_some(discount);
    }
    if let Some(capacity) = payload.capacity { room.capacity = capacity; }
    if let Some(image_url) = payload.image_url { room.image_url = Some(image_url); }
    if let Some(available) = payload.is_available { room.is_available = available; }

    let updated = state.room_repo.update(&room).await?;
    info!("Room updated: {}", updated.id);
    Ok(Json(updated))
}

pub async fn delete_room(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(room_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    // Bookings keep a snapshot of the room, but history should stay traceable
    if state.booking_repo.count_by_room(&room_id).await? > 0 {
        return Err(AppError::Conflict("Room has bookings; mark it unavailable instead".into()));
    }

    state.room_repo.delete(&room_id).await?;
    info!("Room deleted: {}", room_id);
    Ok(StatusCode::NO_CONTENT)
}
