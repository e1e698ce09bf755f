//! Booking status graph, actor permissions, review guard and the
//! stay quote computed when a guest creates a booking.
//!
//! Everything in here is pure: handlers load the current booking, ask this
//! module whether the requested change is legal, and only then touch storage.

use std::fmt;
use std::str::FromStr;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::models::room::Room;

const DAY_MS: i64 = 86_400_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Pending,
    Approved,
    Cancelled,
    Completed,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "PENDING",
            BookingStatus::Approved => "APPROVED",
            BookingStatus::Cancelled => "CANCELLED",
            BookingStatus::Completed => "COMPLETED",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, BookingStatus::Cancelled | BookingStatus::Completed)
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = LifecycleError;

    /// Case-insensitive. `New` is accepted as an alias of `Pending`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "PENDING" | "NEW" => Ok(BookingStatus::Pending),
            "APPROVED" => Ok(BookingStatus::Approved),
            "CANCELLED" => Ok(BookingStatus::Cancelled),
            "COMPLETED" => Ok(BookingStatus::Completed),
            _ => Err(LifecycleError::UnknownStatus(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Actor {
    Guest,
    Admin,
}

impl Actor {
    pub fn from_role(role: &str) -> Self {
        if role.eq_ignore_ascii_case("ADMIN") {
            Actor::Admin
        } else {
            Actor::Guest
        }
    }
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Actor::Guest => f.write_str("guest"),
            Actor::Admin => f.write_str("admin"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LifecycleError {
    #[error("Booking cannot move from {from} to {to}")]
    IllegalTransition { from: BookingStatus, to: BookingStatus },
    #[error("A {actor} may not move a booking to {to}")]
    NotPermitted { actor: Actor, to: BookingStatus },
    #[error("Only completed bookings can be reviewed (current status: {0})")]
    NotCompleted(BookingStatus),
    #[error("Booking has already been reviewed")]
    AlreadyReviewed,
    #[error("Check-out must be after check-in")]
    InvalidDateRange,
    #[error("Check-in cannot be in the past")]
    PastCheckIn,
    #[error("Guests must be between 1 and {capacity} (got {requested})")]
    GuestCount { requested: i32, capacity: i32 },
    #[error("Rating must be between 1 and 5 (got {0})")]
    InvalidRating(i32),
    #[error("Stay total is too large")]
    PriceOverflow,
    #[error("Unknown booking status '{0}'")]
    UnknownStatus(String),
}

/// Decides whether `actor` may move a booking from `current` to `requested`.
/// Ownership of the booking is checked by the caller.
pub fn authorize_transition(
    current: BookingStatus,
    requested: BookingStatus,
    actor: Actor,
) -> Result<(), LifecycleError> {
    use BookingStatus::*;

    let admin_only = match (current, requested) {
        (Pending, Approved) => true,
        (Pending | Approved, Cancelled) => false,
        (Approved, Completed) => true,
        _ => return Err(LifecycleError::IllegalTransition { from: current, to: requested }),
    };

    if admin_only && actor != Actor::Admin {
        return Err(LifecycleError::NotPermitted { actor, to: requested });
    }
    Ok(())
}

/// Guest-only, once, and only after the stay is completed.
pub fn authorize_review(
    status: BookingStatus,
    reviewed: bool,
    actor: Actor,
    rating: i32,
) -> Result<(), LifecycleError> {
    if actor != Actor::Guest {
        return Err(LifecycleError::NotPermitted { actor, to: status });
    }
    if status != BookingStatus::Completed {
        return Err(LifecycleError::NotCompleted(status));
    }
    if reviewed {
        return Err(LifecycleError::AlreadyReviewed);
    }
    if !(1..=5).contains(&rating) {
        return Err(LifecycleError::InvalidRating(rating));
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingAction {
    Approve,
    Cancel,
    Complete,
    Review,
}

/// Actions a client should offer for a booking in its current state.
pub fn allowed_actions(status: BookingStatus, reviewed: bool, actor: Actor) -> Vec<BookingAction> {
    let mut actions = Vec::new();
    if authorize_transition(status, BookingStatus::Approved, actor).is_ok() {
        actions.push(BookingAction::Approve);
    }
    if authorize_transition(status, BookingStatus::Cancelled, actor).is_ok() {
        actions.push(BookingAction::Cancel);
    }
    if authorize_transition(status, BookingStatus::Completed, actor).is_ok() {
        actions.push(BookingAction::Complete);
    }
    if actor == Actor::Guest && status == BookingStatus::Completed && !reviewed {
        actions.push(BookingAction::Review);
    }
    actions
}

/// Partial days count as a full night.
pub fn nights_for(stay: Duration) -> i64 {
    let ms = stay.num_milliseconds();
    if ms <= 0 {
        return 0;
    }
    (ms + DAY_MS - 1) / DAY_MS
}

/// Discounted price when it is positive and strictly below list price.
pub fn effective_rate(price: i64, discount_price: Option<i64>) -> i64 {
    match discount_price {
        Some(discount) if discount > 0 && discount < price => discount,
        _ => price,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Quote {
    pub nights: i64,
    pub rate: i64,
    pub total_price: i64,
}

pub fn quote(check_in: NaiveDate, check_out: NaiveDate, price: i64, discount_price: Option<i64>) -> Result<Quote, LifecycleError> {
    if check_out <= check_in {
        return Err(LifecycleError::InvalidDateRange);
    }
    let nights = nights_for(check_out - check_in);
    let rate = effective_rate(price, discount_price).max(0);
    let total_price = nights.checked_mul(rate).ok_or(LifecycleError::PriceOverflow)?;
    Ok(Quote { nights, rate, total_price })
}

#[derive(Debug, Clone, Copy)]
pub struct StayRequest {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: i32,
}

/// Guards applied before a booking is created. `today` is injected so the
/// past-date rule stays deterministic.
pub fn validate_new_booking(stay: &StayRequest, room: &Room, today: NaiveDate) -> Result<Quote, LifecycleError> {
    if stay.check_out <= stay.check_in {
        return Err(LifecycleError::InvalidDateRange);
    }
    if stay.check_in < today {
        return Err(LifecycleError::PastCheckIn);
    }
    if stay.guests < 1 || stay.guests > room.capacity {
        return Err(LifecycleError::GuestCount { requested: stay.guests, capacity: room.capacity });
    }
    quote(stay.check_in, stay.check_out, room.price, room.discount_price)
}
