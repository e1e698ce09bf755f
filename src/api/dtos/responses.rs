use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::models::{booking::Booking, room::Room};
use crate::domain::services::lifecycle::{allowed_actions, Actor, BookingAction};

/// A booking plus the actions the caller may take on it.
#[derive(Serialize)]
pub struct BookingView {
    #[serde(flatten)]
    pub booking: Booking,
    pub nights: i64,
    pub actions: Vec<BookingAction>,
}

impl BookingView {
    pub fn new(booking: Booking, actor: Actor) -> Self {
        let actions = booking
            .status()
            .map(|status| allowed_actions(status, booking.reviewed, actor))
            .unwrap_or_default();
        let nights = booking.nights();
        Self { booking, nights, actions }
    }
}

#[derive(Serialize)]
pub struct RoomQuote {
    #[serde(flatten)]
    pub room: Room,
    pub nightly_rate: i64,
    pub total_price: i64,
}

#[derive(Serialize)]
pub struct AvailabilityResponse {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub nights: i64,
    pub rooms: Vec<RoomQuote>,
}
