use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

use crate::domain::models::{room::Room, user::User};
use crate::domain::services::lifecycle::{BookingStatus, LifecycleError, Quote};

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Booking {
    pub id: String,
    pub user_id: String,
    pub guest_name: String,
    pub guest_email: String,
    pub guest_mobile: Option<String>,
    pub room_id: String,
    pub room_name: String,
    pub room_type: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: i32,
    pub total_price: i64,
    pub status: String,
    pub reviewed: bool,
    pub rating: Option<i32>,
    pub feedback: Option<String>,
    pub special_requests: Option<String>,
    pub created_at: DateTime<Utc>,
}

pub struct NewBookingParams<'a> {
    pub guest: &'a User,
    pub room: &'a Room,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: i32,
    pub quote: Quote,
    pub special_requests: Option<String>,
}

impl Booking {
    pub fn new(params: NewBookingParams<'_>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: params.guest.id.clone(),
            guest_name: params.guest.name.clone(),
            guest_email: params.guest.email.clone(),
            guest_mobile: params.guest.mobile.clone(),
            room_id: params.room.id.clone(),
            room_name: params.room.name.clone(),
            room_type: params.room.room_type.clone(),
            check_in: params.check_in,
            check_out: params.check_out,
            guests: params.guests,
            total_price: params.quote.total_price,
            status: BookingStatus::Pending.as_str().to_string(),
            reviewed: false,
            rating: None,
            feedback: None,
            special_requests: params.special_requests.filter(|s| !s.trim().is_empty()),
            created_at: Utc::now(),
        }
    }

    pub fn status(&self) -> Result<BookingStatus, LifecycleError> {
        self.status.parse()
    }

    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }
}
