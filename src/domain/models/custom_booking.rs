use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

/// Offline booking entered by an admin. Has no status lifecycle.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct CustomBooking {
    pub id: String,
    pub guest_name: String,
    pub guest_mobile: String,
    pub guest_email: Option<String>,
    pub room_name: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: i32,
    pub amount: i64,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

pub struct NewCustomBookingParams {
    pub guest_name: String,
    pub guest_mobile: String,
    pub guest_email: Option<String>,
    pub room_name: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: i32,
    pub amount: i64,
    pub notes: Option<String>,
}

impl CustomBooking {
    pub fn new(params: NewCustomBookingParams) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            guest_name: params.guest_name,
            guest_mobile: params.guest_mobile,
            guest_email: params.guest_email,
            room_name: params.room_name,
            check_in: params.check_in,
            check_out: params.check_out,
            guests: params.guests,
            amount: params.amount,
            notes: params.notes,
            created_at: Utc::now(),
        }
    }
}
