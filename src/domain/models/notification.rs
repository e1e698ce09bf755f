use serde::Serialize;
use uuid::Uuid;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationKind {
    NewBooking,
    BookingApproved,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "user_id", rename_all = "lowercase")]
pub enum Recipient {
    Admins,
    User(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct Notification {
    pub id: String,
    pub kind: NotificationKind,
    pub booking_id: String,
    pub recipient: Recipient,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(kind: NotificationKind, booking_id: String, recipient: Recipient, message: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            kind,
            booking_id,
            recipient,
            message,
            created_at: Utc::now(),
        }
    }
}
