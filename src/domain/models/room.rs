use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::domain::services::lifecycle::effective_rate;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Room {
    pub id: String,
    pub name: String,
    pub room_type: String,
    pub description: String,
    pub price: i64,
    pub discount_price: Option<i64>,
    pub capacity: i32,
    pub image_url: Option<String>,
    pub is_available: bool,
    pub created_at: DateTime<Utc>,
}

impl Room {
    pub fn new(
        name: String,
        room_type: String,
        description: String,
        price: i64,
        discount_price: Option<i64>,
        capacity: i32,
        image_url: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            room_type,
            description,
            price,
            discount_price,
            capacity,
            image_url,
            is_available: true,
            created_at: Utc::now(),
        }
    }

    pub fn nightly_rate(&self) -> i64 {
        effective_rate(self.price, self.discount_price)
    }
}
