use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A nearby temple or site listed on the public site.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Darshan {
    pub id: String,
    pub name: String,
    pub description: String,
    pub location: String,
    pub timings: Option<String>,
    pub image_url: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Darshan {
    pub fn new(name: String, description: String, location: String, timings: Option<String>, image_url: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            description,
            location,
            timings,
            image_url,
            is_active: true,
            created_at: Utc::now(),
        }
    }
}
