use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Staff {
    pub id: String,
    pub name: String,
    pub designation: String,
    pub mobile: String,
    pub email: Option<String>,
    pub salary: i64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Staff {
    pub fn new(name: String, designation: String, mobile: String, email: Option<String>, salary: i64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            designation,
            mobile,
            email,
            salary,
            is_active: true,
            created_at: Utc::now(),
        }
    }
}
