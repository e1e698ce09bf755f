use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub iss: String,
    pub sub: String,
    pub aud: String,
    pub exp: usize,
    pub iat: usize,
    pub jti: String,

    #[serde(rename = "https://homestay.local/claims/role")]
    pub role: String,

    #[serde(rename = "https://homestay.local/claims/email")]
    pub email: String,

    /// Refresh family the token was issued under. Stable across rotation.
    #[serde(rename = "https://homestay.local/claims/sid")]
    pub sid: String,
}

/// Output of a login or refresh.
pub struct IssuedTokens {
    pub access_token: String,
    pub refresh_token: String,
    pub session_id: String,
}

#[derive(Debug, FromRow)]
pub struct RefreshTokenRecord {
    pub token_hash: String,
    pub user_id: String,
    pub family_id: Uuid,
    pub generation_id: i32,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub user: UserProfile,
}

#[derive(Serialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub mobile: Option<String>,
    pub role: String,
}
