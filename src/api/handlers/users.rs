use axum::{extract::{State, Path}, http::StatusCode, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::auth::AdminUser;
use crate::api::handlers::auth::profile_of;
use crate::domain::models::auth::UserProfile;
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

pub async fn list_users(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
) -> Result<impl IntoResponse, AppError> {
    let users = state.user_repo.list().await?;
    let profiles: Vec<UserProfile> = users.into_iter().map(profile_of).collect();
    Ok(Json(profiles))
}

pub async fn delete_user(
    State(state): State<Arc<AppState>>,
    AdminUser(admin): AdminUser,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    if admin.id == user_id {
        return Err(AppError::Conflict("Cannot delete your own account".into()));
    }

    // Refresh tokens go with the user (ON DELETE CASCADE); bookings keep their snapshot.
    // Access tokens stay valid until expiry, but every open session is closed here.
    state.user_repo.delete(&user_id).await?;
    state.notifications.unsubscribe_user(&user_id);

    info!("User {} deleted by admin {}", user_id, admin.id);
    Ok(StatusCode::NO_CONTENT)
}
