use axum::{extract::State, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::auth::AuthUser;
use std::sync::Arc;

pub async fn list_notifications(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
) -> impl IntoResponse {
    Json(state.notifications.inbox(&user.session_id))
}
