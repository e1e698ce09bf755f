use axum::{extract::{State, Path}, http::StatusCode, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::auth::AdminUser;
use crate::api::dtos::requests::SubscribeRequest;
use crate::domain::models::newsletter::Subscriber;
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;
use validator::Validate;

pub async fn subscribe(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<SubscribeRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let created = state.newsletter_repo.subscribe(&Subscriber::new(&payload.email)).await?;
    info!("Newsletter subscription added: {}", created.id);
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn list_subscribers(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.newsletter_repo.list().await?))
}

pub async fn delete_subscriber(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(subscriber_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.newsletter_repo.delete(&subscriber_id).await?;
    info!("Newsletter subscriber removed: {}", subscriber_id);
    Ok(StatusCode::NO_CONTENT)
}
