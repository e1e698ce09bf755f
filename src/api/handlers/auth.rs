use axum::{extract::State, response::IntoResponse, Json, http::StatusCode};
use crate::state::AppState;
use crate::error::AppError;
use crate::api::dtos::requests::{LoginRequest, RefreshRequest, RegisterRequest};
use crate::api::extractors::auth::AuthUser;
use crate::domain::models::auth::{AuthResponse, UserProfile};
use crate::domain::models::user::User;
use std::sync::Arc;
use tracing::info;
use validator::Validate;

pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RegisterRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    if state.user_repo.find_by_email(&payload.email).await?.is_some() {
        return Err(AppError::Conflict("An account with this email already exists".into()));
    }

    let password_hash = state.auth_service.hash_password(&payload.password)?;
    let user = User::new(payload.name.trim().to_string(), payload.email, payload.mobile, password_hash);
    let created = state.user_repo.create(&user).await?;

    info!("Registered guest account: {}", created.id);

    let response = start_session(&state, created).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let user = state.user_repo.find_by_email(&payload.email).await?
        .ok_or(AppError::Unauthorized)?;

    state.auth_service.verify_password(&payload.password, &user.password_hash)?;

    info!("User logged in: {}", user.id);
    Ok(Json(start_session(&state, user).await?))
}

pub async fn refresh(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RefreshRequest>,
) -> Result<impl IntoResponse, AppError> {
    let token_hash = state.auth_service.hash_token(&payload.refresh_token);
    let record = state.auth_repo.find_refresh_token(&token_hash).await?
        .ok_or(AppError::Unauthorized)?;

    let user = state.user_repo.find_by_id(&record.user_id).await?
        .ok_or(AppError::Unauthorized)?;

    let tokens = state.auth_service.refresh(&payload.refresh_token, &user).await?;
    state.notifications.subscribe(&tokens.session_id, &user.id, user.is_admin());

    info!("Token refreshed for user: {}", user.id);

    Ok(Json(AuthResponse {
        access_token: tokens.access_token,
        refresh_token: tokens.refresh_token,
        user: profile_of(user),
    }))
}

/// Ends only the caller's session; other devices stay signed in.
pub async fn logout(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
) -> Result<impl IntoResponse, AppError> {
    state.auth_service.logout(&user.session_id).await?;
    state.notifications.unsubscribe(&user.session_id);

    info!("User logged out: {}", user.id);
    Ok(StatusCode::OK)
}

async fn start_session(state: &AppState, user: User) -> Result<AuthResponse, AppError> {
    let tokens = state.auth_service.login(&user).await?;
    state.notifications.subscribe(&tokens.session_id, &user.id, user.is_admin());

    Ok(AuthResponse {
        access_token: tokens.access_token,
        refresh_token: tokens.refresh_token,
        user: profile_of(user),
    })
}

pub fn profile_of(user: User) -> UserProfile {
    UserProfile {
        id: user.id,
        name: user.name,
        email: user.email,
        mobile: user.mobile,
        role: user.role,
    }
}
