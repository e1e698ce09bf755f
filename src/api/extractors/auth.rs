use axum::{
    extract::{FromRequestParts, FromRef},
    http::{header::AUTHORIZATION, request::Parts},
};
use crate::state::AppState;
use crate::domain::services::lifecycle::Actor;
use crate::error::AppError;
use std::sync::Arc;
use tracing::Span;

/// Identity of the caller, taken from a bearer access token.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: String,
    pub email: String,
    pub role: String,
    pub session_id: String,
}

impl AuthUser {
    pub fn actor(&self) -> Actor {
        Actor::from_role(&self.role)
    }

    pub fn is_admin(&self) -> bool {
        self.actor() == Actor::Admin
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    Arc<AppState>: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let header = parts.headers.get(AUTHORIZATION)
            .ok_or(AppError::Unauthorized)?
            .to_str()
            .map_err(|_| AppError::Unauthorized)?;

        let access_token = header.strip_prefix("Bearer ")
            .ok_or(AppError::Unauthorized)?
            .trim();

        let app_state = <Arc<AppState> as FromRef<S>>::from_ref(state);
        let claims = app_state.auth_service.verify_access_token(access_token)?;

        Span::current().record("user_id", &claims.sub);

        Ok(AuthUser {
            id: claims.sub,
            email: claims.email,
            role: claims.role,
            session_id: claims.sid,
        })
    }
}

/// An authenticated caller with the admin role.
pub struct AdminUser(pub AuthUser);

impl<S> FromRequestParts<S> for AdminUser
where
    S: Send + Sync,
    Arc<AppState>: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if !user.is_admin() {
            return Err(AppError::Forbidden("Admin access required".into()));
        }
        Ok(AdminUser(user))
    }
}
