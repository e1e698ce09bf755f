use axum::{extract::{State, Query}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::auth::AdminUser;
use crate::api::dtos::requests::RevenueQuery;
use crate::domain::services::revenue::build_report;
use crate::error::AppError;
use std::sync::Arc;
use chrono::{Datelike, Utc};
use tracing::debug;

pub async fn revenue_report(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Query(query): Query<RevenueQuery>,
) -> Result<impl IntoResponse, AppError> {
    let year = query.year.unwrap_or_else(|| Utc::now().year());

    let bookings = state.booking_repo.list(None).await?;
    let custom = state.custom_booking_repo.list().await?;

    let report = build_report(year, &bookings, &custom);
    debug!(year, total = report.total, "Revenue report built");
    Ok(Json(report))
}
