use axum::{
    body::Body,
    extract::Request,
    routing::{get, post, put, delete},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{
    auth, booking, booking_management, custom_booking, darshan, health, newsletter, notification,
    profile, revenue, room, staff, users,
};
use tower_http::{
    trace::TraceLayer,
    classify::ServerErrorsFailureClass,
};
use tracing::{info_span, Span, error, info};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Auth
        .route("/api/v1/auth/register", post(auth::register))
        .route("/api/v1/auth/login", post(auth::login))
        .route("/api/v1/auth/refresh", post(auth::refresh))
        .route("/api/v1/auth/logout", post(auth::logout))

        // Guest
        .route("/api/v1/users/profile", get(profile::get_profile).put(profile::update_profile))
        .route("/api/v1/users/bookings", post(booking::create_booking).get(booking::list_my_bookings))
        .route("/api/v1/users/bookings/{booking_id}/cancel", put(booking::cancel_my_booking))
        .route("/api/v1/users/bookings/{booking_id}/review", post(booking::submit_review))

        // Public
        .route("/api/v1/rooms", get(room::list_public_rooms))
        .route("/api/v1/rooms/available", get(room::search_availability))
        .route("/api/v1/rooms/{room_id}", get(room::get_room))
        .route("/api/v1/darshans", get(darshan::list_public_darshans))
        .route("/api/v1/newsletter/subscribe", post(newsletter::subscribe))

        // Admin Booking Management
        .route("/api/v1/admin/bookings", get(booking_management::list_bookings))
        .route("/api/v1/admin/bookings/{booking_id}", get(booking_management::get_booking))
        .route("/api/v1/admin/bookings/{booking_id}/status", put(booking_management::update_booking_status))

        // Admin Catalogue
        .route("/api/v1/admin/rooms", get(room::list_rooms).post(room::create_room))
        .route("/api/v1/admin/rooms/{room_id}", put(room::update_room).delete(room::delete_room))
        .route("/api/v1/admin/staff", get(staff::list_staff).post(staff::create_staff))
        .route("/api/v1/admin/staff/{staff_id}", get(staff::get_staff).put(staff::update_staff).delete(staff::delete_staff))
        .route("/api/v1/admin/darshans", get(darshan::list_darshans).post(darshan::create_darshan))
        .route("/api/v1/admin/darshans/{darshan_id}", get(darshan::get_darshan).put(darshan::update_darshan).delete(darshan::delete_darshan))

        // Admin Offline Bookings & Reports
        .route("/api/v1/admin/custom-bookings", get(custom_booking::list_custom_bookings).post(custom_booking::create_custom_booking))
        .route("/api/v1/admin/custom-bookings/{booking_id}", get(custom_booking::get_custom_booking).put(custom_booking::update_custom_booking).delete(custom_booking::delete_custom_booking))
        .route("/api/v1/admin/revenue", get(revenue::revenue_report))

        // Admin Accounts
        .route("/api/v1/admin/users", get(users::list_users))
        .route("/api/v1/admin/users/{user_id}", delete(users::delete_user))
        .route("/api/v1/admin/newsletter", get(newsletter::list_subscribers))
        .route("/api/v1/admin/newsletter/{subscriber_id}", delete(newsletter::delete_subscriber))

        // Notifications
        .route("/api/v1/notifications", get(notification::list_notifications))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                        user_id = tracing::field::Empty,
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .with_state(state)
}