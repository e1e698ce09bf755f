mod common;

use axum::http::StatusCode;
use common::{days_from_now, TestApp};
use serde_json::json;

async fn setup() -> (TestApp, common::Session, common::Session, String) {
    let app = TestApp::new().await;
    let admin = app.create_admin("admin@homestay.test").await;
    let guest = app.register_guest("Asha", "asha@example.com").await;
    let room_id = app.create_room(&admin.access_token, "Lotus Suite", 2000, Some(1500), 3).await;
    (app, admin, guest, room_id)
}

async fn book(app: &TestApp, token: &str, room_id: &str) -> String {
    let (status, body) = app.request("POST", "/api/v1/users/bookings", Some(token), Some(json!({
        "room_id": room_id,
        "check_in": days_from_now(10),
        "check_out": days_from_now(13),
        "guests": 2
    }))).await;
    assert_eq!(status, StatusCode::CREATED, "booking failed: {}", body);
    body["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_create_booking_prices_with_discount() {
    let (app, _admin, guest, room_id) = setup().await;

    let (status, body) = app.request("POST", "/api/v1/users/bookings", Some(&guest.access_token), Some(json!({
        "roomId": room_id,
        "checkIn": days_from_now(10),
        "checkOut": days_from_now(13),
        "guests": 2,
        "specialRequests": "Late arrival"
    }))).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status"], "PENDING");
    assert_eq!(body["nights"], 3);
    assert_eq!(body["total_price"], 4500);
    assert_eq!(body["room_name"], "Lotus Suite");
    assert_eq!(body["guest_email"], "asha@example.com");
    assert_eq!(body["reviewed"], false);
    assert_eq!(body["actions"], json!(["cancel"]));

    let (status, list) = app.request("GET", "/api/v1/users/bookings", Some(&guest.access_token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_create_booking_rejects_bad_input() {
    let (app, _admin, guest, room_id) = setup().await;
    let token = Some(guest.access_token.as_str());

    // check-out before check-in
    let (status, _) = app.request("POST", "/api/v1/users/bookings", token, Some(json!({
        "room_id": room_id, "check_in": days_from_now(5), "check_out": days_from_now(3), "guests": 1
    }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // check-in in the past
    let (status, _) = app.request("POST", "/api/v1/users/bookings", token, Some(json!({
        "room_id": room_id, "check_in": days_from_now(-2), "check_out": days_from_now(1), "guests": 1
    }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // over capacity
    let (status, body) = app.request("POST", "/api/v1/users/bookings", token, Some(json!({
        "room_id": room_id, "check_in": days_from_now(5), "check_out": days_from_now(6), "guests": 4
    }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("Guests"));

    // oversized special requests
    let (status, body) = app.request("POST", "/api/v1/users/bookings", token, Some(json!({
        "room_id": room_id, "check_in": days_from_now(5), "check_out": days_from_now(6), "guests": 1,
        "special_requests": "x".repeat(2001)
    }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("special_requests"));

    // unknown room
    let (status, _) = app.request("POST", "/api/v1/users/bookings", token, Some(json!({
        "room_id": "missing", "check_in": days_from_now(5), "check_out": days_from_now(6), "guests": 1
    }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, list) = app.request("GET", "/api/v1/users/bookings", token, None).await;
    assert!(list.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_unavailable_room_cannot_be_booked() {
    let (app, admin, guest, room_id) = setup().await;

    let (status, _) = app.request("PUT", &format!("/api/v1/admin/rooms/{}", room_id), Some(&admin.access_token), Some(json!({
        "is_available": false
    }))).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = app.request("POST", "/api/v1/users/bookings", Some(&guest.access_token), Some(json!({
        "room_id": room_id, "check_in": days_from_now(5), "check_out": days_from_now(6), "guests": 1
    }))).await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_admin_approval_is_not_repeatable() {
    let (app, admin, guest, room_id) = setup().await;
    let booking_id = book(&app, &guest.access_token, &room_id).await;
    let uri = format!("/api/v1/admin/bookings/{}/status", booking_id);

    let (status, body) = app.request("PUT", &uri, Some(&admin.access_token), Some(json!({"status": "APPROVED"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "APPROVED");
    assert_eq!(body["actions"], json!(["cancel", "complete"]));

    let (status, _) = app.request("PUT", &uri, Some(&admin.access_token), Some(json!({"status": "approved"}))).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (_, stored) = app.request("GET", &format!("/api/v1/admin/bookings/{}", booking_id), Some(&admin.access_token), None).await;
    assert_eq!(stored["status"], "APPROVED");
}

#[tokio::test]
async fn test_guest_cannot_approve_or_complete() {
    let (app, _admin, guest, room_id) = setup().await;
    let booking_id = book(&app, &guest.access_token, &room_id).await;

    let (status, _) = app.request(
        "PUT",
        &format!("/api/v1/admin/bookings/{}/status", booking_id),
        Some(&guest.access_token),
        Some(json!({"status": "APPROVED"})),
    ).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_guest_cancels_approved_booking() {
    let (app, admin, guest, room_id) = setup().await;
    let booking_id = book(&app, &guest.access_token, &room_id).await;
    let status_uri = format!("/api/v1/admin/bookings/{}/status", booking_id);
    let cancel_uri = format!("/api/v1/users/bookings/{}/cancel", booking_id);

    app.request("PUT", &status_uri, Some(&admin.access_token), Some(json!({"status": "APPROVED"}))).await;

    let (status, body) = app.request("PUT", &cancel_uri, Some(&guest.access_token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "CANCELLED");
    assert_eq!(body["actions"], json!([]));

    // Terminal: nothing moves it any more
    for requested in ["APPROVED", "COMPLETED", "CANCELLED", "PENDING"] {
        let (status, _) = app.request("PUT", &status_uri, Some(&admin.access_token), Some(json!({"status": requested}))).await;
        assert_eq!(status, StatusCode::CONFLICT, "{} should be rejected", requested);
    }
    let (status, _) = app.request("PUT", &cancel_uri, Some(&guest.access_token), None).await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_other_guest_cannot_touch_booking() {
    let (app, _admin, guest, room_id) = setup().await;
    let intruder = app.register_guest("Ravi", "ravi@example.com").await;
    let booking_id = book(&app, &guest.access_token, &room_id).await;

    let (status, _) = app.request(
        "PUT",
        &format!("/api/v1/users/bookings/{}/cancel", booking_id),
        Some(&intruder.access_token),
        None,
    ).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, list) = app.request("GET", "/api/v1/users/bookings", Some(&intruder.access_token), None).await;
    assert!(list.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_review_after_completion_only_once() {
    let (app, admin, guest, room_id) = setup().await;
    let booking_id = book(&app, &guest.access_token, &room_id).await;
    let status_uri = format!("/api/v1/admin/bookings/{}/status", booking_id);
    let review_uri = format!("/api/v1/users/bookings/{}/review", booking_id);
    let review = json!({"rating": 5, "feedback": "Great stay"});

    // Not completed yet
    let (status, _) = app.request("POST", &review_uri, Some(&guest.access_token), Some(review.clone())).await;
    assert_eq!(status, StatusCode::CONFLICT);

    app.request("PUT", &status_uri, Some(&admin.access_token), Some(json!({"status": "APPROVED"}))).await;
    let (status, body) = app.request("PUT", &status_uri, Some(&admin.access_token), Some(json!({"status": "COMPLETED"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "COMPLETED");

    let (status, _) = app.request("POST", &review_uri, Some(&guest.access_token), Some(json!({"rating": 6}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = app.request("POST", &review_uri, Some(&guest.access_token), Some(review.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["reviewed"], true);
    assert_eq!(body["rating"], 5);
    assert_eq!(body["feedback"], "Great stay");
    assert_eq!(body["actions"], json!([]));

    let (status, _) = app.request("POST", &review_uri, Some(&guest.access_token), Some(json!({"rating": 1, "feedback": "Changed my mind"}))).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (_, stored) = app.request("GET", &format!("/api/v1/admin/bookings/{}", booking_id), Some(&admin.access_token), None).await;
    assert_eq!(stored["rating"], 5);
}

#[tokio::test]
async fn test_admin_list_filters_by_status() {
    let (app, admin, guest, room_id) = setup().await;
    let first = book(&app, &guest.access_token, &room_id).await;
    book(&app, &guest.access_token, &room_id).await;

    app.request("PUT", &format!("/api/v1/admin/bookings/{}/status", first), Some(&admin.access_token), Some(json!({"status": "APPROVED"}))).await;

    let (status, all) = app.request("GET", "/api/v1/admin/bookings", Some(&admin.access_token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(all.as_array().unwrap().len(), 2);

    let (_, approved) = app.request("GET", "/api/v1/admin/bookings?status=approved", Some(&admin.access_token), None).await;
    assert_eq!(approved.as_array().unwrap().len(), 1);
    assert_eq!(approved[0]["id"], first.as_str());

    // NEW is the legacy name for PENDING
    let (_, pending) = app.request("GET", "/api/v1/admin/bookings?status=NEW", Some(&admin.access_token), None).await;
    assert_eq!(pending.as_array().unwrap().len(), 1);

    let (status, _) = app.request("GET", "/api/v1/admin/bookings?status=LOST", Some(&admin.access_token), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app.request("GET", "/api/v1/admin/bookings", Some(&guest.access_token), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_admin_cannot_create_guest_booking() {
    let (app, admin, _guest, room_id) = setup().await;
    let (status, _) = app.request("POST", "/api/v1/users/bookings", Some(&admin.access_token), Some(json!({
        "room_id": room_id, "check_in": days_from_now(5), "check_out": days_from_now(6), "guests": 1
    }))).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_unreadable_stored_status_is_server_error() {
    let (app, admin, guest, room_id) = setup().await;
    let booking_id = book(&app, &guest.access_token, &room_id).await;

    sqlx::query("UPDATE bookings SET status = 'ON_HOLD' WHERE id = ?")
        .bind(&booking_id)
        .execute(&app.pool)
        .await
        .unwrap();

    let (status, _) = app.request("PUT", &format!("/api/v1/users/bookings/{}/cancel", booking_id), Some(&guest.access_token), None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    // A bad status typed by the client is still the client's fault
    let (status, _) = app.request(
        "PUT",
        &format!("/api/v1/admin/bookings/{}/status", booking_id),
        Some(&admin.access_token),
        Some(json!({"status": "ON_HOLD"})),
    ).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
