mod common;

use axum::http::StatusCode;
use common::{days_from_now, TestApp};
use serde_json::json;

#[tokio::test]
async fn test_public_room_listing_hides_unavailable() {
    let app = TestApp::new().await;
    let admin = app.create_admin("admin@homestay.test").await;
    let open = app.create_room(&admin.access_token, "Tulsi", 1800, None, 2).await;
    let closed = app.create_room(&admin.access_token, "Kamal", 2500, None, 4).await;

    app.request("PUT", &format!("/api/v1/admin/rooms/{}", closed), Some(&admin.access_token), Some(json!({
        "is_available": false
    }))).await;

    let (status, rooms) = app.request("GET", "/api/v1/rooms", None, None).await;
    assert_eq!(status, StatusCode::OK);
    let rooms = rooms.as_array().unwrap();
    assert_eq!(rooms.len(), 1);
    assert_eq!(rooms[0]["id"], open.as_str());

    let (status, _) = app.request("GET", &format!("/api/v1/rooms/{}", closed), None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, all) = app.request("GET", "/api/v1/admin/rooms", Some(&admin.access_token), None).await;
    assert_eq!(all.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_availability_search_quotes_stay() {
    let app = TestApp::new().await;
    let admin = app.create_admin("admin@homestay.test").await;
    let small = app.create_room(&admin.access_token, "Tulsi", 2000, Some(1500), 2).await;
    app.create_room(&admin.access_token, "Single", 900, None, 1).await;

    let uri = format!("/api/v1/rooms/available?check_in={}&check_out={}&guests=2", days_from_now(3), days_from_now(6));
    let (status, body) = app.request("GET", &uri, None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["nights"], 3);
    let rooms = body["rooms"].as_array().unwrap();
    assert_eq!(rooms.len(), 1);
    assert_eq!(rooms[0]["id"], small.as_str());
    assert_eq!(rooms[0]["nightly_rate"], 1500);
    assert_eq!(rooms[0]["total_price"], 4500);

    let uri = format!("/api/v1/rooms/available?check_in={}&check_out={}", days_from_now(6), days_from_now(3));
    let (status, _) = app.request("GET", &uri, None, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_room_update_clears_discount() {
    let app = TestApp::new().await;
    let admin = app.create_admin("admin@homestay.test").await;
    let room_id = app.create_room(&admin.access_token, "Tulsi", 2000, Some(1500), 2).await;

    let (status, body) = app.request("PUT", &format!("/api/v1/admin/rooms/{}", room_id), Some(&admin.access_token), Some(json!({
        "price": 2200,
        "discount_price": 0
    }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["price"], 2200);
    assert!(body["discount_price"].is_null());
}

#[tokio::test]
async fn test_room_validation_and_admin_guard() {
    let app = TestApp::new().await;
    let admin = app.create_admin("admin@homestay.test").await;
    let guest = app.register_guest("Asha", "asha@example.com").await;

    let (status, _) = app.request("POST", "/api/v1/admin/rooms", Some(&admin.access_token), Some(json!({
        "name": "Broken", "room_type": "Deluxe", "price": -5, "capacity": 0
    }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Prices large enough to overflow a stay total are refused up front
    let (status, _) = app.request("POST", "/api/v1/admin/rooms", Some(&admin.access_token), Some(json!({
        "name": "Palace", "room_type": "Suite", "price": i64::MAX / 2, "capacity": 2
    }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app.request("POST", "/api/v1/admin/rooms", Some(&guest.access_token), Some(json!({
        "name": "Sneaky", "room_type": "Deluxe", "price": 100, "capacity": 1
    }))).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_room_with_bookings_cannot_be_deleted() {
    let app = TestApp::new().await;
    let admin = app.create_admin("admin@homestay.test").await;
    let guest = app.register_guest("Asha", "asha@example.com").await;
    let booked = app.create_room(&admin.access_token, "Tulsi", 2000, None, 2).await;
    let spare = app.create_room(&admin.access_token, "Spare", 1000, None, 2).await;

    let (status, _) = app.request("POST", "/api/v1/users/bookings", Some(&guest.access_token), Some(json!({
        "room_id": booked, "check_in": days_from_now(4), "check_out": days_from_now(5), "guests": 1
    }))).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = app.request("DELETE", &format!("/api/v1/admin/rooms/{}", booked), Some(&admin.access_token), None).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = app.request("DELETE", &format!("/api/v1/admin/rooms/{}", spare), Some(&admin.access_token), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = app.request("DELETE", &format!("/api/v1/admin/rooms/{}", spare), Some(&admin.access_token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
