mod common;

use axum::http::StatusCode;
use chrono::{Datelike, Utc};
use common::{days_from_now, TestApp};
use serde_json::json;

#[tokio::test]
async fn test_staff_crud() {
    let app = TestApp::new().await;
    let admin = app.create_admin("admin@homestay.test").await;
    let token = Some(admin.access_token.as_str());

    let (status, created) = app.request("POST", "/api/v1/admin/staff", token, Some(json!({
        "name": "Gopal", "designation": "Caretaker", "mobile": "9000000001", "salary": 15000
    }))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["is_active"], true);
    let staff_uri = format!("/api/v1/admin/staff/{}", created["id"].as_str().unwrap());

    let (status, updated) = app.request("PUT", &staff_uri, token, Some(json!({
        "designation": "Manager", "is_active": false
    }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["designation"], "Manager");
    assert_eq!(updated["is_active"], false);
    assert_eq!(updated["salary"], 15000);

    let (status, fetched) = app.request("GET", &staff_uri, token, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["name"], "Gopal");

    let (status, _) = app.request("POST", "/api/v1/admin/staff", token, Some(json!({
        "name": "", "designation": "Cook", "mobile": "12"
    }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app.request("DELETE", &staff_uri, token, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (_, list) = app.request("GET", "/api/v1/admin/staff", token, None).await;
    assert!(list.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_darshan_public_list_shows_active_only() {
    let app = TestApp::new().await;
    let admin = app.create_admin("admin@homestay.test").await;
    let token = Some(admin.access_token.as_str());

    let (_, temple) = app.request("POST", "/api/v1/admin/darshans", token, Some(json!({
        "name": "Kashi Vishwanath", "location": "Varanasi", "timings": "03:00 - 23:00"
    }))).await;
    let (status, ghat) = app.request("POST", "/api/v1/admin/darshans", token, Some(json!({
        "name": "Dashashwamedh Ghat"
    }))).await;
    assert_eq!(status, StatusCode::CREATED);

    app.request("PUT", &format!("/api/v1/admin/darshans/{}", ghat["id"].as_str().unwrap()), token, Some(json!({
        "is_active": false
    }))).await;

    let (status, public) = app.request("GET", "/api/v1/darshans", None, None).await;
    assert_eq!(status, StatusCode::OK);
    let public = public.as_array().unwrap();
    assert_eq!(public.len(), 1);
    assert_eq!(public[0]["id"], temple["id"]);

    let (_, all) = app.request("GET", "/api/v1/admin/darshans", token, None).await;
    assert_eq!(all.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_custom_booking_crud_and_validation() {
    let app = TestApp::new().await;
    let admin = app.create_admin("admin@homestay.test").await;
    let token = Some(admin.access_token.as_str());

    let payload = json!({
        "guest_name": "Walk-in Guest",
        "guest_mobile": "9000000002",
        "room_name": "Tulsi",
        "check_in": days_from_now(1),
        "check_out": days_from_now(3),
        "guests": 2,
        "amount": 3000
    });
    let (status, created) = app.request("POST", "/api/v1/admin/custom-bookings", token, Some(payload.clone())).await;
    assert_eq!(status, StatusCode::CREATED);
    let uri = format!("/api/v1/admin/custom-bookings/{}", created["id"].as_str().unwrap());

    let mut changed = payload.clone();
    changed["amount"] = json!(3500);
    changed["notes"] = json!("Paid in cash");
    let (status, updated) = app.request("PUT", &uri, token, Some(changed)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["amount"], 3500);
    assert_eq!(updated["notes"], "Paid in cash");

    let mut backwards = payload.clone();
    backwards["check_out"] = json!(days_from_now(0));
    let (status, _) = app.request("POST", "/api/v1/admin/custom-bookings", token, Some(backwards)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app.request("DELETE", &uri, token, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = app.request("GET", &uri, token, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_newsletter_subscription() {
    let app = TestApp::new().await;
    let admin = app.create_admin("admin@homestay.test").await;

    let (status, created) = app.request("POST", "/api/v1/newsletter/subscribe", None, Some(json!({
        "email": "Reader@Example.com"
    }))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["email"], "reader@example.com");

    let (status, _) = app.request("POST", "/api/v1/newsletter/subscribe", None, Some(json!({
        "email": "reader@example.com"
    }))).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = app.request("POST", "/api/v1/newsletter/subscribe", None, Some(json!({
        "email": "nope"
    }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, list) = app.request("GET", "/api/v1/admin/newsletter", Some(&admin.access_token), None).await;
    assert_eq!(list.as_array().unwrap().len(), 1);

    let (status, _) = app.request(
        "DELETE",
        &format!("/api/v1/admin/newsletter/{}", created["id"].as_str().unwrap()),
        Some(&admin.access_token),
        None,
    ).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_admin_user_management() {
    let app = TestApp::new().await;
    let admin = app.create_admin("admin@homestay.test").await;
    let guest = app.register_guest("Asha", "asha@example.com").await;

    let (status, users) = app.request("GET", "/api/v1/admin/users", Some(&admin.access_token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(users.as_array().unwrap().len(), 2);

    let (status, _) = app.request("DELETE", &format!("/api/v1/admin/users/{}", admin.user_id), Some(&admin.access_token), None).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = app.request("DELETE", &format!("/api/v1/admin/users/{}", guest.user_id), Some(&admin.access_token), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(!app.state.notifications.has_subscription_for(&guest.user_id));

    // Refresh tokens went with the account
    let (status, _) = app.request("POST", "/api/v1/auth/refresh", None, Some(json!({
        "refresh_token": guest.refresh_token
    }))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_revenue_counts_approved_completed_and_offline() {
    let app = TestApp::new().await;
    let admin = app.create_admin("admin@homestay.test").await;
    let guest = app.register_guest("Asha", "asha@example.com").await;
    let room_id = app.create_room(&admin.access_token, "Tulsi", 1000, None, 2).await;

    let mut ids = Vec::new();
    for _ in 0..3 {
        let (_, body) = app.request("POST", "/api/v1/users/bookings", Some(&guest.access_token), Some(json!({
            "room_id": room_id, "check_in": days_from_now(2), "check_out": days_from_now(4), "guests": 1
        }))).await;
        ids.push(body["id"].as_str().unwrap().to_string());
    }

    // approved, completed, and one left pending
    app.request("PUT", &format!("/api/v1/admin/bookings/{}/status", ids[0]), Some(&admin.access_token), Some(json!({"status": "APPROVED"}))).await;
    app.request("PUT", &format!("/api/v1/admin/bookings/{}/status", ids[1]), Some(&admin.access_token), Some(json!({"status": "APPROVED"}))).await;
    app.request("PUT", &format!("/api/v1/admin/bookings/{}/status", ids[1]), Some(&admin.access_token), Some(json!({"status": "COMPLETED"}))).await;

    app.request("POST", "/api/v1/admin/custom-bookings", Some(&admin.access_token), Some(json!({
        "guest_name": "Walk-in", "guest_mobile": "9000000003", "room_name": "Tulsi",
        "check_in": days_from_now(2), "check_out": days_from_now(3), "guests": 1, "amount": 700
    }))).await;

    let year = (Utc::now().date_naive() + chrono::Duration::days(2)).year();
    let (status, report) = app.request("GET", &format!("/api/v1/admin/revenue?year={}", year), Some(&admin.access_token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["online_total"], 4000);
    assert_eq!(report["offline_total"], 700);
    assert_eq!(report["total"], 4700);
    assert_eq!(report["booking_count"], 2);
    assert_eq!(report["custom_booking_count"], 1);
    assert_eq!(report["months"].as_array().unwrap().len(), 12);

    let (status, _) = app.request("GET", "/api/v1/admin/revenue", Some(&guest.access_token), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}
