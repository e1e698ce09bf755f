use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

#[derive(Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 120, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    #[validate(length(min = 7, max = 20, message = "Invalid mobile number"))]
    pub mobile: Option<String>,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

#[derive(Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, max = 120, message = "Name is required"))]
    pub name: Option<String>,
    #[validate(length(min = 7, max = 20, message = "Invalid mobile number"))]
    pub mobile: Option<String>,
}

#[derive(Deserialize, Validate)]
pub struct CreateBookingRequest {
    #[serde(alias = "roomId")]
    pub room_id: String,
    #[serde(alias = "checkIn")]
    pub check_in: NaiveDate,
    #[serde(alias = "checkOut")]
    pub check_out: NaiveDate,
    pub guests: i32,
    #[serde(alias = "specialRequests")]
    #[validate(length(max = 2000, message = "Special requests are too long"))]
    pub special_requests: Option<String>,
}

#[derive(Deserialize, Validate)]
pub struct ReviewRequest {
    pub rating: i32,
    #[validate(length(max = 2000, message = "Feedback is too long"))]
    #[serde(default)]
    pub feedback: String,
}

#[derive(Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}

#[derive(Deserialize)]
pub struct BookingListQuery {
    pub status: Option<String>,
}

#[derive(Deserialize)]
pub struct AvailabilityQuery {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: Option<i32>,
}

#[derive(Deserialize)]
pub struct RevenueQuery {
    pub year: Option<i32>,
}

#[derive(Deserialize, Validate)]
pub struct CreateRoomRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Room type is required"))]
    pub room_type: String,
    pub description: Option<String>,
    #[validate(range(min = 0, max = 10000000, message = "Price must be between 0 and 10000000"))]
    pub price: i64,
    #[validate(range(min = 0, max = 10000000, message = "Discount price must be between 0 and 10000000"))]
    pub discount_price: Option<i64>,
    #[validate(range(min = 1, message = "Capacity must be at least 1"))]
    pub capacity: i32,
    pub image_url: Option<String>,
    pub is_available: Option<bool>,
}

#[derive(Deserialize, Validate)]
pub struct UpdateRoomRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: Option<String>,
    pub room_type: Option<String>,
    pub description: Option<String>,
    #[validate(range(min = 0, max = 10000000, message = "Price must be between 0 and 10000000"))]
    pub price: Option<i64>,
    /// `0` clears the discount.
    #[validate(range(min = 0, max = 10000000, message = "Discount price must be between 0 and 10000000"))]
    pub discount_price: Option<i64>,
    #[validate(range(min = 1, message = "Capacity must be at least 1"))]
    pub capacity: Option<i32>,
    pub image_url: Option<String>,
    pub is_available: Option<bool>,
}

#[derive(Deserialize, Validate)]
pub struct CreateStaffRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Designation is required"))]
    pub designation: String,
    #[validate(length(min = 7, max = 20, message = "Invalid mobile number"))]
    pub mobile: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,
    #[validate(range(min = 0, message = "Salary cannot be negative"))]
    pub salary: Option<i64>,
}

#[derive(Deserialize, Validate)]
pub struct UpdateStaffRequest {
    pub name: Option<String>,
    pub designation: Option<String>,
    #[validate(length(min = 7, max = 20, message = "Invalid mobile number"))]
    pub mobile: Option<String>,
    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,
    #[validate(range(min = 0, message = "Salary cannot be negative"))]
    pub salary: Option<i64>,
    pub is_active: Option<bool>,
}

#[derive(Deserialize, Validate)]
pub struct CreateDarshanRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub timings: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateDarshanRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub timings: Option<String>,
    pub image_url: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Deserialize, Validate)]
pub struct CustomBookingRequest {
    #[validate(length(min = 1, message = "Guest name is required"))]
    pub guest_name: String,
    #[validate(length(min = 7, max = 20, message = "Invalid mobile number"))]
    pub guest_mobile: String,
    #[validate(email(message = "Invalid email address"))]
    pub guest_email: Option<String>,
    #[validate(length(min = 1, message = "Room name is required"))]
    pub room_name: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    #[validate(range(min = 1, message = "At least one guest is required"))]
    pub guests: i32,
    #[validate(range(min = 0, message = "Amount cannot be negative"))]
    pub amount: i64,
    pub notes: Option<String>,
}

#[derive(Deserialize, Validate)]
pub struct SubscribeRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
}
