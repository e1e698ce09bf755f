use crate::domain::models::{
    auth::RefreshTokenRecord, booking::Booking, custom_booking::CustomBooking, darshan::Darshan,
    newsletter::Subscriber, room::Room, staff::Staff, user::User,
};
use crate::domain::services::lifecycle::BookingStatus;
use crate::error::AppError;
use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: &User) -> Result<User, AppError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError>;
    async fn list(&self) -> Result<Vec<User>, AppError>;
    async fn update_profile(&self, user: &User) -> Result<User, AppError>;
    async fn count_admins(&self) -> Result<i64, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait AuthRepository: Send + Sync {
    async fn create_refresh_token(&self, record: &RefreshTokenRecord) -> Result<(), AppError>;
    async fn find_refresh_token(&self, token_hash: &str) -> Result<Option<RefreshTokenRecord>, AppError>;
    async fn delete_refresh_token(&self, token_hash: &str) -> Result<(), AppError>;
    async fn delete_refresh_family(&self, family_id: Uuid) -> Result<(), AppError>;
}

#[async_trait]
pub trait RoomRepository: Send + Sync {
    async fn create(&self, room: &Room) -> Result<Room, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Room>, AppError>;
    async fn list(&self) -> Result<Vec<Room>, AppError>;
    async fn list_available(&self, min_capacity: i32) -> Result<Vec<Room>, AppError>;
    async fn update(&self, room: &Room) -> Result<Room, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn create(&self, booking: &Booking) -> Result<Booking, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Booking>, AppError>;
    async fn list_by_user(&self, user_id: &str) -> Result<Vec<Booking>, AppError>;
    async fn list(&self, status: Option<BookingStatus>) -> Result<Vec<Booking>, AppError>;
    /// Moves the booking to `to` only if it is still in `from`.
    /// Returns `None` when another writer changed the status first.
    async fn transition(&self, id: &str, from: BookingStatus, to: BookingStatus) -> Result<Option<Booking>, AppError>;
    /// Records a review only if the booking is completed and not yet reviewed.
    async fn submit_review(&self, id: &str, rating: i32, feedback: &str) -> Result<Option<Booking>, AppError>;
    async fn count_by_room(&self, room_id: &str) -> Result<i64, AppError>;
}

#[async_trait]
pub trait CustomBookingRepository: Send + Sync {
    async fn create(&self, booking: &CustomBooking) -> Result<CustomBooking, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<CustomBooking>, AppError>;
    async fn list(&self) -> Result<Vec<CustomBooking>, AppError>;
    async fn update(&self, booking: &CustomBooking) -> Result<CustomBooking, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait StaffRepository: Send + Sync {
    async fn create(&self, staff: &Staff) -> Result<Staff, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Staff>, AppError>;
    async fn list(&self) -> Result<Vec<Staff>, AppError>;
    async fn update(&self, staff: &Staff) -> Result<Staff, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait DarshanRepository: Send + Sync {
    async fn create(&self, darshan: &Darshan) -> Result<Darshan, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Darshan>, AppError>;
    async fn list(&self, active_only: bool) -> Result<Vec<Darshan>, AppError>;
    async fn update(&self, darshan: &Darshan) -> Result<Darshan, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait NewsletterRepository: Send + Sync {
    async fn subscribe(&self, subscriber: &Subscriber) -> Result<Subscriber, AppError>;
    async fn list(&self) -> Result<Vec<Subscriber>, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}
