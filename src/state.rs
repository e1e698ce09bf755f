use std::sync::Arc;
use crate::domain::ports::{
    AuthRepository, BookingRepository, CustomBookingRepository, DarshanRepository,
    NewsletterRepository, RoomRepository, StaffRepository, UserRepository,
};
use crate::domain::services::auth_service::AuthService;
use crate::domain::services::notification_hub::NotificationHub;
use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub user_repo: Arc<dyn UserRepository>,
    pub auth_repo: Arc<dyn AuthRepository>,
    pub room_repo: Arc<dyn RoomRepository>,
    pub booking_repo: Arc<dyn BookingRepository>,
    pub custom_booking_repo: Arc<dyn CustomBookingRepository>,
    pub staff_repo: Arc<dyn StaffRepository>,
    pub darshan_repo: Arc<dyn DarshanRepository>,
    pub newsletter_repo: Arc<dyn NewsletterRepository>,
    pub auth_service: Arc<AuthService>,
    pub notifications: Arc<NotificationHub>,
}
