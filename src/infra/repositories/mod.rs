pub mod sqlite_booking_repo;
pub mod sqlite_custom_booking_repo;
pub mod sqlite_darshan_repo;
pub mod sqlite_newsletter_repo;
pub mod sqlite_room_repo;
pub mod sqlite_staff_repo;
pub mod sqlite_user_repo;
pub mod sqlite_auth_repo;

pub mod postgres_booking_repo;
pub mod postgres_custom_booking_repo;
pub mod postgres_darshan_repo;
pub mod postgres_newsletter_repo;
pub mod postgres_room_repo;
pub mod postgres_staff_repo;
pub mod postgres_user_repo;
pub mod postgres_auth_repo;
