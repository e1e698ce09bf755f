pub mod auth;
pub mod booking;
pub mod booking_management;
pub mod custom_booking;
pub mod darshan;
pub mod health;
pub mod newsletter;
pub mod notification;
pub mod profile;
pub mod revenue;
pub mod room;
pub mod staff;
pub mod users;
