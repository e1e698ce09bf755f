pub mod auth;
pub mod booking;
pub mod custom_booking;
pub mod darshan;
pub mod newsletter;
pub mod notification;
pub mod room;
pub mod staff;
pub mod user;
