pub mod auth_service;
pub mod lifecycle;
pub mod notification_hub;
pub mod revenue;
