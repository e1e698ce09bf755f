use crate::domain::{models::booking::Booking, ports::BookingRepository};
use crate::domain::services::lifecycle::BookingStatus;
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::{SqlitePool, Row};

pub struct SqliteBookingRepo {
    pool: SqlitePool,
}

impl SqliteBookingRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingRepository for SqliteBookingRepo {
    async fn create(&self, booking: &Booking) -> Result<Booking, AppError> {
        sqlx::query_as::<_, Booking>(
            "INSERT INTO bookings (id, user_id, guest_name, guest_email, guest_mobile, room_id, room_name, room_type, check_in, check_out, guests, total_price, status, reviewed, rating, feedback, special_requests, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING *"
        )
            .bind(&booking.id).bind(&booking.user_id).bind(&booking.guest_name).bind(&booking.guest_email)
            .bind(&booking.guest_mobile).bind(&booking.room_id).bind(&booking.room_name).bind(&booking.room_type)
            .bind(booking.check_in).bind(booking.check_out).bind(booking.guests).bind(booking.total_price)
            .bind(&booking.status).bind(booking.reviewed).bind(booking.rating).bind(&booking.feedback)
            .bind(&booking.special_requests).bind(booking.created_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }
    async fn find_by_id(&self, id: &str) -> Result<Option<Booking>, AppError> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = ?").bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }
    async fn list_by_user(&self, user_id: &str) -> Result<Vec<Booking>, AppError> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE user_id = ? ORDER BY created_at DESC").bind(user_id).fetch_all(&self.pool).await.map_err(AppError::Database)
    }
    async fn list(&self, status: Option<BookingStatus>) -> Result<Vec<Booking>, AppError> {
        match status {
            Some(status) => sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE status = ? ORDER BY created_at DESC")
                .bind(status.as_str()).fetch_all(&self.pool).await.map_err(AppError::Database),
            None => sqlx::query_as::<_, Booking>("SELECT * FROM bookings ORDER BY created_at DESC")
                .fetch_all(&self.pool).await.map_err(AppError::Database),
        }
    }
    async fn transition(&self, id: &str, from: BookingStatus, to: BookingStatus) -> Result<Option<Booking>, AppError> {
        sqlx::query_as::<_, Booking>("UPDATE bookings SET status = ? WHERE id = ? AND status = ? RETURNING *")
            .bind(to.as_str()).bind(id).bind(from.as_str())
            .fetch_optional(&self.pool).await.map_err(AppError::Database)
    }
    async fn submit_review(&self, id: &str, rating: i32, feedback: &str) -> Result<Option<Booking>, AppError> {
        sqlx::query_as::<_, Booking>(
            "UPDATE bookings SET reviewed = TRUE, rating = ?, feedback = ?
             WHERE id = ? AND status = 'COMPLETED' AND reviewed = FALSE
             RETURNING *"
        )
            .bind(rating).bind(feedback).bind(id)
            .fetch_optional(&self.pool).await.map_err(AppError::Database)
    }
    async fn count_by_room(&self, room_id: &str) -> Result<i64, AppError> {
        let result = sqlx::query("SELECT COUNT(*) as count FROM bookings WHERE room_id = ?").bind(room_id).fetch_one(&self.pool).await.map_err(AppError::Database)?;
        Ok(result.get::<i64, _>("count"))
    }
}
