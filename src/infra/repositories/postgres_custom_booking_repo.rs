use crate::domain::{models::custom_booking::CustomBooking, ports::CustomBookingRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresCustomBookingRepo {
    pool: PgPool,
}

impl PostgresCustomBookingRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CustomBookingRepository for PostgresCustomBookingRepo {
    async fn create(&self, booking: &CustomBooking) -> Result<CustomBooking, AppError> {
        sqlx::query_as::<_, CustomBooking>(
            "INSERT INTO custom_bookings (id, guest_name, guest_mobile, guest_email, room_name, check_in, check_out, guests, amount, notes, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING *"
        )
            .bind(&booking.id).bind(&booking.guest_name).bind(&booking.guest_mobile).bind(&booking.guest_email)
            .bind(&booking.room_name).bind(booking.check_in).bind(booking.check_out).bind(booking.guests)
            .bind(booking.amount).bind(&booking.notes).bind(booking.created_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<CustomBooking>, AppError> {
        sqlx::query_as::<_, CustomBooking>("SELECT * FROM custom_bookings WHERE id = $1")
            .bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn list(&self) -> Result<Vec<CustomBooking>, AppError> {
        sqlx::query_as::<_, CustomBooking>("SELECT * FROM custom_bookings ORDER BY check_in DESC")
            .fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn update(&self, booking: &CustomBooking) -> Result<CustomBooking, AppError> {
        sqlx::query_as::<_, CustomBooking>(
            "UPDATE custom_bookings SET guest_name = $1, guest_mobile = $2, guest_email = $3, room_name = $4, check_in = $5, check_out = $6, guests = $7, amount = $8, notes = $9
             WHERE id = $10
             RETURNING *"
        )
            .bind(&booking.guest_name).bind(&booking.guest_mobile).bind(&booking.guest_email).bind(&booking.room_name)
            .bind(booking.check_in).bind(booking.check_out).bind(booking.guests).bind(booking.amount)
            .bind(&booking.notes).bind(&booking.id)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM custom_bookings WHERE id = $1")
            .bind(id).execute(&self.pool).await.map_err(AppError::Database)?;
        if result.rows_affected() == 0 { return Err(AppError::NotFound("Custom booking not found".into())); }
        Ok(())
    }
}
