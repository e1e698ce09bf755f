use crate::domain::{models::room::Room, ports::RoomRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresRoomRepo {
    pool: PgPool,
}

impl PostgresRoomRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RoomRepository for PostgresRoomRepo {
    async fn create(&self, room: &Room) -> Result<Room, AppError> {
        sqlx::query_as::<_, Room>(
            "INSERT INTO rooms (id, name, room_type, description, price, discount_price, capacity, image_url, is_available, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING *"
        )
            .bind(&room.id)
            .bind(&room.name)
            .bind(&room.room_type)
            .bind(&room.description)
            .bind(room.price)
            .bind(room.discount_price)
            .bind(room.capacity)
            .bind(&room.image_url)
            .bind(room.is_available)
            .bind(room.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Room>, AppError> {
        sqlx::query_as::<_, Room>("SELECT * FROM rooms WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self) -> Result<Vec<Room>, AppError> {
        sqlx::query_as::<_, Room>("SELECT * FROM rooms ORDER BY price ASC, name ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_available(&self, min_capacity: i32) -> Result<Vec<Room>, AppError> {
        sqlx::query_as::<_, Room>(
            "SELECT * FROM rooms WHERE is_available = TRUE AND capacity >= $1 ORDER BY price ASC, name ASC"
        )
            .bind(min_capacity)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, room: &Room) -> Result<Room, AppError> {
        sqlx::query_as::<_, Room>(
            "UPDATE rooms SET name = $1, room_type = $2, description = $3, price = $4, discount_price = $5, capacity = $6, image_url = $7, is_available = $8
             WHERE id = $9
             RETURNING *"
        )
            .bind(&room.name)
            .bind(&room.room_type)
            .bind(&room.description)
            .bind(room.price)
            .bind(room.discount_price)
            .bind(room.capacity)
            .bind(&room.image_url)
            .bind(room.is_available)
            .bind(&room.id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM rooms WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Room not found".into()));
        }
        Ok(())
    }
}
