use crate::domain::{models::darshan::Darshan, ports::DarshanRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteDarshanRepo {
    pool: SqlitePool,
}

impl SqliteDarshanRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DarshanRepository for SqliteDarshanRepo {
    async fn create(&self, darshan: &Darshan) -> Result<Darshan, AppError> {
        sqlx::query_as::<_, Darshan>(
            "INSERT INTO darshans (id, name, description, location, timings, image_url, is_active, created_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?) RETURNING *"
        )
            .bind(&darshan.id)
            .bind(&darshan.name)
            .bind(&darshan.description)
            .bind(&darshan.location)
            .bind(&darshan.timings)
            .bind(&darshan.image_url)
            .bind(darshan.is_active)
            .bind(darshan.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Darshan>, AppError> {
        sqlx::query_as::<_, Darshan>("SELECT * FROM darshans WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self, active_only: bool) -> Result<Vec<Darshan>, AppError> {
        let sql = if active_only {
            "SELECT * FROM darshans WHERE is_active = TRUE ORDER BY name ASC"
        } else {
            "SELECT * FROM darshans ORDER BY name ASC"
        };
        sqlx::query_as::<_, Darshan>(sql)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, darshan: &Darshan) -> Result<Darshan, AppError> {
        sqlx::query_as::<_, Darshan>(
            "UPDATE darshans SET name = ?, description = ?, location = ?, timings = ?, image_url = ?, is_active = ? WHERE id = ? RETURNING *"
        )
            .bind(&darshan.name)
            .bind(&darshan.description)
            .bind(&darshan.location)
            .bind(&darshan.timings)
            .bind(&darshan.image_url)
            .bind(darshan.is_active)
            .bind(&darshan.id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM darshans WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Darshan not found".into()));
        }
        Ok(())
    }
}
