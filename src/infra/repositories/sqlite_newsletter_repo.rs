use crate::domain::{models::newsletter::Subscriber, ports::NewsletterRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteNewsletterRepo { pool: SqlitePool }
impl SqliteNewsletterRepo { pub fn new(pool: SqlitePool) -> Self { Self { pool } } }

#[async_trait]
impl NewsletterRepository for SqliteNewsletterRepo {
    async fn subscribe(&self, subscriber: &Subscriber) -> Result<Subscriber, AppError> {
        sqlx::query_as::<_, Subscriber>(
            "INSERT INTO newsletter_subscribers (id, email, created_at) VALUES (?, ?, ?) RETURNING *"
        )
            .bind(&subscriber.id)
            .bind(&subscriber.email)
            .bind(subscriber.created_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn list(&self) -> Result<Vec<Subscriber>, AppError> {
        sqlx::query_as::<_, Subscriber>("SELECT * FROM newsletter_subscribers ORDER BY created_at DESC")
            .fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM newsletter_subscribers WHERE id = ?")
            .bind(id)
            .execute(&self.pool).await.map_err(AppError::Database)?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Subscriber not found".into()));
        }
        Ok(())
    }
}
