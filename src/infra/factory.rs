use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use sqlx::{postgres::{PgPoolOptions, PgConnectOptions}, sqlite::{SqlitePoolOptions, SqliteJournalMode, SqliteConnectOptions}};
use sqlx::{PgPool, SqlitePool, ConnectOptions};
use tracing::{info, warn};
use tracing::log::LevelFilter;

use crate::config::Config;
use crate::error::AppError;
use crate::state::AppState;
use crate::domain::models::user::{User, ROLE_ADMIN};
use crate::domain::services::auth_service::AuthService;
use crate::domain::services::notification_hub::NotificationHub;
use crate::infra::repositories::{
    postgres_auth_repo::PostgresAuthRepo, postgres_booking_repo::PostgresBookingRepo,
    postgres_custom_booking_repo::PostgresCustomBookingRepo, postgres_darshan_repo::PostgresDarshanRepo,
    postgres_newsletter_repo::PostgresNewsletterRepo, postgres_room_repo::PostgresRoomRepo,
    postgres_staff_repo::PostgresStaffRepo, postgres_user_repo::PostgresUserRepo,
    sqlite_auth_repo::SqliteAuthRepo, sqlite_booking_repo::SqliteBookingRepo,
    sqlite_custom_booking_repo::SqliteCustomBookingRepo, sqlite_darshan_repo::SqliteDarshanRepo,
    sqlite_newsletter_repo::SqliteNewsletterRepo, sqlite_room_repo::SqliteRoomRepo,
    sqlite_staff_repo::SqliteStaffRepo, sqlite_user_repo::SqliteUserRepo,
};

pub async fn bootstrap_state(config: &Config) -> AppState {
    let database_url = &config.database_url;
    let notifications = Arc::new(NotificationHub::new(config.notification_buffer));

    let state = if database_url.starts_with("postgres://") || database_url.starts_with("postgresql://") {
        info!("Initializing PostgreSQL connection...");

        let mut opts: PgConnectOptions = database_url.parse().expect("Invalid Postgres URL");
        opts = opts.log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect_with(opts)
            .await
            .expect("Failed to connect to Postgres");

        run_postgres_migrations(&pool).await;

        let auth_repo = Arc::new(PostgresAuthRepo::new(pool.clone()));
        let auth_service = Arc::new(AuthService::new(auth_repo.clone(), config.clone()));

        AppState {
            config: config.clone(),
            user_repo: Arc::new(PostgresUserRepo::new(pool.clone())),
            auth_repo,
            room_repo: Arc::new(PostgresRoomRepo::new(pool.clone())),
            booking_repo: Arc::new(PostgresBookingRepo::new(pool.clone())),
            custom_booking_repo: Arc::new(PostgresCustomBookingRepo::new(pool.clone())),
            staff_repo: Arc::new(PostgresStaffRepo::new(pool.clone())),
            darshan_repo: Arc::new(PostgresDarshanRepo::new(pool.clone())),
            newsletter_repo: Arc::new(PostgresNewsletterRepo::new(pool.clone())),
            auth_service,
            notifications,
        }
    } else {
        info!("Initializing SQLite connection with WAL Mode...");

        let opts = SqliteConnectOptions::from_str(database_url)
            .expect("Invalid SQLite connection string")
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5))
            .log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(opts)
            .await
            .expect("Failed to connect to SQLite");

        run_sqlite_migrations(&pool).await;

        let auth_repo = Arc::new(SqliteAuthRepo::new(pool.clone()));
        let auth_service = Arc::new(AuthService::new(auth_repo.clone(), config.clone()));

        AppState {
            config: config.clone(),
            user_repo: Arc::new(SqliteUserRepo::new(pool.clone())),
            auth_repo,
            room_repo: Arc::new(SqliteRoomRepo::new(pool.clone())),
            booking_repo: Arc::new(SqliteBookingRepo::new(pool.clone())),
            custom_booking_repo: Arc::new(SqliteCustomBookingRepo::new(pool.clone())),
            staff_repo: Arc::new(SqliteStaffRepo::new(pool.clone())),
            darshan_repo: Arc::new(SqliteDarshanRepo::new(pool.clone())),
            newsletter_repo: Arc::new(SqliteNewsletterRepo::new(pool.clone())),
            auth_service,
            notifications,
        }
    };

    if let Err(e) = seed_admin(&state).await {
        warn!("Admin seeding skipped: {}", e);
    }

    state
}

/// Creates the configured admin account when no admin exists yet.
pub async fn seed_admin(state: &AppState) -> Result<(), AppError> {
    let (Some(email), Some(password)) = (&state.config.admin_email, &state.config.admin_password) else {
        return Ok(());
    };

    if state.user_repo.count_admins().await? > 0 {
        return Ok(());
    }

    let password_hash = state.auth_service.hash_password(password)?;
    let mut admin = User::new("Administrator".to_string(), email.clone(), None, password_hash);
    admin.role = ROLE_ADMIN.to_string();
    let created = state.user_repo.create(&admin).await?;

    info!("Seeded admin account {}", created.email);
    Ok(())
}

async fn run_postgres_migrations(pool: &PgPool) {
    sqlx::migrate!("./migrations/postgres")
        .run(pool)
        .await
        .expect("Failed to run Postgres migrations");
}

async fn run_sqlite_migrations(pool: &SqlitePool) {
    sqlx::migrate!("./migrations/sqlite")
        .run(pool)
        .await
        .expect("Failed to run SQLite migrations");
}
