use homestay_backend::{
    api::router::create_router,
    state::AppState,
    config::Config,
    infra::repositories::{
        sqlite_auth_repo::SqliteAuthRepo,
        sqlite_booking_repo::SqliteBookingRepo,
        sqlite_custom_booking_repo::SqliteCustomBookingRepo,
        sqlite_darshan_repo::SqliteDarshanRepo,
        sqlite_newsletter_repo::SqliteNewsletterRepo,
        sqlite_room_repo::SqliteRoomRepo,
        sqlite_staff_repo::SqliteStaffRepo,
        sqlite_user_repo::SqliteUserRepo,
    },
    domain::models::user::{User, ROLE_ADMIN},
    domain::services::auth_service::AuthService,
    domain::services::notification_hub::NotificationHub,
};
use sqlx::{sqlite::{SqliteConnectOptions, SqlitePoolOptions}, Pool, Sqlite};
use std::sync::Arc;
use uuid::Uuid;
use axum::{
    body::Body,
    http::{Request, StatusCode, header},
    Router,
};
use std::str::FromStr;
use tower::ServiceExt;
use serde_json::{json, Value};

pub const TEST_PASSWORD: &str = "correct-horse-battery";

/// A signed-in account as seen by the tests.
#[allow(dead_code)]
pub struct Session {
    pub user_id: String,
    pub access_token: String,
    pub refresh_token: String,
}

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
}

#[allow(dead_code)]
impl TestApp {
    pub async fn new() -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        sqlx::migrate!("./migrations/sqlite")
            .run(&pool)
            .await
            .expect("Failed to migrate test db");

        let priv_key_pem = include_str!("../tests/keys/test_private.pem");
        let pub_key_pem = include_str!("../tests/keys/test_public.pem");

        let config = Config {
            database_url: db_url.clone(),
            port: 0,
            jwt_secret_key: priv_key_pem.to_string(),
            jwt_public_key: pub_key_pem.to_string(),
            auth_issuer: "test-issuer".to_string(),
            admin_email: None,
            admin_password: None,
            notification_buffer: 64,
        };

        let auth_repo = Arc::new(SqliteAuthRepo::new(pool.clone()));
        let auth_service = Arc::new(AuthService::new(auth_repo.clone(), config.clone()));

        let state = Arc::new(AppState {
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
            notifications: Arc::new(NotificationHub::new(config.notification_buffer)),
        });

        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
        }
    }

    /// Sends a JSON request and returns the status with the parsed body
    /// (`Value::Null` when the body is empty).
    pub async fn request(&self, method: &str, uri: &str, token: Option<&str>, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let body = match body {
            Some(payload) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(payload.to_string())
            }
            None => Body::empty(),
        };

        let response = self.router.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).unwrap() };
        (status, value)
    }

    pub async fn register_guest(&self, name: &str, email: &str) -> Session {
        let (status, body) = self.request("POST", "/api/v1/auth/register", None, Some(json!({
            "name": name,
            "email": email,
            "password": TEST_PASSWORD,
            "mobile": "9876543210"
        }))).await;

        if status != StatusCode::CREATED {
            panic!("Registration failed in test helper: status {} body {}", status, body);
        }
        session_from(&body)
    }

    /// Admins cannot self-register, so the account is written straight to the repo.
    pub async fn create_admin(&self, email: &str) -> Session {
        let password_hash = self.state.auth_service.hash_password(TEST_PASSWORD).unwrap();
        let mut admin = User::new("Admin".to_string(), email.to_string(), None, password_hash);
        admin.role = ROLE_ADMIN.to_string();
        self.state.user_repo.create(&admin).await.unwrap();

        self.login(email, TEST_PASSWORD).await
    }

    pub async fn login(&self, email: &str, password: &str) -> Session {
        let (status, body) = self.request("POST", "/api/v1/auth/login", None, Some(json!({
            "email": email,
            "password": password
        }))).await;

        if !status.is_success() {
            panic!("Login failed in test helper: status {}", status);
        }
        session_from(&body)
    }

    /// Creates a room through the admin API and returns its id.
    pub async fn create_room(&self, admin_token: &str, name: &str, price: i64, discount: Option<i64>, capacity: i32) -> String {
        let (status, body) = self.request("POST", "/api/v1/admin/rooms", Some(admin_token), Some(json!({
            "name": name,
            "room_type": "Deluxe",
            "description": "Garden view",
            "price": price,
            "discount_price": discount,
            "capacity": capacity
        }))).await;
        assert_eq!(status, StatusCode::CREATED, "room creation failed: {}", body);
        body["id"].as_str().unwrap().to_string()
    }
}

fn session_from(body: &Value) -> Session {
    Session {
        user_id: body["user"]["id"].as_str().expect("No user id in body").to_string(),
        access_token: body["access_token"].as_str().expect("No access_token in body").to_string(),
        refresh_token: body["refresh_token"].as_str().expect("No refresh_token in body").to_string(),
    }
}

/// `YYYY-MM-DD` for a date `days` from today.
#[allow(dead_code)]
pub fn days_from_now(days: i64) -> String {
    (chrono::Utc::now().date_naive() + chrono::Duration::days(days)).format("%Y-%m-%d").to_string()
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
        let _ = std::fs::remove_file(format!("{}-wal", self.db_filename));
        let _ = std::fs::remove_file(format!("{}-shm", self.db_filename));
    }
}
