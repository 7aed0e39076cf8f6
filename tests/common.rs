use forklock_backend::{
    api::router::create_router,
    state::AppState,
    config::Config,
    infra::repositories::{
        sqlite_participant_repo::SqliteParticipantRepo,
        sqlite_restaurant_repo::SqliteRestaurantRepo,
        sqlite_session_repo::SqliteSessionRepo,
        sqlite_vote_repo::SqliteVoteRepo,
    },
};
use sqlx::{sqlite::{SqliteConnectOptions, SqlitePoolOptions}, Pool, Sqlite};
use std::str::FromStr;
use std::sync::Arc;
use uuid::Uuid;
use axum::{
    body::Body,
    http::{header, Request},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
}

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

        let config = Config {
            database_url: db_url.clone(),
            port: 0,
            session_ttl_hours: 24,
        };

        let state = Arc::new(AppState {
            config: config.clone(),
            session_repo: Arc::new(SqliteSessionRepo::new(pool.clone())),
            participant_repo: Arc::new(SqliteParticipantRepo::new(pool.clone())),
            restaurant_repo: Arc::new(SqliteRestaurantRepo::new(pool.clone())),
            vote_repo: Arc::new(SqliteVoteRepo::new(pool.clone())),
        });

        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
        }
    }

    /// Creates a session via the API and returns (code, host bearer token).
    pub async fn create_session(&self, name: Option<&str>) -> (String, String) {
        let payload = match name {
            Some(n) => serde_json::json!({ "name": n }),
            None => serde_json::json!({}),
        };

        let response = self.router.clone().oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/sessions")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap()
        ).await.unwrap();

        if !response.status().is_success() {
            panic!("Session creation failed in test helper: status {}", response.status());
        }

        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body_json: Value = serde_json::from_slice(&body_bytes).unwrap();

        let code = body_json["code"].as_str().expect("No code in body").to_string();
        let token = body_json["token"].as_str().expect("No token in body").to_string();
        (code, token)
    }

    /// Joins a session via the API and returns the raw response body.
    pub async fn join(&self, code: &str, name: Option<&str>) -> Value {
        let payload = match name {
            Some(n) => serde_json::json!({ "name": n }),
            None => serde_json::json!({}),
        };

        let response = self.router.clone().oneshot(
            Request::builder()
                .method("POST")
                .uri(format!("/api/v1/sessions/{}/join", code))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap()
        ).await.unwrap();

        if !response.status().is_success() {
            panic!("Join failed in test helper: status {}", response.status());
        }

        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&body_bytes).unwrap()
    }

    /// Submits a vote as the given participant token.
    pub async fn vote(&self, token: &str, restaurant_id: i64, liked: bool) -> axum::response::Response {
        let payload = serde_json::json!({ "restaurant_id": restaurant_id, "liked": liked });

        self.router.clone().oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/votes")
                .header(header::COOKIE, format!("participant_token={}", token))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap()
        ).await.unwrap()
    }

    pub async fn get_with_token(&self, uri: &str, token: &str) -> axum::response::Response {
        self.router.clone().oneshot(
            Request::builder()
                .method("GET")
                .uri(uri)
                .header(header::COOKIE, format!("participant_token={}", token))
                .body(Body::empty())
                .unwrap()
        ).await.unwrap()
    }

    /// Backdates a session so it reads as expired.
    pub async fn expire_session(&self, code: &str) {
        sqlx::query("UPDATE sessions SET expires_at = datetime('now', '-1 hour') WHERE code = ?")
            .bind(code)
            .execute(&self.pool)
            .await
            .expect("Failed to expire session");
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
    }
}
