use serde::{Deserialize, Serialize};
use chrono::{DateTime, Duration, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::domain::services::codes::generate_code;

/// A single group voting event, identified by a short join code.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct VotingSession {
    pub id: String,
    pub code: String,
    pub status: String,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl VotingSession {
    pub fn new(ttl_hours: i64) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            code: generate_code(),
            status: "LOBBY".to_string(),
            expires_at: now + Duration::hours(ttl_hours),
            created_at: now,
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}
