use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;
use rand::{distributions::Alphanumeric, Rng};

/// Random token length in characters. 43 alphanumeric characters carry
/// ~256 bits of entropy, enough for the token to double as the bearer
/// credential without any collision handling beyond the unique index.
const TOKEN_LENGTH: usize = 43;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Participant {
    pub id: String,
    pub session_id: String,
    pub name: String,
    #[serde(skip_serializing)]
    pub token: String,
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Participant {
    pub fn new(session_id: String, name: String) -> Self {
        let token: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(TOKEN_LENGTH)
            .map(char::from)
            .collect();

        Self {
            id: Uuid::new_v4().to_string(),
            session_id,
            name,
            token,
            completed_at: None,
            created_at: Utc::now(),
        }
    }

    pub fn is_completed(&self) -> bool {
        self.completed_at.is_some()
    }
}
