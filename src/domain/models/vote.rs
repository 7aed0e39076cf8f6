use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// One like/dislike decision. Write-once: the (participant_id, restaurant_id)
/// pair is unique and no update or delete path exists.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Vote {
    pub id: String,
    pub participant_id: String,
    pub restaurant_id: i64,
    pub liked: bool,
    pub created_at: DateTime<Utc>,
}

impl Vote {
    pub fn new(participant_id: String, restaurant_id: i64, liked: bool) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            participant_id,
            restaurant_id,
            liked,
            created_at: Utc::now(),
        }
    }
}

/// A vote joined with its voter's name, as needed by the results view.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct SessionVote {
    pub restaurant_id: i64,
    pub liked: bool,
    pub participant_id: String,
    pub participant_name: String,
}

/// Outcome of recording a vote atomically: the updated count for the
/// participant and whether this vote was the one that completed them.
#[derive(Debug, Clone, Copy)]
pub struct VoteOutcome {
    pub votes_cast: i64,
    pub completed_now: bool,
}
