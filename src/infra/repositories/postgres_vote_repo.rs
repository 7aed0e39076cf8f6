use crate::domain::{
    models::vote::{SessionVote, Vote, VoteOutcome},
    ports::VoteRepository,
};
use crate::error::{is_unique_violation, AppError};
use async_trait::async_trait;
use chrono::Utc;
use sqlx::{PgPool, Row};

pub struct PostgresVoteRepo {
    pool: PgPool,
}

impl PostgresVoteRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VoteRepository for PostgresVoteRepo {
    async fn record(&self, vote: &Vote, catalog_size: i64) -> Result<VoteOutcome, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        sqlx::query(
            "INSERT INTO votes (id, participant_id, restaurant_id, liked, created_at)
             VALUES ($1, $2, $3, $4, $5)"
        )
            .bind(&vote.id)
            .bind(&vote.participant_id)
            .bind(vote.restaurant_id)
            .bind(vote.liked)
            .bind(vote.created_at)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    AppError::Conflict("You have already voted on this restaurant".into())
                } else {
                    AppError::Database(e)
                }
            })?;

        let votes_cast = sqlx::query("SELECT COUNT(*) as count FROM votes WHERE participant_id = $1")
            .bind(&vote.participant_id)
            .fetch_one(&mut *tx)
            .await
            .map_err(AppError::Database)?
            .get::<i64, _>("count");

        let mut completed_now = false;
        if catalog_size > 0 && votes_cast >= catalog_size {
            let result = sqlx::query(
                "UPDATE participants SET completed_at = $1 WHERE id = $2 AND completed_at IS NULL"
            )
                .bind(Utc::now())
                .bind(&vote.participant_id)
                .execute(&mut *tx)
                .await
                .map_err(AppError::Database)?;
            completed_now = result.rows_affected() > 0;
        }

        tx.commit().await.map_err(AppError::Database)?;

        Ok(VoteOutcome {
            votes_cast,
            completed_now,
        })
    }

    async fn count_by_participant(&self, participant_id: &str) -> Result<i64, AppError> {
        let row = sqlx::query("SELECT COUNT(*) as count FROM votes WHERE participant_id = $1")
            .bind(participant_id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(row.get::<i64, _>("count"))
    }

    async fn restaurant_ids_for(&self, participant_id: &str) -> Result<Vec<i64>, AppError> {
        let rows = sqlx::query(
            "SELECT restaurant_id FROM votes WHERE participant_id = $1 ORDER BY restaurant_id ASC"
        )
            .bind(participant_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(rows.iter().map(|r| r.get::<i64, _>("restaurant_id")).collect())
    }

    async fn list_by_session(&self, session_id: &str) -> Result<Vec<SessionVote>, AppError> {
        sqlx::query_as::<_, SessionVote>(
            r#"SELECT v.restaurant_id, v.liked, p.id as participant_id, p.name as participant_name
               FROM votes v
               JOIN participants p ON p.id = v.participant_id
               WHERE p.session_id = $1
               ORDER BY v.created_at ASC"#
        )
            .bind(session_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
