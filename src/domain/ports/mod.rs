use crate::domain::models::{
    participant::Participant,
    restaurant::Restaurant,
    session::VotingSession,
    vote::{SessionVote, Vote, VoteOutcome},
};
use crate::error::AppError;
use async_trait::async_trait;

#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn create(&self, session: &VotingSession) -> Result<VotingSession, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<VotingSession>, AppError>;
    async fn find_by_code(&self, code: &str) -> Result<Option<VotingSession>, AppError>;
    async fn code_exists(&self, code: &str) -> Result<bool, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait ParticipantRepository: Send + Sync {
    async fn create(&self, participant: &Participant) -> Result<Participant, AppError>;
    async fn find_by_token(&self, token: &str) -> Result<Option<Participant>, AppError>;
    /// Join order: created_at ascending, id as the deterministic tie-break.
    async fn list_by_session(&self, session_id: &str) -> Result<Vec<Participant>, AppError>;
    async fn mark_complete(&self, id: &str) -> Result<Participant, AppError>;
}

#[async_trait]
pub trait RestaurantRepository: Send + Sync {
    /// Full catalog in catalog order (ascending id).
    async fn list(&self) -> Result<Vec<Restaurant>, AppError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Restaurant>, AppError>;
    async fn count(&self) -> Result<i64, AppError>;
}

#[async_trait]
pub trait VoteRepository: Send + Sync {
    /// Inserts the vote and, when the participant's count reaches
    /// `catalog_size`, sets their completion stamp, all in one transaction.
    /// A duplicate (participant, restaurant) pair aborts the whole
    /// transaction with a Conflict and no partial effects.
    async fn record(&self, vote: &Vote, catalog_size: i64) -> Result<VoteOutcome, AppError>;
    async fn count_by_participant(&self, participant_id: &str) -> Result<i64, AppError>;
    async fn restaurant_ids_for(&self, participant_id: &str) -> Result<Vec<i64>, AppError>;
    /// All votes cast by any participant of the session, joined with the
    /// voter's name for the results view.
    async fn list_by_session(&self, session_id: &str) -> Result<Vec<SessionVote>, AppError>;
}
