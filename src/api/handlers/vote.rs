use axum::{extract::State, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::requests::SubmitVoteRequest;
use crate::api::dtos::responses::VoteRecordedResponse;
use crate::api::extractors::participant::CurrentParticipant;
use crate::domain::models::vote::Vote;
use crate::domain::services::progression;
use crate::error::AppError;
use std::sync::Arc;
use chrono::Utc;
use tracing::info;

pub async fn submit_vote(
    State(state): State<Arc<AppState>>,
    CurrentParticipant(participant): CurrentParticipant,
    Json(payload): Json<SubmitVoteRequest>,
) -> Result<impl IntoResponse, AppError> {
    let session = state.session_repo.find_by_id(&participant.session_id).await?
        .ok_or_else(|| AppError::NotFound("Session not found".into()))?;

    if session.is_expired(Utc::now()) {
        return Err(AppError::Expired);
    }

    let restaurant = state.restaurant_repo.find_by_id(payload.restaurant_id).await?
        .ok_or_else(|| AppError::NotFound("Restaurant not found".into()))?;

    let catalog_size = state.restaurant_repo.count().await?;

    // Vote insert and the possible completion stamp commit together; a
    // duplicate pair rolls the whole thing back.
    let vote = Vote::new(participant.id.clone(), restaurant.id, payload.liked);
    let outcome = state.vote_repo.record(&vote, catalog_size).await?;

    if outcome.completed_now {
        info!(
            "{} finished swiping in session {}",
            participant.name, session.code
        );
    }

    let catalog = state.restaurant_repo.list().await?;
    let voted_ids = state.vote_repo.restaurant_ids_for(&participant.id).await?;
    let next = progression::next_restaurant(&catalog, &voted_ids).cloned();

    Ok(Json(VoteRecordedResponse {
        progress: progression::progress(outcome.votes_cast, catalog_size),
        next_restaurant: next.map(Into::into),
        completed: outcome.completed_now,
    }))
}
