use axum::{extract::{Path, State}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::requests::CreateSessionRequest;
use crate::api::dtos::responses::{
    ParticipantProfile, ResultsResponse, SessionJoinedResponse, SessionStateResponse,
    SwipeResponse,
};
use crate::api::extractors::participant::CurrentParticipant;
use crate::api::handlers::participant::set_participant_cookie;
use crate::domain::models::participant::Participant;
use crate::domain::models::session::VotingSession;
use crate::domain::services::naming::normalize_name;
use crate::domain::services::{progression, results};
use crate::error::AppError;
use std::sync::Arc;
use chrono::Utc;
use tower_cookies::Cookies;
use tracing::{info, warn};

pub async fn create_session(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
    Json(payload): Json<CreateSessionRequest>,
) -> Result<impl IntoResponse, AppError> {
    let host_name = normalize_name(payload.name.as_deref(), "Host")?;

    let session = allocate_session(&state).await?;
    let host = state.participant_repo
        .create(&Participant::new(session.id.clone(), host_name))
        .await?;

    set_participant_cookie(&cookies, &host.token, state.config.session_ttl_hours);

    info!("Created session {} hosted by {}", session.code, host.name);
    Ok(Json(SessionJoinedResponse {
        code: session.code,
        participant: ParticipantProfile::from(&host),
        token: host.token,
    }))
}

pub async fn get_session(
    State(state): State<Arc<AppState>>,
    CurrentParticipant(participant): CurrentParticipant,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let session = find_live_session(&state, &code).await?;
    require_membership(&session, &participant)?;

    let participants = state.participant_repo.list_by_session(&session.id).await?;

    Ok(Json(SessionStateResponse {
        code: session.code,
        status: session.status,
        expires_at: session.expires_at,
        participants: participants.iter().map(ParticipantProfile::from).collect(),
    }))
}

pub async fn get_swipe_target(
    State(state): State<Arc<AppState>>,
    CurrentParticipant(participant): CurrentParticipant,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let session = find_live_session(&state, &code).await?;
    require_membership(&session, &participant)?;

    let catalog = state.restaurant_repo.list().await?;
    let voted_ids = state.vote_repo.restaurant_ids_for(&participant.id).await?;
    let votes_cast = state.vote_repo.count_by_participant(&participant.id).await?;

    let restaurant = progression::next_restaurant(&catalog, &voted_ids).cloned();
    let progress = progression::progress(votes_cast, catalog.len() as i64);

    Ok(Json(SwipeResponse {
        restaurant: restaurant.map(Into::into),
        progress,
    }))
}

pub async fn get_results(
    State(state): State<Arc<AppState>>,
    CurrentParticipant(participant): CurrentParticipant,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let session = find_live_session(&state, &code).await?;
    require_membership(&session, &participant)?;

    let catalog = state.restaurant_repo.list().await?;
    let participants = state.participant_repo.list_by_session(&session.id).await?;
    let votes = state.vote_repo.list_by_session(&session.id).await?;

    let tallies = results::ranked_tallies(&catalog, &votes);
    let pending = results::pending_participants(&participants);

    Ok(Json(ResultsResponse {
        results: tallies.into_iter().map(Into::into).collect(),
        pending_participants: pending.iter().map(ParticipantProfile::from).collect(),
        everyone_finished: results::everyone_finished(&participants),
    }))
}

/// Looks up a session by code and rejects expired ones. Every session-scoped
/// operation goes through here; expiry is only ever evaluated lazily.
pub async fn find_live_session(state: &AppState, code: &str) -> Result<VotingSession, AppError> {
    let code = code.trim().to_uppercase();

    let session = state.session_repo.find_by_code(&code).await?
        .ok_or_else(|| AppError::NotFound("Session not found. Check the code!".into()))?;

    if session.is_expired(Utc::now()) {
        warn!("Rejected access to expired session {}", session.code);
        return Err(AppError::Expired);
    }

    Ok(session)
}

pub fn require_membership(session: &VotingSession, participant: &Participant) -> Result<(), AppError> {
    if participant.session_id != session.id {
        return Err(AppError::Forbidden("You're not in this session".into()));
    }
    Ok(())
}

/// Draws fresh codes until one is unused. No retry bound: with 32^8 codes the
/// loop is probabilistically a single iteration for any realistic store.
async fn allocate_session(state: &AppState) -> Result<VotingSession, AppError> {
    loop {
        let candidate = VotingSession::new(state.config.session_ttl_hours);
        if !state.session_repo.code_exists(&candidate.code).await? {
            return state.session_repo.create(&candidate).await;
        }
    }
}
