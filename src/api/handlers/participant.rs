use axum::{extract::{Path, State}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::requests::JoinSessionRequest;
use crate::api::dtos::responses::{ParticipantProfile, SessionJoinedResponse};
use crate::api::extractors::participant::PARTICIPANT_COOKIE;
use crate::api::handlers::session::find_live_session;
use crate::domain::models::participant::Participant;
use crate::domain::services::naming::{normalize_name, unique_name};
use crate::error::{is_unique_violation, AppError};
use std::sync::Arc;
use time::Duration;
use tower_cookies::{cookie::SameSite, Cookie, Cookies};
use tracing::{info, warn};

/// Concurrent joins with the same requested name can race past the snapshot
/// check; the unique index catches the loser and we re-suffix and retry.
const MAX_JOIN_ATTEMPTS: usize = 5;

pub async fn join_session(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
    Path(code): Path<String>,
    Json(payload): Json<JoinSessionRequest>,
) -> Result<impl IntoResponse, AppError> {
    let session = find_live_session(&state, &code).await?;
    let requested = normalize_name(payload.name.as_deref(), "Guest")?;

    for attempt in 1..=MAX_JOIN_ATTEMPTS {
        let existing: Vec<String> = state.participant_repo
            .list_by_session(&session.id)
            .await?
            .into_iter()
            .map(|p| p.name)
            .collect();

        let candidate = Participant::new(session.id.clone(), unique_name(&existing, &requested));

        match state.participant_repo.create(&candidate).await {
            Ok(participant) => {
                set_participant_cookie(&cookies, &participant.token, state.config.session_ttl_hours);

                info!("{} joined session {}", participant.name, session.code);
                return Ok(Json(SessionJoinedResponse {
                    code: session.code,
                    participant: ParticipantProfile::from(&participant),
                    token: participant.token,
                }));
            }
            Err(AppError::Database(e)) if is_unique_violation(&e) => {
                warn!(
                    "Join collision in session {} for name {:?} (attempt {})",
                    session.code, requested, attempt
                );
            }
            Err(e) => return Err(e),
        }
    }

    Err(AppError::Conflict("Could not join the session, please try again".into()))
}

pub fn set_participant_cookie(cookies: &Cookies, token: &str, ttl_hours: i64) {
    let mut cookie = Cookie::new(PARTICIPANT_COOKIE, token.to_string());
    cookie.set_http_only(true);
    cookie.set_same_site(SameSite::Lax);
    cookie.set_path("/");
    cookie.set_max_age(Duration::hours(ttl_hours));
    cookies.add(cookie);
}
