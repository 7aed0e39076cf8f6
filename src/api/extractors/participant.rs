use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use crate::domain::models::participant::Participant;
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;
use tower_cookies::Cookies;
use tracing::Span;

pub const PARTICIPANT_COOKIE: &str = "participant_token";

/// The caller, resolved from the bearer token cookie. Possession of the
/// token is the whole identity story; there is no account layer behind it.
pub struct CurrentParticipant(pub Participant);

impl<S> FromRequestParts<S> for CurrentParticipant
where
    S: Send + Sync,
    Arc<AppState>: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let cookies = parts.extensions.get::<Cookies>()
            .ok_or(AppError::Internal)?;

        let token = cookies.get(PARTICIPANT_COOKIE)
            .ok_or(AppError::Unauthorized)?
            .value()
            .to_string();

        let app_state = <Arc<AppState> as FromRef<S>>::from_ref(state);

        let participant = app_state.participant_repo.find_by_token(&token).await?
            .ok_or(AppError::Unauthorized)?;

        Span::current().record("participant_id", &participant.id);

        Ok(CurrentParticipant(participant))
    }
}
