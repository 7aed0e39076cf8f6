use std::sync::Arc;
use crate::domain::ports::{
    ParticipantRepository, RestaurantRepository, SessionRepository, VoteRepository,
};
use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub session_repo: Arc<dyn SessionRepository>,
    pub participant_repo: Arc<dyn ParticipantRepository>,
    pub restaurant_repo: Arc<dyn RestaurantRepository>,
    pub vote_repo: Arc<dyn VoteRepository>,
}
