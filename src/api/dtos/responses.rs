use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::models::participant::Participant;
use crate::domain::models::restaurant::Restaurant;
use crate::domain::services::progression::Progress;
use crate::domain::services::results::{RestaurantTally, VoterEntry};

#[derive(Serialize)]
pub struct ParticipantProfile {
    pub id: String,
    pub name: String,
    pub completed: bool,
}

impl From<&Participant> for ParticipantProfile {
    fn from(p: &Participant) -> Self {
        Self {
            id: p.id.clone(),
            name: p.name.clone(),
            completed: p.is_completed(),
        }
    }
}

/// Catalog entry plus the display helpers the swipe deck renders.
#[derive(Serialize)]
pub struct RestaurantView {
    #[serde(flatten)]
    pub restaurant: Restaurant,
    pub price_display: String,
    pub rating_stars: String,
}

impl From<Restaurant> for RestaurantView {
    fn from(restaurant: Restaurant) -> Self {
        let price_display = restaurant.price_display();
        let rating_stars = restaurant.rating_stars();
        Self {
            restaurant,
            price_display,
            rating_stars,
        }
    }
}

#[derive(Serialize)]
pub struct SessionJoinedResponse {
    pub code: String,
    pub participant: ParticipantProfile,
    /// Echo of the cookie value for non-browser clients.
    pub token: String,
}

#[derive(Serialize)]
pub struct SessionStateResponse {
    pub code: String,
    pub status: String,
    pub expires_at: DateTime<Utc>,
    pub participants: Vec<ParticipantProfile>,
}

#[derive(Serialize)]
pub struct SwipeResponse {
    pub restaurant: Option<RestaurantView>,
    pub progress: Progress,
}

#[derive(Serialize)]
pub struct VoteRecordedResponse {
    pub progress: Progress,
    pub next_restaurant: Option<RestaurantView>,
    pub completed: bool,
}

#[derive(Serialize)]
pub struct TallyEntry {
    pub restaurant: RestaurantView,
    pub yes_votes: i64,
    pub total_votes: i64,
    pub voters: Vec<VoterEntry>,
}

impl From<RestaurantTally> for TallyEntry {
    fn from(tally: RestaurantTally) -> Self {
        Self {
            restaurant: tally.restaurant.into(),
            yes_votes: tally.yes_votes,
            total_votes: tally.total_votes,
            voters: tally.voters,
        }
    }
}

#[derive(Serialize)]
pub struct ResultsResponse {
    pub results: Vec<TallyEntry>,
    pub pending_participants: Vec<ParticipantProfile>,
    pub everyone_finished: bool,
}
