pub mod sqlite_session_repo;
pub mod sqlite_participant_repo;
pub mod sqlite_restaurant_repo;
pub mod sqlite_vote_repo;

pub mod postgres_session_repo;
pub mod postgres_participant_repo;
pub mod postgres_restaurant_repo;
pub mod postgres_vote_repo;
