use serde::Deserialize;

#[derive(Deserialize, Default)]
pub struct CreateSessionRequest {
    pub name: Option<String>,
}

#[derive(Deserialize, Default)]
pub struct JoinSessionRequest {
    pub name: Option<String>,
}

#[derive(Deserialize)]
pub struct SubmitVoteRequest {
    pub restaurant_id: i64,
    pub liked: bool,
}
