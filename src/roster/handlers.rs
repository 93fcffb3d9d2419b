use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tracing::instrument;

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct RosterResponse {
    pub players: Vec<String>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/roster", get(list_players))
        .route("/roster/refresh", post(refresh_roster))
}

/// An empty list is a valid answer; clients disable submission on it instead
/// of treating it as a failure.
#[instrument(skip(state))]
pub async fn list_players(
    State(state): State<AppState>,
) -> Result<Json<RosterResponse>, AppError> {
    let players = state.roster.player_ids(&state.db).await?;
    Ok(Json(RosterResponse { players }))
}

#[instrument(skip(state))]
pub async fn refresh_roster(State(state): State<AppState>) -> StatusCode {
    state.roster.invalidate().await;
    StatusCode::NO_CONTENT
}
