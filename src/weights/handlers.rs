use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use tracing::{info, instrument};

use crate::error::AppError;
use crate::state::AppState;

use super::dto::{RegisteredWeightResponse, SubmitWeightRequest};
use super::repo;
use super::services::build_weight_entry;

pub fn routes() -> Router<AppState> {
    Router::new().route("/weights", post(submit_weight))
}

#[instrument(skip(state, payload))]
pub async fn submit_weight(
    State(state): State<AppState>,
    Json(payload): Json<SubmitWeightRequest>,
) -> Result<(StatusCode, Json<RegisteredWeightResponse>), AppError> {
    // Session must exist before anything is persisted.
    state.sessions.get(payload.session_id).await?;

    let entry = build_weight_entry(
        &payload.player_id,
        &payload.registration_date,
        payload.day_type,
        payload.weight_before,
        payload.weight_after,
    )?;

    let stored = repo::insert_weight_entry(&state.db, &entry).await?;

    state
        .sessions
        .remember_player(payload.session_id, &entry.player_id)
        .await?;

    info!(
        player_id = %entry.player_id,
        registration_date = entry.registration_date,
        "weight registration added"
    );
    Ok((
        StatusCode::CREATED,
        Json(RegisteredWeightResponse {
            id: stored.id,
            created_at: stored.created_at,
        }),
    ))
}
