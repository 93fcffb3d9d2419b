use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use tracing::{info, instrument};

use crate::error::AppError;
use crate::state::AppState;

use super::dto::{
    AddFoodItemRequest, FoodItemAddedResponse, SubmitMealRequest, SubmittedEntryResponse,
};
use super::repo;
use super::services::{build_meal_entry, validate_food_item};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/diary/items", post(add_food_item))
        .route("/diary/meals", post(submit_meal))
}

#[instrument(skip(state, payload))]
pub async fn add_food_item(
    State(state): State<AppState>,
    Json(payload): Json<AddFoodItemRequest>,
) -> Result<(StatusCode, Json<FoodItemAddedResponse>), AppError> {
    let item = validate_food_item(
        &payload.time,
        &payload.food_product,
        payload.amount_value,
        payload.amount_unit,
    )?;
    state.sessions.push_item(payload.session_id, item.clone()).await?;
    Ok((StatusCode::CREATED, Json(FoodItemAddedResponse { item })))
}

#[instrument(skip(state, payload))]
pub async fn submit_meal(
    State(state): State<AppState>,
    Json(payload): Json<SubmitMealRequest>,
) -> Result<(StatusCode, Json<SubmittedEntryResponse>), AppError> {
    let pending = state.sessions.pending_items(payload.session_id).await?;
    let entry = build_meal_entry(
        &payload.player_id,
        &payload.meal_date,
        payload.day_type,
        payload.meal_type,
        pending,
    )?;

    let stored = repo::insert_meal_entry(&state.db, &entry).await?;

    // The insert went through, so the pending list is spent. A failed insert
    // leaves it intact for a manual resubmit.
    state
        .sessions
        .finish_meal(payload.session_id, &entry.player_id)
        .await?;

    info!(
        player_id = %entry.player_id,
        meal_date = entry.meal_date,
        elements = entry.meal_elements.len(),
        "meal entry added"
    );
    Ok((
        StatusCode::CREATED,
        Json(SubmittedEntryResponse {
            id: stored.id,
            created_at: stored.created_at,
        }),
    ))
}
