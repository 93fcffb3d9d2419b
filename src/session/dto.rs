use serde::Serialize;
use uuid::Uuid;

use crate::types::FoodItem;

use super::store::SessionState;

#[derive(Debug, Serialize)]
pub struct CreatedSessionResponse {
    pub session_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct SessionStateResponse {
    pub pending_items: Vec<FoodItem>,
    pub remembered_player_id: Option<String>,
}

impl From<SessionState> for SessionStateResponse {
    fn from(state: SessionState) -> Self {
        Self {
            pending_items: state.pending_items,
            remembered_player_id: state.remembered_player_id,
        }
    }
}
