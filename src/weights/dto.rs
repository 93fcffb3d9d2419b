use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::types::WeightDayType;

#[derive(Debug, Deserialize)]
pub struct SubmitWeightRequest {
    pub session_id: Uuid,
    pub player_id: String,
    pub registration_date: String,
    pub day_type: WeightDayType,
    pub weight_before: f64,
    pub weight_after: f64,
}

#[derive(Debug, Serialize)]
pub struct RegisteredWeightResponse {
    pub id: i64,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}
