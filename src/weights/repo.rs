use serde::Serialize;
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;

use crate::error::AppError;
use crate::types::WeightDayType;

/// One before/after measurement around an activity, persisted as a single
/// flat record.
#[derive(Debug, Clone, Serialize)]
pub struct WeightEntry {
    pub player_id: String,
    pub registration_date: i32,
    pub day_type: WeightDayType,
    pub weight_before: f64,
    pub weight_after: f64,
}

#[derive(Debug, FromRow)]
pub struct StoredEntry {
    pub id: i64,
    pub created_at: OffsetDateTime,
}

pub async fn insert_weight_entry(db: &PgPool, entry: &WeightEntry) -> Result<StoredEntry, AppError> {
    let row = sqlx::query_as::<_, StoredEntry>(
        r#"
        INSERT INTO weight_registration (player_id, registration_date, day_type, weight_before, weight_after)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, created_at
        "#,
    )
    .bind(&entry.player_id)
    .bind(entry.registration_date)
    .bind(entry.day_type.as_str())
    .bind(entry.weight_before)
    .bind(entry.weight_after)
    .fetch_one(db)
    .await
    .map_err(AppError::Persistence)?;
    Ok(row)
}
