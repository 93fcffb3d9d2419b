use serde::Serialize;
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;

use crate::error::AppError;
use crate::types::{FoodDayType, FoodItem, MealType};

/// A complete diary entry, ready to persist. Serializes to exactly the
/// stored document shape.
#[derive(Debug, Clone, Serialize)]
pub struct MealEntry {
    pub player_id: String,
    pub meal_date: i32,
    pub day_type: FoodDayType,
    pub meal_type: MealType,
    pub meal_elements: Vec<FoodItem>,
}

#[derive(Debug, FromRow)]
pub struct StoredEntry {
    pub id: i64,
    pub created_at: OffsetDateTime,
}

pub async fn insert_meal_entry(db: &PgPool, entry: &MealEntry) -> Result<StoredEntry, AppError> {
    let row = sqlx::query_as::<_, StoredEntry>(
        r#"
        INSERT INTO meal_diary_entries (player_id, meal_date, day_type, meal_type, meal_elements)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, created_at
        "#,
    )
    .bind(&entry.player_id)
    .bind(entry.meal_date)
    .bind(entry.day_type.as_str())
    .bind(entry.meal_type.as_str())
    .bind(sqlx::types::Json(&entry.meal_elements))
    .fetch_one(db)
    .await
    .map_err(AppError::Persistence)?;
    Ok(row)
}
