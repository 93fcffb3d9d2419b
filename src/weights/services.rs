use crate::error::{validation, AppError};
use crate::types::{check_entry_date, encode_date, parse_entry_date, WeightDayType};

use super::repo::WeightEntry;

pub fn build_weight_entry(
    player_id: &str,
    registration_date: &str,
    day_type: WeightDayType,
    weight_before: f64,
    weight_after: f64,
) -> Result<WeightEntry, AppError> {
    if weight_before <= 0.0 || weight_after <= 0.0 {
        return Err(validation("weight values must be positive numbers"));
    }
    let date = parse_entry_date(registration_date)?;
    check_entry_date(date)?;
    Ok(WeightEntry {
        player_id: player_id.to_string(),
        registration_date: encode_date(date),
        day_type,
        weight_before,
        weight_after,
    })
}
