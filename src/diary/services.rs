use crate::error::{validation, AppError};
use crate::types::{
    check_entry_date, encode_date, normalize_clock_time, parse_entry_date, AmountUnit,
    FoodDayType, FoodItem, MealType,
};

use super::repo::MealEntry;

/// Gatekeeper for the pending list: a candidate item either comes back
/// normalized (product trimmed, time zero-padded) or is rejected without
/// touching any state.
pub fn validate_food_item(
    time: &str,
    food_product: &str,
    amount_value: f64,
    amount_unit: AmountUnit,
) -> Result<FoodItem, AppError> {
    let product = food_product.trim();
    if product.is_empty() {
        return Err(validation("food element cannot be empty"));
    }
    if amount_value <= 0.0 {
        return Err(validation("amount has to be larger than 0"));
    }
    let time = normalize_clock_time(time)?;
    Ok(FoodItem {
        time,
        food_product: product.to_string(),
        amount_value,
        amount_unit,
    })
}

pub fn build_meal_entry(
    player_id: &str,
    meal_date: &str,
    day_type: FoodDayType,
    meal_type: MealType,
    pending_items: Vec<FoodItem>,
) -> Result<MealEntry, AppError> {
    if pending_items.is_empty() {
        return Err(validation("at least one food element required"));
    }
    let date = parse_entry_date(meal_date)?;
    check_entry_date(date)?;
    Ok(MealEntry {
        player_id: player_id.to_string(),
        meal_date: encode_date(date),
        day_type,
        meal_type,
        meal_elements: pending_items,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn pending() -> Vec<FoodItem> {
        vec![
            validate_food_item("08:00", "oatmeal", 200.0, AmountUnit::Gr).unwrap(),
            validate_food_item("08:05", "milk", 150.0, AmountUnit::Ml).unwrap(),
        ]
    }

    #[test]
    fn empty_or_whitespace_products_are_rejected() {
        for product in ["", "   ", "\t"] {
            let err = validate_food_item("08:00", product, 200.0, AmountUnit::Gr).unwrap_err();
            assert!(err.to_string().contains("empty"), "{product:?}");
        }
    }

    #[test]
    fn non_positive_amounts_are_rejected() {
        for amount in [0.0, -1.0, -200.0] {
            let err = validate_food_item("08:00", "oatmeal", amount, AmountUnit::Gr).unwrap_err();
            assert!(err.to_string().contains("larger than 0"), "{amount}");
        }
    }

    #[test]
    fn accepted_items_come_back_normalized() {
        let item = validate_food_item("8:05", "  milk  ", 150.0, AmountUnit::Ml).unwrap();
        assert_eq!(item.time, "08:05");
        assert_eq!(item.food_product, "milk");
        assert_eq!(item.amount_value, 150.0);
        assert_eq!(item.amount_unit, AmountUnit::Ml);
    }

    #[test]
    fn meals_need_at_least_one_food_element() {
        let err = build_meal_entry(
            "P1",
            "2024-05-01",
            FoodDayType::Training,
            MealType::Breakfast,
            Vec::new(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("at least one food element"));
    }

    #[test]
    fn meal_dates_must_be_valid_and_not_in_the_future() {
        assert!(build_meal_entry(
            "P1",
            "not-a-date",
            FoodDayType::Training,
            MealType::Breakfast,
            pending(),
        )
        .is_err());
        assert!(build_meal_entry(
            "P1",
            "2899-01-01",
            FoodDayType::Training,
            MealType::Breakfast,
            pending(),
        )
        .is_err());
    }

    #[test]
    fn entry_matches_the_stored_document_shape() {
        let entry = build_meal_entry(
            "P1",
            "2024-05-01",
            FoodDayType::Training,
            MealType::Breakfast,
            pending(),
        )
        .unwrap();

        assert_eq!(
            serde_json::to_value(&entry).unwrap(),
            json!({
                "player_id": "P1",
                "meal_date": 20240501,
                "day_type": "Training",
                "meal_type": "Breakfast",
                "meal_elements": [
                    {"time": "08:00", "food_product": "oatmeal", "amount_value": 200.0, "amount_unit": "gr"},
                    {"time": "08:05", "food_product": "milk", "amount_value": 150.0, "amount_unit": "ml"},
                ],
            })
        );
    }
}
