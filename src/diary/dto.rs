use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::types::{AmountUnit, FoodDayType, FoodItem, MealType};

#[derive(Debug, Deserialize)]
pub struct AddFoodItemRequest {
    pub session_id: Uuid,
    pub time: String,
    pub food_product: String,
    pub amount_value: f64,
    pub amount_unit: AmountUnit,
}

#[derive(Debug, Serialize)]
pub struct FoodItemAddedResponse {
    pub item: FoodItem,
}

#[derive(Debug, Deserialize)]
pub struct SubmitMealRequest {
    pub session_id: Uuid,
    pub player_id: String,
    pub meal_date: String,
    pub day_type: FoodDayType,
    pub meal_type: MealType,
}

#[derive(Debug, Serialize)]
pub struct SubmittedEntryResponse {
    pub id: i64,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn submit_request_deserializes_with_dutch_labels() {
        let req: SubmitMealRequest = serde_json::from_value(json!({
            "session_id": "8c2f9a4e-0b7d-4b59-9a3e-9f2d6c1e5a70",
            "player_id": "P1",
            "meal_date": "2024-05-01",
            "day_type": "Training",
            "meal_type": "Ontbijt",
        }))
        .unwrap();
        assert_eq!(req.meal_type, MealType::Breakfast);
        assert_eq!(req.day_type, FoodDayType::Training);
    }

    #[test]
    fn add_item_request_rejects_unknown_units() {
        let result = serde_json::from_value::<AddFoodItemRequest>(json!({
            "session_id": "8c2f9a4e-0b7d-4b59-9a3e-9f2d6c1e5a70",
            "time": "08:00",
            "food_product": "oatmeal",
            "amount_value": 200.0,
            "amount_unit": "kg",
        }));
        assert!(result.is_err());
    }
}
