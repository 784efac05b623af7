use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const MEAL_DB_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1";
pub const NUTRITION_API_URL: &str = "https://api.calorieninjas.com/v1/nutrition";

/// Ingredient/measure slots carried by a meal detail record.
pub const INGREDIENT_SLOTS: usize = 20;

#[derive(Debug, Deserialize, Clone)]
pub struct MealListingResponse {
    pub meals: Option<Vec<RawMeal>>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RawMeal {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(rename = "strMealThumb", skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MealDetailResponse {
    pub meals: Option<Vec<MealDetail>>,
}

/// Full lookup record for one meal. The ingredient/measure columns arrive as
/// numbered keys (`strIngredient1`..`strIngredient20`, `strMeasure1`..) with
/// null or blank values in unused slots, so they are kept as a flattened map
/// and read back positionally.
#[derive(Debug, Deserialize, Clone)]
pub struct MealDetail {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(flatten)]
    extra: HashMap<String, serde_json::Value>,
}

impl MealDetail {
    /// All usable (measure, ingredient) pairs, in slot order. A slot is
    /// skipped when either side is null or blank.
    pub fn ingredient_pairs(&self) -> Vec<(String, String)> {
        (1..=INGREDIENT_SLOTS)
            .filter_map(|slot| {
                let ingredient = self.slot_text(&format!("strIngredient{}", slot))?;
                let measure = self.slot_text(&format!("strMeasure{}", slot))?;
                Some((measure.to_string(), ingredient.to_string()))
            })
            .collect()
    }

    /// Free-text descriptor submitted to the nutrition service:
    /// `"{measure} {ingredient}"` pairs joined with `", "`. Empty when the
    /// record has no usable slots.
    pub fn ingredient_query(&self) -> String {
        self.ingredient_pairs()
            .iter()
            .map(|(measure, ingredient)| format!("{} {}", measure, ingredient))
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn slot_text(&self, key: &str) -> Option<&str> {
        let text = self.extra.get(key)?.as_str()?.trim();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct NutritionResponse {
    #[serde(default)]
    pub items: Vec<NutritionItem>,
}

/// Per-ingredient nutrition figures. Fields the service omits count as zero.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct NutritionItem {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub protein_g: f64,
    #[serde(default)]
    pub carbohydrates_total_g: f64,
    #[serde(default)]
    pub sugar_g: f64,
    #[serde(default)]
    pub fat_total_g: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn raw_meal_parses_wire_names() {
        let meal: RawMeal = serde_json::from_value(json!({
            "idMeal": "52772",
            "strMeal": "Teriyaki Chicken Casserole",
            "strMealThumb": "https://example.test/52772.jpg"
        }))
        .unwrap();
        assert_eq!(meal.id, "52772");
        assert_eq!(meal.name, "Teriyaki Chicken Casserole");
        assert!(meal.thumbnail.is_some());
    }

    #[test]
    fn ingredient_query_skips_blank_and_null_slots() {
        let detail: MealDetail = serde_json::from_value(json!({
            "idMeal": "1",
            "strMeal": "Test Meal",
            "strIngredient1": "Chicken",
            "strMeasure1": "200g",
            "strIngredient2": "Soy Sauce",
            "strMeasure2": "",
            "strIngredient3": null,
            "strMeasure3": "1 tbsp",
            "strIngredient4": "Rice",
            "strMeasure4": "1 cup"
        }))
        .unwrap();

        assert_eq!(
            detail.ingredient_pairs(),
            vec![
                ("200g".to_string(), "Chicken".to_string()),
                ("1 cup".to_string(), "Rice".to_string()),
            ]
        );
        assert_eq!(detail.ingredient_query(), "200g Chicken, 1 cup Rice");
    }

    #[test]
    fn ingredient_query_empty_when_no_usable_slots() {
        let detail: MealDetail = serde_json::from_value(json!({
            "idMeal": "2",
            "strMeal": "Bare Meal",
            "strIngredient1": " ",
            "strMeasure1": "1 tsp"
        }))
        .unwrap();
        assert!(detail.ingredient_query().is_empty());
    }

    #[test]
    fn nutrition_item_defaults_missing_fields_to_zero() {
        let item: NutritionItem = serde_json::from_value(json!({
            "name": "chicken",
            "protein_g": 42.5
        }))
        .unwrap();
        assert_eq!(item.protein_g, 42.5);
        assert_eq!(item.carbohydrates_total_g, 0.0);
        assert_eq!(item.sugar_g, 0.0);
        assert_eq!(item.fat_total_g, 0.0);
    }
}
