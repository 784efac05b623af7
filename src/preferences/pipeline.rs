use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::api_connection::connection::{ApiConnectionError, MealDbClient, NutritionClient};
use crate::api_connection::endpoints::{MealDetail, NutritionItem, RawMeal};
use crate::preferences::cuisine::Cuisine;
use crate::preferences::diet::DietPlan;
use crate::preferences::metrics::{fat_rule_for_bmi, round1};

/// Aggregated nutrition for one meal: item figures summed, each total rounded
/// to one decimal place.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NutritionTotals {
    pub protein_g: f64,
    pub carbohydrates_total_g: f64,
    pub sugar_g: f64,
    pub fat_g: f64,
}

impl NutritionTotals {
    pub fn from_items(items: &[NutritionItem]) -> Self {
        let mut totals = NutritionTotals::default();
        for item in items {
            totals.protein_g += item.protein_g;
            totals.carbohydrates_total_g += item.carbohydrates_total_g;
            totals.sugar_g += item.sugar_g;
            totals.fat_g += item.fat_total_g;
        }
        NutritionTotals {
            protein_g: round1(totals.protein_g),
            carbohydrates_total_g: round1(totals.carbohydrates_total_g),
            sugar_g: round1(totals.sugar_g),
            fat_g: round1(totals.fat_g),
        }
    }
}

/// A meal that survived diet filtering, with its totals attached.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredMeal {
    pub meal: RawMeal,
    pub totals: NutritionTotals,
}

/// Source of meal listings and per-meal detail records.
#[async_trait]
pub trait MealSource: Send + Sync {
    async fn meals_by_cuisine(&self, cuisine: Cuisine)
        -> Result<Vec<RawMeal>, ApiConnectionError>;

    async fn meal_detail(&self, meal_id: &str) -> Result<Option<MealDetail>, ApiConnectionError>;
}

/// Source of nutrition figures for a free-text ingredient descriptor.
#[async_trait]
pub trait NutritionSource: Send + Sync {
    async fn analyze(&self, ingredient_query: &str)
        -> Result<Vec<NutritionItem>, ApiConnectionError>;
}

#[async_trait]
impl MealSource for MealDbClient {
    async fn meals_by_cuisine(
        &self,
        cuisine: Cuisine,
    ) -> Result<Vec<RawMeal>, ApiConnectionError> {
        MealDbClient::meals_by_cuisine(self, cuisine.as_str()).await
    }

    async fn meal_detail(&self, meal_id: &str) -> Result<Option<MealDetail>, ApiConnectionError> {
        MealDbClient::meal_detail(self, meal_id).await
    }
}

#[async_trait]
impl NutritionSource for NutritionClient {
    async fn analyze(
        &self,
        ingredient_query: &str,
    ) -> Result<Vec<NutritionItem>, ApiConnectionError> {
        NutritionClient::analyze(self, ingredient_query).await
    }
}

/// Stage 1: fetch both cuisine listings concurrently and concatenate them.
/// A failed lookup degrades to an empty list for that cuisine, logged only.
pub async fn combined_listings<S: MealSource + ?Sized>(
    source: &S,
    first: Cuisine,
    second: Cuisine,
) -> Vec<RawMeal> {
    let (left, right) = tokio::join!(
        source.meals_by_cuisine(first),
        source.meals_by_cuisine(second),
    );

    let mut combined = unwrap_listing(left, first);
    combined.extend(unwrap_listing(right, second));
    combined
}

fn unwrap_listing(result: Result<Vec<RawMeal>, ApiConnectionError>, cuisine: Cuisine) -> Vec<RawMeal> {
    match result {
        Ok(meals) => meals,
        Err(err) => {
            warn!("listing lookup for {} failed: {}", cuisine, err);
            Vec::new()
        }
    }
}

/// Stage 2: for each candidate, fetch its detail, analyze its ingredient
/// descriptor, and keep it only if the aggregated totals satisfy the plan.
///
/// Meals are processed strictly sequentially; one detail+nutrition round-trip
/// chain completes before the next meal starts. A meal is dropped (logged) on
/// missing detail, an empty descriptor, a failed nutrition lookup, or the
/// first failing rule.
pub async fn filter_by_diet<M, N>(
    meals: &M,
    nutrition: &N,
    candidates: Vec<RawMeal>,
    plan: DietPlan,
) -> Vec<FilteredMeal>
where
    M: MealSource + ?Sized,
    N: NutritionSource + ?Sized,
{
    let mut retained = Vec::new();

    for candidate in candidates {
        let detail = match meals.meal_detail(&candidate.id).await {
            Ok(Some(detail)) => detail,
            Ok(None) => {
                debug!("no detail found for meal {}", candidate.id);
                continue;
            }
            Err(err) => {
                warn!("detail lookup for meal {} failed: {}", candidate.id, err);
                continue;
            }
        };

        let query = detail.ingredient_query();
        if query.is_empty() {
            debug!("meal {} has no usable ingredient slots", candidate.id);
            continue;
        }

        let items = match nutrition.analyze(&query).await {
            Ok(items) => items,
            Err(err) => {
                warn!("nutrition lookup for meal {} failed: {}", candidate.id, err);
                continue;
            }
        };

        let totals = NutritionTotals::from_items(&items);
        if !plan.matches(&totals) {
            debug!("meal \"{}\" does not meet {}", candidate.name, plan);
            continue;
        }

        retained.push(FilteredMeal {
            meal: candidate,
            totals,
        });
    }

    retained
}

/// Stage 3: keep only the diet-filtered meals whose fat content passes the
/// bracket rule for the given BMI.
pub fn apply_fat_bracket(meals: Vec<FilteredMeal>, bmi: f64) -> Vec<FilteredMeal> {
    let rule = fat_rule_for_bmi(bmi);
    meals
        .into_iter()
        .filter(|meal| rule.keeps(meal.totals.fat_g))
        .collect()
}
