use meal_match::api_connection::{
    connection::ApiConnectionError,
    endpoints::{MEAL_DB_BASE_URL, NUTRITION_API_URL},
    MealDbClient, NutritionClient,
};
use dotenv::dotenv;
use std::env;

const TEST_API_KEY_ENV_VAR: &str = "CALORIE_NINJAS_API_KEY";

fn setup_test_environment() {
    dotenv().ok();
}

#[tokio::test]
async fn test_missing_api_key_error() {
    setup_test_environment();
    let client = NutritionClient::new("THIS_KEY_SHOULD_NOT_EXIST_IN_ENV_ABXYZ");
    let result = client.analyze("1 cup rice").await;
    assert!(matches!(result, Err(ApiConnectionError::MissingApiKey(_))));
    if let Err(ApiConnectionError::MissingApiKey(key_name)) = result {
        assert_eq!(key_name, "THIS_KEY_SHOULD_NOT_EXIST_IN_ENV_ABXYZ");
    }
}

#[tokio::test]
#[ignore]
async fn test_listing_lookup_live() {
    setup_test_environment();
    let client = MealDbClient::new();

    let meals = client.meals_by_cuisine("Italian").await.unwrap();
    assert!(!meals.is_empty(), "Expected Italian meals from {}", MEAL_DB_BASE_URL);
    assert!(meals.iter().all(|meal| !meal.id.is_empty()));
}

#[tokio::test]
#[ignore]
async fn test_detail_lookup_live() {
    setup_test_environment();
    let client = MealDbClient::new();

    // 52772 is a long-standing fixture id in the public dataset.
    let detail = client.meal_detail("52772").await.unwrap();
    let detail = detail.expect("Expected a detail record for meal 52772");
    assert!(!detail.ingredient_query().is_empty());

    let missing = client.meal_detail("0").await.unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
#[ignore]
async fn test_nutrition_lookup_live() {
    setup_test_environment();
    if env::var(TEST_API_KEY_ENV_VAR).is_err() {
        println!(
            "Skipping test_nutrition_lookup_live: {} not set.",
            TEST_API_KEY_ENV_VAR
        );
        return;
    }

    let client = NutritionClient::new(TEST_API_KEY_ENV_VAR);
    let items = client.analyze("200g chicken breast, 1 cup rice").await.unwrap();
    assert!(!items.is_empty(), "Expected items from {}", NUTRITION_API_URL);
    assert!(items.iter().any(|item| item.protein_g > 0.0));
}

#[tokio::test]
#[ignore]
async fn test_api_error_with_invalid_key() {
    setup_test_environment();

    const INVALID_KEY_ENV_NAME_FOR_THIS_TEST: &str = "ENV_VAR_WITH_BAD_KEY_VALUE";
    std::env::set_var(
        INVALID_KEY_ENV_NAME_FOR_THIS_TEST,
        "this_is_a_deliberately_bad_api_key_string_for_testing",
    );

    let client = NutritionClient::new(INVALID_KEY_ENV_NAME_FOR_THIS_TEST);
    let result = client.analyze("1 cup rice").await;
    assert!(
        matches!(result, Err(ApiConnectionError::ApiError { .. })),
        "Expected ApiError, got {:?}",
        result.err().map(|e| e.to_string())
    );

    std::env::remove_var(INVALID_KEY_ENV_NAME_FOR_THIS_TEST);
}
