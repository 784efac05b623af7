use anyhow::{Context, Result};
use std::env;

use meal_match::api_connection::{MealDbClient, NutritionClient};
use meal_match::cli::{parse_args, Cli, Command};
use meal_match::error::MealMatchError;
use meal_match::gallery::all_user_meals;
use meal_match::interface::{
    display_bmi_summary, display_final_meals, display_gallery, prompt_body_metrics,
    prompt_cuisines, prompt_diet_plan,
};
use meal_match::preferences::{apply_fat_bracket, combined_listings, filter_by_diet, BmiCategory};
use meal_match::profile::{JsonProfileStore, ProfileStore};

// Environment variable holding the nutrition service credential
const NUTRITION_API_KEY_ENV_VAR: &str = "CALORIE_NINJAS_API_KEY";
const USER_ENV_VAR: &str = "MEAL_MATCH_USER";

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok(); // Load .env for the API key and default user
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli_args = parse_args();
    let store = JsonProfileStore::new(&cli_args.store_file);

    match cli_args.command.clone().unwrap_or_default() {
        Command::Wizard => run_wizard(&cli_args, &store).await,
        Command::Gallery => run_gallery(&store).await,
        Command::Show => run_show(&cli_args, &store).await,
    }
}

/// The signed-in identity: `--user` flag first, then the environment.
fn signed_in_user(cli_args: &Cli) -> std::result::Result<String, MealMatchError> {
    cli_args
        .user
        .clone()
        .or_else(|| env::var(USER_ENV_VAR).ok())
        .filter(|user| !user.is_empty())
        .ok_or(MealMatchError::NotSignedIn)
}

async fn run_wizard(cli_args: &Cli, store: &JsonProfileStore) -> Result<()> {
    // Stage 1: pick 2 cuisines, fetch both listings concurrently
    let (first, second) = prompt_cuisines()?;
    println!("\nFetching meal listings for {} and {}...", first, second);
    let meal_client = MealDbClient::new();
    let candidates = combined_listings(&meal_client, first, second).await;
    println!("Found {} candidate meals.", candidates.len());

    // Stage 2: diet filtering, one detail+nutrition round-trip chain per meal
    let plan = prompt_diet_plan()?;
    let nutrition_client = NutritionClient::new(NUTRITION_API_KEY_ENV_VAR);
    println!(
        "\nChecking nutrition for {} meals (two lookups per meal, this may take a while)...",
        candidates.len()
    );
    let filtered = filter_by_diet(&meal_client, &nutrition_client, candidates, plan).await;
    println!("{} meals match \"{}\".", filtered.len(), plan);

    // Stage 3: body metrics; an unusable height re-prompts the stage
    let bmi = loop {
        let metrics = prompt_body_metrics()?;
        match metrics.bmi() {
            Ok(bmi) => break bmi,
            Err(err) => println!("Invalid input: {}", err),
        }
    };

    // Stage 4: results, fat bracket, persistence
    let category = BmiCategory::from_bmi(bmi);
    display_bmi_summary(bmi, category);
    let final_meals = apply_fat_bracket(filtered, bmi);
    display_final_meals(&final_meals);

    let user_id = signed_in_user(cli_args)?;
    let meal_ids: Vec<String> = final_meals
        .iter()
        .map(|entry| entry.meal.id.clone())
        .collect();
    store
        .save_preferences(&user_id, &meal_ids)
        .await
        .with_context(|| format!("Failed to save preferences for '{}'", user_id))?;
    println!(
        "\nYour preferences have been saved ({} meals).",
        meal_ids.len()
    );

    Ok(())
}

async fn run_gallery(store: &JsonProfileStore) -> Result<()> {
    let entries = all_user_meals(store)
        .await
        .with_context(|| "Failed to read the meal gallery")?;
    display_gallery(&entries);
    Ok(())
}

async fn run_show(cli_args: &Cli, store: &JsonProfileStore) -> Result<()> {
    let user_id = signed_in_user(cli_args)?;
    let preferences = store
        .preferences(&user_id)
        .await
        .with_context(|| format!("Failed to read preferences for '{}'", user_id))?;

    if preferences.is_empty() {
        println!("No saved preferences for {}.", user_id);
    } else {
        println!("Preferred meal ids for {}:", user_id);
        for meal_id in preferences {
            println!("  {}", meal_id);
        }
    }
    Ok(())
}
