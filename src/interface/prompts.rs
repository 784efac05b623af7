use dialoguer::{Input, Select};

use crate::error::{MealMatchError, Result};
use crate::preferences::constants::MAX_CUISINES;
use crate::preferences::cuisine::{Cuisine, CuisineSelection, ALL_CUISINES};
use crate::preferences::diet::{DietPlan, ALL_DIET_PLANS};
use crate::preferences::metrics::{BodyMetrics, Height, WeightUnit};

/// Stage 1 prompt: toggle cuisines until exactly two are selected, then
/// confirm. Picking a selected cuisine again deselects it; picking a third
/// while two are selected changes nothing.
pub fn prompt_cuisines() -> Result<(Cuisine, Cuisine)> {
    let mut selection = CuisineSelection::new();

    loop {
        let mut items: Vec<String> = ALL_CUISINES
            .iter()
            .map(|cuisine| {
                let marker = if selection.contains(*cuisine) { "x" } else { " " };
                format!("[{}] {}", marker, cuisine)
            })
            .collect();
        items.push("Continue".to_string());

        let choice = Select::new()
            .with_prompt(format!("Select {} cuisines", MAX_CUISINES))
            .items(&items)
            .default(0)
            .interact()?;

        if choice < ALL_CUISINES.len() {
            selection.toggle(ALL_CUISINES[choice]);
            continue;
        }

        if selection.is_complete() {
            let picked = selection.selected();
            return Ok((picked[0], picked[1]));
        }
        println!("Please select exactly {} cuisines.", MAX_CUISINES);
    }
}

/// Stage 2 prompt: pick one diet preference.
pub fn prompt_diet_plan() -> Result<DietPlan> {
    let labels: Vec<&str> = ALL_DIET_PLANS.iter().map(|plan| plan.label()).collect();
    let choice = Select::new()
        .with_prompt("Select a diet preference")
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(ALL_DIET_PLANS[choice])
}

/// Stage 3 prompt: weight and height in the user's preferred units. Values
/// are parsed here; whether the height is usable is decided by the BMI
/// computation.
pub fn prompt_body_metrics() -> Result<BodyMetrics> {
    let weight = prompt_number("Enter weight")?;
    let weight_unit = match Select::new()
        .with_prompt("Weight unit")
        .items(&["Kg", "lbs"])
        .default(0)
        .interact()?
    {
        0 => WeightUnit::Kilograms,
        _ => WeightUnit::Pounds,
    };

    let height = match Select::new()
        .with_prompt("Height unit")
        .items(&["cm", "feet+inches"])
        .default(0)
        .interact()?
    {
        0 => Height::Centimeters(prompt_number("Enter height in cm")?),
        _ => Height::FeetInches {
            feet: prompt_number("Feet")?,
            inches: prompt_number("Inches")?,
        },
    };

    Ok(BodyMetrics {
        weight,
        weight_unit,
        height,
    })
}

fn prompt_number(prompt: &str) -> Result<f64> {
    let input: String = Input::new().with_prompt(prompt).interact_text()?;
    input
        .trim()
        .parse()
        .map_err(|_| MealMatchError::InvalidInput(format!("'{}' is not a number", input.trim())))
}
