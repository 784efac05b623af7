use crate::gallery::GalleryEntry;
use crate::preferences::constants::{
    BMI_NORMAL_MAX, BMI_OBESE_1_MAX, BMI_OBESE_2_MAX, BMI_OVERWEIGHT_MAX, BMI_UNDERWEIGHT_MAX,
};
use crate::preferences::metrics::BmiCategory;
use crate::preferences::pipeline::FilteredMeal;

/// Stage 4 result panel: the computed BMI, its category, and the bracket
/// legend.
pub fn display_bmi_summary(bmi: f64, category: BmiCategory) {
    println!();
    println!("BMI Results");
    println!("Your BMI is: {} ({})", bmi, category);
    println!();
    println!("  Underweight (BMI < {})", BMI_UNDERWEIGHT_MAX);
    println!(
        "  Normal      (BMI range: {} - {})",
        BMI_UNDERWEIGHT_MAX, BMI_NORMAL_MAX
    );
    println!(
        "  Overweight  (BMI range: {} - {})",
        BMI_NORMAL_MAX, BMI_OVERWEIGHT_MAX
    );
    println!(
        "  Obese I     (BMI range: {} - {})",
        BMI_OVERWEIGHT_MAX, BMI_OBESE_1_MAX
    );
    println!(
        "  Obese II    (BMI range: {} - {})",
        BMI_OBESE_1_MAX, BMI_OBESE_2_MAX
    );
    println!("  Obese III   (BMI >= {})", BMI_OBESE_2_MAX);
}

/// The final meal selection with per-meal totals.
pub fn display_final_meals(meals: &[FilteredMeal]) {
    println!();
    if meals.is_empty() {
        println!("No meals match your preferences.");
        return;
    }

    println!("Your preferred meals ({}):", meals.len());
    for entry in meals {
        println!(
            "  {} — protein {}g, carbs {}g, sugar {}g, fat {}g",
            entry.meal.name,
            entry.totals.protein_g,
            entry.totals.carbohydrates_total_g,
            entry.totals.sugar_g,
            entry.totals.fat_g
        );
    }
}

/// The all-users meal gallery.
pub fn display_gallery(entries: &[GalleryEntry]) {
    println!("Meals from All Users");
    println!();
    if entries.is_empty() {
        println!("No meals found.");
        return;
    }

    for entry in entries {
        let photo = entry.photo.as_deref().unwrap_or("No Image");
        println!("  {} (by {}) — {}", entry.name, entry.user_id, photo);
    }
}
