//! Empirical thresholds used by the preference wizard. These are product
//! choices, kept in one place so they can be tuned without touching logic.

/// Cuisines a user may pick per wizard run.
pub const MAX_CUISINES: usize = 2;

// ─────────────────────────────────────────────────────────────────────────────
// Diet rule thresholds (grams, per aggregated meal)
// ─────────────────────────────────────────────────────────────────────────────

/// Protein above this counts as high-protein.
pub const PROTEIN_HIGH_G: f64 = 100.0;

/// Carbohydrates above this count as high-carbs.
pub const CARBS_HIGH_G: f64 = 350.0;

/// Carbohydrates below this count as low-carbs.
pub const CARBS_LOW_G: f64 = 300.0;

/// Sugar below this counts as low-sugar.
pub const SUGAR_LOW_G: f64 = 75.0;

// ─────────────────────────────────────────────────────────────────────────────
// Unit conversion factors
// ─────────────────────────────────────────────────────────────────────────────

pub const LBS_TO_KG: f64 = 0.453592;
pub const CM_PER_METER: f64 = 100.0;
pub const FEET_PER_METER: f64 = 3.281;
pub const INCHES_PER_METER: f64 = 39.37;

// ─────────────────────────────────────────────────────────────────────────────
// BMI category boundaries (upper bounds, exclusive)
// ─────────────────────────────────────────────────────────────────────────────

pub const BMI_UNDERWEIGHT_MAX: f64 = 18.5;
pub const BMI_NORMAL_MAX: f64 = 25.0;
pub const BMI_OVERWEIGHT_MAX: f64 = 30.0;
pub const BMI_OBESE_1_MAX: f64 = 35.0;
pub const BMI_OBESE_2_MAX: f64 = 40.0;

// ─────────────────────────────────────────────────────────────────────────────
// Fat bounds applied per BMI bracket (grams, per aggregated meal)
// ─────────────────────────────────────────────────────────────────────────────

/// Underweight users only keep meals with more fat than this.
pub const UNDERWEIGHT_MIN_FAT_G: f64 = 200.0;

/// Overweight users only keep meals with less fat than this.
pub const OVERWEIGHT_MAX_FAT_G: f64 = 150.0;

/// Obese users only keep meals with less fat than this.
pub const OBESE_MAX_FAT_G: f64 = 100.0;
