use std::fmt;

use crate::error::{MealMatchError, Result};
use crate::preferences::constants::{
    BMI_NORMAL_MAX, BMI_OBESE_1_MAX, BMI_OBESE_2_MAX, BMI_OVERWEIGHT_MAX, BMI_UNDERWEIGHT_MAX,
    CM_PER_METER, FEET_PER_METER, INCHES_PER_METER, LBS_TO_KG, OBESE_MAX_FAT_G,
    OVERWEIGHT_MAX_FAT_G, UNDERWEIGHT_MIN_FAT_G,
};

/// Round to one decimal place.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightUnit {
    Kilograms,
    Pounds,
}

/// Height input, in the unit system the user picked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Height {
    Centimeters(f64),
    FeetInches { feet: f64, inches: f64 },
}

/// Body measurements collected by stage 3 of the wizard.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyMetrics {
    pub weight: f64,
    pub weight_unit: WeightUnit,
    pub height: Height,
}

impl BodyMetrics {
    pub fn weight_kg(&self) -> f64 {
        match self.weight_unit {
            WeightUnit::Kilograms => self.weight,
            WeightUnit::Pounds => self.weight * LBS_TO_KG,
        }
    }

    pub fn height_m(&self) -> f64 {
        match self.height {
            Height::Centimeters(cm) => cm / CM_PER_METER,
            Height::FeetInches { feet, inches } => {
                feet / FEET_PER_METER + inches / INCHES_PER_METER
            }
        }
    }

    /// BMI = weight_kg / height_m², rounded to one decimal place. Fails when
    /// the normalised height is zero or not a number; no value is produced.
    pub fn bmi(&self) -> Result<f64> {
        let height_m = self.height_m();
        if height_m == 0.0 || height_m.is_nan() {
            return Err(MealMatchError::InvalidHeight);
        }
        Ok(round1(self.weight_kg() / (height_m * height_m)))
    }
}

/// Six-way BMI classification shown on the result screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    ObeseI,
    ObeseII,
    ObeseIII,
}

impl BmiCategory {
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < BMI_UNDERWEIGHT_MAX {
            BmiCategory::Underweight
        } else if bmi < BMI_NORMAL_MAX {
            BmiCategory::Normal
        } else if bmi < BMI_OVERWEIGHT_MAX {
            BmiCategory::Overweight
        } else if bmi < BMI_OBESE_1_MAX {
            BmiCategory::ObeseI
        } else if bmi < BMI_OBESE_2_MAX {
            BmiCategory::ObeseII
        } else {
            BmiCategory::ObeseIII
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::ObeseI => "Obese I",
            BmiCategory::ObeseII => "Obese II",
            BmiCategory::ObeseIII => "Obese III",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Fat constraint applied to the diet-filtered meals for one BMI bracket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FatRule {
    MinimumFat(f64),
    Unrestricted,
    MaximumFat(f64),
}

impl FatRule {
    pub fn keeps(&self, fat_g: f64) -> bool {
        match self {
            FatRule::MinimumFat(bound) => fat_g > *bound,
            FatRule::Unrestricted => true,
            FatRule::MaximumFat(bound) => fat_g < *bound,
        }
    }
}

/// Fat rule for a computed BMI. Underweight users are steered toward
/// fat-rich meals, overweight and obese users away from them.
pub fn fat_rule_for_bmi(bmi: f64) -> FatRule {
    if bmi < BMI_UNDERWEIGHT_MAX {
        FatRule::MinimumFat(UNDERWEIGHT_MIN_FAT_G)
    } else if bmi < BMI_NORMAL_MAX {
        FatRule::Unrestricted
    } else if bmi < BMI_OVERWEIGHT_MAX {
        FatRule::MaximumFat(OVERWEIGHT_MAX_FAT_G)
    } else {
        FatRule::MaximumFat(OBESE_MAX_FAT_G)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metric(weight_kg: f64, height_cm: f64) -> BodyMetrics {
        BodyMetrics {
            weight: weight_kg,
            weight_unit: WeightUnit::Kilograms,
            height: Height::Centimeters(height_cm),
        }
    }

    #[test]
    fn test_bmi_reference_value() {
        // 70 kg / 1.75 m² = 22.857... → 22.9
        let bmi = metric(70.0, 175.0).bmi().unwrap();
        assert_eq!(bmi, 22.9);
        assert_eq!(BmiCategory::from_bmi(bmi), BmiCategory::Normal);
    }

    #[test]
    fn test_bmi_imperial_units() {
        let metrics = BodyMetrics {
            weight: 154.0,
            weight_unit: WeightUnit::Pounds,
            height: Height::FeetInches {
                feet: 5.0,
                inches: 9.0,
            },
        };
        // 154 lbs ≈ 69.85 kg, 5'9" ≈ 1.7526 m → 22.7
        assert_eq!(metrics.bmi().unwrap(), 22.7);
    }

    #[test]
    fn test_bmi_monotonicity() {
        let base = metric(70.0, 175.0).bmi().unwrap();
        assert!(metric(80.0, 175.0).bmi().unwrap() > base);
        assert!(metric(70.0, 185.0).bmi().unwrap() < base);
    }

    #[test]
    fn test_zero_height_rejected_both_unit_paths() {
        let cm = metric(70.0, 0.0);
        assert!(matches!(cm.bmi(), Err(MealMatchError::InvalidHeight)));

        let imperial = BodyMetrics {
            weight: 70.0,
            weight_unit: WeightUnit::Kilograms,
            height: Height::FeetInches {
                feet: 0.0,
                inches: 0.0,
            },
        };
        assert!(matches!(imperial.bmi(), Err(MealMatchError::InvalidHeight)));
    }

    #[test]
    fn test_nan_height_rejected() {
        let metrics = metric(70.0, f64::NAN);
        assert!(matches!(metrics.bmi(), Err(MealMatchError::InvalidHeight)));
    }

    #[test]
    fn test_category_boundaries() {
        assert_eq!(BmiCategory::from_bmi(18.4), BmiCategory::Underweight);
        assert_eq!(BmiCategory::from_bmi(18.5), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(24.9), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(25.0), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(30.0), BmiCategory::ObeseI);
        assert_eq!(BmiCategory::from_bmi(35.0), BmiCategory::ObeseII);
        assert_eq!(BmiCategory::from_bmi(40.0), BmiCategory::ObeseIII);
    }

    #[test]
    fn test_fat_rule_brackets() {
        assert_eq!(
            fat_rule_for_bmi(17.0),
            FatRule::MinimumFat(UNDERWEIGHT_MIN_FAT_G)
        );
        assert_eq!(fat_rule_for_bmi(22.0), FatRule::Unrestricted);
        assert_eq!(
            fat_rule_for_bmi(27.0),
            FatRule::MaximumFat(OVERWEIGHT_MAX_FAT_G)
        );
        assert_eq!(fat_rule_for_bmi(32.0), FatRule::MaximumFat(OBESE_MAX_FAT_G));
    }

    #[test]
    fn test_fat_rule_strictness() {
        assert!(!fat_rule_for_bmi(17.0).keeps(200.0));
        assert!(fat_rule_for_bmi(17.0).keeps(200.1));
        assert!(!fat_rule_for_bmi(27.0).keeps(150.0));
        assert!(fat_rule_for_bmi(27.0).keeps(149.9));
        assert!(!fat_rule_for_bmi(32.0).keeps(100.0));
        assert!(fat_rule_for_bmi(32.0).keeps(99.9));
    }
}
