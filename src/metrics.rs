// ABOUTME: Health metric calculations using standard nutrition formulas
// ABOUTME: BMI, BMR (Mifflin-St Jeor and Harris-Benedict), TDEE, IBW, and calorie deficit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Metric Calculator Module
//!
//! Pure functions deriving health metrics from biometric inputs. The
//! coefficients are domain-standard nutrition equation constants, not
//! tunable parameters, and are reproduced exactly.
//!
//! Gender handling is deliberately asymmetric: BMR treats any string other
//! than `"male"` as female (a two-way fallback kept for compatibility with
//! existing callers), while IBW rejects anything but `"male"`/`"female"`.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! - Harris, J.A., & Benedict, F.G. (1918). A biometric study of human basal metabolism.
//!   *Proceedings of the National Academy of Sciences*, 4(12), 370-373.
//!   <https://doi.org/10.1073/pnas.4.12.370>
//!
//! - Devine, B.J. (1974). Gentamicin therapy.
//!   *Drug Intelligence & Clinical Pharmacy*, 8(11), 650-655.
//!
//! - Wishnofsky, M. (1958). Caloric equivalents of gained or lost weight.
//!   *American Journal of Clinical Nutrition*, 6(5), 542-546.
//!   <https://doi.org/10.1093/ajcn/6.5.542>

use crate::errors::{AppError, AppResult};

/// Energy density of one kilogram of body fat (kcal)
const CALORIES_PER_KG_FAT: f64 = 7700.0;

/// BMR equation selector
///
/// Selection by name is lenient: only `"mifflin_st_jeor"` (case-insensitive)
/// selects Mifflin-St Jeor, and every other name falls back to
/// Harris-Benedict. The fallback is part of the documented contract.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BmrEquation {
    /// Mifflin-St Jeor (1990), the modern default
    #[default]
    MifflinStJeor,
    /// Revised Harris-Benedict (1984 coefficients)
    HarrisBenedict,
}

impl BmrEquation {
    /// Resolve an equation selector from its configured name
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        if name.eq_ignore_ascii_case("mifflin_st_jeor") {
            Self::MifflinStJeor
        } else {
            Self::HarrisBenedict
        }
    }

    /// Canonical name of this equation
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::MifflinStJeor => "mifflin_st_jeor",
            Self::HarrisBenedict => "harris_benedict",
        }
    }
}

/// Self-reported activity level, keyed by the numeric code the user enters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    LightlyActive,
    /// Moderate exercise 3-5 days/week
    ModeratelyActive,
    /// Hard exercise 6-7 days/week
    VeryActive,
    /// Very hard exercise and a physical job
    SuperActive,
}

impl ActivityLevel {
    /// All levels in menu order
    pub const ALL: [Self; 5] = [
        Self::Sedentary,
        Self::LightlyActive,
        Self::ModeratelyActive,
        Self::VeryActive,
        Self::SuperActive,
    ];

    /// Menu code for this activity level ("1" through "5")
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Sedentary => "1",
            Self::LightlyActive => "2",
            Self::ModeratelyActive => "3",
            Self::VeryActive => "4",
            Self::SuperActive => "5",
        }
    }

    /// Resolve an activity level from its menu code ("1" through "5")
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "1" => Some(Self::Sedentary),
            "2" => Some(Self::LightlyActive),
            "3" => Some(Self::ModeratelyActive),
            "4" => Some(Self::VeryActive),
            "5" => Some(Self::SuperActive),
            _ => None,
        }
    }

    /// TDEE multiplier for this activity level
    #[must_use]
    pub const fn factor(&self) -> f64 {
        match self {
            Self::Sedentary => 1.2,
            Self::LightlyActive => 1.375,
            Self::ModeratelyActive => 1.55,
            Self::VeryActive => 1.725,
            Self::SuperActive => 1.9,
        }
    }

    /// Human-readable label used in the activity menu
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Sedentary => "Sedentary",
            Self::LightlyActive => "Lightly Active",
            Self::ModeratelyActive => "Moderately Active",
            Self::VeryActive => "Very Active",
            Self::SuperActive => "Super Active",
        }
    }
}

/// Calculate Body Mass Index (BMI)
///
/// Formula: BMI = weight (kg) / height (m)^2, rounded to 2 decimal places.
///
/// # Arguments
/// * `weight_kg` - Body weight in kilograms
/// * `height_cm` - Height in centimeters
///
/// # Errors
///
/// Returns an error if height is not positive.
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> AppResult<f64> {
    if height_cm <= 0.0 {
        return Err(AppError::invalid_input("Height must be greater than 0"));
    }

    let height_m = height_cm / 100.0;
    let bmi = weight_kg / (height_m * height_m);
    Ok((bmi * 100.0).round() / 100.0)
}

/// Calculate Basal Metabolic Rate (BMR) with the default Mifflin-St Jeor equation
///
/// Any gender string other than `"male"` (case-insensitive) uses the female
/// coefficients; see [`calculate_bmr_with_equation`].
///
/// # Reference
/// Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
#[must_use]
pub fn calculate_bmr(weight_kg: f64, height_cm: f64, age: u32, gender: &str) -> f64 {
    calculate_bmr_with_equation(weight_kg, height_cm, age, gender, BmrEquation::default())
}

/// Calculate Basal Metabolic Rate (BMR) with an explicit equation
///
/// Mifflin-St Jeor:
/// - male: `10*w + 6.25*h - 5*a + 5`
/// - female: `10*w + 6.25*h - 5*a - 161`
///
/// Harris-Benedict:
/// - male: `88.362 + 13.397*w + 4.799*h - 5.677*a`
/// - female: `447.593 + 9.247*w + 3.098*h - 4.330*a`
///
/// The gender comparison is a case-insensitive match against `"male"`; any
/// other value takes the female branch. This two-way fallback is kept for
/// compatibility and is intentionally looser than [`calculate_ibw`].
///
/// # Arguments
/// * `weight_kg` - Body weight in kilograms
/// * `height_cm` - Height in centimeters
/// * `age` - Age in years
/// * `gender` - Gender string, matched against `"male"`
/// * `equation` - Equation selector
///
/// # Reference
/// Mifflin et al. (1990); Harris & Benedict (1918), revised coefficients
#[must_use]
pub fn calculate_bmr_with_equation(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    gender: &str,
    equation: BmrEquation,
) -> f64 {
    let is_male = gender.eq_ignore_ascii_case("male");
    let age = f64::from(age);

    match equation {
        BmrEquation::MifflinStJeor => {
            let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age;
            if is_male {
                base + 5.0
            } else {
                base - 161.0
            }
        }
        BmrEquation::HarrisBenedict => {
            if is_male {
                88.362 + 13.397 * weight_kg + 4.799 * height_cm - 5.677 * age
            } else {
                447.593 + 9.247 * weight_kg + 3.098 * height_cm - 4.330 * age
            }
        }
    }
}

/// Calculate Total Daily Energy Expenditure (TDEE)
///
/// Formula: TDEE = BMR x activity factor, with factors keyed by the menu
/// code: 1 -> 1.2, 2 -> 1.375, 3 -> 1.55, 4 -> 1.725, 5 -> 1.9.
///
/// An unrecognized code multiplies by 1.0, passing the BMR through
/// unscaled. Callers relying on the scaled value should validate the code
/// up front; the pass-through is preserved for compatibility.
///
/// # Arguments
/// * `bmr` - Basal Metabolic Rate (kcal/day)
/// * `activity_level_code` - Menu code as entered by the user
#[must_use]
pub fn calculate_tdee(bmr: f64, activity_level_code: &str) -> f64 {
    let factor = ActivityLevel::from_code(activity_level_code)
        .map_or(1.0, |level| level.factor());
    bmr * factor
}

/// Calculate Ideal Body Weight (IBW) with the Devine formula
///
/// - male: `height <= 60 ? 50 : 50 + 2.3 * (height - 60)`
/// - female: `height <= 60 ? 45.5 : 45.5 + 2.3 * (height - 60)`
///
/// The 60 threshold is the five-foot mark of the original inches-based
/// formula; the height value is used as passed, without unit conversion.
///
/// # Arguments
/// * `height` - Height value (the formula's 60 threshold assumes inches)
/// * `gender` - Gender string, `"male"` or `"female"` (case-insensitive)
///
/// # Reference
/// Devine (1974), Drug Intelligence & Clinical Pharmacy 8(11)
///
/// # Errors
///
/// Returns an error for any gender string other than `"male"` or
/// `"female"`. Unlike BMR, there is no fallback branch here.
pub fn calculate_ibw(height: f64, gender: &str) -> AppResult<f64> {
    let base = match gender.to_lowercase().as_str() {
        "male" => 50.0,
        "female" => 45.5,
        _ => {
            return Err(AppError::invalid_gender(
                "Invalid gender. Expected 'male' or 'female'.",
            ))
        }
    };

    if height <= 60.0 {
        Ok(base)
    } else {
        Ok(base + 2.3 * (height - 60.0))
    }
}

/// Calculate the calorie total equivalent to a desired fat-mass loss
///
/// Formula: `desired_loss_kg * 7700`, using the conventional energy density
/// of body fat.
///
/// # Reference
/// Wishnofsky (1958) DOI: 10.1093/ajcn/6.5.542
#[must_use]
pub fn calculate_calories_to_lose_weight(desired_loss_kg: f64) -> f64 {
    desired_loss_kg * CALORIES_PER_KG_FAT
}

/// Metrics derived from one set of biometric inputs
///
/// Computed fresh per request and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedMetrics {
    /// Body Mass Index, rounded to 2 decimal places
    pub bmi: f64,
    /// Basal Metabolic Rate in kcal/day
    pub bmr: f64,
    /// Total Daily Energy Expenditure in kcal/day
    pub tdee: f64,
}

impl DerivedMetrics {
    /// Compute BMI, BMR, and TDEE in one pass
    ///
    /// The activity level code is passed through [`calculate_tdee`], so an
    /// unrecognized code leaves the TDEE equal to the BMR.
    ///
    /// # Errors
    ///
    /// Returns an error if the height is not positive.
    pub fn compute(
        weight_kg: f64,
        height_cm: f64,
        age_years: u32,
        gender: &str,
        activity_level: &str,
        equation: BmrEquation,
    ) -> AppResult<Self> {
        let bmi = calculate_bmi(weight_kg, height_cm)?;
        let bmr = calculate_bmr_with_equation(weight_kg, height_cm, age_years, gender, equation);
        let tdee = calculate_tdee(bmr, activity_level);
        Ok(Self { bmi, bmr, tdee })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmi_rounds_to_nearest_hundredth() {
        // 68 / 1.65^2 = 24.9770..., rounds up to 24.98
        assert!((calculate_bmi(68.0, 165.0).unwrap() - 24.98).abs() < f64::EPSILON);
        // 80 / 1.80^2 = 24.6913..., rounds down to 24.69
        assert!((calculate_bmi(80.0, 180.0).unwrap() - 24.69).abs() < f64::EPSILON);
    }

    #[test]
    fn test_bmi_error_mentions_height() {
        let error = calculate_bmi(70.0, 0.0).unwrap_err();
        assert!(error.message.contains("Height"));
    }

    #[test]
    fn test_equation_names_round_trip() {
        for equation in [BmrEquation::MifflinStJeor, BmrEquation::HarrisBenedict] {
            assert_eq!(BmrEquation::from_name(equation.name()), equation);
        }
    }
}
