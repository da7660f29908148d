//! BMI calculation and classification.

use crate::BmiCategory;

/// Compute BMI from weight in kg and height in cm, and classify it.
///
/// Pure function; the caller guarantees both inputs are positive.
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> (f64, BmiCategory) {
    let height_m = height_cm / 100.0;
    let bmi = weight_kg / (height_m * height_m);
    (bmi, categorize(bmi))
}

/// Classify a BMI value into its band.
///
/// Boundaries are closed as published: 18.5 and 24.9 are Normal, 25.0 and
/// 29.9 are Overweight, anything above falls into Obesity.
pub fn categorize(bmi: f64) -> BmiCategory {
    if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi <= 24.9 {
        BmiCategory::Normal
    } else if bmi <= 29.9 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}
