use crate::error::{PlannerError, Result};
use crate::models::{ActivityLevel, DietPreference, NutrientTargets, Profile};
use crate::planner::constants::*;

/// Basal metabolic rate via the Mifflin-St Jeor equation.
///
/// `10·weight + 6.25·height − 5·age + c`, with `c = +5` for men and `−161` for women.
pub fn basal_metabolic_rate(profile: &Profile) -> f64 {
    BMR_WEIGHT_COEF * profile.weight_kg + BMR_HEIGHT_COEF * profile.height_cm
        - BMR_AGE_COEF * f64::from(profile.age)
        + gender_constant(profile.gender)
}

/// Total daily energy expenditure: BMR scaled by the activity multiplier.
pub fn total_daily_energy_expenditure(bmr: f64, level: ActivityLevel) -> f64 {
    bmr * activity_multiplier(level)
}

/// Daily water target in millilitres.
pub fn water_target_ml(weight_kg: f64) -> u32 {
    (weight_kg * WATER_LITRES_PER_KG * 1000.0).round() as u32
}

/// Gram targets for each macro given a rounded calorie target.
pub fn macro_grams(calories: u32, diet: DietPreference) -> (u32, u32, u32) {
    let ratios = macro_ratios(diet);
    let kcal = calories as f64;
    (
        (kcal * ratios.protein / KCAL_PER_G_PROTEIN).round() as u32,
        (kcal * ratios.carbs / KCAL_PER_G_CARBS).round() as u32,
        (kcal * ratios.fats / KCAL_PER_G_FAT).round() as u32,
    )
}

/// Compute calorie, water, and macro targets for a profile.
///
/// The calorie target is rounded before the macro split is derived from it.
///
/// # Errors
///
/// Returns [`PlannerError::Validation`] for non-positive measurements or when
/// the goal adjustment leaves no positive calorie target.
pub fn compute_targets(profile: &Profile, diet: DietPreference) -> Result<NutrientTargets> {
    profile.validate()?;

    let bmr = basal_metabolic_rate(profile);
    let tdee = total_daily_energy_expenditure(bmr, profile.activity_level);
    let intake = (tdee + goal_offset(profile.goal)).round();

    if intake <= 0.0 {
        return Err(PlannerError::Validation(format!(
            "profile yields a non-positive calorie target ({:.0} kcal)",
            intake
        )));
    }

    let calories = intake as u32;
    let (protein_g, carbs_g, fats_g) = macro_grams(calories, diet);

    tracing::debug!(bmr, tdee, calories, %diet, "computed nutrient targets");

    Ok(NutrientTargets {
        calories,
        water_ml: water_target_ml(profile.weight_kg),
        protein_g,
        carbs_g,
        fats_g,
    })
}
