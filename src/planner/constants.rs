use crate::models::{ActivityLevel, DietPreference, Gender, Goal, MacroRatios};

/// Mifflin-St Jeor coefficients.
pub const BMR_WEIGHT_COEF: f64 = 10.0;
pub const BMR_HEIGHT_COEF: f64 = 6.25;
pub const BMR_AGE_COEF: f64 = 5.0;
pub const BMR_MALE_CONSTANT: f64 = 5.0;
pub const BMR_FEMALE_CONSTANT: f64 = -161.0;

/// Calorie offset applied for a lose/gain goal.
pub const GOAL_CALORIE_OFFSET: f64 = 500.0;

/// Litres of water per kilogram of body weight.
pub const WATER_LITRES_PER_KG: f64 = 0.035;

/// Energy per gram of each macronutrient.
pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
pub const KCAL_PER_G_CARBS: f64 = 4.0;
pub const KCAL_PER_G_FAT: f64 = 9.0;

// ─────────────────────────────────────────────────────────────────────────────
// Day generation
// ─────────────────────────────────────────────────────────────────────────────

/// Fractions of the daily target used to size the three seed meals.
pub const SEED_MEAL_FRACTIONS: [f64; 3] = [0.25, 0.35, 0.35];

/// Keep adding meals while below this fraction of the target.
pub const LOWER_TOLERANCE: f64 = 0.95;

/// Above this fraction of the target a small trailing meal gets dropped.
pub const TRIM_THRESHOLD: f64 = 1.15;

/// Only a trailing meal under this many calories is eligible for the trim.
pub const TRIM_CALORIE_CEILING: u32 = 300;

/// Meal count the day must exceed before the trim applies.
pub const MIN_MEALS_BEFORE_TRIM: usize = 3;

/// Top-up iterations allowed per day.
pub const MAX_ATTEMPTS: usize = 20;

/// Number of closest candidates the selector draws from.
pub const TOP_MATCHES: usize = 3;

// ─────────────────────────────────────────────────────────────────────────────
// Reporting bands
// ─────────────────────────────────────────────────────────────────────────────

/// Relative deviation still counted as on target.
pub const ON_TARGET_BAND: f64 = 0.05;

/// Relative deviation that triggers a warning rather than a miss.
pub const WARNING_BAND: f64 = 0.15;

/// TDEE multiplier for an activity level.
pub fn activity_multiplier(level: ActivityLevel) -> f64 {
    match level {
        ActivityLevel::Sedentary => 1.2,
        ActivityLevel::Light => 1.375,
        ActivityLevel::Moderate => 1.55,
        ActivityLevel::Active => 1.725,
        ActivityLevel::VeryActive => 1.9,
    }
}

/// Constant term of the Mifflin-St Jeor equation.
pub fn gender_constant(gender: Gender) -> f64 {
    match gender {
        Gender::Male => BMR_MALE_CONSTANT,
        Gender::Female => BMR_FEMALE_CONSTANT,
    }
}

/// Calorie adjustment for a goal.
pub fn goal_offset(goal: Goal) -> f64 {
    match goal {
        Goal::Maintain => 0.0,
        Goal::Lose => -GOAL_CALORIE_OFFSET,
        Goal::Gain => GOAL_CALORIE_OFFSET,
    }
}

/// Macro split for a diet. Vegan and Mediterranean share the balanced split.
pub fn macro_ratios(diet: DietPreference) -> MacroRatios {
    match diet {
        DietPreference::HighProtein => MacroRatios {
            protein: 0.35,
            carbs: 0.40,
            fats: 0.25,
        },
        DietPreference::Keto => MacroRatios {
            protein: 0.25,
            carbs: 0.05,
            fats: 0.70,
        },
        DietPreference::Balanced | DietPreference::Vegan | DietPreference::Mediterranean => {
            MacroRatios {
                protein: 0.30,
                carbs: 0.40,
                fats: 0.30,
            }
        }
    }
}
