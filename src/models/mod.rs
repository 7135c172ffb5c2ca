pub mod meal;
pub mod plan;
pub mod profile;
pub mod targets;

pub use meal::{Meal, MealCategory, MealId};
pub use plan::{CalorieStatus, DayPlan, DayTotals, MacroProgress, WeekPlan, Weekday};
pub use profile::{ActivityLevel, DietPreference, Gender, Goal, Profile, ProfileRecord};
pub use targets::{MacroRatios, NutrientTargets};
