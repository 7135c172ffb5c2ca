pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod evaluation;
pub mod interface;
pub mod logging;
pub mod models;
pub mod planner;
pub mod state;

pub use catalog::MealCatalog;
pub use config::{AppConfig, PlannerConfig};
pub use error::{PlannerError, Result};
pub use models::{DayPlan, DietPreference, Meal, NutrientTargets, Profile, WeekPlan, Weekday};
