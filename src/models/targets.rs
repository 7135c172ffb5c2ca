use serde::{Deserialize, Serialize};

/// Share of daily calories assigned to each macronutrient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroRatios {
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

/// Daily intake targets derived from a profile and diet preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutrientTargets {
    pub calories: u32,
    pub water_ml: u32,
    pub protein_g: u32,
    pub carbs_g: u32,
    pub fats_g: u32,
}
