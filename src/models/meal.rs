use std::fmt;

use serde::{Deserialize, Serialize};

/// Catalog-wide meal identifier.
pub type MealId = u32;

/// Slot a meal was authored for in the catalog.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum MealCategory {
    #[default]
    Breakfast,
    Lunch,
    Dinner,
    Snacks,
}

impl fmt::Display for MealCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MealCategory::Breakfast => "Breakfast",
            MealCategory::Lunch => "Lunch",
            MealCategory::Dinner => "Dinner",
            MealCategory::Snacks => "Snacks",
        };
        write!(f, "{}", name)
    }
}

/// A catalog meal with its nutrition facts.
///
/// `category` is not stored per entry in catalog files; the loader fills it in
/// from the enclosing category key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub id: MealId,

    pub name: String,

    #[serde(default)]
    pub category: MealCategory,

    #[serde(default)]
    pub description: String,

    pub calories: u32,

    #[serde(rename = "protein")]
    pub protein_g: f64,

    #[serde(rename = "carbs")]
    pub carbs_g: f64,

    #[serde(rename = "fats")]
    pub fats_g: f64,

    #[serde(rename = "fiber", default)]
    pub fiber_g: f64,

    #[serde(default)]
    pub ingredients: Vec<String>,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub prep_time: String,

    #[serde(default)]
    pub difficulty: String,

    #[serde(default)]
    pub image: String,
}

impl Meal {
    /// Absolute calorie distance to a target.
    #[inline]
    pub fn calorie_distance(&self, target: f64) -> f64 {
        (self.calories as f64 - target).abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_catalog_entry() {
        let json = r#"{
            "id": 7, "name": "Oatmeal Bowl", "calories": 350,
            "protein": 12, "carbs": 55, "fats": 8, "fiber": 7,
            "ingredients": ["Rolled oats", "Banana"], "tags": ["Vegetarian"],
            "prep_time": "10 min"
        }"#;
        let meal: Meal = serde_json::from_str(json).unwrap();

        assert_eq!(meal.id, 7);
        assert_eq!(meal.calories, 350);
        assert_eq!(meal.ingredients.len(), 2);
        assert_eq!(meal.difficulty, "");
        assert_eq!(meal.category, MealCategory::Breakfast);
    }

    #[test]
    fn test_calorie_distance() {
        let meal: Meal = serde_json::from_str(
            r#"{"id": 1, "name": "Toast", "calories": 200, "protein": 5, "carbs": 30, "fats": 4}"#,
        )
        .unwrap();
        assert!((meal.calorie_distance(250.0) - 50.0).abs() < 1e-9);
        assert!((meal.calorie_distance(150.0) - 50.0).abs() < 1e-9);
    }
}
