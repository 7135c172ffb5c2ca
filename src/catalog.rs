use std::collections::{BTreeMap, HashSet};

use strsim::jaro_winkler;

use crate::error::{PlannerError, Result};
use crate::models::{DietPreference, Meal, MealCategory, MealId};

/// On-disk catalog layout: category → diet type → meals.
pub type CatalogData = BTreeMap<MealCategory, BTreeMap<DietPreference, Vec<Meal>>>;

/// Catalog shipped with the binary.
const BUILTIN_CATALOG: &str = include_str!("../data/meals.json");

/// Minimum Jaro-Winkler similarity for a fuzzy name match.
const FUZZY_MATCH_THRESHOLD: f64 = 0.7;

/// Immutable collection of candidate meals, each tagged with the diet it belongs to.
#[derive(Debug, Clone, Default)]
pub struct MealCatalog {
    entries: Vec<(DietPreference, Meal)>,
}

impl MealCatalog {
    /// Build a catalog from the nested category/diet layout.
    ///
    /// Each meal's `category` is taken from its enclosing key. Meal ids must be
    /// unique across the whole catalog.
    pub fn from_data(data: CatalogData) -> Result<Self> {
        let mut seen: HashSet<MealId> = HashSet::new();
        let mut entries = Vec::new();

        for (category, diets) in data {
            for (diet, meals) in diets {
                for mut meal in meals {
                    if !seen.insert(meal.id) {
                        return Err(PlannerError::InvalidCatalog(format!(
                            "duplicate meal id {} ({})",
                            meal.id, meal.name
                        )));
                    }
                    meal.category = category;
                    entries.push((diet, meal));
                }
            }
        }

        Ok(Self { entries })
    }

    /// Parse a catalog from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        let data: CatalogData = serde_json::from_str(json)?;
        Self::from_data(data)
    }

    /// The built-in catalog.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// All meals for a diet, in category order. Empty when the diet has none.
    pub fn meals_for(&self, diet: DietPreference) -> Vec<&Meal> {
        self.entries
            .iter()
            .filter(|(d, _)| *d == diet)
            .map(|(_, m)| m)
            .collect()
    }

    /// Look up a meal by id.
    pub fn get(&self, id: MealId) -> Option<&Meal> {
        self.entries.iter().map(|(_, m)| m).find(|m| m.id == id)
    }

    /// Find meals by name.
    ///
    /// A case-insensitive exact match wins outright; otherwise returns fuzzy
    /// matches best first.
    pub fn search(&self, query: &str) -> Vec<(&Meal, f64)> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }

        if let Some(meal) = self.iter().find(|m| m.name.to_lowercase() == query) {
            return vec![(meal, 1.0)];
        }

        let mut candidates: Vec<(&Meal, f64)> = self
            .iter()
            .map(|m| (m, jaro_winkler(&m.name.to_lowercase(), &query)))
            .filter(|(_, score)| *score > FUZZY_MATCH_THRESHOLD)
            .collect();

        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        candidates
    }

    pub fn iter(&self) -> impl Iterator<Item = &Meal> {
        self.entries.iter().map(|(_, m)| m)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
