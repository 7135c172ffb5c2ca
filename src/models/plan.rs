use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::meal::{Meal, MealId};
use crate::models::profile::DietPreference;
use crate::models::targets::NutrientTargets;
use crate::planner::constants::{ON_TARGET_BAND, WARNING_BAND};

/// The seven fixed keys of a week plan, Monday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Position within the week (Monday = 0).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for Weekday {
    type Err = crate::error::PlannerError;

    fn from_str(s: &str) -> crate::error::Result<Self> {
        let lower = s.trim().to_lowercase();
        Weekday::ALL
            .into_iter()
            .find(|d| {
                let name = d.name().to_lowercase();
                name == lower || (lower.len() >= 3 && name.starts_with(&lower))
            })
            .ok_or_else(|| crate::error::PlannerError::InvalidInput(format!("unknown day '{}'", s)))
    }
}

/// Summed nutrition of a day's meals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct DayTotals {
    pub calories: u32,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fats_g: f64,
    pub fiber_g: f64,
}

impl DayTotals {
    /// Progress of each macro against its daily target.
    pub fn progress(&self, targets: &NutrientTargets) -> [MacroProgress; 3] {
        [
            MacroProgress::new("Protein", self.protein_g, targets.protein_g),
            MacroProgress::new("Carbs", self.carbs_g, targets.carbs_g),
            MacroProgress::new("Fats", self.fats_g, targets.fats_g),
        ]
    }
}

/// Current intake of one macro relative to its target, percent capped at 100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MacroProgress {
    pub label: &'static str,
    pub current: f64,
    pub target: u32,
    pub percent: f64,
}

impl MacroProgress {
    pub fn new(label: &'static str, current: f64, target: u32) -> Self {
        let percent = if target == 0 {
            0.0
        } else {
            (current / target as f64 * 100.0).min(100.0)
        };
        Self {
            label,
            current,
            target,
            percent,
        }
    }
}

/// Where a day's calories landed relative to the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CalorieStatus {
    /// Within ±5% of target.
    OnTarget,
    /// Within ±15% of target.
    Warning,
    /// More than 15% away from target.
    OffTarget,
}

impl CalorieStatus {
    pub fn classify(total: u32, target: u32) -> Self {
        if target == 0 {
            return if total == 0 {
                CalorieStatus::OnTarget
            } else {
                CalorieStatus::OffTarget
            };
        }

        let deviation = (total as f64 - target as f64).abs() / target as f64;
        if deviation <= ON_TARGET_BAND {
            CalorieStatus::OnTarget
        } else if deviation <= WARNING_BAND {
            CalorieStatus::Warning
        } else {
            CalorieStatus::OffTarget
        }
    }
}

impl fmt::Display for CalorieStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalorieStatus::OnTarget => write!(f, "on target"),
            CalorieStatus::Warning => write!(f, "warning"),
            CalorieStatus::OffTarget => write!(f, "off target"),
        }
    }
}

/// Ordered meals for a single day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    pub meals: Vec<Meal>,
}

impl DayPlan {
    pub fn new(meals: Vec<Meal>) -> Self {
        Self { meals }
    }

    pub fn totals(&self) -> DayTotals {
        self.meals.iter().fold(DayTotals::default(), |mut acc, meal| {
            acc.calories = acc.calories.saturating_add(meal.calories);
            acc.protein_g += meal.protein_g;
            acc.carbs_g += meal.carbs_g;
            acc.fats_g += meal.fats_g;
            acc.fiber_g += meal.fiber_g;
            acc
        })
    }

    pub fn total_calories(&self) -> u32 {
        self.meals
            .iter()
            .fold(0u32, |total, m| total.saturating_add(m.calories))
    }

    pub fn status(&self, target_calories: u32) -> CalorieStatus {
        CalorieStatus::classify(self.total_calories(), target_calories)
    }

    pub fn meal_ids(&self) -> HashSet<MealId> {
        self.meals.iter().map(|m| m.id).collect()
    }

    /// True when no meal id appears twice.
    pub fn is_duplicate_free(&self) -> bool {
        self.meal_ids().len() == self.meals.len()
    }

    pub fn len(&self) -> usize {
        self.meals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }
}

/// A generated week: one [`DayPlan`] per weekday plus the inputs that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekPlan {
    pub diet: DietPreference,
    pub target_calories: u32,
    days: [DayPlan; 7],
}

impl WeekPlan {
    pub fn new(diet: DietPreference, target_calories: u32, days: [DayPlan; 7]) -> Self {
        Self {
            diet,
            target_calories,
            days,
        }
    }

    pub fn day(&self, day: Weekday) -> &DayPlan {
        &self.days[day.index()]
    }

    pub fn day_mut(&mut self, day: Weekday) -> &mut DayPlan {
        &mut self.days[day.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &DayPlan)> {
        Weekday::ALL.into_iter().zip(self.days.iter())
    }

    pub fn meal_count(&self) -> usize {
        self.days.iter().map(DayPlan::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meal(id: MealId, calories: u32) -> Meal {
        Meal {
            id,
            name: format!("Meal {}", id),
            category: Default::default(),
            description: String::new(),
            calories,
            protein_g: 10.0,
            carbs_g: 20.0,
            fats_g: 5.0,
            fiber_g: 2.0,
            ingredients: vec![],
            tags: vec![],
            prep_time: String::new(),
            difficulty: String::new(),
            image: String::new(),
        }
    }

    #[test]
    fn test_totals() {
        let day = DayPlan::new(vec![meal(1, 400), meal(2, 600)]);
        let totals = day.totals();
        assert_eq!(totals.calories, 1000);
        assert!((totals.protein_g - 20.0).abs() < 1e-9);
        assert!((totals.fiber_g - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_totals_saturate_on_huge_calories() {
        let day = DayPlan::new(vec![meal(1, u32::MAX), meal(2, 500)]);
        assert_eq!(day.total_calories(), u32::MAX);
        assert_eq!(day.totals().calories, u32::MAX);
        assert_eq!(day.status(2000), CalorieStatus::OffTarget);
    }

    #[test]
    fn test_status_bands() {
        assert_eq!(CalorieStatus::classify(2000, 2000), CalorieStatus::OnTarget);
        assert_eq!(CalorieStatus::classify(1900, 2000), CalorieStatus::OnTarget);
        assert_eq!(CalorieStatus::classify(1800, 2000), CalorieStatus::Warning);
        assert_eq!(CalorieStatus::classify(2300, 2000), CalorieStatus::Warning);
        assert_eq!(CalorieStatus::classify(2400, 2000), CalorieStatus::OffTarget);
        assert_eq!(CalorieStatus::classify(0, 0), CalorieStatus::OnTarget);
    }

    #[test]
    fn test_macro_progress_caps_at_100() {
        let progress = MacroProgress::new("Protein", 250.0, 200);
        assert_eq!(progress.percent, 100.0);

        let progress = MacroProgress::new("Protein", 50.0, 200);
        assert!((progress.percent - 25.0).abs() < 1e-9);

        let progress = MacroProgress::new("Carbs", 50.0, 0);
        assert_eq!(progress.percent, 0.0);
    }

    #[test]
    fn test_duplicate_detection() {
        let day = DayPlan::new(vec![meal(1, 400), meal(1, 400)]);
        assert!(!day.is_duplicate_free());
        assert!(DayPlan::new(vec![meal(1, 400), meal(2, 300)]).is_duplicate_free());
    }

    #[test]
    fn test_weekday_parsing() {
        assert_eq!("monday".parse::<Weekday>().unwrap(), Weekday::Monday);
        assert_eq!("Wed".parse::<Weekday>().unwrap(), Weekday::Wednesday);
        assert!("xyz".parse::<Weekday>().is_err());
    }

    #[test]
    fn test_week_iter_order() {
        let week = WeekPlan::new(DietPreference::Balanced, 2000, Default::default());
        let days: Vec<Weekday> = week.iter().map(|(d, _)| d).collect();
        assert_eq!(days, Weekday::ALL.to_vec());
    }
}
