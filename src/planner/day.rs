use std::collections::HashSet;

use rand::Rng;

use crate::config::PlannerConfig;
use crate::models::{CalorieStatus, DayPlan, Meal, MealId};
use crate::planner::constants::MIN_MEALS_BEFORE_TRIM;
use crate::planner::selector::select_meal;

/// Build one day of meals aimed at `target_calories`.
///
/// 1. Seed meals sized at each `seed_fractions` share of the target
/// 2. Top up with meals sized at the remaining deficit while below
///    `lower_tolerance × target`, at most `max_attempts` times, stopping as
///    soon as the pool is exhausted
/// 3. If the day overshoots `trim_threshold × target` with more than three
///    meals, drop the last meal when it is under `trim_calorie_ceiling`
///
/// A day outside the tolerance band is returned as-is.
pub fn generate_day<R: Rng + ?Sized>(
    pool: &[&Meal],
    target_calories: u32,
    config: &PlannerConfig,
    rng: &mut R,
) -> DayPlan {
    let target = target_calories as f64;
    let mut day = DayPlan::default();
    let mut excluded: HashSet<MealId> = HashSet::new();

    for fraction in &config.seed_fractions {
        if let Some(meal) = select_meal(pool, target * fraction, &excluded, config.top_matches, rng)
        {
            excluded.insert(meal.id);
            day.meals.push(meal.clone());
        }
    }

    let lower_bound = target * config.lower_tolerance;
    let mut running = day.total_calories() as f64;
    let mut attempts = 0;

    while running < lower_bound && attempts < config.max_attempts {
        attempts += 1;

        let deficit = target - running;
        match select_meal(pool, deficit, &excluded, config.top_matches, rng) {
            Some(meal) => {
                excluded.insert(meal.id);
                day.meals.push(meal.clone());
                running = day.total_calories() as f64;
            }
            None => break,
        }
    }

    if running > target * config.trim_threshold
        && day.meals.len() > MIN_MEALS_BEFORE_TRIM
        && day
            .meals
            .last()
            .is_some_and(|m| m.calories < config.trim_calorie_ceiling)
    {
        if let Some(dropped) = day.meals.pop() {
            tracing::debug!(meal = %dropped.name, calories = dropped.calories, "trimmed trailing meal");
        }
    }

    let status = day.status(target_calories);
    tracing::debug!(
        meals = day.meals.len(),
        calories = day.total_calories(),
        target = target_calories,
        attempts,
        %status,
        "generated day plan"
    );
    if status != CalorieStatus::OnTarget {
        tracing::warn!(
            calories = day.total_calories(),
            target = target_calories,
            %status,
            "day plan outside the on-target band"
        );
    }

    day
}
