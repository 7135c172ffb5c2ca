use rand::Rng;

use crate::catalog::MealCatalog;
use crate::config::PlannerConfig;
use crate::error::{PlannerError, Result};
use crate::models::{DayPlan, DietPreference, Meal, NutrientTargets, WeekPlan, Weekday};
use crate::planner::day::generate_day;
use crate::planner::selector::{pick_random_meal, select_meal};

/// Generate a full week, one independent day plan per weekday.
pub fn generate_week<R: Rng + ?Sized>(
    catalog: &MealCatalog,
    targets: &NutrientTargets,
    diet: DietPreference,
    config: &PlannerConfig,
    rng: &mut R,
) -> WeekPlan {
    let pool = catalog.meals_for(diet);
    if pool.is_empty() {
        tracing::warn!(%diet, "catalog has no meals for this diet");
    }

    let days: [DayPlan; 7] =
        std::array::from_fn(|_| generate_day(&pool, targets.calories, config, rng));

    let week = WeekPlan::new(diet, targets.calories, days);
    tracing::info!(
        %diet,
        target = targets.calories,
        meals = week.meal_count(),
        "generated week plan"
    );
    week
}

/// Replace the meal at `index` on `day` with a different meal of similar calories.
///
/// Every meal currently on that day, including the one being replaced, is
/// excluded from the draw. The plan is left untouched on error.
pub fn swap_meal<R: Rng + ?Sized>(
    catalog: &MealCatalog,
    plan: &mut WeekPlan,
    day: Weekday,
    index: usize,
    config: &PlannerConfig,
    rng: &mut R,
) -> Result<Meal> {
    let pool = catalog.meals_for(plan.diet);
    let day_plan = plan.day_mut(day);

    let current = day_plan
        .meals
        .get(index)
        .ok_or(PlannerError::MealIndexOutOfRange {
            day,
            index,
            len: day_plan.meals.len(),
        })?;
    let target = current.calories as f64;

    let replacement = select_meal(&pool, target, &day_plan.meal_ids(), config.top_matches, rng)
        .ok_or(PlannerError::NoReplacementFound { day, index })?
        .clone();

    let previous = std::mem::replace(&mut day_plan.meals[index], replacement);
    tracing::debug!(%day, index, from = %previous.name, to = %day_plan.meals[index].name, "swapped meal");
    Ok(previous)
}

/// Append a random meal not yet planned on `day`.
pub fn add_meal<R: Rng + ?Sized>(
    catalog: &MealCatalog,
    plan: &mut WeekPlan,
    day: Weekday,
    rng: &mut R,
) -> Result<()> {
    let pool = catalog.meals_for(plan.diet);
    let day_plan = plan.day_mut(day);

    let meal = pick_random_meal(&pool, &day_plan.meal_ids(), rng)
        .ok_or(PlannerError::AllMealsUsed(day))?
        .clone();

    tracing::debug!(%day, meal = %meal.name, "added meal");
    day_plan.meals.push(meal);
    Ok(())
}

/// Remove the meal at `index` on `day`.
///
/// Removing the last remaining meal is allowed.
pub fn remove_meal(plan: &mut WeekPlan, day: Weekday, index: usize) -> Result<Meal> {
    let day_plan = plan.day_mut(day);
    if index >= day_plan.meals.len() {
        return Err(PlannerError::MealIndexOutOfRange {
            day,
            index,
            len: day_plan.meals.len(),
        });
    }

    let removed = day_plan.meals.remove(index);
    tracing::debug!(%day, index, meal = %removed.name, "removed meal");
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const CATALOG: &str = r#"{
        "lunch": {
            "Balanced": [
                {"id": 1, "name": "A", "calories": 400, "protein": 20, "carbs": 40, "fats": 10},
                {"id": 2, "name": "B", "calories": 420, "protein": 20, "carbs": 40, "fats": 10},
                {"id": 3, "name": "C", "calories": 800, "protein": 20, "carbs": 40, "fats": 10}
            ]
        }
    }"#;

    fn targets(calories: u32) -> NutrientTargets {
        NutrientTargets {
            calories,
            water_ml: 2000,
            protein_g: 100,
            carbs_g: 200,
            fats_g: 60,
        }
    }

    fn plan_with(catalog: &MealCatalog, ids: &[u32]) -> WeekPlan {
        let mut plan = WeekPlan::new(DietPreference::Balanced, 1600, Default::default());
        for id in ids {
            plan.day_mut(Weekday::Monday)
                .meals
                .push(catalog.get(*id).unwrap().clone());
        }
        plan
    }

    #[test]
    fn test_generate_week_fills_every_day() {
        let catalog = MealCatalog::from_json(CATALOG).unwrap();
        let mut rng = StdRng::seed_from_u64(1);

        let week = generate_week(
            &catalog,
            &targets(1600),
            DietPreference::Balanced,
            &PlannerConfig::default(),
            &mut rng,
        );

        for (_, day) in week.iter() {
            assert_eq!(day.len(), 3);
            assert!(day.is_duplicate_free());
        }
        assert_eq!(week.target_calories, 1600);
    }

    #[test]
    fn test_swap_picks_a_different_meal() {
        let catalog = MealCatalog::from_json(CATALOG).unwrap();
        let mut plan = plan_with(&catalog, &[1]);
        let mut rng = StdRng::seed_from_u64(3);

        let previous =
            swap_meal(&catalog, &mut plan, Weekday::Monday, 0, &PlannerConfig::default(), &mut rng)
                .unwrap();

        assert_eq!(previous.id, 1);
        assert_ne!(plan.day(Weekday::Monday).meals[0].id, 1);
    }

    #[test]
    fn test_swap_without_candidates_leaves_day_unchanged() {
        let catalog = MealCatalog::from_json(CATALOG).unwrap();
        let mut plan = plan_with(&catalog, &[1, 2, 3]);
        let before = plan.clone();
        let mut rng = StdRng::seed_from_u64(3);

        let result =
            swap_meal(&catalog, &mut plan, Weekday::Monday, 1, &PlannerConfig::default(), &mut rng);

        assert!(matches!(
            result,
            Err(PlannerError::NoReplacementFound {
                day: Weekday::Monday,
                index: 1
            })
        ));
        assert_eq!(plan, before);
    }

    #[test]
    fn test_swap_index_out_of_range() {
        let catalog = MealCatalog::from_json(CATALOG).unwrap();
        let mut plan = plan_with(&catalog, &[1]);
        let mut rng = StdRng::seed_from_u64(3);

        let result =
            swap_meal(&catalog, &mut plan, Weekday::Monday, 4, &PlannerConfig::default(), &mut rng);
        assert!(matches!(result, Err(PlannerError::MealIndexOutOfRange { .. })));
    }

    #[test]
    fn test_add_meal_appends_unused_meal() {
        let catalog = MealCatalog::from_json(CATALOG).unwrap();
        let mut plan = plan_with(&catalog, &[1, 2]);
        let mut rng = StdRng::seed_from_u64(5);

        add_meal(&catalog, &mut plan, Weekday::Monday, &mut rng).unwrap();

        let day = plan.day(Weekday::Monday);
        assert_eq!(day.len(), 3);
        assert_eq!(day.meals[2].id, 3);
    }

    #[test]
    fn test_add_meal_when_all_used() {
        let catalog = MealCatalog::from_json(CATALOG).unwrap();
        let mut plan = plan_with(&catalog, &[1, 2, 3]);
        let before = plan.clone();
        let mut rng = StdRng::seed_from_u64(5);

        let result = add_meal(&catalog, &mut plan, Weekday::Monday, &mut rng);
        assert!(matches!(result, Err(PlannerError::AllMealsUsed(Weekday::Monday))));
        assert_eq!(plan, before);
    }

    #[test]
    fn test_remove_down_to_zero() {
        let catalog = MealCatalog::from_json(CATALOG).unwrap();
        let mut plan = plan_with(&catalog, &[1, 2]);

        assert_eq!(remove_meal(&mut plan, Weekday::Monday, 1).unwrap().id, 2);
        assert_eq!(remove_meal(&mut plan, Weekday::Monday, 0).unwrap().id, 1);
        assert!(plan.day(Weekday::Monday).is_empty());
        assert!(remove_meal(&mut plan, Weekday::Monday, 0).is_err());
    }

    #[test]
    fn test_mutations_only_touch_named_day() {
        let catalog = MealCatalog::from_json(CATALOG).unwrap();
        let mut plan = plan_with(&catalog, &[1]);
        let mut rng = StdRng::seed_from_u64(5);

        add_meal(&catalog, &mut plan, Weekday::Friday, &mut rng).unwrap();

        assert_eq!(plan.day(Weekday::Monday).len(), 1);
        assert_eq!(plan.day(Weekday::Friday).len(), 1);
        assert!(plan.day(Weekday::Tuesday).is_empty());
    }
}
