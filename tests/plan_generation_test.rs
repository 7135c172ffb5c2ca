use std::collections::BTreeSet;

use rand::SeedableRng;
use rand::rngs::StdRng;

use meal_planner_rs::catalog::MealCatalog;
use meal_planner_rs::config::PlannerConfig;
use meal_planner_rs::error::PlannerError;
use meal_planner_rs::models::{
    ActivityLevel, DietPreference, Gender, Goal, MealId, NutrientTargets, Profile, WeekPlan,
    Weekday,
};
use meal_planner_rs::planner::{
    add_meal, build_grocery_list, compute_targets, generate_week, remove_meal, swap_meal,
};

fn targets(diet: DietPreference) -> NutrientTargets {
    let profile = Profile {
        weight_kg: 70.0,
        height_cm: 175.0,
        age: 25,
        gender: Gender::Male,
        activity_level: ActivityLevel::Moderate,
        goal: Goal::Maintain,
    };
    compute_targets(&profile, diet).unwrap()
}

fn week(catalog: &MealCatalog, diet: DietPreference, seed: u64) -> WeekPlan {
    let mut rng = StdRng::seed_from_u64(seed);
    generate_week(
        catalog,
        &targets(diet),
        diet,
        &PlannerConfig::default(),
        &mut rng,
    )
}

#[test]
fn test_days_are_duplicate_free_for_every_diet() {
    let catalog = MealCatalog::builtin().unwrap();

    for diet in DietPreference::ALL {
        for seed in 0..5 {
            let plan = week(&catalog, diet, seed);
            for (day, day_plan) in plan.iter() {
                assert!(day_plan.is_duplicate_free(), "{} {} seed {}", diet, day, seed);
                assert!(!day_plan.is_empty());
            }
        }
    }
}

#[test]
fn test_meals_come_from_the_diet_pool() {
    let catalog = MealCatalog::builtin().unwrap();
    let pool: BTreeSet<MealId> = catalog
        .meals_for(DietPreference::Keto)
        .iter()
        .map(|m| m.id)
        .collect();

    let plan = week(&catalog, DietPreference::Keto, 17);
    for (_, day_plan) in plan.iter() {
        assert!(day_plan.meals.iter().all(|m| pool.contains(&m.id)));
    }
}

#[test]
fn test_same_seed_same_week() {
    let catalog = MealCatalog::builtin().unwrap();
    let a = week(&catalog, DietPreference::Mediterranean, 99);
    let b = week(&catalog, DietPreference::Mediterranean, 99);
    assert_eq!(a, b);
}

#[test]
fn test_swap_never_reuses_a_meal_from_the_day() {
    let catalog = MealCatalog::builtin().unwrap();
    let mut plan = week(&catalog, DietPreference::Balanced, 3);
    let mut rng = StdRng::seed_from_u64(30);

    for day in Weekday::ALL {
        let before = plan.day(day).meal_ids();
        let len = plan.day(day).len();

        let previous = swap_meal(
            &catalog,
            &mut plan,
            day,
            0,
            &PlannerConfig::default(),
            &mut rng,
        )
        .unwrap();

        let after = plan.day(day);
        assert_eq!(after.len(), len);
        assert!(!before.contains(&after.meals[0].id));
        assert!(before.contains(&previous.id));
        assert!(after.is_duplicate_free());
    }
}

#[test]
fn test_add_until_exhausted_then_all_meals_used() {
    let catalog = MealCatalog::builtin().unwrap();
    let pool_size = catalog.meals_for(DietPreference::Vegan).len();
    let mut plan = week(&catalog, DietPreference::Vegan, 8);
    let mut rng = StdRng::seed_from_u64(80);

    while plan.day(Weekday::Thursday).len() < pool_size {
        add_meal(&catalog, &mut plan, Weekday::Thursday, &mut rng).unwrap();
    }
    assert!(plan.day(Weekday::Thursday).is_duplicate_free());

    let before = plan.clone();
    let result = add_meal(&catalog, &mut plan, Weekday::Thursday, &mut rng);
    assert!(matches!(result, Err(PlannerError::AllMealsUsed(Weekday::Thursday))));
    assert_eq!(plan, before);
}

#[test]
fn test_remove_meal_shrinks_only_that_day() {
    let catalog = MealCatalog::builtin().unwrap();
    let mut plan = week(&catalog, DietPreference::HighProtein, 5);
    let before = plan.clone();
    let first = plan.day(Weekday::Saturday).meals[0].clone();

    let removed = remove_meal(&mut plan, Weekday::Saturday, 0).unwrap();

    assert_eq!(removed, first);
    assert_eq!(
        plan.day(Weekday::Saturday).len(),
        before.day(Weekday::Saturday).len() - 1
    );
    assert_eq!(plan.day(Weekday::Sunday), before.day(Weekday::Sunday));
    assert!(matches!(
        remove_meal(&mut plan, Weekday::Saturday, 99),
        Err(PlannerError::MealIndexOutOfRange { .. })
    ));
}

#[test]
fn test_two_meal_pool_yields_two_meal_days() {
    let catalog = MealCatalog::from_json(
        r#"{"lunch": {"Balanced": [
            {"id": 1, "name": "Bowl", "calories": 600, "protein": 30, "carbs": 60, "fats": 20,
             "ingredients": ["Rice", "Tofu"]},
            {"id": 2, "name": "Wrap", "calories": 500, "protein": 25, "carbs": 50, "fats": 18,
             "ingredients": ["Tortilla", "Tofu"]}
        ]}}"#,
    )
    .unwrap();

    let plan = week(&catalog, DietPreference::Balanced, 1);
    for (_, day_plan) in plan.iter() {
        assert_eq!(day_plan.len(), 2);
        assert!(day_plan.is_duplicate_free());
        assert_eq!(day_plan.total_calories(), 1100);
    }
    assert_eq!(build_grocery_list(&plan), vec!["Rice", "Tofu", "Tortilla"]);
}

#[test]
fn test_diet_without_meals_gives_empty_days() {
    let catalog = MealCatalog::from_json(
        r#"{"dinner": {"Keto": [
            {"id": 1, "name": "Steak", "calories": 700, "protein": 50, "carbs": 2, "fats": 50}
        ]}}"#,
    )
    .unwrap();

    let plan = week(&catalog, DietPreference::Vegan, 1);
    assert_eq!(plan.meal_count(), 0);
    assert!(build_grocery_list(&plan).is_empty());
}

#[test]
fn test_grocery_list_is_sorted_unique_and_complete() {
    let catalog = MealCatalog::builtin().unwrap();
    let plan = week(&catalog, DietPreference::Balanced, 12);

    let list = build_grocery_list(&plan);
    assert_eq!(list, build_grocery_list(&plan));

    let mut sorted = list.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(list, sorted);

    for (_, day_plan) in plan.iter() {
        for meal in &day_plan.meals {
            for ingredient in &meal.ingredients {
                assert!(list.contains(ingredient));
            }
        }
    }
}
