use crate::models::{CalorieStatus, DayPlan, Meal, NutrientTargets, Profile, WeekPlan, Weekday};
use crate::planner::nutrients::basal_metabolic_rate;
use crate::state::Favorites;

/// Width of the text progress bars.
const BAR_WIDTH: usize = 20;

fn progress_bar(percent: f64) -> String {
    let filled = ((percent / 100.0) * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    format!("[{}{}]", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
}

/// Display computed targets for a profile.
pub fn display_targets(profile: &Profile, targets: &NutrientTargets) {
    println!();
    println!("=== Daily Targets ===");
    println!();
    println!(
        "Profile: {} kg, {} cm, {} y, {}, {}, {}",
        profile.weight_kg,
        profile.height_cm,
        profile.age,
        profile.gender,
        profile.activity_level,
        profile.goal
    );
    println!("BMR:      {:.0} kcal", basal_metabolic_rate(profile));
    println!("Calories: {} kcal", targets.calories);
    println!("Water:    {} ml", targets.water_ml);
    println!(
        "Macros:   P {} g / C {} g / F {} g",
        targets.protein_g, targets.carbs_g, targets.fats_g
    );
    println!();
}

/// Display one day with totals, macro progress, and band status.
pub fn display_day(
    day: Weekday,
    plan: &DayPlan,
    targets: &NutrientTargets,
    favorites: &Favorites,
) {
    println!("--- {} ---", day);

    if plan.is_empty() {
        println!("  No meals planned.");
        println!();
        return;
    }

    let max_name_len = plan.meals.iter().map(|m| m.name.len()).max().unwrap_or(10);

    for (i, meal) in plan.meals.iter().enumerate() {
        let star = if favorites.contains(meal.id) { "*" } else { " " };
        println!(
            "{:>3}. {}{:<width$} {:>4} kcal | P {:>3.0} C {:>3.0} F {:>3.0} | {}",
            i + 1,
            star,
            meal.name,
            meal.calories,
            meal.protein_g,
            meal.carbs_g,
            meal.fats_g,
            meal.category,
            width = max_name_len
        );
    }

    let totals = plan.totals();
    let status = plan.status(targets.calories);
    let marker = match status {
        CalorieStatus::OnTarget => "",
        CalorieStatus::Warning => "  (!)",
        CalorieStatus::OffTarget => "  (!!)",
    };

    println!(
        "     Total {} / {} kcal, {:.0} g fiber - {}{}",
        totals.calories, targets.calories, totals.fiber_g, status, marker
    );
    for progress in totals.progress(targets) {
        println!(
            "     {:<8}{} {:>4.0} / {} g",
            progress.label,
            progress_bar(progress.percent),
            progress.current,
            progress.target
        );
    }
    println!();
}

/// Display every day of a week plan followed by a short summary.
pub fn display_week_plan(plan: &WeekPlan, targets: &NutrientTargets, favorites: &Favorites) {
    println!();
    println!("=== Weekly Meal Plan ({}) ===", plan.diet);
    println!();

    for (day, day_plan) in plan.iter() {
        display_day(day, day_plan, targets, favorites);
    }

    let on_target = plan
        .iter()
        .filter(|(_, d)| d.status(plan.target_calories) == CalorieStatus::OnTarget)
        .count();

    println!("--- Summary ---");
    println!("Total meals: {}", plan.meal_count());
    println!("Days on target: {}/7", on_target);
    println!();
}

/// Display the weekly grocery list.
pub fn display_grocery_list(items: &[String]) {
    println!();
    println!("=== Weekly Grocery List ({} items) ===", items.len());
    println!();

    if items.is_empty() {
        println!("  (empty)");
    }
    for item in items {
        println!("  [ ] {}", item);
    }
    println!();
}

/// Display a simple list of meals with their details.
pub fn display_meal_list(meals: &[&Meal], title: &str, favorites: &Favorites) {
    if meals.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} items) ===", title, meals.len());
    println!();

    for meal in meals {
        let star = if favorites.contains(meal.id) { "*" } else { " " };
        println!(
            " {}#{:<3} {} - {} kcal, P:{} C:{} F:{} Fi:{} [{}] {}",
            star,
            meal.id,
            meal.name,
            meal.calories,
            meal.protein_g,
            meal.carbs_g,
            meal.fats_g,
            meal.fiber_g,
            meal.category,
            meal.prep_time
        );
    }

    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_bar_bounds() {
        assert_eq!(progress_bar(0.0), format!("[{}]", ".".repeat(BAR_WIDTH)));
        assert_eq!(progress_bar(100.0), format!("[{}]", "#".repeat(BAR_WIDTH)));
        assert_eq!(progress_bar(50.0).matches('#').count(), BAR_WIDTH / 2);
    }
}
