use std::path::Path;

use crate::error::Result;
use crate::models::WeekPlan;

/// Write the week as CSV, one row per planned meal.
pub fn write_week_csv(plan: &WeekPlan, path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "day", "position", "meal_id", "name", "category", "calories", "protein_g", "carbs_g",
        "fats_g", "fiber_g",
    ])?;

    for (day, day_plan) in plan.iter() {
        for (i, meal) in day_plan.meals.iter().enumerate() {
            wtr.write_record([
                day.to_string(),
                (i + 1).to_string(),
                meal.id.to_string(),
                meal.name.clone(),
                meal.category.to_string(),
                meal.calories.to_string(),
                format!("{:.1}", meal.protein_g),
                format!("{:.1}", meal.carbs_g),
                format!("{:.1}", meal.fats_g),
                format!("{:.1}", meal.fiber_g),
            ])?;
        }
    }

    wtr.flush()?;
    tracing::info!(path = %path.display(), meals = plan.meal_count(), "exported week plan");
    Ok(())
}
