use std::collections::BTreeSet;

use crate::models::WeekPlan;

/// Sorted, de-duplicated ingredients across every meal of the week.
///
/// Ingredients are matched by exact string, so "Olive oil" and "olive oil" are
/// listed separately.
pub fn build_grocery_list(plan: &WeekPlan) -> Vec<String> {
    plan.iter()
        .flat_map(|(_, day)| day.meals.iter())
        .flat_map(|meal| meal.ingredients.iter().cloned())
        .collect::<BTreeSet<String>>()
        .into_iter()
        .collect()
}
