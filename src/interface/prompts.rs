use std::fmt::Display;
use std::path::Path;
use std::str::FromStr;

use dialoguer::{Confirm, Input, Select};
use rand::Rng;

use crate::catalog::MealCatalog;
use crate::config::PlannerConfig;
use crate::error::{PlannerError, Result};
use crate::interface::render::display_day;
use crate::models::{
    ActivityLevel, DietPreference, Gender, Goal, Meal, NutrientTargets, Profile, WeekPlan, Weekday,
};
use crate::planner::{add_meal, remove_meal, swap_meal};
use crate::state::Favorites;

/// Profile fields already known from the command line. Missing ones are prompted for.
#[derive(Debug, Clone, Default)]
pub struct PartialProfile {
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
    pub age: Option<u32>,
    pub gender: Option<Gender>,
    pub activity_level: Option<ActivityLevel>,
    pub goal: Option<Goal>,
}

fn prompt_number<T: FromStr>(prompt: &str) -> Result<T> {
    let input: String = Input::new().with_prompt(prompt).interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| PlannerError::InvalidInput(format!("'{}' is not a valid number", input)))
}

fn prompt_choice<T: Copy + Display>(prompt: &str, options: &[T], default: usize) -> Result<T> {
    let labels: Vec<String> = options.iter().map(ToString::to_string).collect();

    let selection = Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(default)
        .interact()?;

    Ok(options[selection])
}

/// Fill in any missing profile fields interactively, then validate.
pub fn collect_profile(partial: PartialProfile) -> Result<Profile> {
    let weight_kg = match partial.weight_kg {
        Some(v) => v,
        None => prompt_number("Weight (kg)")?,
    };
    let height_cm = match partial.height_cm {
        Some(v) => v,
        None => prompt_number("Height (cm)")?,
    };
    let age = match partial.age {
        Some(v) => v,
        None => prompt_number("Age (years)")?,
    };
    let gender = match partial.gender {
        Some(v) => v,
        None => prompt_choice("Gender", &[Gender::Male, Gender::Female], 0)?,
    };
    let activity_level = match partial.activity_level {
        Some(v) => v,
        None => prompt_choice("Activity level", &ActivityLevel::ALL, 2)?,
    };
    let goal = match partial.goal {
        Some(v) => v,
        None => prompt_choice("Goal", &Goal::ALL, 0)?,
    };

    let profile = Profile {
        weight_kg,
        height_cm,
        age,
        gender,
        activity_level,
        goal,
    };
    profile.validate()?;
    Ok(profile)
}

/// Prompt for a diet preference.
pub fn prompt_diet() -> Result<DietPreference> {
    prompt_choice("Diet preference", &DietPreference::ALL, 0)
}

/// Resolve a typed meal name against the catalog.
///
/// An exact match is taken directly. A single fuzzy match is confirmed, several
/// are offered as a list. Returns `None` when the user declines every option.
pub fn resolve_meal<'a>(catalog: &'a MealCatalog, query: &str) -> Result<Option<&'a Meal>> {
    let candidates = catalog.search(query);

    match candidates.as_slice() {
        [] => Err(PlannerError::MealNotFound(query.to_string())),
        [(meal, score)] if *score >= 1.0 => Ok(Some(*meal)),
        [(meal, _)] => {
            let confirm = Confirm::new()
                .with_prompt(format!("Did you mean '{}'?", meal.name))
                .default(true)
                .interact()?;
            Ok(confirm.then_some(*meal))
        }
        _ => {
            let options: Vec<&Meal> = candidates.iter().take(5).map(|(m, _)| *m).collect();
            let mut labels: Vec<String> = options.iter().map(|m| m.name.clone()).collect();
            labels.push("None of these".to_string());

            let selection = Select::new()
                .with_prompt("Which did you mean?")
                .items(&labels)
                .default(0)
                .interact()?;

            Ok(options.get(selection).copied())
        }
    }
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Ask before replacing an existing file. A path that does not exist yet needs no prompt.
pub fn confirm_overwrite(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(true);
    }
    prompt_yes_no(&format!("{} exists. Overwrite?", path.display()), false)
}

fn prompt_meal_index(plan: &WeekPlan, day: Weekday, action: &str) -> Result<Option<usize>> {
    let mut labels: Vec<String> = plan
        .day(day)
        .meals
        .iter()
        .map(|m| format!("{} ({} kcal)", m.name, m.calories))
        .collect();
    labels.push("Back".to_string());

    let selection = Select::new()
        .with_prompt(format!("Meal to {}", action))
        .items(&labels)
        .default(0)
        .interact()?;

    Ok((selection < plan.day(day).len()).then_some(selection))
}

/// Interactive editing loop over a generated week.
///
/// Swap, add, and remove are applied in place. Recoverable planner errors are
/// reported and the loop continues. The last meal of a day cannot be removed
/// here.
pub fn edit_week<R: Rng + ?Sized>(
    catalog: &MealCatalog,
    plan: &mut WeekPlan,
    targets: &NutrientTargets,
    favorites: &Favorites,
    config: &PlannerConfig,
    rng: &mut R,
) -> Result<()> {
    let mut day_labels: Vec<String> = Weekday::ALL.iter().map(ToString::to_string).collect();
    day_labels.push("Done".to_string());

    loop {
        let day_idx = Select::new()
            .with_prompt("Edit which day?")
            .items(&day_labels)
            .default(0)
            .interact()?;
        let Some(&day) = Weekday::ALL.get(day_idx) else {
            return Ok(());
        };

        loop {
            println!();
            display_day(day, plan.day(day), targets, favorites);

            let action = Select::new()
                .with_prompt(format!("{}", day))
                .items(&["Swap a meal", "Add a meal", "Remove a meal", "Back"])
                .default(0)
                .interact()?;

            let outcome = match action {
                0 => match prompt_meal_index(plan, day, "swap")? {
                    Some(index) => swap_meal(catalog, plan, day, index, config, rng)
                        .map(|old| println!("Replaced {}.", old.name)),
                    None => Ok(()),
                },
                1 => add_meal(catalog, plan, day, rng),
                2 if plan.day(day).len() <= 1 => {
                    println!("A day must keep at least one meal.");
                    Ok(())
                }
                2 => match prompt_meal_index(plan, day, "remove")? {
                    Some(index) => {
                        remove_meal(plan, day, index).map(|old| println!("Removed {}.", old.name))
                    }
                    None => Ok(()),
                },
                _ => break,
            };

            match outcome {
                Ok(()) => {}
                Err(
                    e @ (PlannerError::NoReplacementFound { .. }
                    | PlannerError::AllMealsUsed(_)
                    | PlannerError::MealIndexOutOfRange { .. }),
                ) => println!("{}", e),
                Err(e) => return Err(e),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_new_export_path_needs_no_confirmation() {
        let dir = tempdir().unwrap();
        assert!(confirm_overwrite(&dir.path().join("week.csv")).unwrap());
    }
}
