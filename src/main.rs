use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

use meal_planner_rs::catalog::MealCatalog;
use meal_planner_rs::cli::{Cli, Command, ProfileArgs};
use meal_planner_rs::config::AppConfig;
use meal_planner_rs::error::Result;
use meal_planner_rs::interface::{
    PartialProfile, collect_profile, confirm_overwrite, display_grocery_list, display_meal_list,
    display_targets, display_week_plan, edit_week, prompt_diet, resolve_meal, write_week_csv,
};
use meal_planner_rs::logging::init_logging;
use meal_planner_rs::models::{
    ActivityLevel, DietPreference, Gender, Goal, NutrientTargets, Profile, ProfileRecord,
};
use meal_planner_rs::planner::{build_grocery_list, compute_targets, generate_week};
use meal_planner_rs::state::{
    load_catalog, load_favorites, load_profile_record, save_favorites,
};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let Cli {
        command,
        config: config_path,
        catalog: catalog_path,
    } = Cli::parse();

    let config = AppConfig::load(config_path.as_deref())?;
    init_logging(&config.logging.level)?;

    let catalog = match catalog_path.or_else(|| config.catalog.path.clone()) {
        Some(path) => load_catalog(path)?,
        None => MealCatalog::builtin()?,
    };

    match command.unwrap_or_default() {
        Command::Targets { profile } => cmd_targets(&profile),
        Command::Plan {
            profile,
            seed,
            grocery,
            edit,
            export,
        } => {
            let (profile, diet) = resolve_inputs(&profile)?;
            let targets = compute_targets(&profile, diet)?;
            display_targets(&profile, &targets);

            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };

            let favorites = load_favorites(&config.favorites.path)?;
            let mut week = generate_week(&catalog, &targets, diet, &config.planner, &mut rng);
            display_week_plan(&week, &targets, &favorites);

            if edit {
                edit_week(
                    &catalog,
                    &mut week,
                    &targets,
                    &favorites,
                    &config.planner,
                    &mut rng,
                )?;
                display_week_plan(&week, &targets, &favorites);
            }

            if grocery {
                display_grocery_list(&build_grocery_list(&week));
            }

            if let Some(path) = export {
                if confirm_overwrite(&path)? {
                    write_week_csv(&week, &path)?;
                    println!("Plan written to {}", path.display());
                } else {
                    println!("Export skipped.");
                }
            }

            Ok(())
        }
        Command::Catalog { diet } => {
            let favorites = load_favorites(&config.favorites.path)?;
            match diet {
                Some(diet) => {
                    display_meal_list(&catalog.meals_for(diet), &format!("{} Meals", diet), &favorites)
                }
                None => {
                    for diet in DietPreference::ALL {
                        display_meal_list(
                            &catalog.meals_for(diet),
                            &format!("{} Meals", diet),
                            &favorites,
                        );
                    }
                }
            }
            Ok(())
        }
        Command::Favorite { name } => {
            let Some(meal) = resolve_meal(&catalog, &name)? else {
                println!("No meal selected.");
                return Ok(());
            };

            let mut favorites = load_favorites(&config.favorites.path)?;
            if favorites.toggle(meal.id) {
                println!("Added {} to favorites.", meal.name);
            } else {
                println!("Removed {} from favorites.", meal.name);
            }
            save_favorites(&config.favorites.path, &favorites)?;
            Ok(())
        }
        Command::Favorites => {
            let favorites = load_favorites(&config.favorites.path)?;
            display_meal_list(&favorites.meals(&catalog), "Favorites", &favorites);
            Ok(())
        }
    }
}

/// Compute and show targets without generating a plan.
fn cmd_targets(args: &ProfileArgs) -> Result<()> {
    let (profile, diet) = resolve_inputs(args)?;
    let targets: NutrientTargets = compute_targets(&profile, diet)?;
    display_targets(&profile, &targets);
    println!("Diet: {}", diet);
    Ok(())
}

/// Merge flags over an optional profile record, prompting for whatever is still missing.
fn resolve_inputs(args: &ProfileArgs) -> Result<(Profile, DietPreference)> {
    let record = match &args.profile {
        Some(path) => load_profile_record(path)?,
        None => ProfileRecord::default(),
    };

    let partial = PartialProfile {
        weight_kg: args.weight.or(record.weight_kg),
        height_cm: args.height.or(record.height_cm),
        age: args.age.or(record.age),
        gender: args.gender.or_else(|| {
            record
                .gender
                .as_deref()
                .map(|g| Gender::from_backend(Some(g)))
        }),
        activity_level: args.activity.or_else(|| {
            record
                .daily_activity_level
                .as_deref()
                .map(|a| ActivityLevel::from_backend(Some(a)))
        }),
        goal: args.goal.or_else(|| {
            record
                .primary_goal
                .as_deref()
                .map(|g| Goal::from_backend(Some(g)))
        }),
    };

    let profile = collect_profile(partial)?;
    let diet = match args.diet {
        Some(diet) => diet,
        None => prompt_diet()?,
    };

    Ok((profile, diet))
}
