use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::models::{ActivityLevel, DietPreference, Gender, Goal};

/// Weekly meal planner: daily nutrient targets, a seven-day plan, and its grocery list.
#[derive(Parser, Debug)]
#[command(name = "meal_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to a TOML config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Meal catalog JSON to use instead of the built-in one.
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,
}

/// Profile and diet inputs. Anything not given here is prompted for.
#[derive(Args, Debug, Clone, Default)]
pub struct ProfileArgs {
    /// Profile record JSON as stored by the profile service.
    #[arg(long)]
    pub profile: Option<PathBuf>,

    /// Body weight in kilograms.
    #[arg(long)]
    pub weight: Option<f64>,

    /// Height in centimetres.
    #[arg(long)]
    pub height: Option<f64>,

    /// Age in years.
    #[arg(long)]
    pub age: Option<u32>,

    #[arg(long)]
    pub gender: Option<Gender>,

    /// sedentary, light, moderate, active, or very-active.
    #[arg(long)]
    pub activity: Option<ActivityLevel>,

    /// maintain, lose, or gain.
    #[arg(long)]
    pub goal: Option<Goal>,

    /// balanced, keto, vegan, mediterranean, or high-protein.
    #[arg(long)]
    pub diet: Option<DietPreference>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show daily calorie, water, and macro targets.
    Targets {
        #[command(flatten)]
        profile: ProfileArgs,
    },

    /// Generate a weekly meal plan.
    Plan {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Seed for reproducible plans.
        #[arg(long)]
        seed: Option<u64>,

        /// Print the grocery list after the plan.
        #[arg(long)]
        grocery: bool,

        /// Swap, add, or remove meals interactively before finishing.
        #[arg(long)]
        edit: bool,

        /// Write the final plan to a CSV file.
        #[arg(long)]
        export: Option<PathBuf>,
    },

    /// List catalog meals.
    Catalog {
        /// Only meals for this diet.
        #[arg(long)]
        diet: Option<DietPreference>,
    },

    /// Toggle a meal as favorite by name.
    Favorite { name: String },

    /// List favorite meals.
    Favorites,
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan {
            profile: ProfileArgs::default(),
            seed: None,
            grocery: false,
            edit: false,
            export: None,
        }
    }
}
