use std::env;
use std::path::{Path, PathBuf};

use config::{Config as ConfigBuilder, Environment, File};
use serde::Deserialize;

use crate::error::Result;
use crate::planner::constants::*;

/// Default location of the optional config file.
pub const DEFAULT_CONFIG_FILE: &str = "meal_planner.toml";

/// Environment prefix for overrides, e.g. `MEAL_PLANNER__PLANNER__MAX_ATTEMPTS=30`.
pub const ENV_PREFIX: &str = "MEAL_PLANNER";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub planner: PlannerConfig,
    pub catalog: CatalogConfig,
    pub logging: LoggingConfig,
    pub favorites: FavoritesConfig,
}

/// Knobs for day generation and meal selection.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    pub seed_fractions: Vec<f64>,
    pub lower_tolerance: f64,
    pub trim_threshold: f64,
    pub trim_calorie_ceiling: u32,
    pub max_attempts: usize,
    pub top_matches: usize,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            seed_fractions: SEED_MEAL_FRACTIONS.to_vec(),
            lower_tolerance: LOWER_TOLERANCE,
            trim_threshold: TRIM_THRESHOLD,
            trim_calorie_ceiling: TRIM_CALORIE_CEILING,
            max_attempts: MAX_ATTEMPTS,
            top_matches: TOP_MATCHES,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// External catalog JSON. The built-in catalog is used when unset.
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FavoritesConfig {
    pub path: PathBuf,
}

impl Default for FavoritesConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("favorites.json"),
        }
    }
}

impl AppConfig {
    /// Load configuration: defaults, then the config file, then environment overrides.
    ///
    /// The file is taken from `config_path`, else `MEAL_PLANNER_CONFIG`, else
    /// [`DEFAULT_CONFIG_FILE`]; a missing file is not an error.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let file_path = config_path
            .map(Path::to_path_buf)
            .or_else(|| env::var("MEAL_PLANNER_CONFIG").ok().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

        let mut builder = ConfigBuilder::builder();

        if file_path.exists() {
            builder = builder.add_source(File::from(file_path.as_path()));
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        );

        let config: AppConfig = builder.build()?.try_deserialize()?;
        Ok(config)
    }
}
