use rand::Rng;

use crate::config::PlannerConfig;

/// Inclusive sampling ranges for planner knobs.
#[derive(Debug, Clone)]
pub struct SearchRanges {
    pub lower_tolerance: (f64, f64),
    pub trim_threshold: (f64, f64),
    pub trim_calorie_ceiling: (u32, u32),
    pub max_attempts: (usize, usize),
    pub top_matches: (usize, usize),
}

impl Default for SearchRanges {
    fn default() -> Self {
        Self {
            lower_tolerance: (0.90, 0.99),
            trim_threshold: (1.05, 1.30),
            trim_calorie_ceiling: (150, 450),
            max_attempts: (5, 40),
            top_matches: (1, 5),
        }
    }
}

/// Draw a planner config with every knob sampled from `ranges`.
///
/// Seed fractions are not searched and keep their defaults.
pub fn random_config(rng: &mut impl Rng, ranges: &SearchRanges) -> PlannerConfig {
    PlannerConfig {
        lower_tolerance: rng.gen_range(ranges.lower_tolerance.0..=ranges.lower_tolerance.1),
        trim_threshold: rng.gen_range(ranges.trim_threshold.0..=ranges.trim_threshold.1),
        trim_calorie_ceiling: rng
            .gen_range(ranges.trim_calorie_ceiling.0..=ranges.trim_calorie_ceiling.1),
        max_attempts: rng.gen_range(ranges.max_attempts.0..=ranges.max_attempts.1),
        top_matches: rng.gen_range(ranges.top_matches.0..=ranges.top_matches.1),
        ..PlannerConfig::default()
    }
}

/// Compact one-line form of a config for listings.
pub fn describe(config: &PlannerConfig) -> String {
    format!(
        "lt={:.3} tt={:.3} tc={} ma={} tm={}",
        config.lower_tolerance,
        config.trim_threshold,
        config.trim_calorie_ceiling,
        config.max_attempts,
        config.top_matches
    )
}
