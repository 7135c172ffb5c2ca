use std::cmp::Ordering;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::catalog::MealCatalog;
use crate::config::PlannerConfig;
use crate::error::Result;
use crate::models::{
    ActivityLevel, CalorieStatus, DayPlan, DietPreference, Gender, Goal, NutrientTargets, Profile,
};
use crate::planner::{compute_targets, generate_week};

/// One profile and diet combination to plan weeks for.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub label: String,
    pub diet: DietPreference,
    pub targets: NutrientTargets,
}

impl Scenario {
    pub fn new(label: &str, profile: &Profile, diet: DietPreference) -> Result<Self> {
        Ok(Self {
            label: format!("{}/{}", label, diet),
            diet,
            targets: compute_targets(profile, diet)?,
        })
    }
}

/// Three reference profiles crossed with every diet.
pub fn default_scenarios() -> Result<Vec<Scenario>> {
    let profiles = [
        (
            "light-lose",
            Profile {
                weight_kg: 60.0,
                height_cm: 165.0,
                age: 30,
                gender: Gender::Female,
                activity_level: ActivityLevel::Light,
                goal: Goal::Lose,
            },
        ),
        (
            "moderate-maintain",
            Profile {
                weight_kg: 80.0,
                height_cm: 180.0,
                age: 35,
                gender: Gender::Male,
                activity_level: ActivityLevel::Moderate,
                goal: Goal::Maintain,
            },
        ),
        (
            "very-active-gain",
            Profile {
                weight_kg: 90.0,
                height_cm: 185.0,
                age: 28,
                gender: Gender::Male,
                activity_level: ActivityLevel::VeryActive,
                goal: Goal::Gain,
            },
        ),
    ];

    let mut scenarios = Vec::with_capacity(profiles.len() * DietPreference::ALL.len());
    for (label, profile) in &profiles {
        for diet in DietPreference::ALL {
            scenarios.push(Scenario::new(label, profile, diet)?);
        }
    }
    Ok(scenarios)
}

/// Running counts over generated days.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DayTally {
    pub days: usize,
    pub on_target: usize,
    pub warning: usize,
    pub off_target: usize,
    pub meals: usize,
    pub duplicate_days: usize,
    /// Sum of |total - target| / target.
    pub deviation_sum: f64,
}

impl DayTally {
    pub fn record(&mut self, day: &DayPlan, target_calories: u32) {
        self.days += 1;
        self.meals += day.len();

        match day.status(target_calories) {
            CalorieStatus::OnTarget => self.on_target += 1,
            CalorieStatus::Warning => self.warning += 1,
            CalorieStatus::OffTarget => self.off_target += 1,
        }

        if !day.is_duplicate_free() {
            self.duplicate_days += 1;
        }

        if target_calories > 0 {
            let total = day.total_calories() as f64;
            let target = target_calories as f64;
            self.deviation_sum += (total - target).abs() / target;
        }
    }

    fn rate(&self, count: usize) -> f64 {
        if self.days == 0 {
            0.0
        } else {
            count as f64 / self.days as f64
        }
    }

    pub fn on_target_rate(&self) -> f64 {
        self.rate(self.on_target)
    }

    pub fn warning_rate(&self) -> f64 {
        self.rate(self.warning)
    }

    pub fn off_target_rate(&self) -> f64 {
        self.rate(self.off_target)
    }

    pub fn mean_abs_deviation(&self) -> f64 {
        if self.days == 0 {
            0.0
        } else {
            self.deviation_sum / self.days as f64
        }
    }

    pub fn mean_meals_per_day(&self) -> f64 {
        self.rate(self.meals)
    }
}

/// How one planner config performed across all scenarios and seeds.
#[derive(Debug, Clone)]
pub struct EvaluationResult {
    pub config: PlannerConfig,
    pub tally: DayTally,
}

impl EvaluationResult {
    /// Higher on-target rate wins, then lower mean deviation, then fewer off-target days.
    pub fn cmp_score(&self, other: &Self) -> Ordering {
        match self
            .tally
            .on_target_rate()
            .partial_cmp(&other.tally.on_target_rate())
        {
            Some(Ordering::Equal) | None => {}
            Some(ord) => return ord,
        }
        match other
            .tally
            .mean_abs_deviation()
            .partial_cmp(&self.tally.mean_abs_deviation())
        {
            Some(Ordering::Equal) | None => {}
            Some(ord) => return ord,
        }
        other.tally.off_target.cmp(&self.tally.off_target)
    }
}

/// Generate one week per scenario and seed with `config`, tallying every day.
pub fn evaluate_config(
    catalog: &MealCatalog,
    scenarios: &[Scenario],
    config: &PlannerConfig,
    seeds: &[u64],
) -> EvaluationResult {
    let mut tally = DayTally::default();

    for scenario in scenarios {
        for &seed in seeds {
            let mut rng = StdRng::seed_from_u64(seed);
            let week = generate_week(catalog, &scenario.targets, scenario.diet, config, &mut rng);
            for (_, day) in week.iter() {
                tally.record(day, week.target_calories);
            }
        }
    }

    tracing::debug!(
        days = tally.days,
        on_target = tally.on_target,
        deviation = tally.mean_abs_deviation(),
        "evaluated planner config"
    );

    EvaluationResult {
        config: config.clone(),
        tally,
    }
}
