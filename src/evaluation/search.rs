use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::catalog::MealCatalog;
use crate::config::PlannerConfig;
use crate::evaluation::metrics::{EvaluationResult, Scenario, evaluate_config};
use crate::evaluation::ranges::{SearchRanges, describe, random_config};

pub struct SearchConfig {
    pub iterations: usize,
    pub seed: u64,
    /// Seeds each candidate config is evaluated with.
    pub eval_seeds: Vec<u64>,
    pub ranges: SearchRanges,
    /// Config the search is compared against.
    pub baseline: PlannerConfig,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            iterations: 200,
            seed: 123,
            eval_seeds: vec![1, 2, 3],
            ranges: SearchRanges::default(),
            baseline: PlannerConfig::default(),
        }
    }
}

pub struct SearchResults {
    /// Every evaluated config, best first. Includes the baseline.
    pub results: Vec<EvaluationResult>,
    pub baseline: EvaluationResult,
}

/// Random search over planner knobs.
pub fn run_search(
    catalog: &MealCatalog,
    scenarios: &[Scenario],
    search: &SearchConfig,
) -> SearchResults {
    let mut rng = StdRng::seed_from_u64(search.seed);
    let mut results = Vec::with_capacity(search.iterations + 1);

    let baseline = evaluate_config(catalog, scenarios, &search.baseline, &search.eval_seeds);
    println!(
        "Baseline: on-target={:.1}% deviation={:.3} meals/day={:.2}",
        baseline.tally.on_target_rate() * 100.0,
        baseline.tally.mean_abs_deviation(),
        baseline.tally.mean_meals_per_day()
    );
    println!("    {}\n", describe(&baseline.config));

    println!("Running {} iterations...", search.iterations);

    let mut best = baseline.clone();
    results.push(baseline.clone());

    for i in 0..search.iterations {
        let config = random_config(&mut rng, &search.ranges);
        let result = evaluate_config(catalog, scenarios, &config, &search.eval_seeds);

        if result.cmp_score(&best).is_gt() {
            println!(
                "[{}/{}] New best: on-target={:.1}% deviation={:.3}",
                i + 1,
                search.iterations,
                result.tally.on_target_rate() * 100.0,
                result.tally.mean_abs_deviation()
            );
            best = result.clone();
        }

        results.push(result);

        if (i + 1) % (search.iterations / 10).max(1) == 0 {
            let pct = ((i + 1) as f64 / search.iterations as f64) * 100.0;
            eprint!("\r{:.0}% complete", pct);
        }
    }
    eprintln!();

    results.sort_by(|a, b| b.cmp_score(a));

    SearchResults { results, baseline }
}
