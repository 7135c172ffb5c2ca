use std::path::PathBuf;

use clap::Parser;

use meal_planner_rs::catalog::MealCatalog;
use meal_planner_rs::config::AppConfig;
use meal_planner_rs::error::{PlannerError, Result};
use meal_planner_rs::evaluation::{
    SearchConfig, SearchRanges, default_scenarios, print_comparison, print_topk, run_search,
    write_best_json, write_csv,
};
use meal_planner_rs::logging::init_logging;
use meal_planner_rs::state::load_catalog;

#[derive(Parser, Debug)]
#[command(name = "evaluate")]
#[command(about = "Measure how often generated days land on target and search for better planner knobs")]
struct Args {
    /// Number of random search iterations
    #[arg(long, default_value = "200")]
    iters: usize,

    /// Random seed for the search itself
    #[arg(long, default_value = "123")]
    seed: u64,

    /// Seeds each config is evaluated with (comma-separated)
    #[arg(long, default_value = "1,2,3")]
    seeds: String,

    /// Config file whose [planner] section is the baseline
    #[arg(long)]
    config: Option<PathBuf>,

    /// Meal catalog JSON (built-in catalog when omitted)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Output CSV file for all results
    #[arg(long, default_value = "evaluation_results.csv")]
    csv: PathBuf,

    /// Output JSON file for the best result
    #[arg(long, default_value = "evaluation_best.json")]
    json: PathBuf,

    /// Number of top results to display
    #[arg(long, default_value = "10")]
    topk: usize,
}

fn parse_seeds(s: &str) -> Vec<u64> {
    s.split(',')
        .filter_map(|part| part.trim().parse().ok())
        .collect()
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    let config = AppConfig::load(args.config.as_deref())?;
    // Per-day band warnings drown the search output.
    init_logging("error")?;

    let catalog = match args.catalog.as_ref().or(config.catalog.path.as_ref()) {
        Some(path) => load_catalog(path)?,
        None => MealCatalog::builtin()?,
    };
    println!("Loaded {} meals", catalog.len());

    let eval_seeds = parse_seeds(&args.seeds);
    if eval_seeds.is_empty() {
        return Err(PlannerError::InvalidInput(
            "no valid evaluation seeds provided".to_string(),
        ));
    }

    let scenarios = default_scenarios()?;
    println!(
        "Evaluating {} scenarios x {} seeds x 7 days",
        scenarios.len(),
        eval_seeds.len()
    );

    let search = SearchConfig {
        iterations: args.iters,
        seed: args.seed,
        eval_seeds,
        ranges: SearchRanges::default(),
        baseline: config.planner,
    };

    let outcome = run_search(&catalog, &scenarios, &search);

    print_topk(&outcome.results, args.topk);

    let Some(best) = outcome.results.first() else {
        return Ok(());
    };
    print_comparison(best, &outcome.baseline);

    write_csv(&outcome.results, &args.csv)?;
    println!("Wrote all results to {}", args.csv.display());

    write_best_json(best, &args.json)?;
    println!("Wrote best result to {}", args.json.display());

    Ok(())
}
