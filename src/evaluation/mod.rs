pub mod metrics;
pub mod ranges;
pub mod report;
pub mod search;

pub use metrics::{DayTally, EvaluationResult, Scenario, default_scenarios, evaluate_config};
pub use ranges::{SearchRanges, describe, random_config};
pub use report::{print_comparison, print_topk, write_best_json, write_csv};
pub use search::{SearchConfig, SearchResults, run_search};
