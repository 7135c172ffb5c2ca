use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::evaluation::metrics::EvaluationResult;
use crate::evaluation::ranges::describe;

fn truncate(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Write all results to a CSV file, best first.
pub fn write_csv(results: &[EvaluationResult], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "rank",
        "lower_tolerance",
        "trim_threshold",
        "trim_calorie_ceiling",
        "max_attempts",
        "top_matches",
        "days",
        "on_target_rate",
        "warning_rate",
        "off_target_rate",
        "mean_abs_deviation",
        "mean_meals_per_day",
        "duplicate_days",
    ])?;

    for (i, result) in results.iter().enumerate() {
        let tally = &result.tally;
        wtr.write_record([
            (i + 1).to_string(),
            format!("{:.3}", result.config.lower_tolerance),
            format!("{:.3}", result.config.trim_threshold),
            result.config.trim_calorie_ceiling.to_string(),
            result.config.max_attempts.to_string(),
            result.config.top_matches.to_string(),
            tally.days.to_string(),
            format!("{:.3}", tally.on_target_rate()),
            format!("{:.3}", tally.warning_rate()),
            format!("{:.3}", tally.off_target_rate()),
            format!("{:.4}", tally.mean_abs_deviation()),
            format!("{:.2}", tally.mean_meals_per_day()),
            tally.duplicate_days.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write the best config as JSON, in the shape of the `[planner]` config section.
pub fn write_best_json(best: &EvaluationResult, path: &Path) -> Result<()> {
    let json = serde_json::json!({
        "planner": {
            "seed_fractions": best.config.seed_fractions,
            "lower_tolerance": truncate(best.config.lower_tolerance, 3),
            "trim_threshold": truncate(best.config.trim_threshold, 3),
            "trim_calorie_ceiling": best.config.trim_calorie_ceiling,
            "max_attempts": best.config.max_attempts,
            "top_matches": best.config.top_matches,
        },
        "metrics": {
            "days": best.tally.days,
            "on_target_rate": truncate(best.tally.on_target_rate(), 3),
            "warning_rate": truncate(best.tally.warning_rate(), 3),
            "off_target_rate": truncate(best.tally.off_target_rate(), 3),
            "mean_abs_deviation": truncate(best.tally.mean_abs_deviation(), 4),
            "mean_meals_per_day": truncate(best.tally.mean_meals_per_day(), 2),
            "duplicate_days": best.tally.duplicate_days,
        },
    });

    let mut file = File::create(path)?;
    file.write_all(serde_json::to_string_pretty(&json)?.as_bytes())?;
    Ok(())
}

/// Print top-k results to stdout.
pub fn print_topk(results: &[EvaluationResult], k: usize) {
    println!("\n=== Top {} Results ===\n", k.min(results.len()));

    for (i, result) in results.iter().take(k).enumerate() {
        println!(
            "#{}: on-target={:.1}% warning={:.1}% off={:.1}% deviation={:.3} meals/day={:.2}",
            i + 1,
            result.tally.on_target_rate() * 100.0,
            result.tally.warning_rate() * 100.0,
            result.tally.off_target_rate() * 100.0,
            result.tally.mean_abs_deviation(),
            result.tally.mean_meals_per_day()
        );
        println!("    {}", describe(&result.config));
        println!();
    }
}

/// Print the best result against the baseline.
pub fn print_comparison(best: &EvaluationResult, baseline: &EvaluationResult) {
    let on_target_change = (best.tally.on_target_rate() - baseline.tally.on_target_rate()) * 100.0;
    let deviation_change = best.tally.mean_abs_deviation() - baseline.tally.mean_abs_deviation();

    println!("=== Comparison: Best vs Baseline ===");
    println!(
        "Baseline: on-target={:.1}% deviation={:.3}",
        baseline.tally.on_target_rate() * 100.0,
        baseline.tally.mean_abs_deviation()
    );
    println!(
        "Best:     on-target={:.1}% deviation={:.3}",
        best.tally.on_target_rate() * 100.0,
        best.tally.mean_abs_deviation()
    );
    println!(
        "Change:   on-target {:+.1} pts  deviation {:+.3}",
        on_target_change, deviation_change
    );
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlannerConfig;
    use crate::evaluation::metrics::DayTally;
    use tempfile::tempdir;

    fn result(on_target: usize) -> EvaluationResult {
        EvaluationResult {
            config: PlannerConfig::default(),
            tally: DayTally {
                days: 14,
                on_target,
                off_target: 14 - on_target,
                meals: 56,
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate(0.123456, 3), 0.123);
        assert_eq!(truncate(1.23456, 2), 1.23);
    }

    #[test]
    fn test_write_csv_rows() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("results.csv");
        write_csv(&[result(10), result(7)], &path).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "1");
        assert_eq!(&rows[1][7], "0.500");
    }

    #[test]
    fn test_best_json_loads_as_planner_section() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("best.json");
        write_best_json(&result(12), &path).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        let planner: PlannerConfig = serde_json::from_value(value["planner"].clone()).unwrap();
        assert_eq!(planner, PlannerConfig::default());
        assert_eq!(value["metrics"]["days"], 14);
    }
}
