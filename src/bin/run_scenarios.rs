//! Run a batch of planner scenarios from CSV
//!
//! Usage: run_scenarios <scenarios.csv> [summary.csv]
//!
//! Projects every row in parallel and writes one summary row per scenario.
//! Scenarios with invalid inputs are reported in the `error` column.

use std::env;
use std::fs::File;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use serde::Serialize;

use savings_projection::scenario::{load_scenarios, run_batch};
use savings_projection::format::format_inr;

#[derive(Debug, Serialize, Default)]
struct SummaryRow {
    name: String,
    months: Option<u32>,
    final_baseline: Option<i64>,
    final_alternative: Option<i64>,
    gain: Option<i64>,
    gain_pct: Option<f64>,
    error: Option<String>,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let Some(input_path) = args.get(1) else {
        bail!("Usage: run_scenarios <scenarios.csv> [summary.csv]");
    };
    let output_path = args.get(2).map(String::as_str).unwrap_or("scenario_summary.csv");

    let start = Instant::now();
    let scenarios = load_scenarios(input_path)
        .with_context(|| format!("Failed to load scenarios from {}", input_path))?;
    println!("Loaded {} scenarios in {:?}", scenarios.len(), start.elapsed());

    let outcomes = run_batch(&scenarios);

    let rows: Vec<SummaryRow> = outcomes
        .into_iter()
        .map(|outcome| {
            let summarized = outcome
                .result
                .and_then(|series| Ok((series.summary()?, series.gain()?)));
            (outcome.name, summarized)
        })
        .map(|(name, summarized)| match summarized {
            Ok((summary, gain)) => SummaryRow {
                name,
                months: Some(summary.months),
                final_baseline: Some(summary.final_baseline),
                final_alternative: Some(summary.final_alternative),
                gain: Some(gain.delta),
                gain_pct: gain.percentage_opt(),
                error: None,
            },
            Err(err) => SummaryRow {
                name,
                error: Some(err.to_string()),
                ..Default::default()
            },
        })
        .collect();

    let file = File::create(output_path)
        .with_context(|| format!("Failed to create {}", output_path))?;
    let mut writer = csv::Writer::from_writer(file);
    for row in &rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    let failed = rows.iter().filter(|r| r.error.is_some()).count();
    println!("\nBatch Summary:");
    for row in rows.iter().filter(|r| r.error.is_none()) {
        println!(
            "  {:<20} current {:>16}  what-if {:>16}",
            row.name,
            format_inr(row.final_baseline.unwrap_or_default()),
            format_inr(row.final_alternative.unwrap_or_default()),
        );
    }
    if failed > 0 {
        println!("  {} scenario(s) failed, see the error column", failed);
    }

    println!("\nOutput written to {}", output_path);
    println!("Total time: {:?}", start.elapsed());
    Ok(())
}
