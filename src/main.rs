//! Savings Projection CLI
//!
//! Command-line interface for running planner projections and budget insights

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use savings_projection::config::{load_budget, load_scenario_inputs};
use savings_projection::format::{format_gain_percentage, format_inr, month_label};
use savings_projection::scenario::write_series_csv;
use savings_projection::{ProjectedGain, ProjectionPoint, ScenarioInputs, SeriesSummary};

#[derive(Parser, Debug)]
#[command(name = "savings-projection")]
#[command(about = "Compare a savings plan with a what-if alternative under monthly compounding")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Project the baseline and what-if trajectories
    Project(ProjectArgs),
    /// Show budget insights for a household snapshot
    Overview {
        /// JSON file with income, expenses, debts and savings
        #[arg(long)]
        config: Option<PathBuf>,

        /// Print insights as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug)]
struct ProjectArgs {
    /// JSON file with scenario inputs; PROJECTION_* variables override it
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    initial_amount: Option<f64>,

    /// Paid out of the initial amount before projecting
    #[arg(long)]
    one_time_purchase: Option<f64>,

    #[arg(long)]
    monthly_savings: Option<f64>,

    /// Annual growth of the current plan, in percent
    #[arg(long)]
    baseline_rate: Option<f64>,

    /// Annual growth of the what-if plan, in percent
    #[arg(long)]
    alternative_rate: Option<f64>,

    /// Multiplier on monthly savings for the what-if plan
    #[arg(long)]
    multiplier: Option<f64>,

    #[arg(long, conflicts_with = "years")]
    months: Option<f64>,

    #[arg(long)]
    years: Option<f64>,

    /// Write the full series to this CSV file
    #[arg(long)]
    output: Option<PathBuf>,

    /// Print the result as JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Rows of the table to print
    #[arg(long, default_value_t = 24)]
    rows: usize,
}

impl ProjectArgs {
    fn apply(&self, inputs: &mut ScenarioInputs) {
        if let Some(v) = self.initial_amount {
            inputs.initial_amount = v;
        }
        if let Some(v) = self.one_time_purchase {
            inputs.one_time_purchase = v;
        }
        if let Some(v) = self.monthly_savings {
            inputs.monthly_savings = v;
        }
        if let Some(v) = self.baseline_rate {
            inputs.baseline_rate_pct = v;
        }
        if let Some(v) = self.alternative_rate {
            inputs.alternative_rate_pct = v;
        }
        if let Some(v) = self.multiplier {
            inputs.contribution_multiplier = v;
        }
        if let Some(v) = self.months {
            inputs.horizon_months = v;
            inputs.horizon_years = None;
        }
        if let Some(v) = self.years {
            inputs.horizon_years = Some(v);
        }
    }
}

#[derive(Serialize)]
struct ProjectionReport<'a> {
    inputs: &'a ScenarioInputs,
    summary: SeriesSummary,
    gain: ProjectedGain,
    gain_pct: Option<f64>,
    points: &'a [ProjectionPoint],
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Project(args) => run_project(&args),
        Commands::Overview { config, json } => run_overview(config, json),
    }
}

fn run_project(args: &ProjectArgs) -> Result<()> {
    let mut inputs = load_scenario_inputs(args.config.as_deref())
        .context("Failed to load scenario inputs")?;
    args.apply(&mut inputs);

    let series = inputs.simulate().context("Invalid scenario inputs")?;
    let summary = series.summary()?;
    let gain = series.gain()?;

    if let Some(path) = &args.output {
        let file = File::create(path)
            .with_context(|| format!("Unable to create {}", path.display()))?;
        write_series_csv(BufWriter::new(file), &series)?;
    }

    if args.json {
        let report = ProjectionReport {
            inputs: &inputs,
            summary,
            gain,
            gain_pct: gain.percentage_opt(),
            points: series.points(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Savings Projection v{}", env!("CARGO_PKG_VERSION"));
    println!("======================\n");

    let params = &series.parameters;
    println!("Initial amount:      {}", format_inr(params.initial_amount.round() as i64));
    println!("Monthly savings:     {}", format_inr(params.monthly_contribution.round() as i64));
    println!("Current plan rate:   {:.2}%", params.baseline_annual_rate * 100.0);
    println!("What-if rate:        {:.2}%", params.alternative_annual_rate * 100.0);
    println!("What-if multiplier:  {}x", params.alternative_contribution_multiplier);
    println!();

    println!("{:>5} {:>16} {:>16}", "Month", "Current", "What-if");
    println!("{}", "-".repeat(39));
    for point in series.points().iter().take(args.rows) {
        println!(
            "{:>5} {:>16} {:>16}",
            point.month,
            format_inr(point.baseline_value),
            format_inr(point.alternative_value),
        );
    }
    if series.len() > args.rows {
        println!("... ({} more months)", series.len() - args.rows);
    }

    println!("\nSummary after {}:", month_label(summary.months));
    println!("  Current projection:  {}", format_inr(summary.final_baseline));
    println!(
        "    contributed {}, growth {}",
        format_inr(summary.baseline_contributed),
        format_inr(summary.baseline_growth)
    );
    println!("  What-if projection:  {}", format_inr(summary.final_alternative));
    println!(
        "    contributed {}, growth {}",
        format_inr(summary.alternative_contributed),
        format_inr(summary.alternative_growth)
    );
    println!(
        "  Potential gain:      {} ({})",
        format_inr(gain.delta),
        format_gain_percentage(&gain)
    );

    if let Some(path) = &args.output {
        println!("\nFull results written to: {}", path.display());
    }

    Ok(())
}

fn run_overview(config: Option<PathBuf>, json: bool) -> Result<()> {
    let snapshot = load_budget(config.as_deref()).context("Failed to load budget snapshot")?;
    let insights = snapshot.insights();

    if json {
        println!("{}", serde_json::to_string_pretty(&insights)?);
        return Ok(());
    }

    println!("Financial Overview");
    println!("==================\n");
    println!("  Monthly income:     {}", format_inr(insights.total_income.round() as i64));
    println!("  Monthly outgoings:  {}", format_inr(insights.total_outgoings.round() as i64));
    println!("  Monthly surplus:    {}", format_inr(insights.monthly_surplus.round() as i64));

    match insights.debt_free_months {
        Some(0) => println!("  Debt: none outstanding"),
        Some(months) => println!("  Debt-free in approximately {} months at the current EMI", months),
        None => println!("  Debt: the current EMI never repays the outstanding balance"),
    }
    match insights.emergency_cover_months {
        Some(months) => println!("  Emergency fund covers {} months of essential expenses", months),
        None => println!("  Emergency fund cover: n/a (no essential expenses entered)"),
    }

    Ok(())
}
