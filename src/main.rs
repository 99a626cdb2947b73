use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use trip_affinity::input::{TripPlan, load_plan};
use trip_affinity::logging;
use trip_affinity::model::ThresholdOverrides;
use trip_affinity::pipeline::stage1_scores::compute_scores;
use trip_affinity::pipeline::stage2_classify::classify_recommendations;
use trip_affinity::pipeline::stage4_report::{DEFAULT_TOP_N, Stage4Input, write_reports};
use trip_affinity::schedule::{generate_day_slots, slot_warnings};

#[derive(Debug, Parser)]
#[command(
    name = "trip-affinity",
    version,
    about = "Rank shared-trip activities into together and separate recommendations"
)]
struct Cli {
    /// Log at debug level unless RUST_LOG is set.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score a plan document and write reports.
    Run(RunArgs),
    /// Print the day slots for a trip window as JSON.
    Slots(SlotsArgs),
}

#[derive(Debug, Args)]
struct RunArgs {
    /// Plan document (.json or .json.gz).
    #[arg(long)]
    input: PathBuf,

    /// Output directory for scores.csv, recommendations.txt and summary.json.
    #[arg(long)]
    out: PathBuf,

    #[command(flatten)]
    thresholds: ThresholdArgs,

    /// Entries per list in the text report.
    #[arg(long, default_value_t = DEFAULT_TOP_N)]
    top: usize,
}

#[derive(Debug, Args, Default)]
struct ThresholdArgs {
    #[arg(long)]
    together_group_avg_min: Option<f64>,
    #[arg(long)]
    together_disagreement_max: Option<f64>,
    #[arg(long)]
    separate_family_avg_min: Option<f64>,
    #[arg(long)]
    separate_group_avg_max: Option<f64>,
    #[arg(long)]
    separate_disagreement_min: Option<f64>,
}

impl From<&ThresholdArgs> for ThresholdOverrides {
    fn from(args: &ThresholdArgs) -> Self {
        Self {
            together_group_avg_min: args.together_group_avg_min,
            together_disagreement_max: args.together_disagreement_max,
            separate_family_avg_min: args.separate_family_avg_min,
            separate_group_avg_max: args.separate_group_avg_max,
            separate_disagreement_min: args.separate_disagreement_min,
        }
    }
}

#[derive(Debug, Args)]
struct SlotsArgs {
    /// Arrival date, YYYY-MM-DD.
    #[arg(long)]
    start: NaiveDate,
    /// Departure date, YYYY-MM-DD.
    #[arg(long)]
    end: NaiveDate,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    if let Err(err) = run(cli.command) {
        tracing::error!("{err}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<(), String> {
    match command {
        Command::Run(args) => run_plan(&args),
        Command::Slots(args) => print_slots(&args),
    }
}

fn run_plan(args: &RunArgs) -> Result<(), String> {
    let plan = load_plan(&args.input).map_err(|e| e.to_string())?;
    let thresholds = plan
        .trip
        .thresholds
        .with_overrides(&ThresholdOverrides::from(&args.thresholds));
    log_completion(&plan);

    let scores = compute_scores(&plan.activities, &plan.families, &plan.members, &plan.ratings);
    let recommendations = classify_recommendations(&scores, &thresholds, &plan.families);
    tracing::info!(
        together = recommendations.together.len(),
        separate = recommendations.separate.len(),
        pairs = recommendations.pair_suggestions.len(),
        "classified activities"
    );

    let warnings = slot_warnings(
        &plan.schedule,
        &plan.trip.day_slots,
        &plan.family_availability,
    );
    for w in &warnings {
        tracing::warn!(
            date = %w.date,
            half = w.half.label(),
            activity = %w.activity_id,
            families = w.family_only.len(),
            "activity scheduled in a half-day some families keep to themselves"
        );
    }

    let input = Stage4Input {
        plan: &plan,
        scores: &scores,
        recommendations: &recommendations,
        thresholds,
        warnings: &warnings,
        top_n: args.top,
        tool_name: env!("CARGO_PKG_NAME").to_string(),
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
    };
    write_reports(&input, &args.out).map_err(|e| e.to_string())
}

fn print_slots(args: &SlotsArgs) -> Result<(), String> {
    let slots = generate_day_slots(args.start, args.end).map_err(|e| e.to_string())?;
    let json = serde_json::to_string_pretty(&slots).map_err(|e| e.to_string())?;
    println!("{json}");
    Ok(())
}

fn log_completion(plan: &TripPlan) {
    for member in &plan.members {
        tracing::debug!(
            member = %member.name,
            completion = plan.completion(&member.id),
            "rating completion (%)"
        );
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
