use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::input::TripPlan;
use crate::model::{ActivityScore, Thresholds};
use crate::pipeline::stage2_classify::Recommendations;
use crate::report::ReportError;
use crate::report::csv::render_scores_csv;
use crate::report::json::{Counts, ScoreEntry, SummaryData, ToolMeta, render_summary_json};
use crate::report::text::{TextReportContext, render_recommendations_text};
use crate::schedule::SlotWarning;

pub const DEFAULT_TOP_N: usize = 8;

#[derive(Debug, Clone)]
pub struct Stage4Input<'a> {
    pub plan: &'a TripPlan,
    pub scores: &'a [ActivityScore],
    pub recommendations: &'a Recommendations<'a>,
    pub thresholds: Thresholds,
    pub warnings: &'a [SlotWarning],
    pub top_n: usize,
    pub tool_name: String,
    pub tool_version: String,
}

pub fn write_reports(input: &Stage4Input<'_>, out_dir: &Path) -> Result<(), ReportError> {
    fs::create_dir_all(out_dir)?;

    let scores_path = out_dir.join("scores.csv");
    write_text(&scores_path, &render_scores_csv(input.scores))?;

    let text_path = out_dir.join("recommendations.txt");
    write_text(&text_path, &render_recommendations_text(&text_context(input)))?;

    let summary_path = out_dir.join("summary.json");
    let json = render_summary_json(&build_summary(input))?;
    write_text(&summary_path, &json)?;

    tracing::info!(out_dir = %out_dir.display(), "wrote reports");
    Ok(())
}

fn text_context<'a>(input: &'a Stage4Input<'a>) -> TextReportContext<'a> {
    TextReportContext {
        trip_start: input.plan.trip.start_date,
        trip_end: input.plan.trip.end_date,
        together: &input.recommendations.together,
        separate: &input.recommendations.separate,
        pair_suggestions: &input.recommendations.pair_suggestions,
        activities: &input.plan.activities,
        day_slots: &input.plan.trip.day_slots,
        schedule: &input.plan.schedule,
        warnings: input.warnings,
        top_n: input.top_n,
    }
}

pub fn build_summary(input: &Stage4Input<'_>) -> SummaryData {
    let recs = input.recommendations;
    SummaryData {
        tool: ToolMeta {
            name: input.tool_name.clone(),
            version: input.tool_version.clone(),
        },
        thresholds: input.thresholds,
        counts: Counts {
            activities: input.scores.len(),
            families: input.plan.families.len(),
            members: input.plan.members.len(),
            ratings: input.plan.ratings.len(),
            together: recs.together.len(),
            separate: recs.separate.len(),
            pairs: recs.pair_suggestions.len(),
        },
        together: recs.together.iter().map(|s| ScoreEntry::from(*s)).collect(),
        separate: recs.separate.iter().map(|s| ScoreEntry::from(*s)).collect(),
        pair_suggestions: recs.pair_suggestions.clone(),
        slot_warnings: input.warnings.to_vec(),
    }
}

fn write_text(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(contents.as_bytes())?;
    w.write_all(b"\n")?;
    w.flush()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_report.rs"]
mod tests;
