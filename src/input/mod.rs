use std::path::Path;

use thiserror::Error;

pub mod plan;
pub mod reader;

pub use plan::{TripPlan, TripSettings, parse_plan_str};
use reader::open_maybe_gz;

use crate::schedule::ScheduleError;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported plan version: {0}")]
    UnsupportedVersion(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("invalid trip calendar: {0}")]
    Schedule(#[from] ScheduleError),
}

/// Loads a version-1 plan document, optionally gzip-compressed.
pub fn load_plan(path: &Path) -> Result<TripPlan, InputError> {
    let reader = open_maybe_gz(path)?;
    let document: plan::PlanDocument = serde_json::from_reader(reader)?;
    let plan = TripPlan::from_document(document)?;
    tracing::info!(
        path = %path.display(),
        activities = plan.activities.len(),
        families = plan.families.len(),
        members = plan.members.len(),
        ratings = plan.ratings.len(),
        "loaded plan"
    );
    Ok(plan)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
