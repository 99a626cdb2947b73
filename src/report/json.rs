use serde::Serialize;

use crate::model::{ActivityId, ActivityScore, Thresholds};
use crate::pipeline::stage3_pairs::PairSuggestion;
use crate::schedule::SlotWarning;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Counts {
    pub activities: usize,
    pub families: usize,
    pub members: usize,
    pub ratings: usize,
    pub together: usize,
    pub separate: usize,
    pub pairs: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreEntry {
    pub id: ActivityId,
    pub name: String,
    pub group_average: f64,
    pub disagreement: f64,
    pub together_score: f64,
    pub separate_score: f64,
}

impl From<&ActivityScore> for ScoreEntry {
    fn from(s: &ActivityScore) -> Self {
        Self {
            id: s.activity.id.clone(),
            name: s.activity.name.clone(),
            group_average: s.group_average,
            disagreement: s.disagreement,
            together_score: s.together_score,
            separate_score: s.separate_score,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryData {
    pub tool: ToolMeta,
    pub thresholds: Thresholds,
    pub counts: Counts,
    pub together: Vec<ScoreEntry>,
    pub separate: Vec<ScoreEntry>,
    pub pair_suggestions: Vec<PairSuggestion>,
    pub slot_warnings: Vec<SlotWarning>,
}

pub fn render_summary_json(data: &SummaryData) -> serde_json::Result<String> {
    serde_json::to_string_pretty(data)
}
