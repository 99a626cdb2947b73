use serde::Serialize;

use crate::model::activity::{Activity, FamilyId};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyAverage {
    pub family_id: FamilyId,
    pub average: f64,
}

/// Derived per-activity statistics. Never persisted; recomputed on every call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityScore {
    pub activity: Activity,
    pub rating_count: usize,
    pub group_average: f64,
    /// One entry per input family, in input order. 0 when the family has no ratings.
    pub family_averages: Vec<FamilyAverage>,
    pub disagreement: f64,
    pub normalized_disagreement: f64,
    pub together_score: f64,
    pub separate_score: f64,
}

impl ActivityScore {
    pub fn family_average(&self, family: &FamilyId) -> Option<f64> {
        self.family_averages
            .iter()
            .find(|f| &f.family_id == family)
            .map(|f| f.average)
    }

    /// Highest strictly positive family average, 0 when none.
    pub fn max_family_average(&self) -> f64 {
        self.family_averages
            .iter()
            .map(|f| f.average)
            .filter(|&avg| avg > 0.0)
            .fold(0.0, f64::max)
    }
}
