use std::cmp::Ordering;

use serde::Serialize;

use crate::model::{ActivityScore, Family};

pub const PAIR_TOP_N: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedActivity {
    pub activity: String,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PairSuggestion {
    pub family_a: String,
    pub family_b: String,
    pub top_activities: Vec<RankedActivity>,
}

/// Top activities for every unordered family pair, first family earlier in input order.
pub fn suggest_pairs(scores: &[ActivityScore], families: &[Family]) -> Vec<PairSuggestion> {
    let mut out = Vec::with_capacity(families.len() * families.len().saturating_sub(1) / 2);
    for (idx, f1) in families.iter().enumerate() {
        for f2 in &families[idx + 1..] {
            out.push(PairSuggestion {
                family_a: f1.name.clone(),
                family_b: f2.name.clone(),
                top_activities: rank_for_pair(scores, f1, f2, PAIR_TOP_N),
            });
        }
    }
    out
}

pub fn pair_score(score: &ActivityScore, f1: &Family, f2: &Family) -> f64 {
    let a = score.family_average(&f1.id).unwrap_or(0.0);
    let b = score.family_average(&f2.id).unwrap_or(0.0);
    (a + b) / 2.0 - score.disagreement
}

fn rank_for_pair(
    scores: &[ActivityScore],
    f1: &Family,
    f2: &Family,
    top_n: usize,
) -> Vec<RankedActivity> {
    let mut ranked = scores
        .iter()
        .map(|s| RankedActivity {
            activity: s.activity.name.clone(),
            score: pair_score(s, f1, f2),
        })
        .collect::<Vec<_>>();
    ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    ranked.truncate(top_n);
    ranked
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_pairs.rs"]
mod tests;
