use std::cmp::Ordering;

use crate::model::{ActivityScore, Family, Thresholds};
use crate::pipeline::stage3_pairs::{PairSuggestion, suggest_pairs};

#[derive(Debug, Clone)]
pub struct Recommendations<'a> {
    pub together: Vec<&'a ActivityScore>,
    pub separate: Vec<&'a ActivityScore>,
    pub pair_suggestions: Vec<PairSuggestion>,
}

pub fn classify_recommendations<'a>(
    scores: &'a [ActivityScore],
    thresholds: &Thresholds,
    families: &[Family],
) -> Recommendations<'a> {
    let together = rank_desc(
        scores.iter().filter(|s| is_together(s, thresholds)),
        |s| s.together_score,
    );
    let separate = rank_desc(
        scores.iter().filter(|s| is_separate(s, thresholds)),
        |s| s.separate_score,
    );
    let pair_suggestions = suggest_pairs(scores, families);

    tracing::debug!(
        together = together.len(),
        separate = separate.len(),
        pairs = pair_suggestions.len(),
        "classified activities"
    );

    Recommendations {
        together,
        separate,
        pair_suggestions,
    }
}

pub fn is_together(score: &ActivityScore, thresholds: &Thresholds) -> bool {
    score.group_average >= thresholds.together_group_avg_min
        && score.disagreement <= thresholds.together_disagreement_max
}

/// Either a single-family spike over a middling group, or raw disagreement.
pub fn is_separate(score: &ActivityScore, thresholds: &Thresholds) -> bool {
    let has_family_spike = score
        .family_averages
        .iter()
        .any(|f| f.average >= thresholds.separate_family_avg_min);
    let spike_rule = has_family_spike && score.group_average <= thresholds.separate_group_avg_max;
    let disagreement_rule = score.disagreement >= thresholds.separate_disagreement_min;
    spike_rule || disagreement_rule
}

// sort_by is stable: equal keys keep input order
fn rank_desc<'a, I, F>(items: I, key: F) -> Vec<&'a ActivityScore>
where
    I: Iterator<Item = &'a ActivityScore>,
    F: Fn(&ActivityScore) -> f64,
{
    let mut out = items.collect::<Vec<_>>();
    out.sort_by(|a, b| key(b).partial_cmp(&key(a)).unwrap_or(Ordering::Equal));
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_classify.rs"]
mod tests;
