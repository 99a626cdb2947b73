use crate::model::stats::{clip01, mean, population_std_dev};
use crate::model::{Activity, ActivityScore, Family, FamilyAverage, Member, RatingsTable};

/// Closed rating scale. Disagreement is normalized by half its width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingScale {
    pub min: f64,
    pub max: f64,
}

impl RatingScale {
    pub fn half_width(&self) -> f64 {
        (self.max - self.min) / 2.0
    }
}

impl Default for RatingScale {
    fn default() -> Self {
        Self { min: 0.0, max: 5.0 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreParams {
    pub scale: RatingScale,
    pub together_friendly_bonus: f64,
}

impl Default for ScoreParams {
    fn default() -> Self {
        Self {
            scale: RatingScale::default(),
            together_friendly_bonus: 0.25,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Stage1Inputs<'a> {
    pub activities: &'a [Activity],
    pub families: &'a [Family],
    pub members: &'a [Member],
    pub ratings: &'a RatingsTable,
    pub params: ScoreParams,
}

pub fn compute_scores(
    activities: &[Activity],
    families: &[Family],
    members: &[Member],
    ratings: &RatingsTable,
) -> Vec<ActivityScore> {
    run_stage1(&Stage1Inputs {
        activities,
        families,
        members,
        ratings,
        params: ScoreParams::default(),
    })
}

pub fn run_stage1(inputs: &Stage1Inputs<'_>) -> Vec<ActivityScore> {
    let members_by_family = inputs
        .families
        .iter()
        .map(|family| {
            inputs
                .members
                .iter()
                .filter(|m| m.family_id == family.id)
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    let out = inputs
        .activities
        .iter()
        .map(|activity| score_activity(inputs, activity, &members_by_family))
        .collect::<Vec<_>>();

    tracing::debug!(
        activities = out.len(),
        families = inputs.families.len(),
        members = inputs.members.len(),
        ratings = inputs.ratings.len(),
        "scored activities"
    );
    out
}

fn score_activity(
    inputs: &Stage1Inputs<'_>,
    activity: &Activity,
    members_by_family: &[Vec<&Member>],
) -> ActivityScore {
    let member_ratings = inputs
        .members
        .iter()
        .filter_map(|m| inputs.ratings.get(&m.id, &activity.id))
        .collect::<Vec<_>>();

    let group_average = mean(&member_ratings);

    let family_averages = inputs
        .families
        .iter()
        .zip(members_by_family)
        .map(|(family, family_members)| {
            let family_ratings = family_members
                .iter()
                .filter_map(|m| inputs.ratings.get(&m.id, &activity.id))
                .collect::<Vec<_>>();
            FamilyAverage {
                family_id: family.id.clone(),
                average: mean(&family_ratings),
            }
        })
        .collect::<Vec<_>>();

    let disagreement = population_std_dev(&member_ratings);
    let normalized_disagreement =
        normalize_disagreement(disagreement, inputs.params.scale.half_width());

    let bonus = if activity.together_friendly {
        inputs.params.together_friendly_bonus
    } else {
        0.0
    };
    let together_score = group_average * (1.0 - normalized_disagreement) + bonus;

    let mut score = ActivityScore {
        activity: activity.clone(),
        rating_count: member_ratings.len(),
        group_average,
        family_averages,
        disagreement,
        normalized_disagreement,
        together_score,
        separate_score: 0.0,
    };
    score.separate_score = (score.max_family_average() - group_average) + disagreement;
    score
}

/// `min(disagreement / half_width, 1)`, held in [0, 1].
pub fn normalize_disagreement(disagreement: f64, half_width: f64) -> f64 {
    if half_width <= 0.0 {
        return if disagreement > 0.0 { 1.0 } else { 0.0 };
    }
    clip01(disagreement / half_width)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_scores.rs"]
mod tests;
