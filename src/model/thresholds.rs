use serde::{Deserialize, Serialize};

/// Classification cutoffs. Applied literally; contradictory values are allowed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Thresholds {
    pub together_group_avg_min: f64,
    pub together_disagreement_max: f64,
    pub separate_family_avg_min: f64,
    pub separate_group_avg_max: f64,
    pub separate_disagreement_min: f64,
}

/// Partially specified thresholds, as stored in plan documents or given on the
/// command line. Unset fields fall back to the layer below.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThresholdOverrides {
    pub together_group_avg_min: Option<f64>,
    pub together_disagreement_max: Option<f64>,
    pub separate_family_avg_min: Option<f64>,
    pub separate_group_avg_max: Option<f64>,
    pub separate_disagreement_min: Option<f64>,
}

impl Thresholds {
    pub fn default_v1() -> Self {
        Self {
            together_group_avg_min: 3.5,
            together_disagreement_max: 1.0,
            separate_family_avg_min: 4.0,
            separate_group_avg_max: 3.0,
            separate_disagreement_min: 1.5,
        }
    }

    pub fn with_overrides(self, o: &ThresholdOverrides) -> Self {
        Self {
            together_group_avg_min: o
                .together_group_avg_min
                .unwrap_or(self.together_group_avg_min),
            together_disagreement_max: o
                .together_disagreement_max
                .unwrap_or(self.together_disagreement_max),
            separate_family_avg_min: o
                .separate_family_avg_min
                .unwrap_or(self.separate_family_avg_min),
            separate_group_avg_max: o
                .separate_group_avg_max
                .unwrap_or(self.separate_group_avg_max),
            separate_disagreement_min: o
                .separate_disagreement_min
                .unwrap_or(self.separate_disagreement_min),
        }
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self::default_v1()
    }
}
