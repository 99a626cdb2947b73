//! Scoring and together/separate classification of shared-trip activities.
//!
//! The engine ([`pipeline::stage1_scores::compute_scores`] and
//! [`pipeline::stage2_classify::classify_recommendations`]) is pure: it reads
//! activities, families, members and a ratings table and returns fresh
//! results. Loading plan documents, the trip calendar and report writing sit
//! around it.

pub mod input;
pub mod logging;
pub mod model;
pub mod pipeline;
pub mod report;
pub mod schedule;

pub use model::{
    Activity, ActivityId, ActivityScore, Family, FamilyId, Member, MemberId, RatingsTable,
    Thresholds,
};
pub use pipeline::stage1_scores::compute_scores;
pub use pipeline::stage2_classify::{Recommendations, classify_recommendations};
pub use pipeline::stage3_pairs::PairSuggestion;
