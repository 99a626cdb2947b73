pub mod activity;
pub mod ratings;
pub mod scores;
pub mod stats;
pub mod thresholds;

pub use activity::{Activity, ActivityId, Family, FamilyId, Member, MemberId};
pub use ratings::RatingsTable;
pub use scores::{ActivityScore, FamilyAverage};
pub use thresholds::{ThresholdOverrides, Thresholds};
