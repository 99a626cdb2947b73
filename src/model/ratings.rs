use std::collections::BTreeMap;

use crate::model::activity::{ActivityId, MemberId};

/// Ratings keyed by member, then activity. An absent entry means "not yet rated".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RatingsTable {
    by_member: BTreeMap<MemberId, BTreeMap<ActivityId, f64>>,
    len: usize,
}

impl RatingsTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a rating. Non-finite values are not ratings and are refused.
    pub fn set(&mut self, member: MemberId, activity: ActivityId, rating: f64) -> bool {
        if !rating.is_finite() {
            return false;
        }
        let previous = self
            .by_member
            .entry(member)
            .or_default()
            .insert(activity, rating);
        if previous.is_none() {
            self.len += 1;
        }
        true
    }

    pub fn get(&self, member: &MemberId, activity: &ActivityId) -> Option<f64> {
        self.by_member.get(member)?.get(activity).copied()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl FromIterator<(MemberId, ActivityId, f64)> for RatingsTable {
    fn from_iter<T: IntoIterator<Item = (MemberId, ActivityId, f64)>>(iter: T) -> Self {
        let mut table = RatingsTable::new();
        for (member, activity, rating) in iter {
            table.set(member, activity, rating);
        }
        table
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/ratings.rs"]
mod tests;
