//! Day-by-day trip calendar: half-day slots, per-family group-time answers and
//! activity assignments.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{ActivityId, Family, FamilyId};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("invalid trip range: start {start} is after end {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },
    #[error("trip range overflows the calendar after {0}")]
    Overflow(NaiveDate),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Half {
    Am,
    Pm,
}

impl Half {
    pub fn label(self) -> &'static str {
        match self {
            Half::Am => "AM",
            Half::Pm => "PM",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySlot {
    #[serde(rename = "dateISO")]
    pub date: NaiveDate,
    pub am_enabled: bool,
    pub pm_enabled: bool,
}

impl DaySlot {
    pub fn enabled(&self, half: Half) -> bool {
        match half {
            Half::Am => self.am_enabled,
            Half::Pm => self.pm_enabled,
        }
    }
}

/// A family's answer per half-day: `Some(true)` group time, `Some(false)`
/// family-only, `None` when the half is disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyAvailabilityDay {
    #[serde(rename = "dateISO")]
    pub date: NaiveDate,
    pub am_group_time: Option<bool>,
    pub pm_group_time: Option<bool>,
}

impl FamilyAvailabilityDay {
    pub fn group_time(&self, half: Half) -> Option<bool> {
        match half {
            Half::Am => self.am_group_time,
            Half::Pm => self.pm_group_time,
        }
    }
}

pub type FamilyAvailability = BTreeMap<FamilyId, Vec<FamilyAvailabilityDay>>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotAssignment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub am_activity_id: Option<ActivityId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pm_activity_id: Option<ActivityId>,
}

impl SlotAssignment {
    pub fn get(&self, half: Half) -> Option<&ActivityId> {
        match half {
            Half::Am => self.am_activity_id.as_ref(),
            Half::Pm => self.pm_activity_id.as_ref(),
        }
    }
}

pub type Schedule = BTreeMap<NaiveDate, SlotAssignment>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotWarning {
    #[serde(rename = "dateISO")]
    pub date: NaiveDate,
    pub half: Half,
    pub activity_id: ActivityId,
    pub family_only: Vec<FamilyId>,
}

/// One slot per calendar day, inclusive. Arrival morning and departure
/// afternoon are disabled.
pub fn generate_day_slots(start: NaiveDate, end: NaiveDate) -> Result<Vec<DaySlot>, ScheduleError> {
    if start > end {
        return Err(ScheduleError::InvalidRange { start, end });
    }
    let mut out = Vec::new();
    let mut current = start;
    loop {
        out.push(DaySlot {
            date: current,
            am_enabled: current != start,
            pm_enabled: current != end,
        });
        if current == end {
            break;
        }
        current = current
            .succ_opt()
            .ok_or(ScheduleError::Overflow(current))?;
    }
    Ok(out)
}

/// Rebuilds availability rows for every family against `slots`, keeping
/// existing answers for enabled halves and defaulting new ones to group time.
pub fn sync_family_availability(
    families: &[Family],
    slots: &[DaySlot],
    existing: &FamilyAvailability,
) -> FamilyAvailability {
    let mut next = existing.clone();
    for family in families {
        let by_date = existing
            .get(&family.id)
            .map(|days| days.iter().map(|d| (d.date, *d)).collect::<BTreeMap<_, _>>())
            .unwrap_or_default();
        let rows = slots
            .iter()
            .map(|slot| {
                let current = by_date.get(&slot.date);
                FamilyAvailabilityDay {
                    date: slot.date,
                    am_group_time: slot
                        .am_enabled
                        .then(|| current.and_then(|c| c.am_group_time).unwrap_or(true)),
                    pm_group_time: slot
                        .pm_enabled
                        .then(|| current.and_then(|c| c.pm_group_time).unwrap_or(true)),
                }
            })
            .collect();
        next.insert(family.id.clone(), rows);
    }
    next
}

/// Drops assignments on dates outside `slots` and on disabled halves.
pub fn prune_schedule(schedule: &Schedule, slots: &[DaySlot]) -> Schedule {
    let mut out = Schedule::new();
    for slot in slots {
        let Some(row) = schedule.get(&slot.date) else {
            continue;
        };
        out.insert(
            slot.date,
            SlotAssignment {
                am_activity_id: row.am_activity_id.clone().filter(|_| slot.am_enabled),
                pm_activity_id: row.pm_activity_id.clone().filter(|_| slot.pm_enabled),
            },
        );
    }
    out
}

/// Assigned, enabled half-days that at least one family marked family-only.
pub fn slot_warnings(
    schedule: &Schedule,
    slots: &[DaySlot],
    availability: &FamilyAvailability,
) -> Vec<SlotWarning> {
    let mut out = Vec::new();
    for slot in slots {
        let Some(row) = schedule.get(&slot.date) else {
            continue;
        };
        for half in [Half::Am, Half::Pm] {
            if !slot.enabled(half) {
                continue;
            }
            let Some(activity_id) = row.get(half) else {
                continue;
            };
            let family_only = availability
                .iter()
                .filter(|(_, days)| {
                    days.iter()
                        .find(|d| d.date == slot.date)
                        .and_then(|d| d.group_time(half))
                        == Some(false)
                })
                .map(|(family_id, _)| family_id.clone())
                .collect::<Vec<_>>();
            if !family_only.is_empty() {
                out.push(SlotWarning {
                    date: slot.date,
                    half,
                    activity_id: activity_id.clone(),
                    family_only,
                });
            }
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/schedule/tests.rs"]
mod tests;
