use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value;

use crate::input::InputError;
use crate::model::{
    Activity, ActivityId, Family, Member, MemberId, RatingsTable, ThresholdOverrides, Thresholds,
};
use crate::schedule::{
    DaySlot, FamilyAvailability, Schedule, generate_day_slots, prune_schedule,
    sync_family_availability,
};

pub const PLAN_VERSION: u64 = 1;

/// Planner export document as written to disk. Ratings stay untyped here so
/// that non-numeric values can be dropped instead of failing the whole load.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanDocument {
    #[serde(default)]
    pub version: Option<Value>,
    #[serde(default)]
    pub families: Vec<Family>,
    #[serde(default)]
    pub members: Vec<Member>,
    #[serde(default)]
    pub activities: Vec<Activity>,
    #[serde(default)]
    pub ratings: BTreeMap<String, Value>,
    #[serde(default)]
    pub family_availability: FamilyAvailability,
    #[serde(default)]
    pub schedule: Schedule,
    #[serde(default)]
    pub trip: Option<TripDocument>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripDocument {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub day_slots: Vec<DaySlot>,
    #[serde(default)]
    pub thresholds: ThresholdOverrides,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TripSettings {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub day_slots: Vec<DaySlot>,
    pub thresholds: Thresholds,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TripPlan {
    pub families: Vec<Family>,
    pub members: Vec<Member>,
    pub activities: Vec<Activity>,
    pub ratings: RatingsTable,
    pub family_availability: FamilyAvailability,
    pub schedule: Schedule,
    pub trip: TripSettings,
}

pub fn parse_plan_str(text: &str) -> Result<TripPlan, InputError> {
    let document: PlanDocument = serde_json::from_str(text)?;
    TripPlan::from_document(document)
}

impl TripPlan {
    pub fn from_document(document: PlanDocument) -> Result<Self, InputError> {
        check_version(document.version.as_ref())?;

        let trip = document
            .trip
            .ok_or_else(|| InputError::InvalidInput("missing trip settings".to_string()))?;
        let day_slots = if trip.day_slots.is_empty() {
            tracing::warn!("plan has no day slots; regenerating from trip dates");
            generate_day_slots(trip.start_date, trip.end_date)?
        } else {
            trip.day_slots
        };

        let ratings = convert_ratings(&document.ratings, &document.members, &document.activities);
        let family_availability = sync_family_availability(
            &document.families,
            &day_slots,
            &document.family_availability,
        );
        let schedule = prune_schedule(&document.schedule, &day_slots);
        if schedule.len() != document.schedule.len() {
            tracing::warn!(
                dropped = document.schedule.len() - schedule.len(),
                "schedule rows outside the trip window were dropped"
            );
        }

        Ok(Self {
            families: document.families,
            members: document.members,
            activities: document.activities,
            ratings,
            family_availability,
            schedule,
            trip: TripSettings {
                start_date: trip.start_date,
                end_date: trip.end_date,
                day_slots,
                thresholds: Thresholds::default_v1().with_overrides(&trip.thresholds),
            },
        })
    }

    pub fn activity(&self, id: &ActivityId) -> Option<&Activity> {
        self.activities.iter().find(|a| &a.id == id)
    }

    /// Share of activities the member has rated, as a rounded percentage.
    pub fn completion(&self, member: &MemberId) -> u32 {
        if self.activities.is_empty() {
            return 0;
        }
        let rated = self
            .activities
            .iter()
            .filter(|a| self.ratings.get(member, &a.id).is_some())
            .count();
        (rated as f64 / self.activities.len() as f64 * 100.0).round() as u32
    }
}

fn check_version(version: Option<&Value>) -> Result<(), InputError> {
    match version {
        Some(v) if v.as_u64() == Some(PLAN_VERSION) => Ok(()),
        Some(v) => Err(InputError::UnsupportedVersion(v.to_string())),
        None => Err(InputError::UnsupportedVersion("missing".to_string())),
    }
}

/// Splits `"memberId:activityId"` keys at the first colon. Non-numeric values
/// and malformed keys are dropped.
fn convert_ratings(
    raw: &BTreeMap<String, Value>,
    members: &[Member],
    activities: &[Activity],
) -> RatingsTable {
    let mut table = RatingsTable::new();
    let mut dropped = 0usize;
    let mut orphaned = 0usize;

    for (key, value) in raw {
        let Some((member, activity)) = key.split_once(':') else {
            dropped += 1;
            continue;
        };
        let Some(rating) = value.as_f64() else {
            dropped += 1;
            continue;
        };
        let member = MemberId::from(member);
        let activity = ActivityId::from(activity);
        if !members.iter().any(|m| m.id == member) || !activities.iter().any(|a| a.id == activity)
        {
            orphaned += 1;
        }
        if !table.set(member, activity, rating) {
            dropped += 1;
        }
    }

    if dropped > 0 {
        tracing::warn!(dropped, "dropped malformed or non-numeric ratings");
    }
    if orphaned > 0 {
        tracing::warn!(
            orphaned,
            "ratings reference members or activities missing from the roster"
        );
    }
    table
}
