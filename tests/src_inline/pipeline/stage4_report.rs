use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;
use crate::input::parse_plan_str;
use crate::pipeline::stage1_scores::compute_scores;
use crate::pipeline::stage2_classify::classify_recommendations;
use crate::schedule::slot_warnings;

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("trip_affinity_report_{}_{}", std::process::id(), id));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

const PLAN: &str = r#"{
  "version": 1,
  "families": [{ "id": "f1", "name": "Smith" }, { "id": "f2", "name": "Jones" }],
  "members": [
    { "id": "m1", "familyId": "f1", "name": "Ann" },
    { "id": "m2", "familyId": "f2", "name": "Bob" }
  ],
  "activities": [
    { "id": "a1", "name": "Beach", "category": "Outdoor", "tags": [], "togetherFriendly": true },
    { "id": "a2", "name": "Deep \"sea\" fishing", "category": "Niche", "tags": [], "togetherFriendly": false },
    { "id": "a3", "name": "Cows", "category": "Food", "tags": [], "togetherFriendly": true }
  ],
  "ratings": {
    "m1:a1": 4, "m2:a1": 4,
    "m1:a2": 5, "m2:a2": 1,
    "m1:a3": 5, "m2:a3": 4
  },
  "familyAvailability": {
    "f2": [
      { "dateISO": "2026-06-13", "amGroupTime": null, "pmGroupTime": true },
      { "dateISO": "2026-06-14", "amGroupTime": true, "pmGroupTime": false }
    ]
  },
  "schedule": {
    "2026-06-13": { "pmActivityId": "a1" },
    "2026-06-14": { "amActivityId": "zzz", "pmActivityId": "a3" }
  },
  "trip": {
    "startDate": "2026-06-13",
    "endDate": "2026-06-14",
    "daySlots": [
      { "dateISO": "2026-06-13", "amEnabled": false, "pmEnabled": true },
      { "dateISO": "2026-06-14", "amEnabled": true, "pmEnabled": false }
    ],
    "thresholds": {}
  }
}"#;

#[test]
fn test_write_reports() {
    let plan = parse_plan_str(PLAN).unwrap();
    let thresholds = plan.trip.thresholds;
    let scores = compute_scores(&plan.activities, &plan.families, &plan.members, &plan.ratings);
    let recs = classify_recommendations(&scores, &thresholds, &plan.families);
    let warnings = slot_warnings(&plan.schedule, &plan.trip.day_slots, &plan.family_availability);
    // PM on the departure day is disabled, so the family-only answer is moot
    assert!(warnings.is_empty());

    let input = Stage4Input {
        plan: &plan,
        scores: &scores,
        recommendations: &recs,
        thresholds,
        warnings: &warnings,
        top_n: DEFAULT_TOP_N,
        tool_name: "trip-affinity".to_string(),
        tool_version: "0.0.0".to_string(),
    };
    let dir = make_temp_dir();
    write_reports(&input, &dir).unwrap();

    let csv = std::fs::read_to_string(dir.join("scores.csv")).unwrap();
    let lines = csv.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 4);
    assert_eq!(
        lines[0],
        "Activity,Category,Group Average,Disagreement,Together Score,Separate Score"
    );
    assert_eq!(lines[1], "\"Beach\",\"Outdoor\",4.00,0.00,4.25,0.00");
    assert_eq!(
        lines[2],
        "\"Deep \"\"sea\"\" fishing\",\"Niche\",3.00,2.00,0.60,4.00"
    );

    let text = std::fs::read_to_string(dir.join("recommendations.txt")).unwrap();
    assert!(text.starts_with("Trip window: Jun 13 (PM) to Jun 14 (AM), 2026"));
    assert!(text.contains("Best for all together:\n1. Beach (group avg 4.00)\n2. Cows (group avg 4.50)"));
    assert!(text.contains("Better as separate family time:\n1. Deep \"sea\" fishing (disagreement 2.00)"));
    assert!(text.contains("Smith + Jones: Beach, Cows, Deep \"sea\" fishing"));
    assert!(text.contains("Jun 13 - AM: Disabled, PM: Beach"));
    assert!(text.contains("Jun 14 - AM: Unknown, PM: Disabled"));

    let summary: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(dir.join("summary.json")).unwrap())
            .unwrap();
    assert_eq!(summary["tool"]["name"], "trip-affinity");
    assert_eq!(summary["counts"]["activities"], 3);
    assert_eq!(summary["counts"]["together"], 2);
    assert_eq!(summary["counts"]["separate"], 1);
    assert_eq!(summary["counts"]["pairs"], 1);
    assert_eq!(summary["together"][0]["id"], "a1");
    assert_eq!(summary["thresholds"]["togetherGroupAvgMin"], 3.5);
    assert_eq!(summary["pairSuggestions"][0]["familyA"], "Smith");
}
