use std::collections::BTreeSet;

use super::*;
use crate::model::{Activity, FamilyAverage, FamilyId};

fn score(name: &str, disagreement: f64, families: &[(&str, f64)]) -> ActivityScore {
    ActivityScore {
        activity: Activity::new(name.to_lowercase(), name, "Test"),
        rating_count: 0,
        group_average: 0.0,
        family_averages: families
            .iter()
            .map(|(f, avg)| FamilyAverage {
                family_id: FamilyId::from(*f),
                average: *avg,
            })
            .collect(),
        disagreement,
        normalized_disagreement: 0.0,
        together_score: 0.0,
        separate_score: 0.0,
    }
}

fn families(n: usize) -> Vec<Family> {
    (0..n)
        .map(|i| Family::new(format!("f{i}"), format!("Family {i}")))
        .collect()
}

#[test]
fn test_pair_count_and_order() {
    for n in 0..6 {
        let fams = families(n);
        let pairs = suggest_pairs(&[], &fams);
        assert_eq!(pairs.len(), n * n.saturating_sub(1) / 2);
        let unique = pairs
            .iter()
            .map(|p| (p.family_a.clone(), p.family_b.clone()))
            .collect::<BTreeSet<_>>();
        assert_eq!(unique.len(), pairs.len());
        assert!(pairs.iter().all(|p| p.family_a != p.family_b));
    }

    let pairs = suggest_pairs(&[], &families(3));
    let order = pairs
        .iter()
        .map(|p| format!("{}|{}", p.family_a, p.family_b))
        .collect::<Vec<_>>();
    assert_eq!(
        order,
        vec![
            "Family 0|Family 1",
            "Family 0|Family 2",
            "Family 1|Family 2"
        ]
    );
}

#[test]
fn test_pair_score_formula() {
    let fams = families(3);
    let s = score("Beach", 0.5, &[("f0", 4.0), ("f1", 3.0)]);
    assert_eq!(pair_score(&s, &fams[0], &fams[1]), 3.0);
    // f2 has no entry and counts as 0
    assert_eq!(pair_score(&s, &fams[0], &fams[2]), 1.5);
}

#[test]
fn test_top_three_with_stable_ties() {
    let fams = families(2);
    let scores = vec![
        score("A", 0.0, &[("f0", 2.0), ("f1", 2.0)]),
        score("B", 0.0, &[("f0", 5.0), ("f1", 5.0)]),
        score("C", 0.0, &[("f0", 2.0), ("f1", 2.0)]),
        score("D", 0.0, &[("f0", 2.0), ("f1", 2.0)]),
        score("E", 1.0, &[("f0", 4.0), ("f1", 4.0)]),
    ];
    let pairs = suggest_pairs(&scores, &fams);
    assert_eq!(pairs.len(), 1);
    let top = &pairs[0].top_activities;
    assert_eq!(top.len(), PAIR_TOP_N);
    let names = top.iter().map(|r| r.activity.as_str()).collect::<Vec<_>>();
    assert_eq!(names, vec!["B", "E", "A"]);
    assert_eq!(top[0].score, 5.0);
    assert_eq!(top[1].score, 3.0);
    assert_eq!(top[2].score, 2.0);
}

#[test]
fn test_fewer_activities_than_top_n() {
    let fams = families(2);
    let scores = vec![score("Only", 0.0, &[("f0", 1.0)])];
    let pairs = suggest_pairs(&scores, &fams);
    assert_eq!(pairs[0].top_activities.len(), 1);
    assert_eq!(pairs[0].top_activities[0].score, 0.5);
}
