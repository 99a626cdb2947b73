use super::*;

fn key(m: &str, a: &str) -> (MemberId, ActivityId) {
    (MemberId::from(m), ActivityId::from(a))
}

#[test]
fn test_absent_is_unrated() {
    let table = RatingsTable::new();
    let (m, a) = key("m1", "a1");
    assert_eq!(table.get(&m, &a), None);
    assert!(table.is_empty());
}

#[test]
fn test_set_and_overwrite() {
    let mut table = RatingsTable::new();
    let (m, a) = key("m1", "a1");
    assert!(table.set(m.clone(), a.clone(), 3.0));
    assert!(table.set(m.clone(), a.clone(), 0.0));
    assert_eq!(table.get(&m, &a), Some(0.0));
    assert_eq!(table.len(), 1);
}

#[test]
fn test_non_finite_refused() {
    let mut table = RatingsTable::new();
    let (m, a) = key("m1", "a1");
    assert!(!table.set(m.clone(), a.clone(), f64::NAN));
    assert!(!table.set(m.clone(), a.clone(), f64::INFINITY));
    assert_eq!(table.get(&m, &a), None);
    assert!(table.is_empty());
}

#[test]
fn test_keys_do_not_collide() {
    // "a:b" + "c" and "a" + "b:c" are distinct pairs
    let table: RatingsTable = [
        (MemberId::from("a:b"), ActivityId::from("c"), 1.0),
        (MemberId::from("a"), ActivityId::from("b:c"), 2.0),
    ]
    .into_iter()
    .collect();
    assert_eq!(table.len(), 2);
    assert_eq!(
        table.get(&MemberId::from("a:b"), &ActivityId::from("c")),
        Some(1.0)
    );
    assert_eq!(
        table.get(&MemberId::from("a"), &ActivityId::from("b:c")),
        Some(2.0)
    );
}
