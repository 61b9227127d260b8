// File: crates/likeplot-core/tests/rollup.rs
// Purpose: Validate the five-number-summary rollup: worked examples, errors and ordering invariants.

use likeplot_core::{rollup, rollup_by, GroupSummary, Record, StatsError};
use proptest::prelude::*;

fn records(rows: &[(&str, f64)]) -> Vec<Record> {
    rows.iter().map(|&(g, v)| Record::new(g, v)).collect()
}

#[test]
fn four_values_use_linear_interpolation() {
    let r = rollup(&records(&[("A", 3.0), ("A", 1.0), ("A", 4.0), ("A", 2.0)])).expect("rollup");
    let s = r.get("A").expect("group A");
    assert_eq!(s.min, 1.0);
    assert_eq!(s.q1, 1.75);
    assert_eq!(s.median, 2.5);
    assert_eq!(s.q3, 3.25);
    assert_eq!(s.max, 4.0);
    assert_eq!(s.iqr, 1.5);
}

#[test]
fn singleton_group_collapses() {
    let r = rollup(&records(&[("solo", 42.0)])).expect("rollup");
    let s = r.get("solo").expect("group");
    assert_eq!(
        *s,
        GroupSummary { min: 42.0, q1: 42.0, median: 42.0, q3: 42.0, iqr: 0.0, max: 42.0 }
    );
}

#[test]
fn groups_are_partitioned_by_key() {
    let r = rollup(&records(&[("A", 1.0), ("A", 2.0), ("B", 10.0)])).expect("rollup");
    assert_eq!(r.len(), 2);

    let a = r.get("A").expect("A");
    assert_eq!((a.min, a.median, a.max), (1.0, 1.5, 2.0));
    assert_eq!((a.q1, a.q3), (1.25, 1.75));

    let b = r.get("B").expect("B");
    assert_eq!((b.min, b.q1, b.median, b.q3, b.max, b.iqr), (10.0, 10.0, 10.0, 10.0, 10.0, 0.0));
}

#[test]
fn keys_keep_first_seen_order() {
    let r = rollup(&records(&[("45-54", 1.0), ("18-24", 2.0), ("45-54", 3.0), ("25-34", 4.0)])).expect("rollup");
    assert_eq!(r.keys().collect::<Vec<_>>(), vec!["45-54", "18-24", "25-34"]);
    assert_eq!(r.max_value(), Some(4.0));
    assert_eq!(r.min_value(), Some(1.0));
}

#[test]
fn empty_input_is_rejected() {
    assert_eq!(rollup(&[]), Err(StatsError::EmptyInput));
}

#[test]
fn non_finite_measurement_fails_whole_rollup() {
    let err = rollup(&records(&[("A", 1.0), ("B", f64::NAN), ("A", 2.0)])).unwrap_err();
    match err {
        StatsError::NonFinite { group, value } => {
            assert_eq!(group, "B");
            assert!(value.is_nan());
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(matches!(
        rollup(&records(&[("A", f64::INFINITY)])),
        Err(StatsError::NonFinite { .. })
    ));
}

#[test]
fn rollup_by_custom_key_and_measure() {
    struct Post { platform: &'static str, likes: u32 }
    let posts = [
        Post { platform: "Instagram", likes: 10 },
        Post { platform: "Twitter", likes: 4 },
        Post { platform: "Instagram", likes: 30 },
    ];
    let r = rollup_by(&posts, |p| p.platform, |p| p.likes as f64).expect("rollup");
    assert_eq!(r.get("Instagram").map(|s| s.median), Some(20.0));
    assert_eq!(r.get("Twitter").map(|s| s.iqr), Some(0.0));
    assert!(r.get("Facebook").is_none());
}

fn group_rows() -> impl Strategy<Value = Vec<(u8, f64)>> {
    prop::collection::vec((0u8..4, -1.0e6f64..1.0e6), 1..60)
}

proptest! {
    #[test]
    fn summaries_are_ordered(rows in group_rows()) {
        let recs: Vec<Record> = rows.iter().map(|&(g, v)| Record::new(format!("g{g}"), v)).collect();
        let r = rollup(&recs).unwrap();
        for (_, s) in r.iter() {
            prop_assert!(s.min <= s.q1);
            prop_assert!(s.q1 <= s.median);
            prop_assert!(s.median <= s.q3);
            prop_assert!(s.q3 <= s.max);
            prop_assert_eq!(s.iqr, s.q3 - s.q1);
            prop_assert!(s.iqr >= 0.0);
        }
    }

    #[test]
    fn every_key_is_materialized_once(rows in group_rows()) {
        let recs: Vec<Record> = rows.iter().map(|&(g, v)| Record::new(format!("g{g}"), v)).collect();
        let r = rollup(&recs).unwrap();
        let mut keys: Vec<String> = recs.iter().map(|rec| rec.group.clone()).collect();
        keys.sort();
        keys.dedup();
        prop_assert_eq!(r.len(), keys.len());
        for k in &keys {
            prop_assert!(r.get(k).is_some());
        }
    }

    #[test]
    fn shuffled_input_gives_identical_summaries(rows in group_rows(), seed in any::<u64>()) {
        let recs: Vec<Record> = rows.iter().map(|&(g, v)| Record::new(format!("g{g}"), v)).collect();
        let mut shuffled = recs.clone();
        // deterministic Fisher-Yates driven by a xorshift stream
        let mut state = seed | 1;
        for i in (1..shuffled.len()).rev() {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            shuffled.swap(i, (state % (i as u64 + 1)) as usize);
        }
        let a = rollup(&recs).unwrap();
        let b = rollup(&shuffled).unwrap();
        for (k, s) in a.iter() {
            prop_assert_eq!(Some(s), b.get(k));
        }
        prop_assert_eq!(a.len(), b.len());
    }
}
