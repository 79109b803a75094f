//! Tests for half-open interval semantics and the busy set.

use chrono::{DateTime, Utc};
use timemint_engine::{BusySet, TimeInterval};

fn dt(s: &str) -> DateTime<Utc> {
    s.parse().unwrap()
}

fn iv(start: &str, end: &str) -> TimeInterval {
    TimeInterval::new(dt(start), dt(end)).unwrap()
}

#[test]
fn construction_rejects_empty_and_inverted_ranges() {
    let t = dt("2026-03-02T09:00:00Z");
    assert!(TimeInterval::new(t, t).is_none());
    assert!(TimeInterval::new(dt("2026-03-02T10:00:00Z"), t).is_none());
    assert!(TimeInterval::new(t, dt("2026-03-02T09:01:00Z")).is_some());
}

#[test]
fn overlap_is_half_open() {
    let a = iv("2026-03-02T09:00:00Z", "2026-03-02T10:00:00Z");
    let contained = iv("2026-03-02T09:15:00Z", "2026-03-02T09:45:00Z");
    let straddling = iv("2026-03-02T09:30:00Z", "2026-03-02T10:30:00Z");
    let touching_after = iv("2026-03-02T10:00:00Z", "2026-03-02T10:30:00Z");
    let touching_before = iv("2026-03-02T08:30:00Z", "2026-03-02T09:00:00Z");
    let disjoint = iv("2026-03-02T11:00:00Z", "2026-03-02T12:00:00Z");

    assert!(a.overlaps(&contained));
    assert!(contained.overlaps(&a));
    assert!(a.overlaps(&straddling));
    assert!(!a.overlaps(&touching_after));
    assert!(!a.overlaps(&touching_before));
    assert!(!a.overlaps(&disjoint));
}

#[test]
fn duration_is_reported_in_minutes() {
    assert_eq!(
        iv("2026-03-02T09:00:00Z", "2026-03-02T09:30:00Z").duration_minutes(),
        30
    );
}

#[test]
fn busy_set_sorts_its_input() {
    let set = BusySet::new(vec![
        iv("2026-03-02T15:00:00Z", "2026-03-02T16:00:00Z"),
        iv("2026-03-02T09:00:00Z", "2026-03-02T10:00:00Z"),
    ]);

    assert_eq!(set.intervals()[0].start, dt("2026-03-02T09:00:00Z"));
    assert_eq!(set.intervals()[1].start, dt("2026-03-02T15:00:00Z"));
}

#[test]
fn is_free_agrees_with_a_linear_scan() {
    let intervals = vec![
        iv("2026-03-02T09:00:00Z", "2026-03-02T10:00:00Z"),
        iv("2026-03-02T13:00:00Z", "2026-03-02T14:30:00Z"),
        iv("2026-03-02T13:30:00Z", "2026-03-02T15:00:00Z"),
    ];
    let set = BusySet::new(intervals.clone());

    let candidates = [
        iv("2026-03-02T08:30:00Z", "2026-03-02T09:00:00Z"),
        iv("2026-03-02T09:30:00Z", "2026-03-02T10:00:00Z"),
        iv("2026-03-02T10:00:00Z", "2026-03-02T10:30:00Z"),
        iv("2026-03-02T12:30:00Z", "2026-03-02T13:00:00Z"),
        iv("2026-03-02T14:30:00Z", "2026-03-02T15:00:00Z"),
        iv("2026-03-02T15:00:00Z", "2026-03-02T15:30:00Z"),
    ];

    for candidate in &candidates {
        let linear = !intervals.iter().any(|b| b.overlaps(candidate));
        assert_eq!(
            set.is_free(candidate),
            linear,
            "disagreement for candidate {:?}",
            candidate
        );
    }
}

#[test]
fn empty_set_is_always_free() {
    let set = BusySet::empty();
    assert!(set.is_empty());
    assert!(set.is_free(&iv("2026-03-02T09:00:00Z", "2026-03-02T09:30:00Z")));
}
