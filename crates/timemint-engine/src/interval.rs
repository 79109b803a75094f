//! Half-open time intervals and the busy-interval set.
//!
//! Both candidate slots and busy periods are `[start, end)` ranges. Two
//! intervals overlap iff `a.start < b.end && b.start < a.end` -- an interval
//! ending exactly where another starts does NOT overlap it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A half-open `[start, end)` time range. `start < end` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeInterval {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeInterval {
    /// Build an interval, returning `None` for an empty or inverted range.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Option<Self> {
        (start < end).then_some(Self { start, end })
    }

    /// Standard half-open intersection test. Touching boundaries
    /// (`self.end == other.start` or vice versa) are not overlaps.
    pub fn overlaps(&self, other: &TimeInterval) -> bool {
        self.start < other.end && other.start < self.end
    }

    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

/// The set of already-occupied intervals candidates are tested against.
///
/// Built once per generation call from external event data and treated as an
/// immutable snapshot. Intervals are kept sorted by start so the free test can
/// stop at the first busy interval beginning at or after the candidate's end;
/// semantics are identical to a linear scan over an unsorted list.
#[derive(Debug, Clone, Default)]
pub struct BusySet {
    intervals: Vec<TimeInterval>,
}

impl BusySet {
    pub fn new(mut intervals: Vec<TimeInterval>) -> Self {
        intervals.sort_by_key(|iv| (iv.start, iv.end));
        Self { intervals }
    }

    /// No busy intervals at all -- the "simulated empty calendar" mode, under
    /// which every candidate passes the overlap test.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    pub fn intervals(&self) -> &[TimeInterval] {
        &self.intervals
    }

    /// True when `candidate` overlaps none of the busy intervals.
    pub fn is_free(&self, candidate: &TimeInterval) -> bool {
        for busy in &self.intervals {
            if busy.start >= candidate.end {
                // Sorted by start: no later interval can reach the candidate.
                break;
            }
            if busy.overlaps(candidate) {
                return false;
            }
        }
        true
    }
}

impl FromIterator<TimeInterval> for BusySet {
    fn from_iter<I: IntoIterator<Item = TimeInterval>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
