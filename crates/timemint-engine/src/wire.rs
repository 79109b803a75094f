//! Wire representation: slots as whole seconds since the Unix epoch.
//!
//! The boundary format is an array of `{start, end}` integer pairs, suitable
//! for direct JSON serialization. Sub-second precision is discarded on the way
//! out; slots are defined on minute boundaries, so nothing is lost.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};
use crate::generator::Slot;
use crate::interval::TimeInterval;

/// A slot (or busy interval) as it crosses the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireSlot {
    /// Seconds since the Unix epoch.
    pub start: i64,
    /// Seconds since the Unix epoch.
    pub end: i64,
}

impl From<&Slot> for WireSlot {
    fn from(slot: &Slot) -> Self {
        Self {
            start: slot.start.timestamp(),
            end: slot.end.timestamp(),
        }
    }
}

impl From<&TimeInterval> for WireSlot {
    fn from(iv: &TimeInterval) -> Self {
        Self {
            start: iv.start.timestamp(),
            end: iv.end.timestamp(),
        }
    }
}

impl WireSlot {
    /// Convert back to a half-open interval.
    ///
    /// # Errors
    /// Returns `SlotError::InvalidWireSlot` for timestamps chrono cannot
    /// represent or for an empty/inverted range.
    pub fn to_interval(&self) -> Result<TimeInterval> {
        let start = from_epoch(self.start)?;
        let end = from_epoch(self.end)?;
        TimeInterval::new(start, end).ok_or_else(|| {
            SlotError::InvalidWireSlot(format!(
                "start {} is not before end {}",
                self.start, self.end
            ))
        })
    }
}

fn from_epoch(secs: i64) -> Result<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp(secs, 0)
        .ok_or_else(|| SlotError::InvalidWireSlot(format!("timestamp {} out of range", secs)))
}

/// Serialize a generated slot list to its wire form, in order.
pub fn to_wire(slots: &[Slot]) -> Vec<WireSlot> {
    slots.iter().map(WireSlot::from).collect()
}
