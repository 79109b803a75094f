//! # timemint-engine
//!
//! Deterministic availability-slot generation for booking flows.
//!
//! Given a time horizon, a working-hours template, a day-of-week filter, a
//! slot duration, and a set of already-occupied intervals, the engine produces
//! an ordered, bounded list of open slots that overlap no busy interval and
//! never lie in the past. The computation is pure and synchronous: the caller
//! supplies `now` and the horizon, so identical inputs always re-derive
//! identical output.
//!
//! ## Quick start
//!
//! ```rust
//! use chrono::{Duration, TimeZone, Utc};
//! use timemint_engine::{generate, AvailabilityTemplate, BusySet, TimeInterval};
//!
//! // Monday morning, one existing meeting from 09:00 to 10:00.
//! let now = Utc.with_ymd_and_hms(2026, 3, 2, 8, 0, 0).unwrap();
//! let horizon_end = now + Duration::days(14);
//! let busy = BusySet::new(vec![TimeInterval::new(
//!     Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).unwrap(),
//!     Utc.with_ymd_and_hms(2026, 3, 2, 10, 0, 0).unwrap(),
//! )
//! .unwrap()]);
//!
//! let template = AvailabilityTemplate {
//!     max_slots: 3,
//!     ..Default::default()
//! };
//! let slots = generate(now, horizon_end, &template, &busy).unwrap();
//!
//! assert_eq!(slots.len(), 3);
//! assert_eq!(
//!     slots[0].start,
//!     Utc.with_ymd_and_hms(2026, 3, 2, 10, 0, 0).unwrap()
//! );
//! ```
//!
//! ## Modules
//!
//! - [`interval`] — half-open `[start, end)` intervals and the busy set
//! - [`busy`] — raw calendar events → busy intervals
//! - [`template`] — working-hours template and day-of-week filter
//! - [`generator`] — the candidate walk (two traversal strategies)
//! - [`wire`] — epoch-second boundary representation
//! - [`error`] — error types

pub mod busy;
pub mod error;
pub mod generator;
pub mod interval;
pub mod template;
pub mod wire;

pub use busy::{events_from_json, extract_busy_intervals, RawEvent};
pub use error::SlotError;
pub use generator::{generate, scan, Slot};
pub use interval::{BusySet, TimeInterval};
pub use template::{AvailabilityTemplate, BookingDays};
pub use wire::{to_wire, WireSlot};
