//! The availability template: the recurring working-hours configuration a
//! generation request runs against.

use chrono::{DateTime, Utc, Weekday};
use chrono_tz::Tz;

use crate::error::{Result, SlotError};

/// Which days of the week are bookable.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BookingDays {
    /// Monday through Friday.
    #[default]
    Weekdays,
    /// Saturday and Sunday.
    Weekends,
    /// Every day.
    All,
    /// An explicit set. An empty set makes every result empty -- that is a
    /// valid configuration, not an error.
    Custom(Vec<Weekday>),
}

impl BookingDays {
    pub fn allows(&self, day: Weekday) -> bool {
        match self {
            BookingDays::Weekdays => !matches!(day, Weekday::Sat | Weekday::Sun),
            BookingDays::Weekends => matches!(day, Weekday::Sat | Weekday::Sun),
            BookingDays::All => true,
            BookingDays::Custom(days) => days.contains(&day),
        }
    }
}

/// Configuration for one generation request.
///
/// Hours are venue-local: a candidate slot starts at or after `start_hour` and
/// must fully complete at or before `end_hour:00` on the venue clock.
#[derive(Debug, Clone, PartialEq)]
pub struct AvailabilityTemplate {
    /// First bookable hour of day (0-23).
    pub start_hour: u32,
    /// Slots must complete at or before this hour (0-23, greater than
    /// `start_hour`).
    pub end_hour: u32,
    /// Length of each candidate slot, in minutes.
    pub slot_duration_minutes: u32,
    /// Day-of-week filter.
    pub booking_days: BookingDays,
    /// Cap on the number of returned slots.
    pub max_slots: usize,
    /// The venue's local clock.
    pub timezone: Tz,
}

impl Default for AvailabilityTemplate {
    /// The application defaults: 9 AM - 5 PM, 30-minute slots, weekdays,
    /// at most 10 slots, UTC venue clock.
    fn default() -> Self {
        Self {
            start_hour: 9,
            end_hour: 17,
            slot_duration_minutes: 30,
            booking_days: BookingDays::Weekdays,
            max_slots: 10,
            timezone: chrono_tz::UTC,
        }
    }
}

impl AvailabilityTemplate {
    /// Validate the template against the request window.
    ///
    /// Runs before any iteration begins; a rejected template never produces
    /// partial results.
    ///
    /// # Errors
    /// Returns `SlotError::InvalidTemplate` for a zero duration, an hour pair
    /// outside 0-23, `start_hour >= end_hour`, or a zero slot cap.
    /// Returns `SlotError::InvalidHorizon` when `horizon_end <= now`.
    pub fn validate(&self, now: DateTime<Utc>, horizon_end: DateTime<Utc>) -> Result<()> {
        if self.slot_duration_minutes == 0 {
            return Err(SlotError::InvalidTemplate(
                "slot duration must be at least one minute".to_string(),
            ));
        }
        if self.start_hour > 23 || self.end_hour > 23 {
            return Err(SlotError::InvalidTemplate(format!(
                "hours must be within 0-23 (got {}-{})",
                self.start_hour, self.end_hour
            )));
        }
        if self.start_hour >= self.end_hour {
            return Err(SlotError::InvalidTemplate(format!(
                "start hour {} must be before end hour {}",
                self.start_hour, self.end_hour
            )));
        }
        if self.max_slots == 0 {
            return Err(SlotError::InvalidTemplate(
                "max slots must be at least 1".to_string(),
            ));
        }
        if horizon_end <= now {
            return Err(SlotError::InvalidHorizon(format!(
                "horizon end {} is not after now {}",
                horizon_end, now
            )));
        }
        Ok(())
    }
}
