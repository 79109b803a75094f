//! The availability-slot walk.
//!
//! Two traversal strategies over one contract. [`generate`] walks the horizon
//! day by day, hour by hour, at fixed minute offsets -- the shape a recurring
//! working-hours template suggests. [`scan`] steps a cursor through the raw
//! timeline in duration-sized increments from a grid-floored anchor. Both
//! produce chronologically ascending, capped output whose slots start strictly
//! after `now`, end at or before the horizon, fall on allowed weekdays, and
//! overlap no busy interval.
//!
//! The two full-stop conditions (horizon exceeded, cap reached) are checked
//! explicitly before each candidate is evaluated, so the dual-termination
//! contract is visible in the driver loop rather than buried in loop labels.

use chrono::{DateTime, Datelike, Duration, LocalResult, NaiveDate, NaiveDateTime, TimeZone, Timelike, Utc};
use chrono_tz::Tz;

use crate::error::Result;
use crate::interval::{BusySet, TimeInterval};
use crate::template::AvailabilityTemplate;

/// A bookable slot produced by the generator. Immutable once produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Slot {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    /// Optional display label. The generator leaves this unset; callers may
    /// attach one before rendering.
    pub summary: Option<String>,
}

impl Slot {
    fn from_interval(iv: TimeInterval) -> Self {
        Self {
            start: iv.start,
            end: iv.end,
            summary: None,
        }
    }
}

/// Resolve a venue-local wall time to a UTC instant.
///
/// Ambiguous wall times (DST fall-back) resolve to the earlier instant; wall
/// times erased by a DST gap produce no instant at all.
fn resolve_local(tz: Tz, naive: NaiveDateTime) -> Option<DateTime<Utc>> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Some(dt.with_timezone(&Utc)),
        LocalResult::Ambiguous(earlier, _) => Some(earlier.with_timezone(&Utc)),
        LocalResult::None => None,
    }
}

/// Candidate slots in contract order: days ascending, hours ascending within
/// a day, minute offsets (`0, d, 2d, .. < 60`) ascending within an hour.
///
/// Days whose weekday is filtered out are skipped wholesale. A candidate that
/// would not complete by `end_hour:00` on its own venue-local day is skipped,
/// as is a wall time erased by a DST gap.
struct Candidates<'a> {
    template: &'a AvailabilityTemplate,
    last_day: NaiveDate,
    day: NaiveDate,
    hour: u32,
    offset: u32,
    exhausted: bool,
}

impl<'a> Candidates<'a> {
    fn new(
        now: DateTime<Utc>,
        horizon_end: DateTime<Utc>,
        template: &'a AvailabilityTemplate,
    ) -> Self {
        let tz = template.timezone;
        Self {
            template,
            last_day: horizon_end.with_timezone(&tz).date_naive(),
            day: now.with_timezone(&tz).date_naive(),
            hour: template.start_hour,
            offset: 0,
            exhausted: false,
        }
    }

    fn advance_day(&mut self) {
        match self.day.succ_opt() {
            Some(next) => self.day = next,
            // End of chrono's calendar; no horizon reaches this far.
            None => self.exhausted = true,
        }
        self.hour = self.template.start_hour;
        self.offset = 0;
    }
}

impl Iterator for Candidates<'_> {
    type Item = TimeInterval;

    fn next(&mut self) -> Option<TimeInterval> {
        let duration = Duration::minutes(i64::from(self.template.slot_duration_minutes));
        loop {
            if self.exhausted || self.day > self.last_day {
                return None;
            }
            if !self.template.booking_days.allows(self.day.weekday()) {
                self.advance_day();
                continue;
            }
            if self.hour >= self.template.end_hour {
                self.advance_day();
                continue;
            }
            if self.offset >= 60 {
                self.hour += 1;
                self.offset = 0;
                continue;
            }

            let day = self.day;
            let hour = self.hour;
            let minute = self.offset;
            self.offset += self.template.slot_duration_minutes;

            let Some(start_naive) = day.and_hms_opt(hour, minute, 0) else {
                continue;
            };
            // The whole slot must complete by end_hour:00 on its own day.
            let Some(close) = day.and_hms_opt(self.template.end_hour, 0, 0) else {
                continue;
            };
            if start_naive + duration > close {
                continue;
            }
            let Some(start) = resolve_local(self.template.timezone, start_naive) else {
                continue;
            };
            return Some(TimeInterval {
                start,
                end: start + duration,
            });
        }
    }
}

/// Generate available slots with the nested day/hour/minute walk.
///
/// Candidates are visited in chronological order and filtered: a slot must
/// start strictly after `now`, end at or before `horizon_end`, and overlap no
/// busy interval. The walk stops entirely -- not per day -- as soon as a
/// candidate's end passes the horizon or the slot cap is reached.
///
/// An empty `busy` set degenerates to unconditional acceptance; an empty
/// allowed-weekday set yields an empty result. Neither is an error.
///
/// # Errors
/// Returns [`crate::SlotError::InvalidTemplate`] or
/// [`crate::SlotError::InvalidHorizon`] when the template fails validation;
/// no iteration happens in that case.
pub fn generate(
    now: DateTime<Utc>,
    horizon_end: DateTime<Utc>,
    template: &AvailabilityTemplate,
    busy: &BusySet,
) -> Result<Vec<Slot>> {
    template.validate(now, horizon_end)?;

    let mut slots = Vec::new();
    for candidate in Candidates::new(now, horizon_end, template) {
        // Full-stop conditions, checked before the candidate is evaluated.
        if candidate.end > horizon_end {
            // Nothing later in the walk can end earlier, so stop outright.
            break;
        }
        if slots.len() >= template.max_slots {
            break;
        }

        if candidate.start <= now {
            // Strict: a slot beginning exactly at `now` is already gone.
            continue;
        }
        if !busy.is_free(&candidate) {
            continue;
        }
        slots.push(Slot::from_interval(candidate));
    }
    Ok(slots)
}

/// Generate available slots with the continuous-scan walk.
///
/// The cursor starts at `now` plus five minutes of lead time, floored onto
/// the slot-duration grid on the venue clock, and advances in duration-sized
/// steps. Candidates that cross a venue-local midnight or fall outside the
/// `[start_hour, end_hour]` window are rejected; past, overlap, horizon and
/// cap rules match [`generate`].
///
/// # Errors
/// Same template validation as [`generate`].
pub fn scan(
    now: DateTime<Utc>,
    horizon_end: DateTime<Utc>,
    template: &AvailabilityTemplate,
    busy: &BusySet,
) -> Result<Vec<Slot>> {
    template.validate(now, horizon_end)?;

    let tz = template.timezone;
    let step = Duration::minutes(i64::from(template.slot_duration_minutes));
    let grid = template.slot_duration_minutes.min(60);

    // Anchor: five minutes of lead time, floored onto the grid.
    let lead = now + Duration::minutes(5);
    let lead_local = lead.with_timezone(&tz);
    let mut cursor = lead_local
        .date_naive()
        .and_hms_opt(
            lead_local.hour(),
            lead_local.minute() - lead_local.minute() % grid,
            0,
        )
        .and_then(|naive| resolve_local(tz, naive))
        .unwrap_or(lead);

    let mut slots = Vec::new();
    loop {
        let candidate = TimeInterval {
            start: cursor,
            end: cursor + step,
        };
        // Full-stop conditions, checked before the candidate is evaluated.
        if candidate.end > horizon_end {
            break;
        }
        if slots.len() >= template.max_slots {
            break;
        }
        cursor = cursor + step;

        if candidate.start <= now {
            continue;
        }
        let local_start = candidate.start.with_timezone(&tz);
        let local_end = candidate.end.with_timezone(&tz);
        if !template.booking_days.allows(local_start.weekday()) {
            continue;
        }
        // The slot must sit inside one venue-local day...
        if local_end.date_naive() != local_start.date_naive() {
            continue;
        }
        // ...start within working hours...
        if local_start.hour() < template.start_hour {
            continue;
        }
        // ...and complete at or before end_hour:00.
        let past_close = local_end.hour() > template.end_hour
            || (local_end.hour() == template.end_hour
                && (local_end.minute() > 0 || local_end.second() > 0));
        if past_close {
            continue;
        }
        if !busy.is_free(&candidate) {
            continue;
        }
        slots.push(Slot::from_interval(candidate));
    }
    Ok(slots)
}
