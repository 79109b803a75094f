//! Busy-interval extraction from raw calendar event records.
//!
//! Normalizes provider event payloads into [`TimeInterval`]s. Only events
//! carrying a concrete `start.dateTime` and `end.dateTime` count as busy;
//! all-day events (a bare `date` field), open-ended events, and records with
//! unparsable or inverted timestamps are dropped silently. An event that fails
//! the filter is treated as absent, never as an error.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

use crate::error::Result;
use crate::interval::{BusySet, TimeInterval};

/// A raw calendar event in the shape providers ship it (Google Calendar v3
/// field names). Every field is optional; the extractor decides what counts.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawEvent {
    pub summary: Option<String>,
    pub start: Option<EventTime>,
    pub end: Option<EventTime>,
}

/// An event boundary: either a timed instant (`dateTime`, RFC 3339) or an
/// all-day marker (`date`, `YYYY-MM-DD`).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EventTime {
    #[serde(rename = "dateTime")]
    pub date_time: Option<String>,
    pub date: Option<String>,
}

impl EventTime {
    /// The timed boundary as a UTC instant, if present and parsable.
    fn instant(&self) -> Option<DateTime<Utc>> {
        let raw = self.date_time.as_deref()?;
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

/// Normalize raw events into a busy set.
///
/// Filter predicate: the event has concrete start and end date-times, both
/// parse as RFC 3339, and the range is non-empty. Everything else is "not a
/// timed commitment" and is skipped. Pure transform, no side effects.
pub fn extract_busy_intervals(events: &[RawEvent]) -> BusySet {
    events
        .iter()
        .filter_map(|ev| {
            let start = ev.start.as_ref()?.instant()?;
            let end = ev.end.as_ref()?.instant()?;
            TimeInterval::new(start, end)
        })
        .collect()
}

/// Parse an event payload from JSON.
///
/// Accepts either a bare array of events or the provider list envelope
/// `{"items": [...]}`. An envelope without `items` yields an empty list.
pub fn events_from_json(json: &str) -> Result<Vec<RawEvent>> {
    let value: Value = serde_json::from_str(json)?;
    let items = match value {
        Value::Object(mut map) => map.remove("items").unwrap_or(Value::Array(Vec::new())),
        other => other,
    };
    Ok(serde_json::from_value(items)?)
}
