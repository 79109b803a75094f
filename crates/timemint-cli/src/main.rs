//! `timemint` CLI — availability-slot generation from calendar event exports.
//!
//! ## Usage
//!
//! ```sh
//! # Compute open slots from a Google Calendar events export (stdin → stdout)
//! cat events.json | timemint slots
//!
//! # From file to file, with an explicit clock and a one-week horizon
//! timemint slots -i events.json -o slots.json --now 2026-03-02T08:00:00Z --horizon-days 7
//!
//! # Simulated empty calendar (no events source at all)
//! timemint slots --empty-calendar --max-slots 5
//!
//! # Weekend venue in New York, hour-long slots
//! timemint slots -i events.json --days weekends --duration 60 --timezone America/New_York
//!
//! # Continuous-scan traversal instead of the day/hour walk
//! timemint slots -i events.json --scan
//!
//! # Show the busy intervals extracted from an export
//! timemint busy -i events.json
//! ```
//!
//! Output is a JSON array of `{start, end}` pairs in seconds since the epoch,
//! ready for a booking front end to consume.

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Utc};
use chrono_tz::Tz;
use clap::{Parser, Subcommand, ValueEnum};
use std::io::{self, Read};
use timemint_engine::{
    events_from_json, extract_busy_intervals, generate, scan, to_wire, AvailabilityTemplate,
    BookingDays, BusySet, WireSlot,
};

#[derive(Parser)]
#[command(
    name = "timemint",
    version,
    about = "TimeMint availability CLI — bookable slots from calendar events"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate open booking slots from a calendar event export
    Slots {
        /// Input events JSON (reads from stdin if omitted)
        #[arg(short, long, conflicts_with = "empty_calendar")]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Assume a calendar with no events instead of reading input
        #[arg(long)]
        empty_calendar: bool,
        /// Clock override, RFC 3339 (defaults to the system clock)
        #[arg(long)]
        now: Option<String>,
        /// Forward window, in days from now
        #[arg(long, default_value_t = 14)]
        horizon_days: u32,
        /// First bookable hour of day, venue-local
        #[arg(long, default_value_t = 9)]
        start_hour: u32,
        /// Slots must complete at or before this hour, venue-local
        #[arg(long, default_value_t = 17)]
        end_hour: u32,
        /// Slot length in minutes
        #[arg(long, default_value_t = 30)]
        duration: u32,
        /// Which days of the week are bookable
        #[arg(long, value_enum, default_value_t = DaysArg::Weekdays)]
        days: DaysArg,
        /// Maximum number of slots to return
        #[arg(long, default_value_t = 10)]
        max_slots: usize,
        /// Venue IANA timezone (e.g. "Europe/Berlin")
        #[arg(long, default_value = "UTC")]
        timezone: String,
        /// Use the continuous-scan traversal instead of the day/hour walk
        #[arg(long)]
        scan: bool,
    },
    /// Show the busy intervals extracted from a calendar event export
    Busy {
        /// Input events JSON (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DaysArg {
    Weekdays,
    Weekends,
    All,
}

impl From<DaysArg> for BookingDays {
    fn from(arg: DaysArg) -> Self {
        match arg {
            DaysArg::Weekdays => BookingDays::Weekdays,
            DaysArg::Weekends => BookingDays::Weekends,
            DaysArg::All => BookingDays::All,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Slots {
            input,
            output,
            empty_calendar,
            now,
            horizon_days,
            start_hour,
            end_hour,
            duration,
            days,
            max_slots,
            timezone,
            scan: use_scan,
        } => {
            let now = parse_now(now.as_deref())?;
            let horizon_end = now + Duration::days(i64::from(horizon_days));
            let template = AvailabilityTemplate {
                start_hour,
                end_hour,
                slot_duration_minutes: duration,
                booking_days: days.into(),
                max_slots,
                timezone: parse_timezone(&timezone)?,
            };

            let busy = if empty_calendar {
                BusySet::empty()
            } else {
                let json = read_input(input.as_deref())?;
                let events =
                    events_from_json(&json).context("Failed to parse calendar events JSON")?;
                extract_busy_intervals(&events)
            };

            let slots = if use_scan {
                scan(now, horizon_end, &template, &busy)
            } else {
                generate(now, horizon_end, &template, &busy)
            }
            .context("Failed to generate availability slots")?;

            let rendered = serde_json::to_string_pretty(&to_wire(&slots))?;
            write_output(output.as_deref(), &rendered)?;
        }
        Commands::Busy { input, output } => {
            let json = read_input(input.as_deref())?;
            let events = events_from_json(&json).context("Failed to parse calendar events JSON")?;
            let busy = extract_busy_intervals(&events);
            let wire: Vec<WireSlot> = busy.intervals().iter().map(WireSlot::from).collect();
            let rendered = serde_json::to_string_pretty(&wire)?;
            write_output(output.as_deref(), &rendered)?;
        }
    }

    Ok(())
}

/// Resolve the clock for the request: an explicit RFC 3339 override, or the
/// system clock. The engine itself never reads a clock.
fn parse_now(raw: Option<&str>) -> Result<DateTime<Utc>> {
    match raw {
        Some(s) => {
            let parsed = DateTime::parse_from_rfc3339(s)
                .with_context(|| format!("Invalid --now value: '{}' (expected RFC 3339)", s))?;
            Ok(parsed.with_timezone(&Utc))
        }
        None => Ok(Utc::now()),
    }
}

fn parse_timezone(name: &str) -> Result<Tz> {
    name.parse::<Tz>()
        .map_err(|_| anyhow::anyhow!("Unknown timezone: '{}' (expected an IANA name)", name))
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
