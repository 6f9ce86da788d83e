//! Clock Core
//!
//! Running clock seeded from the server-rendered timestamp.
//!
//! The clock is a logical counter: parsed once from the seed, then advanced
//! by exactly one second per tick. It is never re-read from the system
//! clock, so a timer that fires late cannot make the display jump.

pub mod ambient;

pub use ambient::Ambient;

use chrono::{DateTime, Duration, FixedOffset, NaiveDateTime};
use thiserror::Error;

/// Failure to initialize the running clock from the page-provided seed.
#[derive(Debug, Error)]
pub enum ClockError {
    /// The host page has no server-time element.
    #[error("server time element not found in page")]
    MissingSeed,
    /// The seed text did not parse as an ISO-8601 instant.
    #[error("invalid server time {0:?}: {1}")]
    InvalidSeed(String, chrono::ParseError),
}

/// The running clock value. Advances one second per tick, nothing else.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunningClock(DateTime<FixedOffset>);

impl RunningClock {
    /// Parse the server seed. The seed's own offset is kept (falling back
    /// to UTC when none is present), so the clock shows the server's wall
    /// time rather than the viewer's.
    pub fn from_iso8601(text: &str) -> Result<Self, ClockError> {
        let trimmed = text.trim();
        DateTime::parse_from_rfc3339(trimmed)
            .or_else(|e| {
                NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f")
                    .map(|naive| naive.and_utc().fixed_offset())
                    .map_err(|_| e)
            })
            .map(Self)
            .map_err(|e| ClockError::InvalidSeed(trimmed.to_string(), e))
    }

    /// The instant this clock currently reads.
    pub fn instant(&self) -> DateTime<FixedOffset> {
        self.0
    }

    /// The clock one second later.
    pub fn advanced(&self) -> Self {
        Self(self.0 + Duration::seconds(1))
    }
}

/// Display strings rendered for a single tick.
#[derive(Debug, Clone, PartialEq)]
pub struct ClockFrame {
    /// `HH:MM:SS`, 24-hour, zero-padded.
    pub time: String,
    /// Calendar `YYYY-MM-DD`.
    pub date: String,
    /// Abbreviated timezone label from the ambient environment.
    pub zone: String,
}

/// Format an instant as zero-padded 24-hour `HH:MM:SS`.
pub fn format_time(instant: DateTime<FixedOffset>) -> String {
    instant.format("%H:%M:%S").to_string()
}

/// Format an instant as calendar `YYYY-MM-DD`.
pub fn format_date(instant: DateTime<FixedOffset>) -> String {
    instant.format("%Y-%m-%d").to_string()
}

/// Render one frame and return the clock advanced by exactly one second.
pub fn tick(clock: RunningClock, ambient: &dyn Ambient) -> (ClockFrame, RunningClock) {
    let instant = clock.instant();
    let frame = ClockFrame {
        time: format_time(instant),
        date: format_date(instant),
        zone: ambient.short_timezone(),
    };
    (frame, clock.advanced())
}

#[cfg(test)]
mod tests {
    use super::ambient::FixedAmbient;
    use super::*;
    use chrono::Timelike;

    #[test]
    fn seed_parses_with_and_without_offset() {
        let with_offset = RunningClock::from_iso8601("2025-05-20T10:30:45+02:00").unwrap();
        assert_eq!(format_time(with_offset.instant()), "10:30:45");

        let bare = RunningClock::from_iso8601("2025-05-20T10:30:45").unwrap();
        assert_eq!(format_time(bare.instant()), "10:30:45");
    }

    #[test]
    fn seed_tolerates_surrounding_whitespace() {
        let clock = RunningClock::from_iso8601("  2025-05-20T10:30:45Z\n").unwrap();
        assert_eq!(format_date(clock.instant()), "2025-05-20");
    }

    #[test]
    fn invalid_seed_is_an_error() {
        assert!(RunningClock::from_iso8601("not a timestamp").is_err());
        assert!(RunningClock::from_iso8601("").is_err());
        assert!(RunningClock::from_iso8601("2025-13-40T99:99:99Z").is_err());
    }

    #[test]
    fn format_date_is_calendar_ymd() {
        let clock = RunningClock::from_iso8601("2025-05-20T10:30:45Z").unwrap();
        assert_eq!(format_date(clock.instant()), "2025-05-20");
    }

    #[test]
    fn format_date_zero_pads() {
        let clock = RunningClock::from_iso8601("2025-01-05T00:00:00Z").unwrap();
        assert_eq!(format_date(clock.instant()), "2025-01-05");
    }

    #[test]
    fn fixed_zone_is_never_empty() {
        let ambient = FixedAmbient::new("CET");
        assert!(!ambient.short_timezone().is_empty());
    }

    #[test]
    fn tick_renders_and_advances_one_second() {
        let clock = RunningClock::from_iso8601("2025-05-20T10:30:45Z").unwrap();
        let (frame, next) = tick(clock, &FixedAmbient::new("CET"));

        assert_eq!(frame.time, "10:30:45");
        assert_eq!(frame.date, "2025-05-20");
        assert!(!frame.zone.is_empty());
        assert_eq!(next.instant().second(), 46);
    }

    #[test]
    fn tick_rolls_seconds_into_minutes() {
        let clock = RunningClock::from_iso8601("2025-05-20T10:59:59Z").unwrap();
        let (_, next) = tick(clock, &FixedAmbient::new("CET"));
        assert_eq!(format_time(next.instant()), "11:00:00");
    }

    #[test]
    fn tick_rolls_midnight_into_the_next_date() {
        let clock = RunningClock::from_iso8601("2025-12-31T23:59:59Z").unwrap();
        let (_, next) = tick(clock, &FixedAmbient::new("CET"));
        assert_eq!(format_time(next.instant()), "00:00:00");
        assert_eq!(format_date(next.instant()), "2026-01-01");
    }

    #[test]
    fn clock_counts_ticks_and_never_resyncs() {
        let ambient = FixedAmbient::new("CET");
        let mut clock = RunningClock::from_iso8601("2025-05-20T10:30:45Z").unwrap();
        for _ in 0..120 {
            clock = tick(clock, &ambient).1;
        }
        assert_eq!(format_time(clock.instant()), "10:32:45");
    }
}
