//! Parsing of slot start times and explicit date/time-of-day extraction.
//!
//! The server sends slot starts either as a naive local timestamp
//! (`2024-06-01T09:00`) or as RFC 3339 with an offset. Date and time are read
//! from the wall clock as written; nothing is converted to the browser's
//! zone. `utc_parts` keeps the UTC split available for callers that need it.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use thiserror::Error;

const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized slot time: {0:?}")]
pub struct SlotTimeError(pub String);

/// A parsed slot start
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotTime {
    /// No offset given; the office's wall clock
    Naive(NaiveDateTime),
    /// Explicit offset from the server
    Zoned(DateTime<FixedOffset>),
}

impl SlotTime {
    pub fn parse(raw: &str) -> Result<Self, SlotTimeError> {
        let trimmed = raw.trim();
        if let Ok(zoned) = DateTime::parse_from_rfc3339(trimmed) {
            return Ok(SlotTime::Zoned(zoned));
        }
        NAIVE_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
            .map(SlotTime::Naive)
            .ok_or_else(|| SlotTimeError(raw.to_string()))
    }

    /// Date and time as written by the server
    pub fn wall_clock(&self) -> NaiveDateTime {
        match self {
            SlotTime::Naive(naive) => *naive,
            SlotTime::Zoned(zoned) => zoned.naive_local(),
        }
    }

    pub fn calendar_date(&self) -> NaiveDate {
        self.wall_clock().date()
    }

    pub fn time_of_day(&self) -> NaiveTime {
        self.wall_clock().time()
    }

    /// Date and time after conversion to UTC. Naive times are interpreted in
    /// `local_offset` first.
    pub fn utc_parts(&self, local_offset: FixedOffset) -> (NaiveDate, NaiveTime) {
        let utc = match self {
            SlotTime::Naive(naive) => *naive - local_offset,
            SlotTime::Zoned(zoned) => zoned.naive_utc(),
        };
        (utc.date(), utc.time())
    }

    /// The UTC date and time when they differ from the wall clock, i.e. when
    /// a UTC-based reading would book a different date or hour
    pub fn utc_shift(&self, local_offset: FixedOffset) -> Option<(NaiveDate, NaiveTime)> {
        let utc = self.utc_parts(local_offset);
        let wall = (self.calendar_date(), self.time_of_day());
        (utc != wall).then_some(utc)
    }
}

/// YYYY-MM-DD
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// HH:MM, 24-hour clock
pub fn format_hhmm(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}
