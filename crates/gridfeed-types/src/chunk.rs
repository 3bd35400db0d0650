//! Calendar-bounded chunking of time ranges.

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::TimeRange;

/// Calendar unit used to partition a time range into API-compliant chunks.
///
/// Remote APIs cap the queryable span per call; splitting on calendar
/// boundaries keeps every chunk within that cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    /// No splitting; the whole range goes out as one chunk.
    #[default]
    None,
    /// Split on day starts, for endpoints capped at one day per call.
    Day,
    /// Split on year starts, for endpoints capped at one year per call.
    Year,
}

impl Granularity {
    /// Returns the granularity as a string identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Day => "day",
            Self::Year => "year",
        }
    }

    /// Returns all available granularities.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::None, Self::Day, Self::Year]
    }

    /// Partitions `range` into ordered, contiguous chunks bounded by this
    /// calendar unit.
    ///
    /// Boundaries are the calendar starts falling inside the range plus
    /// the range's own bounds, deduplicated and paired up. The first chunk
    /// starts at `range.start`, the last ends at `range.end`, and adjacent
    /// chunks share exactly one boundary instant. A final partial chunk is
    /// always emitted; a degenerate single-instant range yields exactly
    /// one chunk.
    #[must_use]
    pub fn split(self, range: TimeRange) -> Vec<Chunk> {
        if self == Self::None || range.is_instant() {
            return vec![Chunk { index: 0, range }];
        }

        let mut bounds = vec![range.start];
        match self {
            Self::Day => collect_day_starts(range, &mut bounds),
            Self::Year => collect_year_starts(range, &mut bounds),
            Self::None => {}
        }
        bounds.push(range.end);
        bounds.sort_unstable();
        bounds.dedup();

        bounds
            .windows(2)
            .enumerate()
            .map(|(index, pair)| Chunk {
                index,
                range: TimeRange::from_parts(pair[0], pair[1]),
            })
            .collect()
    }
}

impl std::fmt::Display for Granularity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Granularity {
    type Err = GranularityParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(Self::None),
            "day" | "daily" => Ok(Self::Day),
            "year" | "yearly" => Ok(Self::Year),
            _ => Err(GranularityParseError(s.to_string())),
        }
    }
}

/// Error returned when parsing an invalid granularity string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GranularityParseError(String);

impl std::fmt::Display for GranularityParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid granularity '{}', expected one of: none, day, year",
            self.0
        )
    }
}

impl std::error::Error for GranularityParseError {}

/// One sub-interval of a requested time range, tagged with its position
/// in the covering sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk {
    /// Zero-based position in the chunk sequence.
    pub index: usize,
    /// The interval this chunk covers.
    pub range: TimeRange,
}

/// Pushes every day start inside `[range.start, range.end]`.
fn collect_day_starts(range: TimeRange, bounds: &mut Vec<DateTime<Utc>>) {
    let mut date = range.start.date_naive();
    loop {
        let boundary = Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN));
        if boundary > range.end {
            break;
        }
        if boundary >= range.start {
            bounds.push(boundary);
        }
        match date.succ_opt() {
            Some(next) => date = next,
            None => break,
        }
    }
}

/// Pushes every year start inside `[range.start, range.end]`.
fn collect_year_starts(range: TimeRange, bounds: &mut Vec<DateTime<Utc>>) {
    for year in range.start.year()..=range.end.year() {
        let Some(date) = NaiveDate::from_ymd_opt(year, 1, 1) else {
            continue;
        };
        let boundary = Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN));
        if boundary >= range.start && boundary <= range.end {
            bounds.push(boundary);
        }
    }
}
