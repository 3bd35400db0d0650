//! Time ranges and hour-aligned bisection.

use chrono::{DateTime, NaiveDateTime, TimeDelta, TimeZone, Utc};

use crate::TimeRangeError;

/// A time interval for data retrieval.
///
/// Both bounds are UTC instants; the constructor converts zoned inputs
/// before validating that `start <= end`. Ranges are immutable once
/// constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TimeRange {
    /// Start instant (inclusive).
    pub start: DateTime<Utc>,
    /// End instant (inclusive).
    pub end: DateTime<Utc>,
}

impl TimeRange {
    /// Creates a new time range, validating that start <= end.
    ///
    /// Inputs in any timezone are normalized to UTC.
    ///
    /// # Errors
    ///
    /// Returns an error if start > end.
    pub fn new<Tz: TimeZone>(
        start: DateTime<Tz>,
        end: DateTime<Tz>,
    ) -> Result<Self, TimeRangeError> {
        let start = start.with_timezone(&Utc);
        let end = end.with_timezone(&Utc);
        if start > end {
            return Err(TimeRangeError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates a time range from zone-less timestamps, which are assumed
    /// to be UTC.
    ///
    /// # Errors
    ///
    /// Returns an error if start > end.
    pub fn from_naive(start: NaiveDateTime, end: NaiveDateTime) -> Result<Self, TimeRangeError> {
        Self::new(Utc.from_utc_datetime(&start), Utc.from_utc_datetime(&end))
    }

    /// Creates a range from bounds already known to be ordered.
    pub(crate) const fn from_parts(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Creates a degenerate range covering a single instant.
    #[must_use]
    pub fn instant<Tz: TimeZone>(at: DateTime<Tz>) -> Self {
        let at = at.with_timezone(&Utc);
        Self { start: at, end: at }
    }

    /// Returns the length of the range.
    #[must_use]
    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }

    /// Returns true if the range covers a single instant.
    #[must_use]
    pub fn is_instant(&self) -> bool {
        self.start == self.end
    }

    /// Returns true if the range contains the given instant.
    #[must_use]
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        at >= self.start && at <= self.end
    }

    /// Splits the range at its midpoint into two halves sharing one
    /// boundary instant.
    ///
    /// The midpoint is floored to the whole hour because the wire format
    /// carries hour precision; a finer split would serialize to the same
    /// request. When flooring lands on `start`, the next hour boundary is
    /// used instead. Returns `None` when no hour-aligned instant lies
    /// strictly inside the range, which is the stop condition for
    /// adaptive bisection.
    #[must_use]
    pub fn bisect(&self) -> Option<(Self, Self)> {
        let floored = floor_to_hour(self.start + self.duration() / 2);
        let mid = if floored > self.start {
            floored
        } else {
            floored + TimeDelta::hours(1)
        };
        if mid <= self.start || mid >= self.end {
            return None;
        }
        Some((
            Self::from_parts(self.start, mid),
            Self::from_parts(mid, self.end),
        ))
    }
}

impl std::fmt::Display for TimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

/// Floors an instant to the start of its hour.
fn floor_to_hour(at: DateTime<Utc>) -> DateTime<Utc> {
    let secs = at.timestamp();
    let floored = secs - secs.rem_euclid(3600);
    DateTime::from_timestamp(floored, 0).unwrap_or(at)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn utc(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    #[test]
    fn test_new_valid() {
        let range = TimeRange::new(utc(2020, 1, 1, 0), utc(2020, 6, 1, 0)).unwrap();
        assert_eq!(range.start, utc(2020, 1, 1, 0));
        assert_eq!(range.end, utc(2020, 6, 1, 0));
    }

    #[test]
    fn test_new_invalid() {
        let err = TimeRange::new(utc(2020, 6, 1, 0), utc(2020, 1, 1, 0)).unwrap_err();
        assert!(matches!(err, TimeRangeError::InvalidRange { .. }));
    }

    #[test]
    fn test_new_normalizes_to_utc() {
        let cet = FixedOffset::east_opt(3600).unwrap();
        let start = cet.with_ymd_and_hms(2020, 1, 1, 1, 0, 0).unwrap();
        let end = cet.with_ymd_and_hms(2020, 1, 2, 1, 0, 0).unwrap();
        let range = TimeRange::new(start, end).unwrap();
        assert_eq!(range.start, utc(2020, 1, 1, 0));
        assert_eq!(range.end, utc(2020, 1, 2, 0));
    }

    #[test]
    fn test_from_naive_assumes_utc() {
        let start = utc(2020, 1, 1, 0).naive_utc();
        let end = utc(2020, 1, 2, 0).naive_utc();
        let range = TimeRange::from_naive(start, end).unwrap();
        assert_eq!(range.start, utc(2020, 1, 1, 0));
        assert_eq!(range.end, utc(2020, 1, 2, 0));
    }

    #[test]
    fn test_instant() {
        let range = TimeRange::instant(utc(2020, 1, 1, 12));
        assert!(range.is_instant());
        assert_eq!(range.duration(), TimeDelta::zero());
    }

    #[test]
    fn test_bisect_shares_midpoint() {
        let range = TimeRange::new(utc(2020, 1, 1, 0), utc(2020, 1, 3, 0)).unwrap();
        let (left, right) = range.bisect().unwrap();
        assert_eq!(left.start, range.start);
        assert_eq!(left.end, right.start);
        assert_eq!(right.end, range.end);
        assert_eq!(left.end, utc(2020, 1, 2, 0));
    }

    #[test]
    fn test_bisect_floors_midpoint_to_hour() {
        let range = TimeRange::new(utc(2020, 1, 1, 10), utc(2020, 1, 1, 13)).unwrap();
        let (left, _) = range.bisect().unwrap();
        // Raw midpoint is 11:30; the split lands on 11:00.
        assert_eq!(left.end, utc(2020, 1, 1, 11));
    }

    #[test]
    fn test_bisect_rounds_up_when_floor_hits_start() {
        // Raw midpoint is 10:45, flooring would land on the range start;
        // the interior hour point 11:00 must be used instead.
        let start = utc(2020, 1, 1, 10);
        let end = start + TimeDelta::minutes(90);
        let range = TimeRange::new(start, end).unwrap();
        let (left, right) = range.bisect().unwrap();
        assert_eq!(left.end, utc(2020, 1, 1, 11));
        assert_eq!(left.start, start);
        assert_eq!(right.end, end);
    }

    #[test]
    fn test_bisect_stops_without_interior_hour_point() {
        // No whole hour lies strictly between 10:30 and 10:50.
        let start = utc(2020, 1, 1, 10) + TimeDelta::minutes(30);
        let end = utc(2020, 1, 1, 10) + TimeDelta::minutes(50);
        let range = TimeRange::new(start, end).unwrap();
        assert!(range.bisect().is_none());
    }

    #[test]
    fn test_bisect_stops_at_single_hour() {
        let range = TimeRange::new(utc(2020, 1, 1, 10), utc(2020, 1, 1, 11)).unwrap();
        assert!(range.bisect().is_none());
    }

    #[test]
    fn test_bisect_stops_on_instant() {
        assert!(TimeRange::instant(utc(2020, 1, 1, 0)).bisect().is_none());
    }

    #[test]
    fn test_contains() {
        let range = TimeRange::new(utc(2020, 1, 1, 0), utc(2020, 1, 2, 0)).unwrap();
        assert!(range.contains(utc(2020, 1, 1, 12)));
        assert!(range.contains(range.start));
        assert!(range.contains(range.end));
        assert!(!range.contains(utc(2020, 1, 2, 1)));
    }
}
