//! Wire-format period serialization.

use chrono::{DateTime, TimeZone, Utc};

/// Wire format for period bounds: year, month, day, hour, literal `00`.
const PERIOD_FORMAT: &str = "%Y%m%d%H00";

/// Serializes an instant to the `YYYYMMDDHH00` wire format.
///
/// The platform expects period bounds in UTC at hour precision; instants
/// carrying another zone are converted first.
///
/// # Example
///
/// ```
/// use gridfeed_fetch::period::period_str;
/// use chrono::{FixedOffset, TimeZone};
///
/// let cet = FixedOffset::east_opt(3600).unwrap();
/// let at = cet.with_ymd_and_hms(2020, 1, 1, 1, 30, 0).unwrap();
/// assert_eq!(period_str(&at), "202001010000");
/// ```
#[must_use]
pub fn period_str<Tz: TimeZone>(at: &DateTime<Tz>) -> String {
    at.with_timezone(&Utc).format(PERIOD_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn test_period_str_utc() {
        let at = Utc.with_ymd_and_hms(2020, 6, 15, 9, 0, 0).unwrap();
        assert_eq!(period_str(&at), "202006150900");
    }

    #[test]
    fn test_period_str_zero_pads() {
        let at = Utc.with_ymd_and_hms(2020, 1, 2, 3, 0, 0).unwrap();
        assert_eq!(period_str(&at), "202001020300");
    }

    #[test]
    fn test_period_str_converts_to_utc() {
        let eet = FixedOffset::east_opt(2 * 3600).unwrap();
        let at = eet.with_ymd_and_hms(2020, 1, 1, 1, 0, 0).unwrap();
        assert_eq!(period_str(&at), "201912312300");
    }

    #[test]
    fn test_period_str_truncates_minutes() {
        let at = Utc.with_ymd_and_hms(2020, 6, 15, 9, 45, 30).unwrap();
        assert_eq!(period_str(&at), "202006150900");
    }
}
