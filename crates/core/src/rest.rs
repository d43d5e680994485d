//! Days-since-last-workout calculation.
//!
//! The gap between two training days is counted in whole calendar days:
//! both ends are taken at midnight before subtracting, so a DST shift in
//! the local calendar cannot bias the count the way a naive timestamp
//! subtraction would.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

/// Seconds per day (86_400.0), used when rounding timestamp-based gaps.
const SECS_PER_DAY: f64 = 86_400.0;

/// Rest gap relative to a reference date: the most recent workout strictly
/// before it, and the whole-day distance to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RestGap {
    #[serde(rename = "lastDate")]
    pub last_date: NaiveDate,
    #[serde(rename = "daysSince")]
    pub days_since: i64,
}

impl RestGap {
    /// Build a gap from the last workout date and a reference date.
    pub fn new(last_date: NaiveDate, reference: NaiveDate) -> Self {
        Self {
            last_date,
            days_since: days_between(last_date, reference),
        }
    }
}

/// Whole calendar days from midnight of `last` to midnight of `reference`.
///
/// Negative when `reference` precedes `last`; callers pairing this with a
/// strictly-earlier lookup never see that case.
pub fn days_between(last: NaiveDate, reference: NaiveDate) -> i64 {
    (reference - last).num_days()
}

/// Day count for callers holding a reference timestamp instead of a date.
///
/// Fractional days round half away from zero. Only non-midnight inputs can
/// produce a fraction; the HTTP contract passes plain dates, which go
/// through [`days_between`] unchanged.
pub fn days_between_at(last: NaiveDate, reference: NaiveDateTime) -> i64 {
    let midnight = last.and_time(NaiveTime::MIN);
    let secs = (reference - midnight).num_seconds() as f64;
    (secs / SECS_PER_DAY).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn counts_whole_days() {
        assert_eq!(days_between(d(2024, 1, 10), d(2024, 1, 15)), 5);
        assert_eq!(days_between(d(2024, 1, 1), d(2024, 1, 10)), 9);
    }

    #[test]
    fn same_day_is_zero() {
        assert_eq!(days_between(d(2024, 3, 1), d(2024, 3, 1)), 0);
    }

    #[test]
    fn crosses_month_and_year_boundaries() {
        assert_eq!(days_between(d(2023, 12, 30), d(2024, 1, 2)), 3);
        // 2024 is a leap year.
        assert_eq!(days_between(d(2024, 2, 27), d(2024, 3, 1)), 3);
    }

    #[test]
    fn rest_gap_carries_both_fields() {
        let gap = RestGap::new(d(2024, 1, 10), d(2024, 1, 15));
        assert_eq!(gap.last_date, d(2024, 1, 10));
        assert_eq!(gap.days_since, 5);
    }

    #[test]
    fn midnight_timestamp_matches_date_arithmetic() {
        let reference = d(2024, 1, 15).and_time(NaiveTime::MIN);
        assert_eq!(days_between_at(d(2024, 1, 10), reference), 5);
    }

    #[test]
    fn half_day_rounds_away_from_zero() {
        // Noon is exactly .5 days past the 5-day mark.
        let noon = d(2024, 1, 15).and_hms_opt(12, 0, 0).unwrap();
        assert_eq!(days_between_at(d(2024, 1, 10), noon), 6);
    }

    #[test]
    fn sub_half_day_rounds_down() {
        let morning = d(2024, 1, 15).and_hms_opt(11, 59, 59).unwrap();
        assert_eq!(days_between_at(d(2024, 1, 10), morning), 5);
    }
}
