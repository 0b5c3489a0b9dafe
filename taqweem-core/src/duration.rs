//! Day counts and countdown breakdowns.
//!
//! All arithmetic runs on absolute instants; offsets embedded in the
//! timestamps are never converted.

use chrono::{DateTime, TimeZone};

pub const MS_PER_SECOND: i64 = 1_000;
pub const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
pub const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
pub const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Inclusive number of days covered by `start..=end`.
///
/// Never less than 1, even for an inverted interval.
pub fn duration_days<Tz1: TimeZone, Tz2: TimeZone>(
    start: &DateTime<Tz1>,
    end: &DateTime<Tz2>,
) -> i64 {
    let diff_ms = end.timestamp_millis() - start.timestamp_millis();
    let days = diff_ms.div_euclid(MS_PER_DAY) + 1;
    days.max(1)
}

/// A millisecond span split into whole days, hours, minutes and seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Breakdown {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

/// Split a span into days/hours/minutes/seconds. Negative spans count as zero.
pub fn breakdown(ms: i64) -> Breakdown {
    let ms = ms.max(0);
    Breakdown {
        days: ms / MS_PER_DAY,
        hours: (ms % MS_PER_DAY) / MS_PER_HOUR,
        minutes: (ms % MS_PER_HOUR) / MS_PER_MINUTE,
        seconds: (ms % MS_PER_MINUTE) / MS_PER_SECOND,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration};

    fn at(s: &str) -> DateTime<chrono::FixedOffset> {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    #[test]
    fn test_single_day_is_one() {
        let start = at("2025-08-12T00:00:00+03:00");
        assert_eq!(duration_days(&start, &start), 1);
    }

    #[test]
    fn test_multi_day_is_inclusive() {
        let start = at("2025-11-21T00:00:00+03:00");
        let end = at("2025-11-29T00:00:00+03:00");
        assert_eq!(duration_days(&start, &end), 9);
    }

    #[test]
    fn test_partial_day_rounds_down() {
        let start = at("2025-11-21T00:00:00+03:00");
        let end = start + Duration::hours(47);
        assert_eq!(duration_days(&start, &end), 2);
    }

    #[test]
    fn test_inverted_interval_floors_at_one() {
        let start = at("2025-11-29T00:00:00+03:00");
        let end = at("2025-11-21T00:00:00+03:00");
        assert_eq!(duration_days(&start, &end), 1);
    }

    #[test]
    fn test_offsets_do_not_change_the_count() {
        let start = at("2025-11-21T00:00:00+03:00");
        let end_utc = at("2025-11-28T21:00:00Z");
        assert_eq!(duration_days(&start, &end_utc), 9);
    }

    #[test]
    fn test_breakdown_carries_each_unit() {
        assert_eq!(
            breakdown(90_061_000),
            Breakdown { days: 1, hours: 1, minutes: 1, seconds: 1 }
        );
    }

    #[test]
    fn test_breakdown_bounds() {
        let b = breakdown(MS_PER_DAY * 40 - 1);
        assert_eq!(b, Breakdown { days: 39, hours: 23, minutes: 59, seconds: 59 });
    }

    #[test]
    fn test_breakdown_drops_sub_second_and_negative() {
        assert_eq!(breakdown(999), Breakdown::default());
        assert_eq!(breakdown(-5_000), Breakdown::default());
    }
}
