use chrono::{DateTime, FixedOffset, NaiveDate, TimeDelta, Timelike};

const NANOS_PER_SEC: i128 = 1_000_000_000;

/// Split an interval into `(whole_seconds, nanosecond_remainder)`.
///
/// The interval is first rounded to the nearest whole second (halves away
/// from zero), the remainder is what rounding dropped. So `-0.7s` becomes
/// `(-1, 300_000_000)` rather than the truncated `(0, -700_000_000)`.
pub fn interval_parts(interval: TimeDelta) -> (i64, i64) {
    let total = i128::from(interval.num_seconds()) * NANOS_PER_SEC
        + i128::from(interval.subsec_nanos());
    let mut secs = total / NANOS_PER_SEC;
    let rem = total % NANOS_PER_SEC;
    if rem.abs() * 2 >= NANOS_PER_SEC {
        secs += rem.signum();
    }
    let nanos = total - secs * NANOS_PER_SEC;
    // |secs| <= i64::MAX / 1000 + 1 and |nanos| < 1e9, both fit
    (secs as i64, nanos as i64)
}

/// RFC 3339 with up to nine fractional digits, trailing zeros trimmed.
///
/// Zero offset is written as `Z`, anything else as `+HH:MM`.
pub fn format_timestamp(ts: &DateTime<FixedOffset>) -> String {
    let mut out = ts.format("%Y-%m-%dT%H:%M:%S").to_string();
    // leap seconds are represented by chrono as nanos >= 1e9
    let nanos = ts.nanosecond() % 1_000_000_000;
    if nanos != 0 {
        let digits = format!("{:09}", nanos);
        out.push('.');
        out.push_str(digits.trim_end_matches('0'));
    }
    if ts.offset().local_minus_utc() == 0 {
        out.push('Z');
    } else {
        out.push_str(&ts.format("%:z").to_string());
    }
    out
}

/// Calendar date as `YYYY-MM-DD`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn ms(v: i64) -> TimeDelta {
        TimeDelta::milliseconds(v)
    }

    #[test]
    fn whole_days() {
        assert_eq!(interval_parts(TimeDelta::days(23)), (1_987_200, 0));
    }

    #[test]
    fn days_and_nanos() {
        let d = TimeDelta::days(23) + TimeDelta::nanoseconds(456);
        assert_eq!(interval_parts(d), (1_987_200, 456));
    }

    #[test]
    fn rounds_up_past_half() {
        assert_eq!(interval_parts(ms(1_700)), (2, -300_000_000));
    }

    #[test]
    fn half_rounds_away_from_zero() {
        assert_eq!(interval_parts(ms(500)), (1, -500_000_000));
        assert_eq!(interval_parts(ms(-500)), (-1, 500_000_000));
    }

    #[test]
    fn negative_sub_second() {
        assert_eq!(interval_parts(ms(-700)), (-1, 300_000_000));
        assert_eq!(interval_parts(ms(-300)), (0, -300_000_000));
    }

    #[test]
    fn zero() {
        assert_eq!(interval_parts(TimeDelta::zero()), (0, 0));
    }

    #[test]
    fn timestamp_trims_fraction() {
        let ts = Utc
            .with_ymd_and_hms(2025, 4, 23, 13, 26, 21)
            .unwrap()
            .with_nanosecond(123_450_000)
            .unwrap()
            .fixed_offset();
        assert_eq!(format_timestamp(&ts), "2025-04-23T13:26:21.12345Z");
    }

    #[test]
    fn timestamp_without_fraction() {
        let ts = Utc.with_ymd_and_hms(2000, 1, 2, 3, 4, 5).unwrap().fixed_offset();
        assert_eq!(format_timestamp(&ts), "2000-01-02T03:04:05Z");
    }

    #[test]
    fn timestamp_keeps_nanos() {
        let ts = Utc
            .with_ymd_and_hms(2000, 1, 2, 3, 4, 5)
            .unwrap()
            .with_nanosecond(1)
            .unwrap()
            .fixed_offset();
        assert_eq!(format_timestamp(&ts), "2000-01-02T03:04:05.000000001Z");
    }

    #[test]
    fn timestamp_with_offset() {
        let tz = FixedOffset::east_opt(2 * 3600 + 30 * 60).unwrap();
        let ts = tz.with_ymd_and_hms(2024, 8, 22, 10, 0, 0).unwrap();
        assert_eq!(format_timestamp(&ts), "2024-08-22T10:00:00+02:30");
    }

    #[test]
    fn date() {
        let d = NaiveDate::from_ymd_opt(2025, 4, 23).unwrap();
        assert_eq!(format_date(d), "2025-04-23");
    }
}
