// Utility functions
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use std::cmp::Ordering;

const NAIVE_FORMATS: [&str; 6] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S%.f",
    "%Y/%m/%d %H:%M",
];
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];

/// Parses a timestamp column value into naive wall time.
/// RFC 3339 values with an offset are converted to UTC; bare dates map to midnight.
/// Dates may use `-` or `/` separators, and seconds may be omitted.
pub fn parse_datetime(date_str: &str) -> Option<NaiveDateTime> {
    let value = date_str.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_utc());
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// First day of the calendar month containing `ts`.
pub fn month_start(ts: &NaiveDateTime) -> NaiveDate {
    let date = ts.date();
    date.with_day(1).unwrap_or(date)
}

/// Whole calendar months from `from` to `to`; negative when `to` is earlier.
pub fn months_between(from: NaiveDate, to: NaiveDate) -> i32 {
    (to.year() - from.year()) * 12 + (to.month() as i32 - from.month() as i32)
}

pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Orders identifiers numerically when both are integers, lexicographically otherwise.
pub fn compare_ids(a: &str, b: &str) -> Ordering {
    match (a.parse::<i64>(), b.parse::<i64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(s: &str) -> NaiveDateTime {
        parse_datetime(s).unwrap()
    }

    #[test]
    fn parses_supported_timestamp_forms() {
        let expected = NaiveDate::from_ymd_opt(2023, 1, 15)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap();
        assert_eq!(ts("2023-01-15 10:30:00"), expected);
        assert_eq!(ts("2023-01-15T10:30:00"), expected);
        assert_eq!(ts("2023-01-15T12:30:00+02:00"), expected);
        assert_eq!(ts("2023-01-15T10:30:00Z"), expected);
        assert_eq!(
            ts("2023-01-15"),
            NaiveDate::from_ymd_opt(2023, 1, 15).unwrap().and_hms_opt(0, 0, 0).unwrap()
        );
        assert!(parse_datetime("15/01/2023").is_none());
        assert!(parse_datetime("2023-01-15 25:00").is_none());
    }

    #[test]
    fn parses_minute_precision_and_slash_dates() {
        let expected = NaiveDate::from_ymd_opt(2023, 1, 15)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap();
        assert_eq!(ts("2023-01-15 10:30"), expected);
        assert_eq!(ts("2023-01-15T10:30"), expected);
        assert_eq!(ts("2023/01/15 10:30:00"), expected);
        assert_eq!(ts("2023/01/15 10:30"), expected);
        assert_eq!(
            ts("2023/01/15"),
            NaiveDate::from_ymd_opt(2023, 1, 15).unwrap().and_hms_opt(0, 0, 0).unwrap()
        );
        assert!(parse_datetime("").is_none());
    }

    #[test]
    fn month_arithmetic_crosses_years() {
        let dec = month_start(&ts("2022-12-31 23:59:59"));
        assert_eq!(dec, NaiveDate::from_ymd_opt(2022, 12, 1).unwrap());
        let feb = NaiveDate::from_ymd_opt(2023, 2, 1).unwrap();
        assert_eq!(months_between(dec, feb), 2);
        assert_eq!(months_between(feb, dec), -2);
    }

    #[test]
    fn ids_sort_numerically_when_possible() {
        let mut ids = vec!["10", "9", "abc", "2"];
        ids.sort_by(|a, b| compare_ids(a, b));
        assert_eq!(ids, vec!["2", "9", "10", "abc"]);
    }

    #[test]
    fn rounds_to_one_decimal() {
        assert_eq!(round_to(43.26, 1), 43.3);
        assert_eq!(round_to(40.0, 1), 40.0);
    }
}
