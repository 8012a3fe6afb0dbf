//! Date/time normalization to `YYYY-MM-DD HH:MM`

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Output layout for normalized timestamps
pub const OUTPUT_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Parse `value` with the first matching known layout.
///
/// Ambiguous slash dates read month first (`03/04/2021` is March 4th). Dates
/// without a time are taken at midnight.
pub fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    try_parse_datetime(trimmed)
        .or_else(|| try_parse_date(trimmed).map(|d| d.and_time(NaiveTime::MIN)))
}

/// Parse and render in [`OUTPUT_FORMAT`].
pub fn normalize_datetime(value: &str) -> Option<String> {
    parse_datetime(value).map(|dt| dt.format(OUTPUT_FORMAT).to_string())
}

fn try_parse_datetime(value: &str) -> Option<NaiveDateTime> {
    let formats = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M:%S",
        "%Y/%m/%d %H:%M",
        "%m/%d/%Y %H:%M:%S", // US
        "%m/%d/%Y %H:%M",
        "%m/%d/%Y %I:%M %p",
        "%m/%d/%y %H:%M",
        "%d/%m/%Y %H:%M:%S", // European
        "%d/%m/%Y %H:%M",
        "%d-%b-%Y %H:%M:%S", // 15-Jan-2024 10:30:00
        "%d-%b-%Y %H:%M",
    ];

    formats
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
}

fn try_parse_date(value: &str) -> Option<NaiveDate> {
    let formats = [
        "%Y-%m-%d",
        "%Y/%m/%d",
        "%m/%d/%Y", // US: 01/15/2024
        "%m/%d/%y",
        "%d/%m/%Y", // European: 15/01/2024
        "%d-%b-%Y", // 15-Jan-2024
        "%d-%B-%Y", // 15-January-2024
        "%b %d, %Y", // Jan 15, 2024
        "%B %d, %Y",
        "%d %B %Y",
        "%Y%m%d",
    ];

    formats
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("2021-03-04 13:05", "2021-03-04 13:05")]
    #[case("2021-03-04T13:05:59", "2021-03-04 13:05")]
    #[case("2021-03-04T13:05:59.123", "2021-03-04 13:05")]
    #[case("2021/03/04 08:00", "2021-03-04 08:00")]
    #[case("03/04/2021 9:15", "2021-03-04 09:15")]
    #[case("03/04/2021 9:15 PM", "2021-03-04 21:15")]
    #[case("2021-03-04", "2021-03-04 00:00")]
    #[case("3/4/2021", "2021-03-04 00:00")]
    #[case("15/01/2024", "2024-01-15 00:00")]
    #[case("15-Jan-2024 10:30", "2024-01-15 10:30")]
    #[case("15-January-2024", "2024-01-15 00:00")]
    #[case("Jan 15, 2024", "2024-01-15 00:00")]
    #[case("  2024-01-15  ", "2024-01-15 00:00")]
    fn test_normalize(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(normalize_datetime(input).as_deref(), Some(expected));
    }

    #[rstest]
    #[case("")]
    #[case("yesterday")]
    #[case("2021-13-45")]
    #[case("not provided")]
    fn test_unparseable(#[case] input: &str) {
        assert_eq!(parse_datetime(input), None);
    }
}
