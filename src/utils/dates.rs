use crate::error::{ProcessingError, Result};
use crate::utils::constants::TWO_DIGIT_YEAR_PIVOT;
use chrono::{NaiveDate, TimeZone, Utc};

/// Normalize a spreadsheet date to an ISO-8601 timestamp at midnight UTC.
///
/// `M/D/YYYY` is tried first and `M/D/YY` only if that fails. Two-digit
/// years below [`TWO_DIGIT_YEAR_PIVOT`] land in the 2000s, the rest in the
/// 1900s.
///
/// # Examples
/// ```
/// use kmz_processor::utils::normalize_date;
///
/// assert_eq!(normalize_date("3/5/2024").unwrap(), "2024-03-05T00:00:00+00:00");
/// assert_eq!(normalize_date("3/5/24").unwrap(), "2024-03-05T00:00:00+00:00");
/// assert!(normalize_date("13/40/2024").is_err());
/// ```
pub fn normalize_date(value: &str) -> Result<String> {
    parse_four_digit_year(value)
        .or_else(|| parse_two_digit_year(value))
        .and_then(midnight_utc)
        .ok_or_else(|| ProcessingError::DateParse {
            value: value.to_string(),
        })
}

/// Parse `M/D/YYYY`. chrono's `%Y` would also accept "24" as year 24, so the
/// year segment length is checked first.
fn parse_four_digit_year(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    let (_, year) = trimmed.rsplit_once('/')?;
    if year.len() != 4 {
        return None;
    }

    NaiveDate::parse_from_str(trimmed, "%m/%d/%Y").ok()
}

/// Parse `M/D/YY`, applying the century pivot explicitly.
fn parse_two_digit_year(value: &str) -> Option<NaiveDate> {
    let parts: Vec<&str> = value.trim().split('/').collect();
    if parts.len() != 3 {
        return None;
    }

    let month = parse_digits(parts[0], 1..=2)?;
    let day = parse_digits(parts[1], 1..=2)?;
    let short_year = parse_digits(parts[2], 2..=2)? as i32;

    let year = if short_year < TWO_DIGIT_YEAR_PIVOT {
        2000 + short_year
    } else {
        1900 + short_year
    };

    NaiveDate::from_ymd_opt(year, month, day)
}

fn parse_digits(segment: &str, width: std::ops::RangeInclusive<usize>) -> Option<u32> {
    if !width.contains(&segment.len()) || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}

fn midnight_utc(date: NaiveDate) -> Option<String> {
    let midnight = date.and_hms_opt(0, 0, 0)?;
    Some(Utc.from_utc_datetime(&midnight).to_rfc3339())
}
