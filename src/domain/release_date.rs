//! Release date parsing
//!
//! Clients send dates in a handful of common layouts. Records always store
//! and serialize the plain calendar date (`YYYY-MM-DD`).

use chrono::{DateTime, NaiveDate};
use serde::{de, Deserialize, Deserializer};

/// Layouts accepted in request bodies, tried in order
const FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m-%d-%Y", "%m/%d/%Y"];

/// Parse a release date, returning `None` when no accepted layout fits
pub fn parse(input: &str) -> Option<NaiveDate> {
    let input = input.trim();

    FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(input, format).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(input)
                .ok()
                .map(|timestamp| timestamp.date_naive())
        })
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse(&raw).ok_or_else(|| de::Error::custom(format!("invalid release date \"{}\"", raw)))
}

pub fn deserialize_option<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) => parse(&raw)
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("invalid release date \"{}\"", raw))),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(parse("2023-10-10"), Some(date(2023, 10, 10)));
        assert_eq!(parse("2023/02/28"), Some(date(2023, 2, 28)));
    }

    #[test]
    fn test_parse_month_first() {
        assert_eq!(parse("10-12-2023"), Some(date(2023, 10, 12)));
        assert_eq!(parse("01/31/1999"), Some(date(1999, 1, 31)));
    }

    #[test]
    fn test_parse_timestamp_keeps_date() {
        assert_eq!(parse("2021-06-01T23:30:00Z"), Some(date(2021, 6, 1)));
    }

    #[test]
    fn test_parse_rejects_impossible_dates() {
        assert_eq!(parse("2023-02-30"), None);
        assert_eq!(parse("tomorrow"), None);
        assert_eq!(parse(""), None);
    }
}
