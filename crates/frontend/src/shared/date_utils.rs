//! Date and time helpers for the browser.
//!
//! `today`/`now_iso` read the browser clock through `js_sys::Date`; the
//! formatting functions are pure and tested natively.

use chrono::NaiveDate;

/// Local calendar date from the browser clock.
pub fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1,
        now.get_date(),
    )
    .unwrap_or_default()
}

/// Current instant as an ISO-8601 UTC string, e.g. `2024-03-15T14:02:26.123Z`.
pub fn now_iso() -> String {
    js_sys::Date::new_0().to_iso_string().into()
}

/// Milliseconds since the epoch, used for generated document codes.
pub fn now_millis() -> i64 {
    js_sys::Date::now() as i64
}

/// Format ISO datetime string to DD.MM.YYYY HH:MM:SS format
/// Example: "2024-03-15T14:02:26.123Z" -> "15.03.2024 14:02:26"
pub fn format_datetime(datetime_str: &str) -> String {
    if let Some((date_part, time_part)) = datetime_str.split_once('T') {
        if let Some((year, rest)) = date_part.split_once('-') {
            if let Some((month, day)) = rest.split_once('-') {
                let time = time_part
                    .split(['.', 'Z', '+'])
                    .next()
                    .unwrap_or(time_part);
                return format!("{}.{}.{} {}", day, month, year, time);
            }
        }
    }
    datetime_str.to_string()
}

/// Format ISO date string to DD.MM.YYYY format
/// Example: "2024-03-15" or "2024-03-15T14:02:26Z" -> "15.03.2024"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}.{}.{}", day, month, year);
        }
    }
    date_str.to_string()
}

/// `format_date` for optional columns, `-` when missing or blank.
pub fn format_opt_date(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => format_date(v),
        _ => "-".to_string(),
    }
}

pub fn format_opt_datetime(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => format_datetime(v),
        _ => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(
            format_datetime("2024-03-15T14:02:26.123Z"),
            "15.03.2024 14:02:26"
        );
        assert_eq!(
            format_datetime("2024-12-31T23:59:59Z"),
            "31.12.2024 23:59:59"
        );
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15.03.2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15.03.2024");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_date("invalid"), "invalid");
    }

    #[test]
    fn missing_dates_render_as_dash() {
        assert_eq!(format_opt_date(None), "-");
        assert_eq!(format_opt_date(Some("  ")), "-");
        assert_eq!(format_opt_date(Some("2025-01-02")), "02.01.2025");
        assert_eq!(format_opt_datetime(None), "-");
    }
}
