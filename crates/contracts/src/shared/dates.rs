use chrono::{Months, NaiveDate};

/// Parse the calendar date of a backend value.
///
/// Accepts `YYYY-MM-DD` as well as full timestamps (`2024-03-01T08:00:00.000Z`,
/// `2024-03-01 08:00:00`); only the date part is used.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    let head = value.get(..10)?;
    NaiveDate::parse_from_str(head, "%Y-%m-%d").ok()
}

pub fn parse_opt_date(value: Option<&str>) -> Option<NaiveDate> {
    value.and_then(parse_date)
}

/// Signed whole days from `from` to `to`.
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

/// First ten characters of a backend date, suitable for `<input type="date">`.
pub fn date_input_value(value: Option<&str>) -> String {
    value
        .map(|v| v.trim().chars().take(10).collect())
        .unwrap_or_default()
}

pub fn format_iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Same day one month earlier, clamped to the end of shorter months.
pub fn one_month_before(date: NaiveDate) -> NaiveDate {
    date.checked_sub_months(Months::new(1)).unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_parse_date_variants() {
        assert_eq!(parse_date("2024-03-01"), Some(d(2024, 3, 1)));
        assert_eq!(parse_date("2024-03-01T08:15:00.000Z"), Some(d(2024, 3, 1)));
        assert_eq!(parse_date("2024-03-01 23:59:59"), Some(d(2024, 3, 1)));
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("not a date"), None);
    }

    #[test]
    fn test_one_month_before_clamps() {
        assert_eq!(one_month_before(d(2024, 3, 31)), d(2024, 2, 29));
        assert_eq!(one_month_before(d(2024, 1, 15)), d(2023, 12, 15));
    }

    #[test]
    fn test_date_input_value() {
        assert_eq!(date_input_value(Some("2024-05-06T00:00:00Z")), "2024-05-06");
        assert_eq!(date_input_value(None), "");
    }
}
