//! Conversions between record fields and form inputs.

/// Text for an input bound to an optional column.
pub fn text_of(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

/// Blank input becomes `None`.
pub fn blank_to_none(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

pub fn parse_f64(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Numeric input read the way the form treats it: blank or invalid is zero.
pub fn parse_f64_or_zero(value: &str) -> f64 {
    parse_f64(value).unwrap_or(0.0)
}

pub fn parse_i64(value: &str) -> Option<i64> {
    value.trim().parse::<i64>().ok()
}

pub fn number_text(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

pub fn int_text(value: Option<i64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// `Err(message)` when `value` is blank.
pub fn require_text(value: &str, message: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(message.to_string())
    } else {
        Ok(())
    }
}

pub fn require_some<T>(value: &Option<T>, message: &str) -> Result<(), String> {
    if value.is_some() {
        Ok(())
    } else {
        Err(message.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_inputs() {
        assert_eq!(parse_f64_or_zero(""), 0.0);
        assert_eq!(parse_f64_or_zero(" 2.5 "), 2.5);
        assert_eq!(parse_f64_or_zero("abc"), 0.0);
        assert_eq!(parse_f64("NaN"), None);
        assert_eq!(parse_i64("12"), Some(12));
        assert_eq!(int_text(None), "");
        assert_eq!(number_text(Some(1.5)), "1.5");
    }

    #[test]
    fn test_required_checks() {
        assert!(require_text("  ", "Name is required").is_err());
        assert!(require_text("x", "Name is required").is_ok());
        assert_eq!(
            require_some::<i64>(&None, "Customer is required"),
            Err("Customer is required".to_string())
        );
        assert_eq!(blank_to_none("  "), None);
        assert_eq!(blank_to_none(" a "), Some("a".into()));
    }
}
