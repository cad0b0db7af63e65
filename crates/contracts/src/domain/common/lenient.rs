//! Serde helpers for loosely typed backend columns.
//!
//! The API returns SQL flags as `0`/`1` and DECIMAL columns as strings, so
//! these accept every shape the backend has been seen to send.

use serde::{Deserialize, Deserializer, Serializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Raw {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

/// `bool` stored as `0`/`1`. Missing or `null` reads as `false`, writes as an integer.
pub mod flag {
    use super::*;

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        Ok(match Option::<Raw>::deserialize(deserializer)? {
            None => false,
            Some(Raw::Bool(value)) => value,
            Some(Raw::Int(value)) => value != 0,
            Some(Raw::Float(value)) => value != 0.0,
            Some(Raw::Text(value)) => matches!(value.trim(), "1" | "true"),
        })
    }

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(u8::from(*value))
    }
}

/// Optional amount that may arrive as a number or a numeric string.
pub fn opt_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    Ok(match Option::<Raw>::deserialize(deserializer)? {
        None => None,
        Some(Raw::Bool(_)) => None,
        Some(Raw::Int(value)) => Some(value as f64),
        Some(Raw::Float(value)) => Some(value),
        Some(Raw::Text(value)) => value.trim().parse::<f64>().ok(),
    })
}

/// Optional integer that may arrive as a number or a numeric string.
pub fn opt_i64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    Ok(match Option::<Raw>::deserialize(deserializer)? {
        None => None,
        Some(Raw::Bool(_)) => None,
        Some(Raw::Int(value)) => Some(value),
        Some(Raw::Float(value)) => Some(value as i64),
        Some(Raw::Text(value)) => value.trim().parse::<i64>().ok(),
    })
}

/// Optional text column that is sometimes numeric (`capacity`, codes).
pub fn opt_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Option::<Raw>::deserialize(deserializer)? {
        None => None,
        Some(Raw::Bool(value)) => Some(value.to_string()),
        Some(Raw::Int(value)) => Some(value.to_string()),
        Some(Raw::Float(value)) => Some(value.to_string()),
        Some(Raw::Text(value)) => Some(value),
    })
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Row {
        #[serde(default, with = "super::flag")]
        active: bool,
        #[serde(default, deserialize_with = "super::opt_f64")]
        amount: Option<f64>,
        #[serde(default, deserialize_with = "super::opt_i64")]
        count: Option<i64>,
        #[serde(default, deserialize_with = "super::opt_string")]
        capacity: Option<String>,
    }

    #[test]
    fn test_flag_accepts_ints_and_bools() {
        let row: Row = serde_json::from_str(r#"{"active": 1}"#).unwrap();
        assert!(row.active);
        let row: Row = serde_json::from_str(r#"{"active": false}"#).unwrap();
        assert!(!row.active);
        let row: Row = serde_json::from_str(r#"{"active": null}"#).unwrap();
        assert!(!row.active);
        let row: Row = serde_json::from_str(r#"{}"#).unwrap();
        assert!(!row.active);
    }

    #[test]
    fn test_amounts_accept_decimal_strings() {
        let row: Row = serde_json::from_str(r#"{"amount": "1500.50", "count": "3"}"#).unwrap();
        assert_eq!(row.amount, Some(1500.5));
        assert_eq!(row.count, Some(3));
        let row: Row = serde_json::from_str(r#"{"amount": 12, "count": null}"#).unwrap();
        assert_eq!(row.amount, Some(12.0));
        assert_eq!(row.count, None);
        let row: Row = serde_json::from_str(r#"{"capacity": 630}"#).unwrap();
        assert_eq!(row.capacity.as_deref(), Some("630"));
    }
}
