use serde::{Deserialize, Serialize};

use crate::domain::common::form::{number_text, parse_f64};
use crate::domain::common::lenient;

pub const PRICING_SETTINGS_PATH: &str = "/api/pricing-settings";
pub const DEFAULT_CURRENCY: &str = "THB";

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

fn de_amount<'de, D: serde::Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(lenient::opt_f64(deserializer)?.unwrap_or(0.0))
}

/// Global rates applied to every job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingSettings {
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "de_amount")]
    pub call_fee: f64,
    #[serde(default, deserialize_with = "de_amount")]
    pub labor_rate_per_hour: f64,
    #[serde(default, deserialize_with = "de_amount")]
    pub parts_markup_percent: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl Default for PricingSettings {
    fn default() -> Self {
        Self {
            id: None,
            call_fee: 0.0,
            labor_rate_per_hour: 0.0,
            parts_markup_percent: 0.0,
            currency: default_currency(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PricingSettingsDto {
    pub id: Option<i64>,
    pub call_fee: String,
    pub labor_rate_per_hour: String,
    pub parts_markup_percent: String,
    pub currency: String,
}

impl From<&PricingSettings> for PricingSettingsDto {
    fn from(p: &PricingSettings) -> Self {
        Self {
            id: p.id,
            call_fee: number_text(Some(p.call_fee)),
            labor_rate_per_hour: number_text(Some(p.labor_rate_per_hour)),
            parts_markup_percent: number_text(Some(p.parts_markup_percent)),
            currency: p.currency.clone(),
        }
    }
}

impl PricingSettingsDto {
    /// Parsed settings, or the first invalid field.
    pub fn validate(&self) -> Result<PricingSettings, String> {
        let amount = |value: &str, field: &str| -> Result<f64, String> {
            match parse_f64(value) {
                Some(v) if v >= 0.0 => Ok(v),
                Some(_) => Err(format!("{} cannot be negative", field)),
                None => Err(format!("{} must be a number", field)),
            }
        };
        Ok(PricingSettings {
            id: self.id,
            call_fee: amount(&self.call_fee, "Call fee")?,
            labor_rate_per_hour: amount(&self.labor_rate_per_hour, "Labor rate")?,
            parts_markup_percent: amount(&self.parts_markup_percent, "Parts markup")?,
            currency: match self.currency.trim() {
                "" => default_currency(),
                other => other.to_string(),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_strings_and_default_currency() {
        let p: PricingSettings = serde_json::from_str(
            r#"{"id": 1, "call_fee": "300.00", "labor_rate_per_hour": 200, "parts_markup_percent": null}"#,
        )
        .unwrap();
        assert_eq!(p.call_fee, 300.0);
        assert_eq!(p.labor_rate_per_hour, 200.0);
        assert_eq!(p.parts_markup_percent, 0.0);
        assert_eq!(p.currency, "THB");
    }

    #[test]
    fn test_form_validation() {
        let mut dto = PricingSettingsDto::from(&PricingSettings::default());
        dto.call_fee = "300".into();
        dto.currency = "".into();
        let parsed = dto.validate().unwrap();
        assert_eq!(parsed.call_fee, 300.0);
        assert_eq!(parsed.currency, "THB");
        dto.labor_rate_per_hour = "abc".into();
        assert_eq!(dto.validate(), Err("Labor rate must be a number".to_string()));
        dto.labor_rate_per_hour = "-1".into();
        assert_eq!(dto.validate(), Err("Labor rate cannot be negative".to_string()));
    }
}
