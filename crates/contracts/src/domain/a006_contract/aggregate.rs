use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::form::{blank_to_none, int_text, parse_i64, require_some, require_text, text_of};
use crate::domain::common::lenient;
use crate::domain::common::Resource;
use crate::shared::dates::date_input_value;
use crate::shared::metrics;

/// Reminder lead time restored whenever a contract becomes annual.
pub const DEFAULT_NOTIFY_BEFORE_DAYS: i64 = 30;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractType {
    #[default]
    Annual,
    PerCall,
}

impl ContractType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContractType::Annual => "annual",
            ContractType::PerCall => "per_call",
        }
    }

    pub fn from_str_or_default(value: &str) -> Self {
        match value {
            "per_call" => ContractType::PerCall,
            _ => ContractType::Annual,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContractType::Annual => "Annual",
            ContractType::PerCall => "Per call",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    pub id: i64,
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub customer_id: Option<i64>,
    #[serde(default, skip_serializing)]
    pub customer_name: Option<String>,
    pub contract_code: String,
    #[serde(default)]
    pub contract_type: ContractType,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub maintenance_times_per_year: Option<i64>,
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub notify_before_days: Option<i64>,
    #[serde(default)]
    pub included_items: Option<String>,
    #[serde(default)]
    pub excluded_items: Option<String>,
}

impl Contract {
    pub fn is_per_call(&self) -> bool {
        self.contract_type == ContractType::PerCall
    }

    pub fn is_active(&self, today: NaiveDate) -> bool {
        metrics::contract_is_active(self.start_date.as_deref(), self.end_date.as_deref(), today)
    }

    pub fn is_expiring_soon(&self, today: NaiveDate) -> bool {
        metrics::contract_expiring_soon(self.end_date.as_deref(), today)
    }
}

impl Resource for Contract {
    type Id = i64;

    fn id(&self) -> i64 {
        self.id
    }

    fn aggregate_index() -> &'static str {
        "a006"
    }

    fn collection_path() -> &'static str {
        "/api/contracts"
    }

    fn element_name() -> &'static str {
        "Contract"
    }
}

/// Form draft. Scheduling inputs are disabled while the type is per-call.
#[derive(Debug, Clone, PartialEq)]
pub struct ContractDto {
    pub id: Option<i64>,
    pub customer_id: Option<i64>,
    pub contract_code: String,
    pub contract_type: ContractType,
    pub start_date: String,
    pub end_date: String,
    pub maintenance_times_per_year: String,
    pub notify_before_days: String,
    pub included_items: String,
    pub excluded_items: String,
}

impl Default for ContractDto {
    fn default() -> Self {
        Self {
            id: None,
            customer_id: None,
            contract_code: String::new(),
            contract_type: ContractType::Annual,
            start_date: String::new(),
            end_date: String::new(),
            maintenance_times_per_year: String::new(),
            notify_before_days: DEFAULT_NOTIFY_BEFORE_DAYS.to_string(),
            included_items: String::new(),
            excluded_items: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContractPayload {
    pub customer_id: Option<i64>,
    pub contract_code: String,
    pub contract_type: ContractType,
    pub start_date: String,
    pub end_date: String,
    pub maintenance_times_per_year: Option<i64>,
    pub notify_before_days: Option<i64>,
    pub included_items: Option<String>,
    pub excluded_items: Option<String>,
}

impl From<&Contract> for ContractDto {
    fn from(c: &Contract) -> Self {
        let per_call = c.is_per_call();
        let scheduling = |value: Option<i64>| if per_call { String::new() } else { int_text(value) };
        Self {
            id: Some(c.id),
            customer_id: c.customer_id,
            contract_code: c.contract_code.clone(),
            contract_type: c.contract_type,
            start_date: date_input_value(c.start_date.as_deref()),
            end_date: date_input_value(c.end_date.as_deref()),
            maintenance_times_per_year: scheduling(c.maintenance_times_per_year),
            notify_before_days: scheduling(c.notify_before_days),
            included_items: text_of(&c.included_items),
            excluded_items: text_of(&c.excluded_items),
        }
    }
}

impl ContractDto {
    pub fn scheduling_enabled(&self) -> bool {
        self.contract_type != ContractType::PerCall
    }

    /// Per-call clears both scheduling inputs; annual restores the default reminder.
    pub fn set_contract_type(&mut self, contract_type: ContractType) {
        self.contract_type = contract_type;
        match contract_type {
            ContractType::PerCall => {
                self.maintenance_times_per_year.clear();
                self.notify_before_days.clear();
            }
            ContractType::Annual => {
                self.notify_before_days = DEFAULT_NOTIFY_BEFORE_DAYS.to_string();
            }
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        require_some(&self.customer_id, "Please select a customer")?;
        require_text(&self.contract_code, "Contract code is required")?;
        require_text(&self.start_date, "Start date is required")?;
        require_text(&self.end_date, "End date is required")
    }

    pub fn payload(&self) -> ContractPayload {
        let (times, notify) = if self.scheduling_enabled() {
            (
                Some(parse_i64(&self.maintenance_times_per_year).unwrap_or(0)),
                Some(parse_i64(&self.notify_before_days).unwrap_or(DEFAULT_NOTIFY_BEFORE_DAYS)),
            )
        } else {
            (None, None)
        };
        ContractPayload {
            customer_id: self.customer_id,
            contract_code: self.contract_code.trim().to_string(),
            contract_type: self.contract_type,
            start_date: self.start_date.clone(),
            end_date: self.end_date.clone(),
            maintenance_times_per_year: times,
            notify_before_days: notify,
            included_items: blank_to_none(&self.included_items),
            excluded_items: blank_to_none(&self.excluded_items),
        }
    }
}

pub fn find_contract(contracts: &[Contract], id: Option<i64>) -> Option<&Contract> {
    id.and_then(|id| contracts.iter().find(|c| c.id == id))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn annual_draft() -> ContractDto {
        ContractDto {
            customer_id: Some(1),
            contract_code: "C-2024-01".into(),
            start_date: "2024-01-01".into(),
            end_date: "2024-12-31".into(),
            maintenance_times_per_year: "12".into(),
            ..ContractDto::default()
        }
    }

    #[test]
    fn test_type_toggle_round_trip() {
        let mut draft = annual_draft();
        assert_eq!(draft.notify_before_days, "30");
        draft.set_contract_type(ContractType::PerCall);
        assert_eq!(draft.notify_before_days, "");
        assert_eq!(draft.maintenance_times_per_year, "");
        assert!(!draft.scheduling_enabled());
        draft.set_contract_type(ContractType::Annual);
        assert_eq!(draft.notify_before_days, "30");
        assert!(draft.scheduling_enabled());
    }

    #[test]
    fn test_annual_restores_default_regardless_of_prior_value() {
        let mut draft = annual_draft();
        draft.notify_before_days = "45".into();
        draft.set_contract_type(ContractType::PerCall);
        draft.set_contract_type(ContractType::Annual);
        assert_eq!(draft.notify_before_days, "30");
    }

    #[test]
    fn test_payload_nulls_scheduling_for_per_call() {
        let mut draft = annual_draft();
        let json = serde_json::to_value(draft.payload()).unwrap();
        assert_eq!(json["maintenance_times_per_year"], 12);
        assert_eq!(json["notify_before_days"], 30);
        assert_eq!(json["contract_type"], "annual");

        draft.set_contract_type(ContractType::PerCall);
        let json = serde_json::to_value(draft.payload()).unwrap();
        assert!(json["maintenance_times_per_year"].is_null());
        assert!(json["notify_before_days"].is_null());
        assert_eq!(json["contract_type"], "per_call");
    }

    #[test]
    fn test_blank_item_lists_are_sent_as_null() {
        let mut draft = annual_draft();
        draft.excluded_items = "  ".into();
        draft.included_items = "Ropes, doors".into();
        let json = serde_json::to_value(draft.payload()).unwrap();
        assert!(json["excluded_items"].is_null());
        assert_eq!(json["included_items"], "Ropes, doors");
    }

    #[test]
    fn test_blank_annual_fields_get_defaults() {
        let mut draft = annual_draft();
        draft.maintenance_times_per_year.clear();
        draft.notify_before_days.clear();
        let payload = draft.payload();
        assert_eq!(payload.maintenance_times_per_year, Some(0));
        assert_eq!(payload.notify_before_days, Some(30));
    }

    #[test]
    fn test_editing_per_call_shows_empty_scheduling() {
        let contract: Contract = serde_json::from_str(
            r#"{"id": 2, "customer_id": 1, "contract_code": "PC-1", "contract_type": "per_call",
                "start_date": "2024-01-01T00:00:00.000Z", "end_date": "2024-12-31",
                "maintenance_times_per_year": 4, "notify_before_days": 30}"#,
        )
        .unwrap();
        let draft = ContractDto::from(&contract);
        assert_eq!(draft.maintenance_times_per_year, "");
        assert_eq!(draft.notify_before_days, "");
        assert_eq!(draft.start_date, "2024-01-01");
    }

    #[test]
    fn test_validation_order() {
        assert_eq!(
            ContractDto::default().validate(),
            Err("Please select a customer".to_string())
        );
        assert!(annual_draft().validate().is_ok());
    }
}
