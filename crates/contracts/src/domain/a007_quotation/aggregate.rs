use serde::{Deserialize, Serialize};

use crate::domain::a012_maintenance_job::aggregate::MaintenanceJob;
use crate::domain::common::form::{blank_to_none, number_text, parse_f64, require_some, text_of};
use crate::domain::common::lenient;
use crate::domain::common::Resource;
use crate::shared::metrics::{format_amount, quotation_total};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuotationStatus {
    #[default]
    Draft,
    Sent,
    Approved,
    Rejected,
}

impl QuotationStatus {
    pub const ALL: [QuotationStatus; 4] = [
        QuotationStatus::Draft,
        QuotationStatus::Sent,
        QuotationStatus::Approved,
        QuotationStatus::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            QuotationStatus::Draft => "draft",
            QuotationStatus::Sent => "sent",
            QuotationStatus::Approved => "approved",
            QuotationStatus::Rejected => "rejected",
        }
    }

    pub fn from_str_or_default(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|s| s.as_str() == value)
            .unwrap_or_default()
    }

    pub fn label(&self) -> &'static str {
        match self {
            QuotationStatus::Draft => "Draft",
            QuotationStatus::Sent => "Sent",
            QuotationStatus::Approved => "Approved",
            QuotationStatus::Rejected => "Rejected",
        }
    }

    pub fn badge_variant(&self) -> &'static str {
        match self {
            QuotationStatus::Draft => "neutral",
            QuotationStatus::Sent => "primary",
            QuotationStatus::Approved => "success",
            QuotationStatus::Rejected => "error",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Quotation {
    pub id: i64,
    #[serde(default)]
    pub quotation_code: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub customer_id: Option<i64>,
    #[serde(default, skip_serializing)]
    pub customer_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub contract_id: Option<i64>,
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub ticket_id: Option<i64>,
    #[serde(default)]
    pub status: QuotationStatus,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub total_amount: Option<f64>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Quotation {
    pub fn code(&self) -> String {
        self.quotation_code
            .clone()
            .unwrap_or_else(|| format!("#{}", self.id))
    }
}

impl Resource for Quotation {
    type Id = i64;

    fn id(&self) -> i64 {
        self.id
    }

    fn aggregate_index() -> &'static str {
        "a007"
    }

    fn collection_path() -> &'static str {
        "/api/quotations"
    }

    fn element_name() -> &'static str {
        "Quotation"
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuotationDto {
    pub id: Option<i64>,
    pub quotation_code: String,
    pub customer_id: Option<i64>,
    pub contract_id: Option<i64>,
    pub ticket_id: String,
    pub status: QuotationStatus,
    pub total_amount: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuotationPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quotation_code: Option<String>,
    pub customer_id: Option<i64>,
    pub contract_id: Option<i64>,
    pub ticket_id: Option<String>,
    pub status: QuotationStatus,
    pub total_amount: f64,
}

impl From<&Quotation> for QuotationDto {
    fn from(q: &Quotation) -> Self {
        Self {
            id: Some(q.id),
            quotation_code: text_of(&q.quotation_code),
            customer_id: q.customer_id,
            contract_id: q.contract_id,
            ticket_id: q.ticket_id.map(|t| t.to_string()).unwrap_or_default(),
            status: q.status,
            total_amount: number_text(q.total_amount),
        }
    }
}

impl QuotationDto {
    /// Linking a contract prices the quotation from that contract's jobs.
    pub fn select_contract(&mut self, contract_id: Option<i64>, jobs: &[MaintenanceJob], call_fee: f64) {
        self.contract_id = contract_id;
        if let Some(id) = contract_id {
            self.total_amount = format_amount(quotation_total(jobs, id, call_fee));
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        require_some(&self.customer_id, "Please select a customer")
    }

    /// Updates must carry a code, so a missing one is generated from `now_millis`.
    pub fn payload(&self, now_millis: i64) -> QuotationPayload {
        let code = blank_to_none(&self.quotation_code);
        QuotationPayload {
            quotation_code: match (self.id, code) {
                (Some(_), None) => Some(format!("Q-{}", now_millis)),
                (_, code) => code,
            },
            customer_id: self.customer_id,
            contract_id: self.contract_id,
            ticket_id: blank_to_none(&self.ticket_id),
            status: self.status,
            total_amount: parse_f64(&self.total_amount).unwrap_or(0.0),
        }
    }
}

pub fn is_pending(quotation: &Quotation) -> bool {
    quotation.status == QuotationStatus::Draft
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jobs() -> Vec<MaintenanceJob> {
        vec![
            MaintenanceJob {
                id: 1,
                contract_id: Some(3),
                labor_cost: Some(600.0),
                parts_cost: Some(1100.0),
                ..MaintenanceJob::default()
            },
            MaintenanceJob {
                id: 2,
                contract_id: Some(3),
                labor_cost: Some(200.0),
                parts_cost: None,
                ..MaintenanceJob::default()
            },
        ]
    }

    #[test]
    fn test_selecting_contract_totals_its_jobs() {
        let mut draft = QuotationDto {
            customer_id: Some(1),
            ..QuotationDto::default()
        };
        draft.select_contract(Some(3), &jobs(), 300.0);
        assert_eq!(draft.contract_id, Some(3));
        assert_eq!(draft.total_amount, "2500.00");

        draft.select_contract(Some(99), &jobs(), 300.0);
        assert_eq!(draft.total_amount, "0.00");
    }

    #[test]
    fn test_clearing_contract_keeps_amount() {
        let mut draft = QuotationDto::default();
        draft.select_contract(Some(3), &jobs(), 300.0);
        draft.select_contract(None, &jobs(), 300.0);
        assert_eq!(draft.contract_id, None);
        assert_eq!(draft.total_amount, "2500.00");
    }

    #[test]
    fn test_payload_code_rules() {
        let create = QuotationDto {
            customer_id: Some(1),
            ..QuotationDto::default()
        };
        let json = serde_json::to_value(create.payload(1_700_000_000_000)).unwrap();
        assert!(json.get("quotation_code").is_none());
        assert_eq!(json["status"], "draft");
        assert_eq!(json["total_amount"], 0.0);

        let update = QuotationDto {
            id: Some(4),
            ..create.clone()
        };
        assert_eq!(
            update.payload(1_700_000_000_000).quotation_code.as_deref(),
            Some("Q-1700000000000")
        );

        let named = QuotationDto {
            id: Some(4),
            quotation_code: "Q-42".into(),
            ..create
        };
        assert_eq!(named.payload(0).quotation_code.as_deref(), Some("Q-42"));
    }

    #[test]
    fn test_requires_customer() {
        assert!(QuotationDto::default().validate().is_err());
    }
}
