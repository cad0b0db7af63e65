use serde::{Deserialize, Serialize};

use crate::domain::a007_quotation::aggregate::Quotation;
use crate::domain::common::form::{blank_to_none, number_text, parse_f64, require_some, text_of};
use crate::domain::common::lenient;
use crate::domain::common::Resource;
use crate::shared::dates::date_input_value;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    #[default]
    Unpaid,
    Partial,
    Paid,
    Cancelled,
}

impl InvoiceStatus {
    pub const ALL: [InvoiceStatus; 4] = [
        InvoiceStatus::Unpaid,
        InvoiceStatus::Partial,
        InvoiceStatus::Paid,
        InvoiceStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Unpaid => "unpaid",
            InvoiceStatus::Partial => "partial",
            InvoiceStatus::Paid => "paid",
            InvoiceStatus::Cancelled => "cancelled",
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
            InvoiceStatus::Unpaid => "Unpaid",
            InvoiceStatus::Partial => "Partially paid",
            InvoiceStatus::Paid => "Paid",
            InvoiceStatus::Cancelled => "Cancelled",
        }
    }

    pub fn badge_variant(&self) -> &'static str {
        match self {
            InvoiceStatus::Unpaid => "error",
            InvoiceStatus::Partial => "warning",
            InvoiceStatus::Paid => "success",
            InvoiceStatus::Cancelled => "neutral",
        }
    }

    /// Money is still owed.
    pub fn is_open(&self) -> bool {
        matches!(self, InvoiceStatus::Unpaid | InvoiceStatus::Partial)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: i64,
    #[serde(default)]
    pub invoice_code: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub customer_id: Option<i64>,
    #[serde(default, skip_serializing)]
    pub customer_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub quotation_id: Option<i64>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub total_amount: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub paid_amount: Option<f64>,
    #[serde(default)]
    pub status: InvoiceStatus,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Invoice {
    pub fn code(&self) -> String {
        self.invoice_code
            .clone()
            .unwrap_or_else(|| format!("#{}", self.id))
    }

    pub fn outstanding(&self) -> f64 {
        (self.total_amount.unwrap_or(0.0) - self.paid_amount.unwrap_or(0.0)).max(0.0)
    }
}

impl Resource for Invoice {
    type Id = i64;

    fn id(&self) -> i64 {
        self.id
    }

    fn aggregate_index() -> &'static str {
        "a008"
    }

    fn collection_path() -> &'static str {
        "/api/invoices"
    }

    fn element_name() -> &'static str {
        "Invoice"
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InvoiceDto {
    pub id: Option<i64>,
    pub invoice_code: String,
    pub customer_id: Option<i64>,
    pub quotation_id: Option<i64>,
    pub total_amount: String,
    pub paid_amount: String,
    pub status: InvoiceStatus,
    pub due_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvoicePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_code: Option<String>,
    pub customer_id: Option<i64>,
    pub quotation_id: Option<i64>,
    pub total_amount: f64,
    pub paid_amount: f64,
    pub status: InvoiceStatus,
    pub due_date: Option<String>,
}

impl From<&Invoice> for InvoiceDto {
    fn from(i: &Invoice) -> Self {
        Self {
            id: Some(i.id),
            invoice_code: text_of(&i.invoice_code),
            customer_id: i.customer_id,
            quotation_id: i.quotation_id,
            total_amount: number_text(i.total_amount),
            paid_amount: number_text(i.paid_amount),
            status: i.status,
            due_date: date_input_value(i.due_date.as_deref()),
        }
    }
}

impl InvoiceDto {
    /// Linking a quotation copies its total; an unknown or empty total leaves the field blank.
    pub fn select_quotation(&mut self, quotation_id: Option<i64>, quotations: &[Quotation]) {
        self.quotation_id = quotation_id;
        if let Some(id) = quotation_id {
            self.total_amount = quotations
                .iter()
                .find(|q| q.id == id)
                .and_then(|q| q.total_amount)
                .map(|t| t.to_string())
                .unwrap_or_default();
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        require_some(&self.customer_id, "Please select a customer")
    }

    pub fn payload(&self, now_millis: i64) -> InvoicePayload {
        let code = blank_to_none(&self.invoice_code);
        InvoicePayload {
            invoice_code: match (self.id, code) {
                (Some(_), None) => Some(format!("I-{}", now_millis)),
                (_, code) => code,
            },
            customer_id: self.customer_id,
            quotation_id: self.quotation_id,
            total_amount: parse_f64(&self.total_amount).unwrap_or(0.0),
            paid_amount: parse_f64(&self.paid_amount).unwrap_or(0.0),
            status: self.status,
            due_date: blank_to_none(&self.due_date),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quotations() -> Vec<Quotation> {
        vec![
            Quotation {
                id: 1,
                total_amount: Some(2500.5),
                ..Quotation::default()
            },
            Quotation {
                id: 2,
                total_amount: None,
                ..Quotation::default()
            },
        ]
    }

    #[test]
    fn test_selecting_quotation_copies_total() {
        let mut draft = InvoiceDto::default();
        draft.select_quotation(Some(1), &quotations());
        assert_eq!(draft.total_amount, "2500.5");
        draft.select_quotation(Some(2), &quotations());
        assert_eq!(draft.total_amount, "");
    }

    #[test]
    fn test_open_statuses() {
        assert!(InvoiceStatus::Unpaid.is_open());
        assert!(InvoiceStatus::Partial.is_open());
        assert!(!InvoiceStatus::Paid.is_open());
        assert!(!InvoiceStatus::Cancelled.is_open());
    }

    #[test]
    fn test_payload() {
        let draft = InvoiceDto {
            id: Some(3),
            customer_id: Some(1),
            total_amount: "1000".into(),
            paid_amount: "".into(),
            status: InvoiceStatus::Partial,
            ..InvoiceDto::default()
        };
        let json = serde_json::to_value(draft.payload(55)).unwrap();
        assert_eq!(json["invoice_code"], "I-55");
        assert_eq!(json["paid_amount"], 0.0);
        assert_eq!(json["status"], "partial");
        assert!(json["due_date"].is_null());
    }

    #[test]
    fn test_outstanding() {
        let invoice = Invoice {
            id: 1,
            total_amount: Some(1000.0),
            paid_amount: Some(400.0),
            ..Invoice::default()
        };
        assert_eq!(invoice.outstanding(), 600.0);
    }
}
