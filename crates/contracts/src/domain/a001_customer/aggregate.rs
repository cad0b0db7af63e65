use serde::{Deserialize, Serialize};

use crate::domain::common::form::{require_text, text_of};
use crate::domain::common::Resource;

/// Customer company that owns buildings and contracts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub business_type: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub contact_name: Option<String>,
    #[serde(default)]
    pub contact_phone: Option<String>,
    #[serde(default)]
    pub contact_email: Option<String>,
}

impl Resource for Customer {
    type Id = i64;

    fn id(&self) -> i64 {
        self.id
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_path() -> &'static str {
        "/api/customers"
    }

    fn element_name() -> &'static str {
        "Customer"
    }
}

/// Create/update form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub business_type: String,
    pub address: String,
    pub contact_name: String,
    pub contact_phone: String,
    pub contact_email: String,
}

impl From<&Customer> for CustomerDto {
    fn from(c: &Customer) -> Self {
        Self {
            id: Some(c.id),
            name: c.name.clone(),
            business_type: text_of(&c.business_type),
            address: text_of(&c.address),
            contact_name: text_of(&c.contact_name),
            contact_phone: text_of(&c.contact_phone),
            contact_email: text_of(&c.contact_email),
        }
    }
}

impl CustomerDto {
    pub fn validate(&self) -> Result<(), String> {
        require_text(&self.name, "Customer name is required")
    }
}

/// Display name for a customer id, falling back to `#id`.
pub fn customer_name(customers: &[Customer], id: Option<i64>) -> String {
    match id {
        Some(id) => customers
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.name.clone())
            .unwrap_or_else(|| format!("#{}", id)),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dto_from_customer_and_validate() {
        let customer: Customer = serde_json::from_str(
            r#"{"id": 7, "name": "Acme", "address": "123 Main", "business_type": "FM", "contact_email": null}"#,
        )
        .unwrap();
        let dto = CustomerDto::from(&customer);
        assert_eq!(dto.id, Some(7));
        assert_eq!(dto.business_type, "FM");
        assert_eq!(dto.contact_email, "");
        assert!(dto.validate().is_ok());
        assert!(CustomerDto::default().validate().is_err());
    }

    #[test]
    fn test_customer_name_lookup() {
        let customers = vec![Customer {
            id: 1,
            name: "Acme".into(),
            ..Customer::default()
        }];
        assert_eq!(customer_name(&customers, Some(1)), "Acme");
        assert_eq!(customer_name(&customers, Some(2)), "#2");
        assert_eq!(customer_name(&customers, None), "-");
    }

    #[test]
    fn test_new_dto_omits_id() {
        let json = serde_json::to_value(CustomerDto::default()).unwrap();
        assert!(json.get("id").is_none());
    }
}
