use serde::{Deserialize, Serialize};

use crate::domain::a001_customer::aggregate::Customer;
use crate::domain::common::form::{require_some, require_text, text_of};
use crate::domain::common::lenient;
use crate::domain::common::Resource;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Building {
    pub id: i64,
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub customer_id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub building_type: Option<String>,
    /// Joined by the API on list endpoints.
    #[serde(default, skip_serializing)]
    pub customer_name: Option<String>,
}

impl Resource for Building {
    type Id = i64;

    fn id(&self) -> i64 {
        self.id
    }

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn collection_path() -> &'static str {
        "/api/buildings"
    }

    fn element_name() -> &'static str {
        "Building"
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuildingDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub customer_id: Option<i64>,
    pub name: String,
    pub address: String,
    pub building_type: String,
}

impl From<&Building> for BuildingDto {
    fn from(b: &Building) -> Self {
        Self {
            id: Some(b.id),
            customer_id: b.customer_id,
            name: b.name.clone(),
            address: text_of(&b.address),
            building_type: text_of(&b.building_type),
        }
    }
}

impl BuildingDto {
    /// Picking a customer copies its profile into the draft; clearing the
    /// selection clears those fields again.
    pub fn select_customer(&mut self, customer_id: Option<i64>, customers: &[Customer]) {
        self.customer_id = customer_id;
        match customer_id {
            None => {
                self.name.clear();
                self.address.clear();
                self.building_type.clear();
            }
            Some(id) => {
                if let Some(customer) = customers.iter().find(|c| c.id == id) {
                    self.name = customer.name.clone();
                    self.address = text_of(&customer.address);
                    self.building_type = text_of(&customer.business_type);
                }
            }
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        require_some(&self.customer_id, "Please select a customer")?;
        require_text(&self.name, "Building name is required")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customers() -> Vec<Customer> {
        vec![
            Customer {
                id: 7,
                name: "Acme".into(),
                address: Some("123 Main".into()),
                business_type: Some("FM".into()),
                ..Customer::default()
            },
            Customer {
                id: 8,
                name: "Bare".into(),
                ..Customer::default()
            },
        ]
    }

    #[test]
    fn test_selecting_customer_fills_draft() {
        let mut draft = BuildingDto::default();
        draft.select_customer(Some(7), &customers());
        assert_eq!(draft.customer_id, Some(7));
        assert_eq!(draft.name, "Acme");
        assert_eq!(draft.address, "123 Main");
        assert_eq!(draft.building_type, "FM");
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_missing_profile_fields_become_empty() {
        let mut draft = BuildingDto::default();
        draft.select_customer(Some(7), &customers());
        draft.select_customer(Some(8), &customers());
        assert_eq!(draft.name, "Bare");
        assert_eq!(draft.address, "");
        assert_eq!(draft.building_type, "");
    }

    #[test]
    fn test_clearing_selection_clears_fields() {
        let mut draft = BuildingDto::default();
        draft.select_customer(Some(7), &customers());
        draft.select_customer(None, &customers());
        assert_eq!(draft, BuildingDto::default());
        assert_eq!(draft.validate(), Err("Please select a customer".to_string()));
    }
}
