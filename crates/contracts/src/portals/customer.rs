use std::collections::HashSet;

use chrono::NaiveDate;

use crate::domain::a001_customer::aggregate::Customer;
use crate::domain::a002_building::aggregate::Building;
use crate::domain::a003_elevator::aggregate::Elevator;
use crate::domain::a006_contract::aggregate::Contract;
use crate::domain::a007_quotation::aggregate::{is_pending, Quotation};
use crate::domain::a008_invoice::aggregate::Invoice;
use crate::system::auth::{Role, UserInfo};

pub const RECENT_INVOICES_LIMIT: usize = 5;
pub const EXPIRING_CONTRACTS_LIMIT: usize = 3;

/// Customer whose records the portal shows.
pub fn resolve_customer(
    user: &UserInfo,
    customers: &[Customer],
    selected: Option<i64>,
) -> Result<Option<i64>, String> {
    match user.role {
        Role::Admin => Ok(selected
            .filter(|id| customers.iter().any(|c| c.id == *id))
            .or_else(|| customers.first().map(|c| c.id))),
        Role::Customer => user
            .customer_id
            .map(Some)
            .ok_or_else(|| "Customer ID not found".to_string()),
        Role::Technician => Err("The customer portal is not available for technician accounts".into()),
    }
}

/// Collections narrowed to one customer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomerPortalData {
    pub buildings: Vec<Building>,
    pub elevators: Vec<Elevator>,
    pub contracts: Vec<Contract>,
    pub quotations: Vec<Quotation>,
    pub invoices: Vec<Invoice>,
}

impl CustomerPortalData {
    pub fn scoped(
        customer_id: i64,
        buildings: Vec<Building>,
        elevators: Vec<Elevator>,
        contracts: Vec<Contract>,
        quotations: Vec<Quotation>,
        invoices: Vec<Invoice>,
    ) -> Self {
        let owned = Some(customer_id);
        let buildings: Vec<Building> = buildings
            .into_iter()
            .filter(|b| b.customer_id == owned)
            .collect();
        let building_ids: HashSet<i64> = buildings.iter().map(|b| b.id).collect();
        let elevators = elevators
            .into_iter()
            .filter(|e| e.building_id.is_some_and(|id| building_ids.contains(&id)))
            .collect();
        Self {
            buildings,
            elevators,
            contracts: contracts.into_iter().filter(|c| c.customer_id == owned).collect(),
            quotations: quotations.into_iter().filter(|q| q.customer_id == owned).collect(),
            invoices: invoices.into_iter().filter(|i| i.customer_id == owned).collect(),
        }
    }

    pub fn stats(&self, today: NaiveDate) -> CustomerPortalStats {
        let mut recent_invoices = self.invoices.clone();
        recent_invoices.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        recent_invoices.truncate(RECENT_INVOICES_LIMIT);
        CustomerPortalStats {
            active_contracts: self.contracts.iter().filter(|c| c.is_active(today)).count(),
            pending_quotations: self.quotations.iter().filter(|q| is_pending(q)).count(),
            open_invoices: self.invoices.iter().filter(|i| i.status.is_open()).count(),
            recent_invoices,
            expiring_contracts: self
                .contracts
                .iter()
                .filter(|c| c.is_expiring_soon(today))
                .take(EXPIRING_CONTRACTS_LIMIT)
                .cloned()
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomerPortalStats {
    pub active_contracts: usize,
    pub pending_quotations: usize,
    pub open_invoices: usize,
    pub recent_invoices: Vec<Invoice>,
    pub expiring_contracts: Vec<Contract>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a007_quotation::aggregate::QuotationStatus;
    use crate::domain::a008_invoice::aggregate::InvoiceStatus;

    fn user(role: Role, customer_id: Option<i64>) -> UserInfo {
        UserInfo {
            id: 1,
            name: "u".into(),
            email: "u@x.io".into(),
            role,
            customer_id,
        }
    }

    fn customers() -> Vec<Customer> {
        vec![
            Customer {
                id: 7,
                name: "Acme".into(),
                ..Customer::default()
            },
            Customer {
                id: 8,
                name: "Beta".into(),
                ..Customer::default()
            },
        ]
    }

    #[test]
    fn test_subject_resolution() {
        assert_eq!(resolve_customer(&user(Role::Admin, None), &customers(), None), Ok(Some(7)));
        assert_eq!(resolve_customer(&user(Role::Admin, None), &customers(), Some(8)), Ok(Some(8)));
        assert_eq!(resolve_customer(&user(Role::Customer, Some(8)), &[], None), Ok(Some(8)));
        assert_eq!(
            resolve_customer(&user(Role::Customer, None), &customers(), None),
            Err("Customer ID not found".to_string())
        );
        assert!(resolve_customer(&user(Role::Technician, None), &customers(), None).is_err());
    }

    #[test]
    fn test_cross_filter_and_stats() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let buildings = vec![
            Building {
                id: 1,
                customer_id: Some(7),
                name: "Tower".into(),
                ..Building::default()
            },
            Building {
                id: 2,
                customer_id: Some(8),
                name: "Other".into(),
                ..Building::default()
            },
        ];
        let elevators = vec![
            Elevator {
                id: "EL-1".into(),
                building_id: Some(1),
                ..Elevator::default()
            },
            Elevator {
                id: "EL-2".into(),
                building_id: Some(2),
                ..Elevator::default()
            },
            Elevator {
                id: "EL-3".into(),
                building_id: None,
                ..Elevator::default()
            },
        ];
        let contract = |id: i64, customer: i64, start: &str, end: &str| Contract {
            id,
            customer_id: Some(customer),
            contract_code: format!("C-{}", id),
            start_date: Some(start.into()),
            end_date: Some(end.into()),
            ..Contract::default()
        };
        let contracts = vec![
            contract(1, 7, "2024-01-01", "2024-07-01"),
            contract(2, 7, "2024-01-01", "2025-12-31"),
            contract(3, 8, "2024-01-01", "2024-07-01"),
        ];
        let quotations = vec![
            Quotation {
                id: 1,
                customer_id: Some(7),
                status: QuotationStatus::Draft,
                ..Quotation::default()
            },
            Quotation {
                id: 2,
                customer_id: Some(7),
                status: QuotationStatus::Approved,
                ..Quotation::default()
            },
        ];
        let invoices: Vec<Invoice> = (1..=7)
            .map(|id| Invoice {
                id,
                customer_id: Some(7),
                status: if id % 2 == 0 {
                    InvoiceStatus::Paid
                } else {
                    InvoiceStatus::Partial
                },
                ..Invoice::default()
            })
            .collect();

        let data = CustomerPortalData::scoped(7, buildings, elevators, contracts, quotations, invoices);
        assert_eq!(data.buildings.len(), 1);
        assert_eq!(
            data.elevators.iter().map(|e| e.id.as_str()).collect::<Vec<_>>(),
            vec!["EL-1"]
        );
        assert_eq!(data.contracts.len(), 2);

        let stats = data.stats(today);
        assert_eq!(stats.active_contracts, 2);
        assert_eq!(stats.pending_quotations, 1);
        assert_eq!(stats.open_invoices, 4);
        assert_eq!(
            stats.recent_invoices.iter().map(|i| i.id).collect::<Vec<_>>(),
            vec![7, 6, 5, 4, 3]
        );
        assert_eq!(
            stats.expiring_contracts.iter().map(|c| c.id).collect::<Vec<_>>(),
            vec![1]
        );
    }
}
