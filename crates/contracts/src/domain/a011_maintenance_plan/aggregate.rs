use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::a003_elevator::aggregate::Elevator;
use crate::domain::a006_contract::aggregate::{find_contract, Contract};
use crate::domain::common::form::{blank_to_none, parse_i64, require_some, require_text};
use crate::domain::common::lenient;
use crate::domain::common::Resource;
use crate::shared::dates::date_input_value;
use crate::shared::metrics::{plan_urgency, PlanUrgency};

/// Visits per year used when the contract gives none.
pub const DEFAULT_FREQUENCY_PER_YEAR: i64 = 4;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MaintenancePlan {
    pub id: i64,
    pub elevator_id: String,
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub contract_id: Option<i64>,
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub template_id: Option<i64>,
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub frequency_per_year: Option<i64>,
    #[serde(default)]
    pub next_run_at: Option<String>,
    #[serde(default)]
    pub last_run_at: Option<String>,
    #[serde(default = "active_by_default", with = "lenient::flag")]
    pub is_active: bool,
}

fn active_by_default() -> bool {
    true
}

impl MaintenancePlan {
    pub fn urgency(&self, today: NaiveDate) -> PlanUrgency {
        plan_urgency(self.next_run_at.as_deref(), today)
    }
}

impl Resource for MaintenancePlan {
    type Id = i64;

    fn id(&self) -> i64 {
        self.id
    }

    fn aggregate_index() -> &'static str {
        "a011"
    }

    fn collection_path() -> &'static str {
        "/api/maintenance/plans"
    }

    fn element_name() -> &'static str {
        "Maintenance plan"
    }
}

/// Frequency implied by a contract: none for per-call, the contract's own count, else the default.
pub fn frequency_for_contract(contract: Option<&Contract>) -> i64 {
    match contract {
        Some(c) if c.is_per_call() => 0,
        Some(c) => c
            .maintenance_times_per_year
            .filter(|n| *n != 0)
            .unwrap_or(DEFAULT_FREQUENCY_PER_YEAR),
        None => DEFAULT_FREQUENCY_PER_YEAR,
    }
}

/// Form draft. Scheduling is switched off while the linked contract is per-call.
#[derive(Debug, Clone, PartialEq)]
pub struct MaintenancePlanDto {
    pub id: Option<i64>,
    pub elevator_id: String,
    pub contract_id: Option<i64>,
    pub template_id: Option<i64>,
    pub frequency_per_year: String,
    pub next_run_at: String,
    pub is_active: bool,
    pub per_call: bool,
}

impl Default for MaintenancePlanDto {
    fn default() -> Self {
        Self {
            id: None,
            elevator_id: String::new(),
            contract_id: None,
            template_id: None,
            frequency_per_year: DEFAULT_FREQUENCY_PER_YEAR.to_string(),
            next_run_at: String::new(),
            is_active: true,
            per_call: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaintenancePlanPayload {
    pub elevator_id: String,
    pub contract_id: Option<i64>,
    pub template_id: Option<i64>,
    pub frequency_per_year: i64,
    pub next_run_at: Option<String>,
    #[serde(with = "lenient::flag")]
    pub is_active: bool,
}

impl MaintenancePlanDto {
    /// Edit draft. The elevator's own next maintenance date wins over the plan's.
    pub fn from_plan(plan: &MaintenancePlan, elevators: &[Elevator], contracts: &[Contract]) -> Self {
        let elevator_next = elevators
            .iter()
            .find(|e| e.id == plan.elevator_id)
            .and_then(|e| e.next_maintenance_at.as_deref())
            .filter(|v| !v.trim().is_empty());
        let next_run_at = date_input_value(elevator_next.or(plan.next_run_at.as_deref()));
        let per_call = find_contract(contracts, plan.contract_id).is_some_and(Contract::is_per_call);
        Self {
            id: Some(plan.id),
            elevator_id: plan.elevator_id.clone(),
            contract_id: plan.contract_id,
            template_id: plan.template_id,
            frequency_per_year: plan
                .frequency_per_year
                .unwrap_or(DEFAULT_FREQUENCY_PER_YEAR)
                .to_string(),
            next_run_at,
            is_active: plan.is_active,
            per_call,
        }
    }

    pub fn scheduling_enabled(&self) -> bool {
        !self.per_call
    }

    /// Picking an elevator pulls in its contract, frequency and next maintenance date.
    pub fn select_elevator(&mut self, elevator_id: &str, elevators: &[Elevator], contracts: &[Contract]) {
        self.elevator_id = elevator_id.to_string();
        if elevator_id.is_empty() {
            return;
        }
        let elevator = elevators.iter().find(|e| e.id == elevator_id);
        let contract_id = elevator.and_then(|e| e.contract_id);
        self.apply_contract(contract_id, contracts);
        self.next_run_at = date_input_value(elevator.and_then(|e| e.next_maintenance_at.as_deref()));
    }

    pub fn select_contract(&mut self, contract_id: Option<i64>, contracts: &[Contract]) {
        self.apply_contract(contract_id, contracts);
    }

    fn apply_contract(&mut self, contract_id: Option<i64>, contracts: &[Contract]) {
        let contract = find_contract(contracts, contract_id);
        self.contract_id = contract_id;
        self.per_call = contract.is_some_and(Contract::is_per_call);
        self.frequency_per_year = frequency_for_contract(contract).to_string();
    }

    pub fn validate(&self) -> Result<(), String> {
        require_text(&self.elevator_id, "Please select an elevator")?;
        require_some(&self.template_id, "Please select a template")
    }

    pub fn payload(&self) -> MaintenancePlanPayload {
        MaintenancePlanPayload {
            elevator_id: self.elevator_id.clone(),
            contract_id: self.contract_id,
            template_id: self.template_id,
            frequency_per_year: if self.per_call {
                0
            } else {
                parse_i64(&self.frequency_per_year).unwrap_or(0)
            },
            next_run_at: if self.per_call {
                None
            } else {
                blank_to_none(&self.next_run_at)
            },
            is_active: self.is_active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a006_contract::aggregate::ContractType;

    fn contracts() -> Vec<Contract> {
        vec![
            Contract {
                id: 1,
                contract_code: "AN-1".into(),
                contract_type: ContractType::Annual,
                maintenance_times_per_year: Some(12),
                ..Contract::default()
            },
            Contract {
                id: 2,
                contract_code: "PC-1".into(),
                contract_type: ContractType::PerCall,
                maintenance_times_per_year: Some(6),
                ..Contract::default()
            },
            Contract {
                id: 3,
                contract_code: "AN-2".into(),
                contract_type: ContractType::Annual,
                maintenance_times_per_year: None,
                ..Contract::default()
            },
        ]
    }

    fn elevators() -> Vec<Elevator> {
        vec![
            Elevator {
                id: "EL-1".into(),
                contract_id: Some(1),
                next_maintenance_at: Some("2024-07-01T00:00:00.000Z".into()),
                ..Elevator::default()
            },
            Elevator {
                id: "EL-2".into(),
                contract_id: Some(2),
                ..Elevator::default()
            },
            Elevator {
                id: "EL-3".into(),
                ..Elevator::default()
            },
        ]
    }

    #[test]
    fn test_selecting_elevator_uses_annual_contract() {
        let mut draft = MaintenancePlanDto::default();
        draft.select_elevator("EL-1", &elevators(), &contracts());
        assert_eq!(draft.contract_id, Some(1));
        assert_eq!(draft.frequency_per_year, "12");
        assert_eq!(draft.next_run_at, "2024-07-01");
        assert!(draft.scheduling_enabled());
    }

    #[test]
    fn test_per_call_contract_disables_scheduling() {
        let mut draft = MaintenancePlanDto::default();
        draft.select_elevator("EL-2", &elevators(), &contracts());
        assert_eq!(draft.frequency_per_year, "0");
        assert!(!draft.scheduling_enabled());
        draft.next_run_at = "2024-09-01".into();
        draft.template_id = Some(1);
        let payload = draft.payload();
        assert_eq!(payload.frequency_per_year, 0);
        assert_eq!(payload.next_run_at, None);
    }

    #[test]
    fn test_elevator_without_contract_defaults() {
        let mut draft = MaintenancePlanDto::default();
        draft.frequency_per_year = "9".into();
        draft.select_elevator("EL-3", &elevators(), &contracts());
        assert_eq!(draft.contract_id, None);
        assert_eq!(draft.frequency_per_year, "4");
        assert_eq!(draft.next_run_at, "");
    }

    #[test]
    fn test_manual_contract_change_recomputes_frequency() {
        let mut draft = MaintenancePlanDto::default();
        draft.select_elevator("EL-1", &elevators(), &contracts());
        draft.select_contract(Some(3), &contracts());
        assert_eq!(draft.frequency_per_year, "4");
        draft.select_contract(Some(2), &contracts());
        assert_eq!(draft.frequency_per_year, "0");
        assert!(draft.per_call);
        draft.select_contract(None, &contracts());
        assert!(!draft.per_call);
        assert_eq!(draft.next_run_at, "2024-07-01");
    }

    #[test]
    fn test_edit_prefers_elevator_date() {
        let plan: MaintenancePlan = serde_json::from_str(
            r#"{"id": 5, "elevator_id": "EL-1", "contract_id": 1, "template_id": 2,
                "frequency_per_year": 12, "next_run_at": "2024-06-20", "is_active": 0}"#,
        )
        .unwrap();
        assert!(!plan.is_active);
        let draft = MaintenancePlanDto::from_plan(&plan, &elevators(), &contracts());
        assert_eq!(draft.next_run_at, "2024-07-01");
        assert!(!draft.is_active);

        let orphan = MaintenancePlan {
            elevator_id: "EL-3".into(),
            ..plan
        };
        let draft = MaintenancePlanDto::from_plan(&orphan, &elevators(), &contracts());
        assert_eq!(draft.next_run_at, "2024-06-20");
    }

    #[test]
    fn test_payload_and_validation() {
        let mut draft = MaintenancePlanDto::default();
        assert_eq!(draft.validate(), Err("Please select an elevator".to_string()));
        draft.select_elevator("EL-1", &elevators(), &contracts());
        assert_eq!(draft.validate(), Err("Please select a template".to_string()));
        draft.template_id = Some(2);
        assert!(draft.validate().is_ok());
        let json = serde_json::to_value(draft.payload()).unwrap();
        assert_eq!(json["is_active"], 1);
        assert_eq!(json["frequency_per_year"], 12);
        assert_eq!(json["next_run_at"], "2024-07-01");
    }

    #[test]
    fn test_missing_flag_defaults_to_active() {
        let plan: MaintenancePlan = serde_json::from_str(r#"{"id": 1, "elevator_id": "EL-1"}"#).unwrap();
        assert!(plan.is_active);
    }
}
