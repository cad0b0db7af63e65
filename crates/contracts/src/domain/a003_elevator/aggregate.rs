use serde::{Deserialize, Serialize};

use crate::domain::common::form::{blank_to_none, int_text, parse_i64, require_some, require_text, text_of};
use crate::domain::common::lenient;
use crate::domain::common::Resource;
use crate::shared::dates::date_input_value;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElevatorState {
    #[default]
    Normal,
    Fault,
    InMaintenance,
    WaitingMaintenance,
    WaitingQuotation,
    #[serde(other)]
    Unknown,
}

impl ElevatorState {
    pub const SELECTABLE: [ElevatorState; 5] = [
        ElevatorState::Normal,
        ElevatorState::Fault,
        ElevatorState::InMaintenance,
        ElevatorState::WaitingMaintenance,
        ElevatorState::WaitingQuotation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ElevatorState::Normal => "normal",
            ElevatorState::Fault => "fault",
            ElevatorState::InMaintenance => "in_maintenance",
            ElevatorState::WaitingMaintenance => "waiting_maintenance",
            ElevatorState::WaitingQuotation => "waiting_quotation",
            ElevatorState::Unknown => "unknown",
        }
    }

    pub fn from_str_or_default(value: &str) -> Self {
        Self::SELECTABLE
            .into_iter()
            .find(|s| s.as_str() == value)
            .unwrap_or_default()
    }

    pub fn label(&self) -> &'static str {
        match self {
            ElevatorState::Normal => "Normal",
            ElevatorState::Fault => "Fault",
            ElevatorState::InMaintenance => "In maintenance",
            ElevatorState::WaitingMaintenance => "Waiting for maintenance",
            ElevatorState::WaitingQuotation => "Waiting for quotation",
            ElevatorState::Unknown => "Unknown",
        }
    }

    pub fn badge_variant(&self) -> &'static str {
        match self {
            ElevatorState::Normal => "success",
            ElevatorState::Fault => "error",
            ElevatorState::InMaintenance => "primary",
            ElevatorState::WaitingMaintenance | ElevatorState::WaitingQuotation => "warning",
            ElevatorState::Unknown => "neutral",
        }
    }
}

/// Elevator keyed by a user supplied code.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Elevator {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub building_id: Option<i64>,
    #[serde(default, skip_serializing)]
    pub building_name: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub install_year: Option<i64>,
    #[serde(default)]
    pub install_location: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub capacity: Option<String>,
    #[serde(default)]
    pub state: ElevatorState,
    #[serde(default)]
    pub last_maintenance_at: Option<String>,
    #[serde(default)]
    pub next_maintenance_at: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub contract_id: Option<i64>,
}

impl Elevator {
    pub fn display_name(&self) -> String {
        match self.name.as_deref().filter(|n| !n.trim().is_empty()) {
            Some(name) => format!("{} ({})", name, self.id),
            None => self.id.clone(),
        }
    }
}

impl Resource for Elevator {
    type Id = String;

    fn id(&self) -> String {
        self.id.clone()
    }

    fn aggregate_index() -> &'static str {
        "a003"
    }

    fn collection_path() -> &'static str {
        "/api/elevators"
    }

    fn element_name() -> &'static str {
        "Elevator"
    }
}

/// Form draft. `id` is typed by the user on create and frozen afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElevatorDto {
    pub existing: bool,
    pub id: String,
    pub name: String,
    pub building_id: Option<i64>,
    pub brand: String,
    pub model: String,
    pub install_year: String,
    pub install_location: String,
    pub capacity: String,
    pub state: ElevatorState,
    pub last_maintenance_at: String,
}

/// Body sent to the API. `id` only appears on create.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElevatorPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub building_id: Option<i64>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub install_year: Option<i64>,
    pub install_location: Option<String>,
    pub capacity: Option<String>,
    pub state: ElevatorState,
    pub last_maintenance_at: Option<String>,
}

impl From<&Elevator> for ElevatorDto {
    fn from(e: &Elevator) -> Self {
        Self {
            existing: true,
            id: e.id.clone(),
            name: text_of(&e.name),
            building_id: e.building_id,
            brand: text_of(&e.brand),
            model: text_of(&e.model),
            install_year: int_text(e.install_year),
            install_location: text_of(&e.install_location),
            capacity: text_of(&e.capacity),
            state: e.state,
            last_maintenance_at: date_input_value(e.last_maintenance_at.as_deref()),
        }
    }
}

impl ElevatorDto {
    pub fn is_edit_mode(&self) -> bool {
        self.existing
    }

    /// Ignored once the record exists.
    pub fn set_id(&mut self, value: String) {
        if !self.existing {
            self.id = value;
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if !self.existing {
            require_text(&self.id, "Elevator code is required")?;
        }
        require_text(&self.name, "Elevator name is required")?;
        require_some(&self.building_id, "Please select a building")
    }

    pub fn payload(&self) -> ElevatorPayload {
        ElevatorPayload {
            id: (!self.existing).then(|| self.id.trim().to_string()),
            name: self.name.trim().to_string(),
            building_id: self.building_id,
            brand: blank_to_none(&self.brand),
            model: blank_to_none(&self.model),
            install_year: parse_i64(&self.install_year),
            install_location: blank_to_none(&self.install_location),
            capacity: blank_to_none(&self.capacity),
            state: self.state,
            last_maintenance_at: blank_to_none(&self.last_maintenance_at),
        }
    }
}

pub fn elevator_label(elevators: &[Elevator], id: &str) -> String {
    elevators
        .iter()
        .find(|e| e.id == id)
        .map(Elevator::display_name)
        .unwrap_or_else(|| id.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored() -> Elevator {
        serde_json::from_str(
            r#"{
                "id": "EL-001", "name": "Tower A #1", "building_id": 3,
                "brand": "Kone", "install_year": "2015", "capacity": 1000,
                "state": "waiting_quotation", "last_maintenance_at": "2024-02-01T00:00:00.000Z",
                "contract_id": 5
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_id_is_sent_only_on_create() {
        let mut draft = ElevatorDto {
            name: "Lobby".into(),
            building_id: Some(1),
            ..ElevatorDto::default()
        };
        assert_eq!(draft.validate(), Err("Elevator code is required".to_string()));
        draft.set_id("EL-9".into());
        let json = serde_json::to_value(draft.payload()).unwrap();
        assert_eq!(json["id"], "EL-9");

        let edit = ElevatorDto::from(&stored());
        let json = serde_json::to_value(edit.payload()).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["state"], "waiting_quotation");
        assert_eq!(json["install_year"], 2015);
        assert_eq!(json["last_maintenance_at"], "2024-02-01");
    }

    #[test]
    fn test_id_is_frozen_on_edit() {
        let mut edit = ElevatorDto::from(&stored());
        edit.set_id("OTHER".into());
        assert_eq!(edit.id, "EL-001");
        assert!(edit.is_edit_mode());
        assert!(edit.validate().is_ok());
    }

    #[test]
    fn test_unknown_state_does_not_break_list() {
        let e: Elevator = serde_json::from_str(r#"{"id": "X", "state": "decommissioned"}"#).unwrap();
        assert_eq!(e.state, ElevatorState::Unknown);
        assert_eq!(ElevatorState::from_str_or_default("fault"), ElevatorState::Fault);
        assert_eq!(ElevatorState::from_str_or_default("bogus"), ElevatorState::Normal);
    }

    #[test]
    fn test_labels() {
        assert_eq!(stored().display_name(), "Tower A #1 (EL-001)");
        assert_eq!(elevator_label(&[stored()], "EL-404"), "EL-404");
    }
}
