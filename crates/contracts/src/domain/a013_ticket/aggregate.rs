use serde::{Deserialize, Serialize};

use crate::domain::common::form::{blank_to_none, require_text};

pub const TICKETS_PATH: &str = "/api/tickets";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketPriority {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl TicketPriority {
    pub const ALL: [TicketPriority; 4] = [
        TicketPriority::Low,
        TicketPriority::Medium,
        TicketPriority::High,
        TicketPriority::Critical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TicketPriority::Low => "low",
            TicketPriority::Medium => "medium",
            TicketPriority::High => "high",
            TicketPriority::Critical => "critical",
        }
    }

    pub fn from_str_or_default(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == value)
            .unwrap_or_default()
    }

    pub fn label(&self) -> &'static str {
        match self {
            TicketPriority::Low => "Low",
            TicketPriority::Medium => "Medium",
            TicketPriority::High => "High",
            TicketPriority::Critical => "Critical",
        }
    }
}

/// Service request raised against an elevator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: i64,
    #[serde(default)]
    pub elevator_id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub priority: TicketPriority,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TicketDto {
    pub elevator_id: String,
    pub title: String,
    pub description: String,
    pub priority: TicketPriority,
}

/// Body for `POST /api/tickets`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTicket {
    #[serde(rename = "elevatorId")]
    pub elevator_id: String,
    pub title: Option<String>,
    pub description: String,
    pub priority: TicketPriority,
}

impl TicketDto {
    pub fn for_elevator(elevator_id: &str) -> Self {
        Self {
            elevator_id: elevator_id.to_string(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<NewTicket, String> {
        require_text(&self.elevator_id, "Please select an elevator")?;
        require_text(&self.description, "Please describe the problem")?;
        Ok(NewTicket {
            elevator_id: self.elevator_id.clone(),
            title: blank_to_none(&self.title),
            description: self.description.trim().to_string(),
            priority: self.priority,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticket_body() {
        let mut dto = TicketDto::for_elevator("EL-7");
        assert_eq!(dto.validate(), Err("Please describe the problem".to_string()));
        dto.description = " Door stuck ".into();
        let json = serde_json::to_value(dto.validate().unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "elevatorId": "EL-7",
                "title": null,
                "description": "Door stuck",
                "priority": "medium"
            })
        );
    }

    #[test]
    fn test_elevator_required() {
        let dto = TicketDto {
            description: "Noise".into(),
            ..TicketDto::default()
        };
        assert_eq!(dto.validate(), Err("Please select an elevator".to_string()));
    }
}
