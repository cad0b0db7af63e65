use serde::{Deserialize, Serialize};

use crate::domain::common::form::{require_some, text_of};
use crate::domain::common::lenient;
use crate::domain::common::Resource;

/// Approved technician profile linked to a user account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Technician {
    pub id: i64,
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub user_id: Option<i64>,
    #[serde(default, skip_serializing)]
    pub name: Option<String>,
    #[serde(default, skip_serializing)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub specialty: Option<String>,
    #[serde(default)]
    pub experience: Option<String>,
    #[serde(default)]
    pub education: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Technician {
    pub fn display_name(&self) -> String {
        self.name
            .clone()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| format!("Technician #{}", self.id))
    }
}

impl Resource for Technician {
    type Id = i64;

    fn id(&self) -> i64 {
        self.id
    }

    fn aggregate_index() -> &'static str {
        "a004"
    }

    fn collection_path() -> &'static str {
        "/api/technicians"
    }

    fn element_name() -> &'static str {
        "Technician"
    }
}

/// User account with the technician role (`/api/technician-users`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TechnicianUser {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
}

pub const TECHNICIAN_USERS_PATH: &str = "/api/technician-users";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TechnicianDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub user_id: Option<i64>,
    pub phone: String,
    pub specialty: String,
    pub notes: String,
}

impl From<&Technician> for TechnicianDto {
    fn from(t: &Technician) -> Self {
        Self {
            id: Some(t.id),
            user_id: t.user_id,
            phone: text_of(&t.phone),
            specialty: text_of(&t.specialty),
            notes: text_of(&t.notes),
        }
    }
}

impl TechnicianDto {
    pub fn validate(&self) -> Result<(), String> {
        require_some(&self.user_id, "Please select a user account")
    }
}

/// Technician record owned by `user_id`, if any.
pub fn technician_for_user(technicians: &[Technician], user_id: i64) -> Option<&Technician> {
    technicians.iter().find(|t| t.user_id == Some(user_id))
}

/// A technician user is approved once a technician record points at them.
pub fn is_approved_technician(technicians: &[Technician], user_id: i64) -> bool {
    technician_for_user(technicians, user_id).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approval_by_user_id() {
        let technicians = vec![Technician {
            id: 3,
            user_id: Some(42),
            ..Technician::default()
        }];
        assert!(is_approved_technician(&technicians, 42));
        assert!(!is_approved_technician(&technicians, 43));
        assert_eq!(technician_for_user(&technicians, 42).map(|t| t.id), Some(3));
    }

    #[test]
    fn test_dto_requires_user() {
        assert!(TechnicianDto::default().validate().is_err());
        let dto = TechnicianDto {
            user_id: Some(1),
            ..TechnicianDto::default()
        };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_display_name_fallback() {
        let t = Technician {
            id: 9,
            ..Technician::default()
        };
        assert_eq!(t.display_name(), "Technician #9");
    }
}
