use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::form::require_text;
use crate::domain::common::lenient;
use crate::domain::common::Resource;
use crate::shared::dates::parse_date;
use crate::shared::metrics::age_on;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::Approved => "approved",
            RequestStatus::Rejected => "rejected",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "Pending review",
            RequestStatus::Approved => "Approved",
            RequestStatus::Rejected => "Rejected",
        }
    }

    pub fn badge_variant(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "warning",
            RequestStatus::Approved => "success",
            RequestStatus::Rejected => "error",
        }
    }
}

/// Application to become a technician.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TechnicianRequest {
    pub id: i64,
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub specialty: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub age: Option<i64>,
    #[serde(default)]
    pub experience: Option<String>,
    #[serde(default)]
    pub education: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub status: RequestStatus,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Resource for TechnicianRequest {
    type Id = i64;

    fn id(&self) -> i64 {
        self.id
    }

    fn aggregate_index() -> &'static str {
        "a005"
    }

    fn collection_path() -> &'static str {
        "/api/technician-requests"
    }

    fn element_name() -> &'static str {
        "Technician request"
    }
}

/// Review decision sent with `PUT /api/technician-requests/:id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RequestDecision {
    pub status: RequestStatus,
}

impl RequestDecision {
    pub fn approve() -> Self {
        Self {
            status: RequestStatus::Approved,
        }
    }

    pub fn reject() -> Self {
        Self {
            status: RequestStatus::Rejected,
        }
    }
}

/// Application form filled in by a not yet approved technician.
/// `age` is derived from `date_of_birth` and never typed in.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TechnicianRequestDto {
    pub phone: String,
    pub specialty: String,
    pub notes: String,
    pub address: String,
    pub date_of_birth: String,
    pub age: Option<u32>,
    pub experience: String,
    pub education: String,
}

impl TechnicianRequestDto {
    pub fn set_date_of_birth(&mut self, value: &str, today: NaiveDate) {
        self.date_of_birth = value.to_string();
        self.age = parse_date(value).and_then(|dob| age_on(dob, today));
    }

    pub fn age_text(&self) -> String {
        self.age.map(|a| a.to_string()).unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), String> {
        require_text(&self.phone, "Phone is required")?;
        require_text(&self.specialty, "Specialty is required")?;
        require_text(&self.address, "Address is required")?;
        require_text(&self.date_of_birth, "Date of birth is required")?;
        if self.age.is_none() {
            return Err("Date of birth must be in the past".into());
        }
        require_text(&self.experience, "Experience is required")?;
        require_text(&self.education, "Education is required")
    }
}

/// Latest request filed by `user_id`.
pub fn latest_request_for_user(requests: &[TechnicianRequest], user_id: i64) -> Option<&TechnicianRequest> {
    requests
        .iter()
        .filter(|r| r.user_id == Some(user_id))
        .max_by_key(|r| r.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn filled() -> TechnicianRequestDto {
        let mut dto = TechnicianRequestDto {
            phone: "0812345678".into(),
            specialty: "Hydraulic".into(),
            address: "Bangkok".into(),
            experience: "5 years".into(),
            education: "Vocational".into(),
            ..TechnicianRequestDto::default()
        };
        dto.set_date_of_birth("1990-07-01", today());
        dto
    }

    #[test]
    fn test_age_follows_date_of_birth() {
        let mut dto = filled();
        assert_eq!(dto.age, Some(33));
        assert_eq!(dto.age_text(), "33");
        dto.set_date_of_birth("2030-01-01", today());
        assert_eq!(dto.age, None);
        assert_eq!(dto.age_text(), "");
        dto.set_date_of_birth("", today());
        assert_eq!(dto.age, None);
    }

    #[test]
    fn test_validation() {
        assert!(filled().validate().is_ok());
        let mut dto = filled();
        dto.set_date_of_birth("2030-01-01", today());
        assert_eq!(dto.validate(), Err("Date of birth must be in the past".to_string()));
        let dto = TechnicianRequestDto {
            phone: String::new(),
            ..filled()
        };
        assert_eq!(dto.validate(), Err("Phone is required".to_string()));
    }

    #[test]
    fn test_decision_body() {
        let json = serde_json::to_value(RequestDecision::approve()).unwrap();
        assert_eq!(json, serde_json::json!({"status": "approved"}));
        let json = serde_json::to_value(RequestDecision::reject()).unwrap();
        assert_eq!(json, serde_json::json!({"status": "rejected"}));
    }

    #[test]
    fn test_latest_request() {
        let requests = vec![
            TechnicianRequest {
                id: 1,
                user_id: Some(5),
                status: RequestStatus::Rejected,
                ..TechnicianRequest::default()
            },
            TechnicianRequest {
                id: 4,
                user_id: Some(5),
                ..TechnicianRequest::default()
            },
            TechnicianRequest {
                id: 9,
                user_id: Some(6),
                ..TechnicianRequest::default()
            },
        ];
        let latest = latest_request_for_user(&requests, 5).unwrap();
        assert_eq!(latest.id, 4);
        assert_eq!(latest.status, RequestStatus::Pending);
        assert!(latest_request_for_user(&requests, 7).is_none());
    }
}
