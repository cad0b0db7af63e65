use serde::{Deserialize, Serialize};

use crate::domain::a014_pricing_settings::aggregate::PricingSettings;
use crate::domain::common::form::{blank_to_none, number_text, parse_f64_or_zero, require_text, text_of};
use crate::domain::common::lenient;
use crate::domain::common::Resource;
use crate::shared::metrics::{self, job_cost, CostBreakdown, JobStatus};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobType {
    Planned,
    #[default]
    Emergency,
}

impl JobType {
    pub const ALL: [JobType; 2] = [JobType::Planned, JobType::Emergency];

    pub fn as_str(&self) -> &'static str {
        match self {
            JobType::Planned => "planned",
            JobType::Emergency => "emergency",
        }
    }

    pub fn from_str_or_default(value: &str) -> Self {
        match value {
            "planned" => JobType::Planned,
            _ => JobType::Emergency,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            JobType::Planned => "Planned (PM)",
            JobType::Emergency => "Emergency",
        }
    }
}

/// Work order on one elevator. Status is never stored, see [`MaintenanceJob::status`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceJob {
    pub id: i64,
    #[serde(default)]
    pub elevator_id: String,
    #[serde(default, skip_serializing)]
    pub elevator_name: Option<String>,
    #[serde(default)]
    pub job_type: JobType,
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub technician_id: Option<i64>,
    #[serde(default, skip_serializing)]
    pub technician_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub contract_id: Option<i64>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub ticket_id: Option<String>,
    #[serde(default)]
    pub remarks: Option<String>,
    #[serde(default)]
    pub started_at: Option<String>,
    #[serde(default)]
    pub finished_at: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub total_labor_hours: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub labor_cost: Option<f64>,
    /// Parts cost with markup already applied.
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub parts_cost: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub call_fee: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub total_cost: Option<f64>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Resource for MaintenanceJob {
    type Id = i64;

    fn id(&self) -> i64 {
        self.id
    }

    fn aggregate_index() -> &'static str {
        "a012"
    }

    fn collection_path() -> &'static str {
        "/api/maintenance/jobs"
    }

    fn element_name() -> &'static str {
        "Maintenance job"
    }
}

// ============================================================================
// Status transitions
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobAction {
    Start,
    Finish,
}

impl JobAction {
    pub fn label(&self) -> &'static str {
        match self {
            JobAction::Start => "Start",
            JobAction::Finish => "Finish",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    /// Full record to PUT back.
    Apply(MaintenanceJob),
    /// Starting a finished job wipes its completion time; ask first.
    ConfirmRestart,
}

pub const RESTART_CONFIRM_MESSAGE: &str =
    "Job is already completed. Restart it and clear the completion time?";

impl MaintenanceJob {
    pub fn status(&self) -> JobStatus {
        metrics::job_status(self.started_at.as_deref(), self.finished_at.as_deref())
    }

    pub fn elevator_label(&self) -> String {
        self.elevator_name
            .clone()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| self.elevator_id.clone())
    }

    /// Stamp the job for `action` at `now` (ISO-8601).
    pub fn transition(&self, action: JobAction, now: &str, restart_confirmed: bool) -> Transition {
        let mut job = self.clone();
        match action {
            JobAction::Start => {
                if self.status() == JobStatus::Done && !restart_confirmed {
                    return Transition::ConfirmRestart;
                }
                job.started_at = Some(now.to_string());
                job.finished_at = None;
            }
            JobAction::Finish => {
                job.finished_at = Some(now.to_string());
            }
        }
        job.total_labor_hours = Some(job.total_labor_hours.unwrap_or(0.0));
        job.labor_cost = Some(job.labor_cost.unwrap_or(0.0));
        job.parts_cost = Some(job.parts_cost.unwrap_or(0.0));
        job.total_cost = Some(job.total_cost.unwrap_or(0.0));
        Transition::Apply(job)
    }

    /// Actions offered for the current status.
    pub fn available_actions(&self) -> &'static [JobAction] {
        match self.status() {
            JobStatus::Pending => &[JobAction::Start],
            JobStatus::InProgress => &[JobAction::Finish],
            JobStatus::Done => &[JobAction::Start],
        }
    }
}

// ============================================================================
// Form
// ============================================================================

/// Form draft. Costs are read-only and derived from the pricing loaded with the form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MaintenanceJobDto {
    pub id: Option<i64>,
    pub elevator_id: String,
    pub job_type: JobType,
    pub technician_id: Option<i64>,
    pub contract_id: Option<i64>,
    pub ticket_id: String,
    pub remarks: String,
    pub total_labor_hours: String,
    /// Raw parts cost as typed, before markup.
    pub parts_cost: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaintenanceJobPayload {
    pub elevator_id: String,
    pub job_type: JobType,
    pub technician_id: Option<i64>,
    pub contract_id: Option<i64>,
    pub ticket_id: Option<String>,
    pub remarks: Option<String>,
    pub total_labor_hours: f64,
    pub labor_cost: f64,
    /// Marked-up amount.
    pub parts_cost: f64,
    pub call_fee: f64,
    pub total_cost: f64,
}

impl MaintenanceJobDto {
    /// Edit draft; the stored parts cost is turned back into the raw amount.
    pub fn from_job(job: &MaintenanceJob, pricing: &PricingSettings) -> Self {
        let raw_parts = job
            .parts_cost
            .map(|marked| metrics::round2(metrics::raw_parts_cost(marked, pricing.parts_markup_percent)));
        Self {
            id: Some(job.id),
            elevator_id: job.elevator_id.clone(),
            job_type: job.job_type,
            technician_id: job.technician_id,
            contract_id: job.contract_id,
            ticket_id: text_of(&job.ticket_id),
            remarks: text_of(&job.remarks),
            total_labor_hours: number_text(job.total_labor_hours),
            parts_cost: number_text(raw_parts),
        }
    }

    pub fn cost(&self, pricing: &PricingSettings) -> CostBreakdown {
        job_cost(
            parse_f64_or_zero(&self.total_labor_hours),
            parse_f64_or_zero(&self.parts_cost),
            pricing,
        )
    }

    pub fn validate(&self) -> Result<(), String> {
        require_text(&self.elevator_id, "Please select an elevator")
    }

    pub fn payload(&self, pricing: &PricingSettings) -> MaintenanceJobPayload {
        let cost = self.cost(pricing);
        MaintenanceJobPayload {
            elevator_id: self.elevator_id.clone(),
            job_type: self.job_type,
            technician_id: self.technician_id,
            contract_id: self.contract_id,
            ticket_id: blank_to_none(&self.ticket_id),
            remarks: blank_to_none(&self.remarks),
            total_labor_hours: parse_f64_or_zero(&self.total_labor_hours),
            labor_cost: cost.labor_cost,
            parts_cost: cost.parts_cost_with_markup,
            call_fee: cost.call_fee,
            total_cost: cost.total_cost,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: &str = "2024-06-15T09:30:00.000Z";

    fn pricing() -> PricingSettings {
        PricingSettings {
            id: Some(1),
            call_fee: 300.0,
            labor_rate_per_hour: 200.0,
            parts_markup_percent: 10.0,
            currency: "THB".into(),
        }
    }

    fn apply(t: Transition) -> MaintenanceJob {
        match t {
            Transition::Apply(job) => job,
            Transition::ConfirmRestart => panic!("unexpected confirmation"),
        }
    }

    #[test]
    fn test_form_costs_update_live() {
        let mut draft = MaintenanceJobDto {
            elevator_id: "EL-1".into(),
            ..MaintenanceJobDto::default()
        };
        assert_eq!(draft.job_type, JobType::Emergency);
        draft.total_labor_hours = "3".into();
        assert_eq!(draft.cost(&pricing()).labor_cost, 600.0);
        draft.parts_cost = "1000".into();
        let payload = draft.payload(&pricing());
        assert!((payload.parts_cost - 1100.0).abs() < 1e-9);
        assert!((payload.total_cost - 2000.0).abs() < 1e-9);
        assert_eq!(payload.call_fee, 300.0);
    }

    #[test]
    fn test_edit_recovers_raw_parts() {
        let job = MaintenanceJob {
            id: 4,
            elevator_id: "EL-1".into(),
            parts_cost: Some(1100.0),
            total_labor_hours: Some(2.0),
            ..MaintenanceJob::default()
        };
        let draft = MaintenanceJobDto::from_job(&job, &pricing());
        assert_eq!(draft.parts_cost, "1000");
        assert_eq!(draft.total_labor_hours, "2");
    }

    #[test]
    fn test_start_and_finish() {
        let job = MaintenanceJob {
            id: 1,
            ..MaintenanceJob::default()
        };
        assert_eq!(job.status(), JobStatus::Pending);
        assert_eq!(job.available_actions(), &[JobAction::Start]);

        let started = apply(job.transition(JobAction::Start, NOW, false));
        assert_eq!(started.status(), JobStatus::InProgress);
        assert_eq!(started.labor_cost, Some(0.0));

        let done = apply(started.transition(JobAction::Finish, "2024-06-15T11:00:00.000Z", false));
        assert_eq!(done.status(), JobStatus::Done);
        assert_eq!(done.started_at.as_deref(), Some(NOW));
    }

    #[test]
    fn test_restart_needs_confirmation() {
        let done = MaintenanceJob {
            id: 1,
            started_at: Some("2024-06-01T08:00:00Z".into()),
            finished_at: Some("2024-06-01T10:00:00Z".into()),
            ..MaintenanceJob::default()
        };
        assert_eq!(done.transition(JobAction::Start, NOW, false), Transition::ConfirmRestart);
        let restarted = apply(done.transition(JobAction::Start, NOW, true));
        assert_eq!(restarted.finished_at, None);
        assert_eq!(restarted.started_at.as_deref(), Some(NOW));
        assert_eq!(restarted.status(), JobStatus::InProgress);
    }

    #[test]
    fn test_payload_keeps_joined_names_out() {
        let job: MaintenanceJob = serde_json::from_str(
            r#"{"id": 1, "elevator_id": "EL-1", "elevator_name": "Lobby", "job_type": "planned",
                "labor_cost": "600.00", "ticket_id": 12}"#,
        )
        .unwrap();
        assert_eq!(job.elevator_label(), "Lobby");
        assert_eq!(job.ticket_id.as_deref(), Some("12"));
        let json = serde_json::to_value(&job).unwrap();
        assert!(json.get("elevator_name").is_none());
        assert_eq!(json["job_type"], "planned");
    }
}
