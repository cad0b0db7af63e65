//! Analytics and report payloads (admin only).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::lenient;
use crate::shared::dates::one_month_before;

pub const ANALYTICS_PATH: &str = "/api/dashboard/analytics";
pub const FAULT_RATE_PATH: &str = "/api/reports/elevator-fault-rate";
pub const MAINTENANCE_SUMMARY_PATH: &str = "/api/reports/maintenance-summary";

/// Fault rates above this percentage are flagged.
pub const HIGH_FAULT_RATE_PERCENT: f64 = 20.0;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRevenue {
    pub month: String,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub revenue: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonthlyJobs {
    pub month: String,
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub job_count: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ElevatorStatusCount {
    pub state: String,
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub count: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TopIssue {
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub fault_count: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TopPart {
    pub part_code: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub usage_count: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Analytics {
    #[serde(default)]
    pub monthly_revenue: Vec<MonthlyRevenue>,
    #[serde(default)]
    pub monthly_jobs: Vec<MonthlyJobs>,
    #[serde(default)]
    pub elevator_status: Vec<ElevatorStatusCount>,
    #[serde(default)]
    pub top_issues: Vec<TopIssue>,
    #[serde(default)]
    pub top_parts: Vec<TopPart>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FaultRateRow {
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub total_elevators: Option<i64>,
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub fault_count: Option<i64>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub fault_rate_percent: Option<f64>,
}

impl FaultRateRow {
    pub fn is_high(&self) -> bool {
        self.fault_rate_percent
            .is_some_and(|rate| rate > HIGH_FAULT_RATE_PERCENT)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryTotals {
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub total_jobs: Option<i64>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub total_cost: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub total_labor_cost: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub total_parts_cost: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub avg_duration_hours: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub elevators_serviced: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobTypeSummary {
    pub job_type: String,
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub count: Option<i64>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub cost: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceSummary {
    #[serde(default)]
    pub summary: SummaryTotals,
    #[serde(default)]
    pub by_type: Vec<JobTypeSummary>,
}

/// Query for the maintenance summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryRange {
    pub start_date: String,
    pub end_date: String,
}

impl SummaryRange {
    /// One month back through today.
    pub fn default_for(today: NaiveDate) -> Self {
        Self {
            start_date: one_month_before(today).format("%Y-%m-%d").to_string(),
            end_date: today.format("%Y-%m-%d").to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.start_date.is_empty() || self.end_date.is_empty() {
            return Err("Please choose a start and end date".into());
        }
        if self.start_date > self.end_date {
            return Err("Start date must not be after end date".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analytics_decode() {
        let a: Analytics = serde_json::from_str(
            r#"{"monthly_revenue": [{"month": "2024-05", "revenue": "12000.50"}],
                "elevator_status": [{"state": "fault", "count": 2}],
                "top_parts": [{"part_code": "P-1", "name": "Rope", "usage_count": "9"}]}"#,
        )
        .unwrap();
        assert_eq!(a.monthly_revenue[0].revenue, Some(12000.5));
        assert!(a.monthly_jobs.is_empty());
        assert_eq!(a.top_parts[0].usage_count, Some(9));
    }

    #[test]
    fn test_fault_rate_flag() {
        let row = |rate| FaultRateRow {
            fault_rate_percent: rate,
            ..FaultRateRow::default()
        };
        assert!(row(Some(20.5)).is_high());
        assert!(!row(Some(20.0)).is_high());
        assert!(!row(None).is_high());
    }

    #[test]
    fn test_default_range() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();
        let range = SummaryRange::default_for(today);
        assert_eq!(range.start_date, "2024-02-29");
        assert_eq!(range.end_date, "2024-03-31");
        assert!(range.validate().is_ok());
        let backwards = SummaryRange {
            start_date: "2024-04-01".into(),
            end_date: "2024-03-01".into(),
        };
        assert!(backwards.validate().is_err());
    }

    #[test]
    fn test_summary_decode() {
        let s: MaintenanceSummary = serde_json::from_str(
            r#"{"summary": {"total_jobs": 4, "total_cost": "8000", "avg_duration_hours": null},
                "by_type": [{"job_type": "planned", "count": 3, "cost": 6000}]}"#,
        )
        .unwrap();
        assert_eq!(s.summary.total_jobs, Some(4));
        assert_eq!(s.summary.total_cost, Some(8000.0));
        assert_eq!(s.by_type[0].cost, Some(6000.0));
    }
}
