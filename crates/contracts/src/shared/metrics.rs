//! Derived fields shown across pages.
//!
//! Every page that labels a job, ranks a plan, highlights a contract or a part,
//! or totals a cost calls into this module; none of them re-derive the rules.

use chrono::{Datelike, NaiveDate};

use crate::domain::a012_maintenance_job::aggregate::MaintenanceJob;
use crate::domain::a014_pricing_settings::aggregate::PricingSettings;
use crate::shared::dates::{days_between, parse_date, parse_opt_date};

/// Minimum stock assumed for parts without a configured threshold.
pub const DEFAULT_MIN_STOCK: i64 = 5;
/// Plans due within this many days (inclusive) are "upcoming".
pub const UPCOMING_WINDOW_DAYS: i64 = 7;
/// Contracts ending within this many days (inclusive) are "expiring soon".
pub const EXPIRING_WINDOW_DAYS: i64 = 90;

fn is_set(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

// ============================================================================
// Job status
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JobStatus {
    Pending,
    InProgress,
    Done,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Pending => "pending",
            JobStatus::InProgress => "in_progress",
            JobStatus::Done => "done",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            JobStatus::Pending => "Pending",
            JobStatus::InProgress => "In progress",
            JobStatus::Done => "Done",
        }
    }

    pub fn badge_variant(&self) -> &'static str {
        match self {
            JobStatus::Pending => "warning",
            JobStatus::InProgress => "primary",
            JobStatus::Done => "success",
        }
    }
}

/// `finished_at` wins over everything; otherwise `started_at` decides.
pub fn job_status(started_at: Option<&str>, finished_at: Option<&str>) -> JobStatus {
    if is_set(finished_at) {
        JobStatus::Done
    } else if is_set(started_at) {
        JobStatus::InProgress
    } else {
        JobStatus::Pending
    }
}

// ============================================================================
// Plan urgency
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlanUrgency {
    NoSchedule,
    Overdue,
    Upcoming,
    Scheduled,
}

impl PlanUrgency {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanUrgency::NoSchedule => "no_schedule",
            PlanUrgency::Overdue => "overdue",
            PlanUrgency::Upcoming => "upcoming",
            PlanUrgency::Scheduled => "scheduled",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PlanUrgency::NoSchedule => "No schedule",
            PlanUrgency::Overdue => "Overdue",
            PlanUrgency::Upcoming => "Due soon",
            PlanUrgency::Scheduled => "Scheduled",
        }
    }

    pub fn badge_variant(&self) -> &'static str {
        match self {
            PlanUrgency::NoSchedule => "neutral",
            PlanUrgency::Overdue => "error",
            PlanUrgency::Upcoming => "warning",
            PlanUrgency::Scheduled => "success",
        }
    }
}

/// Unparseable dates are treated like a missing schedule.
pub fn plan_urgency(next_run_at: Option<&str>, today: NaiveDate) -> PlanUrgency {
    let Some(next) = parse_opt_date(next_run_at) else {
        return PlanUrgency::NoSchedule;
    };
    let delta = days_between(today, next);
    if delta < 0 {
        PlanUrgency::Overdue
    } else if delta <= UPCOMING_WINDOW_DAYS {
        PlanUrgency::Upcoming
    } else {
        PlanUrgency::Scheduled
    }
}

// ============================================================================
// Contract windows
// ============================================================================

pub fn contract_is_active(start_date: Option<&str>, end_date: Option<&str>, today: NaiveDate) -> bool {
    match (parse_opt_date(start_date), parse_opt_date(end_date)) {
        (Some(start), Some(end)) => start <= today && today <= end,
        _ => false,
    }
}

pub fn contract_expiring_soon(end_date: Option<&str>, today: NaiveDate) -> bool {
    match parse_opt_date(end_date) {
        Some(end) => {
            let left = days_between(today, end);
            left > 0 && left <= EXPIRING_WINDOW_DAYS
        }
        None => false,
    }
}

/// Days left until `end_date`, if it parses.
pub fn days_until(end_date: &str, today: NaiveDate) -> Option<i64> {
    parse_date(end_date).map(|end| days_between(today, end))
}

// ============================================================================
// Stock
// ============================================================================

pub fn is_low_stock(quantity: i64, min_stock: Option<i64>) -> bool {
    quantity <= min_stock.unwrap_or(DEFAULT_MIN_STOCK)
}

// ============================================================================
// Costs
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostBreakdown {
    pub labor_cost: f64,
    pub parts_cost_with_markup: f64,
    pub call_fee: f64,
    pub total_cost: f64,
}

pub fn labor_cost(labor_hours: f64, labor_rate_per_hour: f64) -> f64 {
    labor_hours * labor_rate_per_hour
}

pub fn parts_cost_with_markup(raw_parts_cost: f64, markup_percent: f64) -> f64 {
    raw_parts_cost * (1.0 + markup_percent / 100.0)
}

/// Inverse of [`parts_cost_with_markup`], used when reopening a saved job.
pub fn raw_parts_cost(marked_up: f64, markup_percent: f64) -> f64 {
    let factor = 1.0 + markup_percent / 100.0;
    if factor == 0.0 {
        marked_up
    } else {
        marked_up / factor
    }
}

pub fn job_cost(labor_hours: f64, raw_parts: f64, pricing: &PricingSettings) -> CostBreakdown {
    let labor = labor_cost(labor_hours, pricing.labor_rate_per_hour);
    let parts = parts_cost_with_markup(raw_parts, pricing.parts_markup_percent);
    CostBreakdown {
        labor_cost: labor,
        parts_cost_with_markup: parts,
        call_fee: pricing.call_fee,
        total_cost: labor + parts + pricing.call_fee,
    }
}

/// Quotation amount for a contract: every job under it, each with the current call fee.
pub fn quotation_total(jobs: &[MaintenanceJob], contract_id: i64, call_fee: f64) -> f64 {
    let sum: f64 = jobs
        .iter()
        .filter(|job| job.contract_id == Some(contract_id))
        .map(|job| job.labor_cost.unwrap_or(0.0) + job.parts_cost.unwrap_or(0.0) + call_fee)
        .fold(0.0, |acc, v| acc + v);
    round2(sum)
}

/// Rounded to cents; never negative zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0 + 0.0
}

pub fn format_amount(value: f64) -> String {
    format!("{:.2}", value + 0.0)
}

// ============================================================================
// People
// ============================================================================

/// Full years since `date_of_birth`; `None` when not positive.
pub fn age_on(date_of_birth: NaiveDate, today: NaiveDate) -> Option<u32> {
    let mut age = today.year() - date_of_birth.year();
    if (today.month(), today.day()) < (date_of_birth.month(), date_of_birth.day()) {
        age -= 1;
    }
    u32::try_from(age).ok().filter(|age| *age > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn iso(date: NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }

    fn pricing() -> PricingSettings {
        PricingSettings {
            id: Some(1),
            call_fee: 300.0,
            labor_rate_per_hour: 200.0,
            parts_markup_percent: 10.0,
            currency: "THB".into(),
        }
    }

    #[test]
    fn test_job_status_from_timestamps() {
        assert_eq!(job_status(None, None), JobStatus::Pending);
        assert_eq!(job_status(Some("2024-01-01T08:00:00Z"), None), JobStatus::InProgress);
        assert_eq!(
            job_status(Some("2024-01-01T08:00:00Z"), Some("2024-01-01T10:00:00Z")),
            JobStatus::Done
        );
        // finish before start is still done
        assert_eq!(
            job_status(Some("2024-01-02T08:00:00Z"), Some("2024-01-01T10:00:00Z")),
            JobStatus::Done
        );
        assert_eq!(job_status(None, Some("2024-01-01T10:00:00Z")), JobStatus::Done);
        assert_eq!(job_status(Some(""), Some("  ")), JobStatus::Pending);
    }

    #[test]
    fn test_plan_urgency_boundaries() {
        let t = today();
        let yesterday = iso(t - Duration::days(1));
        let in_seven = iso(t + Duration::days(7));
        let in_eight = iso(t + Duration::days(8));
        assert_eq!(plan_urgency(Some(&yesterday), t), PlanUrgency::Overdue);
        assert_eq!(plan_urgency(Some(&iso(t)), t), PlanUrgency::Upcoming);
        assert_eq!(plan_urgency(Some(&in_seven), t), PlanUrgency::Upcoming);
        assert_eq!(plan_urgency(Some(&in_eight), t), PlanUrgency::Scheduled);
        assert_eq!(plan_urgency(None, t), PlanUrgency::NoSchedule);
        assert_eq!(plan_urgency(Some("garbage"), t), PlanUrgency::NoSchedule);
    }

    #[test]
    fn test_plan_urgency_ignores_time_of_day() {
        assert_eq!(
            plan_urgency(Some("2024-06-15T23:59:00.000Z"), today()),
            PlanUrgency::Upcoming
        );
    }

    #[test]
    fn test_cost_rollup() {
        let cost = job_cost(3.0, 1000.0, &pricing());
        assert_eq!(cost.labor_cost, 600.0);
        assert!((cost.parts_cost_with_markup - 1100.0).abs() < 1e-9);
        assert_eq!(cost.call_fee, 300.0);
        assert!((cost.total_cost - 2000.0).abs() < 1e-9);
    }

    #[test]
    fn test_raw_parts_inverts_markup() {
        assert!((raw_parts_cost(1100.0, 10.0) - 1000.0).abs() < 1e-9);
        assert_eq!(raw_parts_cost(50.0, 0.0), 50.0);
        assert_eq!(raw_parts_cost(50.0, -100.0), 50.0);
    }

    #[test]
    fn test_low_stock_threshold() {
        assert!(is_low_stock(5, None));
        assert!(!is_low_stock(6, None));
        assert!(is_low_stock(10, Some(15)));
        assert!(is_low_stock(0, Some(0)));
        assert!(!is_low_stock(1, Some(0)));
    }

    #[test]
    fn test_contract_windows() {
        let t = today();
        assert!(contract_is_active(Some("2024-01-01"), Some("2024-12-31"), t));
        assert!(contract_is_active(Some("2024-06-15"), Some("2024-06-15"), t));
        assert!(!contract_is_active(Some("2024-06-16"), Some("2024-12-31"), t));
        assert!(!contract_is_active(None, Some("2024-12-31"), t));

        assert!(!contract_expiring_soon(Some(&iso(t)), t));
        assert!(contract_expiring_soon(Some(&iso(t + Duration::days(1))), t));
        assert!(contract_expiring_soon(Some(&iso(t + Duration::days(90))), t));
        assert!(!contract_expiring_soon(Some(&iso(t + Duration::days(91))), t));
        assert!(!contract_expiring_soon(None, t));
        assert_eq!(days_until("2024-06-20", t), Some(5));
    }

    #[test]
    fn test_quotation_total_sums_contract_jobs() {
        let job = |id: i64, contract: Option<i64>, labor: f64, parts: f64| MaintenanceJob {
            id,
            contract_id: contract,
            labor_cost: Some(labor),
            parts_cost: Some(parts),
            ..MaintenanceJob::default()
        };
        let jobs = vec![
            job(1, Some(7), 600.0, 1100.0),
            job(2, Some(7), 100.0, 0.01),
            job(3, Some(8), 999.0, 999.0),
            job(4, None, 999.0, 999.0),
        ];
        assert_eq!(quotation_total(&jobs, 7, 300.0), 2400.01);
        assert_eq!(quotation_total(&jobs, 42, 300.0), 0.0);
        assert_eq!(format_amount(2400.0), "2400.00");
    }

    #[test]
    fn test_contract_without_jobs_totals_plain_zero() {
        let total = quotation_total(&[], 1, 300.0);
        assert!(total.is_sign_positive());
        assert_eq!(format_amount(total), "0.00");
        assert!(round2(-0.0).is_sign_positive());
        assert_eq!(format_amount(-0.0), "0.00");
    }

    #[test]
    fn test_age_on() {
        let dob = NaiveDate::from_ymd_opt(1990, 6, 16).unwrap();
        assert_eq!(age_on(dob, today()), Some(33));
        let dob = NaiveDate::from_ymd_opt(1990, 6, 15).unwrap();
        assert_eq!(age_on(dob, today()), Some(34));
        assert_eq!(age_on(today(), today()), None);
        assert_eq!(age_on(today() + Duration::days(400), today()), None);
    }
}
