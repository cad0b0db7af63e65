//! Role dashboards and the figures they show.

use std::collections::BTreeMap;

use crate::domain::a003_elevator::aggregate::{Elevator, ElevatorState};
use crate::domain::a006_contract::aggregate::Contract;
use crate::domain::a011_maintenance_plan::aggregate::MaintenancePlan;
use crate::domain::a012_maintenance_job::aggregate::MaintenanceJob;
use crate::shared::dates::parse_opt_date;
use crate::shared::metrics::JobStatus;
use crate::system::auth::Role;
use chrono::NaiveDate;

pub const DASHBOARD_LIST_LIMIT: usize = 5;

/// Which dashboard to render; chosen once from the session role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardKind {
    Admin,
    Technician,
    Customer,
}

impl DashboardKind {
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::Admin => DashboardKind::Admin,
            Role::Technician => DashboardKind::Technician,
            Role::Customer => DashboardKind::Customer,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            DashboardKind::Admin => "Operations overview",
            DashboardKind::Technician => "My work",
            DashboardKind::Customer => "My elevators",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JobCounts {
    pub pending: usize,
    pub in_progress: usize,
    pub done: usize,
}

impl JobCounts {
    pub fn of(jobs: &[MaintenanceJob]) -> Self {
        jobs.iter().fold(Self::default(), |mut acc, job| {
            match job.status() {
                JobStatus::Pending => acc.pending += 1,
                JobStatus::InProgress => acc.in_progress += 1,
                JobStatus::Done => acc.done += 1,
            }
            acc
        })
    }

    pub fn total(&self) -> usize {
        self.pending + self.in_progress + self.done
    }
}

/// Active plans with a date, soonest first.
pub fn upcoming_plans(plans: &[MaintenancePlan], limit: usize) -> Vec<MaintenancePlan> {
    let mut dated: Vec<(NaiveDate, &MaintenancePlan)> = plans
        .iter()
        .filter(|p| p.is_active)
        .filter_map(|p| parse_opt_date(p.next_run_at.as_deref()).map(|d| (d, p)))
        .collect();
    dated.sort_by(|a, b| a.0.cmp(&b.0).then(a.1.id.cmp(&b.1.id)));
    dated.into_iter().take(limit).map(|(_, p)| p.clone()).collect()
}

/// Newest jobs first, by creation time when every job has one, otherwise by id.
pub fn recent_jobs(jobs: &[MaintenanceJob], limit: usize) -> Vec<MaintenanceJob> {
    let mut sorted: Vec<MaintenanceJob> = jobs.to_vec();
    if sorted.iter().all(|j| j.created_at.is_some()) {
        sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
    } else {
        sorted.sort_by(|a, b| b.id.cmp(&a.id));
    }
    sorted.truncate(limit);
    sorted
}

/// Elevator count per state, in declaration order.
pub fn elevator_state_counts(elevators: &[Elevator]) -> Vec<(ElevatorState, usize)> {
    let mut counts: BTreeMap<usize, (ElevatorState, usize)> = BTreeMap::new();
    for elevator in elevators {
        let order = ElevatorState::SELECTABLE
            .iter()
            .position(|s| *s == elevator.state)
            .unwrap_or(ElevatorState::SELECTABLE.len());
        counts.entry(order).or_insert((elevator.state, 0)).1 += 1;
    }
    counts.into_values().collect()
}

pub fn active_contract_count(contracts: &[Contract], today: NaiveDate) -> usize {
    contracts.iter().filter(|c| c.is_active(today)).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(id: i64, next: Option<&str>, active: bool) -> MaintenancePlan {
        MaintenancePlan {
            id,
            elevator_id: format!("EL-{}", id),
            next_run_at: next.map(str::to_string),
            is_active: active,
            ..MaintenancePlan::default()
        }
    }

    #[test]
    fn test_kind_per_role() {
        assert_eq!(DashboardKind::for_role(Role::Admin), DashboardKind::Admin);
        assert_eq!(DashboardKind::for_role(Role::Technician), DashboardKind::Technician);
        assert_eq!(DashboardKind::for_role(Role::Customer), DashboardKind::Customer);
    }

    #[test]
    fn test_upcoming_plans_sorted_and_filtered() {
        let plans = vec![
            plan(1, Some("2024-08-01"), true),
            plan(2, Some("2024-07-01T00:00:00Z"), true),
            plan(3, Some("2024-06-01"), false),
            plan(4, None, true),
        ];
        let ids: Vec<i64> = upcoming_plans(&plans, 5).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 1]);
        assert_eq!(upcoming_plans(&plans, 1).len(), 1);
    }

    #[test]
    fn test_recent_jobs_ordering() {
        let job = |id: i64, created: Option<&str>| MaintenanceJob {
            id,
            created_at: created.map(str::to_string),
            ..MaintenanceJob::default()
        };
        let jobs = vec![
            job(1, Some("2024-06-03")),
            job(2, Some("2024-06-01")),
            job(3, Some("2024-06-02")),
        ];
        let ids: Vec<i64> = recent_jobs(&jobs, 2).iter().map(|j| j.id).collect();
        assert_eq!(ids, vec![1, 3]);

        let jobs = vec![job(1, Some("2024-06-03")), job(5, None), job(3, None)];
        let ids: Vec<i64> = recent_jobs(&jobs, 5).iter().map(|j| j.id).collect();
        assert_eq!(ids, vec![5, 3, 1]);
    }

    #[test]
    fn test_job_counts() {
        let jobs = vec![
            MaintenanceJob::default(),
            MaintenanceJob {
                started_at: Some("2024-06-01".into()),
                ..MaintenanceJob::default()
            },
            MaintenanceJob {
                started_at: Some("2024-06-01".into()),
                finished_at: Some("2024-06-01".into()),
                ..MaintenanceJob::default()
            },
        ];
        let counts = JobCounts::of(&jobs);
        assert_eq!(
            counts,
            JobCounts {
                pending: 1,
                in_progress: 1,
                done: 1
            }
        );
        assert_eq!(counts.total(), 3);
    }

    #[test]
    fn test_elevator_state_counts() {
        let e = |state| Elevator {
            id: "x".into(),
            state,
            ..Elevator::default()
        };
        let elevators = vec![e(ElevatorState::Fault), e(ElevatorState::Normal), e(ElevatorState::Fault)];
        assert_eq!(
            elevator_state_counts(&elevators),
            vec![(ElevatorState::Normal, 1), (ElevatorState::Fault, 2)]
        );
    }
}
