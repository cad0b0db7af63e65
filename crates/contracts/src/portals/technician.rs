use std::collections::HashSet;

use chrono::NaiveDate;

use crate::dashboards::JobCounts;
use crate::domain::a003_elevator::aggregate::Elevator;
use crate::domain::a004_technician::aggregate::{technician_for_user, Technician};
use crate::domain::a009_part::aggregate::{low_stock_parts, Part, PartStock};
use crate::domain::a011_maintenance_plan::aggregate::MaintenancePlan;
use crate::domain::a012_maintenance_job::aggregate::MaintenanceJob;
use crate::shared::metrics::PlanUrgency;
use crate::system::auth::{Role, UserInfo};

pub const RECENT_COMPLETED_LIMIT: usize = 5;

/// Technician whose work the portal shows.
///
/// Admins pick one (first technician when nothing is picked); a technician
/// always sees their own record.
pub fn resolve_technician(
    user: &UserInfo,
    technicians: &[Technician],
    selected: Option<i64>,
) -> Result<Option<i64>, String> {
    match user.role {
        Role::Admin => Ok(selected
            .filter(|id| technicians.iter().any(|t| t.id == *id))
            .or_else(|| technicians.first().map(|t| t.id))),
        Role::Technician => technician_for_user(technicians, user.id)
            .map(|t| Some(t.id))
            .ok_or_else(|| "Your technician profile has not been approved yet".to_string()),
        Role::Customer => Err("The technician portal is not available for customer accounts".into()),
    }
}

/// Collections narrowed to one technician.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TechnicianPortalData {
    pub jobs: Vec<MaintenanceJob>,
    pub elevators: Vec<Elevator>,
    pub plans: Vec<MaintenancePlan>,
    pub parts: Vec<Part>,
    pub stocks: Vec<PartStock>,
}

impl TechnicianPortalData {
    /// Jobs assigned to the technician, the elevators those jobs touch and
    /// the plans on those elevators. Inventory is shared by everyone.
    pub fn scoped(
        technician_id: i64,
        jobs: Vec<MaintenanceJob>,
        elevators: Vec<Elevator>,
        plans: Vec<MaintenancePlan>,
        parts: Vec<Part>,
        stocks: Vec<PartStock>,
    ) -> Self {
        let jobs: Vec<MaintenanceJob> = jobs
            .into_iter()
            .filter(|j| j.technician_id == Some(technician_id))
            .collect();
        let elevator_ids: HashSet<&str> = jobs.iter().map(|j| j.elevator_id.as_str()).collect();
        let elevators: Vec<Elevator> = elevators
            .into_iter()
            .filter(|e| elevator_ids.contains(e.id.as_str()))
            .collect();
        let plans = plans
            .into_iter()
            .filter(|p| elevator_ids.contains(p.elevator_id.as_str()))
            .collect();
        Self {
            jobs,
            elevators,
            plans,
            parts,
            stocks,
        }
    }

    pub fn stats(&self, today: NaiveDate) -> TechnicianPortalStats {
        let due_plans = self
            .plans
            .iter()
            .filter(|p| p.urgency(today) == PlanUrgency::Upcoming)
            .cloned()
            .collect();
        let mut completed: Vec<MaintenanceJob> = self
            .jobs
            .iter()
            .filter(|j| j.finished_at.as_deref().is_some_and(|f| !f.is_empty()))
            .cloned()
            .collect();
        completed.sort_by(|a, b| b.finished_at.cmp(&a.finished_at));
        completed.truncate(RECENT_COMPLETED_LIMIT);
        TechnicianPortalStats {
            counts: JobCounts::of(&self.jobs),
            due_plans,
            low_stock: low_stock_parts(&self.parts, &self.stocks)
                .into_iter()
                .cloned()
                .collect(),
            recent_completed: completed,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TechnicianPortalStats {
    pub counts: JobCounts,
    /// Plans due today or within the next seven days.
    pub due_plans: Vec<MaintenancePlan>,
    pub low_stock: Vec<Part>,
    pub recent_completed: Vec<MaintenanceJob>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: i64, role: Role) -> UserInfo {
        UserInfo {
            id,
            name: "u".into(),
            email: "u@x.io".into(),
            role,
            customer_id: None,
        }
    }

    fn technicians() -> Vec<Technician> {
        vec![
            Technician {
                id: 10,
                user_id: Some(100),
                ..Technician::default()
            },
            Technician {
                id: 11,
                user_id: Some(101),
                ..Technician::default()
            },
        ]
    }

    fn job(id: i64, technician: i64, elevator: &str) -> MaintenanceJob {
        MaintenanceJob {
            id,
            technician_id: Some(technician),
            elevator_id: elevator.into(),
            ..MaintenanceJob::default()
        }
    }

    #[test]
    fn test_subject_resolution() {
        let admin = user(1, Role::Admin);
        assert_eq!(resolve_technician(&admin, &technicians(), None), Ok(Some(10)));
        assert_eq!(resolve_technician(&admin, &technicians(), Some(11)), Ok(Some(11)));
        assert_eq!(resolve_technician(&admin, &technicians(), Some(99)), Ok(Some(10)));
        assert_eq!(resolve_technician(&admin, &[], None), Ok(None));

        assert_eq!(
            resolve_technician(&user(101, Role::Technician), &technicians(), Some(10)),
            Ok(Some(11))
        );
        assert!(resolve_technician(&user(555, Role::Technician), &technicians(), None).is_err());
        assert!(resolve_technician(&user(5, Role::Customer), &technicians(), None).is_err());
    }

    #[test]
    fn test_cross_filter() {
        let jobs = vec![job(1, 10, "EL-1"), job(2, 11, "EL-2"), job(3, 10, "EL-3")];
        let elevators = ["EL-1", "EL-2", "EL-3"]
            .iter()
            .map(|id| Elevator {
                id: id.to_string(),
                ..Elevator::default()
            })
            .collect();
        let plans = vec![
            MaintenancePlan {
                id: 1,
                elevator_id: "EL-2".into(),
                ..MaintenancePlan::default()
            },
            MaintenancePlan {
                id: 2,
                elevator_id: "EL-3".into(),
                ..MaintenancePlan::default()
            },
        ];
        let parts = vec![Part {
            id: 1,
            ..Part::default()
        }];
        let data = TechnicianPortalData::scoped(10, jobs, elevators, plans, parts, Vec::new());
        assert_eq!(data.jobs.iter().map(|j| j.id).collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(
            data.elevators.iter().map(|e| e.id.as_str()).collect::<Vec<_>>(),
            vec!["EL-1", "EL-3"]
        );
        assert_eq!(data.plans.iter().map(|p| p.id).collect::<Vec<_>>(), vec![2]);
        assert_eq!(data.parts.len(), 1);
    }

    #[test]
    fn test_stats() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let mut done_early = job(1, 10, "EL-1");
        done_early.started_at = Some("2024-06-01T08:00:00Z".into());
        done_early.finished_at = Some("2024-06-01T10:00:00Z".into());
        let mut done_late = job(2, 10, "EL-1");
        done_late.started_at = Some("2024-06-10T08:00:00Z".into());
        done_late.finished_at = Some("2024-06-10T10:00:00Z".into());
        let pending = job(3, 10, "EL-1");
        let plans = vec![
            MaintenancePlan {
                id: 1,
                elevator_id: "EL-1".into(),
                next_run_at: Some("2024-06-20".into()),
                ..MaintenancePlan::default()
            },
            MaintenancePlan {
                id: 2,
                elevator_id: "EL-1".into(),
                next_run_at: Some("2024-07-20".into()),
                ..MaintenancePlan::default()
            },
        ];
        let parts = vec![Part {
            id: 1,
            ..Part::default()
        }];
        let data = TechnicianPortalData::scoped(
            10,
            vec![done_early, done_late, pending],
            Vec::new(),
            plans,
            parts,
            Vec::new(),
        );
        let stats = data.stats(today);
        assert_eq!(stats.counts.pending, 1);
        assert_eq!(stats.counts.done, 2);
        assert_eq!(stats.due_plans.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1]);
        assert_eq!(stats.low_stock.len(), 1);
        assert_eq!(
            stats.recent_completed.iter().map(|j| j.id).collect::<Vec<_>>(),
            vec![2, 1]
        );
    }
}
