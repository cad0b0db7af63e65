use contracts::domain::a003_elevator::aggregate::Elevator;
use contracts::domain::a006_contract::aggregate::Contract;
use contracts::domain::a011_maintenance_plan::aggregate::{MaintenancePlan, MaintenancePlanDto};
use contracts::domain::common::form::parse_i64;
use leptos::prelude::*;

use crate::shared::crud::save_resource;
use crate::shared::dialogs::alert;
use crate::system::auth::AuthContext;

#[derive(Clone, Copy)]
pub struct MaintenancePlanDetailsViewModel {
    pub form: RwSignal<MaintenancePlanDto>,
    pub open: RwSignal<bool>,
}

impl MaintenancePlanDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(MaintenancePlanDto::default()),
            open: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.id.is_some())
    }

    pub fn title(&self) -> String {
        let title = if self.is_edit_mode() { "Edit maintenance plan" } else { "New maintenance plan" };
        title.to_string()
    }

    pub fn is_per_call(&self) -> bool {
        self.form.with(|f| !f.scheduling_enabled())
    }

    pub fn new_command(&self) {
        self.form.set(MaintenancePlanDto::default());
        self.open.set(true);
    }

    pub fn edit_command(&self, plan: &MaintenancePlan, elevators: &[Elevator], contracts: &[Contract]) {
        self.form.set(MaintenancePlanDto::from_plan(plan, elevators, contracts));
        self.open.set(true);
    }

    pub fn close(&self) {
        self.open.set(false);
    }

    pub fn select_elevator(&self, value: &str, elevators: &[Elevator], contracts: &[Contract]) {
        self.form.update(|f| f.select_elevator(value, elevators, contracts));
    }

    pub fn select_contract(&self, value: &str, contracts: &[Contract]) {
        let contract_id = parse_i64(value);
        self.form.update(|f| f.select_contract(contract_id, contracts));
    }

    pub fn save_command(&self, auth: AuthContext, on_saved: Callback<()>) {
        let current = self.form.get_untracked();
        if let Err(msg) = current.validate() {
            alert(&msg);
            return;
        }
        let open = self.open;
        save_resource::<MaintenancePlan, _>(auth, current.id, current.payload(), move || {
            open.set(false);
            on_saved.run(());
        });
    }
}

impl Default for MaintenancePlanDetailsViewModel {
    fn default() -> Self {
        Self::new()
    }
}
