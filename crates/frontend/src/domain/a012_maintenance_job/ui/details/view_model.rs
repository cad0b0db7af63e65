use contracts::domain::a012_maintenance_job::aggregate::{MaintenanceJob, MaintenanceJobDto};
use contracts::domain::a014_pricing_settings::aggregate::PricingSettings;
use leptos::prelude::*;

use crate::shared::crud::save_resource;
use crate::shared::dialogs::alert;
use crate::system::auth::AuthContext;

#[derive(Clone, Copy)]
pub struct MaintenanceJobDetailsViewModel {
    pub form: RwSignal<MaintenanceJobDto>,
    pub open: RwSignal<bool>,
}

impl MaintenanceJobDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(MaintenanceJobDto::default()),
            open: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.id.is_some())
    }

    pub fn title(&self) -> String {
        let title = if self.is_edit_mode() { "Edit maintenance job" } else { "New maintenance job" };
        title.to_string()
    }

    pub fn new_command(&self) {
        self.form.set(MaintenanceJobDto::default());
        self.open.set(true);
    }

    pub fn edit_command(&self, job: &MaintenanceJob, pricing: &PricingSettings) {
        self.form.set(MaintenanceJobDto::from_job(job, pricing));
        self.open.set(true);
    }

    pub fn close(&self) {
        self.open.set(false);
    }

    /// Costs are computed from the pricing loaded with the page.
    pub fn save_command(&self, auth: AuthContext, pricing: &PricingSettings, on_saved: Callback<()>) {
        let current = self.form.get_untracked();
        if let Err(msg) = current.validate() {
            alert(&msg);
            return;
        }
        let open = self.open;
        save_resource::<MaintenanceJob, _>(auth, current.id, current.payload(pricing), move || {
            open.set(false);
            on_saved.run(());
        });
    }
}

impl Default for MaintenanceJobDetailsViewModel {
    fn default() -> Self {
        Self::new()
    }
}
