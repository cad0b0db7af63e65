use contracts::domain::a010_maintenance_template::aggregate::{MaintenanceTemplate, MaintenanceTemplateDto};
use leptos::prelude::*;

use crate::shared::crud::save_resource;
use crate::shared::dialogs::alert;
use crate::system::auth::AuthContext;

#[derive(Clone, Copy)]
pub struct MaintenanceTemplateDetailsViewModel {
    pub form: RwSignal<MaintenanceTemplateDto>,
    pub open: RwSignal<bool>,
}

impl MaintenanceTemplateDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(MaintenanceTemplateDto::default()),
            open: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.id.is_some())
    }

    pub fn title(&self) -> String {
        let title = if self.is_edit_mode() { "Edit template" } else { "New template" };
        title.to_string()
    }

    pub fn new_command(&self) {
        self.form.set(MaintenanceTemplateDto::default());
        self.open.set(true);
    }

    pub fn edit_command(&self, template: &MaintenanceTemplate) {
        self.form.set(MaintenanceTemplateDto::from(template));
        self.open.set(true);
    }

    pub fn close(&self) {
        self.open.set(false);
    }

    pub fn save_command(&self, auth: AuthContext, on_saved: Callback<()>) {
        let current = self.form.get_untracked();
        if let Err(msg) = current.validate() {
            alert(&msg);
            return;
        }
        let open = self.open;
        save_resource::<MaintenanceTemplate, _>(auth, current.id, current, move || {
            open.set(false);
            on_saved.run(());
        });
    }
}

impl Default for MaintenanceTemplateDetailsViewModel {
    fn default() -> Self {
        Self::new()
    }
}
