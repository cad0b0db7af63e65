use contracts::domain::a004_technician::aggregate::{Technician, TechnicianDto};
use leptos::prelude::*;

use crate::shared::crud::save_resource;
use crate::shared::dialogs::alert;
use crate::system::auth::AuthContext;

#[derive(Clone, Copy)]
pub struct TechnicianDetailsViewModel {
    pub form: RwSignal<TechnicianDto>,
    pub open: RwSignal<bool>,
}

impl TechnicianDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(TechnicianDto::default()),
            open: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.id.is_some())
    }

    pub fn title(&self) -> String {
        let title = if self.is_edit_mode() { "Edit technician" } else { "New technician" };
        title.to_string()
    }

    pub fn new_command(&self) {
        self.form.set(TechnicianDto::default());
        self.open.set(true);
    }

    pub fn edit_command(&self, technician: &Technician) {
        self.form.set(TechnicianDto::from(technician));
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
        save_resource::<Technician, _>(auth, current.id, current, move || {
            open.set(false);
            on_saved.run(());
        });
    }
}

impl Default for TechnicianDetailsViewModel {
    fn default() -> Self {
        Self::new()
    }
}
