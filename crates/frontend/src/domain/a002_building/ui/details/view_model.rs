use contracts::domain::a001_customer::aggregate::Customer;
use contracts::domain::a002_building::aggregate::{Building, BuildingDto};
use contracts::domain::common::form::parse_i64;
use leptos::prelude::*;

use crate::shared::crud::save_resource;
use crate::shared::dialogs::alert;
use crate::system::auth::AuthContext;

#[derive(Clone, Copy)]
pub struct BuildingDetailsViewModel {
    pub form: RwSignal<BuildingDto>,
    pub open: RwSignal<bool>,
}

impl BuildingDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(BuildingDto::default()),
            open: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.id.is_some())
    }

    pub fn title(&self) -> String {
        let title = if self.is_edit_mode() { "Edit building" } else { "New building" };
        title.to_string()
    }

    pub fn new_command(&self) {
        self.form.set(BuildingDto::default());
        self.open.set(true);
    }

    pub fn edit_command(&self, building: &Building) {
        self.form.set(BuildingDto::from(building));
        self.open.set(true);
    }

    pub fn close(&self) {
        self.open.set(false);
    }

    /// Select value from the customer dropdown; empty clears the auto-filled fields.
    pub fn select_customer(&self, value: &str, customers: &[Customer]) {
        let customer_id = parse_i64(value);
        self.form.update(|f| f.select_customer(customer_id, customers));
    }

    pub fn save_command(&self, auth: AuthContext, on_saved: Callback<()>) {
        let current = self.form.get_untracked();
        if let Err(msg) = current.validate() {
            alert(&msg);
            return;
        }
        let open = self.open;
        save_resource::<Building, _>(auth, current.id, current, move || {
            open.set(false);
            on_saved.run(());
        });
    }
}

impl Default for BuildingDetailsViewModel {
    fn default() -> Self {
        Self::new()
    }
}
