use contracts::domain::a001_customer::aggregate::{Customer, CustomerDto};
use leptos::prelude::*;

use crate::shared::crud::save_resource;
use crate::shared::dialogs::alert;
use crate::system::auth::AuthContext;

#[derive(Clone, Copy)]
pub struct CustomerDetailsViewModel {
    pub form: RwSignal<CustomerDto>,
    pub open: RwSignal<bool>,
}

impl CustomerDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(CustomerDto::default()),
            open: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.id.is_some())
    }

    pub fn title(&self) -> String {
        let title = if self.is_edit_mode() { "Edit customer" } else { "New customer" };
        title.to_string()
    }

    pub fn new_command(&self) {
        self.form.set(CustomerDto::default());
        self.open.set(true);
    }

    pub fn edit_command(&self, customer: &Customer) {
        self.form.set(CustomerDto::from(customer));
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
        save_resource::<Customer, _>(auth, current.id, current, move || {
            open.set(false);
            on_saved.run(());
        });
    }
}

impl Default for CustomerDetailsViewModel {
    fn default() -> Self {
        Self::new()
    }
}
