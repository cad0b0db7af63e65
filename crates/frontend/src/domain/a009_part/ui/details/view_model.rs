use contracts::domain::a009_part::aggregate::{Part, PartDto};
use leptos::prelude::*;

use crate::shared::crud::save_resource;
use crate::shared::dialogs::alert;
use crate::system::auth::AuthContext;

#[derive(Clone, Copy)]
pub struct PartDetailsViewModel {
    pub form: RwSignal<PartDto>,
    pub open: RwSignal<bool>,
}

impl PartDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(PartDto::default()),
            open: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.id.is_some())
    }

    pub fn title(&self) -> String {
        let title = if self.is_edit_mode() { "Edit part" } else { "New part" };
        title.to_string()
    }

    pub fn new_command(&self) {
        self.form.set(PartDto::default());
        self.open.set(true);
    }

    pub fn edit_command(&self, part: &Part) {
        self.form.set(PartDto::from(part));
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
        save_resource::<Part, _>(auth, current.id, current.payload(), move || {
            open.set(false);
            on_saved.run(());
        });
    }
}

impl Default for PartDetailsViewModel {
    fn default() -> Self {
        Self::new()
    }
}
