use contracts::domain::a003_elevator::aggregate::{Elevator, ElevatorDto};
use leptos::prelude::*;

use crate::shared::crud::save_resource;
use crate::shared::dialogs::alert;
use crate::system::auth::AuthContext;

#[derive(Clone, Copy)]
pub struct ElevatorDetailsViewModel {
    pub form: RwSignal<ElevatorDto>,
    pub open: RwSignal<bool>,
}

impl ElevatorDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(ElevatorDto::default()),
            open: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.is_edit_mode())
    }

    pub fn title(&self) -> String {
        let title = if self.is_edit_mode() { "Edit elevator" } else { "New elevator" };
        title.to_string()
    }

    pub fn new_command(&self) {
        self.form.set(ElevatorDto::default());
        self.open.set(true);
    }

    pub fn edit_command(&self, elevator: &Elevator) {
        self.form.set(ElevatorDto::from(elevator));
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
        let id = current.existing.then(|| current.id.clone());
        let open = self.open;
        save_resource::<Elevator, _>(auth, id, current.payload(), move || {
            open.set(false);
            on_saved.run(());
        });
    }
}

impl Default for ElevatorDetailsViewModel {
    fn default() -> Self {
        Self::new()
    }
}
