use contracts::domain::a006_contract::aggregate::{Contract, ContractDto, ContractType};
use leptos::prelude::*;

use crate::shared::crud::save_resource;
use crate::shared::dialogs::alert;
use crate::system::auth::AuthContext;

#[derive(Clone, Copy)]
pub struct ContractDetailsViewModel {
    pub form: RwSignal<ContractDto>,
    pub open: RwSignal<bool>,
}

impl ContractDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(ContractDto::default()),
            open: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.id.is_some())
    }

    pub fn title(&self) -> String {
        let title = if self.is_edit_mode() { "Edit contract" } else { "New contract" };
        title.to_string()
    }

    pub fn scheduling_enabled(&self) -> bool {
        self.form.with(|f| f.scheduling_enabled())
    }

    pub fn new_command(&self) {
        self.form.set(ContractDto::default());
        self.open.set(true);
    }

    pub fn edit_command(&self, contract: &Contract) {
        self.form.set(ContractDto::from(contract));
        self.open.set(true);
    }

    pub fn close(&self) {
        self.open.set(false);
    }

    pub fn set_contract_type(&self, value: &str) {
        let contract_type = ContractType::from_str_or_default(value);
        self.form.update(|f| f.set_contract_type(contract_type));
    }

    pub fn save_command(&self, auth: AuthContext, on_saved: Callback<()>) {
        let current = self.form.get_untracked();
        if let Err(msg) = current.validate() {
            alert(&msg);
            return;
        }
        let open = self.open;
        save_resource::<Contract, _>(auth, current.id, current.payload(), move || {
            open.set(false);
            on_saved.run(());
        });
    }
}

impl Default for ContractDetailsViewModel {
    fn default() -> Self {
        Self::new()
    }
}
