use contracts::domain::a007_quotation::aggregate::{Quotation, QuotationDto};
use contracts::domain::a012_maintenance_job::aggregate::MaintenanceJob;
use contracts::domain::common::form::parse_i64;
use leptos::prelude::*;

use crate::shared::crud::save_resource;
use crate::shared::date_utils::now_millis;
use crate::shared::dialogs::alert;
use crate::system::auth::AuthContext;

#[derive(Clone, Copy)]
pub struct QuotationDetailsViewModel {
    pub form: RwSignal<QuotationDto>,
    pub open: RwSignal<bool>,
}

impl QuotationDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(QuotationDto::default()),
            open: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.id.is_some())
    }

    pub fn title(&self) -> String {
        let title = if self.is_edit_mode() { "Edit quotation" } else { "New quotation" };
        title.to_string()
    }

    pub fn new_command(&self) {
        self.form.set(QuotationDto::default());
        self.open.set(true);
    }

    pub fn edit_command(&self, quotation: &Quotation) {
        self.form.set(QuotationDto::from(quotation));
        self.open.set(true);
    }

    pub fn close(&self) {
        self.open.set(false);
    }

    /// Select value from the contract dropdown; a contract reprices the quotation.
    pub fn select_contract(&self, value: &str, jobs: &[MaintenanceJob], call_fee: f64) {
        let contract_id = parse_i64(value);
        self.form.update(|f| f.select_contract(contract_id, jobs, call_fee));
    }

    pub fn save_command(&self, auth: AuthContext, on_saved: Callback<()>) {
        let current = self.form.get_untracked();
        if let Err(msg) = current.validate() {
            alert(&msg);
            return;
        }
        let open = self.open;
        save_resource::<Quotation, _>(auth, current.id, current.payload(now_millis()), move || {
            open.set(false);
            on_saved.run(());
        });
    }
}

impl Default for QuotationDetailsViewModel {
    fn default() -> Self {
        Self::new()
    }
}
