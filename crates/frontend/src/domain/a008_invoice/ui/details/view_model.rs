use contracts::domain::a007_quotation::aggregate::Quotation;
use contracts::domain::a008_invoice::aggregate::{Invoice, InvoiceDto};
use contracts::domain::common::form::parse_i64;
use leptos::prelude::*;

use crate::shared::crud::save_resource;
use crate::shared::date_utils::now_millis;
use crate::shared::dialogs::alert;
use crate::system::auth::AuthContext;

#[derive(Clone, Copy)]
pub struct InvoiceDetailsViewModel {
    pub form: RwSignal<InvoiceDto>,
    pub open: RwSignal<bool>,
}

impl InvoiceDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(InvoiceDto::default()),
            open: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.id.is_some())
    }

    pub fn title(&self) -> String {
        let title = if self.is_edit_mode() { "Edit invoice" } else { "New invoice" };
        title.to_string()
    }

    pub fn new_command(&self) {
        self.form.set(InvoiceDto::default());
        self.open.set(true);
    }

    pub fn edit_command(&self, invoice: &Invoice) {
        self.form.set(InvoiceDto::from(invoice));
        self.open.set(true);
    }

    pub fn close(&self) {
        self.open.set(false);
    }

    pub fn select_quotation(&self, value: &str, quotations: &[Quotation]) {
        let quotation_id = parse_i64(value);
        self.form.update(|f| f.select_quotation(quotation_id, quotations));
    }

    pub fn save_command(&self, auth: AuthContext, on_saved: Callback<()>) {
        let current = self.form.get_untracked();
        if let Err(msg) = current.validate() {
            alert(&msg);
            return;
        }
        let open = self.open;
        save_resource::<Invoice, _>(auth, current.id, current.payload(now_millis()), move || {
            open.set(false);
            on_saved.run(());
        });
    }
}

impl Default for InvoiceDetailsViewModel {
    fn default() -> Self {
        Self::new()
    }
}
