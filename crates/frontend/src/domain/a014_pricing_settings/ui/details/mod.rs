use contracts::domain::a014_pricing_settings::aggregate::{PricingSettings, PricingSettingsDto};
use leptos::prelude::*;

use crate::domain::a014_pricing_settings::api;
use crate::shared::components::ui::Input;
use crate::shared::dialogs::alert;
use crate::shared::icons::icon;
use crate::shared::page_frame::{ErrorBanner, LoadingIndicator, PageFrame, PageHeader};
use crate::shared::page_load::{run_action, PageLoad};
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use crate::system::auth::use_auth;

/// Singleton form for the rates used by job costing.
#[component]
pub fn PricingSettingsPage() -> impl IntoView {
    let auth = use_auth();
    let load = PageLoad::new();
    let form = RwSignal::new(PricingSettingsDto::from(&PricingSettings::default()));
    let saved = RwSignal::new(false);

    let fetch = move || {
        load.run(
            auth,
            |client| async move { api::fetch_pricing(&client).await },
            move |settings| form.set(PricingSettingsDto::from(&settings)),
        );
    };

    let save = move |_| {
        let settings = match form.get_untracked().validate() {
            Ok(settings) => settings,
            Err(msg) => {
                alert(&msg);
                return;
            }
        };
        saved.set(false);
        run_action(
            auth,
            move |client| async move { api::save_pricing(&client, &settings).await },
            move |_| {
                saved.set(true);
                fetch();
            },
        );
    };

    fetch();

    view! {
        <PageFrame page_id="a014_pricing_settings--detail" category=PAGE_CAT_DETAIL>
            <PageHeader title="Pricing settings">
                <button class="button button--secondary" on:click=move |_| fetch()>
                    {icon("refresh")}
                    "Refresh"
                </button>
            </PageHeader>

            <ErrorBanner error=load.error />
            <LoadingIndicator loading=load.loading />

            <div class="details-container pricing-details">
                <div class="details-form">
                    <Input
                        label="Call fee"
                        id="pricing-call-fee"
                        input_type="number"
                        step="0.01"
                        value=Signal::derive(move || form.get().call_fee)
                        on_input=Callback::new(move |v| form.update(|f| f.call_fee = v))
                    />
                    <Input
                        label="Labor rate per hour"
                        id="pricing-labor-rate"
                        input_type="number"
                        step="0.01"
                        value=Signal::derive(move || form.get().labor_rate_per_hour)
                        on_input=Callback::new(move |v| form.update(|f| f.labor_rate_per_hour = v))
                    />
                    <Input
                        label="Parts markup (%)"
                        id="pricing-markup"
                        input_type="number"
                        step="0.1"
                        value=Signal::derive(move || form.get().parts_markup_percent)
                        on_input=Callback::new(move |v| form.update(|f| f.parts_markup_percent = v))
                    />
                    <Input
                        label="Currency"
                        id="pricing-currency"
                        value=Signal::derive(move || form.get().currency)
                        on_input=Callback::new(move |v| form.update(|f| f.currency = v))
                    />
                </div>
                <div class="details-actions">
                    <button class="button button--primary" on:click=save>
                        {icon("save")}
                        "Save"
                    </button>
                    <Show when=move || saved.get()>
                        <span class="form-message form-message--success">"Settings saved"</span>
                    </Show>
                </div>
            </div>
        </PageFrame>
    }
}
