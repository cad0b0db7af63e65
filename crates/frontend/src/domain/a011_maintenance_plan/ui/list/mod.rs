use crate::domain::a011_maintenance_plan::ui::details::{MaintenancePlanDetails, MaintenancePlanDetailsViewModel};
use crate::shared::components::ui::Badge;
use crate::shared::crud::delete_resource;
use crate::shared::date_utils::{format_opt_date, today};
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use crate::shared::page_frame::{ErrorBanner, LoadingIndicator, PageFrame, PageHeader};
use crate::shared::page_load::PageLoad;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::system::auth::use_auth;
use contracts::domain::a003_elevator::aggregate::{elevator_label, Elevator};
use contracts::domain::a006_contract::aggregate::Contract;
use contracts::domain::a010_maintenance_template::aggregate::{template_name, MaintenanceTemplate};
use contracts::domain::a011_maintenance_plan::aggregate::MaintenancePlan;
use contracts::domain::common::form::int_text;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn MaintenancePlanList() -> impl IntoView {
    let auth = use_auth();
    let load = PageLoad::new();
    let items = RwSignal::new(Vec::<MaintenancePlan>::new());
    let elevators = RwSignal::new(Vec::<Elevator>::new());
    let contracts = RwSignal::new(Vec::<Contract>::new());
    let templates = RwSignal::new(Vec::<MaintenanceTemplate>::new());
    let vm = MaintenancePlanDetailsViewModel::new();

    let fetch = move || {
        load.run(
            auth,
            |client| async move {
                futures::try_join!(
                    client.list::<MaintenancePlan>(),
                    client.list::<Elevator>(),
                    client.list::<Contract>(),
                    client.list::<MaintenanceTemplate>(),
                )
            },
            move |(plans, elevator_rows, contract_rows, template_rows)| {
                items.set(plans);
                elevators.set(elevator_rows);
                contracts.set(contract_rows);
                templates.set(template_rows);
            },
        );
    };
    let on_saved = Callback::new(move |_| fetch());

    let handle_edit = move |plan: &MaintenancePlan| {
        elevators.with_untracked(|e| contracts.with_untracked(|c| vm.edit_command(plan, e, c)));
    };
    let handle_delete = move |id: i64| delete_resource::<MaintenancePlan>(auth, id, fetch);

    fetch();

    view! {
        <PageFrame page_id="a011_maintenance_plan--list" category=PAGE_CAT_LIST>
            <PageHeader title="Maintenance plans">
                <button class="button button--primary" on:click=move |_| vm.new_command()>
                    {icon("plus")}
                    "New plan"
                </button>
                <button class="button button--secondary" on:click=move |_| fetch()>
                    {icon("refresh")}
                    "Refresh"
                </button>
            </PageHeader>

            <ErrorBanner error=load.error />
            <LoadingIndicator loading=load.loading />

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Elevator"</th>
                            <th class="table__header-cell">"Template"</th>
                            <th class="table__header-cell table__header-cell--numeric">"Visits / year"</th>
                            <th class="table__header-cell">"Last run"</th>
                            <th class="table__header-cell">"Next run"</th>
                            <th class="table__header-cell">"Due"</th>
                            <th class="table__header-cell">"Active"</th>
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let elevator_lookup = elevators.get();
                            let template_lookup = templates.get();
                            let today = today();
                            items.get().into_iter().map(|row| {
                                let id = row.id;
                                let urgency = row.urgency(today);
                                let active = if row.is_active { "Yes" } else { "No" };
                                let row_for_edit = row.clone();
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{elevator_label(&elevator_lookup, &row.elevator_id)}</td>
                                        <td class="table__cell">{template_name(&template_lookup, row.template_id)}</td>
                                        <td class="table__cell table__cell--numeric">{int_text(row.frequency_per_year)}</td>
                                        <td class="table__cell">{format_opt_date(row.last_run_at.as_deref())}</td>
                                        <td class="table__cell">{format_opt_date(row.next_run_at.as_deref())}</td>
                                        <td class="table__cell">
                                            <Badge variant=urgency.badge_variant()>{urgency.label()}</Badge>
                                        </td>
                                        <td class="table__cell">{active}</td>
                                        <td class="table__cell table__cell--actions">
                                            <button class="button button--icon" title="Edit" on:click=move |_| handle_edit(&row_for_edit)>
                                                {icon("edit")}
                                            </button>
                                            <button class="button button--icon" title="Delete" on:click=move |_| handle_delete(id)>
                                                {icon("delete")}
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }).collect_view()
                        }}
                    </tbody>
                </table>
            </div>

            <Show when=move || vm.open.get()>
                <Modal
                    title=Signal::derive(move || vm.title())
                    on_close=Callback::new(move |_| vm.close())
                >
                    <MaintenancePlanDetails
                        vm=vm
                        elevators=elevators
                        contracts=contracts
                        templates=templates
                        on_saved=on_saved
                    />
                </Modal>
            </Show>
        </PageFrame>
    }
}
