use crate::domain::a012_maintenance_job::actions::JobActionButtons;
use crate::domain::a012_maintenance_job::ui::details::{MaintenanceJobDetails, MaintenanceJobDetailsViewModel};
use crate::domain::a014_pricing_settings::api::fetch_pricing;
use crate::shared::components::ui::Badge;
use crate::shared::crud::delete_resource;
use crate::shared::date_utils::format_opt_datetime;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use crate::shared::page_frame::{ErrorBanner, LoadingIndicator, PageFrame, PageHeader};
use crate::shared::page_load::PageLoad;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::system::auth::use_auth;
use contracts::domain::a003_elevator::aggregate::Elevator;
use contracts::domain::a004_technician::aggregate::Technician;
use contracts::domain::a006_contract::aggregate::Contract;
use contracts::domain::a012_maintenance_job::aggregate::MaintenanceJob;
use contracts::domain::a014_pricing_settings::aggregate::PricingSettings;
use contracts::shared::metrics::format_amount;
use leptos::prelude::*;

fn technician_label(technicians: &[Technician], job: &MaintenanceJob) -> String {
    if let Some(name) = job.technician_name.clone().filter(|n| !n.trim().is_empty()) {
        return name;
    }
    job.technician_id
        .and_then(|id| technicians.iter().find(|t| t.id == id))
        .map(Technician::display_name)
        .unwrap_or_else(|| "-".to_string())
}

#[component]
#[allow(non_snake_case)]
pub fn MaintenanceJobList() -> impl IntoView {
    let auth = use_auth();
    let load = PageLoad::new();
    let items = RwSignal::new(Vec::<MaintenanceJob>::new());
    let elevators = RwSignal::new(Vec::<Elevator>::new());
    let technicians = RwSignal::new(Vec::<Technician>::new());
    let contracts = RwSignal::new(Vec::<Contract>::new());
    let pricing = RwSignal::new(PricingSettings::default());
    let vm = MaintenanceJobDetailsViewModel::new();

    let fetch = move || {
        load.run(
            auth,
            |client| async move {
                futures::try_join!(
                    client.list::<MaintenanceJob>(),
                    client.list::<Elevator>(),
                    client.list::<Technician>(),
                    client.list::<Contract>(),
                    fetch_pricing(&client),
                )
            },
            move |(jobs, elevator_rows, technician_rows, contract_rows, settings)| {
                items.set(jobs);
                elevators.set(elevator_rows);
                technicians.set(technician_rows);
                contracts.set(contract_rows);
                pricing.set(settings);
            },
        );
    };
    let on_saved = Callback::new(move |_| fetch());

    let handle_edit = move |job: &MaintenanceJob| pricing.with_untracked(|p| vm.edit_command(job, p));
    let handle_delete = move |id: i64| delete_resource::<MaintenanceJob>(auth, id, fetch);

    fetch();

    view! {
        <PageFrame page_id="a012_maintenance_job--list" category=PAGE_CAT_LIST>
            <PageHeader title="Maintenance jobs">
                <button class="button button--primary" on:click=move |_| vm.new_command()>
                    {icon("plus")}
                    "New job"
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
                            <th class="table__header-cell">"#"</th>
                            <th class="table__header-cell">"Elevator"</th>
                            <th class="table__header-cell">"Type"</th>
                            <th class="table__header-cell">"Technician"</th>
                            <th class="table__header-cell">"Status"</th>
                            <th class="table__header-cell">"Started"</th>
                            <th class="table__header-cell">"Finished"</th>
                            <th class="table__header-cell table__header-cell--numeric">"Total cost"</th>
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let technician_lookup = technicians.get();
                            items.get().into_iter().map(|row| {
                                let id = row.id;
                                let status = row.status();
                                let technician = technician_label(&technician_lookup, &row);
                                let row_for_edit = row.clone();
                                let row_for_actions = row.clone();
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{row.id}</td>
                                        <td class="table__cell">{row.elevator_label()}</td>
                                        <td class="table__cell">{row.job_type.label()}</td>
                                        <td class="table__cell">{technician}</td>
                                        <td class="table__cell">
                                            <Badge variant=status.badge_variant()>{status.label()}</Badge>
                                        </td>
                                        <td class="table__cell">{format_opt_datetime(row.started_at.as_deref())}</td>
                                        <td class="table__cell">{format_opt_datetime(row.finished_at.as_deref())}</td>
                                        <td class="table__cell table__cell--numeric">{format_amount(row.total_cost.unwrap_or(0.0))}</td>
                                        <td class="table__cell table__cell--actions">
                                            <JobActionButtons auth=auth job=row_for_actions on_done=on_saved />
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
                    <MaintenanceJobDetails
                        vm=vm
                        elevators=elevators
                        technicians=technicians
                        contracts=contracts
                        pricing=pricing
                        on_saved=on_saved
                    />
                </Modal>
            </Show>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_technician_label_falls_back_to_lookup() {
        let technicians = vec![Technician {
            id: 4,
            name: Some("Somchai".into()),
            ..Technician::default()
        }];
        let mut job = MaintenanceJob {
            technician_id: Some(4),
            ..MaintenanceJob::default()
        };
        assert_eq!(technician_label(&technicians, &job), "Somchai");
        job.technician_name = Some("Joined".into());
        assert_eq!(technician_label(&technicians, &job), "Joined");
        job.technician_name = None;
        job.technician_id = None;
        assert_eq!(technician_label(&technicians, &job), "-");
    }
}
