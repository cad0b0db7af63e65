use crate::domain::a003_elevator::ui::details::{ElevatorDetails, ElevatorDetailsViewModel};
use crate::domain::a013_ticket::ui::TicketModal;
use crate::shared::components::ui::Badge;
use crate::shared::crud::delete_resource;
use crate::shared::date_utils::format_opt_date;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use crate::shared::page_frame::{ErrorBanner, LoadingIndicator, PageFrame, PageHeader};
use crate::shared::page_load::PageLoad;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::system::auth::use_auth;
use contracts::domain::a002_building::aggregate::Building;
use contracts::domain::a003_elevator::aggregate::Elevator;
use contracts::domain::common::form::text_of;
use leptos::prelude::*;

fn building_name(buildings: &[Building], elevator: &Elevator) -> String {
    if let Some(name) = elevator.building_name.clone() {
        return name;
    }
    elevator
        .building_id
        .and_then(|id| buildings.iter().find(|b| b.id == id))
        .map(|b| b.name.clone())
        .unwrap_or_else(|| "-".to_string())
}

#[component]
#[allow(non_snake_case)]
pub fn ElevatorList() -> impl IntoView {
    let auth = use_auth();
    let load = PageLoad::new();
    let items = RwSignal::new(Vec::<Elevator>::new());
    let buildings = RwSignal::new(Vec::<Building>::new());
    let vm = ElevatorDetailsViewModel::new();
    let ticket_for = RwSignal::new(None::<String>);

    let fetch = move || {
        load.run(
            auth,
            |client| async move {
                futures::try_join!(client.list::<Elevator>(), client.list::<Building>())
            },
            move |(elevators, building_rows)| {
                items.set(elevators);
                buildings.set(building_rows);
            },
        );
    };
    let on_saved = Callback::new(move |_| fetch());

    let handle_delete = move |id: String| delete_resource::<Elevator>(auth, id, fetch);

    fetch();

    view! {
        <PageFrame page_id="a003_elevator--list" category=PAGE_CAT_LIST>
            <PageHeader title="Elevators">
                <button class="button button--primary" on:click=move |_| vm.new_command()>
                    {icon("plus")}
                    "New elevator"
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
                            <th class="table__header-cell">"Code"</th>
                            <th class="table__header-cell">"Name"</th>
                            <th class="table__header-cell">"Building"</th>
                            <th class="table__header-cell">"Brand / model"</th>
                            <th class="table__header-cell">"State"</th>
                            <th class="table__header-cell">"Last maintenance"</th>
                            <th class="table__header-cell">"Next maintenance"</th>
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let lookup = buildings.get();
                            items.get().into_iter().map(|row| {
                                let id = row.id.clone();
                                let ticket_id = row.id.clone();
                                let building = building_name(&lookup, &row);
                                let brand_model = format!("{} {}", text_of(&row.brand), text_of(&row.model));
                                let state = row.state;
                                let row_for_edit = row.clone();
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{row.id.clone()}</td>
                                        <td class="table__cell">{text_of(&row.name)}</td>
                                        <td class="table__cell">{building}</td>
                                        <td class="table__cell">{brand_model.trim().to_string()}</td>
                                        <td class="table__cell">
                                            <Badge variant=state.badge_variant()>{state.label()}</Badge>
                                        </td>
                                        <td class="table__cell">{format_opt_date(row.last_maintenance_at.as_deref())}</td>
                                        <td class="table__cell">{format_opt_date(row.next_maintenance_at.as_deref())}</td>
                                        <td class="table__cell table__cell--actions">
                                            <button class="button button--icon" title="Report issue" on:click=move |_| ticket_for.set(Some(ticket_id.clone()))>
                                                {icon("alert-triangle")}
                                            </button>
                                            <button class="button button--icon" title="Edit" on:click=move |_| vm.edit_command(&row_for_edit)>
                                                {icon("edit")}
                                            </button>
                                            <button class="button button--icon" title="Delete" on:click=move |_| handle_delete(id.clone())>
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
                    <ElevatorDetails vm=vm buildings=buildings on_saved=on_saved />
                </Modal>
            </Show>

            {move || ticket_for.get().map(|elevator_id| view! {
                <TicketModal
                    elevators=items
                    elevator_id=elevator_id
                    on_close=Callback::new(move |_| ticket_for.set(None))
                    on_created=Callback::new(move |_| fetch())
                />
            })}
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_building_name_prefers_joined_value() {
        let buildings = vec![Building {
            id: 3,
            name: "Tower A".into(),
            ..Building::default()
        }];
        let mut elevator = Elevator {
            id: "EL-1".into(),
            building_id: Some(3),
            ..Elevator::default()
        };
        assert_eq!(building_name(&buildings, &elevator), "Tower A");
        elevator.building_name = Some("Joined".into());
        assert_eq!(building_name(&buildings, &elevator), "Joined");
        elevator.building_name = None;
        elevator.building_id = Some(9);
        assert_eq!(building_name(&buildings, &elevator), "-");
    }
}
