use crate::domain::a004_technician::ui::details::{TechnicianDetails, TechnicianDetailsViewModel};
use crate::shared::crud::delete_resource;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use crate::shared::page_frame::{ErrorBanner, LoadingIndicator, PageFrame, PageHeader};
use crate::shared::page_load::PageLoad;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::system::auth::use_auth;
use contracts::domain::a004_technician::aggregate::{Technician, TechnicianUser, TECHNICIAN_USERS_PATH};
use contracts::domain::common::form::text_of;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn TechnicianList() -> impl IntoView {
    let auth = use_auth();
    let load = PageLoad::new();
    let items = RwSignal::new(Vec::<Technician>::new());
    let users = RwSignal::new(Vec::<TechnicianUser>::new());
    let vm = TechnicianDetailsViewModel::new();

    let fetch = move || {
        load.run(
            auth,
            |client| async move {
                futures::try_join!(
                    client.list::<Technician>(),
                    client.get::<Vec<TechnicianUser>>(TECHNICIAN_USERS_PATH)
                )
            },
            move |(technicians, user_rows)| {
                auth.sync_approval(&technicians);
                items.set(technicians);
                users.set(user_rows);
            },
        );
    };
    let on_saved = Callback::new(move |_| fetch());

    let handle_delete = move |id: i64| delete_resource::<Technician>(auth, id, fetch);

    fetch();

    view! {
        <PageFrame page_id="a004_technician--list" category=PAGE_CAT_LIST>
            <PageHeader title="Technicians">
                <button class="button button--primary" on:click=move |_| vm.new_command()>
                    {icon("plus")}
                    "New technician"
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
                            <th class="table__header-cell">"Name"</th>
                            <th class="table__header-cell">"Email"</th>
                            <th class="table__header-cell">"Phone"</th>
                            <th class="table__header-cell">"Specialty"</th>
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            items.get().into_iter().map(|row| {
                                let id = row.id;
                                let row_for_edit = row.clone();
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{row.display_name()}</td>
                                        <td class="table__cell">{text_of(&row.email)}</td>
                                        <td class="table__cell">{text_of(&row.phone)}</td>
                                        <td class="table__cell">{text_of(&row.specialty)}</td>
                                        <td class="table__cell table__cell--actions">
                                            <button class="button button--icon" title="Edit" on:click=move |_| vm.edit_command(&row_for_edit)>
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
                    <TechnicianDetails vm=vm users=users on_saved=on_saved />
                </Modal>
            </Show>
        </PageFrame>
    }
}
