//! Admin review of technician applications.

use contracts::domain::a005_technician_request::aggregate::{RequestDecision, RequestStatus, TechnicianRequest};
use contracts::domain::common::form::text_of;
use leptos::prelude::*;

use crate::shared::components::ui::Badge;
use crate::shared::date_utils::format_opt_datetime;
use crate::shared::dialogs::confirm;
use crate::shared::icons::icon;
use crate::shared::page_frame::{ErrorBanner, LoadingIndicator, PageFrame, PageHeader};
use crate::shared::page_load::{run_action, PageLoad};
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::system::auth::use_auth;

fn decision_prompt(decision: RequestDecision, applicant: &str) -> String {
    match decision.status {
        RequestStatus::Rejected => format!("Reject the application from {}?", applicant),
        _ => format!("Approve the application from {}?", applicant),
    }
}

#[component]
pub fn TechnicianRequestList() -> impl IntoView {
    let auth = use_auth();
    let load = PageLoad::new();
    let items = RwSignal::new(Vec::<TechnicianRequest>::new());

    let fetch = move || {
        load.run(
            auth,
            |client| async move { client.list::<TechnicianRequest>().await },
            move |rows| items.set(rows),
        );
    };

    let decide = move |id: i64, applicant: String, decision: RequestDecision| {
        if !confirm(&decision_prompt(decision, &applicant)) {
            return;
        }
        run_action(
            auth,
            move |client| async move { client.update::<TechnicianRequest, _>(&id, &decision).await },
            move |_| fetch(),
        );
    };

    fetch();

    view! {
        <PageFrame page_id="a005_technician_request--list" category=PAGE_CAT_LIST>
            <PageHeader title="Technician applications">
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
                            <th class="table__header-cell">"Applicant"</th>
                            <th class="table__header-cell">"Email"</th>
                            <th class="table__header-cell">"Phone"</th>
                            <th class="table__header-cell">"Specialty"</th>
                            <th class="table__header-cell">"Age"</th>
                            <th class="table__header-cell">"Experience"</th>
                            <th class="table__header-cell">"Submitted"</th>
                            <th class="table__header-cell">"Status"</th>
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            items.get().into_iter().map(|row| {
                                let id = row.id;
                                let applicant = text_of(&row.name);
                                let status = row.status;
                                let pending = status == RequestStatus::Pending;
                                let approve_name = applicant.clone();
                                let reject_name = applicant.clone();
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{applicant}</td>
                                        <td class="table__cell">{text_of(&row.email)}</td>
                                        <td class="table__cell">{text_of(&row.phone)}</td>
                                        <td class="table__cell">{text_of(&row.specialty)}</td>
                                        <td class="table__cell">{row.age.map(|a| a.to_string()).unwrap_or_default()}</td>
                                        <td class="table__cell">{text_of(&row.experience)}</td>
                                        <td class="table__cell">{format_opt_datetime(row.created_at.as_deref())}</td>
                                        <td class="table__cell">
                                            <Badge variant=status.badge_variant()>{status.label()}</Badge>
                                        </td>
                                        <td class="table__cell table__cell--actions">
                                            <Show when=move || pending>
                                                <button class="button button--icon" title="Approve" on:click={
                                                    let name = approve_name.clone();
                                                    move |_| decide(id, name.clone(), RequestDecision::approve())
                                                }>
                                                    {icon("check")}
                                                </button>
                                                <button class="button button--icon" title="Reject" on:click={
                                                    let name = reject_name.clone();
                                                    move |_| decide(id, name.clone(), RequestDecision::reject())
                                                }>
                                                    {icon("x")}
                                                </button>
                                            </Show>
                                        </td>
                                    </tr>
                                }
                            }).collect_view()
                        }}
                    </tbody>
                </table>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decision_prompt_names_applicant() {
        assert_eq!(
            decision_prompt(RequestDecision::reject(), "Ann"),
            "Reject the application from Ann?"
        );
        assert_eq!(
            decision_prompt(RequestDecision::approve(), "Ann"),
            "Approve the application from Ann?"
        );
    }
}
