//! Service request form opened from elevator rows and the customer portal.

use contracts::domain::a003_elevator::aggregate::Elevator;
use contracts::domain::a013_ticket::aggregate::{TicketDto, TicketPriority};
use leptos::prelude::*;

use crate::domain::a013_ticket::api;
use crate::shared::components::ui::{options_of, Input, Select, Textarea};
use crate::shared::dialogs::alert;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use crate::shared::page_load::run_action;
use crate::system::auth::use_auth;

#[component]
pub fn TicketModal(
    /// Elevators the user may pick from
    #[prop(into)]
    elevators: Signal<Vec<Elevator>>,
    /// Pre-selected elevator code, if opened from a row
    #[prop(optional)]
    elevator_id: Option<String>,
    on_close: Callback<()>,
    /// Runs after the ticket was accepted
    #[prop(optional)]
    on_created: Option<Callback<()>>,
) -> impl IntoView {
    let auth = use_auth();
    let form = RwSignal::new(
        elevator_id
            .as_deref()
            .map(TicketDto::for_elevator)
            .unwrap_or_default(),
    );
    let submitting = RwSignal::new(false);

    let elevator_options = Signal::derive(move || {
        elevators.with(|list| options_of(list, |e| (e.id.clone(), e.display_name())))
    });
    let priority_options: Vec<(String, String)> = TicketPriority::ALL
        .iter()
        .map(|p| (p.as_str().to_string(), p.label().to_string()))
        .collect();

    let submit = move |_| {
        let ticket = match form.get_untracked().validate() {
            Ok(ticket) => ticket,
            Err(msg) => {
                alert(&msg);
                return;
            }
        };
        submitting.set(true);
        run_action(
            auth,
            move |client| async move {
                let result = api::create_ticket(&client, &ticket).await;
                let _ = submitting.try_set(false);
                result
            },
            move |_| {
                alert("Ticket submitted");
                if let Some(cb) = on_created {
                    cb.run(());
                }
                on_close.run(());
            },
        );
    };

    view! {
        <Modal title="Report a problem".to_string() on_close=on_close>
            <div class="details-form">
                <Select
                    label="Elevator"
                    id="ticket-elevator"
                    placeholder="Select an elevator"
                    value=Signal::derive(move || form.get().elevator_id)
                    options=elevator_options
                    on_change=Callback::new(move |v| form.update(|f| f.elevator_id = v))
                    required=true
                />
                <Input
                    label="Title"
                    id="ticket-title"
                    value=Signal::derive(move || form.get().title)
                    on_input=Callback::new(move |v| form.update(|f| f.title = v))
                />
                <Textarea
                    label="Description"
                    id="ticket-description"
                    value=Signal::derive(move || form.get().description)
                    on_input=Callback::new(move |v| form.update(|f| f.description = v))
                    rows=4
                />
                <Select
                    label="Priority"
                    id="ticket-priority"
                    value=Signal::derive(move || form.get().priority.as_str().to_string())
                    options=priority_options
                    on_change=Callback::new(move |v: String| {
                        form.update(|f| f.priority = TicketPriority::from_str_or_default(&v))
                    })
                />
            </div>
            <div class="details-actions">
                <button class="button button--primary" on:click=submit disabled=move || submitting.get()>
                    {icon("ticket")}
                    {move || if submitting.get() { "Sending..." } else { "Submit" }}
                </button>
                <button class="button button--secondary" on:click=move |_| on_close.run(())>
                    "Cancel"
                </button>
            </div>
        </Modal>
    }
}
