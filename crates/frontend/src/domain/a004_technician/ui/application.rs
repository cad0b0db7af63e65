//! Application form shown to technicians until an administrator approves them.

use contracts::domain::a004_technician::aggregate::{technician_for_user, Technician};
use contracts::domain::a005_technician_request::aggregate::{
    latest_request_for_user, RequestStatus, TechnicianRequest, TechnicianRequestDto,
};
use contracts::domain::common::form::text_of;
use leptos::prelude::*;

use crate::shared::components::ui::{Badge, Input, Textarea};
use crate::shared::date_utils::{format_opt_datetime, today};
use crate::shared::dialogs::alert;
use crate::shared::icons::icon;
use crate::shared::page_frame::{ErrorBanner, LoadingIndicator, PageFrame, PageHeader};
use crate::shared::page_load::{run_action, PageLoad};
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use crate::system::auth::use_auth;

/// A new application may be filed unless one is still pending.
fn can_apply(latest: Option<&TechnicianRequest>) -> bool {
    latest.map_or(true, |r| r.status == RequestStatus::Rejected)
}

#[component]
pub fn TechnicianApplication() -> impl IntoView {
    let auth = use_auth();
    let load = PageLoad::new();
    let profile = RwSignal::new(None::<Technician>);
    let latest = RwSignal::new(None::<TechnicianRequest>);
    let form = RwSignal::new(TechnicianRequestDto::default());
    let submitting = RwSignal::new(false);

    let fetch = move || {
        let Some(user_id) = auth.user_untracked().map(|u| u.id) else {
            return;
        };
        load.run(
            auth,
            |client| async move {
                futures::try_join!(client.list::<Technician>(), client.list::<TechnicianRequest>())
            },
            move |(technicians, requests)| {
                auth.sync_approval(&technicians);
                profile.set(technician_for_user(&technicians, user_id).cloned());
                latest.set(latest_request_for_user(&requests, user_id).cloned());
            },
        );
    };

    let submit = move |_| {
        let dto = form.get_untracked();
        if let Err(msg) = dto.validate() {
            alert(&msg);
            return;
        }
        submitting.set(true);
        run_action(
            auth,
            move |client| async move {
                let result = client.create::<TechnicianRequest, _>(&dto).await;
                let _ = submitting.try_set(false);
                result
            },
            move |_| {
                form.set(TechnicianRequestDto::default());
                fetch();
            },
        );
    };

    fetch();

    view! {
        <PageFrame page_id="a005_technician_request--detail" category=PAGE_CAT_DETAIL>
            <PageHeader title="Technician application" />

            <ErrorBanner error=load.error />
            <LoadingIndicator loading=load.loading />

            {move || profile.get().map(|t| view! {
                <div class="info-box info-box--success">
                    <p>"Your technician account is approved."</p>
                    <p>"Specialty: " {text_of(&t.specialty)}</p>
                    <p>"Phone: " {text_of(&t.phone)}</p>
                </div>
            })}

            {move || {
                if profile.get().is_some() {
                    return None;
                }
                latest.get().map(|r| view! {
                    <div class="info-box">
                        <span>"Latest application, submitted " {format_opt_datetime(r.created_at.as_deref())} ": "</span>
                        <Badge variant=r.status.badge_variant()>{r.status.label()}</Badge>
                    </div>
                })
            }}

            <Show when=move || profile.get().is_none() && latest.with(|r| can_apply(r.as_ref()))>
                <div class="details-form">
                    <Input
                        label="Phone"
                        id="application-phone"
                        value=Signal::derive(move || form.get().phone)
                        on_input=Callback::new(move |v| form.update(|f| f.phone = v))
                        required=true
                    />
                    <Input
                        label="Specialty"
                        id="application-specialty"
                        value=Signal::derive(move || form.get().specialty)
                        on_input=Callback::new(move |v| form.update(|f| f.specialty = v))
                        required=true
                    />
                    <Input
                        label="Address"
                        id="application-address"
                        value=Signal::derive(move || form.get().address)
                        on_input=Callback::new(move |v| form.update(|f| f.address = v))
                        required=true
                    />
                    <Input
                        label="Date of birth"
                        id="application-dob"
                        input_type="date"
                        value=Signal::derive(move || form.get().date_of_birth)
                        on_input=Callback::new(move |v: String| form.update(|f| f.set_date_of_birth(&v, today())))
                        required=true
                    />
                    <Input
                        label="Age"
                        id="application-age"
                        value=Signal::derive(move || form.get().age_text())
                        readonly=true
                    />
                    <Textarea
                        label="Experience"
                        id="application-experience"
                        value=Signal::derive(move || form.get().experience)
                        on_input=Callback::new(move |v| form.update(|f| f.experience = v))
                        rows=3
                    />
                    <Textarea
                        label="Education"
                        id="application-education"
                        value=Signal::derive(move || form.get().education)
                        on_input=Callback::new(move |v| form.update(|f| f.education = v))
                        rows=2
                    />
                    <Textarea
                        label="Notes"
                        id="application-notes"
                        value=Signal::derive(move || form.get().notes)
                        on_input=Callback::new(move |v| form.update(|f| f.notes = v))
                        rows=2
                    />
                </div>
                <div class="details-actions">
                    <button class="button button--primary" on:click=submit disabled=move || submitting.get()>
                        {icon("check")}
                        "Submit application"
                    </button>
                </div>
            </Show>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_can_apply_unless_pending() {
        assert!(can_apply(None));
        let mut request = TechnicianRequest::default();
        assert!(!can_apply(Some(&request)));
        request.status = RequestStatus::Rejected;
        assert!(can_apply(Some(&request)));
        request.status = RequestStatus::Approved;
        assert!(!can_apply(Some(&request)));
    }
}
