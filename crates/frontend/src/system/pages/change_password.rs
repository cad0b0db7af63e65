use contracts::system::auth::ChangePasswordForm;
use leptos::prelude::*;

use crate::shared::dialogs::alert;
use crate::shared::page_frame::{PageFrame, PageHeader};
use crate::shared::page_load::run_action;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::system::auth::{api, use_auth};

#[component]
pub fn ChangePasswordPage() -> impl IntoView {
    let auth = use_auth();
    let form = RwSignal::new(ChangePasswordForm::default());
    let message = RwSignal::new(Option::<String>::None);
    let saving = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let request = match form.get_untracked().validate() {
            Ok(request) => request,
            Err(msg) => {
                alert(&msg);
                return;
            }
        };
        saving.set(true);
        message.set(None);
        run_action(
            auth,
            move |client| async move {
                let result = api::change_password(&client, &request).await;
                saving.set(false);
                result
            },
            move |response| {
                form.set(ChangePasswordForm::default());
                message.set(Some(
                    response
                        .message
                        .unwrap_or_else(|| "Password changed".to_string()),
                ));
            },
        );
    };

    view! {
        <PageFrame page_id="change_password--system" category=PAGE_CAT_SYSTEM>
            <PageHeader title="Change password" />
            <div class="page__content">
                {move || message.get().map(|m| view! { <div class="success-box">{m}</div> })}
                <form class="details-form" on:submit=on_submit>
                    <div class="form-group">
                        <label for="current-password">"Current password"</label>
                        <input
                            type="password"
                            id="current-password"
                            prop:value=move || form.get().current_password
                            on:input=move |ev| form.update(|f| f.current_password = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="new-password">"New password"</label>
                        <input
                            type="password"
                            id="new-password"
                            prop:value=move || form.get().new_password
                            on:input=move |ev| form.update(|f| f.new_password = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="confirm-password">"Confirm new password"</label>
                        <input
                            type="password"
                            id="confirm-password"
                            prop:value=move || form.get().confirm_password
                            on:input=move |ev| form.update(|f| f.confirm_password = event_target_value(&ev))
                        />
                    </div>
                    <div class="details-actions">
                        <button type="submit" class="button button--primary" disabled=move || saving.get()>
                            {move || if saving.get() { "Saving..." } else { "Change password" }}
                        </button>
                    </div>
                </form>
            </div>
        </PageFrame>
    }
}
