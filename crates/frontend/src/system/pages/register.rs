use contracts::system::auth::{RegisterRequest, Role};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::api_utils::ApiClient;
use crate::system::auth::{api, use_auth};

#[component]
pub fn RegisterPage(on_login: Callback<()>) -> impl IntoView {
    let form = RwSignal::new(RegisterRequest::default());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let auth = use_auth();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let request = form.get_untracked();
        if let Err(msg) = request.validate() {
            set_error_message.set(Some(msg));
            return;
        }

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            let client = ApiClient::new(auth);
            match api::register(&client, &request).await {
                Ok(response) => {
                    set_is_loading.set(false);
                    auth.login(response.token, response.user);
                }
                Err(e) => {
                    set_error_message.set(Some(format!("Registration failed: {}", e)));
                    set_is_loading.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"LiftCare"</h1>
                <h2>"Create an account"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="reg-name">"Name"</label>
                        <input
                            type="text"
                            id="reg-name"
                            prop:value=move || form.get().name
                            on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                            required
                        />
                    </div>
                    <div class="form-group">
                        <label for="reg-email">"Email"</label>
                        <input
                            type="email"
                            id="reg-email"
                            prop:value=move || form.get().email
                            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                            required
                        />
                    </div>
                    <div class="form-group">
                        <label for="reg-password">"Password"</label>
                        <input
                            type="password"
                            id="reg-password"
                            prop:value=move || form.get().password
                            on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                            required
                        />
                    </div>
                    <div class="form-group">
                        <label for="reg-role">"Role"</label>
                        <select
                            id="reg-role"
                            prop:value=move || form.get().role.as_str()
                            on:change=move |ev| {
                                let role = Role::from_str_or_default(&event_target_value(&ev));
                                form.update(|f| f.role = role);
                            }
                        >
                            <option value="customer">{Role::Customer.label()}</option>
                            <option value="technician">{Role::Technician.label()}</option>
                        </select>
                    </div>

                    <button type="submit" class="btn-primary" disabled=move || is_loading.get()>
                        {move || if is_loading.get() { "Creating account..." } else { "Register" }}
                    </button>
                </form>

                <div class="login-info">
                    <span>"Already registered? "</span>
                    <a href="#" on:click=move |ev| {
                        ev.prevent_default();
                        on_login.run(());
                    }>"Sign in"</a>
                </div>
            </div>
        </div>
    }
}
