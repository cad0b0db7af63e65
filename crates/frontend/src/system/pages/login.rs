use contracts::system::auth::LoginRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::api_utils::ApiClient;
use crate::system::auth::{api, use_auth};

#[component]
pub fn LoginPage(on_register: Callback<()>) -> impl IntoView {
    let form = RwSignal::new(LoginRequest::default());
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
            match api::login(&client, &request).await {
                Ok(response) => {
                    set_is_loading.set(false);
                    // Switches the root view to the main layout.
                    auth.login(response.token, response.user);
                }
                Err(e) => {
                    set_error_message.set(Some(format!("Login failed: {}", e)));
                    set_is_loading.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"LiftCare"</h1>
                <h2>"Sign in"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            prop:value=move || form.get().email
                            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            prop:value=move || form.get().password
                            on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button type="submit" class="btn-primary" disabled=move || is_loading.get()>
                        {move || if is_loading.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>

                <div class="login-info">
                    <span>"No account yet? "</span>
                    <a href="#" on:click=move |ev| {
                        ev.prevent_default();
                        on_register.run(());
                    }>"Register"</a>
                </div>
            </div>
        </div>
    }
}
