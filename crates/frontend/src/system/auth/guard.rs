use contracts::system::navigation::can_open;
use leptos::prelude::*;

use super::context::use_auth;

/// Renders `children` only when the signed-in role may open `key`.
#[component]
pub fn RequireAccess(key: String, children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let key = StoredValue::new(key);

    let allowed = move || {
        auth.role()
            .is_some_and(|role| key.with_value(|k| can_open(k, role, auth.technician_approved())))
    };

    view! {
        <Show
            when=allowed
            fallback=|| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__text">"You do not have access to this page."</span>
                </div>
            }
        >
            {children()}
        </Show>
    }
}
