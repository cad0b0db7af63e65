use leptos::prelude::*;

use crate::shared::page_frame::{PageFrame, PageHeader};
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::system::auth::use_auth;

#[component]
pub fn AccountPage() -> impl IntoView {
    let auth = use_auth();

    view! {
        <PageFrame page_id="account--system" category=PAGE_CAT_SYSTEM>
            <PageHeader title="Account" />
            <div class="page__content">
                {move || match auth.user() {
                    Some(user) => view! {
                        <dl class="details-list">
                            <dt>"Name"</dt>
                            <dd>{user.name}</dd>
                            <dt>"Email"</dt>
                            <dd>{user.email}</dd>
                            <dt>"Role"</dt>
                            <dd>{user.role.label()}</dd>
                            {user.customer_id.map(|id| view! {
                                <dt>"Customer"</dt>
                                <dd>{format!("#{}", id)}</dd>
                            })}
                        </dl>
                    }.into_any(),
                    None => view! { <p>"Not signed in."</p> }.into_any(),
                }}
            </div>
        </PageFrame>
    }
}
