use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

#[component]
pub fn Modal(
    #[prop(into)] title: Signal<String>,
    /// Called on Escape, overlay click and the close button
    on_close: Callback<()>,
    /// Optional action buttons (Save, Cancel, etc.) to display in header
    #[prop(optional)]
    action_buttons: Option<ChildrenFn>,
    children: Children,
) -> impl IntoView {
    let handle = window_event_listener(ev::keydown, move |event: ev::KeyboardEvent| {
        if event.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || handle.remove());

    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=stop_propagation>
                <div class="modal-header">
                    <h2 class="modal-title">{move || title.get()}</h2>
                    <div class="modal-header-actions">
                        {move || action_buttons.as_ref().map(|buttons| buttons())}
                        <button class="button button--icon modal__close" on:click=move |_| on_close.run(())>
                            {icon("x")}
                        </button>
                    </div>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
            </div>
        </div>
    }
}
