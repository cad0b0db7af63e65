use leptos::prelude::*;

/// Labelled input bound to a string field of a form draft.
#[component]
pub fn Input(
    #[prop(optional, into)] label: MaybeProp<String>,
    #[prop(into)] value: Signal<String>,
    #[prop(optional)] on_input: Option<Callback<String>>,
    #[prop(optional, into)] placeholder: MaybeProp<String>,
    /// Input type: "text" (default), "number", "date", "email", etc.
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    #[prop(optional, into)] disabled: Signal<bool>,
    /// Derived fields are shown but not editable.
    #[prop(optional)]
    readonly: bool,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] id: MaybeProp<String>,
    /// `step` for number inputs
    #[prop(optional, into)]
    step: MaybeProp<String>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();
    let input_placeholder = move || placeholder.get().unwrap_or_default();
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=input_id>{l}</label>
            })}
            <input
                id=input_id
                class="form__input"
                type=input_t
                prop:value=move || value.get()
                placeholder=input_placeholder
                step=move || step.get()
                disabled=move || disabled.get()
                readonly=readonly
                required=required
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
        </div>
    }
}
