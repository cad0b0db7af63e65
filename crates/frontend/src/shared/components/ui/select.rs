use leptos::prelude::*;

/// Select with label support. The empty value stands for "nothing selected".
#[component]
pub fn Select(
    #[prop(optional, into)] label: MaybeProp<String>,
    #[prop(into)] value: Signal<String>,
    #[prop(optional)] on_change: Option<Callback<String>>,
    /// Options: Vec of (value, label) tuples
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    /// Label of the leading empty option; omitted when `None`
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    #[prop(optional, into)] disabled: Signal<bool>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] id: MaybeProp<String>,
) -> impl IntoView {
    let select_id = move || id.get().unwrap_or_default();

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=select_id>{l}</label>
            })}
            <select
                id=select_id
                class="form__select"
                disabled=move || disabled.get()
                required=required
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_value(&ev));
                    }
                }
            >
                {move || placeholder.get().map(|p| view! {
                    <option value="" selected=move || value.get().is_empty()>{p}</option>
                })}
                <For
                    each=move || options.get()
                    key=|(val, label)| (val.clone(), label.clone())
                    children=move |(val, label)| {
                        let val_clone = val.clone();
                        let is_selected = move || value.get() == val_clone;
                        view! {
                            <option value=val selected=is_selected>{label}</option>
                        }
                    }
                />
            </select>
        </div>
    }
}

/// Options from `(id, label)` pairs.
pub fn options_of<T, I: ToString>(items: &[T], f: impl Fn(&T) -> (I, String)) -> Vec<(String, String)> {
    items
        .iter()
        .map(|item| {
            let (id, label) = f(item);
            (id.to_string(), label)
        })
        .collect()
}
