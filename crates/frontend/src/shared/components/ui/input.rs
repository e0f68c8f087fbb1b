use crate::shared::icons::icon;
use leptos::prelude::*;

/// Input component with label support
#[component]
pub fn Input(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Input type: "text" (default), "number", "date", "email", etc.
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    /// `min` attribute for numeric inputs
    #[prop(optional, into)]
    min: MaybeProp<String>,
    /// `step` attribute for numeric inputs
    #[prop(optional, into)]
    step: MaybeProp<String>,
    /// Disabled state (reactive)
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Required attribute (reactive)
    #[prop(optional, into)]
    required: MaybeProp<bool>,
    /// ID for the input element
    #[prop(optional, into)]
    id: MaybeProp<String>,
    /// Icon drawn inside the field, before the text
    #[prop(optional)]
    leading_icon: Option<&'static str>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();
    let input_placeholder = move || placeholder.get().unwrap_or_default();
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=input_id>
                    {l}
                </label>
            })}
            <div class="form__input-wrapper">
                {leading_icon.map(|name| view! { <span class="form__input-icon">{icon(name)}</span> })}
                <input
                    id=input_id
                    class="form__input"
                    type=input_t
                    prop:value=move || value.get()
                    placeholder=input_placeholder
                    min=move || min.get()
                    step=move || step.get()
                    disabled=move || disabled.get().unwrap_or(false)
                    required=move || required.get().unwrap_or(false)
                    on:input=move |ev| {
                        if let Some(handler) = on_input {
                            handler.run(event_target_value(&ev));
                        }
                    }
                />
            </div>
        </div>
    }
}
