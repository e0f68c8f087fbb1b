use crate::shared::icons::icon;
use leptos::prelude::*;

/// Password field with a show/hide toggle
#[component]
pub fn PasswordInput(
    #[prop(into)] id: String,
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let visible = RwSignal::new(false);

    view! {
        <div class="form__group">
            <label class="form__label" for=id.clone()>{label}</label>
            <div class="form__input-wrapper">
                <span class="form__input-icon">{icon("lock")}</span>
                <input
                    id=id
                    class="form__input"
                    type=move || if visible.get() { "text" } else { "password" }
                    placeholder=placeholder
                    required=required
                    prop:value=move || value.get()
                    on:input=move |ev| on_input.run(event_target_value(&ev))
                />
                <button
                    type="button"
                    class="form__input-toggle"
                    aria-label=move || if visible.get() { "Ocultar contraseña" } else { "Mostrar contraseña" }
                    on:click=move |_| visible.update(|v| *v = !*v)
                >
                    {move || if visible.get() { icon("eye") } else { icon("eye-off") }}
                </button>
            </div>
        </div>
    }
}
