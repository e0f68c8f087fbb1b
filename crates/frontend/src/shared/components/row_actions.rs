use crate::shared::icons::icon;
use leptos::prelude::*;

/// Edit and delete icon buttons of a table row
#[component]
pub fn RowActions(
    #[prop(into)] edit_label: String,
    #[prop(into)] delete_label: String,
    on_edit: Callback<()>,
    on_delete: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="table__actions">
            <button
                class="button button--icon"
                aria-label=edit_label
                on:click=move |_| on_edit.run(())
            >
                {icon("edit")}
            </button>
            <button
                class="button button--icon button--danger"
                aria-label=delete_label
                on:click=move |_| on_delete.run(())
            >
                {icon("trash")}
            </button>
        </div>
    }
}
