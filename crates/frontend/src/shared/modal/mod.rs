use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

pub const DEFAULT_CONFIRM_TITLE: &str = "Confirmar Eliminación";
pub const DEFAULT_CONFIRM_MESSAGE: &str = "¿Desea eliminar este dato? Esta acción es irreversible";

#[component]
pub fn Modal(
    /// Title of the modal
    #[prop(into)]
    title: String,
    /// Callback when modal should close
    on_close: Callback<()>,
    /// Modal content
    children: Children,
) -> impl IntoView {
    let keydown = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || keydown.remove());

    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal" role="dialog" aria-modal="true" on:click=stop_propagation>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <button
                        class="button button--icon modal__close"
                        aria-label="Cerrar"
                        on:click=move |_| on_close.run(())
                    >
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
            </div>
        </div>
    }
}

/// Title and message to show, falling back to the delete wording
fn confirm_text(title: Option<String>, message: Option<String>) -> (String, String) {
    (
        title.unwrap_or_else(|| DEFAULT_CONFIRM_TITLE.to_string()),
        message.unwrap_or_else(|| DEFAULT_CONFIRM_MESSAGE.to_string()),
    )
}

/// Yes/no dialog for destructive actions. Renders nothing while `open` is
/// false. It only reports the choice; the owner decides what happens.
#[component]
pub fn ConfirmModal(
    #[prop(into)] open: Signal<bool>,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] message: Option<String>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
    /// Disables both buttons while the confirmed action runs
    #[prop(optional, into)]
    busy: MaybeProp<bool>,
) -> impl IntoView {
    let (title, message) = confirm_text(title, message);
    let is_busy = move || busy.get().unwrap_or(false);
    let on_close = Callback::new(move |_| {
        if !busy.get_untracked().unwrap_or(false) {
            on_cancel.run(());
        }
    });

    view! {
        <Show when=move || open.get()>
            <Modal clone:message title=title.clone() on_close=on_close>
                <div class="confirm-modal">
                    <span class="confirm-modal__icon">{icon("alert-triangle")}</span>
                    <p class="confirm-modal__message">{message.clone()}</p>
                </div>
                <div class="modal-footer">
                    <button
                        class="button button--danger"
                        disabled=is_busy
                        on:click=move |_| on_confirm.run(())
                    >
                        "Eliminar"
                    </button>
                    <button
                        class="button button--secondary"
                        disabled=is_busy
                        on:click=move |_| on_cancel.run(())
                    >
                        "Cancelar"
                    </button>
                </div>
            </Modal>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirm_text_defaults() {
        let (title, message) = confirm_text(None, None);
        assert_eq!(title, "Confirmar Eliminación");
        assert_eq!(message, "¿Desea eliminar este dato? Esta acción es irreversible");
    }

    #[test]
    fn test_confirm_text_overrides() {
        let (title, message) = confirm_text(
            Some("Eliminar cuenta".into()),
            Some("¿Deseas eliminar tu cuenta? Esta acción es irreversible".into()),
        );
        assert_eq!(title, "Eliminar cuenta");
        assert!(message.starts_with("¿Deseas eliminar tu cuenta?"));
    }
}
