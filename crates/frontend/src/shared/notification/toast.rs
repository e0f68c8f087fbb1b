use std::time::Duration;

use leptos::leptos_dom::helpers::{set_timeout_with_handle, TimeoutHandle};
use leptos::prelude::*;

use super::{Notice, NoticeKind, NoticeSlot, ToastLifecycle, DEFAULT_DURATION_MS};
use crate::shared::icons::icon;

/// Toast with a message and an optional auto-dismiss timer.
///
/// A non-persistent toast hides itself after `duration_ms` and calls
/// `on_close` once. A persistent toast shows a close button instead.
/// The timer is cleared when the toast is closed or unmounted.
#[component]
pub fn Notification(
    #[prop(into)] message: String,
    kind: NoticeKind,
    /// Auto-dismiss delay, 3000 ms when omitted
    #[prop(optional)]
    duration_ms: Option<u32>,
    #[prop(optional)] persistent: bool,
    #[prop(optional)] on_close: Option<Callback<()>>,
) -> impl IntoView {
    let visible = RwSignal::new(true);
    let lifecycle: StoredValue<ToastLifecycle<TimeoutHandle>> =
        StoredValue::new(ToastLifecycle::default());

    let close = move || {
        let Some(timer) = lifecycle.try_update_value(|l| l.close()).flatten() else {
            return;
        };
        if let Some(handle) = timer {
            handle.clear();
        }
        visible.try_set(false);
        if let Some(on_close) = on_close {
            on_close.run(());
        }
    };

    if !persistent {
        let delay = Duration::from_millis(u64::from(duration_ms.unwrap_or(DEFAULT_DURATION_MS)));
        match set_timeout_with_handle(close, delay) {
            Ok(handle) => {
                if let Some(stale) = lifecycle.try_update_value(|l| l.arm(handle)).flatten() {
                    stale.clear();
                }
            }
            Err(e) => log::warn!("Notification timer was not armed: {:?}", e),
        }
    }

    on_cleanup(move || {
        if let Some(handle) = lifecycle.try_update_value(|l| l.teardown()).flatten() {
            handle.clear();
        }
    });

    let icon_name = match kind {
        NoticeKind::Success => "check-circle",
        NoticeKind::Error => "alert-circle",
    };

    view! {
        <Show when=move || visible.get()>
            <div
                class=format!("toast {}", kind.css_modifier())
                role="alert"
                aria-live="assertive"
                aria-atomic="true"
            >
                <span class="toast__icon">{icon(icon_name)}</span>
                <span class="toast__message">{message.clone()}</span>
                {persistent.then(|| view! {
                    <button class="toast__close" title="Cerrar" on:click=move |_| close()>
                        {icon("x")}
                    </button>
                })}
            </div>
        </Show>
    }
}

/// Renders the notice held in a [`super::NoticeSlot`].
///
/// `notice` should be a `Memo` so that unrelated state changes do not
/// remount the toast and restart its timer.
#[component]
pub fn NoticeView(
    #[prop(into)] notice: Signal<Option<Notice>>,
    /// Receives the sequence number of the notice being closed
    on_dismiss: Callback<u64>,
) -> impl IntoView {
    move || {
        notice.get().map(|n| {
            let seq = n.seq;
            view! {
                <Notification
                    message=n.message
                    kind=n.kind
                    duration_ms=n.duration_ms
                    persistent=n.persistent
                    on_close=Callback::new(move |_| on_dismiss.run(seq))
                />
            }
        })
    }
}

/// [`NoticeView`] over a page-owned [`NoticeSlot`]
#[component]
pub fn NoticeHost(slot: RwSignal<NoticeSlot>) -> impl IntoView {
    let notice = Memo::new(move |_| slot.with(|s| s.current().cloned()));

    view! {
        <NoticeView
            notice=notice
            on_dismiss=Callback::new(move |seq| {
                slot.try_update(|s| s.dismiss(seq));
            })
        />
    }
}
