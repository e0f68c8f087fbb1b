use contracts::enums::role::Capability;
use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;
use leptos_router::NavigateOptions;

use super::context::{use_session, SessionStatus};

/// Renders `children` only for a valid session, otherwise redirects to
/// `/login`. The session is re-checked on every route change.
#[component]
pub fn RequireSession(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let location = use_location();

    if session.status.get_untracked() == SessionStatus::Anonymous {
        session.status.set(SessionStatus::Checking);
    }

    Effect::new(move |_| {
        location.pathname.track();
        session.check();
    });

    let status = Memo::new(move |_| session.status.get());

    move || match status.get() {
        SessionStatus::Checking => view! {
            <div class="page-loading">"Verificando sesión..."</div>
        }
        .into_any(),
        SessionStatus::Anonymous => view! {
            <Redirect
                path="/login"
                options=NavigateOptions { replace: true, ..Default::default() }
            />
        }
        .into_any(),
        SessionStatus::Active => children().into_any(),
    }
}

/// Renders `children` only when the signed-in role has `capability`
#[component]
pub fn RequireCapability(capability: Capability, children: ChildrenFn) -> impl IntoView {
    let session = use_session();

    view! {
        <Show
            when=move || session.can(capability)
            fallback=|| view! {
                <div class="access-denied">"No tienes permiso para ver esta página."</div>
            }
        >
            {children()}
        </Show>
    }
}
