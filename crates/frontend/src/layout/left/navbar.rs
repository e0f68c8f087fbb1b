use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;
use wasm_bindgen::JsCast;

use crate::layout::logout::use_logout;
use crate::layout::menu::{is_active, visible_items, BRAND, HOME_PATH};
use crate::shared::icons::icon;
use crate::system::auth::use_session;

const LOGOUT_REDIRECT_MS: u32 = 1000;

/// Top bar with a collapsible menu for narrow screens
#[component]
pub fn Navbar() -> impl IntoView {
    let session = use_session();
    let location = use_location();
    let logout = use_logout(LOGOUT_REDIRECT_MS);
    let menu_open = RwSignal::new(false);
    let menu_ref = NodeRef::<html::Div>::new();
    let toggle_ref = NodeRef::<html::Button>::new();

    let items = Memo::new(move |_| visible_items(session.role()));

    // Close on a press outside both the menu and its toggle
    let mousedown = window_event_listener(ev::mousedown, move |event| {
        if !menu_open.get_untracked() {
            return;
        }
        let Some(target) = event.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok()) else {
            return;
        };
        let inside_menu = menu_ref
            .get_untracked()
            .is_some_and(|menu| menu.contains(Some(&target)));
        let inside_toggle = toggle_ref
            .get_untracked()
            .is_some_and(|toggle| toggle.contains(Some(&target)));
        if !inside_menu && !inside_toggle {
            menu_open.set(false);
        }
    });
    on_cleanup(move || mousedown.remove());

    view! {
        <header class="navbar">
            <A href=HOME_PATH attr:class="navbar__brand">{BRAND}</A>
            <button
                node_ref=toggle_ref
                class="navbar__toggle"
                class:navbar__toggle--open=move || menu_open.get()
                aria-label="Menú"
                aria-expanded=move || menu_open.get().to_string()
                on:click=move |_| menu_open.update(|open| *open = !*open)
            >
                {icon("menu")}
            </button>
            <div
                node_ref=menu_ref
                class="navbar__menu"
                class:navbar__menu--open=move || menu_open.get()
            >
                {move || {
                    items
                        .get()
                        .into_iter()
                        .map(|item| {
                            let active = move || location.pathname.with(|p| is_active(p, item.href));
                            view! {
                                <A href=item.href attr:class="navbar__link" on:click=move |_| menu_open.set(false)>
                                    <span class="navbar__item" class:navbar__item--active=active>
                                        {icon(item.icon)}
                                        {item.label}
                                    </span>
                                </A>
                            }
                        })
                        .collect_view()
                }}
                <button class="navbar__item navbar__logout" on:click=move |_| logout()>
                    {icon("log-out")}
                    "Cerrar Sesión"
                </button>
            </div>
        </header>
    }
}
