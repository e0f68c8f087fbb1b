use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::layout::logout::use_logout;
use crate::layout::menu::{is_active, visible_items, BRAND, HOME_PATH};
use crate::shared::icons::icon;
use crate::system::auth::use_session;

const LOGOUT_REDIRECT_MS: u32 = 3000;

#[component]
pub fn Sidebar() -> impl IntoView {
    let session = use_session();
    let location = use_location();
    let logout = use_logout(LOGOUT_REDIRECT_MS);

    let items = Memo::new(move |_| visible_items(session.role()));

    view! {
        <aside class="sidebar">
            <A href=HOME_PATH attr:class="sidebar__brand">{BRAND}</A>
            <nav class="sidebar__nav">
                {move || {
                    items
                        .get()
                        .into_iter()
                        .map(|item| {
                            let active = move || location.pathname.with(|p| is_active(p, item.href));
                            view! {
                                <A href=item.href attr:class="sidebar__link">
                                    <span class="sidebar__item" class:sidebar__item--active=active>
                                        {icon(item.icon)}
                                        <span>{item.label}</span>
                                    </span>
                                </A>
                            }
                        })
                        .collect_view()
                }}
                <button class="sidebar__item sidebar__logout" on:click=move |_| logout()>
                    {icon("log-out")}
                    <span>"Cerrar Sesión"</span>
                </button>
            </nav>
        </aside>
    }
}
