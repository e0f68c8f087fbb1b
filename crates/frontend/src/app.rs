use crate::routes::routes::AppRoutes;
use crate::system::auth::context::provide_session;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Session shared by the guard, the shell and the pages
    provide_session();

    view! {
        <AppRoutes />
    }
}
