pub mod left;
mod logout;
pub mod menu;

use leptos::prelude::*;
use leptos_router::components::Outlet;

use crate::shared::notification::{NoticeHost, NoticeHostProps, NoticeSlot};
use crate::system::auth::RequireSession;
use left::{Navbar, Sidebar};

/// Notice slot of the shell (logout feedback)
#[derive(Clone, Copy)]
pub struct ShellNotices(pub RwSignal<NoticeSlot>);

/// Application shell for signed-in pages.
///
/// ```text
/// +---------+------------------------+
/// |         |  Navbar (narrow only)  |
/// | Sidebar +------------------------+
/// |         |        Content         |
/// +---------+------------------------+
/// ```
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let notices = RwSignal::new(NoticeSlot::default());
    provide_context(ShellNotices(notices));

    view! {
        <div class="app-layout">
            <Sidebar />
            <div class="app-body">
                <Navbar />
                <main class="app-main">
                    {children()}
                </main>
            </div>
            {NoticeHost(NoticeHostProps::builder().slot(notices).build())}
        </div>
    }
}

/// Parent route view: session check, then the shell around the matched page
#[component]
pub fn ProtectedLayout() -> impl IntoView {
    view! {
        <RequireSession>
            <Layout>
                <Outlet />
            </Layout>
        </RequireSession>
    }
}
