use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::domain::a001_metric::ui::list::MetricsPage;
use crate::domain::a002_tenant::ui::list::TenantsPage;
use crate::layout::menu::HOME_PATH;
use crate::layout::ProtectedLayout;
use crate::system::pages::dashboard::DashboardPage;
use crate::system::pages::login::LoginPage;
use crate::system::pages::profile::ProfilePage;
use crate::system::pages::register::RegisterPage;
use crate::system::users::ui::list::UsersListPage;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <Redirect path=HOME_PATH /> }>
                <Route path=path!("/login") view=LoginPage />
                <Route path=path!("/register") view=RegisterPage />
                <ParentRoute path=path!("") view=ProtectedLayout>
                    <Route path=path!("/dashboard") view=DashboardPage />
                    <Route path=path!("/metrics") view=MetricsPage />
                    <Route path=path!("/tenants") view=TenantsPage />
                    <Route path=path!("/users") view=UsersListPage />
                    <Route path=path!("/profile") view=ProfilePage />
                    <Route path=path!("") view=|| view! { <Redirect path=HOME_PATH /> } />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
