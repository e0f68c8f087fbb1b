use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use super::ShellNotices;
use crate::system::auth::{api, use_session};

/// Returns a handler that ends the session, reports the outcome in the
/// shell's notice slot and goes to `/login` after `redirect_ms`.
pub fn use_logout(redirect_ms: u32) -> impl Fn() + Clone + 'static {
    let navigate = use_navigate();
    let session = use_session();
    let ShellNotices(notices) = use_context::<ShellNotices>().expect("Layout not found");

    move || {
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::logout().await {
                Ok(()) => {
                    notices.try_update(|n| n.success("Sesión cerrada correctamente"));
                    TimeoutFuture::new(redirect_ms).await;
                    navigate("/login", Default::default());
                    session.clear();
                }
                Err(e) => {
                    notices.try_update(|n| n.error(e.user_message("Error al cerrar sesión")));
                }
            }
        });
    }
}
