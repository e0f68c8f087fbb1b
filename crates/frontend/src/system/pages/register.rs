use std::time::Duration;

use contracts::system::auth::RegisterRequest;
use gloo_timers::future::TimeoutFuture;
use leptos::leptos_dom::helpers::{set_timeout_with_handle, TimeoutHandle};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use super::AUTH_REDIRECT_MS;
use crate::shared::components::ui::{Button, Input, PasswordInput};
use crate::shared::notification::{NoticeHost, NoticeHostProps, NoticeSlot};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_AUTH;
use crate::system::auth::api;

/// Accounts on this domain are platform admins and belong to no tenant
const ADMIN_EMAIL_DOMAIN: &str = "@saas.io";

/// How long the company field stays visible after an admin email is typed
const ADMIN_FIELD_HIDE_MS: u64 = 2000;

const ADMIN_TOOLTIP: &str = "Como admin, no necesitas asociar una empresa";
const TENANT_TOOLTIP: &str = "Este será el espacio donde se guardarán tus métricas y datos.";

pub fn is_admin_email(email: &str) -> bool {
    email.to_lowercase().ends_with(ADMIN_EMAIL_DOMAIN)
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let tenant_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_tooltip = RwSignal::new(false);
    let show_tenant_field = RwSignal::new(true);
    let notices = RwSignal::new(NoticeSlot::default());
    let navigate = use_navigate();

    let is_admin = Memo::new(move |_| email.with(|e| is_admin_email(e)));
    let hide_timer: StoredValue<Option<TimeoutHandle>> = StoredValue::new(None);

    let clear_hide_timer = move || {
        if let Some(handle) = hide_timer.try_get_value().flatten() {
            handle.clear();
        }
    };

    Effect::new(move |_| {
        clear_hide_timer();
        show_tenant_field.set(true);
        if !is_admin.get() {
            return;
        }

        show_tooltip.set(true);
        let hide = move || {
            show_tenant_field.try_set(false);
        };
        match set_timeout_with_handle(hide, Duration::from_millis(ADMIN_FIELD_HIDE_MS)) {
            Ok(handle) => hide_timer.set_value(Some(handle)),
            Err(e) => log::warn!("company field timer was not armed: {:?}", e),
        }
    });

    on_cleanup(clear_hide_timer);

    let update_tooltip = move |visible: bool| {
        if !is_admin.get_untracked() {
            show_tooltip.set(visible && tenant_name.with_untracked(|t| t.is_empty()));
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        notices.update(|n| n.clear());

        let request = RegisterRequest {
            name: name.get_untracked(),
            tenant_name: tenant_name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        let navigate = navigate.clone();

        spawn_local(async move {
            match api::register(&request).await {
                Ok(()) => {
                    notices.try_update(|n| n.success("Registro exitoso"));
                    TimeoutFuture::new(AUTH_REDIRECT_MS).await;
                    navigate("/login", Default::default());
                }
                Err(e) => {
                    notices.try_update(|n| n.error(e.user_message("Error desconocido")));
                }
            }
        });
    };

    view! {
        <PageFrame page_id="register--auth" category=PAGE_CAT_AUTH>
            <form class="auth-form" on:submit=on_submit>
                <h1 class="auth-form__title">"Crear cuenta"</h1>

                <Input
                    id="name"
                    label="Nombre"
                    placeholder="Ingresa tu nombre"
                    leading_icon="user"
                    value=name
                    on_input=Callback::new(move |v| name.set(v))
                    required=true
                />

                <Show when=move || show_tenant_field.get()>
                    <div
                        class="tooltip-anchor"
                        on:mouseenter=move |_| update_tooltip(true)
                        on:mouseleave=move |_| update_tooltip(false)
                        on:focusin=move |_| update_tooltip(true)
                        on:focusout=move |_| update_tooltip(false)
                    >
                        <Input
                            id="tenantName"
                            label="Empresa"
                            placeholder=Signal::derive(move || {
                                if is_admin.get() {
                                    "No necesitas empresa si eres admin".to_string()
                                } else {
                                    "Ingresa tu startup o empresa".to_string()
                                }
                            })
                            leading_icon="building"
                            value=tenant_name
                            on_input=Callback::new(move |v: String| {
                                if !is_admin.get_untracked() {
                                    show_tooltip.set(v.is_empty());
                                }
                                tenant_name.set(v);
                            })
                            required=Signal::derive(move || !is_admin.get())
                            disabled=Signal::derive(move || is_admin.get())
                        />
                        <Show when=move || show_tooltip.get()>
                            <div class="tooltip" role="tooltip">
                                {move || if is_admin.get() { ADMIN_TOOLTIP } else { TENANT_TOOLTIP }}
                            </div>
                        </Show>
                    </div>
                </Show>

                <Input
                    id="email"
                    label="Correo electrónico"
                    input_type="email"
                    placeholder="Ingresa tu correo"
                    leading_icon="mail"
                    value=email
                    on_input=Callback::new(move |v| email.set(v))
                    required=true
                />
                <PasswordInput
                    id="password"
                    label="Contraseña"
                    placeholder="Ingresa tu contraseña"
                    value=password
                    on_input=Callback::new(move |v| password.set(v))
                    required=true
                />

                <Button button_type="submit" class="auth-form__submit">
                    "Registrarse"
                </Button>

                <p class="auth-form__redirect">
                    "¿Ya tienes cuenta? "
                    <A href="/login">"Inicia sesión"</A>
                </p>
            </form>

            {NoticeHost(NoticeHostProps::builder().slot(notices).build())}
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_email_domain() {
        assert!(is_admin_email("root@saas.io"));
        assert!(is_admin_email("Root@SaaS.IO"));
        assert!(!is_admin_email("ana@acme.com"));
        assert!(!is_admin_email("saas.io@acme.com"));
        assert!(!is_admin_email(""));
    }
}
