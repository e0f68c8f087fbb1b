use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use super::AUTH_REDIRECT_MS;
use crate::shared::components::ui::{Button, Input, PasswordInput};
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use crate::shared::notification::{NoticeHost, NoticeHostProps, NoticeKind, NoticeSlot};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_AUTH;
use crate::system::auth::api;

#[component]
pub fn LoginPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let notices = RwSignal::new(NoticeSlot::default());
    let show_reset = RwSignal::new(false);
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        notices.update(|n| n.clear());

        let email_val = email.get_untracked();
        let password_val = password.get_untracked();
        let navigate = navigate.clone();

        spawn_local(async move {
            match api::login(email_val, password_val).await {
                Ok(()) => {
                    notices.try_update(|n| n.success("Inicio de sesión exitoso"));
                    TimeoutFuture::new(AUTH_REDIRECT_MS).await;
                    navigate("/dashboard", Default::default());
                }
                Err(e) => {
                    notices.try_update(|n| n.error(e.user_message("Error desconocido")));
                }
            }
        });
    };

    view! {
        <PageFrame page_id="login--auth" category=PAGE_CAT_AUTH>
            <form class="auth-form" aria-label="login-form" on:submit=on_submit>
                <h1 class="auth-form__title">"Inicia sesión"</h1>

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
                    "Iniciar sesión"
                </Button>

                <p class="auth-form__redirect">
                    "¿No tienes cuenta? "
                    <A href="/register">"Regístrate"</A>
                </p>
                <p class="auth-form__redirect">
                    "¿Olvidaste tu contraseña? "
                    <span class="reset-link" on:click=move |_| show_reset.set(true)>
                        "Restablecer"
                    </span>
                </p>
            </form>

            {NoticeHost(NoticeHostProps::builder().slot(notices).build())}

            <Show when=move || show_reset.get()>
                <ResetPasswordDialog
                    notices=notices
                    on_close=Callback::new(move |_| show_reset.set(false))
                />
            </Show>
        </PageFrame>
    }
}

/// Asks the API to reset a password. The outcome is reported through the
/// login page's notices.
#[component]
fn ResetPasswordDialog(notices: RwSignal<NoticeSlot>, on_close: Callback<()>) -> impl IntoView {
    let reset_email = RwSignal::new(String::new());
    let sending = RwSignal::new(false);

    let send = move |_: leptos::ev::MouseEvent| {
        let email = reset_email.get_untracked();
        if email.is_empty() {
            notices.update(|n| {
                n.error("Ingresa tu correo");
            });
            return;
        }

        sending.set(true);
        spawn_local(async move {
            match api::reset_password(email).await {
                Ok(response) => {
                    match response.temp_password {
                        Some(temp) => notices.try_update(|n| {
                            n.persistent(
                                format!("Contraseña temporal generada: {}", temp),
                                NoticeKind::Success,
                            )
                        }),
                        None => notices.try_update(|n| {
                            n.success("Se ha enviado un correo de restablecimiento a tu email")
                        }),
                    };
                    reset_email.try_set(String::new());
                    on_close.run(());
                }
                Err(e) => {
                    log::warn!("password reset failed: {}", e);
                    notices.try_update(|n| n.error("Error al enviar correo, contacta al administrador"));
                }
            }
            sending.try_set(false);
        });
    };

    view! {
        <Modal title="Restablecer contraseña" on_close=on_close>
            <Input
                id="resetEmail"
                label="Correo electrónico"
                input_type="email"
                placeholder="Ingresa tu correo"
                leading_icon="mail"
                value=reset_email
                on_input=Callback::new(move |v| reset_email.set(v))
            />
            <div class="modal-footer">
                <Button variant="secondary" on_click=Callback::new(move |_| on_close.run(()))>
                    {icon("x")}
                    " Cancelar"
                </Button>
                <Button disabled=Signal::derive(move || sending.get()) on_click=Callback::new(send)>
                    {icon("send")}
                    {move || if sending.get() { " Enviando..." } else { " Enviar correo" }}
                </Button>
            </div>
        </Modal>
    }
}
