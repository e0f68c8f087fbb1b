use contracts::system::users::ProfileUpdateRequest;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::shared::components::ui::{Button, Input, PasswordInput};
use crate::shared::icons::icon;
use crate::shared::modal::ConfirmModal;
use crate::shared::notification::{NoticeHost, NoticeHostProps, NoticeSlot};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_FORM;
use crate::system::auth::{api as auth_api, use_session, SessionContext};
use crate::system::users::api;

/// Delay before leaving the page once the session has been ended
const SIGN_OUT_REDIRECT_MS: u32 = 2000;

const DELETE_ACCOUNT_MESSAGE: &str = "¿Deseas eliminar tu cuenta? Esta acción es irreversible";

/// Logs out, tells the user why, and replaces the page with `/login`
async fn end_session(
    session: SessionContext,
    notices: RwSignal<NoticeSlot>,
    message: &'static str,
    navigate: impl Fn(&str, NavigateOptions),
) {
    if let Err(e) = auth_api::logout().await {
        log::warn!("logout failed: {}", e);
    }
    notices.try_update(|n| n.success(message));
    TimeoutFuture::new(SIGN_OUT_REDIRECT_MS).await;
    navigate(
        "/login",
        NavigateOptions {
            replace: true,
            ..Default::default()
        },
    );
    session.clear();
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let (initial_name, initial_email) = session.profile.with_untracked(|p| {
        p.as_ref()
            .map(|p| (p.name.clone(), p.email.clone()))
            .unwrap_or_default()
    });
    let name = RwSignal::new(initial_name);
    let email = RwSignal::new(initial_email);
    let password = RwSignal::new(String::new());
    let notices = RwSignal::new(NoticeSlot::default());
    let confirm_open = RwSignal::new(false);

    let profile_id = move || session.profile.with_untracked(|p| p.as_ref().map(|p| p.id.clone()));

    let on_submit = {
        let navigate = navigate.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let Some(id) = profile_id() else {
                return;
            };

            let request = ProfileUpdateRequest {
                name: name.get_untracked(),
                email: email.get_untracked(),
                password: password.get_untracked(),
            };
            let is_password_change = !request.password.trim().is_empty();
            let navigate = navigate.clone();

            spawn_local(async move {
                match api::update_profile(&id, &request).await {
                    Ok(response) => {
                        password.try_set(String::new());
                        if is_password_change {
                            end_session(
                                session,
                                notices,
                                "Contraseña actualizada. Vuelve a iniciar sesión.",
                                navigate,
                            )
                            .await;
                        } else {
                            notices.try_update(|n| n.success("Perfil actualizado correctamente"));
                            session.set_profile(response.updated_user);
                        }
                    }
                    Err(e) => {
                        notices.try_update(|n| n.error(e.user_message("Error al actualizar perfil")));
                    }
                }
            });
        }
    };

    let confirm_delete = {
        let navigate = navigate.clone();
        move || {
            let Some(id) = profile_id() else {
                confirm_open.set(false);
                return;
            };
            let navigate = navigate.clone();

            spawn_local(async move {
                let result = api::delete_account(&id).await;
                confirm_open.try_set(false);
                match result {
                    Ok(()) => {
                        end_session(session, notices, "Tu cuenta ha sido eliminada. Hasta pronto", navigate)
                            .await;
                    }
                    Err(e) => {
                        log::warn!("account deletion failed: {}", e);
                        notices.try_update(|n| n.error("Error al eliminar cuenta"));
                    }
                }
            });
        }
    };
    let confirm_delete = StoredValue::new_local(confirm_delete);

    view! {
        <PageFrame page_id="profile--form" category=PAGE_CAT_FORM title="Perfil de Usuario">
            <form class="profile-form" aria-label="profile-form" on:submit=on_submit>
                <div class="profile-form__field">
                    <Input
                        id="profile-name"
                        label="Nombre"
                        placeholder="Tu nombre completo"
                        leading_icon="user"
                        value=name
                        on_input=Callback::new(move |v| name.set(v))
                        required=true
                    />
                    <p class="profile-form__hint">"Nombre que se mostrará en el sistema."</p>
                </div>
                <div class="profile-form__field">
                    <Input
                        id="profile-email"
                        label="Email"
                        input_type="email"
                        placeholder="Tu correo electrónico"
                        leading_icon="mail"
                        value=email
                        on_input=Callback::new(move |v| email.set(v))
                        required=true
                    />
                    <p class="profile-form__hint">"Correo electrónico registrado en el sistema."</p>
                </div>
                <div class="profile-form__field">
                    <PasswordInput
                        id="profile-password"
                        label="Contraseña"
                        placeholder="Nueva contraseña"
                        value=password
                        on_input=Callback::new(move |v| password.set(v))
                    />
                    <p class="profile-form__hint">"Recuerda crear una contraseña segura."</p>
                </div>
                <div class="profile-form__field">
                    <h3>
                        "Rol: "
                        {move || session.role().map(|r| r.display_name()).unwrap_or_default()}
                    </h3>
                    <p class="profile-form__hint">
                        "Rol asignado por el sistema. " <strong class="text--danger">"NO"</strong>
                        " es editable."
                    </p>
                </div>

                <div class="form__actions">
                    <Button button_type="submit">
                        {icon("user-edit")}
                        " Actualizar Perfil"
                    </Button>
                    <Button variant="danger" on_click=Callback::new(move |_| confirm_open.set(true))>
                        {icon("user-x")}
                        " Eliminar Cuenta"
                    </Button>
                </div>
            </form>

            {NoticeHost(NoticeHostProps::builder().slot(notices).build())}
            <ConfirmModal
                open=confirm_open
                message=DELETE_ACCOUNT_MESSAGE
                on_confirm=Callback::new(move |_| confirm_delete.with_value(|f| f()))
                on_cancel=Callback::new(move |_| confirm_open.set(false))
            />
        </PageFrame>
    }
}
