mod state;

pub use state::UserForm;

use contracts::enums::role::{Capability, Role};
use contracts::system::users::User;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use thaw::{
    Badge, BadgeAppearance, BadgeColor, Table, TableBody, TableCell, TableCellLayout, TableHeader,
    TableHeaderCell, TableRow,
};

use crate::shared::components::ui::{Button, Input, Select};
use crate::shared::components::{PaginationControls, RowActions};
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::list_controller::ListController;
use crate::shared::list_utils::SearchInput;
use crate::shared::modal::ConfirmModal;
use crate::shared::notification::NoticeView;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::system::auth::RequireCapability;

const ROLE_OPTIONS: [(&str, &str); 3] = [
    ("admin", "Admin"),
    ("analyst", "Analyst"),
    ("viewer", "Viewer"),
];

fn role_badge_color(role: Role) -> BadgeColor {
    match role {
        Role::Admin => BadgeColor::Warning,
        Role::Analyst => BadgeColor::Informative,
        Role::Viewer => BadgeColor::Subtle,
    }
}

#[component]
pub fn UsersListPage() -> impl IntoView {
    view! {
        <RequireCapability capability=Capability::ManageUsers>
            <UsersList />
        </RequireCapability>
    }
}

#[component]
fn UsersList() -> impl IntoView {
    let controller = ListController::<User>::new();
    let state = controller.state();

    let form = Memo::new(move |_| state.with(|s| s.form.clone()));
    let is_editing = Memo::new(move |_| state.with(|s| s.is_editing()));
    let rows = Memo::new(move |_| state.with(|s| s.visible()));
    let notice = Memo::new(move |_| state.with(|s| s.notice().cloned()));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        controller.submit();
    };

    let user_row = move |user: User| {
        let name = user.name.clone();
        let email = user.email.clone();
        let role = user.role;
        let created = format_date(&user.created_at);
        let edit_label = format!("Editar {}", user.name);
        let delete_label = format!("Eliminar {}", user.name);
        let id = user.id.clone();
        view! {
            <TableRow>
                <TableCell>
                    <TableCellLayout truncate=true>{name}</TableCellLayout>
                </TableCell>
                <TableCell>
                    <TableCellLayout truncate=true>{email}</TableCellLayout>
                </TableCell>
                <TableCell>
                    <TableCellLayout>
                        <Badge appearance=BadgeAppearance::Tint color=role_badge_color(role)>
                            {role.code()}
                        </Badge>
                    </TableCellLayout>
                </TableCell>
                <TableCell>
                    <TableCellLayout>{created}</TableCellLayout>
                </TableCell>
                <TableCell>
                    <RowActions
                        edit_label=edit_label
                        delete_label=delete_label
                        on_edit=Callback::new(move |_| controller.begin_edit(user.clone()))
                        on_delete=Callback::new(move |_| {
                            if let Some(id) = id.clone() {
                                controller.request_delete(id);
                            }
                        })
                    />
                </TableCell>
            </TableRow>
        }
    };

    view! {
        <PageFrame page_id="users--list" category=PAGE_CAT_LIST title="Usuarios">
            <div class="page__content">
                <Show when=move || is_editing.get()>
                    <form class="entity-form" on:submit=on_submit>
                        <div class="form__row">
                            <Input
                                id="user-name"
                                label="Nombre"
                                placeholder="Nombre del usuario"
                                value=Signal::derive(move || form.with(|f| f.name.clone()))
                                on_input=Callback::new(move |v| controller.update_form(|f| f.name = v))
                                required=true
                            />
                            <Input
                                id="user-email"
                                label="Email"
                                input_type="email"
                                placeholder="Email del usuario"
                                value=Signal::derive(move || form.with(|f| f.email.clone()))
                                on_input=Callback::new(move |v| controller.update_form(|f| f.email = v))
                                required=true
                            />
                            <Select
                                id="user-role"
                                label="Rol"
                                value=Signal::derive(move || form.with(|f| f.role.code().to_string()))
                                on_change=Callback::new(move |code: String| {
                                    let role = Role::from_code(&code).unwrap_or_default();
                                    controller.update_form(|f| f.role = role);
                                })
                                options=ROLE_OPTIONS.to_vec()
                            />
                        </div>
                        <div class="form__actions">
                            <Button
                                button_type="submit"
                                disabled=Signal::derive(move || state.with(|s| s.is_busy()))
                            >
                                {icon("user-edit")}
                                " Actualizar Usuario"
                            </Button>
                            <Button
                                variant="secondary"
                                on_click=Callback::new(move |_| controller.cancel_edit())
                            >
                                {icon("x")}
                                " Cancelar"
                            </Button>
                        </div>
                    </form>
                </Show>

                <SearchInput
                    value=Signal::derive(move || state.with(|s| s.filter_term().to_string()))
                    on_change=Callback::new(move |term| controller.set_filter_term(term))
                    placeholder="Buscar usuarios..."
                />

                <div class="table-wrapper">
                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Nombre"</TableHeaderCell>
                                <TableHeaderCell>"Email"</TableHeaderCell>
                                <TableHeaderCell>"Rol"</TableHeaderCell>
                                <TableHeaderCell>"Creado"</TableHeaderCell>
                                <TableHeaderCell>"Acciones"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || rows.get().into_iter().map(user_row).collect_view()}
                        </TableBody>
                    </Table>
                </div>

                <PaginationControls
                    current_page=Signal::derive(move || state.with(|s| s.current_page()))
                    total_pages=Signal::derive(move || state.with(|s| s.total_pages()))
                    on_page_change=Callback::new(move |page| controller.set_page(page))
                />
            </div>

            <NoticeView
                notice=notice
                on_dismiss=Callback::new(move |seq| controller.dismiss_notice(seq))
            />
            <ConfirmModal
                open=Signal::derive(move || state.with(|s| s.is_modal_open()))
                busy=Signal::derive(move || state.with(|s| s.is_busy()))
                on_confirm=Callback::new(move |_| controller.confirm_delete())
                on_cancel=Callback::new(move |_| controller.cancel_delete())
            />
        </PageFrame>
    }
}
