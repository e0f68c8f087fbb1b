mod state;

pub use state::TenantForm;

use contracts::domain::a002_tenant::aggregate::Tenant;
use contracts::enums::plan::Plan;
use contracts::enums::role::Capability;
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
use crate::system::auth::use_session;

const PLAN_OPTIONS: [(&str, &str); 2] = [("free", "Free"), ("pro", "Pro")];

fn plan_badge_color(plan: Plan) -> BadgeColor {
    match plan {
        Plan::Pro => BadgeColor::Success,
        Plan::Free => BadgeColor::Informative,
    }
}

#[component]
pub fn TenantsPage() -> impl IntoView {
    let session = use_session();
    let controller = ListController::<Tenant>::new();
    let state = controller.state();

    let can_manage = Memo::new(move |_| session.can(Capability::ManageTenants));
    let form = Memo::new(move |_| state.with(|s| s.form.clone()));
    let is_editing = Memo::new(move |_| state.with(|s| s.is_editing()));
    let rows = Memo::new(move |_| state.with(|s| s.visible()));
    let notice = Memo::new(move |_| state.with(|s| s.notice().cloned()));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        controller.submit();
    };

    let tenant_row = move |tenant: Tenant| {
        let name = tenant.name.clone();
        let plan = tenant.plan;
        let created = format_date(&tenant.created_at);
        let edit_label = format!("Editar {}", tenant.name);
        let delete_label = format!("Eliminar {}", tenant.name);
        let id = tenant.id.clone();
        view! {
            <TableRow>
                <TableCell>
                    <TableCellLayout truncate=true>{name}</TableCellLayout>
                </TableCell>
                <TableCell>
                    <TableCellLayout>
                        <Badge appearance=BadgeAppearance::Tint color=plan_badge_color(plan)>
                            {plan.code()}
                        </Badge>
                    </TableCellLayout>
                </TableCell>
                <TableCell>
                    <TableCellLayout>{created}</TableCellLayout>
                </TableCell>
                <Show clone:edit_label clone:delete_label clone:tenant clone:id when=move || can_manage.get()>
                    <TableCell clone:edit_label clone:delete_label clone:tenant clone:id>
                        <RowActions
                            edit_label=edit_label.clone()
                            delete_label=delete_label.clone()
                            on_edit=Callback::new({
                                let record = tenant.clone();
                                move |_| controller.begin_edit(record.clone())
                            })
                            on_delete=Callback::new({
                                let id = id.clone();
                                move |_| {
                                    if let Some(id) = id.clone() {
                                        controller.request_delete(id);
                                    }
                                }
                            })
                        />
                    </TableCell>
                </Show>
            </TableRow>
        }
    };

    view! {
        <PageFrame page_id="tenants--list" category=PAGE_CAT_LIST title="Empresas / Startups">
            <div class="page__content">
                <Show when=move || can_manage.get()>
                    <form class="entity-form" on:submit=on_submit>
                        <div class="form__row">
                            <Input
                                id="tenant-name"
                                label="Nombre"
                                placeholder="Nombre de la empresa / startup"
                                value=Signal::derive(move || form.with(|f| f.name.clone()))
                                on_input=Callback::new(move |v| controller.update_form(|f| f.name = v))
                                required=true
                            />
                            <Select
                                id="tenant-plan"
                                label="Plan"
                                value=Signal::derive(move || form.with(|f| f.plan.code().to_string()))
                                on_change=Callback::new(move |code: String| {
                                    let plan = Plan::from_code(&code).unwrap_or_default();
                                    controller.update_form(|f| f.plan = plan);
                                })
                                options=PLAN_OPTIONS.to_vec()
                            />
                        </div>
                        <div class="form__actions">
                            <Button
                                button_type="submit"
                                disabled=Signal::derive(move || state.with(|s| s.is_busy()))
                            >
                                {icon("building")}
                                {move || {
                                    if is_editing.get() {
                                        " Actualizar Empresa / Startup"
                                    } else {
                                        " Crear Empresa / Startup"
                                    }
                                }}
                            </Button>
                            <Show when=move || is_editing.get()>
                                <Button
                                    variant="secondary"
                                    on_click=Callback::new(move |_| controller.cancel_edit())
                                >
                                    {icon("x")}
                                    " Cancelar"
                                </Button>
                            </Show>
                        </div>
                    </form>
                </Show>

                <SearchInput
                    value=Signal::derive(move || state.with(|s| s.filter_term().to_string()))
                    on_change=Callback::new(move |term| controller.set_filter_term(term))
                    placeholder="Buscar empresa / startup..."
                />

                <div class="table-wrapper">
                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Nombre"</TableHeaderCell>
                                <TableHeaderCell>"Plan"</TableHeaderCell>
                                <TableHeaderCell>"Creado"</TableHeaderCell>
                                <Show when=move || can_manage.get()>
                                    <TableHeaderCell>"Acciones"</TableHeaderCell>
                                </Show>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || rows.get().into_iter().map(tenant_row).collect_view()}
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
