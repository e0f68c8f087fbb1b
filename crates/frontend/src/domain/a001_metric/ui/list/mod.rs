mod state;

pub use state::MetricForm;

use contracts::domain::a001_metric::aggregate::Metric;
use contracts::enums::role::Capability;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use thaw::{Table, TableBody, TableCell, TableCellLayout, TableHeader, TableHeaderCell, TableRow};

use crate::shared::components::ui::{Button, Input};
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

#[component]
pub fn MetricsPage() -> impl IntoView {
    let session = use_session();
    let controller = ListController::<Metric>::new();
    let state = controller.state();

    let can_edit = Memo::new(move |_| session.can(Capability::EditMetrics));
    let form = Memo::new(move |_| state.with(|s| s.form.clone()));
    let is_editing = Memo::new(move |_| state.with(|s| s.is_editing()));
    let rows = Memo::new(move |_| state.with(|s| s.visible()));
    let notice = Memo::new(move |_| state.with(|s| s.notice().cloned()));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        controller.submit();
    };

    let metric_row = move |metric: Metric| {
        let name = metric.name.clone();
        let value = metric.value.to_string();
        let date = format_date(&metric.date);
        let edit_label = format!("Editar {}", metric.name);
        let delete_label = format!("Eliminar {}", metric.name);
        let id = metric.id.clone();
        view! {
            <TableRow>
                <TableCell>
                    <TableCellLayout truncate=true>{name}</TableCellLayout>
                </TableCell>
                <TableCell>
                    <TableCellLayout>{value}</TableCellLayout>
                </TableCell>
                <TableCell>
                    <TableCellLayout>{date}</TableCellLayout>
                </TableCell>
                <Show clone:edit_label clone:delete_label clone:metric clone:id when=move || can_edit.get()>
                    <TableCell clone:edit_label clone:delete_label clone:metric clone:id>
                        <RowActions
                            edit_label=edit_label.clone()
                            delete_label=delete_label.clone()
                            on_edit=Callback::new({
                                let record = metric.clone();
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
        <PageFrame page_id="metrics--list" category=PAGE_CAT_LIST title="Métricas">
            <div class="page__content">
                <form class="entity-form" aria-label="metrics-form" on:submit=on_submit>
                    <div class="form__row">
                        <Input
                            id="metric-name"
                            label="Nombre"
                            placeholder="Nombre de la métrica"
                            value=Signal::derive(move || form.with(|f| f.name.clone()))
                            on_input=Callback::new(move |v| controller.update_form(|f| f.name = v))
                            required=true
                        />
                        <Input
                            id="metric-value"
                            label="Valor"
                            input_type="number"
                            placeholder="Valor de la métrica"
                            min="0"
                            step="0.01"
                            value=Signal::derive(move || form.with(|f| f.value.clone()))
                            on_input=Callback::new(move |v| controller.update_form(|f| f.value = v))
                            required=true
                        />
                        <Input
                            id="metric-date"
                            label="Fecha"
                            input_type="date"
                            value=Signal::derive(move || form.with(|f| f.date.clone()))
                            on_input=Callback::new(move |v| controller.update_form(|f| f.date = v))
                            required=true
                        />
                    </div>
                    <div class="form__actions">
                        <Button
                            button_type="submit"
                            disabled=Signal::derive(move || state.with(|s| s.is_busy()))
                        >
                            {icon("chart-line")}
                            {move || if is_editing.get() { " Actualizar Métrica" } else { " Crear Métrica" }}
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

                <SearchInput
                    value=Signal::derive(move || state.with(|s| s.filter_term().to_string()))
                    on_change=Callback::new(move |term| controller.set_filter_term(term))
                    placeholder="Buscar métricas..."
                />

                <div class="table-wrapper">
                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Nombre"</TableHeaderCell>
                                <TableHeaderCell>"Valor"</TableHeaderCell>
                                <TableHeaderCell>"Fecha"</TableHeaderCell>
                                <Show when=move || can_edit.get()>
                                    <TableHeaderCell>"Acciones"</TableHeaderCell>
                                </Show>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || rows.get().into_iter().map(metric_row).collect_view()}
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
