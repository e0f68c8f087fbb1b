use crate::shared::list_controller::pagination::page_numbers;
use leptos::prelude::*;

/// One button per page (1-based), the current one highlighted.
/// Renders nothing when there are no pages.
#[component]
pub fn PaginationControls(
    /// Current page (1-based)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Callback when page changes
    on_page_change: Callback<usize>,
) -> impl IntoView {
    view! {
        <Show when=move || { total_pages.get() > 0 }>
            <nav class="pagination-controls" aria-label="Paginación">
                {move || {
                    page_numbers(total_pages.get())
                        .into_iter()
                        .map(|page| {
                            let is_active = move || current_page.get() == page;
                            view! {
                                <button
                                    class="pagination-btn"
                                    class:pagination-btn--active=is_active
                                    aria-current=move || is_active().then_some("page")
                                    on:click=move |_| on_page_change.run(page)
                                >
                                    {page.to_string()}
                                </button>
                            }
                        })
                        .collect_view()
                }}
            </nav>
        </Show>
    }
}
