//! Standard root wrapper for every page.
//!
//! ```text
//! use crate::shared::page_frame::PageFrame;
//! use crate::shared::page_standard::PAGE_CAT_LIST;
//!
//! view! {
//!     <PageFrame page_id="metrics--list" category=PAGE_CAT_LIST title="Métricas">
//!         <div class="page__content">...</div>
//!     </PageFrame>
//! }
//! ```

use super::page_standard::*;
use leptos::prelude::*;

/// Root wrapper that sets `id`, `data-page-category` and the BEM modifier
/// class for the category.
#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants from `page_standard`.
    category: &'static str,
    /// Heading rendered in `page__header`
    #[prop(optional)]
    title: &'static str,
    children: Children,
) -> impl IntoView {
    debug_assert!(is_valid_page_id(page_id), "bad page id {page_id}");

    let class = match category {
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        PAGE_CAT_FORM => "page page--form",
        PAGE_CAT_AUTH => "page page--auth",
        _ => "page",
    };

    view! {
        <div id=page_id class=class data-page-category=category>
            {(!title.is_empty()).then(|| view! {
                <div class="page__header">
                    <h1 class="page__title">{title}</h1>
                </div>
            })}
            {children()}
        </div>
    }
}
