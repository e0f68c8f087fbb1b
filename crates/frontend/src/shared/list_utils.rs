//! Client-side search over an in-memory collection.

use crate::shared::icons::icon;
use leptos::prelude::*;

/// Records that can be matched against the search box
pub trait Searchable {
    /// Text fields the search term is matched against
    fn search_fields(&self) -> Vec<&str>;

    /// Case-insensitive substring match on any search field.
    /// `filter_lower` must already be lowercased.
    fn matches_filter(&self, filter_lower: &str) -> bool {
        self.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(filter_lower))
    }
}

/// Keeps the records whose search fields contain `filter`, ignoring case.
/// An empty filter keeps everything. Order is preserved.
pub fn filter_list<'a, T: Searchable>(items: &'a [T], filter: &str) -> Vec<&'a T> {
    let filter_lower = filter.to_lowercase();
    if filter_lower.is_empty() {
        return items.iter().collect();
    }

    items
        .iter()
        .filter(|item| item.matches_filter(&filter_lower))
        .collect()
}

/// Search box with a clear button. Every keystroke is reported.
#[component]
pub fn SearchInput(
    /// Current filter value
    #[prop(into)]
    value: Signal<String>,
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Buscar...".to_string()
    } else {
        placeholder
    };
    let is_filter_active = move || !value.get().is_empty();

    view! {
        <div class="search-input" class:search-input--active=is_filter_active>
            <span class="search-input__icon">{icon("search")}</span>
            <input
                type="text"
                class="search-input__field"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
            <Show when=is_filter_active>
                <button
                    class="search-input__clear"
                    title="Limpiar"
                    on:click=move |_| on_change.run(String::new())
                >
                    {icon("x")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row {
        name: String,
        plan: &'static str,
    }

    impl Searchable for Row {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.name.as_str(), self.plan]
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "Acme Corp".into(), plan: "pro" },
            Row { name: "Globex".into(), plan: "free" },
            Row { name: "Initech".into(), plan: "pro" },
        ]
    }

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        let items = rows();
        let found: Vec<_> = filter_list(&items, "ACME").into_iter().cloned().collect();
        assert_eq!(found, vec![items[0].clone()]);

        let by_plan = filter_list(&items, "Pr");
        assert_eq!(by_plan.len(), 2);
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        let items = rows();
        assert_eq!(filter_list(&items, "").len(), 3);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let items = rows();
        for term in ["e", "GLO", "x", "zzz", ""] {
            let once: Vec<Row> = filter_list(&items, term).into_iter().cloned().collect();
            let twice: Vec<Row> = filter_list(&once, term).into_iter().cloned().collect();
            assert_eq!(once, twice, "term {term:?}");
        }
    }

    #[test]
    fn test_short_terms_are_not_ignored() {
        let items = rows();
        assert_eq!(filter_list(&items, "g").len(), 1);
    }
}
