//! Page category constants.
//!
//! Every page declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"metrics--list"`)
//!   - `data-page-category` with one of the constants below

/// Entity list with search, table and pagination.
pub const PAGE_CAT_LIST: &str = "list";

/// Welcome card after login.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Single-record form for the signed-in user.
pub const PAGE_CAT_FORM: &str = "form";

/// Login / register screens rendered outside the layout.
pub const PAGE_CAT_AUTH: &str = "auth";

/// All known category values.
pub const ALL_CATEGORIES: &[&str] = &[
    PAGE_CAT_LIST,
    PAGE_CAT_DASHBOARD,
    PAGE_CAT_FORM,
    PAGE_CAT_AUTH,
];

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((entity, category)) => !entity.is_empty() && is_known_category(category),
        None => false,
    }
}

/// Return true if the category value is recognised.
pub fn is_known_category(cat: &str) -> bool {
    ALL_CATEGORIES.contains(&cat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_ids() {
        assert!(is_valid_page_id("metrics--list"));
        assert!(is_valid_page_id("login--auth"));
        assert!(!is_valid_page_id("metrics"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("metrics--detail"));
    }
}
