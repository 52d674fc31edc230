//! Page category constants.
//!
//! Every routed page declares an HTML `id` of the form `{entity}--{category}`
//! (e.g. `"a003_feed_type--list"`) and a `data-page-category` from below, so a
//! DOM id leads straight to its `domain/` directory.

/// Paginated table with search and row actions.
pub const PAGE_CAT_LIST: &str = "list";

/// Landing and overview pages.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Login, placeholders and other shell pages.
pub const PAGE_CAT_SYSTEM: &str = "system";

pub const ALL_CATEGORIES: &[&str] = &[PAGE_CAT_LIST, PAGE_CAT_DASHBOARD, PAGE_CAT_SYSTEM];

/// `{entity}--{category}` with both halves non-empty.
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((entity, category)) => !entity.is_empty() && ALL_CATEGORIES.contains(&category),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_ids() {
        assert!(is_valid_page_id("a008_animal--list"));
        assert!(is_valid_page_id("dashboard--dashboard"));
        assert!(!is_valid_page_id("a008_animal"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("a008_animal--detail"));
    }
}
