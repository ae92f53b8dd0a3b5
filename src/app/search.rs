//! Search and pagination over the catalog.
//!
//! [`SearchState`] holds the two inputs the user controls (query and page);
//! [`derive`] turns them plus the catalog into a [`PageView`]. Derivation is a
//! pure function with no access to the rest of the application state, so it
//! can be tested on its own.
//!
//! # Rules
//!
//! - A blank query (empty or whitespace only) keeps the whole catalog.
//! - Otherwise an app matches when its name contains the query, ignoring case.
//! - `total_pages = ceil(matches / page_size)`, zero when nothing matches.
//! - The window for page `p` is `matches[(p-1)*size .. p*size]`, clipped. Pages
//!   outside `1..=total_pages` give an empty window rather than an error.

use crate::domain::App;
use std::num::NonZeroUsize;

/// User-controlled search inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    query: String,
    page: usize,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            query: String::new(),
            page: 1,
        }
    }
}

impl SearchState {
    /// Stores `query` verbatim and goes back to the first page.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.page = 1;
    }

    /// Stores `page` as given. Callers keep it within `1..=total_pages`.
    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Current page, 1-based.
    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    /// Returns `true` if the query filters nothing out.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.query.trim().is_empty()
    }
}

/// Result of [`derive`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    /// Catalog entries matching the query, in catalog order.
    pub filtered: Vec<App>,
    /// Number of pages the filtered list spans.
    pub total_pages: usize,
    /// Entries shown on the requested page.
    pub window: Vec<App>,
}

/// Filters `catalog` by name and slices out `page`.
///
/// # Examples
///
/// ```
/// use std::num::NonZeroUsize;
/// use vitrine::app::search::derive;
/// use vitrine::domain::App;
///
/// let catalog = vec![
///     App::new("slack", "Slack", "#4A154B", "", ""),
///     App::new("trello", "Trello", "#0079BF", "", ""),
/// ];
/// let view = derive(&catalog, "sl", 1, NonZeroUsize::new(20).unwrap());
/// assert_eq!(view.filtered.len(), 1);
/// assert_eq!(view.filtered[0].name, "Slack");
/// assert_eq!(view.total_pages, 1);
/// ```
#[must_use]
pub fn derive(catalog: &[App], query: &str, page: usize, page_size: NonZeroUsize) -> PageView {
    let filtered = filter_by_name(catalog, query);
    let total_pages = total_pages(filtered.len(), page_size);
    let window = page_window(&filtered, page, page_size).to_vec();

    PageView {
        filtered,
        total_pages,
        window,
    }
}

/// Catalog entries whose name contains `query`, ignoring case.
///
/// A blank query returns the whole catalog.
#[must_use]
pub fn filter_by_name(catalog: &[App], query: &str) -> Vec<App> {
    if query.trim().is_empty() {
        return catalog.to_vec();
    }

    catalog
        .iter()
        .filter(|app| app.name_contains(query))
        .cloned()
        .collect()
}

/// Number of pages needed for `count` items.
#[must_use]
pub const fn total_pages(count: usize, page_size: NonZeroUsize) -> usize {
    count.div_ceil(page_size.get())
}

/// The slice of `items` shown on 1-based `page`.
///
/// Empty for page 0 and for pages past the end.
#[must_use]
pub fn page_window(items: &[App], page: usize, page_size: NonZeroUsize) -> &[App] {
    let size = page_size.get();
    let Some(start) = page.checked_sub(1).and_then(|p| p.checked_mul(size)) else {
        return &[];
    };
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(size).min(items.len());
    &items[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    fn app(id: &str, name: &str) -> App {
        App::new(id, name, "#000000", "", "")
    }

    fn numbered(count: usize) -> Vec<App> {
        (0..count).map(|i| app(&format!("app{i}"), &format!("App {i}"))).collect()
    }

    fn sample_catalog() -> Vec<App> {
        vec![
            app("slack", "Slack"),
            app("trello", "Trello"),
            app("gmail", "Gmail"),
            app("google-sheets", "Google Sheets"),
            app("hubspot", "HubSpot"),
            app("rd", "RD Station Marketing"),
        ]
    }

    #[test]
    fn query_sl_finds_slack_only() {
        let catalog = vec![app("slack", "Slack"), app("trello", "Trello")];
        let view = derive(&catalog, "sl", 1, size(20));

        assert_eq!(view.filtered, vec![app("slack", "Slack")]);
        assert_eq!(view.total_pages, 1);
        assert_eq!(view.window, view.filtered);
    }

    #[test]
    fn third_page_of_ten_holds_last_two() {
        let catalog = numbered(10);
        let view = derive(&catalog, "", 3, size(4));

        assert_eq!(view.total_pages, 3);
        assert_eq!(view.window, catalog[8..10].to_vec());
    }

    #[test]
    fn matching_ignores_case_on_both_sides() {
        let catalog = sample_catalog();
        let names: Vec<String> = filter_by_name(&catalog, "GOOGLE").into_iter().map(|a| a.name).collect();
        assert_eq!(names, ["Google Sheets"]);

        let names: Vec<String> = filter_by_name(&catalog, "spot").into_iter().map(|a| a.name).collect();
        assert_eq!(names, ["HubSpot"]);
    }

    #[test]
    fn filtered_is_an_ordered_subset_matching_the_query() {
        let catalog = sample_catalog();
        for query in ["", "a", "S", "ing", "xyz", "l", " "] {
            let filtered = filter_by_name(&catalog, query);
            let mut cursor = catalog.iter();
            for item in &filtered {
                assert!(cursor.any(|c| c == item), "{item:?} out of order for {query:?}");
                if !query.trim().is_empty() {
                    assert!(item.name.to_lowercase().contains(&query.to_lowercase()));
                }
            }
            if query.trim().is_empty() {
                assert_eq!(filtered, catalog);
            }
        }
    }

    #[test]
    fn whitespace_query_keeps_everything() {
        let catalog = sample_catalog();
        assert_eq!(filter_by_name(&catalog, "   "), catalog);
    }

    #[test]
    fn non_blank_query_is_matched_verbatim() {
        let catalog = sample_catalog();
        let names: Vec<String> = filter_by_name(&catalog, "e s").into_iter().map(|a| a.name).collect();
        assert_eq!(names, ["Google Sheets"]);
        assert!(filter_by_name(&catalog, " slack").is_empty());
    }

    #[test]
    fn total_pages_is_ceiling_division() {
        for page_size in 1..7 {
            for count in 0..30 {
                let expected = if count == 0 { 0 } else { (count + page_size - 1) / page_size };
                assert_eq!(total_pages(count, size(page_size)), expected);
            }
        }
    }

    #[test]
    fn empty_catalog_has_no_pages() {
        let view = derive(&[], "", 1, size(4));
        assert_eq!(view.total_pages, 0);
        assert!(view.window.is_empty());
        assert!(view.filtered.is_empty());
    }

    #[test]
    fn query_without_matches_has_no_pages() {
        let view = derive(&sample_catalog(), "zzz", 1, size(4));
        assert_eq!(view.total_pages, 0);
        assert!(view.window.is_empty());
    }

    #[test]
    fn out_of_range_pages_give_empty_window() {
        let catalog = numbered(10);
        assert!(derive(&catalog, "", 0, size(4)).window.is_empty());
        assert!(derive(&catalog, "", 4, size(4)).window.is_empty());
        assert!(derive(&catalog, "", usize::MAX, size(4)).window.is_empty());
    }

    #[test]
    fn windows_cover_filtered_list_exactly_once() {
        let catalog = numbered(23);
        let page_size = size(5);
        let view = derive(&catalog, "", 1, page_size);

        let mut stitched = Vec::new();
        for page in 1..=view.total_pages {
            let window = page_window(&view.filtered, page, page_size);
            assert!(!window.is_empty());
            assert!(window.len() <= page_size.get());
            stitched.extend_from_slice(window);
        }
        assert_eq!(stitched, catalog);
    }

    #[test]
    fn setting_query_resets_page() {
        let mut state = SearchState::default();
        state.set_page(3);
        assert_eq!(state.page(), 3);

        state.set_query("sl");
        assert_eq!(state.page(), 1);
        assert_eq!(state.query(), "sl");

        state.set_page(2);
        state.set_query("sl");
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn set_page_does_not_clamp() {
        let mut state = SearchState::default();
        state.set_page(99);
        assert_eq!(state.page(), 99);
        state.set_page(0);
        assert_eq!(state.page(), 0);
    }

    #[test]
    fn query_is_stored_verbatim() {
        let mut state = SearchState::default();
        state.set_query("  Slack ");
        assert_eq!(state.query(), "  Slack ");
        assert!(!state.is_blank());

        state.set_query("  ");
        assert!(state.is_blank());
    }
}
