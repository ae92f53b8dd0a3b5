//! View model types representing renderable UI state.
//!
//! View models are computed from application state by
//! `AppState::compute_viewmodel()` and consumed by the renderer. They carry
//! display-ready data only: user-facing text is already composed, positions
//! are already 1-based, and highlight ranges are already in character indices.
//!
//! # Example
//!
//! ```
//! use vitrine::ui::viewmodel::{page_markers, PageMarker};
//!
//! let markers = page_markers(5, 10);
//! assert_eq!(markers.first(), Some(&PageMarker::Page { number: 1, is_current: false }));
//! assert!(markers.contains(&PageMarker::Page { number: 5, is_current: true }));
//! assert!(markers.contains(&PageMarker::Gap));
//! ```

/// Search box placeholder shown while the query is empty.
pub const SEARCH_PLACEHOLDER: &str = "Buscar ferramentas...";
/// Status line while the catalog request is in flight.
pub const LOADING_MESSAGE: &str = "Carregando ferramentas...";
/// Status line after a failed load, whatever the cause.
pub const LOAD_ERROR_MESSAGE: &str = "Erro ao carregar ferramentas. Tente novamente mais tarde.";
/// Hint under the error message.
pub const RETRY_HINT: &str = "Pressione l para tentar novamente.";
/// Status line when a non-blank query matches nothing.
pub const NO_MATCH_MESSAGE: &str = "Nenhuma ferramenta encontrada. Tente outra busca.";
/// Status line when the catalog itself is empty.
pub const EMPTY_CATALOG_MESSAGE: &str = "Nenhuma ferramenta disponível.";
/// Label of the detail panel's link action.
pub const LINK_LABEL: &str = "Ver integrações disponíveis";
/// Heading of the recents section inside the detail panel.
pub const RECENTS_TITLE: &str = "Últimas ferramentas visualizadas";

/// Pagination bars with more pages than this collapse into a window with gaps.
pub const MAX_PAGE_MARKERS: usize = 7;

/// Complete UI view model for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    pub header: HeaderInfo,
    pub search_bar: SearchBarInfo,

    /// Loading, error or empty message shown instead of the grid.
    pub status: Option<StatusMessage>,

    /// Cards of the current page window, in catalog order.
    pub cards: Vec<CardItem>,

    /// Grid columns the cards are laid out in (row-major).
    pub grid_columns: usize,

    /// `None` when everything fits on one page.
    pub pagination: Option<PaginationInfo>,

    /// Present while the detail panel is open.
    pub detail: Option<DetailPanel>,

    pub footer: FooterInfo,
}

/// Title bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,

    /// Catalog size and load time, once the catalog is loaded.
    pub subtitle: Option<String>,
}

/// Search input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    /// The query, or the placeholder when the query is empty.
    pub text: String,
    pub is_placeholder: bool,
}

/// Kind of a [`StatusMessage`], used for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Loading,
    Error,
    Empty,
}

/// A full-width message replacing the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub message: String,
    pub hint: Option<String>,
}

/// One app card in the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardItem {
    /// 1-based position within the page; the number the user types to open it.
    pub position: usize,

    /// Display name, truncated to the card width.
    pub name: String,

    /// The app's accent color as given by the catalog.
    pub color: String,

    /// Character ranges of `name` matching the query.
    ///
    /// Each tuple is `(start, end)` with an exclusive end.
    pub highlight_ranges: Vec<(usize, usize)>,

    /// Whether this card's app is open in the detail panel.
    pub is_selected: bool,
}

/// Page selector below the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationInfo {
    pub current: usize,
    pub total: usize,
    pub markers: Vec<PageMarker>,

    /// `false` on the first page.
    pub has_previous: bool,

    /// `false` on the last page.
    pub has_next: bool,
}

/// One entry of the pagination bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMarker {
    Page { number: usize, is_current: bool },
    /// Collapsed run of pages, drawn as an ellipsis.
    Gap,
}

/// Details of the selected app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailPanel {
    pub name: String,
    pub color: String,
    pub icon: String,
    pub description: String,
    pub link_label: String,
    pub link: String,

    /// Recently viewed apps other than this one. The section is hidden when
    /// empty.
    pub recents: Vec<RecentItem>,
}

/// One entry of the detail panel's recents section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentItem {
    /// 1-based; the number used with `r N`.
    pub position: usize,
    pub name: String,
    pub color: String,
}

/// Key hints at the bottom of the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    pub keybindings: String,
}

/// Description paragraph of the detail panel.
#[must_use]
pub fn detail_description(name: &str) -> String {
    format!(
        "Integre {name} com centenas de outras ferramentas através da Pluga. \
         Automatize tarefas e economize tempo conectando seus aplicativos favoritos."
    )
}

/// Builds the markers of a pagination bar.
///
/// Up to [`MAX_PAGE_MARKERS`] pages are listed in full. Longer bars keep the
/// first and last page plus a window around `current`, replacing the pages in
/// between with [`PageMarker::Gap`]. The result never exceeds
/// `MAX_PAGE_MARKERS` entries.
#[must_use]
pub fn page_markers(current: usize, total: usize) -> Vec<PageMarker> {
    let page = |number: usize| PageMarker::Page {
        number,
        is_current: number == current,
    };

    if total <= MAX_PAGE_MARKERS {
        return (1..=total).map(page).collect();
    }

    // Pages adjacent to an end are shown without a gap on that side.
    let edge = MAX_PAGE_MARKERS - 2;
    let mut markers = Vec::with_capacity(MAX_PAGE_MARKERS);

    if current < edge {
        markers.extend((1..=edge).map(page));
        markers.push(PageMarker::Gap);
        markers.push(page(total));
    } else if current > total - edge + 1 {
        markers.push(page(1));
        markers.push(PageMarker::Gap);
        markers.extend((total - edge + 1..=total).map(page));
    } else {
        markers.push(page(1));
        markers.push(PageMarker::Gap);
        markers.extend((current - 1..=current + 1).map(page));
        markers.push(PageMarker::Gap);
        markers.push(page(total));
    }

    markers
}

/// Character range of the first case-insensitive occurrence of `query` in `text`.
///
/// Returns an empty list for a blank query, for no match, and for text whose
/// lowercase form changes length (the indices would not line up).
#[must_use]
pub fn highlight_ranges(text: &str, query: &str) -> Vec<(usize, usize)> {
    if query.trim().is_empty() {
        return Vec::new();
    }

    let lowered = text.to_lowercase();
    if lowered.chars().count() != text.chars().count() {
        return Vec::new();
    }

    let needle = query.to_lowercase();
    lowered.find(&needle).map_or_else(Vec::new, |byte_start| {
        let start = lowered[..byte_start].chars().count();
        vec![(start, start + needle.chars().count())]
    })
}

/// Shortens `text` to at most `max` characters, ending with `…` when cut.
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut short: String = text.chars().take(max - 1).collect();
    short.push('…');
    short
}
