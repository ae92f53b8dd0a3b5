//! Application state and view model computation.
//!
//! [`AppState`] is the single source of truth for everything on screen. The
//! event handler mutates it; [`AppState::compute_viewmodel`] turns a snapshot
//! of it into a [`UIViewModel`] for the renderer.
//!
//! # State Components
//!
//! - **Catalog**: last successfully loaded snapshot, in catalog order
//! - **Load state**: idle, loading, ready or failed, plus the id of the
//!   outstanding request
//! - **Search**: query and current page
//! - **Selection**: the app shown in the detail panel and whether it is open
//! - **Recents**: snapshot of the recency store, most recent first
//!
//! # Example
//!
//! ```
//! use std::num::NonZeroUsize;
//! use vitrine::app::AppState;
//! use vitrine::ui::Theme;
//!
//! let state = AppState::new(NonZeroUsize::new(20).unwrap(), Theme::default(), Vec::new());
//! let viewmodel = state.compute_viewmodel(24, 80);
//! assert!(viewmodel.cards.is_empty());
//! ```

use super::modes::LoadState;
use super::search::{self, PageView, SearchState};
use crate::domain::App;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    self, CardItem, DetailPanel, FooterInfo, HeaderInfo, PaginationInfo, RecentItem, SearchBarInfo, StatusKind,
    StatusMessage, UIViewModel,
};
use std::num::NonZeroUsize;

/// Rows taken by everything except the card grid.
const GRID_CHROME_ROWS: usize = 10;

/// Narrowest card the grid will lay out.
const MIN_CARD_WIDTH: usize = 24;

/// Width of the `[NN] ● ` prefix in front of each card name.
const CARD_PREFIX_WIDTH: usize = 8;

const TITLE: &str = "Vitrine";

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Last loaded catalog. Kept while a reload is in flight.
    pub catalog: Vec<App>,

    pub load_state: LoadState,

    /// Id of the most recent `LoadCatalog` request. Responses carrying any
    /// other id are stale.
    pub request_id: u64,

    pub search: SearchState,

    pub page_size: NonZeroUsize,

    /// App shown in the detail panel. Retained after the panel closes so the
    /// grid can still mark it.
    pub selected: Option<App>,

    pub detail_open: bool,

    /// Recency list snapshot, most recent first.
    pub recent_apps: Vec<App>,

    pub theme: Theme,

    /// Unix timestamp of the last successful load.
    pub loaded_at: Option<i64>,
}

impl AppState {
    /// Creates the start-up state: nothing loaded, empty query, page 1.
    ///
    /// # Parameters
    ///
    /// * `page_size` - Cards per page
    /// * `theme` - Color scheme for rendering
    /// * `recent_apps` - Recency list read from storage at start-up
    #[must_use]
    pub fn new(page_size: NonZeroUsize, theme: Theme, recent_apps: Vec<App>) -> Self {
        Self {
            catalog: Vec::new(),
            load_state: LoadState::Idle,
            request_id: 0,
            search: SearchState::default(),
            page_size,
            selected: None,
            detail_open: false,
            recent_apps,
            theme,
            loaded_at: None,
        }
    }

    /// Filtered catalog, page count and current window.
    #[must_use]
    pub fn page_view(&self) -> PageView {
        search::derive(&self.catalog, self.search.query(), self.search.page(), self.page_size)
    }

    /// Recents as listed in the detail panel: the selected app left out.
    #[must_use]
    pub fn visible_recents(&self) -> Vec<App> {
        let selected_id = self.selected.as_ref().map(|app| app.app_id.as_str());
        self.recent_apps
            .iter()
            .filter(|app| Some(app.app_id.as_str()) != selected_id)
            .cloned()
            .collect()
    }

    /// Computes a renderable view model for a `rows` × `cols` terminal.
    ///
    /// Cards are only produced once the catalog is ready; while loading or
    /// after a failure a status message takes their place.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let _span = tracing::debug_span!(
            "compute_viewmodel",
            rows,
            cols,
            catalog = self.catalog.len(),
            page = self.search.page()
        )
        .entered();

        let view = self.page_view();
        let ready = self.load_state.is_ready();

        let grid_columns = Self::grid_columns(if ready { view.window.len() } else { 0 }, rows, cols);
        let cards = if ready {
            self.compute_cards(&view, cols / grid_columns)
        } else {
            Vec::new()
        };

        UIViewModel {
            header: self.compute_header(),
            search_bar: self.compute_search_bar(),
            status: self.compute_status(&view),
            cards,
            grid_columns,
            pagination: if ready { self.compute_pagination(&view) } else { None },
            detail: self.compute_detail(),
            footer: self.compute_footer(),
        }
    }

    /// Columns needed to fit `card_count` cards into the rows left by the chrome.
    fn grid_columns(card_count: usize, rows: usize, cols: usize) -> usize {
        let available_rows = rows.saturating_sub(GRID_CHROME_ROWS).max(1);
        let max_columns = (cols / MIN_CARD_WIDTH).max(1);
        card_count.div_ceil(available_rows).clamp(1, max_columns)
    }

    fn compute_cards(&self, view: &PageView, card_width: usize) -> Vec<CardItem> {
        let name_width = card_width.saturating_sub(CARD_PREFIX_WIDTH).max(1);
        let selected_id = self
            .selected
            .as_ref()
            .filter(|_| self.detail_open)
            .map(|app| app.app_id.as_str());

        view.window
            .iter()
            .enumerate()
            .map(|(index, app)| CardItem {
                position: index + 1,
                name: viewmodel::truncate(&app.name, name_width),
                color: app.color.clone(),
                highlight_ranges: viewmodel::highlight_ranges(&app.name, self.search.query()),
                is_selected: selected_id == Some(app.app_id.as_str()),
            })
            .collect()
    }

    fn compute_header(&self) -> HeaderInfo {
        let subtitle = self.load_state.is_ready().then(|| {
            let count = match self.catalog.len() {
                1 => "1 ferramenta".to_string(),
                n => format!("{n} ferramentas"),
            };
            match self.loaded_at.and_then(format_clock) {
                Some(clock) => format!("{count} · atualizado às {clock}"),
                None => count,
            }
        });

        HeaderInfo {
            title: TITLE.to_string(),
            subtitle,
        }
    }

    fn compute_search_bar(&self) -> SearchBarInfo {
        if self.search.query().is_empty() {
            SearchBarInfo {
                text: viewmodel::SEARCH_PLACEHOLDER.to_string(),
                is_placeholder: true,
            }
        } else {
            SearchBarInfo {
                text: self.search.query().to_string(),
                is_placeholder: false,
            }
        }
    }

    fn compute_status(&self, view: &PageView) -> Option<StatusMessage> {
        match &self.load_state {
            LoadState::Idle => None,
            LoadState::Loading => Some(StatusMessage {
                kind: StatusKind::Loading,
                message: viewmodel::LOADING_MESSAGE.to_string(),
                hint: None,
            }),
            LoadState::Failed { .. } => Some(StatusMessage {
                kind: StatusKind::Error,
                message: viewmodel::LOAD_ERROR_MESSAGE.to_string(),
                hint: Some(viewmodel::RETRY_HINT.to_string()),
            }),
            LoadState::Ready if view.filtered.is_empty() => {
                let message = if self.search.is_blank() {
                    viewmodel::EMPTY_CATALOG_MESSAGE
                } else {
                    viewmodel::NO_MATCH_MESSAGE
                };
                Some(StatusMessage {
                    kind: StatusKind::Empty,
                    message: message.to_string(),
                    hint: None,
                })
            }
            LoadState::Ready => None,
        }
    }

    fn compute_pagination(&self, view: &PageView) -> Option<PaginationInfo> {
        if view.total_pages <= 1 {
            return None;
        }

        let current = self.search.page();
        Some(PaginationInfo {
            current,
            total: view.total_pages,
            markers: viewmodel::page_markers(current, view.total_pages),
            has_previous: current > 1,
            has_next: current < view.total_pages,
        })
    }

    fn compute_detail(&self) -> Option<DetailPanel> {
        if !self.detail_open {
            return None;
        }
        let app = self.selected.as_ref()?;

        let recents = self
            .visible_recents()
            .into_iter()
            .enumerate()
            .map(|(index, recent)| RecentItem {
                position: index + 1,
                name: recent.name,
                color: recent.color,
            })
            .collect();

        Some(DetailPanel {
            name: app.name.clone(),
            color: app.color.clone(),
            icon: app.icon.clone(),
            description: viewmodel::detail_description(&app.name),
            link_label: viewmodel::LINK_LABEL.to_string(),
            link: app.link.clone(),
            recents,
        })
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = if self.detail_open && self.selected.is_some() {
            "o: abrir link  r N: abrir recente  x: fechar  q: sair"
        } else if self.load_state.is_failed() {
            "l: tentar novamente  q: sair"
        } else if self.load_state.is_ready() {
            "/texto: buscar  /: limpar  N: abrir  n/p: página  g N: ir para  q: sair"
        } else {
            "q: sair"
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }
}

/// Local wall-clock `HH:MM` for a Unix timestamp.
fn format_clock(timestamp: i64) -> Option<String> {
    use chrono::TimeZone;

    chrono::Local
        .timestamp_opt(timestamp, 0)
        .single()
        .map(|time| time.format("%H:%M").to_string())
}
