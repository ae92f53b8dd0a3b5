//! Event handling and state transition logic.
//!
//! [`handle_event`] is the only place `AppState` changes. It returns whether
//! the screen needs redrawing and the [`Action`]s the runtime must execute.
//!
//! # Event Types
//!
//! - **Loading**: `LoadCatalog`, `WorkerResponse`
//! - **Search**: `Char`, `Backspace`, `ClearQuery`, `SetQuery`
//! - **Pagination**: `NextPage`, `PrevPage`, `GoToPage`
//! - **Detail**: `SelectCard`, `SelectRecent`, `CloseDetail`, `OpenLink`
//! - **Runtime**: `RecentsChanged`, `Quit`
//!
//! # Example
//!
//! ```
//! use std::num::NonZeroUsize;
//! use vitrine::app::{handle_event, Action, AppState, Event};
//! use vitrine::ui::Theme;
//!
//! let mut state = AppState::new(NonZeroUsize::new(20).unwrap(), Theme::default(), Vec::new());
//! let (render, actions) = handle_event(&mut state, &Event::LoadCatalog)?;
//! assert!(render);
//! assert!(matches!(actions[..], [Action::PostToWorker(_)]));
//! # Ok::<(), vitrine::VitrineError>(())
//! ```

use crate::app::{Action, AppState, LoadState};
use crate::domain::error::Result;
use crate::domain::App;
use crate::worker::{WorkerMessage, WorkerResponse};

/// Events from user input, the runtime, or the worker thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Requests the catalog. Ignored while a request is already in flight.
    LoadCatalog,

    /// Appends a character to the query.
    Char(char),
    /// Removes the last character of the query.
    Backspace,
    /// Empties the query.
    ClearQuery,
    /// Replaces the query.
    SetQuery(String),

    NextPage,
    PrevPage,
    /// Jumps to a 1-based page, clamped into the valid range.
    GoToPage(usize),

    /// Opens the card at this zero-based index of the current page.
    SelectCard(usize),
    /// Opens the recent at this zero-based index of the detail panel's list.
    SelectRecent(usize),
    CloseDetail,
    /// Opens the selected app's link.
    OpenLink,
    Quit,

    /// The recency store changed; carries the full list, most recent first.
    RecentsChanged(Vec<App>),

    /// Result of a worker request.
    WorkerResponse(WorkerResponse),
}

/// Processes one event.
///
/// # Returns
///
/// `(render, actions)`: whether the view changed, and the side effects to run
/// in order.
///
/// # Errors
///
/// None of the current events fail; the `Result` keeps the runtime's error
/// path uniform with the rest of the crate.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::LoadCatalog => Ok(start_load(state)),

        Event::Char(c) => {
            let mut query = state.search.query().to_string();
            query.push(*c);
            Ok(set_query(state, query))
        }
        Event::Backspace => {
            let mut query = state.search.query().to_string();
            if query.pop().is_none() {
                return Ok((false, vec![]));
            }
            Ok(set_query(state, query))
        }
        Event::ClearQuery => Ok(set_query(state, String::new())),
        Event::SetQuery(query) => Ok(set_query(state, query.clone())),

        Event::NextPage => {
            let page = state.search.page();
            Ok(go_to_page(state, page.saturating_add(1)))
        }
        Event::PrevPage => {
            let page = state.search.page();
            Ok(go_to_page(state, page.saturating_sub(1)))
        }
        Event::GoToPage(page) => {
            let total = state.page_view().total_pages;
            if total == 0 {
                tracing::debug!(page, "no pages to go to");
                return Ok((false, vec![]));
            }
            Ok(go_to_page(state, (*page).clamp(1, total)))
        }

        Event::SelectCard(index) => {
            let Some(app) = state.page_view().window.get(*index).cloned() else {
                tracing::debug!(index, "no card at index");
                return Ok((false, vec![]));
            };
            Ok(open_detail(state, app))
        }
        Event::SelectRecent(index) => {
            if !state.detail_open {
                return Ok((false, vec![]));
            }
            let Some(app) = state.visible_recents().get(*index).cloned() else {
                tracing::debug!(index, "no recent at index");
                return Ok((false, vec![]));
            };
            Ok(open_detail(state, app))
        }
        Event::CloseDetail => {
            if !state.detail_open {
                return Ok((false, vec![]));
            }
            state.detail_open = false;
            Ok((true, vec![]))
        }
        Event::OpenLink => {
            let link = state
                .selected
                .as_ref()
                .filter(|_| state.detail_open)
                .map(|app| app.link.clone());
            match link {
                Some(link) => {
                    tracing::info!(link = %link, "opening link");
                    Ok((false, vec![Action::OpenLink(link)]))
                }
                None => Ok((false, vec![])),
            }
        }
        Event::Quit => Ok((false, vec![Action::Quit])),

        Event::RecentsChanged(recents) => {
            if &state.recent_apps == recents {
                return Ok((false, vec![]));
            }
            state.recent_apps.clone_from(recents);
            Ok((state.detail_open, vec![]))
        }

        Event::WorkerResponse(response) => Ok(apply_worker_response(state, response)),
    }
}

fn start_load(state: &mut AppState) -> (bool, Vec<Action>) {
    if state.load_state.is_loading() {
        tracing::debug!(request_id = state.request_id, "catalog already loading");
        return (false, vec![]);
    }

    state.request_id += 1;
    state.load_state = LoadState::Loading;
    tracing::info!(request_id = state.request_id, "loading catalog");

    (true, vec![Action::PostToWorker(WorkerMessage::load_catalog(state.request_id))])
}

fn set_query(state: &mut AppState, query: String) -> (bool, Vec<Action>) {
    if state.search.query() == query && state.search.page() == 1 {
        return (false, vec![]);
    }
    tracing::trace!(query = %query, "search query updated");
    state.search.set_query(query);
    (true, vec![])
}

/// Moves to `page` if it lies inside `1..=total_pages` and differs from the
/// current page.
fn go_to_page(state: &mut AppState, page: usize) -> (bool, Vec<Action>) {
    let total = state.page_view().total_pages;
    if page == 0 || page > total || page == state.search.page() {
        return (false, vec![]);
    }
    tracing::debug!(page, total, "page changed");
    state.search.set_page(page);
    (true, vec![])
}

fn open_detail(state: &mut AppState, app: App) -> (bool, Vec<Action>) {
    tracing::debug!(app_id = %app.app_id, "app selected");
    state.selected = Some(app.clone());
    state.detail_open = true;
    (true, vec![Action::RecordView(app)])
}

fn apply_worker_response(state: &mut AppState, response: &WorkerResponse) -> (bool, Vec<Action>) {
    if response.request_id() != state.request_id || !state.load_state.is_loading() {
        tracing::debug!(
            response_id = response.request_id(),
            current_id = state.request_id,
            "discarding stale worker response"
        );
        return (false, vec![]);
    }

    match response {
        WorkerResponse::CatalogLoaded { apps, loaded_at, .. } => {
            tracing::debug!(app_count = apps.len(), "catalog applied");
            state.catalog.clone_from(apps);
            state.loaded_at = Some(*loaded_at);
            state.load_state = LoadState::Ready;

            // A reload can shrink the result set under the current page.
            let total = state.page_view().total_pages;
            if state.search.page() > total.max(1) {
                state.search.set_page(total.max(1));
            }
        }
        WorkerResponse::CatalogFailed { kind, message, .. } => {
            tracing::warn!(kind = ?kind, error = %message, "catalog load failed");
            state.load_state = LoadState::Failed {
                kind: *kind,
                message: message.clone(),
            };
        }
    }

    (true, vec![])
}
