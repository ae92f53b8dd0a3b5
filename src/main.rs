//! Line-driven terminal shell and entry point.
//!
//! Thin runtime around the vitrine library. It owns everything with side
//! effects (the worker thread, the recency store, stdin and stdout) and feeds
//! the library's `handle_event` one event at a time.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   Inbound::Input    ┌────────────────────┐
//! │ stdin thread │ ──────────────────▶ │                    │
//! └──────────────┘                     │  event loop        │
//! ┌──────────────┐  Inbound::Worker    │  (main thread)     │
//! │ worker thread│ ──────────────────▶ │  handle_event      │
//! └──────────────┘                     │  execute actions   │
//!        ▲          WorkerMessage      │  render            │
//!        └──────────────────────────── │                    │
//!                                      └────────────────────┘
//! ```
//!
//! # Commands
//!
//! - `/text`: search for `text`
//! - `/`: clear the search
//! - `n` / `p`: next / previous page
//! - `g N`: go to page `N`
//! - `N`: open card `N` of the current page
//! - `r N`: open recently viewed app `N`
//! - `o`: open the selected app's link
//! - `x`: close the detail panel
//! - `l`: reload the catalog
//! - `q`: quit

#![allow(clippy::multiple_crate_versions)]

use std::io::BufRead;
use std::process::ExitCode;
use std::sync::mpsc;

use vitrine::catalog::HttpCatalogSource;
use vitrine::storage::{JsonFileStore, KeyValueStore, MemoryStore, RecencyStore};
use vitrine::worker::{CatalogWorker, WorkerHandle, WorkerResponse};
use vitrine::{handle_event, Action, AppState, Config, Event};

const DEFAULT_ROWS: usize = 24;
const DEFAULT_COLS: usize = 100;

/// Everything the event loop can receive.
#[derive(Debug)]
enum Inbound {
    Input(String),
    InputClosed,
    Worker(WorkerResponse),
}

/// Runtime state wrapper.
///
/// Wraps the library's `AppState` with the resources whose effects the
/// library only describes as actions.
struct Shell {
    app: AppState,
    worker: WorkerHandle,
    recents: RecencyStore,
}

/// What the loop does after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue { render: bool },
    Quit,
}

fn main() -> ExitCode {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("vitrine: {e}");
            return ExitCode::from(2);
        }
    };

    vitrine::observability::init_tracing(&config);

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "vitrine stopped");
            eprintln!("vitrine: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> vitrine::Result<()> {
    let span = tracing::debug_span!("shell_run");
    let _guard = span.entered();

    let recents = RecencyStore::open(open_backend(config), config.recent_apps_key.clone(), config.max_recent_apps);
    let app = vitrine::initialize(config, recents.list(None));
    tracing::debug!(key = %recents.key(), count = app.recent_apps.len(), "recently viewed list ready");

    let (tx, rx) = mpsc::channel::<Inbound>();

    let source = HttpCatalogSource::new(&config.base_url, config.http_timeout)?;
    tracing::debug!(url = %source.url(), "catalog source ready");
    let worker_tx = tx.clone();
    let worker = CatalogWorker::new(Box::new(source)).spawn(move |response| {
        if worker_tx.send(Inbound::Worker(response)).is_err() {
            tracing::debug!("event loop gone, dropping worker response");
        }
    })?;

    spawn_input_reader(tx)?;

    let mut shell = Shell { app, worker, recents };
    let (rows, cols) = terminal_size();

    if let Flow::Continue { render: true } = shell.update(&Event::LoadCatalog) {
        shell.render(rows, cols);
    }

    for inbound in rx {
        let flow = match inbound {
            Inbound::Input(line) => match map_command(&line) {
                Some(event) => shell.update(&event),
                None => {
                    tracing::debug!(line = %line, "unrecognized command");
                    Flow::Continue { render: true }
                }
            },
            Inbound::InputClosed => shell.update(&Event::Quit),
            Inbound::Worker(response) => shell.update(&Event::WorkerResponse(response)),
        };

        match flow {
            Flow::Continue { render: true } => shell.render(rows, cols),
            Flow::Continue { render: false } => {}
            Flow::Quit => break,
        }
    }

    shell.worker.shutdown();
    tracing::debug!("shell stopped");
    Ok(())
}

/// Opens the on-disk store, falling back to memory so the browser still works
/// when the data directory is unusable.
fn open_backend(config: &Config) -> Box<dyn KeyValueStore> {
    let path = config.storage_path();
    match JsonFileStore::open_or_reset(path.clone()) {
        Ok(store) => Box::new(store),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "storage unavailable, recents will not persist");
            Box::new(MemoryStore::default())
        }
    }
}

fn spawn_input_reader(tx: mpsc::Sender<Inbound>) -> vitrine::Result<()> {
    std::thread::Builder::new()
        .name("vitrine-input".to_string())
        .spawn(move || {
            for line in std::io::stdin().lock().lines() {
                let Ok(line) = line else { break };
                if tx.send(Inbound::Input(line)).is_err() {
                    return;
                }
            }
            let _ = tx.send(Inbound::InputClosed);
        })?;
    Ok(())
}

/// Rows and columns from `LINES`/`COLUMNS`, with a fixed fallback.
fn terminal_size() -> (usize, usize) {
    let dimension = |name: &str, default: usize| {
        std::env::var(name)
            .ok()
            .and_then(|v| v.trim().parse::<usize>().ok())
            .filter(|&v| v > 0)
            .unwrap_or(default)
    };
    (dimension("LINES", DEFAULT_ROWS), dimension("COLUMNS", DEFAULT_COLS))
}

impl Shell {
    fn update(&mut self, event: &Event) -> Flow {
        let span = tracing::debug_span!("shell_update", event_type = %event_name(event));
        let _guard = span.entered();

        match handle_event(&mut self.app, event) {
            Ok((should_render, actions)) => {
                tracing::debug!(action_count = actions.len(), should_render, "event handled");
                let mut render = should_render;
                for action in actions {
                    match self.execute_action(action) {
                        Flow::Quit => return Flow::Quit,
                        Flow::Continue { render: r } => render |= r,
                    }
                }
                Flow::Continue { render }
            }
            Err(e) => {
                tracing::warn!(error = %e, "error handling event");
                Flow::Continue { render: false }
            }
        }
    }

    fn execute_action(&mut self, action: Action) -> Flow {
        match action {
            Action::PostToWorker(message) => {
                if let Err(e) = self.worker.post(message) {
                    tracing::error!(error = %e, "failed to post worker message");
                }
                Flow::Continue { render: false }
            }
            Action::RecordView(app) => {
                tracing::debug!(app_id = %app.app_id, "recording view");
                if let Err(e) = self.recents.record_view(app) {
                    tracing::warn!(error = %e, "failed to persist recently viewed apps");
                }
                let list = self.recents.list(None);
                self.update(&Event::RecentsChanged(list))
            }
            Action::OpenLink(url) => {
                if let Err(e) = vitrine::infrastructure::open_link(&url) {
                    tracing::warn!(url = %url, error = %e, "failed to open link");
                }
                Flow::Continue { render: false }
            }
            Action::Quit => Flow::Quit,
        }
    }

    fn render(&self, rows: usize, cols: usize) {
        if let Err(e) = vitrine::ui::render(&self.app, rows, cols) {
            tracing::warn!(error = %e, "failed to draw frame");
        }
    }
}

/// Short event name for span fields; worker payloads can be large.
fn event_name(event: &Event) -> &'static str {
    match event {
        Event::LoadCatalog => "LoadCatalog",
        Event::Char(_) => "Char",
        Event::Backspace => "Backspace",
        Event::ClearQuery => "ClearQuery",
        Event::SetQuery(_) => "SetQuery",
        Event::NextPage => "NextPage",
        Event::PrevPage => "PrevPage",
        Event::GoToPage(_) => "GoToPage",
        Event::SelectCard(_) => "SelectCard",
        Event::SelectRecent(_) => "SelectRecent",
        Event::CloseDetail => "CloseDetail",
        Event::OpenLink => "OpenLink",
        Event::Quit => "Quit",
        Event::RecentsChanged(_) => "RecentsChanged",
        Event::WorkerResponse(_) => "WorkerResponse",
    }
}

/// Maps one input line to an application event.
///
/// Card and recent numbers are 1-based on screen and 0-based in events.
fn map_command(line: &str) -> Option<Event> {
    if let Some(query) = line.strip_prefix('/') {
        return Some(if query.is_empty() {
            Event::ClearQuery
        } else {
            Event::SetQuery(query.to_string())
        });
    }

    let mut words = line.split_whitespace();
    let command = words.next()?;
    let argument = words.next();
    if words.next().is_some() {
        return None;
    }

    let number = |raw: Option<&str>| raw.and_then(|r| r.parse::<usize>().ok());

    match (command, argument) {
        ("n", None) => Some(Event::NextPage),
        ("p", None) => Some(Event::PrevPage),
        ("g", arg) => number(arg).map(Event::GoToPage),
        ("r", arg) => number(arg)?.checked_sub(1).map(Event::SelectRecent),
        ("o", None) => Some(Event::OpenLink),
        ("x", None) => Some(Event::CloseDetail),
        ("l", None) => Some(Event::LoadCatalog),
        ("q", None) => Some(Event::Quit),
        (card, None) => card.parse::<usize>().ok()?.checked_sub(1).map(Event::SelectCard),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slash_sets_or_clears_the_query() {
        assert_eq!(map_command("/sl"), Some(Event::SetQuery("sl".to_string())));
        assert_eq!(map_command("/google sheets"), Some(Event::SetQuery("google sheets".to_string())));
        assert_eq!(map_command("/"), Some(Event::ClearQuery));
    }

    #[test]
    fn single_letter_commands() {
        assert_eq!(map_command("n"), Some(Event::NextPage));
        assert_eq!(map_command(" p "), Some(Event::PrevPage));
        assert_eq!(map_command("o"), Some(Event::OpenLink));
        assert_eq!(map_command("x"), Some(Event::CloseDetail));
        assert_eq!(map_command("l"), Some(Event::LoadCatalog));
        assert_eq!(map_command("q"), Some(Event::Quit));
    }

    #[test]
    fn numbers_are_one_based_on_screen() {
        assert_eq!(map_command("1"), Some(Event::SelectCard(0)));
        assert_eq!(map_command("12"), Some(Event::SelectCard(11)));
        assert_eq!(map_command("r 2"), Some(Event::SelectRecent(1)));
        assert_eq!(map_command("g 3"), Some(Event::GoToPage(3)));
    }

    #[test]
    fn malformed_commands_are_ignored() {
        assert_eq!(map_command(""), None);
        assert_eq!(map_command("0"), None);
        assert_eq!(map_command("r 0"), None);
        assert_eq!(map_command("r"), None);
        assert_eq!(map_command("g"), None);
        assert_eq!(map_command("g x"), None);
        assert_eq!(map_command("n 2"), None);
        assert_eq!(map_command("g 1 2"), None);
        assert_eq!(map_command("hello"), None);
    }
}
