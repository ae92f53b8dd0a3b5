//! End-to-end browsing: worker-loaded catalog, search, detail panel and a
//! recently-viewed list that survives reopening the store.

mod common;

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::mpsc;
use std::time::Duration;

use vitrine::catalog::CatalogSource;
use vitrine::storage::{JsonFileStore, RecencyStore};
use vitrine::worker::{CatalogWorker, WorkerHandle, WorkerResponse};
use vitrine::{handle_event, initialize, Action, App, AppState, Config, Event, LoadState, Result};

use common::app;

struct StaticSource(Vec<App>);

impl CatalogSource for StaticSource {
    fn fetch(&self) -> Result<Vec<App>> {
        Ok(self.0.clone())
    }

    fn describe(&self) -> String {
        "static".to_string()
    }
}

fn config(data_dir: &Path, max_recent: usize) -> Config {
    let max_recent = max_recent.to_string();
    let env: BTreeMap<String, String> = [
        ("VITRINE_BASE_URL", "http://127.0.0.1:9"),
        ("VITRINE_ITEMS_PER_PAGE", "2"),
        ("VITRINE_RECENT_APPS_KEY", "recent_apps"),
        ("VITRINE_MAX_RECENT_APPS", max_recent.as_str()),
        ("VITRINE_DATA_DIR", data_dir.to_str().unwrap()),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();
    Config::from_env_map(&env).unwrap()
}

fn catalog() -> Vec<App> {
    vec![
        app("slack", "Slack"),
        app("trello", "Trello"),
        app("gmail", "Gmail"),
        app("google-sheets", "Google Sheets"),
        app("hubspot", "HubSpot"),
    ]
}

fn open_recents(config: &Config) -> RecencyStore {
    let backend = JsonFileStore::open(config.storage_path()).unwrap();
    RecencyStore::open(Box::new(backend), config.recent_apps_key.clone(), config.max_recent_apps)
}

/// Minimal runtime: runs actions the way the binary does.
struct Harness {
    state: AppState,
    recents: RecencyStore,
    worker: WorkerHandle,
    responses: mpsc::Receiver<WorkerResponse>,
}

impl Harness {
    fn new(config: &Config, apps: Vec<App>) -> Self {
        let recents = open_recents(config);
        let state = initialize(config, recents.list(None));
        let (tx, responses) = mpsc::channel();
        let worker = CatalogWorker::new(Box::new(StaticSource(apps)))
            .spawn(move |response| {
                let _ = tx.send(response);
            })
            .unwrap();
        Self {
            state,
            recents,
            worker,
            responses,
        }
    }

    fn send(&mut self, event: Event) -> bool {
        let (mut render, actions) = handle_event(&mut self.state, &event).unwrap();
        for action in actions {
            match action {
                Action::PostToWorker(message) => self.worker.post(message).unwrap(),
                Action::RecordView(app) => {
                    self.recents.record_view(app).unwrap();
                    let list = self.recents.list(None);
                    render |= self.send(Event::RecentsChanged(list));
                }
                Action::OpenLink(_) | Action::Quit => {}
            }
        }
        render
    }

    fn next_response(&self) -> WorkerResponse {
        self.responses.recv_timeout(Duration::from_secs(5)).unwrap()
    }

    fn load(&mut self) {
        assert!(self.send(Event::LoadCatalog));
        let response = self.next_response();
        assert!(self.send(Event::WorkerResponse(response)));
        assert_eq!(self.state.load_state, LoadState::Ready);
    }

    fn names_on_page(&self) -> Vec<String> {
        self.state.page_view().window.into_iter().map(|a| a.name).collect()
    }
}

#[test]
fn search_paginate_and_open_detail() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(dir.path(), 3);
    let mut shell = Harness::new(&config, catalog());

    shell.load();
    assert_eq!(shell.state.page_view().total_pages, 3);
    assert_eq!(shell.names_on_page(), ["Slack", "Trello"]);

    shell.send(Event::NextPage);
    assert_eq!(shell.names_on_page(), ["Gmail", "Google Sheets"]);

    shell.send(Event::SetQuery("g".to_string()));
    assert_eq!(shell.state.search.page(), 1);
    assert_eq!(shell.names_on_page(), ["Gmail", "Google Sheets"]);

    shell.send(Event::SelectCard(1));
    assert!(shell.state.detail_open);
    assert_eq!(shell.state.selected.as_ref().map(|a| a.app_id.as_str()), Some("google-sheets"));

    let frame = vitrine::ui::render_to_string(&shell.state, 30, 100);
    assert!(frame.contains("Google Sheets"));
    assert!(frame.contains("Ver integrações disponíveis"));
}

#[test]
fn recents_persist_across_restarts() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(dir.path(), 3);

    {
        let mut shell = Harness::new(&config, catalog());
        shell.load();
        for index in [0, 1] {
            shell.send(Event::SelectCard(index));
            shell.send(Event::CloseDetail);
        }
        shell.send(Event::NextPage);
        shell.send(Event::SelectCard(0));

        let ids: Vec<&str> = shell.state.recent_apps.iter().map(|a| a.app_id.as_str()).collect();
        assert_eq!(ids, ["gmail", "trello", "slack"]);
        assert_eq!(shell.state.visible_recents().len(), 2);
    }

    let shell = Harness::new(&config, catalog());
    let ids: Vec<&str> = shell.state.recent_apps.iter().map(|a| a.app_id.as_str()).collect();
    assert_eq!(ids, ["gmail", "trello", "slack"]);
}

#[test]
fn recents_are_bounded_and_deduplicated() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(dir.path(), 2);
    let mut shell = Harness::new(&config, catalog());
    shell.load();

    shell.send(Event::SelectCard(0));
    shell.send(Event::SelectCard(1));
    shell.send(Event::SelectCard(0));
    shell.send(Event::NextPage);
    shell.send(Event::SelectCard(0));

    let ids: Vec<&str> = shell.state.recent_apps.iter().map(|a| a.app_id.as_str()).collect();
    assert_eq!(ids, ["gmail", "slack"]);

    let reopened = open_recents(&config);
    assert_eq!(reopened.list(None), shell.state.recent_apps);
}

#[test]
fn opening_a_recent_moves_it_to_the_front() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(dir.path(), 4);
    let mut shell = Harness::new(&config, catalog());
    shell.load();

    shell.send(Event::SelectCard(0));
    shell.send(Event::SelectCard(1));
    assert_eq!(shell.state.visible_recents(), vec![app("slack", "Slack")]);

    shell.send(Event::SelectRecent(0));
    assert_eq!(shell.state.selected, Some(app("slack", "Slack")));
    let ids: Vec<&str> = shell.state.recent_apps.iter().map(|a| a.app_id.as_str()).collect();
    assert_eq!(ids, ["slack", "trello"]);
}

#[test]
fn stale_response_is_ignored_after_reload() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(dir.path(), 3);
    let mut shell = Harness::new(&config, catalog());
    shell.load();

    assert!(shell.send(Event::LoadCatalog));
    let stale = WorkerResponse::CatalogLoaded {
        request_id: shell.state.request_id - 1,
        apps: Vec::new(),
        loaded_at: 0,
    };
    assert!(!shell.send(Event::WorkerResponse(stale)));
    assert!(shell.state.load_state.is_loading());

    let fresh = shell.next_response();
    shell.send(Event::WorkerResponse(fresh));
    assert_eq!(shell.state.load_state, LoadState::Ready);
    assert_eq!(shell.state.catalog.len(), 5);
}

#[test]
fn corrupt_storage_file_starts_with_no_recents() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(dir.path(), 3);
    std::fs::write(config.storage_path(), "{ definitely not json").unwrap();

    let backend = JsonFileStore::open_or_reset(config.storage_path()).unwrap();
    let mut recents = RecencyStore::open(Box::new(backend), config.recent_apps_key.clone(), 3);
    assert!(recents.list(None).is_empty());

    recents.record_view(app("slack", "Slack")).unwrap();
    assert_eq!(open_recents(&config).list(None), vec![app("slack", "Slack")]);
}
