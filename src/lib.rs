//! Vitrine: a terminal browser for a catalog of integration apps.
//!
//! Vitrine downloads the catalog from a static HTTP endpoint, lets the user
//! search it by name and page through the results as a grid of cards, and
//! shows a detail panel per app together with the apps viewed most recently.
//! The recently-viewed list survives restarts.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Line shell (main.rs)                               │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Event handling, load state machine               │
//! │  - Search and pagination                            │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Storage Layer │   │ Worker Layer  │
//! │ (ui/)         │   │ (storage/)    │   │ (worker/)     │
//! │ - Rendering   │   │ - KV store    │   │ - Catalog load│
//! │ - Theming     │   │ - Recency     │   │ - Trace ctx   │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                                                   │
//!                                         ┌───────────────┐
//!                                         │ catalog/      │
//!                                         │ - HTTP source │
//!                                         │ - JSON parse  │
//!                                         └───────────────┘
//! ```
//!
//! # Configuration
//!
//! Configuration comes from `VITRINE_*` environment variables, see [`Config`].
//!
//! # Example
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use vitrine::{handle_event, initialize, Action, Config, Event};
//!
//! let env: BTreeMap<String, String> = [
//!     ("VITRINE_BASE_URL", "https://catalog.example"),
//!     ("VITRINE_ITEMS_PER_PAGE", "20"),
//!     ("VITRINE_RECENT_APPS_KEY", "recent_apps"),
//!     ("VITRINE_MAX_RECENT_APPS", "4"),
//! ]
//! .into_iter()
//! .map(|(k, v)| (k.to_string(), v.to_string()))
//! .collect();
//!
//! let config = Config::from_env_map(&env)?;
//! let mut state = initialize(&config, Vec::new());
//!
//! let (render, actions) = handle_event(&mut state, &Event::LoadCatalog)?;
//! assert!(render);
//! assert!(matches!(actions.as_slice(), [Action::PostToWorker(_)]));
//! # Ok::<(), vitrine::VitrineError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod catalog;
pub mod domain;
pub mod infrastructure;
pub mod storage;
pub mod worker;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, LoadState};
pub use domain::{App, Result, VitrineError};
pub use ui::Theme;

use std::collections::BTreeMap;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::time::Duration;

/// Default HTTP timeout for the catalog request, in seconds.
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

/// Default tracing level when neither `RUST_LOG` nor `VITRINE_TRACE_LEVEL` is set.
pub const DEFAULT_TRACE_LEVEL: &str = "info";

/// Runtime configuration.
///
/// Built from a snapshot of the environment so that parsing can be tested
/// without touching the process environment.
///
/// | Variable | Required | Default |
/// |---|---|---|
/// | `VITRINE_BASE_URL` | yes | |
/// | `VITRINE_ITEMS_PER_PAGE` | yes | |
/// | `VITRINE_RECENT_APPS_KEY` | yes | |
/// | `VITRINE_MAX_RECENT_APPS` | yes | |
/// | `VITRINE_DATA_DIR` | no | `$XDG_DATA_HOME/vitrine`, then `~/.local/share/vitrine` |
/// | `VITRINE_HTTP_TIMEOUT_SECS` | no | `10` |
/// | `VITRINE_THEME` | no | `vitrine-dark` |
/// | `VITRINE_THEME_FILE` | no | |
/// | `VITRINE_TRACE_LEVEL` | no | `info` |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL the catalog file is fetched from.
    pub base_url: String,

    /// Cards per page.
    pub items_per_page: NonZeroUsize,

    /// Storage key of the recently-viewed list.
    pub recent_apps_key: String,

    /// Recently-viewed list capacity. `0` disables the list.
    pub max_recent_apps: usize,

    /// Directory holding `storage.json` and the trace file.
    pub data_dir: PathBuf,

    pub http_timeout: Duration,

    /// Built-in theme name. Ignored when `theme_file` loads.
    pub theme_name: String,

    /// Path to a custom TOML theme.
    pub theme_file: Option<PathBuf>,

    /// Filter directive used when `RUST_LOG` is unset.
    pub trace_level: String,
}

impl Config {
    /// Parses configuration from an environment map.
    ///
    /// # Errors
    ///
    /// Returns [`VitrineError::Config`] naming the variable when a required
    /// value is missing or blank, or when a numeric value does not parse.
    /// `VITRINE_ITEMS_PER_PAGE` must be at least 1.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use vitrine::{Config, VitrineError};
    ///
    /// let err = Config::from_env_map(&BTreeMap::new()).unwrap_err();
    /// assert!(matches!(err, VitrineError::Config(msg) if msg.contains("VITRINE_BASE_URL")));
    /// ```
    pub fn from_env_map(env: &BTreeMap<String, String>) -> Result<Self> {
        let base_url = required(env, "VITRINE_BASE_URL")?.to_string();
        let items_per_page = parse_number::<NonZeroUsize>("VITRINE_ITEMS_PER_PAGE", required(env, "VITRINE_ITEMS_PER_PAGE")?)?;
        let recent_apps_key = required(env, "VITRINE_RECENT_APPS_KEY")?.to_string();
        let max_recent_apps = parse_number::<usize>("VITRINE_MAX_RECENT_APPS", required(env, "VITRINE_MAX_RECENT_APPS")?)?;

        let http_timeout = optional(env, "VITRINE_HTTP_TIMEOUT_SECS")
            .map(|raw| parse_number::<u64>("VITRINE_HTTP_TIMEOUT_SECS", raw))
            .transpose()?
            .map_or(Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS), Duration::from_secs);

        let home = optional(env, "HOME");
        let theme_file = optional(env, "VITRINE_THEME_FILE").map(|p| infrastructure::expand_tilde(p, home));

        Ok(Self {
            base_url,
            items_per_page,
            recent_apps_key,
            max_recent_apps,
            data_dir: infrastructure::resolve_data_dir(env),
            http_timeout,
            theme_name: optional(env, "VITRINE_THEME").unwrap_or(ui::theme::DEFAULT_THEME).to_string(),
            theme_file,
            trace_level: optional(env, "VITRINE_TRACE_LEVEL").unwrap_or(DEFAULT_TRACE_LEVEL).to_string(),
        })
    }

    /// Parses configuration from the process environment.
    ///
    /// # Errors
    ///
    /// See [`Config::from_env_map`].
    pub fn from_env() -> Result<Self> {
        let env: BTreeMap<String, String> = std::env::vars().collect();
        Self::from_env_map(&env)
    }

    /// Location of the key-value store file.
    #[must_use]
    pub fn storage_path(&self) -> PathBuf {
        self.data_dir.join("storage.json")
    }
}

fn optional<'a>(env: &'a BTreeMap<String, String>, name: &str) -> Option<&'a str> {
    env.get(name).map(|v| v.trim()).filter(|v| !v.is_empty())
}

fn required<'a>(env: &'a BTreeMap<String, String>, name: &str) -> Result<&'a str> {
    optional(env, name).ok_or_else(|| VitrineError::Config(format!("{name} is not set")))
}

fn parse_number<T: std::str::FromStr>(name: &str, raw: &str) -> Result<T> {
    raw.parse()
        .map_err(|_| VitrineError::Config(format!("{name} must be a whole number, got {raw:?}")))
}

/// Builds the initial application state.
///
/// The theme comes from `theme_file` when it loads, otherwise from
/// `theme_name`, otherwise the built-in default. `recent_apps` is the
/// recently-viewed list as persisted; the catalog starts empty and is loaded
/// by the first [`Event::LoadCatalog`].
#[must_use]
pub fn initialize(config: &Config, recent_apps: Vec<App>) -> AppState {
    tracing::debug!(
        base_url = %config.base_url,
        items_per_page = config.items_per_page.get(),
        recents = recent_apps.len(),
        "initializing vitrine"
    );

    let theme = Theme::resolve(&config.theme_name, config.theme_file.as_deref());
    AppState::new(config.items_per_page, theme, recent_apps)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect()
    }

    fn minimal() -> BTreeMap<String, String> {
        env(&[
            ("VITRINE_BASE_URL", "https://catalog.example/"),
            ("VITRINE_ITEMS_PER_PAGE", "12"),
            ("VITRINE_RECENT_APPS_KEY", "recent_apps"),
            ("VITRINE_MAX_RECENT_APPS", "4"),
            ("HOME", "/home/ana"),
        ])
    }

    fn config_error(env: &BTreeMap<String, String>) -> String {
        match Config::from_env_map(env) {
            Err(VitrineError::Config(msg)) => msg,
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn minimal_environment_uses_defaults() {
        let config = Config::from_env_map(&minimal()).unwrap();

        assert_eq!(config.base_url, "https://catalog.example/");
        assert_eq!(config.items_per_page.get(), 12);
        assert_eq!(config.recent_apps_key, "recent_apps");
        assert_eq!(config.max_recent_apps, 4);
        assert_eq!(config.data_dir, PathBuf::from("/home/ana/.local/share/vitrine"));
        assert_eq!(config.http_timeout, Duration::from_secs(10));
        assert_eq!(config.theme_name, "vitrine-dark");
        assert_eq!(config.theme_file, None);
        assert_eq!(config.trace_level, "info");
        assert_eq!(config.storage_path(), PathBuf::from("/home/ana/.local/share/vitrine/storage.json"));
    }

    #[test]
    fn optional_values_are_read() {
        let mut env = minimal();
        env.insert("VITRINE_HTTP_TIMEOUT_SECS".into(), "3".into());
        env.insert("VITRINE_THEME".into(), "vitrine-light".into());
        env.insert("VITRINE_THEME_FILE".into(), "~/themes/mine.toml".into());
        env.insert("VITRINE_TRACE_LEVEL".into(), "debug".into());
        env.insert("VITRINE_DATA_DIR".into(), "/tmp/vitrine".into());

        let config = Config::from_env_map(&env).unwrap();
        assert_eq!(config.http_timeout, Duration::from_secs(3));
        assert_eq!(config.theme_name, "vitrine-light");
        assert_eq!(config.theme_file, Some(PathBuf::from("/home/ana/themes/mine.toml")));
        assert_eq!(config.trace_level, "debug");
        assert_eq!(config.data_dir, PathBuf::from("/tmp/vitrine"));
    }

    #[test]
    fn each_required_variable_is_named_when_missing() {
        for name in [
            "VITRINE_BASE_URL",
            "VITRINE_ITEMS_PER_PAGE",
            "VITRINE_RECENT_APPS_KEY",
            "VITRINE_MAX_RECENT_APPS",
        ] {
            let mut env = minimal();
            env.remove(name);
            assert!(config_error(&env).contains(name), "{name}");

            env.insert(name.to_string(), "   ".to_string());
            assert!(config_error(&env).contains(name), "{name} blank");
        }
    }

    #[test]
    fn page_size_zero_is_rejected() {
        let mut env = minimal();
        env.insert("VITRINE_ITEMS_PER_PAGE".into(), "0".into());
        assert!(config_error(&env).contains("VITRINE_ITEMS_PER_PAGE"));
    }

    #[test]
    fn malformed_numbers_are_rejected() {
        let mut env = minimal();
        env.insert("VITRINE_MAX_RECENT_APPS".into(), "four".into());
        assert!(config_error(&env).contains("VITRINE_MAX_RECENT_APPS"));

        let mut env = minimal();
        env.insert("VITRINE_HTTP_TIMEOUT_SECS".into(), "-1".into());
        assert!(config_error(&env).contains("VITRINE_HTTP_TIMEOUT_SECS"));
    }

    #[test]
    fn zero_recents_is_allowed() {
        let mut env = minimal();
        env.insert("VITRINE_MAX_RECENT_APPS".into(), "0".into());
        assert_eq!(Config::from_env_map(&env).unwrap().max_recent_apps, 0);
    }

    #[test]
    fn initialize_starts_idle_with_recents() {
        let config = Config::from_env_map(&minimal()).unwrap();
        let recents = vec![App::new("slack", "Slack", "#4A154B", "", "")];
        let state = initialize(&config, recents.clone());

        assert_eq!(state.load_state, LoadState::Idle);
        assert_eq!(state.recent_apps, recents);
        assert_eq!(state.page_size, config.items_per_page);
        assert!(state.catalog.is_empty());
    }
}
