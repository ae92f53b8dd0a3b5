//! Domain layer for Vitrine.
//!
//! Holds the catalog record type and the crate-wide error type. Nothing in here
//! knows about HTTP, the terminal, or where the recently-viewed list is kept.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`app`]: Catalog app record
//!
//! # Examples
//!
//! ```
//! use vitrine::domain::{App, Result};
//!
//! fn slack() -> Result<App> {
//!     Ok(App::new("slack", "Slack", "#4A154B", "https://cdn.example/slack.svg", "https://example/slack"))
//! }
//! # assert_eq!(slack().unwrap().name, "Slack");
//! ```

pub mod app;
pub mod error;

pub use app::App;
pub use error::{Result, VitrineError};
