//! Catalog app record.
//!
//! An [`App`] is one entry of the remote catalog. Records are immutable once
//! parsed; the same shape is written back to local storage for the
//! recently-viewed list, so the serialized field names are part of both the
//! catalog wire format and the persisted format.

use serde::{Deserialize, Serialize};

/// One integration app from the catalog.
///
/// # Fields
///
/// - `app_id`: Identifier, unique within one catalog snapshot
/// - `name`: Display name, the only field searched
/// - `color`: Accent color as a CSS color string (usually `#rrggbb`)
/// - `icon`: Icon URI
/// - `link`: External page listing the app's integrations
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct App {
    pub app_id: String,
    pub name: String,
    pub color: String,
    pub icon: String,
    pub link: String,
}

impl App {
    /// Creates an app record from its parts.
    ///
    /// # Examples
    ///
    /// ```
    /// use vitrine::domain::App;
    ///
    /// let app = App::new("trello", "Trello", "#0079BF", "https://cdn.example/trello.svg", "https://example/trello");
    /// assert_eq!(app.app_id, "trello");
    /// assert!(app.name_contains("rel"));
    /// ```
    pub fn new(
        app_id: impl Into<String>,
        name: impl Into<String>,
        color: impl Into<String>,
        icon: impl Into<String>,
        link: impl Into<String>,
    ) -> Self {
        Self {
            app_id: app_id.into(),
            name: name.into(),
            color: color.into(),
            icon: icon.into(),
            link: link.into(),
        }
    }

    /// Returns `true` if `needle` occurs in the display name, ignoring case.
    ///
    /// Matching is plain substring containment on the lowercased name; an empty
    /// needle always matches.
    #[must_use]
    pub fn name_contains(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(&needle.to_lowercase())
    }
}
