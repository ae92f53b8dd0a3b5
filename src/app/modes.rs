//! Catalog load state machine.
//!
//! - `Idle` → `Loading` on `LoadCatalog`
//! - `Loading` → `Ready` on a matching `CatalogLoaded`
//! - `Loading` → `Failed` on a matching `CatalogFailed`
//! - `Ready` / `Failed` → `Loading` on `LoadCatalog`
//!
//! `LoadCatalog` is ignored while `Loading`. There is no automatic retry: a
//! failed load stays `Failed` until the user asks again.

use crate::worker::LoadFailure;

/// Where the catalog load stands.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    /// Nothing requested yet.
    #[default]
    Idle,

    /// A request is in flight.
    Loading,

    /// The catalog in `AppState` is current.
    Ready,

    /// The last request failed.
    Failed {
        kind: LoadFailure,
        /// Technical detail for logs.
        message: String,
    },
}

impl LoadState {
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }

    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}
