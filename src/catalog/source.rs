//! Catalog source abstraction.

use crate::domain::error::Result;
use crate::domain::App;

/// Something that can produce the full catalog.
///
/// Implementations perform one read per call, with no caching, retry, or
/// deduplication of concurrent calls. They run on the worker thread, hence
/// the `Send` bound.
///
/// # Implementations
///
/// - [`HttpCatalogSource`](crate::catalog::HttpCatalogSource): remote JSON document
///
/// # Errors
///
/// [`fetch`](Self::fetch) fails with
/// [`VitrineError::Fetch`](crate::VitrineError::Fetch) when the resource cannot
/// be retrieved and [`VitrineError::Parse`](crate::VitrineError::Parse) when it
/// is not a list of apps.
pub trait CatalogSource: Send {
    /// Retrieves and decodes the catalog.
    ///
    /// # Errors
    ///
    /// See the trait documentation.
    fn fetch(&self) -> Result<Vec<App>>;

    /// Short description for logs (for example the URL).
    fn describe(&self) -> String;
}
