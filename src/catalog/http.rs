//! HTTP catalog source.

use crate::catalog::parse::parse_catalog;
use crate::catalog::source::CatalogSource;
use crate::domain::error::{Result, VitrineError};
use crate::domain::App;
use std::time::Duration;

/// Name of the catalog document under the base URL.
pub const CATALOG_PATH: &str = "ferramentas_search.json";

/// Loads the catalog with a blocking `GET {base_url}/ferramentas_search.json`.
///
/// # Examples
///
/// ```no_run
/// use std::time::Duration;
/// use vitrine::catalog::{CatalogSource, HttpCatalogSource};
///
/// let source = HttpCatalogSource::new("https://example.com/catalog", Duration::from_secs(10))?;
/// assert_eq!(source.url(), "https://example.com/catalog/ferramentas_search.json");
/// let apps = source.fetch()?;
/// # Ok::<(), vitrine::VitrineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct HttpCatalogSource {
    url: String,
    client: reqwest::blocking::Client,
}

impl HttpCatalogSource {
    /// Builds the client for `base_url`. A trailing `/` is tolerated.
    ///
    /// # Errors
    ///
    /// Returns [`VitrineError::Fetch`] if the HTTP client cannot be constructed
    /// (for example when the TLS backend fails to initialise).
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("vitrine/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| VitrineError::Fetch(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            url: catalog_url(base_url),
            client,
        })
    }

    /// Full URL of the catalog document.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl CatalogSource for HttpCatalogSource {
    fn fetch(&self) -> Result<Vec<App>> {
        let _span = tracing::debug_span!("catalog_fetch", url = %self.url).entered();

        let response = self
            .client
            .get(&self.url)
            .send()
            .map_err(|e| VitrineError::Fetch(format!("GET {} failed: {e}", self.url)))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = %status, "catalog request rejected");
            return Err(VitrineError::Fetch(format!("GET {} returned {status}", self.url)));
        }

        let body = response
            .bytes()
            .map_err(|e| VitrineError::Fetch(format!("failed to read catalog body: {e}")))?;
        tracing::debug!(bytes = body.len(), "catalog body received");

        parse_catalog(&body)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

fn catalog_url(base_url: &str) -> String {
    format!("{}/{CATALOG_PATH}", base_url.trim_end_matches('/'))
}
