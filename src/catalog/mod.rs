//! Catalog loading.
//!
//! The catalog is one static JSON document listing every app. It is fetched
//! once per session (or again when the user asks to retry) through a
//! [`CatalogSource`]. The HTTP implementation lives in [`http`]; parsing is kept
//! separate in [`parse`] so malformed payloads can be tested without a server.
//!
//! # Modules
//!
//! - [`source`]: `CatalogSource` trait
//! - [`http`]: `reqwest` blocking client implementation
//! - [`parse`]: payload decoding and duplicate-id filtering

pub mod http;
pub mod parse;
pub mod source;

pub use http::{HttpCatalogSource, CATALOG_PATH};
pub use parse::parse_catalog;
pub use source::CatalogSource;
