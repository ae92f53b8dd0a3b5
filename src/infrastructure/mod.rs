//! Platform helpers: where data lives and how links are opened.

pub mod opener;
pub mod paths;

pub use opener::open_link;
pub use paths::{expand_tilde, resolve_data_dir};
