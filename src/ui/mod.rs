//! Terminal user interface.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI frame
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: display-ready view model types and their pure helpers
//! - [`renderer`]: top-level rendering coordinator
//! - [`components`]: composable component renderers
//! - [`helpers`]: canvas, highlighting and wrapping utilities
//! - [`theme`]: color schemes and ANSI escape generation

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::{render, render_to_string};
pub use theme::Theme;
pub use viewmodel::{
    CardItem, DetailPanel, FooterInfo, HeaderInfo, PageMarker, PaginationInfo, RecentItem, SearchBarInfo,
    StatusKind, StatusMessage, UIViewModel,
};
