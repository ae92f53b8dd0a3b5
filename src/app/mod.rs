//! Application layer coordinating state, events, and actions.
//!
//! Sits between the runtime (`main.rs`) and the domain, storage and worker
//! layers. Data flows one way:
//!
//! ```text
//! User Input → Events → handle_event → State Mutations → Actions → Side Effects
//!                  ↑                                            ↓
//!                  └──── Worker Responses / RecentsChanged ─────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: side effect commands emitted by the event handler
//! - [`handler`]: event processing and state transitions
//! - [`modes`]: catalog load state machine
//! - [`search`]: search and pagination derivation
//! - [`state`]: application state and view model computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod search;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::LoadState;
pub use search::{PageView, SearchState};
pub use state::AppState;
