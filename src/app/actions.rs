//! Side effects requested by the event handler.
//!
//! [`handle_event`](crate::app::handle_event) never performs I/O. It returns a
//! `Vec<Action>` and the runtime executes them in order after the state
//! change, so one event can queue several effects atomically.
//!
//! # Example
//!
//! ```
//! use vitrine::app::Action;
//! use vitrine::worker::WorkerMessage;
//!
//! let actions = vec![Action::PostToWorker(WorkerMessage::load_catalog(1))];
//! assert_eq!(actions.len(), 1);
//! ```

use crate::domain::App;
use crate::worker::WorkerMessage;

/// Commands executed by the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Sends a request to the catalog worker thread.
    PostToWorker(WorkerMessage),

    /// Records that the user viewed `App` in the recency store.
    ///
    /// The runtime persists the view, then feeds the updated list back as
    /// [`Event::RecentsChanged`](crate::app::Event::RecentsChanged).
    RecordView(App),

    /// Opens the URL with the platform's default handler.
    OpenLink(String),

    /// Leaves the event loop.
    Quit,
}
