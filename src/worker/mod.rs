//! Background worker for catalog loading.
//!
//! The event loop never blocks on the network. It posts a
//! [`WorkerMessage`] to the worker thread and later receives a
//! [`WorkerResponse`] through its own channel.
//!
//! # Architecture
//!
//! - `messages`: request/response protocol with trace context propagation
//! - `handler`: worker implementation and thread management

pub mod handler;
pub mod messages;

pub use handler::{CatalogWorker, WorkerHandle};
pub use messages::{LoadFailure, TraceContext, WorkerMessage, WorkerResponse};
