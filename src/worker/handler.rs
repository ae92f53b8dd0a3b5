//! Catalog worker thread.
//!
//! The worker owns the [`CatalogSource`] and runs each request to completion on
//! its own thread, so the event loop keeps drawing the loading indicator while
//! the HTTP request is in flight. Responses are handed to a callback supplied
//! by the runtime, which forwards them into the event loop's channel.

use crate::catalog::CatalogSource;
use crate::domain::error::{Result, VitrineError};
use crate::worker::messages::{LoadFailure, WorkerMessage, WorkerResponse};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{mpsc, Arc};
use std::thread::JoinHandle;

/// Processes [`WorkerMessage`]s against a catalog source.
pub struct CatalogWorker {
    source: Box<dyn CatalogSource>,
}

impl std::fmt::Debug for CatalogWorker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogWorker")
            .field("source", &self.source.describe())
            .finish()
    }
}

impl CatalogWorker {
    #[must_use]
    pub fn new(source: Box<dyn CatalogSource>) -> Self {
        Self { source }
    }

    /// Handles one request synchronously.
    ///
    /// Attaches the sender's trace context first so the fetch span is linked to
    /// the span that posted the request.
    pub fn handle_message(&self, message: WorkerMessage) -> WorkerResponse {
        let _context_guard = Self::attach_parent_trace_context(&message);

        let span = tracing::debug_span!("worker_handle_message", message_type = ?message);
        let _guard = span.entered();

        match message {
            WorkerMessage::LoadCatalog { request_id, .. } => self.handle_load_catalog(request_id),
        }
    }

    fn handle_load_catalog(&self, request_id: u64) -> WorkerResponse {
        match self.source.fetch() {
            Ok(apps) => {
                tracing::info!(request_id, app_count = apps.len(), source = %self.source.describe(), "catalog loaded");
                WorkerResponse::CatalogLoaded {
                    request_id,
                    apps,
                    loaded_at: chrono::Utc::now().timestamp(),
                }
            }
            Err(e) => {
                tracing::warn!(request_id, error = %e, source = %self.source.describe(), "catalog load failed");
                WorkerResponse::CatalogFailed {
                    request_id,
                    kind: LoadFailure::from_error(&e),
                    message: e.to_string(),
                }
            }
        }
    }

    /// Rebuilds the remote OpenTelemetry context carried by `message`.
    ///
    /// The returned guard must live for the duration of the handling.
    fn attach_parent_trace_context(message: &WorkerMessage) -> Option<opentelemetry::ContextGuard> {
        use opentelemetry::trace::{SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState};

        let trace_context = message.trace_context()?;
        let trace_id = TraceId::from_hex(&trace_context.trace_id).ok()?;
        let span_id = SpanId::from_hex(&trace_context.parent_span_id).ok()?;

        let span_context = SpanContext::new(trace_id, span_id, TraceFlags::SAMPLED, true, TraceState::default());
        let otel_context = opentelemetry::Context::current().with_remote_span_context(span_context);

        Some(otel_context.attach())
    }

    /// Moves the worker onto a named thread.
    ///
    /// Every response is passed to `on_response`. The thread exits once the
    /// returned handle is shut down or dropped and the request it is working
    /// on, if any, has finished.
    ///
    /// # Errors
    ///
    /// Returns [`VitrineError::Io`] if the thread cannot be spawned.
    pub fn spawn<F>(self, on_response: F) -> Result<WorkerHandle>
    where
        F: Fn(WorkerResponse) + Send + 'static,
    {
        let (sender, receiver) = mpsc::channel::<WorkerMessage>();
        let pending = Arc::new(AtomicUsize::new(0));
        let worker_pending = Arc::clone(&pending);

        let thread = std::thread::Builder::new()
            .name("vitrine-worker".to_string())
            .spawn(move || {
                tracing::debug!("catalog worker started");
                for message in receiver {
                    let response = self.handle_message(message);
                    worker_pending.fetch_sub(1, Ordering::SeqCst);
                    on_response(response);
                }
                tracing::debug!("catalog worker stopped");
            })?;

        Ok(WorkerHandle {
            sender: Some(sender),
            thread: Some(thread),
            pending,
        })
    }
}

/// Sending side of a spawned [`CatalogWorker`].
#[derive(Debug)]
pub struct WorkerHandle {
    sender: Option<mpsc::Sender<WorkerMessage>>,
    thread: Option<JoinHandle<()>>,
    /// Requests posted but not yet answered.
    pending: Arc<AtomicUsize>,
}

impl WorkerHandle {
    /// Queues a request for the worker.
    ///
    /// # Errors
    ///
    /// Returns [`VitrineError::Worker`] if the worker thread has exited.
    pub fn post(&self, message: WorkerMessage) -> Result<()> {
        let sender = self
            .sender
            .as_ref()
            .ok_or_else(|| VitrineError::Worker("worker already shut down".to_string()))?;
        self.pending.fetch_add(1, Ordering::SeqCst);
        sender.send(message).map_err(|_| {
            self.pending.fetch_sub(1, Ordering::SeqCst);
            VitrineError::Worker("worker thread is gone".to_string())
        })
    }

    /// Number of posted requests still waiting for a response.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending.load(Ordering::SeqCst)
    }

    /// Closes the request channel.
    ///
    /// An idle worker is joined. A worker still busy with a request is
    /// detached instead: it finishes on its own and its late response goes to
    /// a receiver that is most likely gone.
    pub fn shutdown(mut self) {
        self.stop();
    }

    fn stop(&mut self) {
        self.sender.take();
        let Some(thread) = self.thread.take() else {
            return;
        };

        let pending = self.pending();
        if pending > 0 {
            tracing::debug!(pending, "detaching busy catalog worker");
            return;
        }
        if thread.join().is_err() {
            tracing::error!("catalog worker panicked");
        }
    }
}

impl Drop for WorkerHandle {
    fn drop(&mut self) {
        self.stop();
    }
}
