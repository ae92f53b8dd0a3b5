//! Worker thread message types.
//!
//! Requests travel from the event loop to the catalog worker and responses come
//! back the same way. Every request carries the caller's trace context so the
//! worker's spans join the trace that triggered the load.

use crate::domain::error::VitrineError;
use crate::domain::App;

/// Trace and span identifiers captured on the sending thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceContext {
    /// OpenTelemetry trace ID, 32 hex digits.
    pub trace_id: String,

    /// Span ID of the sender, 16 hex digits.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Captures the context of the active span.
    ///
    /// Returns `None` when no valid OpenTelemetry span is active, for example
    /// before tracing is initialised or in unit tests.
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let otel_context = tracing::Span::current().context();
        let span_ref = otel_context.span();
        let span_context = span_ref.span_context();

        if !span_context.is_valid() {
            return None;
        }

        Some(Self {
            trace_id: format!("{:032x}", span_context.trace_id()),
            parent_span_id: format!("{:016x}", span_context.span_id()),
        })
    }
}

/// Generates constructors that stamp the current trace context on a request.
macro_rules! worker_message_builders {
    (
        $(
            $builder_name:ident($variant:ident { $($field:ident: $ty:ty),* $(,)? })
        ),* $(,)?
    ) => {
        impl WorkerMessage {
            $(
                #[doc = concat!("Creates a `", stringify!($variant), "` request carrying the current trace context.")]
                #[must_use]
                pub fn $builder_name($($field: $ty),*) -> Self {
                    Self::$variant {
                        $($field,)*
                        trace_context: TraceContext::from_current(),
                    }
                }
            )*
        }
    };
}

worker_message_builders! {
    load_catalog(LoadCatalog { request_id: u64 }),
}

/// Requests handled by the catalog worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkerMessage {
    /// Fetch the whole catalog.
    LoadCatalog {
        /// Identifier echoed in the response; lets the event loop drop answers
        /// to superseded requests.
        request_id: u64,

        trace_context: Option<TraceContext>,
    },
}

impl WorkerMessage {
    /// Trace context attached to the request, if any.
    #[must_use]
    pub const fn trace_context(&self) -> Option<&TraceContext> {
        match self {
            Self::LoadCatalog { trace_context, .. } => trace_context.as_ref(),
        }
    }
}

/// Why a catalog load failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadFailure {
    /// The document could not be retrieved.
    Fetch,
    /// The document was retrieved but is not a list of apps.
    Parse,
}

impl LoadFailure {
    /// Classifies a loader error.
    ///
    /// Anything other than a parse failure counts as a fetch failure.
    #[must_use]
    pub const fn from_error(error: &VitrineError) -> Self {
        match error {
            VitrineError::Parse(_) => Self::Parse,
            _ => Self::Fetch,
        }
    }
}

/// Responses sent back to the event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkerResponse {
    /// The catalog was fetched and decoded.
    CatalogLoaded {
        request_id: u64,
        apps: Vec<App>,
        /// Unix timestamp (seconds) of completion.
        loaded_at: i64,
    },

    /// The load failed.
    CatalogFailed {
        request_id: u64,
        kind: LoadFailure,
        /// Technical detail for logs; never shown verbatim to the user.
        message: String,
    },
}

impl WorkerResponse {
    /// Request this response answers.
    #[must_use]
    pub const fn request_id(&self) -> u64 {
        match self {
            Self::CatalogLoaded { request_id, .. } | Self::CatalogFailed { request_id, .. } => *request_id,
        }
    }
}
