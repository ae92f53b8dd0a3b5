//! OpenTelemetry-based observability with file-based trace export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → OpenTelemetry SDK → FileSpanExporter → JSON lines
//! ```
//!
//! # Features
//!
//! - **File-Based Export**: spans go to `<data_dir>/vitrine-otlp.json`
//! - **Automatic Rotation**: files rotate at 10MB with 3-backup retention
//! - **OTLP Format**: one OTLP/JSON document per exported batch
//! - **Cross-Thread Traces**: the worker joins the caller's trace through the
//!   context carried in each request
//!
//! # Configuration
//!
//! `RUST_LOG` wins over `VITRINE_TRACE_LEVEL`, which defaults to `info`.
//!
//! # Modules
//!
//! - `init`: subscriber setup
//! - `tracer`: tracer provider with the file exporter
//! - `span_formatter`: OTLP JSON serialization
//! - `file_writer`: size-based rotating writer

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::{init_tracing, TRACE_FILE_NAME};
