//! OpenTelemetry tracer provider exporting spans to a local file.

use super::file_writer::FileWriter;
use super::span_formatter::SpanFormatter;
use futures_util::future::{self, BoxFuture};
use opentelemetry::trace::TraceError;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use std::path::PathBuf;

/// Appends each exported batch to the trace file as one OTLP JSON line.
pub(crate) struct FileSpanExporter {
    writer: FileWriter,
    formatter: SpanFormatter,
    closed: bool,
}

impl FileSpanExporter {
    pub(crate) fn new(file_path: PathBuf, resource: Resource, scope_name: &'static str) -> Self {
        Self {
            writer: FileWriter::new(file_path),
            formatter: SpanFormatter::new(resource, scope_name),
            closed: false,
        }
    }

    fn write_batch(&self, batch: &[SpanData]) -> ExportResult {
        if self.closed {
            return Err(TraceError::from("trace file exporter is closed"));
        }
        let line = self.formatter.format_batch(batch).to_string();
        self.writer
            .write_line(&line)
            .map_err(|e| TraceError::from(format!("failed to write trace file: {e}")))
    }
}

impl SpanExporter for FileSpanExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        Box::pin(future::ready(self.write_batch(&batch)))
    }

    fn shutdown(&mut self) {
        self.closed = true;
    }
}

impl std::fmt::Debug for FileSpanExporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileSpanExporter")
            .field("writer", &self.writer)
            .field("closed", &self.closed)
            .finish_non_exhaustive()
    }
}

/// Builds a tracer provider that exports every finished span straight to
/// `file_path`, without batching.
pub fn create_tracer_provider(file_path: PathBuf, resource: Resource, scope_name: &'static str) -> TracerProvider {
    let exporter = FileSpanExporter::new(file_path, resource.clone(), scope_name);

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}
