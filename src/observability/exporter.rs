//! `SpanExporter` that appends OTLP JSON documents to the rotating trace file.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

use futures_util::future::BoxFuture;
use opentelemetry::trace::TraceError;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use serde_json::Value as Json;

use super::otlp;
use super::rotation::RotatingFile;

/// Writes each exported batch as one line of OTLP JSON.
#[derive(Debug)]
pub struct FileSpanExporter {
    file: RotatingFile,
    resource_attributes: Vec<Json>,
    stopped: AtomicBool,
}

impl FileSpanExporter {
    /// Exporter writing to `file` and tagging batches with `resource`.
    pub fn new(file: RotatingFile, resource: &Resource) -> Self {
        Self {
            file,
            resource_attributes: otlp::resource_attributes(resource),
            stopped: AtomicBool::new(false),
        }
    }

    fn write_batch(&self, batch: &[SpanData]) -> ExportResult {
        if self.stopped.load(Ordering::SeqCst) {
            return Err(TraceError::from("exporter is shut down"));
        }

        let line = otlp::document(&self.resource_attributes, batch).to_string();
        self.file
            .append_line(&line)
            .map_err(|e| TraceError::from(e.to_string()))
    }
}

impl SpanExporter for FileSpanExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        let result = self.write_batch(&batch);
        Box::pin(std::future::ready(result))
    }

    fn shutdown(&mut self) {
        self.stopped.store(true, Ordering::SeqCst);
    }

    fn set_resource(&mut self, resource: &Resource) {
        self.resource_attributes = otlp::resource_attributes(resource);
    }
}

/// Tracer provider exporting every span synchronously to `path`.
///
/// The plugin runs single-threaded inside the WASM sandbox, so the simple
/// (non-batching) span processor is used.
pub fn tracer_provider(path: PathBuf, resource: Resource) -> TracerProvider {
    let exporter = FileSpanExporter::new(RotatingFile::new(path), &resource);

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}
