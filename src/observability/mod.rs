//! OpenTelemetry tracing exported to a local file.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK TracerProvider → FileSpanExporter → flocus-otlp.json
//! ```
//!
//! Spans land in `~/.local/share/zellij/flocus/flocus-otlp.json`, one OTLP
//! JSON document per line. The file rotates at 5 MiB and keeps 2 numbered
//! backups. The filter comes from the `trace_level` option (default `info`).
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`exporter`]: File-backed `SpanExporter` and tracer provider
//! - [`otlp`]: OTLP JSON encoding
//! - [`rotation`]: Size-capped file with numbered backups

pub mod exporter;
pub mod init;
pub mod otlp;
pub mod rotation;

pub use init::init_tracing;
