//! Observability setup for YAAYA: structured logging with optional
//! OpenTelemetry span export.

pub mod tracing_setup;
