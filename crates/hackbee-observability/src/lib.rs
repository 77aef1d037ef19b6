//! Structured logging for the HackBee client.
//!
//! This crate provides:
//! - `StructuredLogger` - Component-scoped structured logger
//! - `LogBuilder` - Fluent API for attaching fields to an entry
//! - `LogSink` - Where entries go (stderr, `tracing`, or memory for tests)

mod logging;

pub use logging::*;
