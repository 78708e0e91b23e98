//! Structured logging for the Sodai storefront.
//!
//! This crate provides:
//! - `ConsoleLayer` - a `tracing` layer that renders events as `LogEntry` records
//! - `LogSink` - where rendered lines go (`ConsoleSink`, `MemorySink`)
//! - `init` - installs the layer as the global subscriber

mod logging;
mod sink;

pub use logging::*;
pub use sink::*;
