//! Diagnostics emitted while resolving images
//!
//! Warnings and informational notes travel through an explicit sink instead
//! of a process-wide printer. Sinks observe; they never change results.

mod handler;
mod logging;

pub use handler::{CollectingSink, DiagnosticEvent, DiagnosticSink, NoOpSink, Severity};
pub use logging::LoggingSink;
