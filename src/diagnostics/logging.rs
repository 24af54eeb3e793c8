//! Logging-based diagnostic sink

use super::{DiagnosticEvent, DiagnosticSink};
use tracing::{debug, info, warn};

/// Sink that forwards events to tracing
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingSink;

impl DiagnosticSink for LoggingSink {
    fn on_event(&self, event: &DiagnosticEvent) {
        match event {
            DiagnosticEvent::UnparseableImage { image, error } => {
                warn!(image = %image, error = %error, "Couldn't parse image");
            }
            DiagnosticEvent::DigestIgnored { image } => {
                warn!(image = %image, "Ignoring image referenced by digest");
            }
            DiagnosticEvent::ImageMatched { image, builder } => {
                debug!(image = %image, builder = %builder, "Matched image to builder");
            }
            DiagnosticEvent::ImageUnresolved { image } => {
                debug!(image = %image, "No unique builder for image");
            }
            DiagnosticEvent::NonStandardWorkspace { image, workspace } => {
                info!(image = %image, workspace = %workspace, "Using non standard workspace");
            }
        }
    }
}
