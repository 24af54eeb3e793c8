//! Diagnostic sink trait and events

use std::fmt;
use std::sync::Mutex;

/// How loudly an event should be surfaced
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Info,
    Warning,
}

/// Events emitted while matching images to builders
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticEvent {
    /// Image reference could not be parsed (often a templated name)
    UnparseableImage { image: String, error: String },

    /// Image referenced by digest, which cannot be matched to a builder
    DigestIgnored { image: String },

    /// Image paired with exactly one builder
    ImageMatched { image: String, builder: String },

    /// No builder, or more than one, claims the image
    ImageUnresolved { image: String },

    /// Artifact builds from a directory other than the project root
    NonStandardWorkspace { image: String, workspace: String },
}

impl DiagnosticEvent {
    pub fn severity(&self) -> Severity {
        match self {
            Self::UnparseableImage { .. } | Self::DigestIgnored { .. } => Severity::Warning,
            Self::ImageMatched { .. }
            | Self::ImageUnresolved { .. }
            | Self::NonStandardWorkspace { .. } => Severity::Info,
        }
    }
}

impl fmt::Display for DiagnosticEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnparseableImage { image, error } => {
                write!(f, "Couldn't parse image [{}]: {}", image, error)
            }
            Self::DigestIgnored { image } => {
                write!(f, "Ignoring image referenced by digest: [{}]", image)
            }
            Self::ImageMatched { image, builder } => {
                write!(f, "Matched image [{}] to {}", image, builder)
            }
            Self::ImageUnresolved { image } => {
                write!(f, "No unique builder found for image [{}]", image)
            }
            Self::NonStandardWorkspace { workspace, .. } => {
                write!(f, "using non standard workspace: {}", workspace)
            }
        }
    }
}

/// Receives diagnostics; never influences the matching outcome
pub trait DiagnosticSink: Send + Sync {
    fn on_event(&self, event: &DiagnosticEvent);
}

/// Sink that drops every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpSink;

impl DiagnosticSink for NoOpSink {
    fn on_event(&self, _event: &DiagnosticEvent) {}
}

/// Sink that keeps events so the caller can surface them later
#[derive(Debug, Default)]
pub struct CollectingSink {
    events: Mutex<Vec<DiagnosticEvent>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events recorded so far, in emission order
    pub fn events(&self) -> Vec<DiagnosticEvent> {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn warnings(&self) -> Vec<DiagnosticEvent> {
        self.events()
            .into_iter()
            .filter(|e| e.severity() == Severity::Warning)
            .collect()
    }

    pub fn into_events(self) -> Vec<DiagnosticEvent> {
        self.events
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl DiagnosticSink for CollectingSink {
    fn on_event(&self, event: &DiagnosticEvent) {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(event.clone());
    }
}
