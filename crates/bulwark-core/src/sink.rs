use std::sync::{Arc, Mutex};

/// Structured record of an error that was masked from the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorEvent {
    /// A dependency failed
    Infrastructure {
        service: String,
        detail: String,
        path: String,
    },
    /// An error of no known kind
    Unclassified { error: String, path: String },
}

impl ErrorEvent {
    /// Path of the request that produced the error
    pub fn path(&self) -> &str {
        match self {
            Self::Infrastructure { path, .. } | Self::Unclassified { path, .. } => path,
        }
    }
}

/// Destination for error records
///
/// Shared by every request, so implementations must tolerate concurrent
/// calls.
pub trait EventSink: Send + Sync {
    /// Record a single event
    fn record(&self, event: ErrorEvent);
}

/// Sink handle stored in router state
pub type SharedSink = Arc<dyn EventSink>;

/// Sink that emits error-level `tracing` events
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn record(&self, event: ErrorEvent) {
        match event {
            ErrorEvent::Infrastructure { service, detail, path } => {
                tracing::error!(%service, %detail, %path, "infrastructure error");
            }
            ErrorEvent::Unclassified { error, path } => {
                tracing::error!(%error, %path, "unclassified error");
            }
        }
    }
}

/// Sink that keeps every event in memory
///
/// Clones share the same buffer, so one handle can be given to the server
/// while another is inspected.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    events: Arc<Mutex<Vec<ErrorEvent>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events recorded so far
    pub fn events(&self) -> Vec<ErrorEvent> {
        self.events.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Number of events recorded so far
    pub fn len(&self) -> usize {
        self.events.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EventSink for RecordingSink {
    fn record(&self, event: ErrorEvent) {
        self.events.lock().unwrap_or_else(|e| e.into_inner()).push(event);
    }
}
