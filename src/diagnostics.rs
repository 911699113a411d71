//! Diagnostics side channel for non-fatal hub conditions
//!
//! Hub operations are fire-and-forget: nothing is returned to the
//! triggering caller. Soft failures (duplicate registration, rejected
//! configuration, unknown dispatch targets, tracking before any
//! registration) are reported here instead.

use std::sync::Mutex;

/// A non-fatal condition observed by the hub
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A provider with this identifier is already registered;
    /// the registration was skipped
    DuplicateProvider { id: String },

    /// A provider's `configure` failed; only that provider was excluded
    ConfigurationFailed { id: String, reason: String },

    /// Targeted dispatch named identifiers that are not currently
    /// registered; delivery to the remaining targets proceeded
    UnknownTargets { ids: Vec<String> },

    /// Broadcast `track` was called before any provider had ever
    /// registered successfully; no dispatch occurred
    NotConfigured { event: String },
}

/// Trait for diagnostic sinks
///
/// Implementations decide what to do with a reported diagnostic:
/// log it, count it, forward it. Reporting must be cheap — it runs
/// inline on the hub's dispatch path.
pub trait DiagnosticSink: Send + Sync {
    /// Handle one diagnostic
    fn report(&self, diagnostic: Diagnostic);
}

/// Default sink that logs every diagnostic via `tracing`
#[derive(Debug, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report(&self, diagnostic: Diagnostic) {
        match diagnostic {
            Diagnostic::DuplicateProvider { id } => {
                tracing::warn!(provider = %id, "Provider already registered, skipping");
            }
            Diagnostic::ConfigurationFailed { id, reason } => {
                tracing::warn!(provider = %id, reason = %reason, "Provider configuration failed");
            }
            Diagnostic::UnknownTargets { ids } => {
                tracing::warn!(targets = ?ids, "Targeted dispatch named unregistered providers");
            }
            Diagnostic::NotConfigured { event } => {
                tracing::warn!(event = %event, "Track called before any provider was registered");
            }
        }
    }
}

/// Recording sink for tests and in-process inspection
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<Diagnostic>>,
}

impl MemorySink {
    /// Create an empty recording sink
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded diagnostics, oldest first
    pub fn records(&self) -> Vec<Diagnostic> {
        match self.records.lock() {
            Ok(records) => records.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Number of recorded diagnostics
    pub fn count(&self) -> usize {
        self.records().len()
    }
}

impl DiagnosticSink for MemorySink {
    fn report(&self, diagnostic: Diagnostic) {
        match self.records.lock() {
            Ok(mut records) => records.push(diagnostic),
            Err(poisoned) => poisoned.into_inner().push(diagnostic),
        }
    }
}
