//! The analytics hub — provider registry and dispatch coordinator
//!
//! `AnalyticsHub` owns the ordered provider registry and fans calls out
//! to every (or a selected subset of) registered providers. Callers
//! never learn which backends are active: every operation is
//! fire-and-forget, and soft failures go to the diagnostics sink.
//!
//! Concurrency discipline: a readers-writer lock guards the registry.
//! Registration and removal take the write lock — `configure` runs
//! under it, so a provider becomes visible to dispatch only after its
//! configuration has succeeded, and never half-registered. Dispatch
//! takes the read lock just long enough to clone a snapshot of the
//! provider list, then delivers outside the lock; within one broadcast
//! the per-provider calls are unordered relative to each other.

use crate::diagnostics::{Diagnostic, DiagnosticSink, LogSink};
use crate::provider::AnalyticsProvider;
use crate::types::{AnalyticsEvent, Params, ProviderConfig, UserProperties};
use futures::future::join_all;
use std::sync::Arc;
use tokio::sync::RwLock;

struct Registration {
    id: String,
    provider: Arc<dyn AnalyticsProvider>,
}

#[derive(Default)]
struct Registry {
    /// Registration order is preserved; identifiers are unique.
    entries: Vec<Registration>,

    /// One-way latch: set on the first successful registration and
    /// never cleared, even when the registry later becomes empty.
    ever_registered: bool,
}

impl Registry {
    fn contains(&self, id: &str) -> bool {
        self.entries.iter().any(|entry| entry.id == id)
    }

    fn snapshot(&self) -> Vec<Arc<dyn AnalyticsProvider>> {
        self.entries
            .iter()
            .map(|entry| Arc::clone(&entry.provider))
            .collect()
    }
}

/// Provider registry and dispatch coordinator
///
/// The hosting application constructs one hub (typically in an `Arc`)
/// at startup and shares it with all call sites; the hub lives for the
/// process lifetime and holds no persistent state.
pub struct AnalyticsHub {
    registry: RwLock<Registry>,
    diagnostics: Arc<dyn DiagnosticSink>,
}

impl Default for AnalyticsHub {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalyticsHub {
    /// Create a hub that logs diagnostics via `tracing`
    pub fn new() -> Self {
        Self::with_diagnostics(Arc::new(LogSink))
    }

    /// Create a hub with a custom diagnostic sink
    pub fn with_diagnostics(diagnostics: Arc<dyn DiagnosticSink>) -> Self {
        Self {
            registry: RwLock::new(Registry::default()),
            diagnostics,
        }
    }

    /// Register a provider, configuring it first
    ///
    /// If the provider's identifier is already registered, this is a
    /// no-op reported as `Diagnostic::DuplicateProvider` — the existing
    /// record is untouched and `configure` is not called. If
    /// `configure` fails, the provider is not inserted and the failure
    /// is reported as `Diagnostic::ConfigurationFailed`.
    ///
    /// The whole check-configure-insert sequence holds the registry
    /// write lock, so no dispatch ever observes a half-registered
    /// provider and concurrent registrations cannot race.
    pub async fn register(&self, provider: Arc<dyn AnalyticsProvider>, config: &ProviderConfig) {
        let mut registry = self.registry.write().await;
        let id = provider.id().to_string();

        if registry.contains(&id) {
            self.diagnostics.report(Diagnostic::DuplicateProvider { id });
            return;
        }

        if let Err(e) = provider.configure(config).await {
            self.diagnostics.report(Diagnostic::ConfigurationFailed {
                id,
                reason: e.to_string(),
            });
            return;
        }

        tracing::debug!(provider = %id, "Provider registered");
        registry.entries.push(Registration { id, provider });
        registry.ever_registered = true;
    }

    /// Register several providers with the same config
    ///
    /// Each registration is independent: one provider's rejected
    /// configuration never blocks the others.
    pub async fn setup(&self, providers: Vec<Arc<dyn AnalyticsProvider>>, config: &ProviderConfig) {
        for provider in providers {
            self.register(provider, config).await;
        }
    }

    /// Remove a provider by identifier; no-op if not registered
    ///
    /// The "ever registered" latch is not cleared.
    pub async fn unregister(&self, id: &str) {
        let mut registry = self.registry.write().await;
        let before = registry.entries.len();
        registry.entries.retain(|entry| entry.id != id);

        if registry.entries.len() < before {
            tracing::debug!(provider = %id, "Provider unregistered");
        }
    }

    /// Identifiers of currently registered providers, in registration order
    ///
    /// Blocks only long enough to obtain a consistent snapshot, bounded
    /// by exclusive operations already queued ahead of it.
    pub async fn provider_ids(&self) -> Vec<String> {
        let registry = self.registry.read().await;
        registry.entries.iter().map(|entry| entry.id.clone()).collect()
    }

    /// Broadcast one event to every registered provider
    ///
    /// If no provider has ever registered successfully, nothing is
    /// dispatched and `Diagnostic::NotConfigured` is reported. Once the
    /// latch is set it never clears: after the last provider is
    /// unregistered, broadcast silently dispatches to an empty set.
    pub async fn track(&self, event: AnalyticsEvent) {
        let providers = {
            let registry = self.registry.read().await;
            if !registry.ever_registered {
                self.diagnostics.report(Diagnostic::NotConfigured {
                    event: event.name.clone(),
                });
                return;
            }
            registry.snapshot()
        };

        join_all(providers.iter().map(|p| p.track(&event))).await;
    }

    /// Deliver one event to the named providers only
    ///
    /// Identifiers not currently registered are reported once via
    /// `Diagnostic::UnknownTargets`; delivery to the remaining valid
    /// targets still proceeds.
    pub async fn track_to(&self, provider_ids: &[&str], event: AnalyticsEvent) {
        let (providers, unknown) = {
            let registry = self.registry.read().await;

            let providers: Vec<Arc<dyn AnalyticsProvider>> = registry
                .entries
                .iter()
                .filter(|entry| provider_ids.contains(&entry.id.as_str()))
                .map(|entry| Arc::clone(&entry.provider))
                .collect();

            let unknown: Vec<String> = provider_ids
                .iter()
                .filter(|id| !registry.contains(id))
                .map(|id| id.to_string())
                .collect();

            (providers, unknown)
        };

        if !unknown.is_empty() {
            self.diagnostics.report(Diagnostic::UnknownTargets { ids: unknown });
        }

        join_all(providers.iter().map(|p| p.track(&event))).await;
    }

    /// Set or clear the user identifier on every registered provider
    pub async fn set_user_id(&self, user_id: Option<&str>) {
        let providers = self.snapshot().await;
        join_all(providers.iter().map(|p| p.set_user_id(user_id))).await;
    }

    /// Replace the user properties on every registered provider
    pub async fn set_user_properties(&self, properties: &UserProperties) {
        let providers = self.snapshot().await;
        join_all(providers.iter().map(|p| p.set_user_properties(properties))).await;
    }

    /// Record a screen view on every registered provider
    pub async fn track_screen(&self, name: &str, parameters: Option<&Params>) {
        let providers = self.snapshot().await;
        join_all(providers.iter().map(|p| p.track_screen(name, parameters))).await;
    }

    /// Clear user context on every registered provider
    pub async fn reset(&self) {
        let providers = self.snapshot().await;
        join_all(providers.iter().map(|p| p.reset())).await;
    }

    async fn snapshot(&self) -> Vec<Arc<dyn AnalyticsProvider>> {
        self.registry.read().await.snapshot()
    }
}
