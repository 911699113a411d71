//! Analytics provider trait — the capability contract for backends
//!
//! Every analytics backend (crash reporting, usage analytics, marketing
//! attribution, in-memory, etc.) implements `AnalyticsProvider` so the
//! hub can route events without knowing which backends are active.

use crate::error::Result;
use crate::types::{AnalyticsEvent, Params, ProviderConfig, UserProperties};
use async_trait::async_trait;

pub mod memory;

/// Core trait for analytics backends
///
/// The hub dispatches every operation through this contract. Apart from
/// `configure`, methods cannot return errors: delivery is best-effort
/// and runtime failures are the provider's own responsibility — the hub
/// neither catches, retries, nor logs them.
#[async_trait]
pub trait AnalyticsProvider: Send + Sync {
    /// Stable non-empty identifier, the sole dispatch and uniqueness key
    fn id(&self) -> &str;

    /// Apply provider-defined configuration options
    ///
    /// Called exactly once by the hub, before the provider becomes
    /// visible to any dispatch. Fails with `AnalyticsError::Config` when
    /// required options are missing or malformed; a failed configure
    /// must leave no partial internal state behind.
    async fn configure(&self, config: &ProviderConfig) -> Result<()>;

    /// Deliver one event, best-effort
    ///
    /// Must not block indefinitely. Every provider selected for a
    /// broadcast receives the same event value.
    async fn track(&self, event: &AnalyticsEvent);

    /// Set or clear the current user identifier
    async fn set_user_id(&self, user_id: Option<&str>);

    /// Replace the provider-held user properties
    async fn set_user_properties(&self, properties: &UserProperties);

    /// Clear all provider-held user context
    async fn reset(&self);

    /// Record a screen view
    ///
    /// Default implementation is a no-op, so providers that don't model
    /// screens need not override it.
    async fn track_screen(&self, name: &str, parameters: Option<&Params>) {
        let _ = (name, parameters);
    }
}
