//! In-memory analytics provider for testing and single-process use
//!
//! `MemoryProvider` records every call it receives so tests can assert
//! on delivered events, screens, and user context.

use crate::error::{AnalyticsError, Result};
use crate::provider::AnalyticsProvider;
use crate::types::{AnalyticsEvent, Params, ProviderConfig, UserProperties};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Recognized config key bounding how many events are retained.
const CAPACITY_KEY: &str = "capacity";

#[derive(Default)]
struct MemoryState {
    configured: bool,
    capacity: Option<usize>,
    events: Vec<AnalyticsEvent>,
    screens: Vec<(String, Option<Params>)>,
    user_id: Option<String>,
    user_properties: UserProperties,
}

/// In-memory provider that records all calls
///
/// Recognized configuration options:
/// - `"capacity"` (unsigned integer, optional) — maximum number of
///   retained events; the oldest are dropped first. Any other value
///   type for this key is malformed and fails `configure`.
pub struct MemoryProvider {
    id: String,
    state: Arc<RwLock<MemoryState>>,
}

impl MemoryProvider {
    /// Create a new memory provider with the given identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            state: Arc::new(RwLock::new(MemoryState::default())),
        }
    }

    /// True once `configure` has succeeded
    pub async fn configured(&self) -> bool {
        self.state.read().await.configured
    }

    /// All recorded events, oldest first
    pub async fn events(&self) -> Vec<AnalyticsEvent> {
        self.state.read().await.events.clone()
    }

    /// Number of recorded events
    pub async fn event_count(&self) -> usize {
        self.state.read().await.events.len()
    }

    /// All recorded screen views, oldest first
    pub async fn screens(&self) -> Vec<(String, Option<Params>)> {
        self.state.read().await.screens.clone()
    }

    /// Current user identifier
    pub async fn user_id(&self) -> Option<String> {
        self.state.read().await.user_id.clone()
    }

    /// Current user properties
    pub async fn user_properties(&self) -> UserProperties {
        self.state.read().await.user_properties.clone()
    }
}

#[async_trait]
impl AnalyticsProvider for MemoryProvider {
    fn id(&self) -> &str {
        &self.id
    }

    async fn configure(&self, config: &ProviderConfig) -> Result<()> {
        // Validate before touching state: a failed configure retains nothing.
        let capacity = match config.get(CAPACITY_KEY) {
            None => None,
            Some(value) => match value.as_u64() {
                Some(n) => Some(n as usize),
                None => {
                    return Err(AnalyticsError::Config {
                        provider: self.id.clone(),
                        reason: format!("option '{}' must be an unsigned integer", CAPACITY_KEY),
                    });
                }
            },
        };

        let mut state = self.state.write().await;
        state.capacity = capacity;
        state.configured = true;
        Ok(())
    }

    async fn track(&self, event: &AnalyticsEvent) {
        let mut state = self.state.write().await;
        state.events.push(event.clone());

        if let Some(capacity) = state.capacity {
            if state.events.len() > capacity {
                let drain_count = state.events.len() - capacity;
                state.events.drain(..drain_count);
            }
        }
    }

    async fn set_user_id(&self, user_id: Option<&str>) {
        let mut state = self.state.write().await;
        state.user_id = user_id.map(str::to_string);
    }

    async fn set_user_properties(&self, properties: &UserProperties) {
        let mut state = self.state.write().await;
        state.user_properties = properties.clone();
    }

    async fn reset(&self) {
        let mut state = self.state.write().await;
        state.user_id = None;
        state.user_properties = UserProperties::new();
    }

    async fn track_screen(&self, name: &str, parameters: Option<&Params>) {
        let mut state = self.state.write().await;
        state.screens.push((name.to_string(), parameters.cloned()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_configure_defaults() {
        let provider = MemoryProvider::new("memory");
        assert!(!provider.configured().await);

        provider.configure(&ProviderConfig::default()).await.unwrap();
        assert!(provider.configured().await);
    }

    #[tokio::test]
    async fn test_configure_rejects_malformed_capacity() {
        let provider = MemoryProvider::new("memory");
        let config = ProviderConfig::new().with("capacity", "lots");

        let err = provider.configure(&config).await.unwrap_err();
        assert!(matches!(err, AnalyticsError::Config { .. }));
        // Nothing retained from the failed configure
        assert!(!provider.configured().await);
    }

    #[tokio::test]
    async fn test_track_records_events() {
        let provider = MemoryProvider::new("memory");
        provider.configure(&ProviderConfig::default()).await.unwrap();

        provider.track(&AnalyticsEvent::new("a")).await;
        provider.track(&AnalyticsEvent::new("b")).await;

        let events = provider.events().await;
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].name, "a");
        assert_eq!(events[1].name, "b");
    }

    #[tokio::test]
    async fn test_capacity_drops_oldest() {
        let provider = MemoryProvider::new("memory");
        let config = ProviderConfig::new().with("capacity", 2);
        provider.configure(&config).await.unwrap();

        for name in ["a", "b", "c"] {
            provider.track(&AnalyticsEvent::new(name)).await;
        }

        let events = provider.events().await;
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].name, "b");
        assert_eq!(events[1].name, "c");
    }

    #[tokio::test]
    async fn test_user_context_and_reset() {
        let provider = MemoryProvider::new("memory");
        provider.configure(&ProviderConfig::default()).await.unwrap();

        provider.set_user_id(Some("u-1")).await;
        provider
            .set_user_properties(&UserProperties::new().with("plan", "pro"))
            .await;

        assert_eq!(provider.user_id().await.as_deref(), Some("u-1"));
        assert_eq!(provider.user_properties().await.get("plan").unwrap(), "pro");

        provider.reset().await;
        assert!(provider.user_id().await.is_none());
        assert!(provider.user_properties().await.is_empty());

        // Events survive a reset; only user context is cleared
        provider.track(&AnalyticsEvent::new("after_reset")).await;
        assert_eq!(provider.event_count().await, 1);
    }

    #[tokio::test]
    async fn test_track_screen_records() {
        let provider = MemoryProvider::new("memory");
        provider.configure(&ProviderConfig::default()).await.unwrap();

        provider.track_screen("Home", None).await;
        let mut params = Params::new();
        params.insert("tab".to_string(), serde_json::json!("settings"));
        provider.track_screen("Settings", Some(&params)).await;

        let screens = provider.screens().await;
        assert_eq!(screens.len(), 2);
        assert_eq!(screens[0].0, "Home");
        assert!(screens[0].1.is_none());
        assert_eq!(screens[1].1.as_ref().unwrap()["tab"], "settings");
    }
}
