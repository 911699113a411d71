//! Core value types for the analytics system
//!
//! All types use camelCase JSON serialization for wire compatibility.
//! Events, user properties, and provider configs are immutable after
//! construction — build them up front, then hand them to the hub.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Opaque parameter bag attached to events and screens
///
/// Values are tagged JSON values (string, number, boolean, array,
/// nested mapping), so each provider can type-check the subset of
/// keys it recognizes. Insertion order is irrelevant.
pub type Params = HashMap<String, serde_json::Value>;

/// A single analytics event
///
/// Immutable once constructed. Every provider selected for a broadcast
/// receives the same event value.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsEvent {
    /// Event name (non-empty, e.g. "purchase", "signup_completed")
    pub name: String,

    /// Optional event parameters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Params>,

    /// Optional action tag (e.g. "tap", "swipe")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,

    /// Optional extra tag, semantics provider-defined
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<String>,

    /// Unix timestamp in milliseconds, defaults to construction time
    pub timestamp: u64,
}

impl AnalyticsEvent {
    /// Create a new event with the current timestamp and no parameters
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: None,
            action: None,
            extra: None,
            timestamp: now_millis(),
        }
    }

    /// Replace the full parameter bag
    pub fn with_parameters(mut self, parameters: Params) -> Self {
        self.parameters = Some(parameters);
        self
    }

    /// Add a single parameter
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.parameters
            .get_or_insert_with(Params::new)
            .insert(key.into(), value.into());
        self
    }

    /// Set the action tag
    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    /// Set the extra tag
    pub fn with_extra(mut self, extra: impl Into<String>) -> Self {
        self.extra = Some(extra.into());
        self
    }
}

/// User properties propagated to providers
///
/// An opaque string-to-value mapping; the hub never inspects it, each
/// provider interprets the keys it recognizes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserProperties {
    properties: HashMap<String, serde_json::Value>,
}

impl UserProperties {
    /// Create an empty property set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a property
    pub fn with(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Look up a property by key
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.properties.get(key)
    }

    /// Iterate over all properties
    pub fn iter(&self) -> impl Iterator<Item = (&String, &serde_json::Value)> {
        self.properties.iter()
    }

    /// Number of properties
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// True if no properties are set
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

/// Recognized-options mapping handed to `AnalyticsProvider::configure`
///
/// Keys and their effects are entirely provider-defined; the hub passes
/// the config through without inspecting it. Typed accessors let
/// adapters validate the keys they recognize.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProviderConfig {
    options: HashMap<String, serde_json::Value>,
}

impl ProviderConfig {
    /// Create an empty config
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an option
    pub fn with(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    /// Look up a raw option value
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.options.get(key)
    }

    /// Look up a string option
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.options.get(key).and_then(|v| v.as_str())
    }

    /// Look up an unsigned integer option
    pub fn get_u64(&self, key: &str) -> Option<u64> {
        self.options.get(key).and_then(|v| v.as_u64())
    }

    /// Look up a boolean option
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.options.get(key).and_then(|v| v.as_bool())
    }

    /// True if no options are set
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

/// Current time in Unix milliseconds
fn now_millis() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
