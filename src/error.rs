//! Error types for analytics-hub

use thiserror::Error;

/// Errors that can occur in the analytics system
///
/// None of these is ever returned to the caller of a hub operation —
/// the hub surfaces failures through the diagnostics channel instead.
/// Providers return them from `configure`; adapter implementations may
/// also use them internally.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// A provider rejected its configuration
    #[error("Provider '{provider}' configuration failed: {reason}")]
    Config {
        provider: String,
        reason: String,
    },

    /// Provider-specific backend error
    #[error("Provider error: {0}")]
    Provider(String),

    /// Serialization/deserialization failure
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for analytics operations
pub type Result<T> = std::result::Result<T, AnalyticsError>;
