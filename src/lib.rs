//! # analytics-hub
//!
//! Unified analytics event routing across pluggable backend providers.
//!
//! ## Overview
//!
//! `analytics-hub` routes analytics-style events from one calling
//! application to any number of independently configured backend
//! providers (crash, usage, marketing analytics) through a single API.
//! Callers never need to know which or how many backends are active.
//!
//! ## Quick Start
//!
//! ```rust
//! use analytics_hub::{AnalyticsEvent, AnalyticsHub, ProviderConfig};
//! use analytics_hub::provider::memory::MemoryProvider;
//! use std::sync::Arc;
//!
//! # async fn example() {
//! // Create the hub and register a provider
//! let hub = AnalyticsHub::new();
//! hub.register(Arc::new(MemoryProvider::new("memory")), &ProviderConfig::default())
//!     .await;
//!
//! // Broadcast an event to every registered provider
//! hub.track(AnalyticsEvent::new("purchase").with_param("sku", "A1"))
//!     .await;
//! # }
//! ```
//!
//! ## Architecture
//!
//! - **AnalyticsProvider** trait — capability contract all backends implement
//! - **AnalyticsHub** — provider registry plus concurrent dispatch coordinator
//! - **AnalyticsEvent** / **UserProperties** — immutable value types
//! - **DiagnosticSink** — side channel for soft failures; the hub API itself
//!   is fire-and-forget and never returns errors to the caller

pub mod diagnostics;
pub mod error;
pub mod hub;
pub mod provider;
pub mod types;

// Re-export core types
pub use diagnostics::{Diagnostic, DiagnosticSink, LogSink, MemorySink};
pub use error::{AnalyticsError, Result};
pub use hub::AnalyticsHub;
pub use provider::AnalyticsProvider;
pub use types::{AnalyticsEvent, Params, ProviderConfig, UserProperties};

// Re-export the in-memory provider for convenience
pub use provider::memory::MemoryProvider;
