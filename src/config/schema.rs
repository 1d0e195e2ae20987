//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the recommendation service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ServiceConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Partner availability API.
    pub partner: PartnerConfig,

    /// Budget interpretation.
    pub pricing: PricingConfig,

    /// Retry policy for partner calls.
    pub retries: RetryConfig,

    /// Inbound request timeouts.
    pub timeouts: TimeoutConfig,

    /// Logging and metrics.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:4040").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:4040".to_string(),
        }
    }
}

/// Partner availability API configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PartnerConfig {
    /// Base URL the `/partnerships` endpoint hangs off.
    pub base_url: String,

    /// Per-attempt timeout in milliseconds.
    pub timeout_ms: u64,

    /// Budget for one availability lookup across all attempts and backoff,
    /// in milliseconds. No attempt starts once it is spent.
    pub deadline_ms: u64,
}

impl Default for PartnerConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3031".to_string(),
            timeout_ms: 5000,
            deadline_ms: 20_000,
        }
    }
}

/// How caller budgets are interpreted.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PricingConfig {
    /// Currency of the `budget` query parameter.
    pub budget_currency: String,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            budget_currency: "USD".to_string(),
        }
    }
}

/// Retry configuration for partner calls.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Total attempts per partner call, including the first one.
    pub max_attempts: u32,

    /// Base delay for exponential backoff in milliseconds.
    pub base_delay_ms: u64,

    /// Maximum delay for exponential backoff in milliseconds.
    pub max_delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 10,
            base_delay_ms: 100,
            max_delay_ms: 2000,
        }
    }
}

/// Timeout configuration for inbound requests.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Total time allowed per inbound request, in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Emit JSON log lines instead of human-readable ones.
    pub json_logs: bool,

    /// Enable the Prometheus metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: false,
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
