//! Configuration validation.
//!
//! Returns every problem found, not just the first.

use std::fmt;
use std::net::SocketAddr;

use crate::config::schema::ServiceConfig;
use crate::money::Currency;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending field.
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Check a deserialized configuration for semantic errors.
pub fn validate_config(config: &ServiceConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::new(
            "listener.bind_address",
            format!("'{}' is not a socket address", config.listener.bind_address),
        ));
    }

    match url::Url::parse(&config.partner.base_url) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {}
        Ok(url) => errors.push(ValidationError::new(
            "partner.base_url",
            format!("unsupported scheme '{}'", url.scheme()),
        )),
        Err(e) => errors.push(ValidationError::new(
            "partner.base_url",
            format!("'{}': {}", config.partner.base_url, e),
        )),
    }

    if config.partner.timeout_ms == 0 {
        errors.push(ValidationError::new("partner.timeout_ms", "must be greater than 0"));
    }

    if config.partner.deadline_ms == 0 {
        errors.push(ValidationError::new("partner.deadline_ms", "must be greater than 0"));
    }

    // The last attempt may start just before the deadline and then run for a
    // full per-attempt timeout while its body is read.
    let partner_worst_ms = config.partner.deadline_ms.saturating_add(config.partner.timeout_ms);
    if config.timeouts.request_secs > 0
        && partner_worst_ms >= config.timeouts.request_secs.saturating_mul(1000)
    {
        errors.push(ValidationError::new(
            "partner.deadline_ms",
            format!(
                "deadline_ms + timeout_ms ({} ms) must be below timeouts.request_secs ({} s)",
                partner_worst_ms, config.timeouts.request_secs
            ),
        ));
    }

    if let Err(e) = Currency::new(config.pricing.budget_currency.clone()) {
        errors.push(ValidationError::new("pricing.budget_currency", e.to_string()));
    }

    if config.retries.max_attempts == 0 {
        errors.push(ValidationError::new("retries.max_attempts", "must be at least 1"));
    }

    if config.retries.base_delay_ms > config.retries.max_delay_ms {
        errors.push(ValidationError::new(
            "retries.base_delay_ms",
            "must not exceed retries.max_delay_ms",
        ));
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::new("timeouts.request_secs", "must be greater than 0"));
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::new(
            "observability.metrics_address",
            format!("'{}' is not a socket address", config.observability.metrics_address),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
