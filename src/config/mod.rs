//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML), optional
//!     → loader.rs (read & deserialize)
//!     → validation.rs (semantic checks)
//!     → ServiceConfig (validated, immutable)
//!     → handed to the server and partner adaptor at startup
//! ```
//!
//! # Design Decisions
//! - Config is read once at startup; there is no hot reload
//! - All fields have defaults so an empty file is valid
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{
    ListenerConfig, ObservabilityConfig, PartnerConfig, PricingConfig, RetryConfig,
    ServiceConfig, TimeoutConfig,
};
