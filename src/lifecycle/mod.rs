//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Config → Metrics exporter → Partner adaptor → Engine → Listener → Serve
//!
//! Shutdown (shutdown.rs):
//!     Signal received → broadcast → server drains in-flight requests → Exit
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Trigger graceful shutdown
//! ```
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal before traffic is accepted
//! - Listener binds last

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::Shutdown;
pub use startup::{start, StartupError};
