//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Handler, engine and partner client produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (counters, histograms via the metrics facade)
//!
//! Consumers:
//!     → stdout (human-readable or JSON lines)
//!     → Prometheus scrape endpoint (optional)
//! ```
//!
//! # Design Decisions
//! - `RUST_LOG` overrides the configured level
//! - Request ID is attached by the HTTP layer and shows up in every span
//! - Metric calls are no-ops until an exporter is installed

pub mod logging;
pub mod metrics;
