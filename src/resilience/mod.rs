//! Resilience helpers for outbound partner calls.
//!
//! # Data Flow
//! ```text
//! Partner request attempt fails:
//!     → retries.rs (is this failure worth another attempt?)
//!     → backoff.rs (how long to wait before it)
//! ```
//!
//! # Design Decisions
//! - Connection errors, timeouts, 429 and 5xx are retryable
//! - Other 4xx never retry; the request will not get better
//! - Jittered backoff prevents synchronized retry bursts

pub mod backoff;
pub mod retries;
