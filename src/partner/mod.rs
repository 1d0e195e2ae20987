//! Partner availability subsystem.
//!
//! # Data Flow
//! ```text
//! RecommendationEngine
//!     → AvailabilitySource::get_availability (trait seam)
//!     → adaptor.rs (build /partnerships URL, decode body into offers)
//!     → client.rs (HTTP GET with timeout, retries with backoff)
//!     → partner API
//! ```
//!
//! # Design Decisions
//! - The engine only sees the trait; transport details stay here
//! - Retries live in the transport, never in the engine
//! - `stub.rs` provides an in-memory source for tests and local runs

pub mod adaptor;
pub mod client;
pub mod stub;
pub mod types;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::recommendation::Offer;

pub use adaptor::PartnershipAdaptor;
pub use client::PartnerClient;
pub use stub::StaticAvailability;

/// Errors that can occur while fetching availability.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AvailabilityError {
    /// Connection or protocol failure after the retry budget was spent.
    #[error("call to partner api failed: {0}")]
    Transport(String),

    /// Every attempt timed out.
    #[error("partner request timed out after {attempts} attempts")]
    Timeout { attempts: u32 },

    /// Partner answered with a non-200 status.
    #[error("bad response from partnerships: {0}")]
    Status(u16),

    /// Partner body could not be decoded.
    #[error("could not decode the response body of partnerships: {0}")]
    Decode(String),

    /// Adaptor or client could not be built.
    #[error("invalid partner configuration: {0}")]
    Config(String),

    /// Any other failure reported by a source.
    #[error("{0}")]
    Other(String),
}

impl AvailabilityError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, AvailabilityError::Timeout { .. })
    }
}

/// A source of hotel offers for a trip window and location.
#[async_trait]
pub trait AvailabilitySource: Send + Sync {
    async fn get_availability(
        &self,
        trip_start: DateTime<Utc>,
        trip_end: DateTime<Utc>,
        location: &str,
    ) -> Result<Vec<Offer>, AvailabilityError>;
}
