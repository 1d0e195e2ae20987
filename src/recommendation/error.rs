//! Recommendation error taxonomy.

use thiserror::Error;

use crate::money::MoneyError;
use crate::partner::AvailabilityError;

/// Errors that can occur while producing a recommendation.
#[derive(Debug, Error)]
pub enum RecommendationError {
    /// Caller supplied a missing or inconsistent trip window or location.
    #[error("{0}")]
    Validation(&'static str),

    /// The availability source failed.
    #[error("error getting availability: {0}")]
    Upstream(#[source] AvailabilityError),

    /// No offer fits the budget.
    #[error("no trips within budget")]
    NoResult,

    /// An offer and the budget are in different currencies.
    #[error("cannot compare offer with budget: {0}")]
    Currency(#[from] MoneyError),
}

impl RecommendationError {
    pub fn is_validation(&self) -> bool {
        matches!(self, RecommendationError::Validation(_))
    }
}

/// Result type for recommendation operations.
pub type RecommendationResult<T> = Result<T, RecommendationError>;
