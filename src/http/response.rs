//! Response shaping.
//!
//! # Responsibilities
//! - Serialize a recommendation into the public JSON body
//! - Map engine errors to HTTP status codes
//!
//! # Design Decisions
//! - Only caller mistakes map to 400
//! - "Nothing fits the budget" is 404, not a server fault
//! - Partner failures are 502, partner timeouts 504

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::recommendation::{Recommendation, RecommendationError};

/// Body of a successful `GET /recommendation`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResponse {
    pub hotel_name: String,
    pub total_cost: TotalCost,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotalCost {
    /// Minor units.
    pub cost: i64,
    pub currency: String,
}

impl From<&Recommendation> for RecommendationResponse {
    fn from(rec: &Recommendation) -> Self {
        Self {
            hotel_name: rec.hotel_name.clone(),
            total_cost: TotalCost {
                cost: rec.trip_price.amount(),
                currency: rec.trip_price.currency().code().to_string(),
            },
        }
    }
}

/// HTTP status for an engine failure.
pub fn status_for(err: &RecommendationError) -> StatusCode {
    match err {
        RecommendationError::Validation(_) => StatusCode::BAD_REQUEST,
        RecommendationError::NoResult => StatusCode::NOT_FOUND,
        RecommendationError::Upstream(e) if e.is_timeout() => StatusCode::GATEWAY_TIMEOUT,
        RecommendationError::Upstream(_) => StatusCode::BAD_GATEWAY,
        RecommendationError::Currency(_) => StatusCode::BAD_GATEWAY,
    }
}

/// Metric label for an engine failure.
pub fn outcome_label(err: &RecommendationError) -> &'static str {
    match err {
        RecommendationError::Validation(_) => "invalid",
        RecommendationError::NoResult => "no_result",
        RecommendationError::Upstream(_) => "upstream_error",
        RecommendationError::Currency(_) => "currency_mismatch",
    }
}
