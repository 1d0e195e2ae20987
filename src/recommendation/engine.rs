//! Core logic for validating a trip request and selecting the cheapest offer.

use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::money::{Money, MoneyError};
use crate::partner::AvailabilitySource;
use crate::recommendation::error::{RecommendationError, RecommendationResult};
use crate::recommendation::types::{Offer, Recommendation};

/// Engine producing hotel recommendations.
#[derive(Clone)]
pub struct RecommendationEngine {
    availability: Arc<dyn AvailabilitySource>,
}

impl RecommendationEngine {
    /// Create a new engine on top of an availability source.
    pub fn new(availability: Arc<dyn AvailabilitySource>) -> Self {
        Self { availability }
    }

    /// Recommend the cheapest offer within `budget` for the trip.
    ///
    /// Validation runs before any I/O. An absent timestamp is the "empty"
    /// trip bound.
    pub async fn get(
        &self,
        trip_start: Option<DateTime<Utc>>,
        trip_end: Option<DateTime<Utc>>,
        location: &str,
        budget: &Money,
    ) -> RecommendationResult<Recommendation> {
        let (trip_start, trip_end) = validate_trip(trip_start, trip_end, location)?;

        let offers = self
            .availability
            .get_availability(trip_start, trip_end, location)
            .await
            .map_err(RecommendationError::Upstream)?;

        tracing::debug!(location, offers = offers.len(), budget = %budget, "Availability received");

        let offer = select_cheapest(offers, location, budget)?.ok_or(RecommendationError::NoResult)?;

        Ok(Recommendation::from_offer(trip_start, trip_end, offer))
    }
}

fn validate_trip(
    trip_start: Option<DateTime<Utc>>,
    trip_end: Option<DateTime<Utc>>,
    location: &str,
) -> RecommendationResult<(DateTime<Utc>, DateTime<Utc>)> {
    let trip_start = trip_start.ok_or(RecommendationError::Validation("trip start cannot be empty"))?;
    let trip_end = trip_end.ok_or(RecommendationError::Validation("trip end cannot be empty"))?;
    if location.is_empty() {
        return Err(RecommendationError::Validation("location cannot be empty"));
    }
    if trip_end < trip_start {
        return Err(RecommendationError::Validation("trip end cannot be before trip start"));
    }
    Ok((trip_start, trip_end))
}

/// Cheapest offer at `location` priced at or under `budget`.
///
/// Ties keep the earliest offer. Any offer at `location` in a different
/// currency than the budget is an error.
pub fn select_cheapest(
    offers: Vec<Offer>,
    location: &str,
    budget: &Money,
) -> Result<Option<Offer>, MoneyError> {
    let mut best: Option<Offer> = None;

    for offer in offers {
        if offer.location != location {
            continue;
        }
        if !offer.price_per_night.less_than_or_equal(budget)? {
            continue;
        }

        let cheaper = match &best {
            Some(current) => offer.price_per_night.less_than(&current.price_per_night)?,
            None => true,
        };
        if cheaper {
            best = Some(offer);
        }
    }

    Ok(best)
}
