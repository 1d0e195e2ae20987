//! Domain types for trips, offers and recommendations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;

/// An available hotel stay returned by the partner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offer {
    /// Hotel identifier as reported by the partner.
    pub hotel_name: String,
    /// Where the hotel is. Compared case-sensitively with the requested location.
    pub location: String,
    /// Price quoted by the partner.
    pub price_per_night: Money,
}

impl Offer {
    pub fn new(hotel_name: impl Into<String>, location: impl Into<String>, price_per_night: Money) -> Self {
        Self {
            hotel_name: hotel_name.into(),
            location: location.into(),
            price_per_night,
        }
    }
}

/// The offer selected for a trip.
///
/// `trip_price` is the partner's `price_per_night` taken as-is. It is not
/// multiplied by the number of nights in the trip window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub trip_start: DateTime<Utc>,
    pub trip_end: DateTime<Utc>,
    pub hotel_name: String,
    pub location: String,
    pub trip_price: Money,
}

impl Recommendation {
    /// Bind a within-budget offer to the caller's trip window.
    pub(crate) fn from_offer(trip_start: DateTime<Utc>, trip_end: DateTime<Utc>, offer: Offer) -> Self {
        Self {
            trip_start,
            trip_end,
            hotel_name: offer.hotel_name,
            location: offer.location,
            trip_price: offer.price_per_night,
        }
    }
}
