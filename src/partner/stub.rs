//! In-memory availability source.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::money::{Currency, Money};
use crate::partner::{AvailabilityError, AvailabilitySource};
use crate::recommendation::Offer;

/// The three offers the mock partner serves for `UK`.
pub fn default_offers() -> Vec<Offer> {
    vec![
        Offer::new("test", "UK", Money::new(50, Currency::usd())),
        Offer::new("test2", "UK", Money::new(500, Currency::usd())),
        Offer::new("test3", "UK", Money::new(100, Currency::usd())),
    ]
}

/// Returns a fixed result for every call and counts the calls.
#[derive(Debug)]
pub struct StaticAvailability {
    result: Result<Vec<Offer>, AvailabilityError>,
    calls: AtomicUsize,
}

impl StaticAvailability {
    pub fn new(offers: Vec<Offer>) -> Self {
        Self {
            result: Ok(offers),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(error: AvailabilityError) -> Self {
        Self {
            result: Err(error),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of `get_availability` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for StaticAvailability {
    fn default() -> Self {
        Self::new(default_offers())
    }
}

#[async_trait]
impl AvailabilitySource for StaticAvailability {
    async fn get_availability(
        &self,
        _trip_start: DateTime<Utc>,
        _trip_end: DateTime<Utc>,
        _location: &str,
    ) -> Result<Vec<Offer>, AvailabilityError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }
}
