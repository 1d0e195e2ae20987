//! `AvailabilitySource` backed by the partner `/partnerships` API.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use url::Url;

use crate::money::{Currency, Money};
use crate::partner::client::PartnerClient;
use crate::partner::types::PartnershipsResponse;
use crate::partner::{AvailabilityError, AvailabilitySource};
use crate::recommendation::Offer;

/// Date format the partner expects in `from` / `to`.
pub const PARTNER_DATE_FORMAT: &str = "%Y-%m-%d";

/// Adaptor translating partner responses into offers.
#[derive(Clone)]
pub struct PartnershipAdaptor {
    client: PartnerClient,
    base_url: Url,
}

impl PartnershipAdaptor {
    /// Create an adaptor for the partner at `base_url`.
    pub fn new(client: PartnerClient, base_url: &str) -> Result<Self, AvailabilityError> {
        if base_url.is_empty() {
            return Err(AvailabilityError::Config("base url cannot be empty".into()));
        }

        let base_url = Url::parse(base_url)
            .map_err(|e| AvailabilityError::Config(format!("invalid base url '{}': {}", base_url, e)))?;
        if base_url.cannot_be_a_base() || !matches!(base_url.scheme(), "http" | "https") {
            return Err(AvailabilityError::Config(format!(
                "base url must be an http(s) url, got '{}'",
                base_url
            )));
        }

        Ok(Self { client, base_url })
    }

    /// Full URL of the availability query.
    pub fn partnerships_url(
        &self,
        trip_start: DateTime<Utc>,
        trip_end: DateTime<Utc>,
        location: &str,
    ) -> Result<Url, AvailabilityError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| AvailabilityError::Config("base url cannot hold a path".into()))?
            .pop_if_empty()
            .push("partnerships");
        url.query_pairs_mut()
            .append_pair("location", location)
            .append_pair("from", &trip_start.format(PARTNER_DATE_FORMAT).to_string())
            .append_pair("to", &trip_end.format(PARTNER_DATE_FORMAT).to_string());
        Ok(url)
    }
}

#[async_trait]
impl AvailabilitySource for PartnershipAdaptor {
    async fn get_availability(
        &self,
        trip_start: DateTime<Utc>,
        trip_end: DateTime<Utc>,
        location: &str,
    ) -> Result<Vec<Offer>, AvailabilityError> {
        let url = self.partnerships_url(trip_start, trip_end, location)?;
        tracing::debug!(url = %url, "Querying partner availability");

        let response = self.client.get(&url).await?;
        if response.status() != StatusCode::OK {
            return Err(AvailabilityError::Status(response.status().as_u16()));
        }

        let body: PartnershipsResponse = response
            .json()
            .await
            .map_err(|e| AvailabilityError::Decode(e.to_string()))?;

        Ok(into_offers(body, location))
    }
}

/// Partner hotels become offers at the requested location, priced in USD.
fn into_offers(body: PartnershipsResponse, location: &str) -> Vec<Offer> {
    body.available_hotels
        .into_iter()
        .filter_map(|hotel| {
            if hotel.name.is_empty() {
                tracing::warn!(location, "Skipping partner hotel without a name");
                return None;
            }
            Some(Offer::new(
                hotel.name,
                location,
                Money::new(hotel.price_in_usd_per_night, Currency::usd()),
            ))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PartnerConfig, RetryConfig};
    use crate::partner::types::PartnerHotel;
    use chrono::TimeZone;

    fn client() -> PartnerClient {
        PartnerClient::new(&PartnerConfig::default(), RetryConfig::default()).unwrap()
    }

    #[test]
    fn test_new_rejects_bad_base_urls() {
        assert_eq!(
            PartnershipAdaptor::new(client(), "").err(),
            Some(AvailabilityError::Config("base url cannot be empty".into()))
        );
        assert!(PartnershipAdaptor::new(client(), "not a url").is_err());
        assert!(PartnershipAdaptor::new(client(), "mailto:ops@example.com").is_err());
        assert!(PartnershipAdaptor::new(client(), "http://localhost:3031").is_ok());
    }

    #[test]
    fn test_partnerships_url() {
        let start = Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 5, 3, 0, 0, 0).unwrap();

        let adaptor = PartnershipAdaptor::new(client(), "http://localhost:3031").unwrap();
        let url = adaptor.partnerships_url(start, end, "New York").unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:3031/partnerships?location=New+York&from=2024-05-01&to=2024-05-03"
        );

        let nested = PartnershipAdaptor::new(client(), "http://partner.test/api/").unwrap();
        let url = nested.partnerships_url(start, end, "UK").unwrap();
        assert_eq!(url.path(), "/api/partnerships");
    }

    #[test]
    fn test_into_offers_skips_unnamed_hotels() {
        let body = PartnershipsResponse {
            available_hotels: vec![
                PartnerHotel { name: "test".into(), price_in_usd_per_night: 50 },
                PartnerHotel { name: String::new(), price_in_usd_per_night: 10 },
            ],
        };

        let offers = into_offers(body, "UK");
        assert_eq!(offers, vec![Offer::new("test", "UK", Money::new(50, Currency::usd()))]);
    }
}
