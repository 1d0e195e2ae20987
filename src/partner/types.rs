//! Partner API wire format.

use serde::{Deserialize, Serialize};

/// Body of `GET /partnerships`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnershipsResponse {
    pub available_hotels: Vec<PartnerHotel>,
}

/// One hotel in the partner response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartnerHotel {
    pub name: String,
    /// Whole dollars. The partner only quotes USD.
    #[serde(rename = "priceInUSDPerNight")]
    pub price_in_usd_per_night: i64,
}
