//! `GET /recommendation` handler.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::Deserialize;
use std::time::Instant;

use crate::http::response::{outcome_label, status_for, RecommendationResponse};
use crate::http::server::AppState;
use crate::money::{Currency, Money};
use crate::observability::metrics;

/// Date format of the `from` and `to` parameters.
pub const QUERY_DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw query parameters. Everything is optional here so that missing
/// values produce our own 400 instead of an extractor rejection.
#[derive(Debug, Default, Deserialize)]
pub struct RecommendationParams {
    pub location: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub budget: Option<String>,
}

/// Parsed and checked query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationQuery {
    pub location: String,
    pub trip_start: DateTime<Utc>,
    pub trip_end: DateTime<Utc>,
    pub budget: Money,
}

impl RecommendationParams {
    /// Parse into a query, or the reason it is a bad request.
    pub fn parse(&self, budget_currency: &Currency) -> Result<RecommendationQuery, &'static str> {
        let location = match self.location.as_deref() {
            Some(l) if !l.is_empty() => l.to_string(),
            _ => return Err("location cannot be empty"),
        };
        let trip_start = parse_date(self.from.as_deref()).ok_or("from must be a YYYY-MM-DD date")?;
        let trip_end = parse_date(self.to.as_deref()).ok_or("to must be a YYYY-MM-DD date")?;
        let budget = self
            .budget
            .as_deref()
            .and_then(|b| b.parse::<i64>().ok())
            .ok_or("budget must be an integer")?;

        Ok(RecommendationQuery {
            location,
            trip_start,
            trip_end,
            budget: Money::new(budget, budget_currency.clone()),
        })
    }
}

fn parse_date(raw: Option<&str>) -> Option<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(raw?, QUERY_DATE_FORMAT).ok()?;
    Some(date.and_time(NaiveTime::MIN).and_utc())
}

pub async fn get_recommendation(
    State(state): State<AppState>,
    Query(params): Query<RecommendationParams>,
) -> Response {
    let start = Instant::now();

    let query = match params.parse(&state.budget_currency) {
        Ok(q) => q,
        Err(reason) => {
            tracing::debug!(reason, "Rejected recommendation query");
            metrics::record_recommendation("invalid", start);
            return (StatusCode::BAD_REQUEST, reason).into_response();
        }
    };

    let result = state
        .engine
        .get(Some(query.trip_start), Some(query.trip_end), &query.location, &query.budget)
        .await;

    match result {
        Ok(rec) => {
            tracing::info!(
                location = %rec.location,
                hotel = %rec.hotel_name,
                price = %rec.trip_price,
                "Recommendation served"
            );
            metrics::record_recommendation("ok", start);
            (StatusCode::OK, Json(RecommendationResponse::from(&rec))).into_response()
        }
        Err(e) => {
            let status = status_for(&e);
            if status.is_server_error() {
                tracing::error!(error = %e, status = %status, "Recommendation failed");
            } else {
                tracing::info!(error = %e, status = %status, "Recommendation not available");
            }
            metrics::record_recommendation(outcome_label(&e), start);
            (status, e.to_string()).into_response()
        }
    }
}
