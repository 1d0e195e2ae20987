//! Local stand-in for the partner availability API.

use axum::{extract::Query, routing::get, Json, Router};
use clap::Parser;
use serde::Deserialize;
use std::net::SocketAddr;

use hotel_recommender::partner::stub::default_offers;
use hotel_recommender::partner::types::{PartnerHotel, PartnershipsResponse};

#[derive(Parser)]
#[command(name = "mock-partner")]
struct Cli {
    #[arg(short, long, default_value = "127.0.0.1:3031")]
    address: SocketAddr,
}

#[derive(Debug, Deserialize)]
struct PartnershipsQuery {
    location: Option<String>,
    from: Option<String>,
    to: Option<String>,
}

async fn partnerships(Query(query): Query<PartnershipsQuery>) -> Json<PartnershipsResponse> {
    tracing::info!(
        location = ?query.location,
        from = ?query.from,
        to = ?query.to,
        "Partnership availability requested"
    );
    let available_hotels = default_offers()
        .into_iter()
        .map(|offer| PartnerHotel {
            name: offer.hotel_name,
            price_in_usd_per_night: offer.price_per_night.amount(),
        })
        .collect();
    Json(PartnershipsResponse { available_hotels })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mock_partner=info".into()),
        )
        .init();

    let cli = Cli::parse();
    let app = Router::new().route("/partnerships", get(partnerships));

    let listener = tokio::net::TcpListener::bind(cli.address).await?;
    tracing::info!(address = %cli.address, "Mock partner listening");
    axum::serve(listener, app).await?;
    Ok(())
}
