//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing, timeout, request ID)
//! - Build the partner adaptor and engine from configuration
//! - Serve until the shutdown signal fires

use axum::{http::StatusCode, routing::get, Router};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::ServiceConfig;
use crate::http::recommendation::get_recommendation;
use crate::http::request::{propagate_request_id_layer, request_span, set_request_id_layer};
use crate::money::{Currency, MoneyError};
use crate::partner::{AvailabilityError, AvailabilitySource, PartnerClient, PartnershipAdaptor};
use crate::recommendation::RecommendationEngine;

/// Errors that prevent the server from starting or serving.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to create partner adaptor: {0}")]
    Partner(#[from] AvailabilityError),

    #[error("invalid budget currency: {0}")]
    Currency(#[from] MoneyError),

    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub engine: RecommendationEngine,
    /// Currency of the `budget` query parameter.
    pub budget_currency: Currency,
}

/// HTTP server for the recommendation service.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
}

impl HttpServer {
    /// Create a server talking to the partner configured in `config`.
    pub fn new(config: ServiceConfig) -> Result<Self, ServerError> {
        let client = PartnerClient::new(&config.partner, config.retries.clone())?;
        let adaptor = PartnershipAdaptor::new(client, &config.partner.base_url)?;
        Self::with_source(config, Arc::new(adaptor))
    }

    /// Create a server on top of an arbitrary availability source.
    pub fn with_source(
        config: ServiceConfig,
        availability: Arc<dyn AvailabilitySource>,
    ) -> Result<Self, ServerError> {
        let state = AppState {
            engine: RecommendationEngine::new(availability),
            budget_currency: Currency::new(config.pricing.budget_currency.clone())?,
        };

        let router = build_router(&config, state);
        Ok(Self { router, config })
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), ServerError> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            partner = %self.config.partner.base_url,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }
}

/// Build the Axum router with all middleware layers.
///
/// Layers wrap outward: the request ID is set before the trace span is
/// created, so the span can carry it. A request that outlives
/// `timeouts.request_secs` is answered with 504.
pub fn build_router(config: &ServiceConfig, state: AppState) -> Router {
    Router::new()
        .route("/recommendation", get(get_recommendation))
        .route("/health", get(|| async { "ok" }))
        .with_state(state)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::GATEWAY_TIMEOUT,
            Duration::from_secs(config.timeouts.request_secs),
        ))
        .layer(propagate_request_id_layer())
        .layer(TraceLayer::new_for_http().make_span_with(request_span))
        .layer(set_request_id_layer())
}
