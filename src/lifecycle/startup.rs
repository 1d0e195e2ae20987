//! Startup orchestration.

use std::net::SocketAddr;
use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::ServiceConfig;
use crate::http::{HttpServer, ServerError};
use crate::lifecycle::Shutdown;
use crate::observability::metrics;

/// Fatal errors raised before or while serving.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Server(#[from] ServerError),
}

/// Build every subsystem from `config` and serve until `shutdown` fires.
pub async fn start(config: ServiceConfig, shutdown: &Shutdown) -> Result<(), StartupError> {
    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse::<SocketAddr>() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let bind_address = config.listener.bind_address.clone();
    let server = HttpServer::new(config)?;

    let listener = TcpListener::bind(&bind_address)
        .await
        .map_err(|source| StartupError::Bind {
            address: bind_address.clone(),
            source,
        })?;

    server.run(listener, shutdown.subscribe()).await?;
    Ok(())
}
