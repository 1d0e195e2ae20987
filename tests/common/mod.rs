//! Shared utilities for integration tests.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use hotel_recommender::config::ServiceConfig;
use hotel_recommender::http::HttpServer;
use hotel_recommender::lifecycle::Shutdown;

/// Partner body with the three default hotels.
pub const DEFAULT_PARTNER_BODY: &str = r#"{"availableHotels":[{"name":"test","priceInUSDPerNight":50},{"name":"test2","priceInUSDPerNight":500},{"name":"test3","priceInUSDPerNight":100}]}"#;

/// Start a raw HTTP backend on an ephemeral port.
///
/// `f` receives the request target (path and query) and returns the status
/// code and JSON body to answer with.
pub async fn start_programmable_backend<F, Fut>(f: F) -> SocketAddr
where
    F: Fn(String) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = (u16, String)> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let f = Arc::new(f);

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let f = f.clone();
            tokio::spawn(async move {
                let mut buf = vec![0u8; 8192];
                let n = socket.read(&mut buf).await.unwrap_or(0);
                let head = String::from_utf8_lossy(&buf[..n]).to_string();
                let target = head
                    .lines()
                    .next()
                    .and_then(|line| line.split_whitespace().nth(1))
                    .unwrap_or("/")
                    .to_string();

                let (status, body) = f(target).await;
                let status_text = match status {
                    200 => "200 OK",
                    400 => "400 Bad Request",
                    404 => "404 Not Found",
                    429 => "429 Too Many Requests",
                    500 => "500 Internal Server Error",
                    502 => "502 Bad Gateway",
                    503 => "503 Service Unavailable",
                    _ => "200 OK",
                };

                let response = format!(
                    "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status_text,
                    body.len(),
                    body
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
                tokio::time::sleep(Duration::from_millis(10)).await;
            });
        }
    });

    addr
}

/// Config pointing at `partner` with fast retries.
pub fn test_config(partner: SocketAddr) -> ServiceConfig {
    let mut config = ServiceConfig::default();
    config.listener.bind_address = "127.0.0.1:0".into();
    config.partner.base_url = format!("http://{}", partner);
    config.partner.timeout_ms = 1000;
    config.retries.max_attempts = 3;
    config.retries.base_delay_ms = 10;
    config.retries.max_delay_ms = 50;
    config
}

/// Start the recommender on an ephemeral port.
pub async fn start_service(config: ServiceConfig) -> (SocketAddr, Shutdown) {
    let shutdown = Shutdown::new();
    let server = HttpServer::new(config).expect("server should build");
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    (addr, shutdown)
}

/// Today and tomorrow as `YYYY-MM-DD`.
pub fn trip_dates() -> (String, String) {
    let today = chrono::Utc::now().date_naive();
    let tomorrow = today + chrono::Duration::days(1);
    (
        today.format("%Y-%m-%d").to_string(),
        tomorrow.format("%Y-%m-%d").to_string(),
    )
}

/// Recommendation URL for the service at `addr`.
pub fn recommendation_url(addr: SocketAddr, location: &str, budget: i64) -> String {
    let (from, to) = trip_dates();
    format!(
        "http://{}/recommendation?location={}&from={}&to={}&budget={}",
        addr, location, from, to, budget
    )
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
