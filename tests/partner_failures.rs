//! Failure injection against the partner transport.

use reqwest::StatusCode;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

mod common;

fn counting_backend_fn(
    calls: Arc<AtomicU32>,
    respond: impl Fn(u32) -> (u16, String) + Send + Sync + 'static,
) -> impl Fn(String) -> std::future::Ready<(u16, String)> + Send + Sync + 'static {
    move |_| {
        let count = calls.fetch_add(1, Ordering::SeqCst);
        std::future::ready(respond(count))
    }
}

#[tokio::test]
async fn test_retry_on_partner_failure() {
    let calls = Arc::new(AtomicU32::new(0));
    let partner = common::start_programmable_backend(counting_backend_fn(calls.clone(), |count| {
        if count < 2 {
            (503, "{}".into())
        } else {
            (200, common::DEFAULT_PARTNER_BODY.into())
        }
    }))
    .await;

    let (addr, shutdown) = common::start_service(common::test_config(partner)).await;

    let res = common::client()
        .get(common::recommendation_url(addr, "UK", 100))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK, "should succeed after retries");
    assert_eq!(calls.load(Ordering::SeqCst), 3);

    shutdown.trigger();
}

#[tokio::test]
async fn test_retries_are_bounded() {
    let calls = Arc::new(AtomicU32::new(0));
    let partner = common::start_programmable_backend(counting_backend_fn(calls.clone(), |_| {
        (500, "{}".into())
    }))
    .await;

    let (addr, shutdown) = common::start_service(common::test_config(partner)).await;

    let res = common::client()
        .get(common::recommendation_url(addr, "UK", 100))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(res.text().await.unwrap(), "error getting availability: bad response from partnerships: 500");
    assert_eq!(calls.load(Ordering::SeqCst), 3);

    shutdown.trigger();
}

#[tokio::test]
async fn test_client_errors_are_not_retried() {
    let calls = Arc::new(AtomicU32::new(0));
    let partner = common::start_programmable_backend(counting_backend_fn(calls.clone(), |_| {
        (400, "{}".into())
    }))
    .await;

    let (addr, shutdown) = common::start_service(common::test_config(partner)).await;

    let res = common::client()
        .get(common::recommendation_url(addr, "UK", 100))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    shutdown.trigger();
}

#[tokio::test]
async fn test_unreachable_partner() {
    // Grab a free port, then close it so nothing is listening there.
    let closed: SocketAddr = {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap()
    };

    let mut config = common::test_config(closed);
    config.retries.max_attempts = 2;
    let (addr, shutdown) = common::start_service(config).await;

    let res = common::client()
        .get(common::recommendation_url(addr, "UK", 100))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_GATEWAY);
    let text = res.text().await.unwrap();
    assert!(text.starts_with("error getting availability: call to partner api failed"), "{}", text);

    shutdown.trigger();
}

#[tokio::test]
async fn test_partner_timeout_is_gateway_timeout() {
    let partner = common::start_programmable_backend(|_| async {
        tokio::time::sleep(Duration::from_millis(500)).await;
        (200, common::DEFAULT_PARTNER_BODY.to_string())
    })
    .await;

    let mut config = common::test_config(partner);
    config.partner.timeout_ms = 100;
    config.retries.max_attempts = 2;
    let (addr, shutdown) = common::start_service(config).await;

    let res = common::client()
        .get(common::recommendation_url(addr, "UK", 100))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::GATEWAY_TIMEOUT);
    assert_eq!(
        res.text().await.unwrap(),
        "error getting availability: partner request timed out after 2 attempts"
    );

    shutdown.trigger();
}

#[tokio::test]
async fn test_hung_partner_answers_before_request_timeout() {
    let partner = common::start_programmable_backend(|_| async {
        tokio::time::sleep(Duration::from_secs(5)).await;
        (200, common::DEFAULT_PARTNER_BODY.to_string())
    })
    .await;

    let mut config = common::test_config(partner);
    config.timeouts.request_secs = 1;
    config.partner.timeout_ms = 400;
    config.partner.deadline_ms = 500;
    config.retries.max_attempts = 4;
    assert!(hotel_recommender::config::validation::validate_config(&config).is_ok());
    let (addr, shutdown) = common::start_service(config).await;

    let res = common::client()
        .get(common::recommendation_url(addr, "UK", 100))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::GATEWAY_TIMEOUT);
    let text = res.text().await.unwrap();
    assert!(
        text.starts_with("error getting availability: partner request timed out after"),
        "{}",
        text
    );

    shutdown.trigger();
}
