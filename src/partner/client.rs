//! HTTP transport for the partner API.
//!
//! # Responsibilities
//! - Issue GET requests with a per-attempt timeout
//! - Retry connection errors, timeouts, 429 and 5xx with backoff
//! - Give up after `max_attempts` or the overall deadline and report the
//!   last outcome

use reqwest::{Client, Response};
use std::time::Duration;
use tokio::time::Instant;
use url::Url;

use crate::config::{PartnerConfig, RetryConfig};
use crate::observability::metrics;
use crate::partner::AvailabilityError;
use crate::resilience::backoff::calculate_backoff;
use crate::resilience::retries::{is_retryable_error, is_retryable_status};

/// Retrying HTTP client for partner calls.
#[derive(Clone)]
pub struct PartnerClient {
    http: Client,
    retry: RetryConfig,
    deadline: Duration,
}

impl PartnerClient {
    /// Build a client from partner and retry settings.
    pub fn new(partner: &PartnerConfig, retry: RetryConfig) -> Result<Self, AvailabilityError> {
        let http = Client::builder()
            .timeout(Duration::from_millis(partner.timeout_ms))
            .build()
            .map_err(|e| AvailabilityError::Config(e.to_string()))?;

        Ok(Self {
            http,
            retry,
            deadline: Duration::from_millis(partner.deadline_ms),
        })
    }

    /// GET `url`, retrying transient failures until attempts or the
    /// deadline run out.
    ///
    /// A non-retryable status, or a retryable one when no retry is left, is
    /// returned as `Ok` so the caller can inspect it.
    pub async fn get(&self, url: &Url) -> Result<Response, AvailabilityError> {
        let max_attempts = self.retry.max_attempts.max(1);
        let deadline = Instant::now() + self.deadline;
        let mut attempts = 0;

        loop {
            attempts += 1;

            let sent = tokio::time::timeout_at(deadline, self.http.get(url.clone()).send()).await;
            let Ok(result) = sent else {
                tracing::warn!(attempt = attempts, "Partner deadline exceeded");
                return Err(fail(AvailabilityError::Timeout { attempts }));
            };

            match result {
                Ok(response) => {
                    let status = response.status();
                    if attempts < max_attempts
                        && is_retryable_status(status)
                        && self.pause(attempts, deadline, &format!("status {}", status)).await
                    {
                        continue;
                    }

                    metrics::record_partner_response(status.as_u16());
                    return Ok(response);
                }
                Err(e) => {
                    tracing::warn!(attempt = attempts, error = %e, "Partner request failed");

                    if attempts < max_attempts
                        && is_retryable_error(&e)
                        && self.pause(attempts, deadline, "transport error").await
                    {
                        continue;
                    }

                    if e.is_timeout() {
                        return Err(fail(AvailabilityError::Timeout { attempts }));
                    }
                    return Err(fail(AvailabilityError::Transport(e.to_string())));
                }
            }
        }
    }

    /// Sleep before the next attempt. False when the backoff would run past
    /// `deadline`.
    async fn pause(&self, attempt: u32, deadline: Instant, reason: &str) -> bool {
        let delay = calculate_backoff(attempt, self.retry.base_delay_ms, self.retry.max_delay_ms);
        if Instant::now() + delay >= deadline {
            tracing::info!(attempt, reason, "No time left to retry partner request");
            return false;
        }

        tracing::info!(attempt, delay = ?delay, reason, "Retrying partner request");
        metrics::record_partner_retry();
        tokio::time::sleep(delay).await;
        true
    }
}

fn fail(error: AvailabilityError) -> AvailabilityError {
    metrics::record_partner_failure(&error);
    error
}
