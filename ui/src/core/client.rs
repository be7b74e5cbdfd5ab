//! HTTP client for the remote scoring service.

use futures::future::{self, Either};
use futures::pin_mut;
use reqwest::Client;

use super::config::ServiceConfig;
use super::error::SubmitError;
use super::record::TransactionRecord;
use super::timing;
use super::verdict::Verdict;

/// Placeholder shown when an error response's body cannot be read.
pub const UNREADABLE_BODY: &str = "Unknown error";

#[derive(Debug, Clone)]
pub struct ScoringClient {
    http: Client,
    config: ServiceConfig,
}

impl ScoringClient {
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// POST `record` and wait for a verdict, at most `timeout_ms`.
    ///
    /// On expiry the request future is dropped, which aborts the call; its
    /// late completion can never be observed.
    pub async fn score(&self, record: &TransactionRecord) -> Result<Verdict, SubmitError> {
        let call = self.post(record);
        let deadline = timing::sleep_ms(self.config.timeout_ms);
        pin_mut!(call);
        pin_mut!(deadline);

        match future::select(call, deadline).await {
            Either::Left((outcome, _)) => outcome,
            Either::Right(((), _)) => {
                tracing::warn!(
                    endpoint = %self.config.endpoint,
                    timeout_ms = self.config.timeout_ms,
                    "scoring request timed out"
                );
                Err(SubmitError::Timeout)
            }
        }
    }

    async fn post(&self, record: &TransactionRecord) -> Result<Verdict, SubmitError> {
        tracing::debug!(endpoint = %self.config.endpoint, ?record, "sending scoring request");

        let response = self
            .http
            .post(&self.config.endpoint)
            .json(record)
            .send()
            .await
            .map_err(classify)?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| UNREADABLE_BODY.to_string());
            tracing::warn!(status = status.as_u16(), "scoring service rejected request");
            return Err(SubmitError::Service {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await.map_err(classify)?;
        Verdict::from_body(&body).map_err(|detail| {
            tracing::warn!(status = status.as_u16(), %detail, "malformed verdict");
            SubmitError::InvalidVerdict {
                status: status.as_u16(),
                detail,
            }
        })
    }
}

fn classify(err: reqwest::Error) -> SubmitError {
    if err.is_timeout() {
        SubmitError::Timeout
    } else if is_network(&err) {
        tracing::warn!(error = %err, "network failure reaching scoring service");
        SubmitError::Network
    } else {
        tracing::error!(error = %err, "unexpected scoring request failure");
        SubmitError::Unexpected(err.to_string())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn is_network(err: &reqwest::Error) -> bool {
    err.is_connect() || err.is_request()
}

// Browsers report fetch failures without connect detail.
#[cfg(target_arch = "wasm32")]
fn is_network(err: &reqwest::Error) -> bool {
    err.is_request()
}
