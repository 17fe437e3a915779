//! Delivery of validated contact messages to the external form endpoint.

use async_trait::async_trait;
use reqwest::{header, Client, StatusCode};
use thiserror::Error;

use shared::protocol::ContactMessage;

#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("form endpoint rejected the message with status {status}")]
    EndpointStatus { status: StatusCode },
    #[error("failed to reach the form endpoint: {source}")]
    Network {
        #[from]
        source: reqwest::Error,
    },
    #[error("no form delivery configured")]
    NotConfigured,
}

/// Seam between the form machine and the outside world. The app injects the
/// HTTP implementation; tests inject fakes.
#[async_trait]
pub trait FormDelivery: Send + Sync {
    async fn deliver(&self, message: &ContactMessage) -> Result<(), SubmissionError>;
}

/// POSTs the message as JSON and consumes nothing from the response beyond
/// its status.
pub struct HttpFormDelivery {
    http: Client,
    endpoint: String,
}

impl HttpFormDelivery {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl FormDelivery for HttpFormDelivery {
    async fn deliver(&self, message: &ContactMessage) -> Result<(), SubmissionError> {
        let response = self
            .http
            .post(&self.endpoint)
            .header(header::ACCEPT, "application/json")
            .json(message)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SubmissionError::EndpointStatus { status });
        }
        Ok(())
    }
}

/// Null object for builds without a configured endpoint; reports failure
/// instead of panicking.
#[derive(Debug, Default)]
pub struct MissingFormDelivery;

#[async_trait]
impl FormDelivery for MissingFormDelivery {
    async fn deliver(&self, _message: &ContactMessage) -> Result<(), SubmissionError> {
        tracing::warn!("contact message dropped; no form delivery configured");
        Err(SubmissionError::NotConfigured)
    }
}

#[cfg(test)]
#[path = "tests/delivery_tests.rs"]
mod delivery_tests;
