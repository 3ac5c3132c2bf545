use std::time::Duration;

use anyhow::{Error, Result, anyhow};
use reqwest::{Client, StatusCode};
use thiserror::Error as ThisError;
use tracing::{debug, info};

use crate::{
    config::Config,
    formatter::{build_sms_message, extract_prefix},
    models::{gateway::OutboundMessage, notification::Notification},
};

#[derive(Debug, ThisError)]
pub enum DeliveryError {
    #[error("non-200 response: {status} - {body}")]
    Status { status: u16, body: String },

    #[error("gateway request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Sends formatted notifications through the Whisper SMS gateway.
///
/// Every call is a single attempt; failures are returned to the caller.
#[derive(Clone)]
pub struct GatewayClient {
    http_client: Client,
    base_url: String,
    token: String,
    device_id: String,
}

impl GatewayClient {
    pub fn new(config: &Config) -> Result<Self, Error> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|_| anyhow!("Failed to create HTTP client"))?;

        info!(base_url = %config.whisper_uri, "Gateway client initialized");

        Ok(Self {
            http_client,
            base_url: config.whisper_uri.clone(),
            token: config.whisper_token.clone(),
            device_id: config.device_id.clone(),
        })
    }

    pub fn build_message(&self, title: &str, notification: &Notification) -> OutboundMessage {
        OutboundMessage {
            device_id: self.device_id.clone(),
            message: build_sms_message(title, notification),
            targets: vec![extract_prefix(notification.requester_email()).to_string()],
        }
    }

    pub async fn send(&self, title: &str, notification: &Notification) -> Result<(), DeliveryError> {
        let request = self.build_message(title, notification);
        let url = format!("{}/api/send", self.base_url);

        debug!(
            title,
            targets = ?request.targets,
            message = %request.message,
            "Sending gateway notification"
        );

        let response = self
            .http_client
            .post(&url)
            .header("X-Api-Token", &self.token)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::OK {
            info!(title, "Gateway notification sent successfully");
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(DeliveryError::Status {
                status: status.as_u16(),
                body,
            })
        }
    }
}
