//! Client for the EmailJS REST API.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use crate::config::EmailJsConfig;
use crate::ui::form::FormPayload;

use super::{Ack, SubmitCapability, SubmitFault};

const SEND_PATH: &str = "/api/v1.0/email/send";

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a FormPayload,
}

/// Sends form payloads through an EmailJS template.
pub struct EmailJsClient {
    client: Client,
    config: EmailJsConfig,
}

impl EmailJsClient {
    pub fn new(config: EmailJsConfig) -> Result<Self, SubmitFault> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| SubmitFault::NotConfigured {
                reason: format!("failed to build HTTP client: {}", e),
            })?;

        Ok(Self { client, config })
    }

    pub fn send_url(&self) -> String {
        format!("{}{}", self.config.endpoint.trim_end_matches('/'), SEND_PATH)
    }

    fn credential<'a>(value: &'a Option<String>, name: &str) -> Result<&'a str, SubmitFault> {
        value
            .as_deref()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| SubmitFault::NotConfigured {
                reason: format!("emailjs.{} is not set", name),
            })
    }
}

#[async_trait]
impl SubmitCapability for EmailJsClient {
    fn name(&self) -> &'static str {
        "emailjs"
    }

    async fn submit(&self, payload: &FormPayload) -> Result<Ack, SubmitFault> {
        let body = SendRequest {
            service_id: Self::credential(&self.config.service_id, "service_id")?,
            template_id: Self::credential(&self.config.template_id, "template_id")?,
            user_id: Self::credential(&self.config.public_key, "public_key")?,
            template_params: payload,
        };

        let url = self.send_url();
        tracing::debug!(url = %url, fields = payload.len(), "Sending contact message");

        let start = Instant::now();
        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SubmitFault::Timeout {
                        duration: self.config.timeout_seconds,
                    }
                } else {
                    SubmitFault::Network {
                        endpoint: url.clone(),
                        source: e,
                    }
                }
            })?;

        let latency_ms = start.elapsed().as_millis() as u64;
        let status = response.status();
        let text = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read response body".to_string());

        if !status.is_success() {
            tracing::error!(
                status = %status,
                error = %text,
                latency_ms,
                "EmailJS API error"
            );
            return Err(SubmitFault::Rejected {
                status: status.as_u16(),
                message: text,
            });
        }

        tracing::info!(latency_ms, "Contact message delivered");
        Ok(Ack { detail: text })
    }
}
