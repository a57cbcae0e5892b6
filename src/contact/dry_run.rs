//! Offline transport that only pretends to send.

use std::time::Duration;

use async_trait::async_trait;

use crate::config::TransportConfig;
use crate::ui::form::FormPayload;

use super::{Ack, SubmitCapability, SubmitFault};

/// Waits for a fixed latency, then succeeds or fails as configured.
pub struct DryRunTransport {
    latency: Duration,
    fail: bool,
}

impl DryRunTransport {
    pub fn new(latency: Duration, fail: bool) -> Self {
        Self { latency, fail }
    }

    pub fn from_config(config: &TransportConfig) -> Self {
        Self::new(
            Duration::from_millis(config.dry_run_latency_ms),
            config.dry_run_fail,
        )
    }
}

#[async_trait]
impl SubmitCapability for DryRunTransport {
    fn name(&self) -> &'static str {
        "dry_run"
    }

    async fn submit(&self, payload: &FormPayload) -> Result<Ack, SubmitFault> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        if self.fail {
            tracing::info!(fields = payload.len(), "Dry run: simulating failure");
            return Err(SubmitFault::Simulated);
        }

        tracing::info!(fields = payload.len(), "Dry run: message not sent");
        Ok(Ack {
            detail: "dry run".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn succeeds_by_default() {
        let transport = DryRunTransport::new(Duration::ZERO, false);
        let ack = transport.submit(&FormPayload::new()).await.unwrap();
        assert_eq!(ack.detail, "dry run");
    }

    #[tokio::test]
    async fn configured_failure() {
        let transport = DryRunTransport::new(Duration::ZERO, true);
        let err = transport.submit(&FormPayload::new()).await.unwrap_err();
        assert!(matches!(err, SubmitFault::Simulated));
    }
}
