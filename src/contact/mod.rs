//! Delivery of contact form payloads.
//!
//! The form controller never talks to the network itself. It hands a
//! [`SubmitRequest`](crate::ui::form::SubmitRequest) to the runtime, which
//! forwards the payload to a [`SubmitCapability`] and reports the outcome
//! back as an event.

mod dry_run;
mod emailjs;
mod error;

pub use dry_run::DryRunTransport;
pub use emailjs::EmailJsClient;
pub use error::SubmitFault;

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::Config;
use crate::ui::form::FormPayload;

/// Acknowledgement of a delivered message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ack {
    /// Body returned by the service ("OK" for EmailJS).
    pub detail: String,
}

/// Something that can deliver a contact payload.
///
/// Implementations resolve exactly once per call.
#[async_trait]
pub trait SubmitCapability: Send + Sync {
    /// Returns the name of this transport for logging.
    fn name(&self) -> &'static str;

    async fn submit(&self, payload: &FormPayload) -> Result<Ack, SubmitFault>;
}

/// Pick the transport from config.
///
/// Falls back to the dry-run transport when EmailJS credentials are
/// missing so the app stays usable offline.
pub fn build_transport(
    config: &Config,
    force_dry_run: bool,
) -> Result<Arc<dyn SubmitCapability>, SubmitFault> {
    if force_dry_run || config.transport.dry_run {
        return Ok(Arc::new(DryRunTransport::from_config(&config.transport)));
    }

    if !config.emailjs.is_configured() {
        tracing::warn!("EmailJS credentials missing, using dry-run transport");
        return Ok(Arc::new(DryRunTransport::from_config(&config.transport)));
    }

    Ok(Arc::new(EmailJsClient::new(config.emailjs.clone())?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_credentials_fall_back_to_dry_run() {
        let config = Config::default();
        let transport = build_transport(&config, false).unwrap();
        assert_eq!(transport.name(), "dry_run");
    }

    #[test]
    fn configured_credentials_select_emailjs() {
        let mut config = Config::default();
        config.emailjs.service_id = Some("service_x".into());
        config.emailjs.template_id = Some("template_y".into());
        config.emailjs.public_key = Some("key".into());

        assert_eq!(build_transport(&config, false).unwrap().name(), "emailjs");
        assert_eq!(build_transport(&config, true).unwrap().name(), "dry_run");
    }
}
