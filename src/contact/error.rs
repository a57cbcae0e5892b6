//! Failures of a contact submission.

use thiserror::Error;

/// Errors that can occur while delivering a contact message.
#[derive(Debug, Error)]
pub enum SubmitFault {
    /// Transport is missing credentials
    #[error("Contact transport not configured: {reason}")]
    NotConfigured { reason: String },

    /// Request never produced a response
    #[error("Request to '{endpoint}' failed: {source}")]
    Network {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// Request exceeded the configured timeout
    #[error("Request timeout after {duration}s")]
    Timeout { duration: u64 },

    /// Service answered with a non-success status
    #[error("EmailJS rejected the message: {status} - {message}")]
    Rejected { status: u16, message: String },

    /// Simulated failure from the dry-run transport
    #[error("Simulated failure")]
    Simulated,
}

impl SubmitFault {
    /// Short identifier for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            SubmitFault::NotConfigured { .. } => "not_configured",
            SubmitFault::Network { .. } => "network",
            SubmitFault::Timeout { .. } => "timeout",
            SubmitFault::Rejected { .. } => "rejected",
            SubmitFault::Simulated => "simulated",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_message_includes_status() {
        let fault = SubmitFault::Rejected {
            status: 400,
            message: "The template ID is invalid".into(),
        };
        assert_eq!(fault.kind(), "rejected");
        assert!(fault.to_string().contains("400"));
    }

    #[test]
    fn timeout_reports_duration() {
        let fault = SubmitFault::Timeout { duration: 15 };
        assert_eq!(fault.to_string(), "Request timeout after 15s");
    }
}
