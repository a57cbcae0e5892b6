use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::content::Portfolio;
use crate::motion::{AnimationVariant, MotionError, VariantSpec};

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub motion: MotionConfig,
    #[serde(default)]
    pub form: FormConfig,
    #[serde(default)]
    pub emailjs: EmailJsConfig,
    #[serde(default)]
    pub transport: TransportConfig,
    #[serde(default)]
    pub content: Portfolio,
}

/// Animation timing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MotionConfig {
    /// Redraw interval in milliseconds (default: 33).
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
    #[serde(default)]
    pub variants: VariantsConfig,
}

/// The four variants every page is built from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariantsConfig {
    /// Page-level container (default stagger: 150ms).
    #[serde(default = "default_section_variant")]
    pub section: VariantSpec,
    /// Grids and lists inside a page (default stagger: 100ms).
    #[serde(default = "default_list_variant")]
    pub list: VariantSpec,
    /// Individual items: fade in while rising two rows over 500ms.
    #[serde(default = "default_item_variant")]
    pub item: VariantSpec,
    /// Form status message: drops in from one row above over 300ms.
    #[serde(default = "default_status_variant")]
    pub status: VariantSpec,
}

/// Validated variants, shared by every scope that uses them.
#[derive(Debug, Clone)]
pub struct MotionVariants {
    pub section: Arc<AnimationVariant>,
    pub list: Arc<AnimationVariant>,
    pub item: Arc<AnimationVariant>,
    pub status: Arc<AnimationVariant>,
}

impl VariantsConfig {
    pub fn build(&self) -> Result<MotionVariants, MotionError> {
        Ok(MotionVariants {
            section: Arc::new(AnimationVariant::from_spec("section", &self.section)?),
            list: Arc::new(AnimationVariant::from_spec("list", &self.list)?),
            item: Arc::new(AnimationVariant::from_spec("item", &self.item)?),
            status: Arc::new(AnimationVariant::from_spec("status", &self.status)?),
        })
    }
}

/// Submission feedback settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormConfig {
    /// Dwell time in `success`/`error` before returning to idle (default: 5000).
    #[serde(default = "default_reset_ms")]
    pub reset_ms: u64,
    #[serde(default = "default_pending_message")]
    pub pending_message: String,
    #[serde(default = "default_success_message")]
    pub success_message: String,
    #[serde(default = "default_failure_message")]
    pub failure_message: String,
}

/// Credentials for the EmailJS REST API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailJsConfig {
    /// API origin (default: "https://api.emailjs.com").
    #[serde(default = "default_emailjs_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub service_id: Option<String>,
    #[serde(default)]
    pub template_id: Option<String>,
    #[serde(default)]
    pub public_key: Option<String>,
    /// Request timeout in seconds (default: 15).
    #[serde(default = "default_emailjs_timeout")]
    pub timeout_seconds: u64,
}

impl EmailJsConfig {
    pub fn is_configured(&self) -> bool {
        [&self.service_id, &self.template_id, &self.public_key]
            .iter()
            .all(|value| value.as_deref().is_some_and(|v| !v.trim().is_empty()))
    }
}

/// Transport selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransportConfig {
    /// Never contact EmailJS; simulate sends locally.
    #[serde(default)]
    pub dry_run: bool,
    /// Simulated send latency in milliseconds (default: 800).
    #[serde(default = "default_dry_run_latency_ms")]
    pub dry_run_latency_ms: u64,
    /// Make simulated sends fail.
    #[serde(default)]
    pub dry_run_fail: bool,
}

fn default_tick_ms() -> u64 {
    33
}

fn default_section_variant() -> VariantSpec {
    VariantSpec::fade_container(150)
}

fn default_list_variant() -> VariantSpec {
    VariantSpec::fade_container(100)
}

fn default_item_variant() -> VariantSpec {
    VariantSpec::rise(2.0, 500)
}

fn default_status_variant() -> VariantSpec {
    VariantSpec::rise(-1.0, 300)
}

fn default_reset_ms() -> u64 {
    5000
}

fn default_pending_message() -> String {
    "Sending, please wait...".to_string()
}

fn default_success_message() -> String {
    "Thank you! Your message has been sent successfully.".to_string()
}

fn default_failure_message() -> String {
    "Failed to send message. Please try again later.".to_string()
}

fn default_emailjs_endpoint() -> String {
    "https://api.emailjs.com".to_string()
}

fn default_emailjs_timeout() -> u64 {
    15
}

fn default_dry_run_latency_ms() -> u64 {
    800
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
            variants: VariantsConfig::default(),
        }
    }
}

impl Default for VariantsConfig {
    fn default() -> Self {
        Self {
            section: default_section_variant(),
            list: default_list_variant(),
            item: default_item_variant(),
            status: default_status_variant(),
        }
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            reset_ms: default_reset_ms(),
            pending_message: default_pending_message(),
            success_message: default_success_message(),
            failure_message: default_failure_message(),
        }
    }
}

impl Default for EmailJsConfig {
    fn default() -> Self {
        Self {
            endpoint: default_emailjs_endpoint(),
            service_id: None,
            template_id: None,
            public_key: None,
            timeout_seconds: default_emailjs_timeout(),
        }
    }
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            dry_run: false,
            dry_run_latency_ms: default_dry_run_latency_ms(),
            dry_run_fail: false,
        }
    }
}
