mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{
    Config, EmailJsConfig, FormConfig, MotionConfig, MotionVariants, TransportConfig,
    VariantsConfig,
};
