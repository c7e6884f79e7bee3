pub use config::CollectorConfigError as ConfigError;

pub mod config;
pub mod defaults;
pub mod placeholders;
