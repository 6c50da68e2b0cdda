//! Shared configuration and display helpers for the auteur proxy.

pub mod app_config;
pub mod config;
pub mod dates;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use dates::{format_release_date, NOT_AVAILABLE};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
