use std::net::SocketAddr;

use env_helpers::get_env_default;
use secrecy::SecretString;
use url::Url;

use crate::infra::{error::InfraError, stripe_client::STRIPE_API_BASE};

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

pub struct AppConfig {
    /// Secret key used to authenticate against the Stripe API.
    pub stripe_secret_key: SecretString,
    /// Stripe API base URL. Override to point at stripe-mock locally.
    pub stripe_api_base: Url,
    pub bind_addr: SocketAddr,
    /// When set, JSON logs are also appended to this file.
    pub log_file: Option<String>,
}

/// Configuration values as read from the environment, before parsing.
pub struct RawConfig {
    pub stripe_secret_key: Option<String>,
    pub stripe_api_base: String,
    pub bind_addr: String,
    pub log_file: Option<String>,
}

impl Default for RawConfig {
    fn default() -> Self {
        Self {
            stripe_secret_key: None,
            stripe_api_base: STRIPE_API_BASE.to_string(),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            log_file: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, InfraError> {
        Self::from_raw(RawConfig {
            stripe_secret_key: std::env::var("STRIPE_SECRET_KEY").ok(),
            stripe_api_base: get_env_default("STRIPE_API_BASE", STRIPE_API_BASE.to_string()),
            bind_addr: get_env_default("BIND_ADDR", DEFAULT_BIND_ADDR.to_string()),
            log_file: std::env::var("LOG_FILE").ok(),
        })
    }

    pub fn from_raw(raw: RawConfig) -> Result<Self, InfraError> {
        let stripe_secret_key = raw
            .stripe_secret_key
            .filter(|key| !key.trim().is_empty())
            .ok_or(InfraError::ConfigMissing {
                var: "STRIPE_SECRET_KEY",
            })?;

        let stripe_api_base =
            Url::parse(&raw.stripe_api_base).map_err(|e| InfraError::ConfigInvalid {
                var: "STRIPE_API_BASE",
                reason: e.to_string(),
            })?;

        let bind_addr: SocketAddr =
            raw.bind_addr
                .parse()
                .map_err(|_| InfraError::ConfigInvalid {
                    var: "BIND_ADDR",
                    reason: format!("'{}' is not a socket address", raw.bind_addr),
                })?;

        let log_file = raw.log_file.filter(|p| !p.is_empty());

        Ok(Self {
            stripe_secret_key: SecretString::new(stripe_secret_key.into()),
            stripe_api_base,
            bind_addr,
            log_file,
        })
    }
}
