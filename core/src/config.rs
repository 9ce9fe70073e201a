//! Lookup configuration read from the environment.

use std::env;
use std::time::Duration;

use dotenv::dotenv;

use crate::error::ConfigError;

/// Base URL of the upstream zip-code API.
pub const ENDPOINT_VAR: &str = "CEP_ENDPOINT";
/// Optional request timeout in whole seconds; `0` disables it.
pub const TIMEOUT_VAR: &str = "CEP_TIMEOUT_SECS";

/// Immutable settings for an `AddressLookupClient`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupConfig {
    pub endpoint: String,
    pub timeout: Option<Duration>,
}

impl LookupConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Read the process environment, after loading `.env` if one exists.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source.
    pub fn from_lookup<F>(get: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let endpoint = get(ENDPOINT_VAR)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingEndpoint(ENDPOINT_VAR))?;

        let timeout = match get(TIMEOUT_VAR) {
            None => None,
            Some(raw) => {
                let secs: u64 = raw.trim().parse().map_err(|_| ConfigError::InvalidTimeout {
                    var: TIMEOUT_VAR,
                    value: raw.clone(),
                })?;
                (secs > 0).then(|| Duration::from_secs(secs))
            }
        };

        Ok(Self { endpoint, timeout })
    }
}
