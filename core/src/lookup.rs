//! The address lookup operation.
//!
//! `lookup` never fails: every error is logged and replaced by the empty
//! `ZipCodeResponse`, so callers cannot tell a failed lookup from an empty
//! address. `try_lookup` runs the same round trip and returns the error.

use tracing::{info, warn};

use crate::client::ZipCodeClient;
use crate::config::LookupConfig;
use crate::error::{ApiError, ConfigError};
use crate::transport::{Transport, UreqTransport};
use crate::types::ZipCodeResponse;

/// Looks up addresses by postal code against a configured endpoint.
pub struct AddressLookupClient<T = UreqTransport> {
    client: ZipCodeClient,
    transport: T,
}

impl AddressLookupClient<UreqTransport> {
    pub fn from_config(config: &LookupConfig) -> Self {
        Self::new(&config.endpoint, UreqTransport::new(config.timeout))
    }

    /// Configure from `CEP_ENDPOINT` / `CEP_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        LookupConfig::from_env().map(|config| Self::from_config(&config))
    }
}

impl<T: Transport> AddressLookupClient<T> {
    pub fn new(endpoint: &str, transport: T) -> Self {
        Self {
            client: ZipCodeClient::new(endpoint),
            transport,
        }
    }

    pub fn endpoint(&self) -> &str {
        self.client.endpoint()
    }

    /// Fetch the address for `postal_code`, or the empty record on any failure.
    pub fn lookup(&self, postal_code: &str) -> ZipCodeResponse {
        self.try_lookup(postal_code).unwrap_or_else(|error| {
            warn!(%error, postal_code, "error searching zip code");
            ZipCodeResponse::default()
        })
    }

    pub fn try_lookup(&self, postal_code: &str) -> Result<ZipCodeResponse, ApiError> {
        info!(postal_code, "searching zip code");
        info!(endpoint = self.client.endpoint(), "zip code endpoint");

        let request = self.client.build_lookup(postal_code);
        let response = self.transport.execute(&request)?;
        self.client.parse_lookup(response)
    }
}
