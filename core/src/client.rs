//! Stateless request builder and response parser for the zip-code API.
//!
//! # Design
//! `ZipCodeClient` holds only the endpoint and carries no state between
//! calls. The lookup is split into `build_lookup`, which produces an
//! `HttpRequest`, and `parse_lookup`, which consumes an `HttpResponse`.
//! Executing the round trip is the job of a `Transport`.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::ZipCodeResponse;

/// Builds lookup requests and parses lookup responses without touching the
/// network.
#[derive(Debug, Clone)]
pub struct ZipCodeClient {
    endpoint: String,
}

impl ZipCodeClient {
    /// The endpoint is used verbatim: the request URL is always
    /// `{endpoint}/{postal_code}/json`.
    pub fn new(endpoint: &str) -> Self {
        Self {
            endpoint: endpoint.to_string(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// The postal code is opaque and inserted as-is, even when empty.
    pub fn build_lookup(&self, postal_code: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/{postal_code}/json", self.endpoint),
            headers: vec![("accept".to_string(), "application/json".to_string())],
        }
    }

    pub fn parse_lookup(&self, response: HttpResponse) -> Result<ZipCodeResponse, ApiError> {
        check_status(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
    }
}

/// Map non-2xx status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if (200..300).contains(&response.status) {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}
