//! Error types for the zip-code lookup client.
//!
//! # Design
//! `NotFound` gets a dedicated variant so callers of `try_lookup` can tell
//! "no such postal code" from "the upstream misbehaved". All other non-2xx
//! responses land in `HttpError` with the raw status code and body.
//! Transport failures (connection refused, DNS, timeout) carry the
//! underlying message only, keeping `ureq` types out of the public API.

use thiserror::Error;

/// Errors produced while performing or interpreting a lookup round trip.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The upstream returned 404.
    #[error("resource not found")]
    NotFound,

    /// The upstream returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into `ZipCodeResponse`.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request never produced a response.
    #[error("transport failed: {0}")]
    Transport(String),
}

/// Errors raised while reading `LookupConfig` from the environment.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is not set")]
    MissingEndpoint(&'static str),

    #[error("invalid {var} value {value:?}: expected a whole number of seconds")]
    InvalidTimeout { var: &'static str, value: String },
}
