//! Synchronous address lookup client for a ViaCEP-style zip-code API.
//!
//! # Overview
//! `AddressLookupClient::lookup` takes a postal code, issues
//! `GET {endpoint}/{postal_code}/json`, and returns the decoded
//! `ZipCodeResponse`. Any failure is logged and masked by the empty record.
//!
//! # Design
//! - `ZipCodeClient` is stateless: it builds `HttpRequest` values and parses
//!   `HttpResponse` values without touching the network.
//! - `Transport` is the I/O seam; `UreqTransport` executes requests with a
//!   blocking `ureq` agent.
//! - `LookupConfig` carries the endpoint and optional timeout, read from the
//!   environment by `LookupConfig::from_env`.
//! - The crate logs through `tracing` and never installs a subscriber.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod lookup;
pub mod transport;
pub mod types;

pub use client::ZipCodeClient;
pub use config::LookupConfig;
pub use error::{ApiError, ConfigError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use lookup::AddressLookupClient;
pub use transport::{Transport, UreqTransport};
pub use types::ZipCodeResponse;
