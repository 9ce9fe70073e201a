//! HTTP messages as plain data.
//!
//! # Design
//! `ZipCodeClient` builds `HttpRequest` values and parses `HttpResponse`
//! values without touching the network; a `Transport` carries one to the
//! other. Keeping the messages as owned data makes the build and parse
//! halves deterministic and lets tests stand in for the network with a
//! canned response.

/// HTTP method for a request. The lookup API is read-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
        }
    }
}

/// An HTTP request described as plain data.
///
/// `path` holds the full URL, endpoint included. Lookups are bodiless GETs,
/// so there is no request body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}
