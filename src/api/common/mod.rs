//
//  backlog-client
//  api/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Common API Types for the Backlog client
//!
//! This module provides the shared types every endpoint facade relies on:
//! the error enum, the raw response wrapper, request parameters and the
//! declarative parameter schema used to validate caller input.
//!
//! # Overview
//!
//! - [`ApiError`] - Unified error type for configuration, validation and transport failures
//! - [`ApiResponse`] - Raw response (status, headers, body) handed back to the caller
//! - [`Download`] - Result of a file download: local path plus the response
//! - [`Params`] / [`ParamValue`] - Outgoing parameters with boolean coercion
//! - [`Field`] / [`Rule`] - Per-operation parameter schema (re-exported from [`schema`])
//! - [`CustomFieldValues`] / [`CustomFieldFilter`] - Typed custom field parameters
//!
//! # Example
//!
//! ```rust
//! use backlog_client::api::common::{ApiError, Params};
//!
//! fn handle<T>(result: Result<T, ApiError>) {
//!     match result {
//!         Ok(_) => println!("Success!"),
//!         Err(ApiError::Validation(reason)) => println!("Rejected before sending: {}", reason),
//!         Err(e) => println!("Error: {}", e),
//!     }
//! }
//!
//! let params = Params::new().with("archived", false);
//! assert_eq!(params.to_pairs(), vec![("archived".to_string(), "false".to_string())]);
//! ```
//!
//! # Notes
//!
//! - A non-2xx HTTP status is *not* an error; inspect [`ApiResponse::is_success`]
//! - Validation always happens before any network activity

use std::borrow::Cow;
use std::path::PathBuf;

use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use thiserror::Error;

mod custom_field;
mod disposition;
mod enums;
mod params;
pub mod schema;

pub use custom_field::*;
pub use disposition::*;
pub use enums::*;
pub use params::*;
pub use schema::{Field, Rule};

/// Convenience alias used throughout the library.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Unified error type for all Backlog API operations.
///
/// `ApiError` covers the failures the library itself can detect. Remote
/// failures (4xx/5xx) are not variants: they come back as an
/// [`ApiResponse`] whose [`is_success`](ApiResponse::is_success) is `false`.
///
/// # Variants
///
/// | Variant | Raised when | Network touched? |
/// |---------|-------------|------------------|
/// | `Configuration` | Space, host or API key missing or malformed | No |
/// | `Validation` | A parameter violates a documented constraint | No |
/// | `Network` | DNS, TCP or TLS failure inside `reqwest` | Yes |
/// | `Io` | A download cannot be written or an upload read | Maybe |
/// | `Decode` | JSON (de)serialization failed | No |
///
/// # Example
///
/// ```rust
/// use backlog_client::api::common::ApiError;
///
/// fn add_project() -> Result<(), ApiError> {
///     Err(ApiError::Validation("project key `my-key` must match ^[A-Z0-9_]+$".to_string()))
/// }
///
/// match add_project() {
///     Ok(_) => println!("Project created"),
///     Err(ApiError::Validation(reason)) => eprintln!("Invalid input: {}", reason),
///     Err(e) => eprintln!("Unexpected error: {}", e),
/// }
/// ```
#[derive(Error, Debug)]
pub enum ApiError {
    /// Credentials could not be resolved.
    ///
    /// Raised when neither the explicit configuration nor the secrets file
    /// yields a complete host and API key, or when the resulting base URL
    /// cannot be parsed.
    ///
    /// # Parameters
    ///
    /// - `0` - Description of what is missing or malformed
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A caller-supplied parameter violates a documented constraint.
    ///
    /// Bad enumeration values, out-of-range counts, malformed dates, project
    /// keys or custom field names all end up here. The request is never sent.
    ///
    /// # Parameters
    ///
    /// - `0` - Description of the rejected parameter
    #[error("Validation error: {0}")]
    Validation(String),

    /// A network-level error occurred during the request.
    ///
    /// This covers connection failures, DNS resolution errors and TLS
    /// problems. Nothing is retried.
    ///
    /// # Parameters
    ///
    /// - `0` - The underlying `reqwest::Error` with network details
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Local file I/O failed while saving a download or reading an upload.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization or deserialization failed.
    ///
    /// Raised by [`ApiResponse::json`] when the body is not the expected JSON,
    /// or when request options cannot be turned into parameters.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Shorthand for building a [`ApiError::Validation`].
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Shorthand for building a [`ApiError::Configuration`].
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }
}

/// Raw response returned by every transport call.
///
/// The library never interprets response bodies: `ApiResponse` simply
/// carries the status, headers, final URL and body bytes back to the caller.
/// Helpers are provided for the common "parse it as JSON" case.
///
/// # Example
///
/// ```rust
/// use backlog_client::api::common::ApiResponse;
/// use reqwest::header::HeaderMap;
/// use reqwest::StatusCode;
///
/// let response = ApiResponse::new(
///     StatusCode::OK,
///     HeaderMap::new(),
///     "https://acme.backlog.com/api/v2/issues/count",
///     br#"{"count": 42}"#.to_vec(),
/// );
///
/// assert!(response.is_success());
/// let value: serde_json::Value = response.json().unwrap();
/// assert_eq!(value["count"], 42);
/// ```
///
/// # Notes
///
/// - The body is fully buffered; file endpoints hand the same bytes to [`Download`]
/// - `is_success` mirrors `StatusCode::is_success` (2xx)
#[derive(Debug, Clone)]
pub struct ApiResponse {
    status: StatusCode,
    headers: HeaderMap,
    url: String,
    body: Vec<u8>,
}

impl ApiResponse {
    /// Builds a response from its parts.
    pub fn new(status: StatusCode, headers: HeaderMap, url: impl Into<String>, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            url: url.into(),
            body,
        }
    }

    /// Buffers a `reqwest` response into an `ApiResponse`.
    pub(crate) async fn read(response: reqwest::Response) -> Result<Self> {
        let status = response.status();
        let headers = response.headers().clone();
        let url = response.url().to_string();
        let body = response.bytes().await?.to_vec();

        Ok(Self::new(status, headers, url, body))
    }

    /// HTTP status code of the response.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Returns `true` for any 2xx status.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// All response headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// A single header value, if present and valid UTF-8.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }

    /// The final URL of the request (after redirects).
    ///
    /// The `apiKey` query parameter is part of this URL; avoid logging it.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Raw body bytes.
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Consumes the response and returns the body bytes.
    pub fn into_body(self) -> Vec<u8> {
        self.body
    }

    /// Body decoded as UTF-8, replacing invalid sequences.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// Deserializes the body as JSON into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] if the body is not valid JSON for `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    /// The body as an untyped JSON value.
    pub fn json_value(&self) -> Result<serde_json::Value> {
        self.json()
    }

    /// Extracts a human readable message from a Backlog error body.
    ///
    /// Backlog reports failures as:
    ///
    /// ```json
    /// {"errors": [{"message": "No project.", "code": 6, "moreInfo": ""}]}
    /// ```
    ///
    /// The messages of every entry are joined with `"; "`. Returns `None`
    /// for successful responses or bodies in any other shape.
    pub fn error_message(&self) -> Option<String> {
        if self.is_success() {
            return None;
        }

        let json: serde_json::Value = serde_json::from_slice(&self.body).ok()?;

        if let Some(errors) = json.get("errors").and_then(|e| e.as_array()) {
            let messages: Vec<&str> = errors
                .iter()
                .filter_map(|e| e.get("message").and_then(|m| m.as_str()))
                .collect();
            if !messages.is_empty() {
                return Some(messages.join("; "));
            }
        }

        json.get("message")
            .and_then(|m| m.as_str())
            .map(str::to_string)
    }
}

/// Outcome of a file download.
///
/// # Fields
///
/// | Field | Description |
/// |-------|-------------|
/// | `path` | Where the body was written, or `None` if the response was not successful |
/// | `response` | The raw response, always present |
///
/// # Notes
///
/// - Files land in [`DOWNLOAD_DIR`](crate::api::client::DOWNLOAD_DIR) and overwrite
///   any existing file with the same name
/// - Nothing is written when the response status is not 2xx
#[derive(Debug, Clone)]
pub struct Download {
    /// Local path of the saved file.
    pub path: Option<PathBuf>,

    /// The response the file was read from.
    pub response: ApiResponse,
}

impl Download {
    /// Returns `true` if a file was written.
    pub fn is_saved(&self) -> bool {
        self.path.is_some()
    }
}
