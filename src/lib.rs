//
//  backlog-client
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Backlog Client Library
//!
//! A typed client for the Backlog REST API v2, plus the `backlog` command
//! line tool built on top of it.
//!
//! ## Overview
//!
//! Every resource type (issues, projects, wikis, pull requests...) has a
//! facade obtained from [`BacklogClient`]. A facade method checks its typed
//! options against a fixed parameter schema, builds the query or form body
//! and sends exactly one request. Invalid input is rejected with
//! [`ApiError::Validation`] before anything goes over the wire.
//!
//! Remote failures are not errors: every call returns the raw
//! [`ApiResponse`](api::ApiResponse) and the caller decides what a 4xx means.
//!
//! ## Module Structure
//!
//! - [`api`]: Transport, generic resource facade, endpoint facades
//! - [`config`]: Service configuration and the TOML secrets file
//! - [`cli`]: Command-line interface definitions using clap
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use backlog_client::{BacklogClient, ServiceConfig};
//! use backlog_client::api::endpoints::issue::IssueListOptions;
//!
//! # async fn example() -> backlog_client::Result<()> {
//! let config = ServiceConfig::backlog_com("acme", "your-api-key")?;
//! let client = BacklogClient::new(&config)?;
//!
//! let options = IssueListOptions {
//!     keyword: Some("login".to_string()),
//!     count: Some(20),
//!     ..Default::default()
//! };
//! let response = client.issues().list(&options).await?;
//! if response.is_success() {
//!     let issues: serde_json::Value = response.json()?;
//!     println!("{}", issues);
//! }
//! # Ok(())
//! # }
//! ```

/// HTTP transport and endpoint facades.
pub mod api;

/// Command-line interface definitions.
///
/// Thin wrappers around the library used by the `backlog` binary.
pub mod cli;

/// Service configuration.
///
/// Explicit settings or the secrets file stored in the platform config
/// directory (`~/.config/backlog/secrets.toml` on Linux).
pub mod config;

pub use api::common::Result;
pub use api::{ApiError, ApiResponse, BacklogClient, Download, Params};
pub use cli::Cli;
pub use config::ServiceConfig;

/// Application name, used for the binary and config paths.
pub const APP_NAME: &str = "backlog";

/// Crate version, taken from Cargo.toml at compile time.
///
/// ```rust
/// use backlog_client::VERSION;
///
/// println!("backlog version {}", VERSION);
/// ```
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit codes of the `backlog` binary.
///
/// ```rust,no_run
/// use backlog_client::exit_codes;
///
/// std::process::exit(exit_codes::CONFIG_ERROR);
/// ```
pub mod exit_codes {
    /// The command completed and the server answered 2xx.
    pub const SUCCESS: i32 = 0;

    /// Any other failure, including non-2xx responses.
    pub const ERROR: i32 = 1;

    /// Invalid parameters, rejected before any request was sent.
    pub const VALIDATION_ERROR: i32 = 2;

    /// Credentials could not be resolved or the secrets file is unusable.
    pub const CONFIG_ERROR: i32 = 4;
}
