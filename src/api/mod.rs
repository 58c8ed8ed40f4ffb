//
//  backlog-client
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! This module provides the HTTP transport and one facade per Backlog
//! resource type.
//!
//! ## Architecture
//!
//! The API layer is organized as follows:
//!
//! - [`client`]: Transport with API key injection, downloads and uploads
//! - [`resource`]: Generic facade shared by every resource type
//! - [`endpoints`]: Issues, projects, wikis and every other resource type
//! - [`common`]: Errors, responses, parameters and the parameter schema
//!
//! ## Usage
//!
//! ```rust,no_run
//! use backlog_client::api::BacklogClient;
//! use backlog_client::api::endpoints::issue::IssueListOptions;
//! use backlog_client::config::ServiceConfig;
//!
//! # async fn example() -> backlog_client::Result<()> {
//! let client = BacklogClient::new(&ServiceConfig::backlog_com("acme", "your-api-key")?)?;
//!
//! let options = IssueListOptions {
//!     project_id: vec![1073],
//!     keyword: Some("crash".to_string()),
//!     count: Some(50),
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
//!
//! ## Error Handling
//!
//! Operations return [`ApiError`] only for problems detected locally or in
//! transit. HTTP error statuses come back as an [`ApiResponse`].

/// Backlog HTTP transport.
pub mod client;

/// Per-resource endpoint facades.
pub mod endpoints;

/// Generic facade the endpoint modules are built on.
pub mod resource;

/// Shared types: errors, responses, parameters, schema.
pub mod common;

pub use client::BacklogClient;
pub use common::{ApiError, ApiResponse, Download, Params};
pub use resource::Resource;
