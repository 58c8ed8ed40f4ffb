//
//  backlog-client
//  api/endpoints/space.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Space endpoints.
//!
//! # Example
//!
//! ```rust,no_run
//! use backlog_client::api::BacklogClient;
//! use backlog_client::api::endpoints::ActivityOptions;
//! use backlog_client::config::ServiceConfig;
//!
//! # async fn example() -> backlog_client::Result<()> {
//! let client = BacklogClient::new(&ServiceConfig::load()?)?;
//!
//! let options = ActivityOptions {
//!     activity_type_id: vec![1, 2, 3],
//!     count: Some(20),
//!     ..Default::default()
//! };
//! let feed = client.space().activities(&options).await?;
//!
//! let logo = client.space().image().await?;
//! if let Some(path) = logo.path {
//!     println!("Logo saved to {}", path.display());
//! }
//! # Ok(())
//! # }
//! ```

use serde_json::json;

use super::{facade, ActivityOptions, ACTIVITIES};
use crate::api::common::schema::Field;
use crate::api::common::{ApiResponse, Download, Result};

const NOTIFICATION: &[Field] = &[Field::new("content").required()];

facade!(
    /// `/api/v2/space`
    Space,
    "space"
);

impl<'a> Space<'a> {
    /// Space information.
    pub async fn get(&self) -> Result<ApiResponse> {
        self.resource.fetch("").await
    }

    /// Recent updates in the space.
    pub async fn activities(&self, options: &ActivityOptions) -> Result<ApiResponse> {
        self.resource.get("activities", ACTIVITIES, options).await
    }

    /// Downloads the space logo.
    pub async fn image(&self) -> Result<Download> {
        self.resource.download("image").await
    }

    /// The space notification banner.
    pub async fn notification(&self) -> Result<ApiResponse> {
        self.resource.fetch("notification").await
    }

    /// Replaces the space notification banner.
    pub async fn update_notification(&self, content: &str) -> Result<ApiResponse> {
        self.resource
            .put("notification", NOTIFICATION, &json!({ "content": content }))
            .await
    }

    /// Disk usage of the space, per project.
    pub async fn disk_usage(&self) -> Result<ApiResponse> {
        self.resource.fetch("diskUsage").await
    }
}
