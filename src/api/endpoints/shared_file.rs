//
//  backlog-client
//  api/endpoints/shared_file.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Project shared files.
//!
//! Listing walks a directory of the shared file tree; downloading takes the
//! file id from that listing.

use reqwest::Method;
use serde::Serialize;

use super::facade;
use crate::api::common::schema::{self, Field};
use crate::api::common::{ApiError, ApiResponse, Download, Order, Result};

const LIST: &[Field] = &[schema::ORDER, schema::OFFSET, schema::count(1000)];

/// Paging for [`SharedFiles::list`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct SharedFileListOptions {
    pub order: Option<Order>,
    pub offset: Option<u64>,
    /// 1-1000.
    pub count: Option<u32>,
}

facade!(
    /// `/api/v2/projects/{project}/files`
    SharedFiles,
    "projects"
);

impl<'a> SharedFiles<'a> {
    /// Lists the directory at `path` (`""` or `"/"` for the root).
    ///
    /// Each segment of `path` is percent-encoded, so names containing
    /// spaces, `#`, `?` or non-ASCII characters reach the server intact.
    ///
    /// # Errors
    ///
    /// [`ApiError::Validation`] if `path` contains a `.` or `..` segment.
    pub async fn list(
        &self,
        project: &str,
        path: &str,
        options: &SharedFileListOptions,
    ) -> Result<ApiResponse> {
        let path = metadata_path(project, path)?;
        let params = schema::build(LIST, options)?;
        self.resource.client().send(Method::GET, &path, &params).await
    }

    /// Downloads a shared file.
    pub async fn download(&self, project: &str, file_id: u64) -> Result<Download> {
        self.resource
            .download(&format!("{}/files/{}", project, file_id))
            .await
    }
}

/// `projects/{project}/files/metadata/{path}` with every path segment encoded.
///
/// The root keeps its trailing slash; the server lists nothing without it.
fn metadata_path(project: &str, path: &str) -> Result<String> {
    let mut segments = Vec::new();
    for segment in path.split('/').filter(|s| !s.is_empty()) {
        if segment == "." || segment == ".." {
            return Err(ApiError::validation(format!(
                "shared file path `{}` must not contain `.` or `..` segments",
                path
            )));
        }
        segments.push(urlencoding::encode(segment));
    }

    Ok(format!(
        "projects/{}/files/metadata/{}",
        urlencoding::encode(project),
        segments.join("/")
    ))
}
