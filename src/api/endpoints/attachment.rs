//
//  backlog-client
//  api/endpoints/attachment.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! File upload.
//!
//! Uploaded files get an id that is then passed as `attachmentId` when
//! adding issues, comments, pull requests or wiki attachments.

use std::path::Path;

use super::facade;
use crate::api::common::{ApiError, ApiResponse, Result};

/// Multipart field name expected by the upload endpoint.
pub const FILE_FIELD: &str = "file";

facade!(
    /// `/api/v2/space/attachment`
    Attachments,
    "space/attachment"
);

impl<'a> Attachments<'a> {
    /// Uploads `contents` under `filename`.
    pub async fn upload(&self, filename: &str, contents: Vec<u8>) -> Result<ApiResponse> {
        if filename.trim().is_empty() {
            return Err(ApiError::validation("upload filename must not be empty"));
        }
        self.resource.upload("", FILE_FIELD, filename, contents).await
    }

    /// Reads `path` and uploads it under its own file name.
    pub async fn upload_file(&self, path: &Path) -> Result<ApiResponse> {
        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| ApiError::validation(format!("{} has no file name", path.display())))?
            .to_string();
        let contents = tokio::fs::read(path).await?;
        self.upload(&filename, contents).await
    }
}
