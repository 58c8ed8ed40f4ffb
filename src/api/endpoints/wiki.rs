//
//  backlog-client
//  api/endpoints/wiki.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Wiki pages, their history, stars, attachments and linked shared files.

use serde::Serialize;
use serde_json::json;

use super::{facade, IdPageOptions, ID_PAGE};
use crate::api::common::schema::Field;
use crate::api::common::{ApiError, ApiResponse, Download, Result};

const LIST: &[Field] = &[Field::new("projectIdOrKey"), Field::new("keyword")];
const PROJECT: &[Field] = &[Field::new("projectIdOrKey")];

const ADD: &[Field] = &[
    Field::new("projectId").required(),
    Field::new("name").required(),
    Field::new("content").required(),
    Field::new("mailNotify"),
];

const UPDATE: &[Field] = &[
    Field::new("name"),
    Field::new("content"),
    Field::new("mailNotify"),
];

const MAIL_NOTIFY: &[Field] = &[Field::new("mailNotify")];
const ATTACHMENT_IDS: &[Field] = &[Field::new("attachmentId").array().required()];
const FILE_IDS: &[Field] = &[Field::new("fileId").array().required()];

/// Filters for [`Wikis::list`].
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WikiListOptions {
    pub project_id_or_key: Option<String>,
    pub keyword: Option<String>,
}

/// Payload of [`Wikis::add`].
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWikiPage {
    pub project_id: u64,
    pub name: String,
    pub content: String,
    /// Email the change to project members.
    pub mail_notify: Option<bool>,
}

/// Payload of [`Wikis::update`]. At least one of `name` and `content` is required.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WikiPageUpdate {
    pub name: Option<String>,
    pub content: Option<String>,
    pub mail_notify: Option<bool>,
}

facade!(
    /// `/api/v2/wikis`
    Wikis,
    "wikis"
);

impl<'a> Wikis<'a> {
    pub async fn list(&self, options: &WikiListOptions) -> Result<ApiResponse> {
        self.resource.get("", LIST, options).await
    }

    /// Number of wiki pages, optionally for one project.
    pub async fn count(&self, project: Option<&str>) -> Result<ApiResponse> {
        self.resource
            .get("count", PROJECT, &json!({ "projectIdOrKey": project }))
            .await
    }

    pub async fn tags(&self, project: Option<&str>) -> Result<ApiResponse> {
        self.resource
            .get("tags", PROJECT, &json!({ "projectIdOrKey": project }))
            .await
    }

    pub async fn get(&self, wiki_id: u64) -> Result<ApiResponse> {
        self.resource.fetch(&wiki_id.to_string()).await
    }

    pub async fn add(&self, page: &NewWikiPage) -> Result<ApiResponse> {
        self.resource.post("", ADD, page).await
    }

    /// Updates a page.
    ///
    /// # Errors
    ///
    /// [`ApiError::Validation`] if neither `name` nor `content` is set.
    pub async fn update(&self, wiki_id: u64, update: &WikiPageUpdate) -> Result<ApiResponse> {
        if update.name.is_none() && update.content.is_none() {
            return Err(ApiError::validation(
                "a wiki update needs a new name or new content",
            ));
        }
        self.resource.patch(&wiki_id.to_string(), UPDATE, update).await
    }

    pub async fn delete(&self, wiki_id: u64, mail_notify: Option<bool>) -> Result<ApiResponse> {
        self.resource
            .delete(
                &wiki_id.to_string(),
                MAIL_NOTIFY,
                &json!({ "mailNotify": mail_notify }),
            )
            .await
    }

    pub async fn history(&self, wiki_id: u64, options: &IdPageOptions) -> Result<ApiResponse> {
        self.resource
            .get(&format!("{}/history", wiki_id), ID_PAGE, options)
            .await
    }

    pub async fn stars(&self, wiki_id: u64) -> Result<ApiResponse> {
        self.resource.fetch(&format!("{}/stars", wiki_id)).await
    }

    /// Attaches previously uploaded files to the page.
    pub async fn attach(&self, wiki_id: u64, attachment_ids: &[u64]) -> Result<ApiResponse> {
        self.resource
            .post(
                &format!("{}/attachments", wiki_id),
                ATTACHMENT_IDS,
                &json!({ "attachmentId": attachment_ids }),
            )
            .await
    }

    pub async fn attachments(&self, wiki_id: u64) -> Result<ApiResponse> {
        self.resource
            .fetch(&format!("{}/attachments", wiki_id))
            .await
    }

    pub async fn download_attachment(&self, wiki_id: u64, attachment_id: u64) -> Result<Download> {
        self.resource
            .download(&format!("{}/attachments/{}", wiki_id, attachment_id))
            .await
    }

    pub async fn remove_attachment(&self, wiki_id: u64, attachment_id: u64) -> Result<ApiResponse> {
        self.resource
            .remove(&format!("{}/attachments/{}", wiki_id, attachment_id))
            .await
    }

    pub async fn shared_files(&self, wiki_id: u64) -> Result<ApiResponse> {
        self.resource
            .fetch(&format!("{}/sharedFiles", wiki_id))
            .await
    }

    pub async fn link_shared_files(&self, wiki_id: u64, file_ids: &[u64]) -> Result<ApiResponse> {
        self.resource
            .post(
                &format!("{}/sharedFiles", wiki_id),
                FILE_IDS,
                &json!({ "fileId": file_ids }),
            )
            .await
    }

    pub async fn unlink_shared_file(&self, wiki_id: u64, file_id: u64) -> Result<ApiResponse> {
        self.resource
            .remove(&format!("{}/sharedFiles/{}", wiki_id, file_id))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::common::schema;

    #[test]
    fn test_schemas_match_structs() {
        assert!(schema::build(LIST, &WikiListOptions::default()).unwrap().is_empty());
        assert!(schema::build(UPDATE, &WikiPageUpdate::default()).unwrap().is_empty());
        assert_eq!(schema::build(ADD, &NewWikiPage::default()).unwrap().len(), 3);
    }

    #[test]
    fn test_mail_notify_encoding() {
        let params = schema::build(MAIL_NOTIFY, &json!({ "mailNotify": true })).unwrap();
        assert_eq!(params.to_pairs(), vec![("mailNotify".to_string(), "true".to_string())]);
        assert!(schema::build(MAIL_NOTIFY, &json!({ "mailNotify": null })).unwrap().is_empty());
    }
}
