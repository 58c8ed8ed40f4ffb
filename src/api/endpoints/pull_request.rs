//
//  backlog-client
//  api/endpoints/pull_request.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Pull requests of a Git repository.
//!
//! Every operation is scoped to a project (id or key) and a repository
//! (id or name); pull requests themselves are addressed by number.
//!
//! # Example
//!
//! ```rust,no_run
//! use backlog_client::api::BacklogClient;
//! use backlog_client::api::endpoints::pull_request::{NewPullRequest, PullRequestListOptions};
//! use backlog_client::config::ServiceConfig;
//!
//! # async fn example() -> backlog_client::Result<()> {
//! let client = BacklogClient::new(&ServiceConfig::load()?)?;
//! let pull_requests = client.pull_requests();
//!
//! let open = PullRequestListOptions {
//!     status_id: vec![1],
//!     ..Default::default()
//! };
//! pull_requests.list("DEV", "api", &open).await?;
//!
//! let pr = NewPullRequest {
//!     summary: "Fix login".to_string(),
//!     description: "Closes DEV-12".to_string(),
//!     base: "main".to_string(),
//!     branch: "fix/login".to_string(),
//!     ..Default::default()
//! };
//! pull_requests.add("DEV", "api", &pr).await?;
//! # Ok(())
//! # }
//! ```

use serde::Serialize;
use serde_json::json;

use super::{facade, IdPageOptions, ID_PAGE};
use crate::api::common::schema::{self, Field};
use crate::api::common::{ApiResponse, Download, Result};

const LIST: &[Field] = &[
    Field::new("statusId").array(),
    Field::new("assigneeId").array(),
    Field::new("issueId").array(),
    Field::new("createdUserId").array(),
    schema::OFFSET,
    schema::COUNT,
];

const ADD: &[Field] = &[
    Field::new("summary").required(),
    Field::new("description").required(),
    Field::new("base").required(),
    Field::new("branch").required(),
    Field::new("issueId"),
    Field::new("assigneeId"),
    Field::new("notifiedUserId").array(),
    Field::new("attachmentId").array(),
];

const UPDATE: &[Field] = &[
    Field::new("summary"),
    Field::new("description"),
    Field::new("issueId"),
    Field::new("assigneeId"),
    Field::new("notifiedUserId").array(),
    Field::new("comment"),
];

const ADD_COMMENT: &[Field] = &[
    Field::new("content").required(),
    Field::new("notifiedUserId").array(),
];

const CONTENT: &[Field] = &[Field::new("content").required()];

/// Filters for [`PullRequests::list`] and [`PullRequests::count`].
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PullRequestListOptions {
    pub status_id: Vec<u64>,
    pub assignee_id: Vec<u64>,
    pub issue_id: Vec<u64>,
    pub created_user_id: Vec<u64>,
    pub offset: Option<u64>,
    /// 1-100.
    pub count: Option<u32>,
}

/// Payload of [`PullRequests::add`].
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPullRequest {
    pub summary: String,
    pub description: String,
    /// Branch merged into.
    pub base: String,
    /// Branch merged from.
    pub branch: String,
    pub issue_id: Option<u64>,
    pub assignee_id: Option<u64>,
    pub notified_user_id: Vec<u64>,
    pub attachment_id: Vec<u64>,
}

/// Payload of [`PullRequests::update`].
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PullRequestUpdate {
    pub summary: Option<String>,
    pub description: Option<String>,
    pub issue_id: Option<u64>,
    pub assignee_id: Option<u64>,
    pub notified_user_id: Vec<u64>,
    pub comment: Option<String>,
}

facade!(
    /// `/api/v2/projects/{project}/git/repositories/{repository}/pullRequests`
    PullRequests,
    "projects"
);

fn collection(project: &str, repository: &str) -> String {
    format!("{}/git/repositories/{}/pullRequests", project, repository)
}

impl<'a> PullRequests<'a> {
    pub async fn list(
        &self,
        project: &str,
        repository: &str,
        options: &PullRequestListOptions,
    ) -> Result<ApiResponse> {
        self.resource
            .get(&collection(project, repository), LIST, options)
            .await
    }

    pub async fn count(
        &self,
        project: &str,
        repository: &str,
        options: &PullRequestListOptions,
    ) -> Result<ApiResponse> {
        self.resource
            .get(&format!("{}/count", collection(project, repository)), LIST, options)
            .await
    }

    pub async fn get(&self, project: &str, repository: &str, number: u64) -> Result<ApiResponse> {
        self.resource
            .fetch(&format!("{}/{}", collection(project, repository), number))
            .await
    }

    pub async fn add(&self, project: &str, repository: &str, pull_request: &NewPullRequest) -> Result<ApiResponse> {
        self.resource
            .post(&collection(project, repository), ADD, pull_request)
            .await
    }

    pub async fn update(
        &self,
        project: &str,
        repository: &str,
        number: u64,
        update: &PullRequestUpdate,
    ) -> Result<ApiResponse> {
        self.resource
            .patch(&format!("{}/{}", collection(project, repository), number), UPDATE, update)
            .await
    }

    pub async fn attachments(&self, project: &str, repository: &str, number: u64) -> Result<ApiResponse> {
        self.resource
            .fetch(&format!("{}/{}/attachments", collection(project, repository), number))
            .await
    }

    pub async fn download_attachment(
        &self,
        project: &str,
        repository: &str,
        number: u64,
        attachment_id: u64,
    ) -> Result<Download> {
        self.resource
            .download(&format!(
                "{}/{}/attachments/{}",
                collection(project, repository),
                number,
                attachment_id
            ))
            .await
    }

    pub async fn delete_attachment(
        &self,
        project: &str,
        repository: &str,
        number: u64,
        attachment_id: u64,
    ) -> Result<ApiResponse> {
        self.resource
            .remove(&format!(
                "{}/{}/attachments/{}",
                collection(project, repository),
                number,
                attachment_id
            ))
            .await
    }

    pub async fn comments(
        &self,
        project: &str,
        repository: &str,
        number: u64,
        options: &IdPageOptions,
    ) -> Result<ApiResponse> {
        self.resource
            .get(
                &format!("{}/{}/comments", collection(project, repository), number),
                ID_PAGE,
                options,
            )
            .await
    }

    pub async fn add_comment(
        &self,
        project: &str,
        repository: &str,
        number: u64,
        content: &str,
        notified_user_ids: &[u64],
    ) -> Result<ApiResponse> {
        self.resource
            .post(
                &format!("{}/{}/comments", collection(project, repository), number),
                ADD_COMMENT,
                &json!({ "content": content, "notifiedUserId": notified_user_ids }),
            )
            .await
    }

    pub async fn comment_count(&self, project: &str, repository: &str, number: u64) -> Result<ApiResponse> {
        self.resource
            .fetch(&format!("{}/{}/comments/count", collection(project, repository), number))
            .await
    }

    pub async fn update_comment(
        &self,
        project: &str,
        repository: &str,
        number: u64,
        comment_id: u64,
        content: &str,
    ) -> Result<ApiResponse> {
        self.resource
            .patch(
                &format!(
                    "{}/{}/comments/{}",
                    collection(project, repository),
                    number,
                    comment_id
                ),
                CONTENT,
                &json!({ "content": content }),
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_path() {
        assert_eq!(collection("DEV", "api"), "DEV/git/repositories/api/pullRequests");
    }

    #[test]
    fn test_schemas_match_structs() {
        assert!(schema::build(LIST, &PullRequestListOptions::default()).unwrap().is_empty());
        assert!(schema::build(UPDATE, &PullRequestUpdate::default()).unwrap().is_empty());
        assert_eq!(schema::build(ADD, &NewPullRequest::default()).unwrap().len(), 4);
    }

    #[test]
    fn test_comment_without_notifications() {
        let empty: &[u64] = &[];
        let params = schema::build(ADD_COMMENT, &json!({ "content": "LGTM", "notifiedUserId": empty })).unwrap();
        assert_eq!(params.keys().collect::<Vec<_>>(), vec!["content"]);
    }
}
