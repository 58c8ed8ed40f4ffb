//
//  backlog-client
//  api/endpoints/issue.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Issue endpoints.
//!
//! This module covers issues and everything hanging off an issue: comments,
//! comment notifications, attachments and linked shared files.
//!
//! # Overview
//!
//! Issues are addressed by id or key (`"1234"` or `"DEV-12"`). Searching
//! takes an [`IssueListOptions`]; list filters are sent as repeated `name[]`
//! keys and custom field filters are appended after the standard filters.
//!
//! # Example
//!
//! ```rust,no_run
//! use backlog_client::api::BacklogClient;
//! use backlog_client::api::common::{CustomFieldFilter, CustomFieldValues, Order};
//! use backlog_client::api::endpoints::issue::{IssueListOptions, NewIssue};
//! use backlog_client::config::ServiceConfig;
//!
//! # async fn example() -> backlog_client::Result<()> {
//! let client = BacklogClient::new(&ServiceConfig::load()?)?;
//!
//! // Open bugs due this year with more than 3 story points
//! let search = IssueListOptions {
//!     project_id: vec![1073],
//!     status_id: vec![1, 2],
//!     due_date_since: Some("2026-01-01".to_string()),
//!     order: Some(Order::Asc),
//!     custom_fields: vec![CustomFieldFilter::NumberRange { id: 12, min: Some(3.0), max: None }],
//!     ..Default::default()
//! };
//! let response = client.issues().list(&search).await?;
//!
//! // File a new issue with a custom field value
//! let mut custom_fields = CustomFieldValues::new();
//! custom_fields.set(12, 5);
//! let issue = NewIssue {
//!     project_id: 1073,
//!     summary: "Login button not responding".to_string(),
//!     issue_type_id: 2,
//!     priority_id: 3,
//!     custom_fields,
//!     ..Default::default()
//! };
//! client.issues().add(&issue).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Notes
//!
//! - `count` is limited to 1-100 and `parentChild` to 0-4
//! - Every date is `YYYY-MM-DD`

use reqwest::Method;
use serde::Serialize;
use serde_json::json;

use super::{facade, IdPageOptions, ID_PAGE};
use crate::api::common::schema::{self, Field};
use crate::api::common::{
    ApiResponse, CustomFieldFilter, CustomFieldValues, Download, Order, Params, Result,
};

const LIST: &[Field] = &[
    Field::new("projectId").array(),
    Field::new("issueTypeId").array(),
    Field::new("categoryId").array(),
    Field::new("versionId").array(),
    Field::new("milestoneId").array(),
    Field::new("statusId").array(),
    Field::new("priorityId").array(),
    Field::new("assigneeId").array(),
    Field::new("createdUserId").array(),
    Field::new("resolutionId").array(),
    Field::new("parentChild").range(0, 4),
    Field::new("attachment"),
    Field::new("sharedFile"),
    Field::new("sort"),
    schema::ORDER,
    schema::OFFSET,
    schema::COUNT,
    Field::new("createdSince").date(),
    Field::new("createdUntil").date(),
    Field::new("updatedSince").date(),
    Field::new("updatedUntil").date(),
    Field::new("startDateSince").date(),
    Field::new("startDateUntil").date(),
    Field::new("dueDateSince").date(),
    Field::new("dueDateUntil").date(),
    Field::new("id").array(),
    Field::new("parentIssueId").array(),
    Field::new("keyword"),
];

const ADD: &[Field] = &[
    Field::new("projectId").required(),
    Field::new("summary").required(),
    Field::new("issueTypeId").required(),
    Field::new("priorityId").required(),
    Field::new("parentIssueId"),
    Field::new("description"),
    Field::new("startDate").date(),
    Field::new("dueDate").date(),
    Field::new("estimatedHours"),
    Field::new("actualHours"),
    Field::new("categoryId").array(),
    Field::new("versionId").array(),
    Field::new("milestoneId").array(),
    Field::new("assigneeId"),
    Field::new("notifiedUserId").array(),
    Field::new("attachmentId").array(),
];

const UPDATE: &[Field] = &[
    Field::new("summary"),
    Field::new("parentIssueId"),
    Field::new("description"),
    Field::new("statusId"),
    Field::new("resolutionId"),
    Field::new("startDate").date(),
    Field::new("dueDate").date(),
    Field::new("estimatedHours"),
    Field::new("actualHours"),
    Field::new("issueTypeId"),
    Field::new("categoryId").array(),
    Field::new("versionId").array(),
    Field::new("milestoneId").array(),
    Field::new("priorityId"),
    Field::new("assigneeId"),
    Field::new("notifiedUserId").array(),
    Field::new("attachmentId").array(),
    Field::new("comment"),
];

const ADD_COMMENT: &[Field] = &[
    Field::new("content").required(),
    Field::new("notifiedUserId").array(),
    Field::new("attachmentId").array(),
];

const CONTENT: &[Field] = &[Field::new("content").required()];
const NOTIFY: &[Field] = &[Field::new("notifiedUserId").array().required()];
const FILE_IDS: &[Field] = &[Field::new("fileId").array().required()];

/// Search filters for [`Issues::list`] and [`Issues::count`].
///
/// Empty lists and `None` values are not sent.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueListOptions {
    pub project_id: Vec<u64>,
    pub issue_type_id: Vec<u64>,
    pub category_id: Vec<u64>,
    pub version_id: Vec<u64>,
    pub milestone_id: Vec<u64>,
    pub status_id: Vec<u64>,
    pub priority_id: Vec<u64>,
    pub assignee_id: Vec<u64>,
    pub created_user_id: Vec<u64>,
    pub resolution_id: Vec<u64>,
    /// 0: all, 1: exclude child issues, 2: child issues only,
    /// 3: neither parent nor child, 4: parent issues only.
    pub parent_child: Option<u8>,
    /// Only issues with (or without) attachments.
    pub attachment: Option<bool>,
    /// Only issues with (or without) linked shared files.
    pub shared_file: Option<bool>,
    /// Sort column, e.g. `updated` or `customField_12`.
    pub sort: Option<String>,
    pub order: Option<Order>,
    pub offset: Option<u64>,
    /// 1-100.
    pub count: Option<u32>,
    pub created_since: Option<String>,
    pub created_until: Option<String>,
    pub updated_since: Option<String>,
    pub updated_until: Option<String>,
    pub start_date_since: Option<String>,
    pub start_date_until: Option<String>,
    pub due_date_since: Option<String>,
    pub due_date_until: Option<String>,
    pub id: Vec<u64>,
    pub parent_issue_id: Vec<u64>,
    pub keyword: Option<String>,
    /// Custom field filters, sent after the standard filters.
    #[serde(skip)]
    pub custom_fields: Vec<CustomFieldFilter>,
}

impl IssueListOptions {
    fn params(&self) -> Result<Params> {
        let mut params = schema::build(LIST, self)?;
        for filter in &self.custom_fields {
            filter.append_to(&mut params)?;
        }
        Ok(params)
    }
}

/// Payload of [`Issues::add`].
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewIssue {
    pub project_id: u64,
    pub summary: String,
    pub issue_type_id: u64,
    pub priority_id: u64,
    pub parent_issue_id: Option<u64>,
    pub description: Option<String>,
    pub start_date: Option<String>,
    pub due_date: Option<String>,
    pub estimated_hours: Option<f64>,
    pub actual_hours: Option<f64>,
    pub category_id: Vec<u64>,
    pub version_id: Vec<u64>,
    pub milestone_id: Vec<u64>,
    pub assignee_id: Option<u64>,
    pub notified_user_id: Vec<u64>,
    pub attachment_id: Vec<u64>,
    #[serde(skip)]
    pub custom_fields: CustomFieldValues,
}

/// Payload of [`Issues::update`]. Only the fields that are set are sent.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueUpdate {
    pub summary: Option<String>,
    pub parent_issue_id: Option<u64>,
    pub description: Option<String>,
    pub status_id: Option<u64>,
    pub resolution_id: Option<u64>,
    pub start_date: Option<String>,
    pub due_date: Option<String>,
    pub estimated_hours: Option<f64>,
    pub actual_hours: Option<f64>,
    pub issue_type_id: Option<u64>,
    pub category_id: Vec<u64>,
    pub version_id: Vec<u64>,
    pub milestone_id: Vec<u64>,
    pub priority_id: Option<u64>,
    pub assignee_id: Option<u64>,
    pub notified_user_id: Vec<u64>,
    pub attachment_id: Vec<u64>,
    /// Comment added together with the change.
    pub comment: Option<String>,
    #[serde(skip)]
    pub custom_fields: CustomFieldValues,
}

/// Payload of [`Issues::add_comment`].
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewComment {
    pub content: String,
    pub notified_user_id: Vec<u64>,
    pub attachment_id: Vec<u64>,
}

facade!(
    /// `/api/v2/issues`
    Issues,
    "issues"
);

impl<'a> Issues<'a> {
    pub async fn list(&self, options: &IssueListOptions) -> Result<ApiResponse> {
        self.resource.send(Method::GET, "", &options.params()?).await
    }

    /// Number of issues matching `options`.
    pub async fn count(&self, options: &IssueListOptions) -> Result<ApiResponse> {
        self.resource.send(Method::GET, "count", &options.params()?).await
    }

    pub async fn get(&self, issue: &str) -> Result<ApiResponse> {
        self.resource.fetch(issue).await
    }

    pub async fn add(&self, issue: &NewIssue) -> Result<ApiResponse> {
        let mut params = schema::build(ADD, issue)?;
        issue.custom_fields.append_to(&mut params);
        self.resource.send(Method::POST, "", &params).await
    }

    pub async fn update(&self, issue: &str, update: &IssueUpdate) -> Result<ApiResponse> {
        let mut params = schema::build(UPDATE, update)?;
        update.custom_fields.append_to(&mut params);
        self.resource.send(Method::PATCH, issue, &params).await
    }

    pub async fn delete(&self, issue: &str) -> Result<ApiResponse> {
        self.resource.remove(issue).await
    }

    pub async fn attachments(&self, issue: &str) -> Result<ApiResponse> {
        self.resource.fetch(&format!("{}/attachments", issue)).await
    }

    pub async fn download_attachment(&self, issue: &str, attachment_id: u64) -> Result<Download> {
        self.resource
            .download(&format!("{}/attachments/{}", issue, attachment_id))
            .await
    }

    pub async fn delete_attachment(&self, issue: &str, attachment_id: u64) -> Result<ApiResponse> {
        self.resource
            .remove(&format!("{}/attachments/{}", issue, attachment_id))
            .await
    }

    pub async fn comments(&self, issue: &str, options: &IdPageOptions) -> Result<ApiResponse> {
        self.resource
            .get(&format!("{}/comments", issue), ID_PAGE, options)
            .await
    }

    pub async fn add_comment(&self, issue: &str, comment: &NewComment) -> Result<ApiResponse> {
        self.resource
            .post(&format!("{}/comments", issue), ADD_COMMENT, comment)
            .await
    }

    pub async fn comment(&self, issue: &str, comment_id: u64) -> Result<ApiResponse> {
        self.resource
            .fetch(&format!("{}/comments/{}", issue, comment_id))
            .await
    }

    pub async fn update_comment(&self, issue: &str, comment_id: u64, content: &str) -> Result<ApiResponse> {
        self.resource
            .patch(
                &format!("{}/comments/{}", issue, comment_id),
                CONTENT,
                &json!({ "content": content }),
            )
            .await
    }

    pub async fn delete_comment(&self, issue: &str, comment_id: u64) -> Result<ApiResponse> {
        self.resource
            .remove(&format!("{}/comments/{}", issue, comment_id))
            .await
    }

    pub async fn comment_count(&self, issue: &str) -> Result<ApiResponse> {
        self.resource
            .fetch(&format!("{}/comments/count", issue))
            .await
    }

    pub async fn comment_notifications(&self, issue: &str, comment_id: u64) -> Result<ApiResponse> {
        self.resource
            .fetch(&format!("{}/comments/{}/notifications", issue, comment_id))
            .await
    }

    /// Notifies users about an existing comment.
    pub async fn add_comment_notification(
        &self,
        issue: &str,
        comment_id: u64,
        user_ids: &[u64],
    ) -> Result<ApiResponse> {
        self.resource
            .post(
                &format!("{}/comments/{}/notifications", issue, comment_id),
                NOTIFY,
                &json!({ "notifiedUserId": user_ids }),
            )
            .await
    }

    pub async fn shared_files(&self, issue: &str) -> Result<ApiResponse> {
        self.resource.fetch(&format!("{}/sharedFiles", issue)).await
    }

    pub async fn link_shared_files(&self, issue: &str, file_ids: &[u64]) -> Result<ApiResponse> {
        self.resource
            .post(
                &format!("{}/sharedFiles", issue),
                FILE_IDS,
                &json!({ "fileId": file_ids }),
            )
            .await
    }

    pub async fn unlink_shared_file(&self, issue: &str, file_id: u64) -> Result<ApiResponse> {
        self.resource
            .remove(&format!("{}/sharedFiles/{}", issue, file_id))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::common::{ApiError, ParamValue};

    #[test]
    fn test_default_options_send_nothing() {
        assert!(IssueListOptions::default().params().unwrap().is_empty());
        assert!(schema::build(UPDATE, &IssueUpdate::default()).unwrap().is_empty());
        assert!(schema::build(ADD_COMMENT, &NewComment {
            content: "hi".into(),
            ..Default::default()
        })
        .is_ok());
    }

    #[test]
    fn test_list_filters_and_custom_fields() {
        let options = IssueListOptions {
            project_id: vec![2, 1],
            attachment: Some(false),
            keyword: Some("crash".into()),
            custom_fields: vec![
                CustomFieldFilter::Text { id: 5, value: "x".into() },
                CustomFieldFilter::DateRange {
                    id: 6,
                    min: None,
                    max: Some("2020-12-31".into()),
                },
            ],
            ..Default::default()
        };
        let pairs = options.params().unwrap().to_pairs();
        assert_eq!(
            pairs,
            vec![
                ("projectId[]".to_string(), "2".to_string()),
                ("projectId[]".to_string(), "1".to_string()),
                ("attachment".to_string(), "false".to_string()),
                ("keyword".to_string(), "crash".to_string()),
                ("customField_5".to_string(), "x".to_string()),
                ("customField_6_max".to_string(), "2020-12-31".to_string()),
            ]
        );
    }

    #[test]
    fn test_list_rejects_out_of_range() {
        let zero = IssueListOptions {
            count: Some(0),
            ..Default::default()
        };
        assert!(matches!(zero.params(), Err(ApiError::Validation(_))));

        let parent_child = IssueListOptions {
            parent_child: Some(5),
            ..Default::default()
        };
        assert!(parent_child.params().is_err());

        let date = IssueListOptions {
            created_since: Some("2019-1-1".into()),
            ..Default::default()
        };
        assert!(date.params().is_err());
    }

    #[test]
    fn test_add_includes_custom_field_values() {
        let mut custom_fields = CustomFieldValues::new();
        custom_fields.set(12, "high").set_other(13, "other");
        let issue = NewIssue {
            project_id: 1,
            summary: "s".into(),
            issue_type_id: 2,
            priority_id: 3,
            custom_fields,
            ..Default::default()
        };

        let mut params = schema::build(ADD, &issue).unwrap();
        issue.custom_fields.append_to(&mut params);
        assert_eq!(params.get("projectId"), Some(&ParamValue::Integer(1)));
        assert_eq!(params.get("customField_12"), Some(&ParamValue::Text("high".into())));
        assert!(params.contains_key("customField_13_other_value"));
        assert!(!params.contains_key("description"));
    }
}
