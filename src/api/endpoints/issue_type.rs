//
//  backlog-client
//  api/endpoints/issue_type.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Issue types of a project.

use serde::Serialize;
use serde_json::json;

use super::facade;
use crate::api::common::schema::Field;
use crate::api::common::{ApiResponse, Result};

const ADD: &[Field] = &[Field::new("name").required(), Field::new("color").required()];
const UPDATE: &[Field] = &[Field::new("name"), Field::new("color")];
const DELETE: &[Field] = &[Field::new("substituteIssueTypeId").required()];

/// Payload of [`IssueTypes::update`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct IssueTypeUpdate {
    pub name: Option<String>,
    /// One of Backlog's palette colours, e.g. `#e30000`.
    pub color: Option<String>,
}

facade!(
    /// `/api/v2/projects/{project}/issueTypes`
    IssueTypes,
    "projects"
);

impl<'a> IssueTypes<'a> {
    pub async fn list(&self, project: &str) -> Result<ApiResponse> {
        self.resource.fetch(&format!("{}/issueTypes", project)).await
    }

    pub async fn add(&self, project: &str, name: &str, color: &str) -> Result<ApiResponse> {
        self.resource
            .post(
                &format!("{}/issueTypes", project),
                ADD,
                &json!({ "name": name, "color": color }),
            )
            .await
    }

    pub async fn update(
        &self,
        project: &str,
        issue_type_id: u64,
        update: &IssueTypeUpdate,
    ) -> Result<ApiResponse> {
        self.resource
            .patch(&format!("{}/issueTypes/{}", project, issue_type_id), UPDATE, update)
            .await
    }

    /// Deletes an issue type; its issues move to `substitute_issue_type_id`.
    pub async fn delete(
        &self,
        project: &str,
        issue_type_id: u64,
        substitute_issue_type_id: u64,
    ) -> Result<ApiResponse> {
        self.resource
            .delete(
                &format!("{}/issueTypes/{}", project, issue_type_id),
                DELETE,
                &json!({ "substituteIssueTypeId": substitute_issue_type_id }),
            )
            .await
    }
}
