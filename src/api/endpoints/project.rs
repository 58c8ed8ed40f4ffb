//
//  backlog-client
//  api/endpoints/project.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Project endpoints.
//!
//! Projects are addressed by id or key (`"1073"` or `"DEV"`). Besides the
//! project itself this facade manages project members, administrators and
//! teams.
//!
//! # Example
//!
//! ```rust,no_run
//! use backlog_client::api::BacklogClient;
//! use backlog_client::api::common::TextFormattingRule;
//! use backlog_client::api::endpoints::project::NewProject;
//! use backlog_client::config::ServiceConfig;
//!
//! # async fn example() -> backlog_client::Result<()> {
//! let client = BacklogClient::new(&ServiceConfig::load()?)?;
//!
//! let project = NewProject {
//!     name: "Development".to_string(),
//!     key: "DEV".to_string(),
//!     chart_enabled: true,
//!     subtasking_enabled: false,
//!     text_formatting_rule: TextFormattingRule::Markdown,
//!     project_leader_can_edit_project_leader: None,
//! };
//! let response = client.projects().add(&project).await?;
//! println!("{}", response.status());
//! # Ok(())
//! # }
//! ```
//!
//! # Notes
//!
//! - Project keys may only contain `A-Z`, `0-9` and `_`; anything else is
//!   rejected before the request is sent

use serde::Serialize;
use serde_json::json;

use super::{facade, ActivityOptions, ACTIVITIES};
use crate::api::common::schema::{Field, TEXT_FORMATTING_RULES};
use crate::api::common::{ApiResponse, Download, Result, TextFormattingRule};

const LIST: &[Field] = &[Field::new("archived"), Field::new("all")];

const ADD: &[Field] = &[
    Field::new("name").required(),
    Field::new("key").required().project_key(),
    Field::new("chartEnabled").required(),
    Field::new("subtaskingEnabled").required(),
    Field::new("projectLeaderCanEditProjectLeader"),
    Field::new("textFormattingRule").required().one_of(TEXT_FORMATTING_RULES),
];

const UPDATE: &[Field] = &[
    Field::new("name"),
    Field::new("key").project_key(),
    Field::new("chartEnabled"),
    Field::new("subtaskingEnabled"),
    Field::new("projectLeaderCanEditProjectLeader"),
    Field::new("textFormattingRule").one_of(TEXT_FORMATTING_RULES),
    Field::new("archived"),
];

const USERS: &[Field] = &[Field::new("excludeGroupMembers")];
const USER_ID: &[Field] = &[Field::new("userId").required()];
const TEAM_ID: &[Field] = &[Field::new("teamId").required()];

/// Filters for [`Projects::list`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProjectListOptions {
    /// Only archived (`true`) or only active (`false`) projects.
    pub archived: Option<bool>,
    /// Every project in the space, not only those the user joined (admins only).
    pub all: Option<bool>,
}

/// Payload of [`Projects::add`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    pub name: String,
    /// `^[A-Z0-9_]+$`
    pub key: String,
    pub chart_enabled: bool,
    pub subtasking_enabled: bool,
    pub text_formatting_rule: TextFormattingRule,
    pub project_leader_can_edit_project_leader: Option<bool>,
}

/// Payload of [`Projects::update`]. Only the fields that are set are sent.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectUpdate {
    pub name: Option<String>,
    pub key: Option<String>,
    pub chart_enabled: Option<bool>,
    pub subtasking_enabled: Option<bool>,
    pub project_leader_can_edit_project_leader: Option<bool>,
    pub text_formatting_rule: Option<TextFormattingRule>,
    pub archived: Option<bool>,
}

facade!(
    /// `/api/v2/projects`
    Projects,
    "projects"
);

impl<'a> Projects<'a> {
    pub async fn list(&self, options: &ProjectListOptions) -> Result<ApiResponse> {
        self.resource.get("", LIST, options).await
    }

    pub async fn add(&self, project: &NewProject) -> Result<ApiResponse> {
        self.resource.post("", ADD, project).await
    }

    pub async fn get(&self, project: &str) -> Result<ApiResponse> {
        self.resource.fetch(project).await
    }

    pub async fn update(&self, project: &str, update: &ProjectUpdate) -> Result<ApiResponse> {
        self.resource.patch(project, UPDATE, update).await
    }

    pub async fn delete(&self, project: &str) -> Result<ApiResponse> {
        self.resource.remove(project).await
    }

    /// Downloads the project icon.
    pub async fn icon(&self, project: &str) -> Result<Download> {
        self.resource.download(&format!("{}/image", project)).await
    }

    /// Recent updates in the project.
    pub async fn activities(&self, project: &str, options: &ActivityOptions) -> Result<ApiResponse> {
        self.resource
            .get(&format!("{}/activities", project), ACTIVITIES, options)
            .await
    }

    /// Project members. `exclude_group_members` hides users who only belong
    /// through a team.
    pub async fn users(&self, project: &str, exclude_group_members: Option<bool>) -> Result<ApiResponse> {
        self.resource
            .get(
                &format!("{}/users", project),
                USERS,
                &json!({ "excludeGroupMembers": exclude_group_members }),
            )
            .await
    }

    pub async fn add_user(&self, project: &str, user_id: u64) -> Result<ApiResponse> {
        self.resource
            .post(&format!("{}/users", project), USER_ID, &json!({ "userId": user_id }))
            .await
    }

    pub async fn delete_user(&self, project: &str, user_id: u64) -> Result<ApiResponse> {
        self.resource
            .delete(&format!("{}/users", project), USER_ID, &json!({ "userId": user_id }))
            .await
    }

    pub async fn administrators(&self, project: &str) -> Result<ApiResponse> {
        self.resource
            .fetch(&format!("{}/administrators", project))
            .await
    }

    pub async fn add_administrator(&self, project: &str, user_id: u64) -> Result<ApiResponse> {
        self.resource
            .post(
                &format!("{}/administrators", project),
                USER_ID,
                &json!({ "userId": user_id }),
            )
            .await
    }

    pub async fn delete_administrator(&self, project: &str, user_id: u64) -> Result<ApiResponse> {
        self.resource
            .delete(
                &format!("{}/administrators", project),
                USER_ID,
                &json!({ "userId": user_id }),
            )
            .await
    }

    pub async fn teams(&self, project: &str) -> Result<ApiResponse> {
        self.resource.fetch(&format!("{}/teams", project)).await
    }

    pub async fn add_team(&self, project: &str, team_id: u64) -> Result<ApiResponse> {
        self.resource
            .post(&format!("{}/teams", project), TEAM_ID, &json!({ "teamId": team_id }))
            .await
    }

    pub async fn delete_team(&self, project: &str, team_id: u64) -> Result<ApiResponse> {
        self.resource
            .delete(&format!("{}/teams", project), TEAM_ID, &json!({ "teamId": team_id }))
            .await
    }

    pub async fn disk_usage(&self, project: &str) -> Result<ApiResponse> {
        self.resource.fetch(&format!("{}/diskUsage", project)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::common::{schema, ApiError, ParamValue};

    fn new_project(key: &str) -> NewProject {
        NewProject {
            name: "Development".into(),
            key: key.into(),
            chart_enabled: true,
            subtasking_enabled: false,
            text_formatting_rule: TextFormattingRule::Markdown,
            project_leader_can_edit_project_leader: None,
        }
    }

    #[test]
    fn test_add_payload() {
        let params = schema::build(ADD, &new_project("DEV_2")).unwrap();
        assert_eq!(params.get("key"), Some(&ParamValue::Text("DEV_2".into())));
        assert_eq!(params.get("chartEnabled").map(|v| v.encode()).as_deref(), Some("true"));
        assert_eq!(params.get("subtaskingEnabled").map(|v| v.encode()).as_deref(), Some("false"));
        assert_eq!(
            params.get("textFormattingRule"),
            Some(&ParamValue::Text("markdown".into()))
        );
        assert!(!params.contains_key("projectLeaderCanEditProjectLeader"));
    }

    #[test]
    fn test_bad_project_key() {
        for key in ["dev", "DEV-1", "DÉV", ""] {
            assert!(
                matches!(schema::build(ADD, &new_project(key)), Err(ApiError::Validation(_))),
                "{}",
                key
            );
        }
    }

    #[test]
    fn test_update_sends_only_supplied() {
        assert!(schema::build(UPDATE, &ProjectUpdate::default()).unwrap().is_empty());
        assert!(schema::build(LIST, &ProjectListOptions::default()).unwrap().is_empty());

        let update = ProjectUpdate {
            archived: Some(true),
            key: Some("bad key".into()),
            ..Default::default()
        };
        assert!(schema::build(UPDATE, &update).is_err());
    }
}
