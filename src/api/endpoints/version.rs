//
//  backlog-client
//  api/endpoints/version.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Versions (milestones) of a project.

use serde::Serialize;

use super::facade;
use crate::api::common::schema::Field;
use crate::api::common::{ApiResponse, Result};

const ADD: &[Field] = &[
    Field::new("name").required(),
    Field::new("description"),
    Field::new("startDate").date(),
    Field::new("releaseDueDate").date(),
];

const UPDATE: &[Field] = &[
    Field::new("name").required(),
    Field::new("description"),
    Field::new("startDate").date(),
    Field::new("releaseDueDate").date(),
    Field::new("archived"),
];

/// Payload of [`Versions::add`].
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewVersion {
    pub name: String,
    pub description: Option<String>,
    /// `YYYY-MM-DD`
    pub start_date: Option<String>,
    /// `YYYY-MM-DD`
    pub release_due_date: Option<String>,
}

/// Payload of [`Versions::update`]. Backlog requires the name on every update.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionUpdate {
    pub name: String,
    pub description: Option<String>,
    pub start_date: Option<String>,
    pub release_due_date: Option<String>,
    pub archived: Option<bool>,
}

facade!(
    /// `/api/v2/projects/{project}/versions`
    Versions,
    "projects"
);

impl<'a> Versions<'a> {
    pub async fn list(&self, project: &str) -> Result<ApiResponse> {
        self.resource.fetch(&format!("{}/versions", project)).await
    }

    pub async fn add(&self, project: &str, version: &NewVersion) -> Result<ApiResponse> {
        self.resource
            .post(&format!("{}/versions", project), ADD, version)
            .await
    }

    pub async fn update(&self, project: &str, version_id: u64, update: &VersionUpdate) -> Result<ApiResponse> {
        self.resource
            .patch(&format!("{}/versions/{}", project, version_id), UPDATE, update)
            .await
    }

    pub async fn delete(&self, project: &str, version_id: u64) -> Result<ApiResponse> {
        self.resource
            .remove(&format!("{}/versions/{}", project, version_id))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::common::schema;

    #[test]
    fn test_dates_validated() {
        let ok = NewVersion {
            name: "1.0".into(),
            start_date: Some("2019-01-01".into()),
            ..Default::default()
        };
        assert_eq!(schema::build(ADD, &ok).unwrap().len(), 2);

        let bad = NewVersion {
            name: "1.0".into(),
            release_due_date: Some("2019-1-1".into()),
            ..Default::default()
        };
        assert!(schema::build(ADD, &bad).is_err());
    }

    #[test]
    fn test_update_schema_matches_struct() {
        let update = VersionUpdate {
            name: "1.1".into(),
            archived: Some(true),
            ..Default::default()
        };
        let params = schema::build(UPDATE, &update).unwrap();
        assert_eq!(params.keys().collect::<Vec<_>>(), vec!["name", "archived"]);
    }
}
