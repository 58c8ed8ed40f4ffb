//
//  backlog-client
//  api/endpoints/status.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Issue statuses of a project.
//!
//! Statuses are defined per project. Deleting one moves its issues to a
//! substitute status, and the display order is replaced wholesale by
//! [`Statuses::update_display_order`].

use serde::Serialize;
use serde_json::json;

use super::facade;
use crate::api::common::schema::Field;
use crate::api::common::{ApiResponse, Result};

const ADD: &[Field] = &[Field::new("name").required(), Field::new("color").required()];
const UPDATE: &[Field] = &[Field::new("name"), Field::new("color")];
const DELETE: &[Field] = &[Field::new("substituteStatusId").required()];
const ORDER: &[Field] = &[Field::new("statusId").array().required()];

/// Payload of [`Statuses::update`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct StatusUpdate {
    pub name: Option<String>,
    pub color: Option<String>,
}

facade!(
    /// `/api/v2/projects/{project}/statuses`
    Statuses,
    "projects"
);

impl<'a> Statuses<'a> {
    pub async fn list(&self, project: &str) -> Result<ApiResponse> {
        self.resource.fetch(&format!("{}/statuses", project)).await
    }

    pub async fn add(&self, project: &str, name: &str, color: &str) -> Result<ApiResponse> {
        self.resource
            .post(
                &format!("{}/statuses", project),
                ADD,
                &json!({ "name": name, "color": color }),
            )
            .await
    }

    pub async fn update(&self, project: &str, status_id: u64, update: &StatusUpdate) -> Result<ApiResponse> {
        self.resource
            .patch(&format!("{}/statuses/{}", project, status_id), UPDATE, update)
            .await
    }

    pub async fn delete(
        &self,
        project: &str,
        status_id: u64,
        substitute_status_id: u64,
    ) -> Result<ApiResponse> {
        self.resource
            .delete(
                &format!("{}/statuses/{}", project, status_id),
                DELETE,
                &json!({ "substituteStatusId": substitute_status_id }),
            )
            .await
    }

    /// Sets the display order; `status_ids` must list every status.
    pub async fn update_display_order(&self, project: &str, status_ids: &[u64]) -> Result<ApiResponse> {
        self.resource
            .patch(
                &format!("{}/statuses/updateDisplayOrder", project),
                ORDER,
                &json!({ "statusId": status_ids }),
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::common::schema;

    #[test]
    fn test_display_order_keeps_sequence() {
        let params = schema::build(ORDER, &json!({ "statusId": [4, 1, 3, 2] })).unwrap();
        let ids: Vec<String> = params.iter().map(|(_, v)| v.encode()).collect();
        assert_eq!(ids, vec!["4", "1", "3", "2"]);
        assert!(params.keys().all(|k| k == "statusId[]"));
    }

    #[test]
    fn test_display_order_requires_ids() {
        assert!(schema::build(ORDER, &json!({ "statusId": [] })).is_err());
    }
}
