//
//  backlog-client
//  api/endpoints/category.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Issue categories of a project.

use serde_json::json;

use super::facade;
use crate::api::common::schema::Field;
use crate::api::common::{ApiResponse, Result};

const NAME: &[Field] = &[Field::new("name").required()];

facade!(
    /// `/api/v2/projects/{project}/categories`
    Categories,
    "projects"
);

impl<'a> Categories<'a> {
    pub async fn list(&self, project: &str) -> Result<ApiResponse> {
        self.resource.fetch(&format!("{}/categories", project)).await
    }

    pub async fn add(&self, project: &str, name: &str) -> Result<ApiResponse> {
        self.resource
            .post(&format!("{}/categories", project), NAME, &json!({ "name": name }))
            .await
    }

    pub async fn update(&self, project: &str, category_id: u64, name: &str) -> Result<ApiResponse> {
        self.resource
            .patch(
                &format!("{}/categories/{}", project, category_id),
                NAME,
                &json!({ "name": name }),
            )
            .await
    }

    pub async fn delete(&self, project: &str, category_id: u64) -> Result<ApiResponse> {
        self.resource
            .remove(&format!("{}/categories/{}", project, category_id))
            .await
    }
}
