//
//  backlog-client
//  api/endpoints/webhook.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Project webhooks.

use serde::Serialize;

use super::facade;
use crate::api::common::schema::Field;
use crate::api::common::{ApiResponse, Result};

const ADD: &[Field] = &[
    Field::new("name").required(),
    Field::new("description"),
    Field::new("hookUrl").required(),
    Field::new("allEvent"),
    Field::new("activityTypeIds").array(),
];

const UPDATE: &[Field] = &[
    Field::new("name"),
    Field::new("description"),
    Field::new("hookUrl"),
    Field::new("allEvent"),
    Field::new("activityTypeIds").array(),
];

/// Payload of [`Webhooks::add`].
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWebhook {
    pub name: String,
    pub description: Option<String>,
    pub hook_url: String,
    /// Notify on every event, ignoring `activity_type_ids`.
    pub all_event: Option<bool>,
    pub activity_type_ids: Vec<u64>,
}

/// Payload of [`Webhooks::update`].
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub hook_url: Option<String>,
    pub all_event: Option<bool>,
    pub activity_type_ids: Vec<u64>,
}

facade!(
    /// `/api/v2/projects/{project}/webhooks`
    Webhooks,
    "projects"
);

impl<'a> Webhooks<'a> {
    pub async fn list(&self, project: &str) -> Result<ApiResponse> {
        self.resource.fetch(&format!("{}/webhooks", project)).await
    }

    pub async fn get(&self, project: &str, webhook_id: u64) -> Result<ApiResponse> {
        self.resource
            .fetch(&format!("{}/webhooks/{}", project, webhook_id))
            .await
    }

    pub async fn add(&self, project: &str, webhook: &NewWebhook) -> Result<ApiResponse> {
        self.resource
            .post(&format!("{}/webhooks", project), ADD, webhook)
            .await
    }

    pub async fn update(&self, project: &str, webhook_id: u64, update: &WebhookUpdate) -> Result<ApiResponse> {
        self.resource
            .patch(&format!("{}/webhooks/{}", project, webhook_id), UPDATE, update)
            .await
    }

    pub async fn delete(&self, project: &str, webhook_id: u64) -> Result<ApiResponse> {
        self.resource
            .remove(&format!("{}/webhooks/{}", project, webhook_id))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::common::schema;

    #[test]
    fn test_payloads() {
        let webhook = NewWebhook {
            name: "ci".into(),
            hook_url: "https://ci.example.com/hook".into(),
            activity_type_ids: vec![1, 2],
            ..Default::default()
        };
        let params = schema::build(ADD, &webhook).unwrap();
        assert_eq!(params.get_all("activityTypeIds[]").len(), 2);
        assert!(schema::build(UPDATE, &WebhookUpdate::default()).unwrap().is_empty());
    }
}
