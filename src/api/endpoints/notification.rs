//
//  backlog-client
//  api/endpoints/notification.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Notifications of the calling user.

use serde::Serialize;

use super::facade;
use crate::api::common::schema::{self, Field};
use crate::api::common::{ApiResponse, Order, Params, Result};

const LIST: &[Field] = &[
    schema::MIN_ID,
    schema::MAX_ID,
    schema::COUNT,
    schema::ORDER,
    Field::new("senderId"),
];

const COUNT: &[Field] = &[Field::new("alreadyRead"), Field::new("resourceAlreadyRead")];

/// Filters for [`Notifications::list`].
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationListOptions {
    pub min_id: Option<u64>,
    pub max_id: Option<u64>,
    /// 1-100.
    pub count: Option<u32>,
    pub order: Option<Order>,
    pub sender_id: Option<u64>,
}

/// Filters for [`Notifications::count`].
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationCountOptions {
    pub already_read: Option<bool>,
    pub resource_already_read: Option<bool>,
}

facade!(
    /// `/api/v2/notifications`
    Notifications,
    "notifications"
);

impl<'a> Notifications<'a> {
    pub async fn list(&self, options: &NotificationListOptions) -> Result<ApiResponse> {
        self.resource.get("", LIST, options).await
    }

    pub async fn count(&self, options: &NotificationCountOptions) -> Result<ApiResponse> {
        self.resource.get("count", COUNT, options).await
    }

    pub async fn mark_as_read(&self, notification_id: u64) -> Result<ApiResponse> {
        self.resource
            .send(
                reqwest::Method::POST,
                &format!("{}/markAsRead", notification_id),
                &Params::new(),
            )
            .await
    }

    /// Resets the unread notification counter to zero.
    pub async fn reset_unread(&self) -> Result<ApiResponse> {
        self.resource
            .send(reqwest::Method::POST, "markAsRead", &Params::new())
            .await
    }
}
