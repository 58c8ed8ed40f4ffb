//
//  backlog-client
//  api/endpoints/user.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! User endpoints.
//!
//! Covers the user directory, the authenticated user ("myself"), user icons,
//! activity feeds, received stars and the recently viewed lists.

use serde::Serialize;

use super::{facade, ActivityOptions, IdPageOptions, OffsetPageOptions, ID_PAGE, OFFSET_PAGE, USER_ACTIVITIES};
use crate::api::common::schema::Field;
use crate::api::common::{ApiResponse, Download, Result};

const STAR_COUNT: &[Field] = &[Field::new("since").date(), Field::new("until").date()];

/// Date window for [`Users::star_count`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct StarCountOptions {
    /// `YYYY-MM-DD`
    pub since: Option<String>,
    /// `YYYY-MM-DD`
    pub until: Option<String>,
}

facade!(
    /// `/api/v2/users`
    Users,
    "users"
);

impl<'a> Users<'a> {
    pub async fn list(&self) -> Result<ApiResponse> {
        self.resource.fetch("").await
    }

    pub async fn get(&self, user_id: u64) -> Result<ApiResponse> {
        self.resource.fetch(&user_id.to_string()).await
    }

    /// The user the API key belongs to.
    pub async fn myself(&self) -> Result<ApiResponse> {
        self.resource.fetch("myself").await
    }

    /// Downloads the user's icon.
    pub async fn icon(&self, user_id: u64) -> Result<Download> {
        self.resource.download(&format!("{}/icon", user_id)).await
    }

    /// Recent updates by the user.
    pub async fn activities(&self, user_id: u64, options: &ActivityOptions) -> Result<ApiResponse> {
        self.resource
            .get(&format!("{}/activities", user_id), USER_ACTIVITIES, options)
            .await
    }

    /// Stars the user received.
    pub async fn stars(&self, user_id: u64, options: &IdPageOptions) -> Result<ApiResponse> {
        self.resource
            .get(&format!("{}/stars", user_id), ID_PAGE, options)
            .await
    }

    /// Number of stars the user received in a date window.
    pub async fn star_count(&self, user_id: u64, options: &StarCountOptions) -> Result<ApiResponse> {
        self.resource
            .get(&format!("{}/stars/count", user_id), STAR_COUNT, options)
            .await
    }

    pub async fn recently_viewed_issues(&self, options: &OffsetPageOptions) -> Result<ApiResponse> {
        self.resource
            .get("myself/recentlyViewedIssues", OFFSET_PAGE, options)
            .await
    }

    pub async fn recently_viewed_projects(&self, options: &OffsetPageOptions) -> Result<ApiResponse> {
        self.resource
            .get("myself/recentlyViewedProjects", OFFSET_PAGE, options)
            .await
    }

    pub async fn recently_viewed_wikis(&self, options: &OffsetPageOptions) -> Result<ApiResponse> {
        self.resource
            .get("myself/recentlyViewedWikis", OFFSET_PAGE, options)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::common::{schema, ApiError};

    #[test]
    fn test_star_count_dates() {
        assert!(schema::build(STAR_COUNT, &StarCountOptions::default()).unwrap().is_empty());

        let bad = StarCountOptions {
            since: Some("2019-1-1".into()),
            until: None,
        };
        assert!(matches!(schema::build(STAR_COUNT, &bad), Err(ApiError::Validation(_))));
    }
}
