//
//  backlog-client
//  api/endpoints/team.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Teams.

use serde::Serialize;

use super::{facade, OffsetPageOptions, OFFSET_PAGE};
use crate::api::common::schema::Field;
use crate::api::common::{ApiResponse, Download, Result};

const ADD: &[Field] = &[Field::new("name").required(), Field::new("members").array()];
const UPDATE: &[Field] = &[Field::new("name"), Field::new("members").array()];

/// Payload of [`Teams::add`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewTeam {
    pub name: String,
    /// User ids.
    pub members: Vec<u64>,
}

/// Payload of [`Teams::update`]. `members` replaces the whole member list.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TeamUpdate {
    pub name: Option<String>,
    pub members: Vec<u64>,
}

facade!(
    /// `/api/v2/teams`
    Teams,
    "teams"
);

impl<'a> Teams<'a> {
    pub async fn list(&self, options: &OffsetPageOptions) -> Result<ApiResponse> {
        self.resource.get("", OFFSET_PAGE, options).await
    }

    pub async fn add(&self, team: &NewTeam) -> Result<ApiResponse> {
        self.resource.post("", ADD, team).await
    }

    pub async fn get(&self, team_id: u64) -> Result<ApiResponse> {
        self.resource.fetch(&team_id.to_string()).await
    }

    pub async fn update(&self, team_id: u64, update: &TeamUpdate) -> Result<ApiResponse> {
        self.resource.patch(&team_id.to_string(), UPDATE, update).await
    }

    pub async fn delete(&self, team_id: u64) -> Result<ApiResponse> {
        self.resource.remove(&team_id.to_string()).await
    }

    pub async fn icon(&self, team_id: u64) -> Result<Download> {
        self.resource.download(&format!("{}/icon", team_id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::common::schema;

    #[test]
    fn test_members_are_repeated() {
        let team = NewTeam {
            name: "Platform".into(),
            members: vec![3, 5],
        };
        let params = schema::build(ADD, &team).unwrap();
        assert_eq!(
            params.to_pairs(),
            vec![
                ("name".to_string(), "Platform".to_string()),
                ("members[]".to_string(), "3".to_string()),
                ("members[]".to_string(), "5".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_update_sends_nothing() {
        assert!(schema::build(UPDATE, &TeamUpdate::default()).unwrap().is_empty());
    }
}
