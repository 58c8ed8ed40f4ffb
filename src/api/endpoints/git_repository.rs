//
//  backlog-client
//  api/endpoints/git_repository.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

use super::facade;
use crate::api::common::{ApiResponse, Result};

facade!(
    /// `/api/v2/projects/{project}/git/repositories`
    GitRepositories,
    "projects"
);

impl<'a> GitRepositories<'a> {
    pub async fn list(&self, project: &str) -> Result<ApiResponse> {
        self.resource
            .fetch(&format!("{}/git/repositories", project))
            .await
    }

    /// `repository` is the repository id or name.
    pub async fn get(&self, project: &str, repository: &str) -> Result<ApiResponse> {
        self.resource
            .fetch(&format!("{}/git/repositories/{}", project, repository))
            .await
    }
}
