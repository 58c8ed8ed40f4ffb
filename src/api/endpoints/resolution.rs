//
//  backlog-client
//  api/endpoints/resolution.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

use super::facade;
use crate::api::common::{ApiResponse, Result};

facade!(
    /// `/api/v2/resolutions`
    Resolutions,
    "resolutions"
);

impl<'a> Resolutions<'a> {
    /// The fixed list of issue resolutions.
    pub async fn list(&self) -> Result<ApiResponse> {
        self.resource.fetch("").await
    }
}
