//
//  backlog-client
//  api/endpoints/priority.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

use super::facade;
use crate::api::common::{ApiResponse, Result};

facade!(
    /// `/api/v2/priorities`
    Priorities,
    "priorities"
);

impl<'a> Priorities<'a> {
    /// The fixed list of issue priorities.
    pub async fn list(&self) -> Result<ApiResponse> {
        self.resource.fetch("").await
    }
}
