//
//  backlog-client
//  api/endpoints/licence.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

use super::facade;
use crate::api::common::{ApiResponse, Result};

facade!(
    /// `/api/v2/space/licence`
    Licence,
    "space/licence"
);

impl<'a> Licence<'a> {
    /// Licence (plan, limits, storage) of the space.
    pub async fn get(&self) -> Result<ApiResponse> {
        self.resource.fetch("").await
    }
}
