//
//  backlog-client
//  api/resource.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Generic endpoint facade.
//!
//! Every resource type (issues, projects, wikis...) is a thin wrapper around
//! a [`Resource`]: a client reference plus the first path segment. An
//! operation is a verb, a path tail and a static [`Field`] schema; the
//! caller's options are validated by [`schema::build`] before anything is
//! sent.
//!
//! ```rust,no_run
//! use backlog_client::api::{BacklogClient, Resource};
//! use backlog_client::api::common::schema::{self, Field};
//! use backlog_client::config::ServiceConfig;
//! use serde_json::json;
//!
//! const ADD: &[Field] = &[Field::new("name").required()];
//!
//! # async fn example() -> backlog_client::Result<()> {
//! let client = BacklogClient::new(&ServiceConfig::load()?)?;
//! let projects = Resource::new(&client, "projects");
//! let response = projects.post("DEV/categories", ADD, &json!({"name": "UI"})).await?;
//! # Ok(())
//! # }
//! ```

use reqwest::Method;
use serde::Serialize;

use super::client::BacklogClient;
use super::common::schema::{self, Field};
use super::common::{ApiResponse, Download, Params, Result};

/// A client bound to one top-level path segment.
#[derive(Debug, Clone, Copy)]
pub struct Resource<'a> {
    client: &'a BacklogClient,
    base: &'static str,
}

impl<'a> Resource<'a> {
    pub fn new(client: &'a BacklogClient, base: &'static str) -> Self {
        Self { client, base }
    }

    pub fn client(&self) -> &'a BacklogClient {
        self.client
    }

    /// `base` joined with `tail`; an empty tail is the collection itself.
    pub fn path(&self, tail: &str) -> String {
        let tail = tail.trim_matches('/');
        if tail.is_empty() {
            self.base.to_string()
        } else {
            format!("{}/{}", self.base, tail)
        }
    }

    /// Validates `options` against `fields` and sends the request.
    pub async fn call<T: Serialize + ?Sized>(
        &self,
        method: Method,
        tail: &str,
        fields: &[Field],
        options: &T,
    ) -> Result<ApiResponse> {
        let params = schema::build(fields, options)?;
        self.send(method, tail, &params).await
    }

    /// Sends already-built parameters.
    pub async fn send(&self, method: Method, tail: &str, params: &Params) -> Result<ApiResponse> {
        self.client.send(method, &self.path(tail), params).await
    }

    pub async fn get<T: Serialize + ?Sized>(
        &self,
        tail: &str,
        fields: &[Field],
        options: &T,
    ) -> Result<ApiResponse> {
        self.call(Method::GET, tail, fields, options).await
    }

    pub async fn post<T: Serialize + ?Sized>(
        &self,
        tail: &str,
        fields: &[Field],
        options: &T,
    ) -> Result<ApiResponse> {
        self.call(Method::POST, tail, fields, options).await
    }

    pub async fn patch<T: Serialize + ?Sized>(
        &self,
        tail: &str,
        fields: &[Field],
        options: &T,
    ) -> Result<ApiResponse> {
        self.call(Method::PATCH, tail, fields, options).await
    }

    pub async fn put<T: Serialize + ?Sized>(
        &self,
        tail: &str,
        fields: &[Field],
        options: &T,
    ) -> Result<ApiResponse> {
        self.call(Method::PUT, tail, fields, options).await
    }

    pub async fn delete<T: Serialize + ?Sized>(
        &self,
        tail: &str,
        fields: &[Field],
        options: &T,
    ) -> Result<ApiResponse> {
        self.call(Method::DELETE, tail, fields, options).await
    }

    /// GET without parameters.
    pub async fn fetch(&self, tail: &str) -> Result<ApiResponse> {
        self.send(Method::GET, tail, &Params::new()).await
    }

    /// DELETE without parameters.
    pub async fn remove(&self, tail: &str) -> Result<ApiResponse> {
        self.send(Method::DELETE, tail, &Params::new()).await
    }

    pub async fn download(&self, tail: &str) -> Result<Download> {
        self.client.download(&self.path(tail), &Params::new()).await
    }

    pub async fn upload(
        &self,
        tail: &str,
        field: &str,
        filename: &str,
        contents: Vec<u8>,
    ) -> Result<ApiResponse> {
        self.client.upload(&self.path(tail), field, filename, contents).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServiceConfig;

    #[test]
    fn test_path() {
        let client = BacklogClient::new(&ServiceConfig::backlog_com("acme", "k").unwrap()).unwrap();
        let resource = Resource::new(&client, "projects");
        assert_eq!(resource.path(""), "projects");
        assert_eq!(resource.path("DEV/categories/3"), "projects/DEV/categories/3");
        assert_eq!(resource.path("/DEV/"), "projects/DEV");
    }
}
