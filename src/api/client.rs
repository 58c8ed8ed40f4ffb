//
//  backlog-client
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # HTTP Transport for the Backlog API
//!
//! This module provides the one HTTP client every endpoint facade goes
//! through. It owns the base URL and API key and turns [`Params`] into
//! requests.
//!
//! ## Features
//!
//! - `apiKey` query parameter on every request
//! - GET parameters in the query string, other verbs as a form body
//! - Shared boolean encoding (`"true"` / `"false"`) for every verb
//! - File downloads named from `Content-Disposition`
//! - Multipart uploads
//! - Custom User-Agent header
//!
//! ## Notes
//!
//! - Non-2xx responses are returned, not raised
//! - There are no retries and no timeout overrides

use std::fmt;
use std::path::{Path, PathBuf};

use reqwest::header::CONTENT_DISPOSITION;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method};
use tracing::debug;
use url::Url;

use super::common::{
    filename_from_content_disposition, filename_from_url, ApiError, ApiResponse, Download, Params,
    Result,
};
use crate::config::ServiceConfig;

/// Directory downloads are written to, relative to the working directory.
pub const DOWNLOAD_DIR: &str = "tmp";

/// Filename used when neither the headers nor the URL provide one.
const FALLBACK_FILENAME: &str = "download";

/// The HTTP client for the Backlog REST API.
///
/// # Creating a Client
///
/// ```rust,no_run
/// use backlog_client::api::BacklogClient;
/// use backlog_client::config::ServiceConfig;
///
/// let config = ServiceConfig::backlog_com("acme", "your-api-key")?;
/// let client = BacklogClient::new(&config)?;
/// # Ok::<(), backlog_client::ApiError>(())
/// ```
///
/// # Raw Requests
///
/// ```rust,no_run
/// use backlog_client::api::BacklogClient;
/// use backlog_client::api::common::Params;
/// use backlog_client::config::ServiceConfig;
///
/// # async fn example() -> backlog_client::Result<()> {
/// let client = BacklogClient::new(&ServiceConfig::load()?)?;
/// let response = client
///     .get("issues", &Params::new().with("keyword", "crash"))
///     .await?;
/// println!("{} {}", response.status(), response.text());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct BacklogClient {
    /// The underlying HTTP client
    http: Client,
    /// `https://<space><domain>/api/v2/`
    base_url: Url,
    api_key: String,
}

impl fmt::Debug for BacklogClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BacklogClient")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl BacklogClient {
    /// Creates a client from a resolved configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] if the HTTP client could not be built.
    pub fn new(config: &ServiceConfig) -> Result<Self> {
        Ok(Self {
            http: Client::builder()
                .user_agent(format!("backlog-client/{}", crate::VERSION))
                .build()?,
            base_url: config.base_url().clone(),
            api_key: config.api_key().to_string(),
        })
    }

    /// Returns the base URL requests are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn url(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| ApiError::validation(format!("invalid request path `{}`: {}", path, e)))
    }

    /// Sends one request and returns the response whatever its status.
    ///
    /// # Parameters
    ///
    /// * `method` - GET, POST, PATCH, PUT or DELETE
    /// * `path` - Path relative to `/api/v2/`, e.g. `projects/DEV/categories`
    /// * `params` - Query parameters for GET, form body for everything else
    ///
    /// # Errors
    ///
    /// [`ApiError::Network`] if the request could not be completed.
    pub async fn send(&self, method: Method, path: &str, params: &Params) -> Result<ApiResponse> {
        let url = self.url(path)?;
        let pairs = params.to_pairs();

        debug!(%method, path, params = pairs.len(), "sending request");

        let mut request = self
            .http
            .request(method.clone(), url)
            .query(&[("apiKey", self.api_key.as_str())]);

        request = if method == Method::GET {
            request.query(&pairs)
        } else {
            request.form(&pairs)
        };

        let response = ApiResponse::read(request.send().await?).await?;

        debug!(%method, path, status = %response.status(), "received response");

        Ok(response)
    }

    pub async fn get(&self, path: &str, params: &Params) -> Result<ApiResponse> {
        self.send(Method::GET, path, params).await
    }

    pub async fn post(&self, path: &str, params: &Params) -> Result<ApiResponse> {
        self.send(Method::POST, path, params).await
    }

    pub async fn patch(&self, path: &str, params: &Params) -> Result<ApiResponse> {
        self.send(Method::PATCH, path, params).await
    }

    pub async fn put(&self, path: &str, params: &Params) -> Result<ApiResponse> {
        self.send(Method::PUT, path, params).await
    }

    /// DELETE with parameters in a form body.
    pub async fn delete(&self, path: &str, params: &Params) -> Result<ApiResponse> {
        self.send(Method::DELETE, path, params).await
    }

    /// Downloads a file into [`DOWNLOAD_DIR`].
    ///
    /// The filename comes from `Content-Disposition`, then from the last
    /// segment of the response URL. An existing file of the same name is
    /// overwritten. Nothing is written for a non-2xx response.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use backlog_client::api::BacklogClient;
    /// use backlog_client::api::common::Params;
    /// use backlog_client::config::ServiceConfig;
    ///
    /// # async fn example() -> backlog_client::Result<()> {
    /// let client = BacklogClient::new(&ServiceConfig::load()?)?;
    /// let download = client.download("space/image", &Params::new()).await?;
    /// match download.path {
    ///     Some(path) => println!("Saved to {}", path.display()),
    ///     None => println!("Failed: {}", download.response.status()),
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn download(&self, path: &str, params: &Params) -> Result<Download> {
        self.download_to(Path::new(DOWNLOAD_DIR), path, params).await
    }

    /// Same as [`download`](Self::download) with an explicit target directory.
    pub async fn download_to(&self, dir: &Path, path: &str, params: &Params) -> Result<Download> {
        let response = self.get(path, params).await?;

        if !response.is_success() {
            return Ok(Download {
                path: None,
                response,
            });
        }

        let filename = response
            .header(CONTENT_DISPOSITION.as_str())
            .and_then(filename_from_content_disposition)
            .or_else(|| filename_from_url(response.url()))
            .unwrap_or_else(|| FALLBACK_FILENAME.to_string());

        tokio::fs::create_dir_all(dir).await?;
        let target: PathBuf = dir.join(filename);
        tokio::fs::write(&target, response.body()).await?;

        debug!(path, file = %target.display(), bytes = response.body().len(), "saved download");

        Ok(Download {
            path: Some(target),
            response,
        })
    }

    /// Uploads `contents` as a multipart POST.
    ///
    /// # Parameters
    ///
    /// * `path` - Upload endpoint, e.g. `space/attachment`
    /// * `field` - Multipart field name (`file` for attachments)
    /// * `filename` - Name reported to the server
    /// * `contents` - File bytes
    pub async fn upload(
        &self,
        path: &str,
        field: &str,
        filename: &str,
        contents: Vec<u8>,
    ) -> Result<ApiResponse> {
        let url = self.url(path)?;

        debug!(path, field, filename, bytes = contents.len(), "uploading file");

        let part = Part::bytes(contents).file_name(filename.to_string());
        let form = Form::new().part(field.to_string(), part);

        let response = self
            .http
            .post(url)
            .query(&[("apiKey", self.api_key.as_str())])
            .multipart(form)
            .send()
            .await?;

        ApiResponse::read(response).await
    }
}
