//
//  backlog-client
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Configuration Module
//!
//! Resolves where requests go and which API key signs them.
//!
//! ## Overview
//!
//! A [`ServiceConfig`] is the only thing a
//! [`BacklogClient`](crate::api::BacklogClient) needs. It can be built:
//!
//! - Explicitly from a space id, API key and [`Domain`]
//! - From a host name such as `acme.backlog.com`
//! - From a full base URL (proxies, tests)
//! - From the TOML secrets file, with [`ServiceConfig::load`] or
//!   [`ServiceConfig::load_from`]
//!
//! Loading from a file is never implicit.
//!
//! ## Example
//!
//! ```rust
//! use backlog_client::config::{Domain, ServiceConfig};
//!
//! let config = ServiceConfig::new("acme", "k123", Domain::Custom(".example.com".into()))?;
//! assert_eq!(config.base_url().as_str(), "https://acme.example.com/api/v2/");
//! # Ok::<(), backlog_client::ApiError>(())
//! ```
//!
//! ## Default Secrets Path
//!
//! | Platform | Path |
//! |----------|------|
//! | Linux | `~/.config/backlog/secrets.toml` |
//! | macOS | `~/Library/Application Support/backlog/secrets.toml` |
//! | Windows | `C:\Users\<User>\AppData\Roaming\backlog\config\secrets.toml` |

mod file;

pub use file::*;

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use directories::ProjectDirs;
use url::Url;

use crate::api::common::{ApiError, Result};

/// Name of the secrets file inside the config directory.
pub const SECRETS_FILE: &str = "secrets.toml";

/// Domain suffix of a Backlog space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Domain {
    /// `.backlog.com`
    BacklogCom,
    /// `.backlog.jp`
    BacklogJp,
    /// `.backlogtool.com`
    BacklogTool,
    /// Any other suffix, including the leading dot.
    Custom(String),
}

impl Domain {
    pub fn suffix(&self) -> &str {
        match self {
            Domain::BacklogCom => ".backlog.com",
            Domain::BacklogJp => ".backlog.jp",
            Domain::BacklogTool => ".backlogtool.com",
            Domain::Custom(suffix) => suffix,
        }
    }
}

impl Default for Domain {
    fn default() -> Self {
        Domain::BacklogCom
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

impl FromStr for Domain {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ApiError::configuration("domain must not be empty"));
        }
        let suffix = if s.starts_with('.') {
            s.to_string()
        } else {
            format!(".{}", s)
        };
        Ok(match suffix.as_str() {
            ".backlog.com" => Domain::BacklogCom,
            ".backlog.jp" => Domain::BacklogJp,
            ".backlogtool.com" => Domain::BacklogTool,
            _ => Domain::Custom(suffix),
        })
    }
}

/// Fully resolved connection settings.
///
/// Always holds a valid base URL ending in `/` and a non-empty API key.
#[derive(Clone, PartialEq)]
pub struct ServiceConfig {
    base_url: Url,
    api_key: String,
}

impl fmt::Debug for ServiceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceConfig")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl ServiceConfig {
    /// Builds `https://{space_id}{domain}/api/v2/`.
    ///
    /// # Errors
    ///
    /// [`ApiError::Configuration`] if the space id or API key is blank, or the
    /// space id contains characters that cannot be part of a host.
    pub fn new(space_id: &str, api_key: &str, domain: Domain) -> Result<Self> {
        let space_id = space_id.trim();
        if space_id.is_empty() {
            return Err(ApiError::configuration("space id must not be empty"));
        }
        if space_id.contains(['/', ':', '@', '?', '#']) {
            return Err(ApiError::configuration(format!(
                "space id `{}` is not a valid host label",
                space_id
            )));
        }
        Self::from_host(&format!("{}{}", space_id, domain.suffix()), api_key)
    }

    pub fn backlog_com(space_id: &str, api_key: &str) -> Result<Self> {
        Self::new(space_id, api_key, Domain::BacklogCom)
    }

    pub fn backlog_jp(space_id: &str, api_key: &str) -> Result<Self> {
        Self::new(space_id, api_key, Domain::BacklogJp)
    }

    pub fn backlogtool(space_id: &str, api_key: &str) -> Result<Self> {
        Self::new(space_id, api_key, Domain::BacklogTool)
    }

    /// Builds `https://{host}/api/v2/` from a host such as `acme.backlog.com`.
    pub fn from_host(host: &str, api_key: &str) -> Result<Self> {
        let host = host.trim().trim_end_matches('/');
        if host.is_empty() {
            return Err(ApiError::configuration("host must not be empty"));
        }
        Self::with_base_url(&format!("https://{}/api/v2/", host), api_key)
    }

    /// Uses `base_url` as is (a trailing `/` is added when missing).
    ///
    /// Meant for proxies and tests; no `/api/v2/` is appended.
    pub fn with_base_url(base_url: &str, api_key: &str) -> Result<Self> {
        let api_key = api_key.trim();
        if api_key.is_empty() {
            return Err(ApiError::configuration("API key must not be empty"));
        }

        let mut raw = base_url.trim().to_string();
        if !raw.ends_with('/') {
            raw.push('/');
        }
        let base_url = Url::parse(&raw)
            .map_err(|e| ApiError::configuration(format!("invalid base URL `{}`: {}", raw, e)))?;
        if base_url.cannot_be_a_base() || base_url.host_str().is_none() {
            return Err(ApiError::configuration(format!("invalid base URL `{}`", raw)));
        }

        Ok(Self {
            base_url,
            api_key: api_key.to_string(),
        })
    }

    /// Loads the secrets file at [`default_path`](Self::default_path).
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_path()?)
    }

    /// Loads a secrets file with a `[service]` table holding `Host` and `ApiKey`.
    ///
    /// # Errors
    ///
    /// [`ApiError::Configuration`] if the file is unreadable, malformed, or
    /// lacks either value.
    pub fn load_from(path: &Path) -> Result<Self> {
        let secrets = read_secrets_file(path)?;
        let service = secrets.service.ok_or_else(|| {
            ApiError::configuration(format!("{} has no [service] table", path.display()))
        })?;

        let host = service
            .host
            .filter(|h| !h.trim().is_empty())
            .ok_or_else(|| ApiError::configuration(format!("{} has no service Host", path.display())))?;
        let api_key = service
            .api_key
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| ApiError::configuration(format!("{} has no service ApiKey", path.display())))?;

        Self::from_host(&host, &api_key)
    }

    /// Platform config directory joined with `backlog/secrets.toml`.
    pub fn default_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("", "", crate::APP_NAME)
            .ok_or_else(|| ApiError::configuration("could not determine config directory"))?;
        Ok(dirs.config_dir().join(SECRETS_FILE))
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Host (and port, if any) requests are sent to.
    pub fn host(&self) -> String {
        match (self.base_url.host_str(), self.base_url.port()) {
            (Some(host), Some(port)) => format!("{}:{}", host, port),
            (Some(host), None) => host.to_string(),
            _ => String::new(),
        }
    }
}
