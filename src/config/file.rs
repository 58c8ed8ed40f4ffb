//
//  backlog-client
//  config/file.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Secrets File I/O Module
//!
//! Reads the TOML secrets file that holds the Backlog host and API key.
//!
//! ## Format
//!
//! ```toml
//! [service]
//! Host = "acme.backlog.com"
//! ApiKey = "your-api-key"
//! ```
//!
//! ## Notes
//!
//! - Both values are plain TOML strings and must be quoted
//! - A missing `[service]` table or key is reported by
//!   [`ServiceConfig::load_from`](super::ServiceConfig::load_from), not here

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::api::common::{ApiError, Result};

/// Parsed contents of the secrets file.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct SecretsFile {
    /// The `[service]` table.
    pub service: Option<ServiceSection>,
}

/// The `[service]` table of the secrets file.
#[derive(Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct ServiceSection {
    /// Space host, e.g. `acme.backlog.com`.
    #[serde(rename = "Host")]
    pub host: Option<String>,

    /// API key issued from the Backlog personal settings page.
    #[serde(rename = "ApiKey")]
    pub api_key: Option<String>,
}

impl std::fmt::Debug for ServiceSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceSection")
            .field("host", &self.host)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Reads and parses a secrets file.
///
/// # Errors
///
/// Returns [`ApiError::Configuration`] if the file cannot be read or is not
/// valid TOML.
///
/// # Example
///
/// ```rust,no_run
/// use std::path::Path;
/// use backlog_client::config::read_secrets_file;
///
/// let secrets = read_secrets_file(Path::new("secrets.toml"))?;
/// if let Some(service) = secrets.service {
///     println!("Host: {:?}", service.host);
/// }
/// # Ok::<(), backlog_client::ApiError>(())
/// ```
pub fn read_secrets_file(path: &Path) -> Result<SecretsFile> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        ApiError::configuration(format!("cannot read {}: {}", path.display(), e))
    })?;

    toml::from_str(&content)
        .map_err(|e| ApiError::configuration(format!("cannot parse {}: {}", path.display(), e)))
}

/// Writes a secrets file, creating parent directories as needed.
pub fn write_secrets_file(path: &Path, secrets: &SecretsFile) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(secrets)
        .map_err(|e| ApiError::configuration(format!("cannot serialize secrets: {}", e)))?;
    std::fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_service_table() {
        let secrets: SecretsFile =
            toml::from_str("[service]\nHost = \"acme.backlog.com\"\nApiKey = \"k123\"\n").unwrap();
        let service = secrets.service.unwrap();
        assert_eq!(service.host.as_deref(), Some("acme.backlog.com"));
        assert_eq!(service.api_key.as_deref(), Some("k123"));
    }

    #[test]
    fn test_debug_hides_key() {
        let section = ServiceSection {
            host: Some("acme.backlog.com".into()),
            api_key: Some("k123".into()),
        };
        assert!(!format!("{:?}", section).contains("k123"));
    }

    #[test]
    fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("secrets.toml");
        let secrets = SecretsFile {
            service: Some(ServiceSection {
                host: Some("acme.backlog.jp".into()),
                api_key: Some("abc".into()),
            }),
        };

        write_secrets_file(&path, &secrets).unwrap();
        assert_eq!(read_secrets_file(&path).unwrap(), secrets);
    }

    #[test]
    fn test_missing_file_is_configuration_error() {
        let err = read_secrets_file(Path::new("/nonexistent/secrets.toml")).unwrap_err();
        assert!(matches!(err, ApiError::Configuration(_)));
    }
}
