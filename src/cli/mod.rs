//
//  backlog-client
//  cli/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! CLI command definitions using clap derive macros

mod api;
mod configure;
mod transfer;
mod whoami;

pub use api::ApiCommand;
pub use configure::ConfigureCommand;
pub use transfer::{DownloadCommand, UploadCommand};
pub use whoami::WhoamiCommand;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::api::BacklogClient;
use crate::config::{Domain, ServiceConfig};

/// Backlog CLI - Talk to the Backlog API from the command line
#[derive(Parser, Debug)]
#[command(
    name = "backlog",
    version,
    about = "Talk to the Backlog API from the command line",
    long_about = "backlog sends authenticated requests to a Backlog space.\n\n\
                  Credentials come from --space/--api-key or the secrets file.",
    propagate_version = true,
    after_help = "Use 'backlog <command> --help' for more information about a command."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOptions,
}

/// Global options available to all commands
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Secrets file to read instead of the default one
    #[arg(long, global = true, env = "BACKLOG_CONFIG")]
    pub config: Option<PathBuf>,

    /// Space id, e.g. `acme` for acme.backlog.com
    #[arg(long, global = true, env = "BACKLOG_SPACE")]
    pub space: Option<String>,

    /// API key (takes precedence over the secrets file together with --space)
    #[arg(long, global = true, env = "BACKLOG_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Domain suffix of the space
    #[arg(long, global = true, env = "BACKLOG_DOMAIN", default_value = ".backlog.com")]
    pub domain: String,
}

impl GlobalOptions {
    /// Resolves credentials: `--space` plus `--api-key` if both are given,
    /// otherwise the secrets file.
    pub fn service_config(&self) -> Result<ServiceConfig> {
        if let (Some(space), Some(api_key)) = (&self.space, &self.api_key) {
            let domain: Domain = self.domain.parse()?;
            return Ok(ServiceConfig::new(space, api_key, domain)?);
        }

        let config = match &self.config {
            Some(path) => ServiceConfig::load_from(path),
            None => ServiceConfig::load(),
        };
        config.context("No credentials. Pass --space and --api-key or run 'backlog configure'")
    }

    /// Builds a client from [`service_config`](Self::service_config).
    pub fn client(&self) -> Result<BacklogClient> {
        Ok(BacklogClient::new(&self.service_config()?)?)
    }

    /// Where `configure` writes and the loaders read by default.
    pub fn secrets_path(&self) -> Result<PathBuf> {
        match &self.config {
            Some(path) => Ok(path.clone()),
            None => Ok(ServiceConfig::default_path()?),
        }
    }
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Send a raw API request
    Api(ApiCommand),

    /// Download a file endpoint into ./tmp
    Download(DownloadCommand),

    /// Upload a file to the space attachment area
    Upload(UploadCommand),

    /// Show the user the API key belongs to
    Whoami(WhoamiCommand),

    /// Write the secrets file
    Configure(ConfigureCommand),

    /// Print version information
    Version,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;

    #[test]
    fn test_flags_take_precedence() {
        let global = GlobalOptions {
            space: Some("acme".into()),
            api_key: Some("k123".into()),
            domain: "backlog.jp".into(),
            config: Some(PathBuf::from("/nonexistent/secrets.toml")),
        };
        let config = global.service_config().unwrap();
        assert_eq!(config.base_url().as_str(), "https://acme.backlog.jp/api/v2/");
    }

    #[test]
    fn test_missing_file_is_configuration_error() {
        let global = GlobalOptions {
            config: Some(PathBuf::from("/nonexistent/secrets.toml")),
            domain: ".backlog.com".into(),
            ..Default::default()
        };
        let err = global.service_config().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ApiError>(),
            Some(ApiError::Configuration(_))
        ));
    }

    #[test]
    fn test_parse_api_command() {
        let cli = Cli::try_parse_from([
            "backlog", "--space", "acme", "api", "-X", "POST", "projects/DEV/categories", "-F", "name=UI",
        ])
        .unwrap();
        assert_eq!(cli.global.space.as_deref(), Some("acme"));
        match cli.command {
            Commands::Api(cmd) => {
                assert_eq!(cmd.method, "POST");
                assert_eq!(cmd.field, vec!["name=UI".to_string()]);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
