//
//  backlog-client
//  cli/configure.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Writes the `[service]` table of the secrets file.

use anyhow::{Context, Result};
use clap::Args;
use console::style;

use crate::config::{write_secrets_file, Domain, SecretsFile, ServiceConfig, ServiceSection};

use super::GlobalOptions;

/// Write the secrets file
#[derive(Args, Debug)]
pub struct ConfigureCommand {
    /// Space id (e.g., acme)
    #[arg(long = "space-id")]
    pub space_id: String,

    /// API key issued from the Backlog personal settings
    #[arg(long = "key")]
    pub key: String,
}

impl ConfigureCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let domain: Domain = global.domain.parse()?;
        let config = ServiceConfig::new(&self.space_id, &self.key, domain)?;
        let path = global.secrets_path()?;

        let secrets = SecretsFile {
            service: Some(ServiceSection {
                host: Some(config.host()),
                api_key: Some(config.api_key().to_string()),
            }),
        };
        write_secrets_file(&path, &secrets)
            .with_context(|| format!("Failed to write {}", path.display()))?;

        println!(
            "{} Saved credentials for {} to {}",
            style("✓").green(),
            style(config.host()).bold(),
            path.display()
        );
        Ok(())
    }
}
