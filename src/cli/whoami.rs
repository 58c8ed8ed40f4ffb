//
//  backlog-client
//  cli/whoami.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

use anyhow::{bail, Result};
use clap::Args;
use console::style;
use serde_json::Value;

use super::GlobalOptions;

/// Show the user the API key belongs to
#[derive(Args, Debug)]
pub struct WhoamiCommand {
    /// Print the raw JSON response
    #[arg(long)]
    pub json: bool,
}

impl WhoamiCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let config = global.service_config()?;
        let client = crate::api::BacklogClient::new(&config)?;
        let response = client.users().myself().await?;

        if !response.is_success() {
            bail!(
                "Could not fetch the current user ({}): {}",
                response.status(),
                response.error_message().unwrap_or_default()
            );
        }

        let user: Value = response.json()?;
        if self.json {
            println!("{}", serde_json::to_string_pretty(&user)?);
            return Ok(());
        }

        let field = |key: &str| user.get(key).and_then(Value::as_str).unwrap_or("-").to_string();
        println!(
            "{} Logged in to {} as {} ({})",
            style("✓").green(),
            style(config.host()).bold(),
            style(field("name")).bold(),
            field("userId")
        );
        Ok(())
    }
}
