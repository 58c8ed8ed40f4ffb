//
//  backlog-client
//  cli/transfer.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! File download and upload commands

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use console::style;

use crate::api::common::Params;

use super::GlobalOptions;

/// Download a file endpoint into ./tmp
#[derive(Args, Debug)]
pub struct DownloadCommand {
    /// Path relative to /api/v2 (e.g., space/image, users/12/icon)
    pub path: String,

    /// Directory to save into
    #[arg(long, short = 'd')]
    pub dir: Option<PathBuf>,
}

impl DownloadCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;

        let download = match &self.dir {
            Some(dir) => client.download_to(dir, &self.path, &Params::new()).await,
            None => client.download(&self.path, &Params::new()).await,
        }
        .with_context(|| format!("Failed to download {}", self.path))?;

        match &download.path {
            Some(path) => {
                println!("{} Saved {}", style("✓").green(), path.display());
                Ok(())
            }
            None => {
                let status = download.response.status();
                match download.response.error_message() {
                    Some(message) => bail!("Download failed with status {}: {}", status, message),
                    None => bail!("Download failed with status {}", status),
                }
            }
        }
    }
}

/// Upload a file to the space attachment area
#[derive(Args, Debug)]
pub struct UploadCommand {
    /// File to upload
    pub file: PathBuf,

    /// Name reported to the server (defaults to the file name)
    #[arg(long)]
    pub name: Option<String>,
}

impl UploadCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let attachments = client.attachments();

        let response = match &self.name {
            Some(name) => {
                let contents = tokio::fs::read(&self.file)
                    .await
                    .with_context(|| format!("Failed to read {}", self.file.display()))?;
                attachments.upload(name, contents).await?
            }
            None => attachments.upload_file(&self.file).await?,
        };

        if !response.is_success() {
            match response.error_message() {
                Some(message) => bail!("Upload failed with status {}: {}", response.status(), message),
                None => bail!("Upload failed with status {}", response.status()),
            }
        }

        let body = response.json_value()?;
        let id = body.get("id").map(|id| id.to_string()).unwrap_or_default();
        println!(
            "{} Uploaded {} (attachment id {})",
            style("✓").green(),
            self.file.display(),
            style(id).bold()
        );
        Ok(())
    }
}
