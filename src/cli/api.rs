//
//  backlog-client
//  cli/api.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Direct API access command
//!
//! Sends one request to any `/api/v2` path through the library transport,
//! so the API key is added the same way the facades add it. Useful for
//! endpoints without a dedicated command and for debugging.
//!
//! ## Examples
//!
//! ```bash
//! # Space information
//! backlog api space
//!
//! # Add a category
//! backlog api -X POST projects/DEV/categories -F name=UI
//!
//! # Repeated keys become lists
//! backlog api issues -F 'projectId[]=1' -F 'projectId[]=2' -F count=5
//! ```

use anyhow::{bail, Context, Result};
use clap::Args;
use console::style;
use reqwest::Method;
use serde_json::Value;

use crate::api::common::{ParamValue, Params};

use super::GlobalOptions;

/// Send a raw API request
#[derive(Args, Debug)]
pub struct ApiCommand {
    /// Path relative to /api/v2 (e.g., projects/DEV/issueTypes)
    pub endpoint: String,

    /// HTTP method (GET, POST, PUT, PATCH, DELETE)
    #[arg(long, short = 'X', default_value = "GET")]
    pub method: String,

    /// Parameters as key=value (can be specified multiple times)
    #[arg(long, short = 'F', action = clap::ArgAction::Append)]
    pub field: Vec<String>,

    /// Include response status and headers in output
    #[arg(long, short = 'i')]
    pub include: bool,

    /// Suppress the response body
    #[arg(long)]
    pub silent: bool,
}

impl ApiCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let method = self.parse_method()?;
        let params = self.build_params()?;
        let client = global.client()?;

        let response = client
            .send(method, &self.endpoint, &params)
            .await
            .with_context(|| format!("Request to {} failed", self.endpoint))?;

        if self.include {
            println!("{} {}", style("HTTP").dim(), response.status());
            for (name, value) in response.headers().iter() {
                println!("{}: {}", name, value.to_str().unwrap_or(""));
            }
            println!();
        }

        if !self.silent {
            match response.json_value() {
                Ok(json) => println!("{}", serde_json::to_string_pretty(&json)?),
                Err(_) => println!("{}", response.text()),
            }
        }

        if !response.is_success() {
            match response.error_message() {
                Some(message) => bail!("Request failed with status {}: {}", response.status(), message),
                None => bail!("Request failed with status {}", response.status()),
            }
        }

        Ok(())
    }

    fn parse_method(&self) -> Result<Method> {
        match self.method.to_uppercase().as_str() {
            "GET" => Ok(Method::GET),
            "POST" => Ok(Method::POST),
            "PUT" => Ok(Method::PUT),
            "PATCH" => Ok(Method::PATCH),
            "DELETE" => Ok(Method::DELETE),
            _ => bail!("Unsupported HTTP method: {}", self.method),
        }
    }

    /// Repeated keys are kept in order; the last `key=value` for a plain key wins.
    fn build_params(&self) -> Result<Params> {
        let mut params = Params::new();

        for field in &self.field {
            let (key, value) = field
                .split_once('=')
                .with_context(|| format!("Invalid field format: {}. Expected key=value", field))?;
            let key = key.trim();
            if key.is_empty() {
                bail!("Invalid field format: {}. Empty key", field);
            }

            let value = parse_value(value);
            if key.ends_with("[]") {
                params.append(key, value);
            } else {
                params.insert(key, value);
            }
        }

        Ok(params)
    }
}

fn parse_value(raw: &str) -> ParamValue {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Bool(b)) => ParamValue::Bool(b),
        Ok(Value::Number(n)) if n.is_i64() => ParamValue::Integer(n.as_i64().unwrap_or_default()),
        _ => ParamValue::Text(raw.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(fields: &[&str]) -> ApiCommand {
        ApiCommand {
            endpoint: "issues".into(),
            method: "get".into(),
            field: fields.iter().map(|f| f.to_string()).collect(),
            include: false,
            silent: false,
        }
    }

    #[test]
    fn test_build_params() {
        let params = command(&["projectId[]=1", "projectId[]=2", "keyword=login crash", "attachment=true"])
            .build_params()
            .unwrap();
        assert_eq!(
            params.to_pairs(),
            vec![
                ("projectId[]".to_string(), "1".to_string()),
                ("projectId[]".to_string(), "2".to_string()),
                ("keyword".to_string(), "login crash".to_string()),
                ("attachment".to_string(), "true".to_string()),
            ]
        );
        assert_eq!(params.get("attachment"), Some(&ParamValue::Bool(true)));
    }

    #[test]
    fn test_invalid_field() {
        assert!(command(&["novalue"]).build_params().is_err());
        assert!(command(&["=x"]).build_params().is_err());
    }

    #[test]
    fn test_parse_method() {
        assert_eq!(command(&[]).parse_method().unwrap(), Method::GET);
        let mut cmd = command(&[]);
        cmd.method = "TRACE".into();
        assert!(cmd.parse_method().is_err());
    }
}
