//
//  backlog-client
//  tests/cli.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Integration tests for the backlog binary

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

fn backlog() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("backlog"));
    for var in ["BACKLOG_CONFIG", "BACKLOG_SPACE", "BACKLOG_API_KEY", "BACKLOG_DOMAIN", "BACKLOG_DEBUG"] {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn test_version() {
    backlog()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("backlog"));
}

#[test]
fn test_version_command() {
    backlog()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_missing_secrets_file_is_config_error() {
    let temp = TempDir::new().unwrap();

    backlog()
        .args(["--config"])
        .arg(temp.path().join("missing.toml"))
        .arg("whoami")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("No credentials"));
}

#[test]
fn test_incomplete_secrets_file_is_config_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("secrets.toml");
    std::fs::write(&path, "[service]\nHost = \"acme.backlog.com\"\n").unwrap();

    backlog()
        .arg("--config")
        .arg(&path)
        .args(["api", "space"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("ApiKey"));
}

#[test]
fn test_configure_writes_secrets_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested").join("secrets.toml");

    backlog()
        .arg("--config")
        .arg(&path)
        .args(["configure", "--space-id", "acme", "--key", "k123"])
        .assert()
        .success()
        .stdout(predicate::str::contains("acme.backlog.com"));

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("[service]"));
    assert!(written.contains("Host = \"acme.backlog.com\""));
    assert!(written.contains("ApiKey = \"k123\""));
}

#[test]
fn test_unsupported_method_fails() {
    backlog()
        .args(["--space", "acme", "--api-key", "k123", "api", "-X", "TRACE", "space"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unsupported HTTP method"));
}
