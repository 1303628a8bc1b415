//! Tests for CLI argument parsing, running the actual binary.

mod common;

use common::temp_config;
use std::process::Command;

fn flagpacks_cmd() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_flagpacks"));
    cmd.env_remove("RUST_LOG").env_remove("FLAGPACKS_LOG");
    cmd
}

#[test]
fn test_help_lists_subcommands() {
    let output = flagpacks_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for subcommand in ["replies", "starter", "starter-packs", "pull", "push", "post", "create"] {
        assert!(stdout.contains(subcommand), "missing {} in help:\n{}", subcommand, stdout);
    }
    assert!(stdout.contains("--config"));
}

#[test]
fn test_missing_subcommand_is_a_usage_error() {
    let output = flagpacks_cmd().output().expect("Failed to execute command");
    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_missing_config_file_exits_with_error() {
    let dir = tempfile::tempdir().unwrap();
    let output = flagpacks_cmd()
        .arg("--config")
        .arg(dir.path().join("missing.toml"))
        .arg("pull")
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Failed to read config file"), "got: {}", stderr);
}

#[test]
fn test_invalid_config_is_reported() {
    let (_dir, path) = temp_config("[packs]\nmin_members = 0\n");
    let output = flagpacks_cmd()
        .arg("--config")
        .arg(&path)
        .arg("pull")
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("min_members"), "got: {}", stderr);
}

#[test]
fn test_handle_in_did_field_is_reported() {
    let (_dir, path) = temp_config("[account]\ndid = \"alice.bsky.social\"\n");
    let output = flagpacks_cmd()
        .arg("--config")
        .arg(&path)
        .arg("push")
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("alice.bsky.social"), "got: {}", stderr);
}

#[test]
fn test_replies_without_posts_is_an_error() {
    let (_dir, path) = temp_config("[account]\ndid = \"did:plc:alice\"\n");
    let output = flagpacks_cmd()
        .arg("--config")
        .arg(&path)
        .args(["replies", "--dry-run"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No posts configured"), "got: {}", stderr);
}

#[test]
fn test_create_requires_members() {
    let output = flagpacks_cmd()
        .args(["create", "--name", "Pack"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("<DID>"), "got: {}", stderr);
}

#[test]
fn test_create_rejects_non_did_members() {
    let (_dir, path) = temp_config("[account]\ndid = \"did:plc:alice\"\n");
    let output = flagpacks_cmd()
        .arg("--config")
        .arg(&path)
        .args(["create", "--name", "Pack", "did:plc:a", "bob.bsky.social"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("'bob.bsky.social' is not a DID"), "got: {}", stderr);
}
