//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_xrpc;

use flagpacks::config::{Config, SecureString};
use flagpacks::country::CountryCode;
use flagpacks::xrpc::XrpcClient;
use std::path::PathBuf;
use tempfile::TempDir;

pub use mock_xrpc::{CapturedCall, MockResponse, MockXrpc};

pub const REPO: &str = "did:plc:owner";

pub fn code(s: &str) -> CountryCode {
    CountryCode::parse(s).expect("valid country code")
}

/// Config whose every service URL points at `base`.
pub fn config_for(base: &str) -> Config {
    let mut config = Config::default();
    config.account.did = REPO.to_string();
    config.service.pds_url = base.to_string();
    config.service.appview_url = base.to_string();
    config.service.entryway_url = base.to_string();
    config.service.timeout_seconds = 5;
    config.service.connect_timeout_seconds = 2;
    config
}

/// A client that reads anonymously from the mock and writes with a fixed
/// bearer header.
pub fn write_client(mock: &MockXrpc) -> XrpcClient {
    let config = config_for(&mock.base_url());
    XrpcClient::new(&config.service, REPO)
        .expect("client builds")
        .with_write_headers(vec![(
            "authorization".to_string(),
            SecureString::new("Bearer test-token".to_string()),
        )])
}

/// Create a temporary config file with the given TOML body.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// A getPostThread response with one reply per `(did, text)`.
pub fn thread_json(replies: &[(&str, &str)]) -> serde_json::Value {
    let replies: Vec<serde_json::Value> = replies
        .iter()
        .enumerate()
        .map(|(i, (did, text))| {
            serde_json::json!({
                "$type": "app.bsky.feed.defs#threadViewPost",
                "post": {
                    "uri": format!("at://{}/app.bsky.feed.post/r{}", did, i),
                    "author": { "did": did, "handle": format!("user{}.bsky.social", i) },
                    "record": { "$type": "app.bsky.feed.post", "text": text },
                },
                "replies": [],
            })
        })
        .collect();

    serde_json::json!({
        "thread": {
            "$type": "app.bsky.feed.defs#threadViewPost",
            "post": {
                "uri": "at://did:plc:owner/app.bsky.feed.post/root",
                "author": { "did": REPO, "handle": "owner.bsky.social" },
                "record": { "text": "Where are you building from?" },
            },
            "replies": replies,
        }
    })
}
