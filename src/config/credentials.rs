//! Credential resolution from configuration.
//!
//! Write access comes from a file of request headers copied out of a
//! logged-in browser ("Copy as cURL"), which is only trusted while fresh,
//! or from an account password exchanged for a session. Read access falls
//! back to anonymous calls against the public AppView.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use thiserror::Error;

use super::types::Config;

/// Headers reqwest computes itself or that would request encodings the
/// client cannot decode.
const SKIPPED_HEADERS: [&str; 4] = ["host", "content-length", "content-type", "accept-encoding"];

#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("Bearer header file '{path}' is {age_secs}s old (max {max_secs}s), copy a fresh request")]
    StaleToken {
        path: PathBuf,
        age_secs: u64,
        max_secs: u64,
    },

    #[error("Failed to read bearer header file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Bearer header file '{path}' contains no headers")]
    Empty { path: PathBuf },

    #[error("No write credentials: create '{bearer_file}' or set {password_env}")]
    Unconfigured {
        bearer_file: String,
        password_env: String,
    },
}

/// Wrapper for sensitive strings that prevents accidental logging.
///
/// The inner value is never exposed via Debug or Display traits.
/// Use `expose()` to access the actual value when needed for API calls.
#[derive(Clone, PartialEq, Eq)]
pub struct SecureString(String);

impl SecureString {
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// Use sparingly and only when actually sending to APIs.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecureString(••••••••)")
    }
}

impl std::fmt::Display for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "••••••••")
    }
}

/// What a command needs to do against the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Read,
    Write,
}

/// Resolved credentials, before any network call is made.
#[derive(Debug, Clone)]
pub enum Credentials {
    /// Headers replayed verbatim against the PDS.
    Headers(Vec<(String, SecureString)>),
    /// Handle and password to exchange for a session.
    Password {
        identifier: String,
        password: SecureString,
    },
    /// Unauthenticated public reads.
    Anonymous,
}

impl Credentials {
    /// Resolve credentials for the given access level.
    ///
    /// Reads the environment on every call, so a password exported after
    /// startup is still picked up.
    pub fn resolve(config: &Config, access: Access) -> Result<Self, CredentialError> {
        let password = password_from_env(config);

        match access {
            Access::Read => Ok(password.unwrap_or(Credentials::Anonymous)),
            Access::Write => {
                let path = Path::new(&config.auth.bearer_file);
                if path.exists() {
                    let max_age = Duration::from_secs(config.auth.max_bearer_age_seconds);
                    return read_bearer_file(path, max_age, SystemTime::now())
                        .map(Credentials::Headers);
                }

                password.ok_or_else(|| CredentialError::Unconfigured {
                    bearer_file: config.auth.bearer_file.clone(),
                    password_env: config.account.password_env.clone(),
                })
            }
        }
    }
}

fn password_from_env(config: &Config) -> Option<Credentials> {
    if config.account.handle.is_empty() {
        return None;
    }
    let password = std::env::var(&config.account.password_env).ok()?;
    if password.is_empty() {
        return None;
    }
    Some(Credentials::Password {
        identifier: config.account.handle.clone(),
        password: SecureString::new(password),
    })
}

/// Reject a modification time older than `max_age`, returning the age.
pub fn check_fresh(modified: SystemTime, now: SystemTime, max_age: Duration) -> Result<Duration, Duration> {
    // A file stamped in the future counts as brand new.
    let age = now.duration_since(modified).unwrap_or(Duration::ZERO);
    if age > max_age {
        Err(age)
    } else {
        Ok(age)
    }
}

/// Read the bearer header file, refusing it when stale.
pub fn read_bearer_file(
    path: &Path,
    max_age: Duration,
    now: SystemTime,
) -> Result<Vec<(String, SecureString)>, CredentialError> {
    let read_error = |source| CredentialError::ReadError {
        path: path.to_path_buf(),
        source,
    };

    let modified = fs::metadata(path).and_then(|m| m.modified()).map_err(read_error)?;

    check_fresh(modified, now, max_age).map_err(|age| CredentialError::StaleToken {
        path: path.to_path_buf(),
        age_secs: age.as_secs(),
        max_secs: max_age.as_secs(),
    })?;

    let content = fs::read_to_string(path).map_err(read_error)?;
    let headers = parse_header_lines(&content);
    if headers.is_empty() {
        return Err(CredentialError::Empty {
            path: path.to_path_buf(),
        });
    }

    tracing::debug!(path = %path.display(), count = headers.len(), "Loaded bearer headers");
    Ok(headers)
}

/// Extract `name: value` pairs from `-H '...'` lines of a cURL command.
///
/// Header names are lowercased. Lines without a quoted header are ignored.
pub fn parse_header_lines(content: &str) -> Vec<(String, SecureString)> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| line.starts_with("-H") || line.starts_with("--header"))
        .filter_map(quoted)
        .filter_map(|header| header.split_once(": "))
        .map(|(name, value)| (name.trim().to_ascii_lowercase(), value.trim()))
        .filter(|(name, _)| !SKIPPED_HEADERS.contains(&name.as_str()))
        .map(|(name, value)| (name, SecureString::new(value.to_string())))
        .collect()
}

fn quoted(line: &str) -> Option<&str> {
    let quote = line.find(['\'', '"'])?;
    let mark = line[quote..].chars().next()?;
    let rest = &line[quote + 1..];
    let end = rest.find(mark)?;
    Some(&rest[..end])
}
