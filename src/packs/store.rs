//! The local state file: which starter pack was published for which country.

use std::collections::BTreeMap;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use chrono::DateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::country::CountryCode;
use crate::xrpc::types::record_key;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to read state file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse state file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid record for {country} in '{path}': {message}")]
    Invalid {
        path: PathBuf,
        country: CountryCode,
        message: String,
    },

    #[error("Failed to write state file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// One published starter pack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackRecord {
    /// Display name, e.g. "#buildinpublic Switzerland 🇨🇭".
    pub name: String,
    /// `at://` URI of the starter pack record.
    pub uri: String,
    /// Member DIDs, sorted and unique.
    pub members: Vec<String>,
    /// `at://` URI of the list backing the pack.
    pub list_uri: String,
    /// Creation time of the pack record (RFC 3339).
    pub created_at: String,
}

impl PackRecord {
    fn check(&self) -> Result<(), String> {
        if record_key(&self.uri).is_none() {
            return Err(format!("uri '{}' is not an at:// record URI", self.uri));
        }
        if record_key(&self.list_uri).is_none() {
            return Err(format!("list_uri '{}' is not an at:// record URI", self.list_uri));
        }
        if let Some(member) = self.members.iter().find(|m| !m.starts_with("did:")) {
            return Err(format!("member '{}' is not a DID", member));
        }
        DateTime::parse_from_rfc3339(&self.created_at)
            .map_err(|e| format!("created_at '{}': {}", self.created_at, e))?;
        Ok(())
    }
}

/// Country code to published pack, read and written as a whole.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackStore {
    packs: BTreeMap<CountryCode, PackRecord>,
}

impl PackStore {
    /// Load and validate the state file. A missing file is an empty store.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No state file yet");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(StoreError::ReadError {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let store: PackStore = serde_json::from_str(&content).map_err(|source| StoreError::ParseError {
            path: path.to_path_buf(),
            source,
        })?;

        for (country, record) in &store.packs {
            record.check().map_err(|message| StoreError::Invalid {
                path: path.to_path_buf(),
                country: *country,
                message,
            })?;
        }

        Ok(store)
    }

    /// Write the whole store, pretty-printed, replacing the file in one rename.
    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        let write_error = |source| StoreError::WriteError {
            path: path.to_path_buf(),
            source,
        };

        let dir = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };

        let mut content = serde_json::to_string_pretty(self).map_err(|e| write_error(e.into()))?;
        content.push('\n');

        let mut file = tempfile::NamedTempFile::new_in(dir).map_err(write_error)?;
        file.write_all(content.as_bytes()).map_err(write_error)?;
        file.persist(path).map_err(|e| write_error(e.error))?;

        tracing::debug!(path = %path.display(), packs = self.packs.len(), "Saved state file");
        Ok(())
    }

    pub fn get(&self, country: CountryCode) -> Option<&PackRecord> {
        self.packs.get(&country)
    }

    pub fn insert(&mut self, country: CountryCode, record: PackRecord) {
        self.packs.insert(country, record);
    }

    pub fn iter(&self) -> impl Iterator<Item = (CountryCode, &PackRecord)> {
        self.packs.iter().map(|(c, r)| (*c, r))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (CountryCode, &mut PackRecord)> {
        self.packs.iter_mut().map(|(c, r)| (*c, r))
    }

    pub fn len(&self) -> usize {
        self.packs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packs.is_empty()
    }
}
