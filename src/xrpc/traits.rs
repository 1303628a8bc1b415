//! Collaborator interfaces the harvester and reconciler consume.

use async_trait::async_trait;
use serde_json::Value;

use super::error::XrpcError;
use super::types::{PostThread, StarterPackRecord, StarterPackView, GET_POST_THREAD};

/// Read side of the social graph.
#[async_trait]
pub trait GraphReader: Send + Sync {
    /// Fetch a thread as the server returned it.
    async fn post_thread_raw(&self, uri: &str) -> Result<Value, XrpcError>;

    /// Fetch a thread and decode it.
    async fn post_thread(&self, uri: &str) -> Result<PostThread, XrpcError> {
        let raw = self.post_thread_raw(uri).await?;
        serde_json::from_value(raw).map_err(|source| XrpcError::Decode {
            nsid: GET_POST_THREAD.to_string(),
            source,
        })
    }

    async fn starter_pack(&self, uri: &str) -> Result<StarterPackView, XrpcError>;

    /// DIDs of the accounts on a list (first page only).
    async fn list_members(&self, list_uri: &str) -> Result<Vec<String>, XrpcError>;

    async fn actor_starter_packs(&self, actor: &str) -> Result<Vec<StarterPackView>, XrpcError>;
}

/// Write side: the records that make up a starter pack.
///
/// Every method is one remote round-trip. Implementations report a record
/// the server did not validate as [`XrpcError::Validation`].
#[async_trait]
pub trait PackPublisher: Send + Sync {
    /// Create a reference list, returning its URI.
    async fn create_list(&self, name: &str, created_at: &str) -> Result<String, XrpcError>;

    /// Add accounts to a list in one batch.
    async fn add_members(
        &self,
        list_uri: &str,
        members: &[String],
        created_at: &str,
    ) -> Result<(), XrpcError>;

    /// Create the starter pack record pointing at a list, returning its URI.
    async fn create_starter_pack(
        &self,
        name: &str,
        list_uri: &str,
        created_at: &str,
    ) -> Result<String, XrpcError>;

    /// Overwrite an existing starter pack record.
    async fn update_starter_pack(
        &self,
        pack_uri: &str,
        record: &StarterPackRecord,
    ) -> Result<(), XrpcError>;
}
