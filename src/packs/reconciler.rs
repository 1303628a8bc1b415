use std::collections::BTreeSet;
use std::path::PathBuf;

use chrono::{SecondsFormat, Utc};
use thiserror::Error;

use crate::country::CountryCode;
use crate::geo::{self, GeoError};
use crate::xrpc::{PackPublisher, StarterPackRecord, XrpcError};

use super::store::{PackRecord, PackStore, StoreError};

#[derive(Debug, Error)]
pub enum ReconcileError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Geo(#[from] GeoError),

    #[error("Publishing the {country} pack failed: {source}")]
    Remote {
        country: CountryCode,
        #[source]
        source: XrpcError,
    },
}

/// What a reconciliation did remotely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Created { uri: String, members: usize },
    Updated { added: Vec<String> },
}

/// Current time in the format records carry.
pub fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// "{prefix} {country name} {flag}", without a leading space when the
/// prefix is empty.
pub fn pack_name(prefix: &str, country: CountryCode) -> Result<String, GeoError> {
    let name = geo::country_name(country)?;
    let flag = country.flag();
    let parts = [prefix.trim(), name, flag.as_str()];
    Ok(parts.join(" ").trim_start().to_string())
}

/// Log a failed remote step and wrap it with the country it belongs to.
pub(super) fn remote_failure(country: CountryCode, source: XrpcError) -> ReconcileError {
    tracing::warn!(%country, error.kind = source.kind(), error = %source, "Remote step failed");
    ReconcileError::Remote { country, source }
}

/// Add one account to an existing pack: a list item, then a pack record
/// overwrite carrying the original creation time and a fresh `updatedAt`.
pub async fn add_member<P: PackPublisher + ?Sized>(
    publisher: &P,
    record: &PackRecord,
    member: &str,
) -> Result<(), XrpcError> {
    let now = timestamp();
    publisher
        .add_members(&record.list_uri, &[member.to_string()], &now)
        .await?;

    let pack = StarterPackRecord {
        kind: None,
        name: record.name.clone(),
        list: record.list_uri.clone(),
        feeds: Vec::new(),
        created_at: record.created_at.clone(),
        updated_at: Some(now),
    };
    publisher.update_starter_pack(&record.uri, &pack).await
}

/// Brings one country's published pack in line with its harvested members.
///
/// Members are only ever added remotely; the stored list mirrors the latest
/// harvest. The state file is rewritten after every successful reconciliation and left untouched when
/// a remote step fails, so the next run retries the same additions.
pub struct Reconciler<'a, P: PackPublisher + ?Sized> {
    publisher: &'a P,
    store_path: PathBuf,
    name_prefix: String,
}

impl<'a, P: PackPublisher + ?Sized> Reconciler<'a, P> {
    pub fn new(publisher: &'a P, store_path: impl Into<PathBuf>, name_prefix: impl Into<String>) -> Self {
        Self {
            publisher,
            store_path: store_path.into(),
            name_prefix: name_prefix.into(),
        }
    }

    pub async fn reconcile(&self, country: CountryCode, members: &[String]) -> Result<Outcome, ReconcileError> {
        let mut store = PackStore::load(&self.store_path)?;

        let mut wanted = members.to_vec();
        wanted.sort();
        wanted.dedup();

        let remote = |source| remote_failure(country, source);

        let (record, outcome) = match store.get(country) {
            None => {
                let name = pack_name(&self.name_prefix, country)?;
                let record = self.create(country, name, wanted).await.map_err(remote)?;
                let outcome = Outcome::Created {
                    uri: record.uri.clone(),
                    members: record.members.len(),
                };
                (record, outcome)
            }
            Some(existing) => {
                let known: BTreeSet<&str> = existing.members.iter().map(String::as_str).collect();
                let added: Vec<String> = wanted
                    .iter()
                    .filter(|m| !known.contains(m.as_str()))
                    .cloned()
                    .collect();

                for member in &added {
                    tracing::info!(%country, member = %member, "Adding member");
                    add_member(self.publisher, existing, member).await.map_err(remote)?;
                }

                // Remote stays add-only; the store mirrors the latest harvest.
                let mut record = existing.clone();
                record.members = wanted;
                (record, Outcome::Updated { added })
            }
        };

        store.insert(country, record);
        store.save(&self.store_path)?;
        Ok(outcome)
    }

    async fn create(&self, country: CountryCode, name: String, members: Vec<String>) -> Result<PackRecord, XrpcError> {
        let created_at = timestamp();

        tracing::info!(%country, %name, members = members.len(), "Creating starter pack");

        let list_uri = self.publisher.create_list(&name, &created_at).await?;
        self.publisher.add_members(&list_uri, &members, &created_at).await?;
        let uri = self
            .publisher
            .create_starter_pack(&name, &list_uri, &created_at)
            .await?;

        Ok(PackRecord {
            name,
            uri,
            members,
            list_uri,
            created_at,
        })
    }
}
