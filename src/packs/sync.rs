//! Pulling remote pack state into the state file, and pushing local
//! members the remote side lacks.

use std::collections::BTreeSet;
use std::path::Path;

use crate::xrpc::{GraphReader, PackPublisher};

use crate::xrpc::types::LIST_PAGE_SIZE;

use super::reconciler::{add_member, remote_failure, ReconcileError};
use super::store::PackStore;

/// Overwrite each stored record's members, list and creation time with what
/// the network currently publishes. Returns the number of records refreshed.
pub async fn pull<R: GraphReader + ?Sized>(reader: &R, store_path: &Path) -> Result<usize, ReconcileError> {
    let mut store = PackStore::load(store_path)?;

    for (country, record) in store.iter_mut() {
        let remote = |source| remote_failure(country, source);

        let view = reader.starter_pack(&record.uri).await.map_err(remote)?;
        let mut members = reader.list_members(&view.record.list).await.map_err(remote)?;
        if page_is_full(members.len()) {
            tracing::warn!(
                %country,
                members = members.len(),
                "List returned a full page; members beyond it are not fetched"
            );
        }
        members.sort();
        members.dedup();

        tracing::info!(
            %country,
            local = record.members.len(),
            remote = members.len(),
            "Pulled starter pack"
        );

        record.members = members;
        record.list_uri = view.record.list;
        record.created_at = view.record.created_at;
    }

    store.save(store_path)?;
    Ok(store.len())
}

/// `getList` is not paged, so a full page may hide further members.
fn page_is_full(len: usize) -> bool {
    len >= LIST_PAGE_SIZE
}

/// Add every locally stored member that is missing from the remote list.
/// The state file is not modified. Returns the number of members added.
pub async fn push<R, P>(reader: &R, publisher: &P, store_path: &Path) -> Result<usize, ReconcileError>
where
    R: GraphReader + ?Sized,
    P: PackPublisher + ?Sized,
{
    let store = PackStore::load(store_path)?;
    let mut added = 0;

    for (country, record) in store.iter() {
        let remote = |source| remote_failure(country, source);

        let published: BTreeSet<String> = reader
            .list_members(&record.list_uri)
            .await
            .map_err(remote)?
            .into_iter()
            .collect();

        for member in record.members.iter().filter(|m| !published.contains(*m)) {
            tracing::info!(%country, member = %member, "Pushing member");
            add_member(publisher, record, member).await.map_err(remote)?;
            added += 1;
        }
    }

    Ok(added)
}
