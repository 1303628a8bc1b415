//! On-disk memoization of thread fetches.
//!
//! Entries are keyed by post URI and never expire; delete the directory to
//! refetch.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;

use super::error::XrpcError;
use super::traits::GraphReader;
use super::types::StarterPackView;

pub struct ThreadCache {
    dir: PathBuf,
}

impl ThreadCache {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            dir: root.as_ref().join("threads"),
        }
    }

    pub fn path_for(&self, uri: &str) -> PathBuf {
        let key: String = uri
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '.' { c } else { '_' })
            .collect();
        self.dir.join(format!("{}.json", key))
    }

    /// Cached thread for `uri`. Unreadable JSON counts as a miss.
    pub fn get(&self, uri: &str) -> Result<Option<Value>, XrpcError> {
        let path = self.path_for(uri);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(XrpcError::Cache { path, source }),
        };

        match serde_json::from_str(&content) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Ignoring corrupt cache entry");
                Ok(None)
            }
        }
    }

    pub fn put(&self, uri: &str, thread: &Value) -> Result<(), XrpcError> {
        let path = self.path_for(uri);
        let cache_error = |source| XrpcError::Cache {
            path: path.clone(),
            source,
        };

        fs::create_dir_all(&self.dir).map_err(cache_error)?;
        let content = serde_json::to_string(thread).map_err(|e| cache_error(e.into()))?;
        fs::write(&path, content).map_err(cache_error)
    }
}

/// A reader whose thread fetches go through a [`ThreadCache`].
pub struct CachedReader<R> {
    inner: R,
    cache: ThreadCache,
}

impl<R: GraphReader> CachedReader<R> {
    pub fn new(inner: R, cache: ThreadCache) -> Self {
        Self { inner, cache }
    }
}

#[async_trait]
impl<R: GraphReader> GraphReader for CachedReader<R> {
    async fn post_thread_raw(&self, uri: &str) -> Result<Value, XrpcError> {
        if let Some(hit) = self.cache.get(uri)? {
            tracing::debug!(uri, "Thread cache hit");
            return Ok(hit);
        }

        let thread = self.inner.post_thread_raw(uri).await?;
        self.cache.put(uri, &thread)?;
        Ok(thread)
    }

    async fn starter_pack(&self, uri: &str) -> Result<StarterPackView, XrpcError> {
        self.inner.starter_pack(uri).await
    }

    async fn list_members(&self, list_uri: &str) -> Result<Vec<String>, XrpcError> {
        self.inner.list_members(list_uri).await
    }

    async fn actor_starter_packs(&self, actor: &str) -> Result<Vec<StarterPackView>, XrpcError> {
        self.inner.actor_starter_packs(actor).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingReader {
        fetches: AtomicUsize,
    }

    #[async_trait]
    impl GraphReader for CountingReader {
        async fn post_thread_raw(&self, uri: &str) -> Result<Value, XrpcError> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            Ok(json!({"thread": {"post": null, "replies": [], "uri": uri}}))
        }

        async fn starter_pack(&self, uri: &str) -> Result<StarterPackView, XrpcError> {
            Err(XrpcError::InvalidUri { uri: uri.to_string() })
        }

        async fn list_members(&self, _list_uri: &str) -> Result<Vec<String>, XrpcError> {
            Ok(Vec::new())
        }

        async fn actor_starter_packs(&self, _actor: &str) -> Result<Vec<StarterPackView>, XrpcError> {
            Ok(Vec::new())
        }
    }

    #[test]
    fn keys_are_filesystem_safe() {
        let cache = ThreadCache::new("/tmp/c");
        let path = cache.path_for("at://did:plc:me/app.bsky.feed.post/3lbo");
        assert_eq!(
            path,
            PathBuf::from("/tmp/c/threads/at___did_plc_me_app.bsky.feed.post_3lbo.json")
        );
    }

    #[tokio::test]
    async fn second_fetch_is_served_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let reader = CachedReader::new(
            CountingReader {
                fetches: AtomicUsize::new(0),
            },
            ThreadCache::new(dir.path()),
        );

        let uri = "at://did:plc:me/app.bsky.feed.post/1";
        let first = reader.post_thread_raw(uri).await.unwrap();
        let second = reader.post_thread_raw(uri).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(reader.inner.fetches.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn corrupt_entry_is_refetched() {
        let dir = tempfile::tempdir().unwrap();
        let cache = ThreadCache::new(dir.path());
        let uri = "at://did:plc:me/app.bsky.feed.post/2";
        fs::create_dir_all(cache.path_for(uri).parent().unwrap()).unwrap();
        fs::write(cache.path_for(uri), "{not json").unwrap();

        let reader = CachedReader::new(
            CountingReader {
                fetches: AtomicUsize::new(0),
            },
            cache,
        );
        reader.post_thread_raw(uri).await.unwrap();
        assert_eq!(reader.inner.fetches.load(Ordering::SeqCst), 1);
    }
}
