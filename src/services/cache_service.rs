use std::sync::Arc;

use dashmap::DashMap;
use log::{debug, error, info, warn};
use tokio::sync::Mutex;

use super::file_service::{FileService, ensure_safe_id};
use super::renderer::Render;
use crate::errors::WikiError;
use crate::types::Page;
use crate::utils::normalize_path;

type LockTable = DashMap<String, Arc<Mutex<()>>>;

/// One identifier's lock, held for the length of a lookup. Dropping it,
/// including when the lookup future is cancelled, removes the table entry
/// once only the table and this lease refer to the lock.
struct LockLease<'a> {
    locks: &'a LockTable,
    id: &'a str,
    lock: Arc<Mutex<()>>,
}

impl<'a> LockLease<'a> {
    fn acquire(locks: &'a LockTable, id: &'a str) -> Self {
        let lock = locks.entry(id.to_owned()).or_default().value().clone();
        Self { locks, id, lock }
    }
}

impl Drop for LockLease<'_> {
    fn drop(&mut self) {
        self.locks.remove_if(self.id, |_, lock| Arc::strong_count(lock) == 2);
    }
}

/// Serves rendered documents from the on-disk cache, regenerating entries
/// whose source is newer and pruning entries whose source is gone.
///
/// Every lookup for one identifier runs under that identifier's lock, so a
/// burst of requests for a stale page triggers a single render; the rest see
/// the fresh cache entry.
pub struct CacheService<R> {
    files: FileService,
    renderer: R,
    locks: LockTable,
}

impl<R: Render> CacheService<R> {
    pub fn new(files: FileService, renderer: R) -> Self {
        Self { files, renderer, locks: DashMap::new() }
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Look up `id`, rendering and caching it if needed.
    pub async fn fetch(&self, id: &str) -> Result<Page, WikiError> {
        let id = normalize_path(id);
        ensure_safe_id(&id)?;

        let lease = LockLease::acquire(&self.locks, &id);
        let _guard = lease.lock.lock().await;
        self.fetch_locked(&id).await
    }

    async fn fetch_locked(&self, id: &str) -> Result<Page, WikiError> {
        let source = self.files.source_path(id);
        let cached = self.files.cache_path(id);

        let Some(source_time) = self.files.modified(&source).await? else {
            match self.files.remove(&cached).await {
                Ok(true) => info!("Source for '{}' is gone, removed its cache", id),
                Ok(false) => {}
                Err(e) => warn!("Error removing unused cache for '{}': {}", id, e),
            }
            info!("Document '{}' was not found", id);
            return Ok(Page::Missing);
        };

        let cache_time = self.files.modified(&cached).await.unwrap_or_else(|e| {
            warn!("Cannot stat cache for '{}': {}", id, e);
            None
        });
        match cache_time {
            Some(cache_time) if cache_time >= source_time => {
                match self.files.read(&cached).await {
                    Ok(html) => {
                        debug!("Serving '{}' from cache", id);
                        return Ok(Page::Cached(html));
                    }
                    Err(e) => warn!("Cache for '{}' unreadable, regenerating: {}", id, e),
                }
            }
            Some(_) => info!("Source text for '{}' was modified, updating cache", id),
            None => info!("Document '{}' not cached, generating HTML", id),
        }

        let html = self.renderer.render(&source).await.map_err(|e| {
            error!("Rendering '{}' failed: {}", id, e);
            e
        })?;
        if let Err(e) = self.files.write(&cached, &html).await {
            warn!("Unable to cache '{}': {}", id, e);
        }
        Ok(Page::Rendered(html))
    }

    /// Number of identifiers with a lookup in flight.
    pub fn in_flight(&self) -> usize {
        self.locks.len()
    }
}
