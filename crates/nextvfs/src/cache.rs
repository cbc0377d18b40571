// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Route-resolution caching.
//!
//! Resolving a route walks the VFS tree on every call. Hosts that resolve
//! on every incoming request can put a [`RouteCache`] in front: it maps a
//! pathname to the outcome of a previous resolution, including negative
//! outcomes (a cached `None` means "known not to match").
//!
//! The core never consults the cache itself — invalidation is the host's
//! job. Any VFS mutation must be followed by [`RouteCache::clear`] (or a
//! targeted [`RouteCache::remove`]).

use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex};

use lru::LruCache;

use crate::app_router::AppRoute;
use crate::error::{NextVfsError, Result};

/// Outcome of a cached resolution: `None` records a miss that was
/// resolved before and found not to match.
pub type CachedRoute = Option<AppRoute>;

/// In-memory LRU cache of route resolutions, keyed by pathname.
///
/// # Examples
///
/// ```rust,ignore
/// use nextvfs::RouteCache;
///
/// let cache = RouteCache::new(256);
/// if let Some(outcome) = cache.get("/users/1")? {
///     return Ok(outcome);
/// }
/// let outcome = resolve_app_route(&vfs, "/app", "/users/1");
/// cache.insert("/users/1", outcome.clone())?;
/// ```
#[derive(Debug, Clone)]
pub struct RouteCache {
    entries: Arc<Mutex<LruCache<String, CachedRoute>>>,
}

impl RouteCache {
    /// Creates a cache holding up to `capacity` resolutions. A zero
    /// capacity is bumped to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity.max(1)).unwrap();
        Self {
            entries: Arc::new(Mutex::new(LruCache::new(capacity))),
        }
    }

    /// Looks up a cached resolution. The outer `Option` is the cache
    /// miss; the inner [`CachedRoute`] is the recorded outcome.
    pub fn get(&self, pathname: &str) -> Result<Option<CachedRoute>> {
        let mut entries = self.lock()?;
        Ok(entries.get(pathname).cloned())
    }

    /// Records a resolution outcome.
    pub fn insert(&self, pathname: &str, outcome: CachedRoute) -> Result<()> {
        let mut entries = self.lock()?;
        entries.put(pathname.to_string(), outcome);
        Ok(())
    }

    /// Drops a single cached pathname.
    pub fn remove(&self, pathname: &str) -> Result<()> {
        let mut entries = self.lock()?;
        entries.pop(pathname);
        Ok(())
    }

    /// Drops everything. Call after any VFS mutation.
    pub fn clear(&self) -> Result<()> {
        let mut entries = self.lock()?;
        entries.clear();
        Ok(())
    }

    /// Number of cached resolutions.
    pub fn len(&self) -> usize {
        self.entries.lock().map(|entries| entries.len()).unwrap_or(0)
    }

    /// Returns true if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, LruCache<String, CachedRoute>>> {
        self.entries
            .lock()
            .map_err(|_| NextVfsError::CacheError("failed to acquire cache lock".to_string()))
    }
}
