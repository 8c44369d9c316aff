//! # Storage Layer
//!
//! [`BookmarkStore`] owns the bookmark mapping for the duration of one
//! invocation. Raw I/O lives behind the [`StorageBackend`] trait so the
//! same logic runs against a file on disk or an in-memory map in tests.
//!
//! ## Implementations
//!
//! - [`fs::FsBackend`]: the production JSON database file, written
//!   atomically (temp file + rename).
//! - [`memory::MemBackend`]: in-memory backend for tests.
//!
//! ## Lifecycle
//!
//! ```text
//! load() ──> Loaded ──add/remove──> Modified ──save()──> Loaded
//! ```
//!
//! A process performs at most one mutation and saves right after it. A
//! mutation that is never saved is simply lost when the process exits.

use crate::error::{QuickJumpError, Result};
use crate::keygen::{candidate_key, normalize_path, KeyPolicy};
use crate::model::{Bookmark, Bookmarks};
use std::path::Path;
use tracing::{debug, info};

pub mod fs;
pub mod memory;

/// Abstract interface for loading and persisting the whole mapping.
pub trait StorageBackend {
    /// Load the mapping. A backend with nothing stored yet returns an
    /// empty mapping.
    fn load(&self) -> Result<Bookmarks>;

    /// Replace the stored mapping with `bookmarks`.
    /// MUST be atomic: readers see either the old or the new snapshot.
    fn save(&self, bookmarks: &Bookmarks) -> Result<()>;

    /// File backing this store, if there is one.
    fn location(&self) -> Option<&Path>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreState {
    Loaded,
    Modified,
}

/// Result of [`BookmarkStore::add`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddOutcome {
    pub bookmark: Bookmark,
    /// `false` when the path was already bookmarked.
    pub created: bool,
}

pub struct BookmarkStore<B: StorageBackend> {
    backend: B,
    bookmarks: Bookmarks,
    policy: KeyPolicy,
    state: StoreState,
}

impl<B: StorageBackend> BookmarkStore<B> {
    pub fn load(backend: B, policy: KeyPolicy) -> Result<Self> {
        let bookmarks = backend.load()?;
        debug!(count = bookmarks.len(), "loaded bookmarks");
        Ok(Self {
            backend,
            bookmarks,
            policy,
            state: StoreState::Loaded,
        })
    }

    /// Look up the bookmark stored under `key`.
    pub fn resolve(&self, key: &str) -> Result<&Bookmark> {
        self.bookmarks
            .get(key)
            .ok_or_else(|| QuickJumpError::NotFound(key.to_string()))
    }

    /// Bookmark `path`, generating a key for it.
    ///
    /// Re-adding a path that is already bookmarked returns its existing key
    /// and leaves the store untouched. Otherwise the candidates from
    /// [`KeyPolicy::lengths`] are tried in order and the first free one
    /// wins; if all of them belong to other paths nothing is inserted.
    pub fn add(&mut self, path: &str) -> Result<AddOutcome> {
        let path = normalize_path(path)?;

        if let Some(key) = self.bookmarks.key_for_path(&path) {
            debug!(key, path = %path, "path already bookmarked");
            return Ok(AddOutcome {
                bookmark: Bookmark::new(key, path.clone()),
                created: false,
            });
        }

        for length in self.policy.lengths() {
            let key = candidate_key(&path, length);
            match self.bookmarks.get(&key) {
                None => {
                    let bookmark = Bookmark::new(key, path);
                    self.bookmarks.push(bookmark.clone());
                    self.state = StoreState::Modified;
                    info!(key = %bookmark.key, path = %bookmark.path, "added bookmark");
                    return Ok(AddOutcome {
                        bookmark,
                        created: true,
                    });
                }
                Some(existing) => {
                    debug!(key = %key, taken_by = %existing.path, "key collision");
                }
            }
        }

        Err(QuickJumpError::CollisionExhausted {
            path,
            attempts: self.policy.attempts(),
        })
    }

    /// All bookmarks in stored order.
    pub fn list(&self) -> &[Bookmark] {
        self.bookmarks.as_slice()
    }

    pub fn remove(&mut self, key: &str) -> Result<Bookmark> {
        let removed = self
            .bookmarks
            .remove(key)
            .ok_or_else(|| QuickJumpError::NotFound(key.to_string()))?;
        self.state = StoreState::Modified;
        info!(key = %removed.key, path = %removed.path, "removed bookmark");
        Ok(removed)
    }

    /// Persist the full mapping.
    pub fn save(&mut self) -> Result<()> {
        self.backend.save(&self.bookmarks)?;
        self.state = StoreState::Loaded;
        debug!(count = self.bookmarks.len(), "saved bookmarks");
        Ok(())
    }

    /// Re-read the mapping from the backend, dropping unsaved changes.
    pub fn reload(&mut self) -> Result<()> {
        self.bookmarks = self.backend.load()?;
        self.state = StoreState::Loaded;
        Ok(())
    }

    pub fn state(&self) -> StoreState {
        self.state
    }

    pub fn is_modified(&self) -> bool {
        self.state == StoreState::Modified
    }

    pub fn bookmarks(&self) -> &Bookmarks {
        &self.bookmarks
    }

    pub fn location(&self) -> Option<&Path> {
        self.backend.location()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}
