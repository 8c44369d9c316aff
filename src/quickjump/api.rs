//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for
//! every quickjump operation. It dispatches to `commands/*.rs` and returns
//! structured [`CmdResult`]s; it never prints and never exits.
//!
//! `QuickJumpApi<B: StorageBackend>` is generic over the storage backend:
//! - Production: `QuickJumpApi<FsBackend>`
//! - Testing: `QuickJumpApi<MemBackend>`

use crate::commands;
use crate::error::Result;
use crate::keygen::KeyPolicy;
use crate::store::{BookmarkStore, StorageBackend};
use std::path::Path;

pub struct QuickJumpApi<B: StorageBackend> {
    store: BookmarkStore<B>,
}

impl<B: StorageBackend> QuickJumpApi<B> {
    /// Load the bookmark database through `backend`.
    pub fn open(backend: B, policy: KeyPolicy) -> Result<Self> {
        Ok(Self {
            store: BookmarkStore::load(backend, policy)?,
        })
    }

    pub fn add_bookmark(&mut self, path: &str) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, path)
    }

    pub fn resolve(&self, key: &str) -> Result<commands::CmdResult> {
        commands::resolve::run(&self.store, key)
    }

    pub fn list(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn remove(&mut self, key: &str) -> Result<commands::CmdResult> {
        commands::remove::run(&mut self.store, key)
    }

    pub fn check(&self) -> Result<commands::CmdResult> {
        commands::check::run(&self.store)
    }

    pub fn edit(&mut self) -> Result<commands::CmdResult> {
        commands::edit::run(&mut self.store)
    }

    pub fn db_path(&self) -> Option<&Path> {
        self.store.location()
    }

    pub fn store(&self) -> &BookmarkStore<B> {
        &self.store
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QuickJumpError;
    use crate::store::memory::MemBackend;

    fn api() -> QuickJumpApi<MemBackend> {
        QuickJumpApi::open(MemBackend::new(), KeyPolicy::default()).unwrap()
    }

    #[test]
    fn add_dispatches_and_persists() {
        let mut api = api();
        let result = api.add_bookmark("/home/alice/project").unwrap();
        assert_eq!(result.affected.len(), 1);
        assert_eq!(api.store().backend().snapshot().len(), 1);
    }

    #[test]
    fn resolve_returns_added_path() {
        let mut api = api();
        let key = api.add_bookmark("/home/alice/project").unwrap().affected[0]
            .key
            .clone();

        let resolved = api.resolve(&key).unwrap().resolved.unwrap();
        assert_eq!(resolved.path, "/home/alice/project");

        let listed = api.list().unwrap().listed;
        assert_eq!(listed, vec![resolved]);
    }

    #[test]
    fn remove_then_resolve_fails() {
        let mut api = api();
        let key = api.add_bookmark("/tmp/gone").unwrap().affected[0].key.clone();
        api.remove(&key).unwrap();
        assert!(matches!(api.resolve(&key), Err(QuickJumpError::NotFound(_))));
    }

    #[test]
    fn memory_backend_has_no_db_path() {
        assert!(api().db_path().is_none());
        assert_eq!(api().check().unwrap().messages.len(), 1);
    }
}
