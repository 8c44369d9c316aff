use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::{BookmarkStore, StorageBackend};

pub fn run<B: StorageBackend>(store: &BookmarkStore<B>, key: &str) -> Result<CmdResult> {
    let bookmark = store.resolve(key)?.clone();
    Ok(CmdResult::default().with_resolved(bookmark))
}
