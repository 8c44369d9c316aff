use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{BookmarkStore, StorageBackend};

pub fn run<B: StorageBackend>(store: &BookmarkStore<B>) -> Result<CmdResult> {
    let mut result = CmdResult::default().with_listed(store.list().to_vec());
    if result.listed.is_empty() {
        result.add_message(CmdMessage::info("No bookmarks yet."));
    }
    Ok(result)
}
