use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{BookmarkStore, StorageBackend};

pub fn run<B: StorageBackend>(store: &mut BookmarkStore<B>, key: &str) -> Result<CmdResult> {
    let removed = store.remove(key)?;
    store.save()?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Bookmark removed: {}\t{}",
        removed.key, removed.path
    )));
    Ok(result.with_affected(vec![removed]))
}
