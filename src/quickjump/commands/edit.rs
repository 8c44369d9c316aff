use crate::commands::{CmdMessage, CmdResult};
use crate::editor::open_in_editor;
use crate::error::{QuickJumpError, Result};
use crate::store::{BookmarkStore, StorageBackend};

/// Hand the database file to the user's editor, then re-read it.
///
/// A broken edit surfaces here as a parse error instead of on the next jump.
pub fn run<B: StorageBackend>(store: &mut BookmarkStore<B>) -> Result<CmdResult> {
    let path = store
        .location()
        .ok_or_else(|| QuickJumpError::Api("This store has no file to edit".to_string()))?
        .to_path_buf();

    open_in_editor(&path)?;
    store.reload()?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!(
        "Reloaded {} bookmark(s) from {}",
        store.list().len(),
        path.display()
    )));
    Ok(result.with_listed(store.list().to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keygen::KeyPolicy;
    use crate::store::memory::MemBackend;

    #[test]
    fn memory_store_cannot_be_edited() {
        let mut store = BookmarkStore::load(MemBackend::new(), KeyPolicy::default()).unwrap();
        assert!(matches!(run(&mut store), Err(QuickJumpError::Api(_))));
    }
}
