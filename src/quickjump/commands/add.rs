use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{BookmarkStore, StorageBackend};

pub fn run<B: StorageBackend>(store: &mut BookmarkStore<B>, path: &str) -> Result<CmdResult> {
    let outcome = store.add(path)?;
    let mut result = CmdResult::default();

    if outcome.created {
        store.save()?;
        result.add_message(CmdMessage::success(format!(
            "{}\t{}",
            outcome.bookmark.key, outcome.bookmark.path
        )));
    } else {
        result.add_message(CmdMessage::warning(format!(
            "Already bookmarked: {}\t{}",
            outcome.bookmark.key, outcome.bookmark.path
        )));
    }

    Ok(result.with_affected(vec![outcome.bookmark]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::error::QuickJumpError;
    use crate::keygen::KeyPolicy;
    use crate::store::memory::MemBackend;

    fn store() -> BookmarkStore<MemBackend> {
        BookmarkStore::load(MemBackend::new(), KeyPolicy::default()).unwrap()
    }

    #[test]
    fn adds_and_saves() {
        let mut store = store();
        let result = run(&mut store, "/home/alice/project").unwrap();

        let key = &result.affected[0].key;
        assert_eq!(store.backend().snapshot().get(key).unwrap().path, "/home/alice/project");
        assert!(!store.is_modified());
        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert!(result.messages[0].content.starts_with(key.as_str()));
    }

    #[test]
    fn second_add_warns_and_keeps_key() {
        let mut store = store();
        let first = run(&mut store, "/srv").unwrap();
        let second = run(&mut store, "/srv").unwrap();

        assert_eq!(first.affected[0].key, second.affected[0].key);
        assert_eq!(second.messages[0].level, MessageLevel::Warning);
        assert_eq!(store.backend().snapshot().len(), 1);
    }

    #[test]
    fn failed_save_is_reported() {
        let mut store = store();
        store.backend().set_simulate_write_error(true);
        assert!(matches!(
            run(&mut store, "/srv"),
            Err(QuickJumpError::Io(_))
        ));
        assert!(store.backend().snapshot().is_empty());
    }
}
