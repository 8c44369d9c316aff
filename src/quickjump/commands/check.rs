//! Database consistency check.
//!
//! Keys are unique by construction (the parser rejects duplicates), but a
//! hand-edited database can point several keys at the same directory. That
//! is legal, just usually a mistake, so it is reported as a warning.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{BookmarkStore, StorageBackend};

pub fn run<B: StorageBackend>(store: &BookmarkStore<B>) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let bookmarks = store.list();

    // (path, keys) in first-seen order
    let mut by_path: Vec<(&str, Vec<&str>)> = Vec::new();
    for bookmark in bookmarks {
        let (path, key) = (bookmark.path.as_str(), bookmark.key.as_str());
        match by_path.iter_mut().find(|(p, _)| *p == path) {
            Some((_, keys)) => keys.push(key),
            None => by_path.push((path, vec![key])),
        }
    }

    let mut duplicates = 0;
    for (path, keys) in by_path.iter().filter(|(_, keys)| keys.len() > 1) {
        duplicates += 1;
        result.add_message(CmdMessage::warning(format!(
            "{} is bookmarked more than once: {}",
            path,
            keys.join(", ")
        )));
    }

    if duplicates == 0 {
        result.add_message(CmdMessage::success(format!(
            "{} bookmark(s), no problems found.",
            bookmarks.len()
        )));
    }

    Ok(result)
}
