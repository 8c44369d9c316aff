use super::StorageBackend;
use crate::error::{QuickJumpError, Result};
use crate::model::{Bookmark, Bookmarks};
use std::cell::{Cell, RefCell};
use std::io;
use std::path::Path;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` since quickjump is single-threaded, which keeps
/// `StorageBackend::save` on `&self` like the file backend.
#[derive(Default)]
pub struct MemBackend {
    bookmarks: RefCell<Bookmarks>,
    simulate_write_error: Cell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut bookmarks = Bookmarks::new();
        for (key, path) in entries {
            bookmarks.push(Bookmark::new(key, path));
        }
        Self {
            bookmarks: RefCell::new(bookmarks),
            simulate_write_error: Cell::new(false),
        }
    }

    /// Make every following `save` fail.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    pub fn snapshot(&self) -> Bookmarks {
        self.bookmarks.borrow().clone()
    }
}

impl StorageBackend for MemBackend {
    fn load(&self) -> Result<Bookmarks> {
        Ok(self.bookmarks.borrow().clone())
    }

    fn save(&self, bookmarks: &Bookmarks) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(QuickJumpError::Io(io::Error::other("simulated write error")));
        }
        *self.bookmarks.borrow_mut() = bookmarks.clone();
        Ok(())
    }

    fn location(&self) -> Option<&Path> {
        None
    }
}
