use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A single key → directory mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bookmark {
    pub key: String,
    pub path: String,
}

impl Bookmark {
    pub fn new(key: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            path: path.into(),
        }
    }
}

/// The full bookmark mapping, in insertion order.
///
/// On disk this is a JSON object (`{"key": "/path", ...}`). Entries keep the
/// order they were read or inserted in, so listings are stable between runs.
/// Keys are unique and non-empty; deserialization rejects anything else.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bookmarks {
    entries: Vec<Bookmark>,
}

impl Bookmarks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Bookmark> {
        self.entries.iter().find(|b| b.key == key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// First key that points at `path`, if any.
    pub fn key_for_path(&self, path: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|b| b.path == path)
            .map(|b| b.key.as_str())
    }

    /// Appends a bookmark. Callers check for an existing key first.
    pub(crate) fn push(&mut self, bookmark: Bookmark) {
        debug_assert!(!self.contains_key(&bookmark.key));
        self.entries.push(bookmark);
    }

    pub fn remove(&mut self, key: &str) -> Option<Bookmark> {
        let pos = self.entries.iter().position(|b| b.key == key)?;
        Some(self.entries.remove(pos))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Bookmark> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[Bookmark] {
        &self.entries
    }
}

impl<'a> IntoIterator for &'a Bookmarks {
    type Item = &'a Bookmark;
    type IntoIter = std::slice::Iter<'a, Bookmark>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl Serialize for Bookmarks {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for bookmark in &self.entries {
            map.serialize_entry(&bookmark.key, &bookmark.path)?;
        }
        map.end()
    }
}

struct BookmarksVisitor;

impl<'de> Visitor<'de> for BookmarksVisitor {
    type Value = Bookmarks;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an object mapping bookmark keys to directory paths")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Bookmarks, A::Error> {
        let mut bookmarks = Bookmarks::new();
        while let Some((key, path)) = access.next_entry::<String, String>()? {
            if key.is_empty() {
                return Err(de::Error::custom("empty bookmark key"));
            }
            if bookmarks.contains_key(&key) {
                return Err(de::Error::custom(format!("duplicate bookmark key `{}`", key)));
            }
            bookmarks.push(Bookmark { key, path });
        }
        Ok(bookmarks)
    }
}

impl<'de> Deserialize<'de> for Bookmarks {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(BookmarksVisitor)
    }
}
