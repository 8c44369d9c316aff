use super::StorageBackend;
use crate::error::{QuickJumpError, Result};
use crate::model::Bookmarks;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// The JSON database file.
pub struct FsBackend {
    db_file: PathBuf,
}

impl FsBackend {
    pub fn new(db_file: impl Into<PathBuf>) -> Self {
        Self {
            db_file: db_file.into(),
        }
    }

    fn parent_dir(&self) -> &Path {
        match self.db_file.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(QuickJumpError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn load(&self) -> Result<Bookmarks> {
        let content = match fs::read_to_string(&self.db_file) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                // First run: create the file so later writes only ever replace it
                debug!(path = %self.db_file.display(), "creating empty database");
                let empty = Bookmarks::new();
                self.save(&empty)?;
                return Ok(empty);
            }
            Err(e) => return Err(QuickJumpError::Io(e)),
        };

        if content.trim().is_empty() {
            return Ok(Bookmarks::new());
        }

        serde_json::from_str(&content).map_err(|source| QuickJumpError::Parse {
            path: self.db_file.clone(),
            source,
        })
    }

    fn save(&self, bookmarks: &Bookmarks) -> Result<()> {
        let dir = self.parent_dir();
        self.ensure_dir(dir)?;

        let mut content =
            serde_json::to_string_pretty(bookmarks).map_err(QuickJumpError::Serialization)?;
        content.push('\n');

        // Atomic write: the temp file is deleted on drop unless persisted
        let mut tmp = tempfile::Builder::new()
            .prefix(".quickjump-")
            .suffix(".tmp")
            .tempfile_in(dir)
            .map_err(QuickJumpError::Io)?;
        tmp.write_all(content.as_bytes())
            .map_err(QuickJumpError::Io)?;
        tmp.as_file().sync_all().map_err(QuickJumpError::Io)?;
        tmp.persist(&self.db_file)
            .map_err(|e| QuickJumpError::Io(e.error))?;

        Ok(())
    }

    fn location(&self) -> Option<&Path> {
        Some(&self.db_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Bookmark;
    use tempfile::tempdir;

    #[test]
    fn missing_file_loads_empty_and_is_created() {
        let dir = tempdir().unwrap();
        let db = dir.path().join("nested").join("quickjump.json");
        let backend = FsBackend::new(&db);

        let loaded = backend.load().unwrap();
        assert!(loaded.is_empty());
        assert!(db.exists());
        let on_disk = fs::read_to_string(&db).unwrap();
        assert_eq!(on_disk.trim(), "{}");
    }

    #[test]
    fn whitespace_only_file_is_empty() {
        let dir = tempdir().unwrap();
        let db = dir.path().join("db.json");
        fs::write(&db, "  \n").unwrap();
        assert!(FsBackend::new(&db).load().unwrap().is_empty());
    }

    #[test]
    fn corrupt_file_is_a_parse_error() {
        let dir = tempdir().unwrap();
        let db = dir.path().join("db.json");
        fs::write(&db, "{\"abc\": ").unwrap();

        let err = FsBackend::new(&db).load().unwrap_err();
        assert!(matches!(err, QuickJumpError::Parse { ref path, .. } if path == &db));
        // Nothing is rewritten on failure
        assert_eq!(fs::read_to_string(&db).unwrap(), "{\"abc\": ");
    }

    #[test]
    fn save_writes_pretty_json() {
        let dir = tempdir().unwrap();
        let db = dir.path().join("db.json");
        let backend = FsBackend::new(&db);

        let bookmarks: Bookmarks = serde_json::from_str(r#"{"abc": "/tmp/x"}"#).unwrap();
        backend.save(&bookmarks).unwrap();

        assert_eq!(
            fs::read_to_string(&db).unwrap(),
            "{\n  \"abc\": \"/tmp/x\"\n}\n"
        );
        let reloaded = backend.load().unwrap();
        assert_eq!(reloaded.get("abc"), Some(&Bookmark::new("abc", "/tmp/x")));
    }

    #[test]
    fn failed_save_leaves_no_temp_file() {
        let dir = tempdir().unwrap();
        // A directory where the database file should be makes the rename fail
        let db = dir.path().join("db.json");
        fs::create_dir(&db).unwrap();
        fs::write(db.join("keep"), "x").unwrap();

        let err = FsBackend::new(&db).save(&Bookmarks::new()).unwrap_err();
        assert!(matches!(err, QuickJumpError::Io(_)));

        for entry in fs::read_dir(dir.path()).unwrap() {
            let name = entry.unwrap().file_name();
            let name = name.to_string_lossy();
            assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
        }
    }
}
