//! Atomic file persistence.
//!
//! Persisted state (the record store and the abbreviation table) is written
//! with write-then-rename semantics so a reader of the file never observes a
//! partial write, and a failed write leaves the previous contents intact.

use std::fs;
use std::path::{Path, PathBuf};

/// Writes `contents` to `path` atomically via a sibling temporary file.
pub(crate) fn write_atomically(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut tmp_name = path.as_os_str().to_owned();
    tmp_name.push(".tmp");
    let tmp = PathBuf::from(tmp_name);

    if let Err(e) = fs::write(&tmp, contents) {
        let _ = fs::remove_file(&tmp);
        return Err(e);
    }

    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(e);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_atomically_creates_and_replaces() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("table.json");

        write_atomically(&path, "first").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "first");

        write_atomically(&path, "second").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn test_write_atomically_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("table.json");

        write_atomically(&path, "contents").unwrap();

        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_write_atomically_fails_on_missing_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("table.json");
        assert!(write_atomically(&path, "contents").is_err());
    }
}
