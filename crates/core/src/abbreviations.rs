//! Runtime-mutable abbreviation table.
//!
//! Maps clinical short forms to the canonical phrases the resolver matches
//! against condition titles ("tb" → "tuberculosis"). The table is an owned,
//! injectable component: constructed once at startup and passed by handle to
//! the resolver and to the management surface, never module-level state.
//!
//! Mutations go through [`AbbreviationTable::update`], which persists the full
//! table BEFORE applying the change in memory. A failed persist therefore
//! leaves memory consistent with what is on disk. Updates serialize through a
//! single writer lock held across both steps, so concurrent updates cannot
//! interleave and the persisted file cannot lose writes.
//!
//! There is no deletion operation; the management surface only inserts and
//! overwrites, matching the source system.

use crate::error::{GuidelineError, GuidelineResult};
use crate::persist::write_atomically;
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::RwLock;

/// Built-in default entries, used when no persisted table exists.
const DEFAULT_ABBREVIATIONS: &[(&str, &str)] = &[
    ("dm", "diabetes mellitus"),
    ("htn", "hypertension"),
    ("pid", "pelvic inflammatory disease"),
    ("pud", "peptic ulcer disease"),
    ("sti", "sexually transmitted infection"),
    ("tb", "tuberculosis"),
    ("urti", "upper respiratory tract infection"),
    ("uti", "urinary tract infection"),
];

/// Short form → canonical phrase mapping, persisted on update.
#[derive(Debug)]
pub struct AbbreviationTable {
    entries: RwLock<BTreeMap<String, String>>,
    path: Option<PathBuf>,
}

impl AbbreviationTable {
    /// Creates a table with the built-in defaults and no persistence.
    ///
    /// Intended for fixture tables in tests and for callers that manage
    /// persistence themselves.
    pub fn in_memory() -> Self {
        Self {
            entries: RwLock::new(builtin_entries()),
            path: None,
        }
    }

    /// Loads the persisted table at `path`, or the built-in defaults when the
    /// file does not exist. Updates will persist back to the same path.
    ///
    /// # Errors
    ///
    /// A file that exists but cannot be read or parsed is an error; only a
    /// missing file falls back to the defaults, so a typo in a hand-edited
    /// table cannot silently wipe it.
    pub fn load_or_default(path: impl Into<PathBuf>) -> GuidelineResult<Self> {
        let path = path.into();

        let entries = match fs::read_to_string(&path) {
            Ok(contents) => {
                let parsed: BTreeMap<String, String> =
                    serde_json::from_str(&contents).map_err(GuidelineError::AbbreviationsParse)?;
                parsed
                    .into_iter()
                    .map(|(k, v)| (k.to_lowercase(), v.to_lowercase()))
                    .collect()
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!(
                    "no abbreviation table at {}, using built-in defaults",
                    path.display()
                );
                builtin_entries()
            }
            Err(e) => return Err(GuidelineError::AbbreviationsRead(e)),
        };

        Ok(Self {
            entries: RwLock::new(entries),
            path: Some(path),
        })
    }

    /// Looks up the expansion phrase for `key`, case-insensitively.
    pub fn lookup(&self, key: &str) -> Option<String> {
        let needle = key.trim().to_lowercase();
        self.entries
            .read()
            .expect("abbreviation table lock poisoned")
            .get(&needle)
            .cloned()
    }

    /// Inserts or overwrites one entry, lower-casing both sides.
    ///
    /// The full table is persisted before the in-memory map is touched; on a
    /// persist failure the update is not applied, so memory stays consistent
    /// with what was last successfully written to disk.
    pub fn update(&self, key: &str, value: &str) -> GuidelineResult<()> {
        let key = key.trim().to_lowercase();
        let value = value.trim().to_lowercase();

        if key.is_empty() {
            return Err(GuidelineError::InvalidInput(
                "abbreviation key cannot be empty".into(),
            ));
        }
        if value.is_empty() {
            return Err(GuidelineError::InvalidInput(
                "abbreviation expansion cannot be empty".into(),
            ));
        }

        let mut entries = self
            .entries
            .write()
            .expect("abbreviation table lock poisoned");

        let mut candidate = entries.clone();
        candidate.insert(key, value);

        if let Some(path) = &self.path {
            let json = serde_json::to_string_pretty(&candidate)
                .map_err(GuidelineError::AbbreviationsSerialize)?;
            write_atomically(path, &json).map_err(GuidelineError::AbbreviationsPersist)?;
        }

        *entries = candidate;
        Ok(())
    }

    /// Returns a read-only copy of the full table for external display.
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.entries
            .read()
            .expect("abbreviation table lock poisoned")
            .clone()
    }
}

fn builtin_entries() -> BTreeMap<String, String> {
    DEFAULT_ABBREVIATIONS
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_lookup_is_case_insensitive() {
        let table = AbbreviationTable::in_memory();
        assert_eq!(table.lookup("TB").as_deref(), Some("tuberculosis"));
        assert_eq!(table.lookup(" tb ").as_deref(), Some("tuberculosis"));
        assert_eq!(table.lookup("nope"), None);
    }

    #[test]
    fn test_update_lowercases_both_sides() {
        let table = AbbreviationTable::in_memory();
        table.update("CCF", "Congestive Cardiac Failure").unwrap();
        assert_eq!(
            table.lookup("ccf").as_deref(),
            Some("congestive cardiac failure")
        );
    }

    #[test]
    fn test_update_rejects_empty_key_or_value() {
        let table = AbbreviationTable::in_memory();
        assert!(table.update("  ", "phrase").is_err());
        assert!(table.update("key", "").is_err());
    }

    #[test]
    fn test_update_persists_and_reloads() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("abbreviations.json");

        let table = AbbreviationTable::load_or_default(&path).unwrap();
        table.update("uti", "urinary tract infection").unwrap();

        let reloaded = AbbreviationTable::load_or_default(&path).unwrap();
        assert_eq!(
            reloaded.lookup("uti").as_deref(),
            Some("urinary tract infection")
        );
    }

    #[test]
    fn test_update_is_idempotent_on_disk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("abbreviations.json");

        let table = AbbreviationTable::load_or_default(&path).unwrap();
        table.update("uti", "urinary tract infection").unwrap();
        let first = fs::read_to_string(&path).unwrap();

        table.update("uti", "urinary tract infection").unwrap();
        let second = fs::read_to_string(&path).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let table = AbbreviationTable::load_or_default(dir.path().join("none.json")).unwrap();
        assert_eq!(table.lookup("tb").as_deref(), Some("tuberculosis"));
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("abbreviations.json");
        fs::write(&path, "not json at all").unwrap();
        assert!(matches!(
            AbbreviationTable::load_or_default(&path),
            Err(GuidelineError::AbbreviationsParse(_))
        ));
    }

    #[test]
    fn test_failed_persist_leaves_memory_unchanged() {
        let dir = TempDir::new().unwrap();
        // Point persistence into a directory that does not exist.
        let path = dir.path().join("missing_dir").join("abbreviations.json");

        let table = AbbreviationTable {
            entries: RwLock::new(builtin_entries()),
            path: Some(path),
        };

        let result = table.update("ccf", "congestive cardiac failure");
        assert!(matches!(
            result,
            Err(GuidelineError::AbbreviationsPersist(_))
        ));
        assert_eq!(table.lookup("ccf"), None);
    }

    #[test]
    fn test_snapshot_returns_full_table() {
        let table = AbbreviationTable::in_memory();
        let snapshot = table.snapshot();
        assert_eq!(snapshot.len(), DEFAULT_ABBREVIATIONS.len());
        assert_eq!(
            snapshot.get("tb").map(String::as_str),
            Some("tuberculosis")
        );
    }
}
