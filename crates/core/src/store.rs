//! In-memory record store.
//!
//! Holds the full set of structured guideline records for the process
//! lifetime. The store is loaded once (from extraction output or from the
//! persisted JSON array) and is read-only afterwards, so concurrent readers
//! need no locking; re-extraction replaces the collection wholesale.
//!
//! Record order is extraction order and is stable for the lifetime of a load;
//! it drives the deterministic tie-breaking the resolver relies on.

use crate::error::{GuidelineError, GuidelineResult};
use crate::persist::write_atomically;
use crate::record::GuidelineRecord;
use std::fs;
use std::path::Path;

/// The in-memory collection of all structured guideline records.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<GuidelineRecord>,
}

impl RecordStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store from extraction output.
    pub fn from_records(records: Vec<GuidelineRecord>) -> Self {
        Self { records }
    }

    /// Replaces the full collection.
    pub fn load(&mut self, records: Vec<GuidelineRecord>) {
        self.records = records;
    }

    /// Reads the persisted JSON array at `path`.
    ///
    /// # Errors
    ///
    /// An absent or unreadable file returns `GuidelineError::RecordsRead`; a
    /// malformed file returns `GuidelineError::RecordsParse`. Both are fatal
    /// at startup: the process must not start answering queries without its
    /// record store.
    pub fn load_from_path(path: &Path) -> GuidelineResult<Self> {
        let contents = fs::read_to_string(path).map_err(GuidelineError::RecordsRead)?;
        let records: Vec<GuidelineRecord> =
            serde_json::from_str(&contents).map_err(GuidelineError::RecordsParse)?;

        tracing::info!(
            "loaded {} guideline records from {}",
            records.len(),
            path.display()
        );

        Ok(Self { records })
    }

    /// Persists the ordered record array as pretty JSON, atomically.
    pub fn save_to_path(&self, path: &Path) -> GuidelineResult<()> {
        let json = serde_json::to_string_pretty(&self.records)
            .map_err(GuidelineError::RecordsSerialize)?;
        write_atomically(path, &json).map_err(GuidelineError::RecordsWrite)
    }

    /// Returns all records in store order.
    pub fn records(&self) -> &[GuidelineRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the condition titles in store order.
    pub fn all_titles(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.condition.as_str()).collect()
    }

    /// Finds the record whose section code equals `code`, case-insensitively.
    pub fn find_by_code(&self, code: &str) -> Option<&GuidelineRecord> {
        let needle = code.trim();
        self.records
            .iter()
            .find(|r| r.section_code.as_str().eq_ignore_ascii_case(needle))
    }

    /// Finds the first record whose title equals `title` exactly,
    /// case-sensitive per source title casing.
    pub fn find_by_title_exact(&self, title: &str) -> Option<&GuidelineRecord> {
        self.records.iter().find(|r| r.condition == title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stg_types::SectionCode;
    use tempfile::TempDir;

    fn record(code: &str, title: &str) -> GuidelineRecord {
        GuidelineRecord {
            section_code: SectionCode::parse(code).unwrap(),
            condition: title.to_owned(),
            definition: String::new(),
            investigations: Vec::new(),
            treatment: Vec::new(),
        }
    }

    #[test]
    fn test_find_by_code_is_exact_after_trim() {
        let store = RecordStore::from_records(vec![record("5.2.1", "Tuberculosis")]);
        assert!(store.find_by_code(" 5.2.1 ").is_some());
        assert!(store.find_by_code("5.2").is_none());
    }

    #[test]
    fn test_all_titles_preserves_store_order() {
        let store = RecordStore::from_records(vec![
            record("2.1", "Beta"),
            record("1.1", "Alpha"),
            record("3.1", "Gamma"),
        ]);
        assert_eq!(store.all_titles(), vec!["Beta", "Alpha", "Gamma"]);
    }

    #[test]
    fn test_find_by_title_exact_returns_first_duplicate() {
        let store = RecordStore::from_records(vec![
            record("1.1", "Pneumonia"),
            record("2.2", "Pneumonia"),
        ]);
        let found = store.find_by_title_exact("Pneumonia").unwrap();
        assert_eq!(found.section_code.as_str(), "1.1");
    }

    #[test]
    fn test_find_by_title_exact_is_case_sensitive() {
        let store = RecordStore::from_records(vec![record("1.1", "Pneumonia")]);
        assert!(store.find_by_title_exact("pneumonia").is_none());
    }

    #[test]
    fn test_load_replaces_collection() {
        let mut store = RecordStore::from_records(vec![record("1.1", "Old")]);
        store.load(vec![record("2.2", "New")]);
        assert_eq!(store.len(), 1);
        assert!(store.find_by_title_exact("Old").is_none());
        assert!(store.find_by_title_exact("New").is_some());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("records.json");

        let mut original = record("5.2.1", "Tuberculosis");
        original.definition = "A chronic infectious disease.".into();
        original.investigations = vec!["Sputum smear".into(), "Chest X-ray".into()];
        original.treatment = vec!["Isoniazid 300mg daily".into()];

        let store = RecordStore::from_records(vec![original.clone()]);
        store.save_to_path(&path).unwrap();

        let reloaded = RecordStore::load_from_path(&path).unwrap();
        assert_eq!(reloaded.records(), &[original]);
    }

    #[test]
    fn test_load_from_path_missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let result = RecordStore::load_from_path(&dir.path().join("missing.json"));
        assert!(matches!(result, Err(GuidelineError::RecordsRead(_))));
    }

    #[test]
    fn test_load_from_path_malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("records.json");
        fs::write(&path, "{ not json").unwrap();
        let result = RecordStore::load_from_path(&path);
        assert!(matches!(result, Err(GuidelineError::RecordsParse(_))));
    }

    #[test]
    fn test_load_from_path_rejects_invalid_codes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("records.json");
        fs::write(
            &path,
            r#"[{"section_code":"bogus","condition":"X","definition":"","investigations":[],"treatment":[]}]"#,
        )
        .unwrap();
        assert!(matches!(
            RecordStore::load_from_path(&path),
            Err(GuidelineError::RecordsParse(_))
        ));
    }
}
