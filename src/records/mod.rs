//! Personal record storage.
//!
//! Records persist as a single JSON blob keyed by race label. This is the
//! only part of the crate that touches the filesystem; everything else is
//! pure computation over arguments.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use thiserror::Error;
use tracing::{debug, info};

use crate::models::PersonalRecord;

/// Errors that can occur during record storage operations.
#[derive(Debug, Error)]
pub enum RecordsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Outcome of submitting a candidate record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordOutcome {
    /// No prior record existed for this label
    First,
    /// Faster than the stored record by this many seconds
    Improved { seconds_faster: u64 },
    /// The stored record stands; the candidate was this many seconds short
    NotBetter { seconds_short: u64 },
}

/// Key-value record store backed by one JSON file.
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    /// Create a store backed by the given file path.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Read all records. A missing or empty file yields an empty map.
    pub fn load(&self) -> Result<HashMap<String, PersonalRecord>, RecordsError> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }

        let contents = fs::read_to_string(&self.path)?;
        if contents.trim().is_empty() {
            return Ok(HashMap::new());
        }

        let records: HashMap<String, PersonalRecord> = serde_json::from_str(&contents)?;
        debug!("Read {} records from {:?}", records.len(), self.path);
        Ok(records)
    }

    /// Write all records, replacing the file.
    pub fn save(&self, records: &HashMap<String, PersonalRecord>) -> Result<(), RecordsError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(records)?;
        fs::write(&self.path, json)?;
        info!("Wrote {} records to {:?}", records.len(), self.path);
        Ok(())
    }

    /// Get the stored record for a label, if any.
    pub fn best(&self, label: &str) -> Result<Option<PersonalRecord>, RecordsError> {
        Ok(self.load()?.remove(label))
    }

    /// Compare a candidate against the stored record for its label and
    /// persist it when it wins. The stored record is untouched otherwise.
    pub fn submit(&self, candidate: &PersonalRecord) -> Result<RecordOutcome, RecordsError> {
        let mut records = self.load()?;

        let outcome = match records.get(&candidate.label) {
            None => RecordOutcome::First,
            Some(best) if candidate.is_better_than(best) => RecordOutcome::Improved {
                seconds_faster: candidate.improvement_over(best),
            },
            Some(best) => {
                debug!(
                    "Record for {} stands at {}s (candidate {}s)",
                    candidate.label, best.time_seconds, candidate.time_seconds
                );
                return Ok(RecordOutcome::NotBetter {
                    seconds_short: candidate.time_seconds.saturating_sub(best.time_seconds),
                });
            }
        };

        records.insert(candidate.label.clone(), candidate.clone());
        self.save(&records)?;
        info!(
            "New record for {}: {}",
            candidate.label,
            candidate.formatted_time()
        );
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn record(label: &str, time_seconds: u64) -> PersonalRecord {
        PersonalRecord::new(
            label,
            10.0,
            time_seconds,
            NaiveDate::from_ymd_opt(2025, 4, 12).unwrap(),
        )
    }

    fn store(temp_dir: &TempDir) -> RecordStore {
        RecordStore::new(temp_dir.path().join("records.json"))
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let store = store(&temp_dir);

        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_load_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("records.json");
        fs::write(&path, "").unwrap();

        let store = RecordStore::new(path);
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_load_corrupt_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("records.json");
        fs::write(&path, "not-json").unwrap();

        let store = RecordStore::new(path);
        assert!(matches!(store.load(), Err(RecordsError::Json(_))));
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let store = store(&temp_dir);

        let mut records = HashMap::new();
        records.insert("10K".to_string(), record("10K", 2700));
        records.insert("Marathon".to_string(), record("Marathon", 12600));

        store.save(&records).unwrap();
        let loaded = store.load().unwrap();

        assert_eq!(loaded, records);
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let store = RecordStore::new(temp_dir.path().join("nested").join("records.json"));

        store.save(&HashMap::new()).unwrap();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_submit_first_record() {
        let temp_dir = TempDir::new().unwrap();
        let store = store(&temp_dir);

        let outcome = store.submit(&record("10K", 2700)).unwrap();
        assert_eq!(outcome, RecordOutcome::First);
        assert_eq!(store.best("10K").unwrap().unwrap().time_seconds, 2700);
    }

    #[test]
    fn test_submit_improvement_persists() {
        let temp_dir = TempDir::new().unwrap();
        let store = store(&temp_dir);

        store.submit(&record("10K", 2700)).unwrap();
        let outcome = store.submit(&record("10K", 2640)).unwrap();

        assert_eq!(outcome, RecordOutcome::Improved { seconds_faster: 60 });
        assert_eq!(store.best("10K").unwrap().unwrap().time_seconds, 2640);
    }

    #[test]
    fn test_submit_slower_leaves_record_untouched() {
        let temp_dir = TempDir::new().unwrap();
        let store = store(&temp_dir);

        store.submit(&record("10K", 2700)).unwrap();
        let outcome = store.submit(&record("10K", 2760)).unwrap();

        assert_eq!(outcome, RecordOutcome::NotBetter { seconds_short: 60 });
        assert_eq!(store.best("10K").unwrap().unwrap().time_seconds, 2700);
    }

    #[test]
    fn test_submit_tie_is_not_better() {
        let temp_dir = TempDir::new().unwrap();
        let store = store(&temp_dir);

        store.submit(&record("10K", 2700)).unwrap();
        let outcome = store.submit(&record("10K", 2700)).unwrap();

        assert_eq!(outcome, RecordOutcome::NotBetter { seconds_short: 0 });
    }

    #[test]
    fn test_labels_are_independent() {
        let temp_dir = TempDir::new().unwrap();
        let store = store(&temp_dir);

        store.submit(&record("10K", 2700)).unwrap();
        let outcome = store.submit(&record("5K", 1300)).unwrap();

        assert_eq!(outcome, RecordOutcome::First);
        assert_eq!(store.load().unwrap().len(), 2);
    }

    #[test]
    fn test_best_missing_label() {
        let temp_dir = TempDir::new().unwrap();
        let store = store(&temp_dir);

        assert!(store.best("Marathon").unwrap().is_none());
    }
}
