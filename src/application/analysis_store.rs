use crate::domain::entities::saved_analysis::SavedAnalysis;
use crate::domain::error::DomainError;
use crate::domain::ports::key_value_storage::KeyValueStorage;
use std::sync::Arc;

/// Storage slot holding the JSON array of saved analyses.
pub const STORAGE_KEY: &str = "valuation-analyses";
/// Older entries beyond this count are dropped on insert.
pub const MAX_ANALYSES: usize = 50;

/// Newest-first, size-bounded history of valuations.
///
/// Every operation is an unsynchronised read-modify-write of a single slot;
/// two writers sharing a backend can lose each other's updates.
pub struct AnalysisStore {
    storage: Arc<dyn KeyValueStorage>,
}

impl AnalysisStore {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }

    /// Prepend `analysis` and keep only the `MAX_ANALYSES` most recent entries.
    pub fn save(&self, analysis: SavedAnalysis) -> Result<(), DomainError> {
        let mut saved = self.list();
        tracing::info!(id = %analysis.id, ticker = %analysis.ticker, method = %analysis.method, "saving analysis");
        saved.insert(0, analysis);
        saved.truncate(MAX_ANALYSES);
        self.write(&saved)
    }

    /// Stored analyses, newest first. Unreadable or corrupt storage reads as
    /// an empty history; a single undecodable entry is skipped.
    pub fn list(&self) -> Vec<SavedAnalysis> {
        let raw = match self.storage.get(STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read analysis history, treating as empty");
                return Vec::new();
            }
        };
        let entries: Vec<serde_json::Value> = match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(error = %e, "corrupt analysis history, treating as empty");
                return Vec::new();
            }
        };
        entries
            .into_iter()
            .enumerate()
            .filter_map(|(index, entry)| match serde_json::from_value::<SavedAnalysis>(entry) {
                Ok(analysis) => Some(analysis),
                Err(e) => {
                    tracing::warn!(index, error = %e, "skipping unreadable analysis");
                    None
                }
            })
            .collect()
    }

    /// Remove the analysis with `id`. Unknown ids are not an error.
    pub fn delete_by_id(&self, id: &str) -> Result<(), DomainError> {
        let saved = self.list();
        let before = saved.len();
        let kept: Vec<SavedAnalysis> = saved.into_iter().filter(|a| a.id != id).collect();
        tracing::info!(id, removed = before - kept.len(), "deleting analysis");
        self.write(&kept)
    }

    fn write(&self, saved: &[SavedAnalysis]) -> Result<(), DomainError> {
        let json = serde_json::to_string(saved)?;
        self.storage.set(STORAGE_KEY, &json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::valuation::ValuationResult;
    use crate::domain::values::valuation_method::ValuationMethod;
    use crate::infrastructure::storage::memory::MemoryStorage;

    fn analysis(ticker: &str) -> SavedAnalysis {
        let result = ValuationResult::from_intrinsic(ValuationMethod::Graham, 40.0, 30.0, 25.0);
        SavedAnalysis::new(ticker, "Test Co", result, 30.0)
    }

    struct FailingStorage;

    impl KeyValueStorage for FailingStorage {
        fn get(&self, _key: &str) -> Result<Option<String>, DomainError> {
            Err(DomainError::Storage("unavailable".into()))
        }
        fn set(&self, _key: &str, _value: &str) -> Result<(), DomainError> {
            Err(DomainError::Storage("quota exceeded".into()))
        }
    }

    #[test]
    fn test_empty_storage_lists_nothing() {
        let store = AnalysisStore::new(Arc::new(MemoryStorage::new()));
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_corrupt_slot_lists_nothing() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set(STORAGE_KEY, "{not json").unwrap();
        let store = AnalysisStore::new(storage);
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_save_overwrites_corrupt_slot() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set(STORAGE_KEY, "garbage").unwrap();
        let store = AnalysisStore::new(storage);
        store.save(analysis("PETR4")).unwrap();
        assert_eq!(store.list().len(), 1);
    }

    #[test]
    fn test_bad_entry_does_not_hide_the_rest() {
        let storage = Arc::new(MemoryStorage::new());
        let store = AnalysisStore::new(storage.clone());
        store.save(analysis("EGIE3")).unwrap();
        let raw = storage.get(STORAGE_KEY).unwrap().unwrap();
        storage
            .set(STORAGE_KEY, &raw.replacen('[', r#"[{"id":"broken"},"#, 1))
            .unwrap();

        let listed = store.list();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].ticker, "EGIE3");
    }

    #[test]
    fn test_read_failure_is_fail_open_write_failure_is_reported() {
        let store = AnalysisStore::new(Arc::new(FailingStorage));
        assert!(store.list().is_empty());
        let err = store.save(analysis("VALE3")).unwrap_err();
        assert!(matches!(err, DomainError::Storage(_)));
        assert!(store.delete_by_id("x").is_err());
    }

    #[test]
    fn test_slot_holds_json_array() {
        let storage = Arc::new(MemoryStorage::new());
        let store = AnalysisStore::new(storage.clone());
        store.save(analysis("WEGE3")).unwrap();
        let raw = storage.get(STORAGE_KEY).unwrap().unwrap();
        let v: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert!(v.is_array());
        assert_eq!(v[0]["ticker"], "WEGE3");
        assert!(v[0]["result"]["ceilingPrice"].is_number());
        assert!(v[0]["currentPrice"].is_number());
    }
}
