use crate::domain::error::DomainError;
use crate::domain::ports::key_value_storage::KeyValueStorage;
use std::collections::HashMap;
use std::sync::Mutex;

/// Process-local storage. Contents are lost when the value is dropped.
#[derive(Default)]
pub struct MemoryStorage {
    slots: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        let slots = self
            .slots
            .lock()
            .map_err(|e| DomainError::Storage(e.to_string()))?;
        Ok(slots.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), DomainError> {
        let mut slots = self
            .slots
            .lock()
            .map_err(|e| DomainError::Storage(e.to_string()))?;
        slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
