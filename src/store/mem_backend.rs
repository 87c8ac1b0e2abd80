use super::backend::StorageBackend;
use crate::error::{DocstashError, Result};
use parking_lot::RwLock;
use serde_json::Value;
use std::collections::BTreeMap;

/// In-memory storage backend.
///
/// Keeps the whole collection in a `BTreeMap` behind an `RwLock`, so the
/// backend is `Send + Sync` and `list` iterates in ascending id order.
/// Used for tests and for embedding without a filesystem.
#[derive(Default)]
pub struct MemBackend {
    documents: RwLock<BTreeMap<String, Value>>,
    simulate_write_error: RwLock<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.write() = simulate;
    }
}

impl StorageBackend for MemBackend {
    fn put(&self, id: &str, record: &Value) -> Result<()> {
        if *self.simulate_write_error.read() {
            return Err(DocstashError::Store("Simulated write error".to_string()));
        }
        let mut documents = self.documents.write();
        documents.insert(id.to_string(), record.clone());
        Ok(())
    }

    fn get(&self, id: &str) -> Result<Option<Value>> {
        let documents = self.documents.read();
        Ok(documents.get(id).cloned())
    }

    fn delete(&self, id: &str) -> Result<()> {
        let mut documents = self.documents.write();
        documents.remove(id);
        Ok(())
    }

    fn list(&self) -> Result<Vec<Value>> {
        let documents = self.documents.read();
        Ok(documents.values().cloned().collect())
    }
}
