use super::backend::StorageBackend;
use crate::error::{DocstashError, Result};
use log::debug;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use uuid::Uuid;

const DATA_FILENAME: &str = "documents.json";

/// Filesystem storage backend.
///
/// One backend instance binds one collection directory. The whole
/// collection lives in a single `documents.json` object keyed by document
/// id; ids are opaque caller strings, so they stay JSON object keys and
/// never become filenames. Every write replaces the file atomically
/// (uniquely named temp file, then rename).
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Path of the collection file inside the root directory.
    pub fn data_file(&self) -> PathBuf {
        self.root.join(DATA_FILENAME)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(DocstashError::Io)?;
        }
        Ok(())
    }

    fn load_documents(&self) -> Result<BTreeMap<String, Value>> {
        let data_file = self.data_file();
        if !data_file.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(data_file).map_err(DocstashError::Io)?;
        let documents: BTreeMap<String, Value> =
            serde_json::from_str(&content).map_err(DocstashError::Serialization)?;
        Ok(documents)
    }

    fn save_documents(&self, documents: &BTreeMap<String, Value>) -> Result<()> {
        self.ensure_dir()?;

        let data_file = self.data_file();
        let content =
            serde_json::to_string_pretty(documents).map_err(DocstashError::Serialization)?;

        // Atomic write
        let tmp_file = self.root.join(format!(".documents-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_file, content).map_err(DocstashError::Io)?;
        fs::rename(&tmp_file, &data_file).map_err(DocstashError::Io)?;

        debug!(
            "wrote {} documents to {}",
            documents.len(),
            data_file.display()
        );
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn put(&self, id: &str, record: &Value) -> Result<()> {
        let mut documents = self.load_documents()?;
        documents.insert(id.to_string(), record.clone());
        self.save_documents(&documents)
    }

    fn get(&self, id: &str) -> Result<Option<Value>> {
        let documents = self.load_documents()?;
        Ok(documents.get(id).cloned())
    }

    fn delete(&self, id: &str) -> Result<()> {
        let mut documents = self.load_documents()?;
        if documents.remove(id).is_some() {
            self.save_documents(&documents)?;
        }
        Ok(())
    }

    fn list(&self) -> Result<Vec<Value>> {
        let documents = self.load_documents()?;
        Ok(documents.into_values().collect())
    }
}
