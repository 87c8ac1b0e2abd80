//! # Document Service
//!
//! The CRUD facade over a storage backend. Every invariant of the record
//! lifecycle is enforced here:
//!
//! - `register` rejects ids that already hold a live record.
//! - `read`, `update`, and `delete` fail with `DocumentNotFound` for
//!   absent ids; absence is never reported as an empty value.
//! - `update` replaces content, preserves the stored `created_date`, and
//!   stamps `updated_date` with the current time, whatever the caller put
//!   in either field.
//! - Backend failures pass through untouched; they are never reinterpreted
//!   as not-found.
//!
//! The service holds no state beyond the backend handle, so it is as
//! reusable across threads as the backend underneath it.

use crate::error::{DocstashError, Result};
use crate::model::Record;
use crate::store::backend::StorageBackend;
use chrono::Utc;
use log::{debug, info};
use serde_json::Value;

/// CRUD facade over a [`StorageBackend`].
///
/// Generic over the backend so production code and tests can share the
/// exact same invariant logic.
pub struct DocumentService<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> DocumentService<B> {
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    /// Insert a new live record under `document_id`.
    ///
    /// Fails with [`DocstashError::DuplicateDocument`] if the id already
    /// holds a live record, and with [`DocstashError::RecordMismatch`] if
    /// the record's own `document_id` disagrees with the argument. The
    /// stored copy always starts with `updated_date` unset.
    pub fn register(&self, document_id: &str, record: &Record) -> Result<()> {
        if record.document_id != document_id {
            return Err(DocstashError::RecordMismatch(format!(
                "record document_id {} does not match {}",
                record.document_id, document_id
            )));
        }
        if self.backend.get(document_id)?.is_some() {
            return Err(DocstashError::DuplicateDocument(document_id.to_string()));
        }

        // A freshly registered record has never been updated, whatever the
        // caller put in the field.
        let mut stored = record.clone();
        stored.updated_date = None;

        self.backend.put(document_id, &serde_json::to_value(&stored)?)?;
        info!("registered document {}", document_id);
        Ok(())
    }

    /// Fetch the live record for `document_id`.
    pub fn read(&self, document_id: &str) -> Result<Record> {
        let record: Record = serde_json::from_value(self.fetch(document_id)?)?;
        debug!("read document {}", document_id);
        Ok(record)
    }

    /// Replace the stored record's content and stamp `updated_date`.
    ///
    /// `created_date` is preserved from the stored record and
    /// `updated_date` is set to now; caller-supplied values for either
    /// field are discarded. The supplied record's `document_id` and
    /// `document_type` must match the stored record's; a mismatch fails
    /// with [`DocstashError::RecordMismatch`].
    pub fn update(&self, document_id: &str, record: &Record) -> Result<()> {
        let stored: Record = serde_json::from_value(self.fetch(document_id)?)?;

        if record.document_id != stored.document_id {
            return Err(DocstashError::RecordMismatch(format!(
                "record document_id {} does not match stored {}",
                record.document_id, stored.document_id
            )));
        }
        if record.document_type != stored.document_type {
            return Err(DocstashError::RecordMismatch(format!(
                "record document_type {} does not match stored {}",
                record.document_type, stored.document_type
            )));
        }

        let mut next = record.clone();
        next.created_date = stored.created_date;
        next.updated_date = Some(Utc::now());

        self.backend.put(document_id, &serde_json::to_value(&next)?)?;
        info!("updated document {}", document_id);
        Ok(())
    }

    /// Permanently remove the live record for `document_id`.
    ///
    /// The `record` argument only mirrors `update`'s shape: it identifies
    /// the target, and its content is never compared against the stored
    /// value.
    pub fn delete(&self, document_id: &str, _record: &Record) -> Result<()> {
        self.fetch(document_id)?;
        self.backend.delete(document_id)?;
        info!("deleted document {}", document_id);
        Ok(())
    }

    /// Every currently live record, in the backend's stable listing order.
    /// An empty collection yields an empty vector, never an error.
    pub fn find(&self) -> Result<Vec<Record>> {
        let values = self.backend.list()?;
        let mut records = Vec::with_capacity(values.len());
        for value in values {
            records.push(serde_json::from_value(value)?);
        }
        debug!("find returned {} documents", records.len());
        Ok(records)
    }

    /// Single keyed existence probe shared by the existence-sensitive
    /// operations. Absence maps to `DocumentNotFound`; backend failures
    /// pass through untouched.
    fn fetch(&self, document_id: &str) -> Result<Value> {
        self.backend
            .get(document_id)?
            .ok_or_else(|| DocstashError::DocumentNotFound(document_id.to_string()))
    }
}
