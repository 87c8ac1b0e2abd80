//! # Domain Model: Records
//!
//! This module defines the unit of persistence, the [`Record`]: an opaque
//! string id, a [`RecordType`] tag, a free-form JSON [`Content`] body, and
//! creation/update timestamps. Records are plain values; nothing here
//! touches storage.
//!
//! ## Serialized shape
//!
//! The field names of the stored JSON are a compatibility contract and must
//! not change:
//!
//! ```json
//! {
//!   "document_id": "90a203...",
//!   "document_type": "article",
//!   "content": { "Test": "Test" },
//!   "created_date": "2023-01-01T00:00:00Z",
//!   "updated_date": "2023-01-02T00:00:00Z"
//! }
//! ```
//!
//! `updated_date` is absent, not null, until the first update. That keeps
//! "never updated" unambiguous from "updated at some sentinel time".

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use uuid::Uuid;

/// Free-form document body: string keys mapped to arbitrary JSON values.
/// No schema is enforced; the only requirement is that it round-trips
/// through serde_json.
pub type Content = serde_json::Map<String, Value>;

/// Classification tag for a record.
///
/// Serializes to the lowercase name (`"article"`, `"issue"`, `"journal"`);
/// stored data relies on these exact tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordType {
    Article,
    Issue,
    Journal,
}

impl RecordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::Article => "article",
            RecordType::Issue => "issue",
            RecordType::Journal => "journal",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A persisted document.
///
/// `document_id` and `document_type` are immutable once registered;
/// `content` is fully replaceable on update. `created_date` is set once at
/// construction and survives every update; `updated_date` stays `None`
/// until the service performs the first update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    pub document_id: String,
    pub document_type: RecordType,
    pub content: Content,
    pub created_date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_date: Option<DateTime<Utc>>,
}

impl Record {
    /// Build a record with `created_date` set to now and no `updated_date`.
    pub fn new(document_id: String, document_type: RecordType, content: Content) -> Self {
        Self {
            document_id,
            document_type,
            content,
            created_date: Utc::now(),
            updated_date: None,
        }
    }

    /// Override the creation timestamp, for callers that carry their own.
    pub fn with_created_date(mut self, created_date: DateTime<Utc>) -> Self {
        self.created_date = created_date;
        self
    }
}

/// Generate a fresh opaque document id: a v4 UUID rendered as 32 lowercase
/// hex characters without hyphens.
pub fn new_document_id() -> String {
    Uuid::new_v4().simple().to_string()
}
