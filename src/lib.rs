//! # docstash
//!
//! A small document-persistence library: structured records identified by
//! an opaque document id, stored through an interchangeable backend.
//!
//! ## The Two-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Document Service (service.rs)                              │
//! │  - register / read / update / delete / find                 │
//! │  - Owns every invariant: existence probes, duplicate        │
//! │    detection, created/updated timestamp bookkeeping         │
//! │  - Owns (de)serialization of records                        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Backend (store/)                                   │
//! │  - StorageBackend trait: put/get/delete/list by id          │
//! │  - Deals only in serialized records, never in Record        │
//! │  - FsBackend (production), MemBackend (tests/embedding)     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The service holds no state beyond the backend handle, so it is as
//! concurrency-safe as the backend underneath it. Errors are typed
//! ([`error::DocstashError`]); backend failures pass through the service
//! unmodified, so "not found" is never conflated with an I/O problem.
//!
//! ## Example
//!
//! ```
//! use docstash::model::{new_document_id, Content, Record, RecordType};
//! use docstash::service::DocumentService;
//! use docstash::store::mem_backend::MemBackend;
//!
//! # fn main() -> docstash::error::Result<()> {
//! let service = DocumentService::with_backend(MemBackend::new());
//!
//! let mut content = Content::new();
//! content.insert("title".to_string(), "Hello".into());
//! let record = Record::new(new_document_id(), RecordType::Article, content);
//!
//! service.register(&record.document_id, &record)?;
//! let stored = service.read(&record.document_id)?;
//! assert!(stored.updated_date.is_none());
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Overview
//!
//! - [`model`]: record types ([`model::Record`], [`model::RecordType`])
//! - [`service`]: the CRUD facade ([`service::DocumentService`])
//! - [`store`]: backend contract and the shipped implementations
//! - [`config`]: configuration and data directory resolution
//! - [`logging`]: optional file-logging bootstrap
//! - [`error`]: error types

pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;
