//! # Storage Layer
//!
//! [`backend::StorageBackend`] is the raw persistence contract: put, get,
//! delete, and list of serialized records by document id. Backends know
//! nothing about record semantics; the existence, duplicate, and timestamp
//! invariants all live in the document service.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: one collection per directory, persisted as
//!   a single `documents.json`, written atomically.
//! - [`mem_backend::MemBackend`]: a `BTreeMap` behind an `RwLock`, for
//!   tests and embedding without a filesystem.
//!
//! ## Storage layout (FsBackend)
//!
//! ```text
//! <data_dir>/
//! └── documents.json    # whole collection, object keyed by document_id
//! ```

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;
