//! # Storage Layer
//!
//! This module defines the document-store abstraction for surat. The
//! [`DocumentStore`] trait lets the rest of the application work against
//! different backends.
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with `MemoryStore` (no filesystem needed)
//! - Allow **future backends** (a real HTTP document endpoint, a database)
//!   without changing the register logic
//! - Keep business logic **decoupled** from persistence details
//!
//! ## Model
//!
//! A store holds named JSON documents that are always read and written
//! whole. There is no partial update, no locking, and no transaction: every
//! mutation is a read-modify-write cycle against one document, and two
//! concurrent writers to the same name race with last-write-wins on the
//! entire document.
//!
//! ## Document names
//!
//! Names must match the pattern `lowercase letters and underscores` plus a
//! `.json` suffix. Anything else is rejected with `InvalidName` before the
//! backend is touched, which keeps a caller-supplied name from escaping the
//! store root.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, one file per document under a
//!   single root directory
//! - [`memory::MemoryStore`]: in-memory storage for tests
//!
//! ## Storage Layout
//!
//! ```text
//! .surat/
//! ├── config.json         # CLI configuration
//! ├── counters.json       # Numbering counter pair
//! ├── surat_masuk.json    # Incoming register
//! └── surat_keluar.json   # Outgoing register
//! ```

use crate::error::{Result, SuratError};
use serde_json::Value;

pub mod fs;
pub mod memory;

/// Abstract interface for whole-document JSON storage.
pub trait DocumentStore {
    /// Load a document in full. `Ok(None)` means the document does not
    /// exist, which callers treat as "use the default" during
    /// initialization.
    fn load(&self, name: &str) -> Result<Option<Value>>;

    /// Persist a document in full, overwriting any previous content.
    fn save(&mut self, name: &str, value: &Value) -> Result<()>;
}

/// Checks a document name against the allowed pattern: one or more
/// lowercase ASCII letters or underscores, followed by `.json`.
pub fn validate_name(name: &str) -> Result<()> {
    let stem = name
        .strip_suffix(".json")
        .ok_or_else(|| SuratError::InvalidName(name.to_string()))?;
    if stem.is_empty() || !stem.chars().all(|c| c.is_ascii_lowercase() || c == '_') {
        return Err(SuratError::InvalidName(name.to_string()));
    }
    Ok(())
}
