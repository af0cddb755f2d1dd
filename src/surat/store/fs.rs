use super::{validate_name, DocumentStore};
use crate::error::Result;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// File-backed document store: one JSON file per document under a single
/// root directory.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn ensure_root(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root)?;
        }
        Ok(())
    }

    fn document_path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

impl DocumentStore for FileStore {
    fn load(&self, name: &str) -> Result<Option<Value>> {
        validate_name(name)?;
        let path = self.document_path(name);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path)?;
        let value: Value = serde_json::from_str(&content)?;
        Ok(Some(value))
    }

    // Plain whole-file overwrite. A crash mid-write can leave a truncated
    // document; callers that need more must layer it on top.
    fn save(&mut self, name: &str, value: &Value) -> Result<()> {
        validate_name(name)?;
        self.ensure_root()?;
        let content = serde_json::to_string_pretty(value)?;
        fs::write(self.document_path(name), content)?;
        Ok(())
    }
}
