use super::{validate_name, DocumentStore};
use crate::error::Result;
use serde_json::Value;
use std::collections::HashMap;

/// In-memory document store for testing. Does NOT persist data.
#[derive(Default)]
pub struct MemoryStore {
    documents: HashMap<String, Value>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DocumentStore for MemoryStore {
    fn load(&self, name: &str) -> Result<Option<Value>> {
        validate_name(name)?;
        Ok(self.documents.get(name).cloned())
    }

    fn save(&mut self, name: &str, value: &Value) -> Result<()> {
        validate_name(name)?;
        self.documents.insert(name.to_string(), value.clone());
        Ok(())
    }
}
