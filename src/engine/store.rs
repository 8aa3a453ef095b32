use std::collections::HashMap;

use super::{Engine, Result};

// In-memory stand-in for the adaptee store
pub struct MemStore {
    map: HashMap<String, String>,
    closed: bool,
}

impl MemStore {
    pub fn new() -> Self {
        MemStore {
            map: HashMap::new(),
            closed: false,
        }
    }

    // mark the connection closed, as quit does
    pub fn close(&mut self) {
        self.closed = true;
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

impl Default for MemStore {
    fn default() -> Self {
        MemStore::new()
    }
}

impl Engine for MemStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.map.get(key).cloned())
    }

    fn set(&mut self, key: &str, val: &str) -> Result<()> {
        self.map.insert(key.to_string(), val.to_string());
        Ok(())
    }

    fn del(&mut self, key: &str) -> Result<bool> {
        Ok(self.map.remove(key).is_some())
    }
}
