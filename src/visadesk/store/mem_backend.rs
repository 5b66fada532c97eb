use super::backend::{CollectionFile, StorageBackend};
use crate::error::{Result, VisadeskError};
use std::cell::RefCell;
use std::collections::HashMap;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since the console is
/// single-threaded. This keeps the `StorageBackend` trait on `&self`
/// without the overhead of a lock.
pub struct MemBackend {
    files: RefCell<HashMap<CollectionFile, String>>,
    simulate_write_error: RefCell<bool>,
}

impl Default for MemBackend {
    fn default() -> Self {
        Self {
            files: RefCell::new(HashMap::new()),
            simulate_write_error: RefCell::new(false),
        }
    }
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// Test helper: seed a collection with raw text, bypassing the
    /// simulated-error flag. Useful for planting corrupt JSON.
    pub fn seed(&self, file: CollectionFile, contents: &str) {
        self.files.borrow_mut().insert(file, contents.to_string());
    }
}

impl StorageBackend for MemBackend {
    fn read_file(&self, file: CollectionFile) -> Result<Option<String>> {
        let files = self.files.borrow();
        Ok(files.get(&file).cloned())
    }

    fn write_file(&self, file: CollectionFile, contents: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(VisadeskError::Store("Simulated write error".to_string()));
        }
        let mut files = self.files.borrow_mut();
        files.insert(file, contents.to_string());
        Ok(())
    }
}
