//! Persisted key-value preferences.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use folio_common::FolioResult;

/// Key-value store that survives page reloads.
pub trait PreferenceStore {
    /// Reads `key`.
    fn get(&self, key: &str) -> FolioResult<Option<String>>;

    /// Writes `key`.
    fn set(&self, key: &str, value: &str) -> FolioResult<()>;
}

/// Process-local store. Clones share their contents, so handing a clone to a
/// freshly built page simulates a reload.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    values: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryPreferenceStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> FolioResult<Option<String>> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> FolioResult<()> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
