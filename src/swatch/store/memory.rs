use super::{Collection, DataStore};
use crate::error::Result;
use crate::model::{Record, RecordId};
use parking_lot::Mutex;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    state: Mutex<Collection>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataStore for InMemoryStore {
    fn list(&self) -> Result<Vec<Record>> {
        Ok(self.state.lock().records().to_vec())
    }

    fn add(&self, hex: &str) -> Result<Record> {
        self.state.lock().add(hex)
    }

    fn find(&self, id: RecordId) -> Result<Record> {
        self.state.lock().find(id)
    }

    fn update(&self, id: RecordId, hex: &str) -> Result<Record> {
        self.state.lock().update(id, hex)
    }

    fn delete(&self, id: RecordId) -> Result<Record> {
        self.state.lock().delete(id)
    }

    fn clear(&self) -> Result<()> {
        self.state.lock().clear();
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Adds `count` grey shades, `#000001`, `#000002`, ...
        pub fn with_colors(self, count: usize) -> Self {
            for i in 0..count {
                self.store.add(&format!("#{:06x}", i + 1)).unwrap();
            }
            self
        }

        pub fn with_color(self, hex: &str) -> Self {
            self.store.add(hex).unwrap();
            self
        }
    }
}
