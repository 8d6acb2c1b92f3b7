//! Read-only saved-memory catalog collaborator
//!
//! The host application owns long-term memories and exposes them behind
//! [`MemoryCatalog`]; the engine only reads. Any persistence layer can sit
//! behind the trait.

use std::sync::RwLock;

use crate::types::SavedMemory;

/// Host-supplied accessor for saved memories
pub trait MemoryCatalog: Send + Sync {
    fn saved_memories(&self) -> Vec<SavedMemory>;
}

/// Simple vector-backed catalog for tests and the REPL
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    memories: RwLock<Vec<SavedMemory>>,
}

impl InMemoryCatalog {
    pub fn new(memories: Vec<SavedMemory>) -> Self {
        Self {
            memories: RwLock::new(memories),
        }
    }

    pub fn add(&self, memory: SavedMemory) {
        self.memories.write().unwrap().push(memory);
    }

    pub fn len(&self) -> usize {
        self.memories.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl MemoryCatalog for InMemoryCatalog {
    fn saved_memories(&self) -> Vec<SavedMemory> {
        self.memories.read().unwrap().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MemoryCategory;
    use chrono::NaiveDate;

    #[test]
    fn test_in_memory_catalog_preserves_order() {
        let catalog = InMemoryCatalog::default();
        assert!(catalog.is_empty());

        for title in ["first", "second", "third"] {
            catalog.add(SavedMemory::new(
                title,
                "content",
                MemoryCategory::LifeUpdates,
                NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
                None,
            ));
        }

        let memories = catalog.saved_memories();
        assert_eq!(memories.len(), 3);
        assert_eq!(memories[0].title, "first");
        assert_eq!(memories[2].title, "third");
    }
}
