//! Load boundary to the host engine.
//!
//! The engine supplies the real loader; content code only hands a finished
//! id→entity mapping across and consumes nothing back beyond
//! success/failure.

use std::collections::BTreeMap;
use thiserror::Error;

use crate::schema::entity::EntityDef;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("duplicate entity id: {0}")]
    DuplicateId(String),
    #[error("entity rejected by host: {0}")]
    Rejected(String),
}

/// The host engine's load operation. Implementations take ownership of the
/// mapping; entities are immutable once across the boundary.
pub trait WorldLoader {
    fn load(&mut self, entities: BTreeMap<String, EntityDef>) -> Result<(), LoadError>;
}

/// In-memory loader standing in for an engine — used by tests and demos.
#[derive(Debug, Clone, Default)]
pub struct CollectingLoader {
    pub entities: BTreeMap<String, EntityDef>,
}

impl CollectingLoader {
    pub fn new() -> Self {
        Self::default()
    }
}

impl WorldLoader for CollectingLoader {
    fn load(&mut self, entities: BTreeMap<String, EntityDef>) -> Result<(), LoadError> {
        for (id, def) in entities {
            if self.entities.contains_key(&id) {
                return Err(LoadError::DuplicateId(id));
            }
            self.entities.insert(id, def);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::entity::Components;
    use rustc_hash::FxHashSet;

    fn mapping_of(ids: &[&str]) -> BTreeMap<String, EntityDef> {
        ids.iter()
            .map(|id| {
                (
                    id.to_string(),
                    EntityDef {
                        id: id.to_string(),
                        name: id.to_string(),
                        description: String::new(),
                        aliases: Vec::new(),
                        tags: FxHashSet::default(),
                        components: Components::default(),
                    },
                )
            })
            .collect()
    }

    #[test]
    fn collecting_loader_accepts_fresh_ids() {
        let mut loader = CollectingLoader::new();
        loader.load(mapping_of(&["a", "b"])).unwrap();
        loader.load(mapping_of(&["c"])).unwrap();
        assert_eq!(loader.entities.len(), 3);
    }

    #[test]
    fn collecting_loader_rejects_duplicates() {
        let mut loader = CollectingLoader::new();
        loader.load(mapping_of(&["a"])).unwrap();
        let err = loader.load(mapping_of(&["a"])).unwrap_err();
        assert!(matches!(err, LoadError::DuplicateId(id) if id == "a"));
    }
}
