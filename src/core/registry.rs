//! Entity registry — the explicit object content code registers entities
//! into before the set is handed to the host loader.
//!
//! Registration is a local invariant check: ids must be present and unique.
//! Hand-authored definitions can also be registered from RON data files.

use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

use crate::schema::entity::EntityDef;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("entity definition is missing an id")]
    MissingId,
    #[error("entity '{0}' already registered")]
    Duplicate(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

/// Collects entity definitions keyed by id, rejecting duplicates.
#[derive(Debug, Clone, Default)]
pub struct EntityRegistry {
    entities: BTreeMap<String, EntityDef>,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one definition. Fails if the id is empty or already taken.
    pub fn register(&mut self, def: EntityDef) -> Result<(), RegistryError> {
        if def.id.is_empty() {
            return Err(RegistryError::MissingId);
        }
        if self.entities.contains_key(&def.id) {
            return Err(RegistryError::Duplicate(def.id));
        }
        self.entities.insert(def.id.clone(), def);
        Ok(())
    }

    /// Register every definition in order, stopping at the first failure.
    pub fn register_all<I>(&mut self, defs: I) -> Result<(), RegistryError>
    where
        I: IntoIterator<Item = EntityDef>,
    {
        for def in defs {
            self.register(def)?;
        }
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&EntityDef> {
        self.entities.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entities.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &EntityDef)> {
        self.entities.iter()
    }

    /// Register definitions from a RON string holding a list of `EntityDef`.
    pub fn parse_ron(&mut self, input: &str) -> Result<(), RegistryError> {
        let defs: Vec<EntityDef> = ron::from_str(input)?;
        self.register_all(defs)
    }

    /// Register definitions from a RON file. The file should contain a list
    /// of `EntityDef`.
    pub fn load_from_ron(&mut self, path: &Path) -> Result<(), RegistryError> {
        let contents = std::fs::read_to_string(path)?;
        self.parse_ron(&contents)
    }

    /// The finished id→entity mapping, as the host loader consumes it.
    pub fn into_entities(self) -> BTreeMap<String, EntityDef> {
        self.entities
    }
}
