//! The coastal maze — the content set wired into the engine at startup.

use std::collections::BTreeMap;

use crate::core::loader::{LoadError, WorldLoader};
use crate::core::maze::MazeBuilder;
use crate::core::registry::{EntityRegistry, RegistryError};
use crate::schema::entity::EntityDef;

pub const WIDTH: usize = 8;
pub const HEIGHT: usize = 8;
pub const ID_PREFIX: &str = "CoastMaze";

/// Build the coastal maze room set with the given seed.
pub fn rooms(seed: u64) -> BTreeMap<String, EntityDef> {
    MazeBuilder::new()
        .width(WIDTH)
        .height(HEIGHT)
        .id_prefix(ID_PREFIX)
        .seed(seed)
        .generate()
}

/// Register the coastal maze into an entity registry.
pub fn register(registry: &mut EntityRegistry, seed: u64) -> Result<(), RegistryError> {
    registry.register_all(rooms(seed).into_values())
}

/// Build the coastal maze and hand it straight to the host loader.
pub fn install<L: WorldLoader>(loader: &mut L, seed: u64) -> Result<(), LoadError> {
    loader.load(rooms(seed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_room_set() {
        let rooms = rooms(2026);
        assert_eq!(rooms.len(), WIDTH * HEIGHT);
        assert!(rooms.contains_key("CoastMaze_r0_c0"));
        assert!(rooms.contains_key("CoastMaze_r7_c7"));
    }

    #[test]
    fn register_is_duplicate_free() {
        let mut registry = EntityRegistry::new();
        register(&mut registry, 5).unwrap();
        assert_eq!(registry.len(), WIDTH * HEIGHT);
    }
}
