use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::grid::Direction;

/// An entity definition as the Orbis loader consumes it: identity, display
/// strings, tags, and an open component bag.
///
/// The host interprets component semantics; content code only fills the
/// fields in. Definitions are plain data and never mutated after they are
/// handed across the load boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityDef {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub tags: FxHashSet<String>,
    #[serde(default)]
    pub components: Components,
}

/// The component bag attached to an entity. Only the room component exists
/// today; the host's component map is open-ended.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Components {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room: Option<RoomComponent>,
}

/// Room data: cosmetics, inline child entities, and the exits mapping.
///
/// `exits` holds only directions with an actual passage; a missing key means
/// no exit that way. Ordered maps keep serialized output stable for equal
/// inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomComponent {
    pub icon: String,
    pub color: String,
    #[serde(default)]
    pub children: Vec<EntityDef>,
    #[serde(default)]
    pub exits: BTreeMap<Direction, String>,
}

impl EntityDef {
    /// Returns true if this entity has the given tag.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    /// Returns true if this entity has ALL of the given tags.
    pub fn has_all_tags(&self, tags: &[&str]) -> bool {
        tags.iter().all(|tag| self.tags.contains(*tag))
    }

    /// The room component, if this entity is a room.
    pub fn room(&self) -> Option<&RoomComponent> {
        self.components.room.as_ref()
    }
}
