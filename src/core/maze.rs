//! Maze generation — randomized depth-first search over a bounded grid.
//!
//! Carves a perfect maze (a spanning tree over the cells: connected,
//! acyclic) and emits one room entity per cell, each carrying its exits
//! mapping. Built via `MazeBuilder`.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;

use crate::schema::entity::{Components, EntityDef, RoomComponent};
use crate::schema::grid::{Cell, Direction};

/// Grid dimensions are clamped to this many cells per axis.
pub const MAX_DIM: usize = 10;

pub const DEFAULT_ID_PREFIX: &str = "Maze";
pub const DEFAULT_ROOM_ICON: &str = "O";
pub const DEFAULT_ROOM_COLOR: &str = "gray";

const ROOM_DESCRIPTION: &str = "Stone walls twist and turn through a tight, grid-cut maze.";

/// Options-and-entry-point for maze generation.
///
/// Out-of-range dimensions are silently clamped into [1, `MAX_DIM`], never
/// rejected. Generation itself is infallible; with a fixed `seed` it is
/// fully deterministic.
#[derive(Debug, Clone)]
pub struct MazeBuilder {
    width: usize,
    height: usize,
    id_prefix: String,
    room_icon: String,
    room_color: String,
    seed: Option<u64>,
}

impl Default for MazeBuilder {
    fn default() -> Self {
        Self {
            width: MAX_DIM,
            height: MAX_DIM,
            id_prefix: DEFAULT_ID_PREFIX.to_string(),
            room_icon: DEFAULT_ROOM_ICON.to_string(),
            room_color: DEFAULT_ROOM_COLOR.to_string(),
            seed: None,
        }
    }
}

impl MazeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn height(mut self, height: usize) -> Self {
        self.height = height;
        self
    }

    /// Namespace prefix for generated room ids (`"{prefix}_r{row}_c{col}"`).
    pub fn id_prefix(mut self, prefix: &str) -> Self {
        self.id_prefix = prefix.to_string();
        self
    }

    pub fn room_icon(mut self, icon: &str) -> Self {
        self.room_icon = icon.to_string();
        self
    }

    pub fn room_color(mut self, color: &str) -> Self {
        self.room_color = color.to_string();
        self
    }

    /// Fix the RNG seed. Without one, `generate` draws from `thread_rng`.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Generate the maze with the configured randomness.
    pub fn generate(&self) -> BTreeMap<String, EntityDef> {
        match self.seed {
            Some(seed) => self.generate_with(&mut StdRng::seed_from_u64(seed)),
            None => self.generate_with(&mut rand::thread_rng()),
        }
    }

    /// Generate the maze drawing entropy from a caller-supplied RNG.
    pub fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> BTreeMap<String, EntityDef> {
        let width = self.width.clamp(1, MAX_DIM);
        let height = self.height.clamp(1, MAX_DIM);

        // Flat row-major arenas, one slot per cell.
        let mut visited = vec![false; width * height];
        let mut exits: Vec<BTreeMap<Direction, String>> = vec![BTreeMap::new(); width * height];

        let mut stack = vec![Cell::new(0, 0)];
        visited[0] = true;

        while let Some(&cell) = stack.last() {
            let mut order = Direction::ALL;
            order.shuffle(rng);

            let mut progressed = false;
            for dir in order {
                let next = match cell.step(dir, width, height) {
                    Some(next) if !visited[next.index(width)] => next,
                    _ => continue,
                };

                // One bidirectional passage per outer iteration.
                exits[cell.index(width)].insert(dir, self.room_id(next));
                exits[next.index(width)].insert(dir.opposite(), self.room_id(cell));

                visited[next.index(width)] = true;
                stack.push(next);
                progressed = true;
                break;
            }

            if !progressed {
                stack.pop();
            }
        }

        let mut rooms = BTreeMap::new();
        for row in 0..height {
            for col in 0..width {
                let cell = Cell::new(row, col);
                let id = self.room_id(cell);
                rooms.insert(
                    id.clone(),
                    EntityDef {
                        id,
                        name: format!("Maze Room ({row},{col})"),
                        description: ROOM_DESCRIPTION.to_string(),
                        aliases: vec![format!("maze {row},{col}"), format!("cell {row},{col}")],
                        tags: ["room", "maze"].iter().map(|t| t.to_string()).collect(),
                        components: Components {
                            room: Some(RoomComponent {
                                icon: self.room_icon.clone(),
                                color: self.room_color.clone(),
                                children: Vec::new(),
                                exits: std::mem::take(&mut exits[cell.index(width)]),
                            }),
                        },
                    },
                );
            }
        }
        rooms
    }

    fn room_id(&self, cell: Cell) -> String {
        format!("{}_r{}_c{}", self.id_prefix, cell.row, cell.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults() {
        let builder = MazeBuilder::new();
        assert_eq!(builder.width, 10);
        assert_eq!(builder.height, 10);
        assert_eq!(builder.id_prefix, "Maze");
        assert_eq!(builder.room_icon, "O");
        assert_eq!(builder.room_color, "gray");
        assert!(builder.seed.is_none());
    }

    #[test]
    fn room_count_matches_grid() {
        let rooms = MazeBuilder::new().width(4).height(3).seed(7).generate();
        assert_eq!(rooms.len(), 12);
    }

    #[test]
    fn ids_follow_prefix_scheme() {
        let rooms = MazeBuilder::new().width(2).height(2).id_prefix("Crypt").seed(1).generate();
        for row in 0..2 {
            for col in 0..2 {
                assert!(rooms.contains_key(&format!("Crypt_r{row}_c{col}")));
            }
        }
    }

    #[test]
    fn single_cell_has_no_exits() {
        let rooms = MazeBuilder::new().width(1).height(1).seed(0).generate();
        assert_eq!(rooms.len(), 1);
        let room = rooms.get("Maze_r0_c0").unwrap();
        assert!(room.room().unwrap().exits.is_empty());
    }

    #[test]
    fn dimensions_clamp_silently() {
        let rooms = MazeBuilder::new().width(0).height(0).seed(3).generate();
        assert_eq!(rooms.len(), 1);

        let rooms = MazeBuilder::new().width(999).height(1).seed(3).generate();
        assert_eq!(rooms.len(), 10);
    }

    #[test]
    fn same_seed_same_maze() {
        let a = MazeBuilder::new().width(6).height(6).seed(42).generate();
        let b = MazeBuilder::new().width(6).height(6).seed(42).generate();
        assert_eq!(a, b);
    }

    #[test]
    fn injected_rng_matches_seeded() {
        let builder = MazeBuilder::new().width(5).height(4);
        let via_seed = builder.clone().seed(9).generate();
        let via_rng = builder.generate_with(&mut StdRng::seed_from_u64(9));
        assert_eq!(via_seed, via_rng);
    }

    #[test]
    fn cosmetics_applied_to_every_room() {
        let rooms = MazeBuilder::new()
            .width(3)
            .height(3)
            .room_icon("#")
            .room_color("teal")
            .seed(11)
            .generate();
        for room in rooms.values() {
            let rc = room.room().unwrap();
            assert_eq!(rc.icon, "#");
            assert_eq!(rc.color, "teal");
            assert!(rc.children.is_empty());
            assert!(room.has_all_tags(&["room", "maze"]));
        }
    }

    #[test]
    fn aliases_name_the_cell() {
        let rooms = MazeBuilder::new().width(2).height(1).seed(5).generate();
        let room = rooms.get("Maze_r0_c1").unwrap();
        assert_eq!(room.aliases, vec!["maze 0,1".to_string(), "cell 0,1".to_string()]);
    }
}
