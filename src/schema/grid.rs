use serde::{Deserialize, Serialize};

/// A compass direction between adjacent grid cells.
///
/// Serialized by its lowercase wire name, which is also the exit key the
/// host engine expects (`"north"`, `"east"`, `"south"`, `"west"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All four directions, in fixed declaration order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Returns the wire name for this direction (e.g., "north").
    pub fn name(&self) -> &'static str {
        match self {
            Self::North => "north",
            Self::East => "east",
            Self::South => "south",
            Self::West => "west",
        }
    }

    /// The direction leading back the way you came.
    pub fn opposite(&self) -> Direction {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }

    /// (row, col) delta for one step in this direction. Row 0 is the
    /// northernmost row, so north is -1.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Self::North => (-1, 0),
            Self::East => (0, 1),
            Self::South => (1, 0),
            Self::West => (0, -1),
        }
    }
}

/// A grid cell coordinate, 0-indexed from the northwest corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Index of this cell in a flat row-major arena of the given width.
    pub fn index(&self, width: usize) -> usize {
        self.row * width + self.col
    }

    /// The neighboring cell one step in `dir`, or `None` if the step would
    /// leave a width×height grid.
    pub fn step(&self, dir: Direction, width: usize, height: usize) -> Option<Cell> {
        let (dr, dc) = dir.delta();
        let row = self.row as i64 + dr as i64;
        let col = self.col as i64 + dc as i64;
        if row < 0 || col < 0 || row >= height as i64 || col >= width as i64 {
            return None;
        }
        Some(Cell::new(row as usize, col as usize))
    }
}
