//! Core type definitions for the simulation.

use serde::{Deserialize, Serialize};

/// Offsets of the 8-cell Moore neighborhood, the cell itself excluded.
const MOORE_OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Cartesian coordinate of a cell on the unbounded grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub x: i64,
    pub y: i64,
}

impl Coord {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    pub fn offset(&self, dx: i64, dy: i64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// The 8 Moore neighbors of this cell
    pub fn neighbors(&self) -> [Coord; 8] {
        MOORE_OFFSETS.map(|(dx, dy)| self.offset(dx, dy))
    }
}
