//! Sparse unbounded grid of live cells.

use cgol_core::Coord;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The set of live cells on an unbounded grid.
///
/// Only live cells are stored; every coordinate not present is dead. A world
/// is replaced wholesale each generation, never mutated across ticks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct World {
    cells: HashSet<Coord>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.contains(&coord)
    }

    pub fn insert(&mut self, coord: Coord) -> bool {
        self.cells.insert(coord)
    }

    /// Iterator over the live cells, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells.iter().copied()
    }

    /// The same pattern shifted by a constant offset
    pub fn translate(&self, dx: i64, dy: i64) -> World {
        self.iter().map(|cell| cell.offset(dx, dy)).collect()
    }
}

impl FromIterator<Coord> for World {
    fn from_iter<I: IntoIterator<Item = Coord>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}
