//! Generation-transition engine.
//!
//! Each tick runs three read-only passes over the previous pass's complete
//! output: expand the live set to the frontier of cells that can change,
//! count live neighbors against that immutable frontier, then apply the
//! B3/S23 rule and drop everything dead.

use crate::world::World;
use cgol_core::{Coord, EngineConfig};
use std::collections::HashMap;
use std::thread;
use tracing::{debug, instrument};

/// Frontier sizes below this are counted on the calling thread even when
/// more workers are configured.
const MIN_PARALLEL_FRONTIER: usize = 4096;

/// Scratch state of one frontier cell, valid only within a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Candidate {
    alive: bool,
    neighbors: u8,
}

impl Candidate {
    /// B3/S23: birth on exactly 3 live neighbors, survival on 2 or 3
    fn next_alive(self) -> bool {
        if self.alive {
            matches!(self.neighbors, 2 | 3)
        } else {
            self.neighbors == 3
        }
    }
}

/// Advances a [`World`] one generation at a time.
///
/// The engine holds execution configuration only; every tick is a pure
/// function from one world to the next.
pub struct Engine {
    workers: usize,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            workers: config.workers.max(1),
        }
    }

    /// Compute the next generation
    #[instrument(skip(self, world), fields(live = world.len()))]
    pub fn tick(&self, world: &World) -> World {
        let frontier = expand(world);
        let counted = self.count_neighbors(&frontier);
        let next = apply_rule(&counted);
        debug!(
            "Advanced generation: {} frontier cells, {} live",
            frontier.len(),
            next.len()
        );
        next
    }

    /// Run `ticks` sequential generations
    pub fn advance(&self, world: &World, ticks: u64) -> World {
        let mut current = world.clone();
        for _ in 0..ticks {
            current = self.tick(&current);
        }
        current
    }

    /// Count live Moore neighbors for every frontier cell, reading alive
    /// flags from the immutable frontier snapshot only.
    fn count_neighbors(&self, frontier: &HashMap<Coord, bool>) -> HashMap<Coord, Candidate> {
        if self.workers == 1 || frontier.len() < MIN_PARALLEL_FRONTIER {
            return count_chunk(frontier, frontier.keys().copied());
        }

        let coords: Vec<Coord> = frontier.keys().copied().collect();
        let chunk_size = coords.len().div_ceil(self.workers);

        thread::scope(|scope| {
            let handles: Vec<_> = coords
                .chunks(chunk_size)
                .map(|chunk| scope.spawn(move || count_chunk(frontier, chunk.iter().copied())))
                .collect();

            let mut counted = HashMap::with_capacity(coords.len());
            for handle in handles {
                counted.extend(handle.join().expect("neighbor-count worker panicked"));
            }
            counted
        })
    }
}

/// Map every live cell plus its full Moore neighborhood to an alive flag.
///
/// Only cells within one step of a live cell can change state, so this is
/// the entire working set for the tick. Newly introduced neighbors are dead.
fn expand(world: &World) -> HashMap<Coord, bool> {
    let mut frontier: HashMap<Coord, bool> = HashMap::with_capacity(world.len() * 9);

    for cell in world.iter() {
        for neighbor in cell.neighbors() {
            frontier.entry(neighbor).or_insert(false);
        }
    }
    for cell in world.iter() {
        frontier.insert(cell, true);
    }

    frontier
}

fn count_chunk(
    frontier: &HashMap<Coord, bool>,
    coords: impl Iterator<Item = Coord>,
) -> HashMap<Coord, Candidate> {
    coords
        .map(|coord| {
            let neighbors = coord
                .neighbors()
                .into_iter()
                .filter(|neighbor| frontier.get(neighbor).copied().unwrap_or(false))
                .count() as u8;
            let alive = frontier.get(&coord).copied().unwrap_or(false);
            (coord, Candidate { alive, neighbors })
        })
        .collect()
}

/// Apply B3/S23 and keep only the cells that come out alive, which also
/// discards the dead padding introduced by [`expand`].
fn apply_rule(counted: &HashMap<Coord, Candidate>) -> World {
    counted
        .iter()
        .filter(|(_, candidate)| candidate.next_alive())
        .map(|(&coord, _)| coord)
        .collect()
}
