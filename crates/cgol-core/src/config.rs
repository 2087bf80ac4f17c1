//! Configuration types for the simulation.

use serde::{Deserialize, Serialize};

/// Viewport and initial-pattern parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldConfig {
    /// Extent of the visible world in the x and y directions
    pub size: i64,
    /// Live-cell density when generating a random pattern (0.0 to 1.0)
    pub density: f32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            size: 50,
            density: 0.2,
        }
    }
}

/// Engine execution parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Worker threads used for the neighbor-count stage
    pub workers: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { workers: 1 }
    }
}

/// Full parameter set for one simulation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Number of generations to simulate
    pub ticks: u64,
    /// Random seed for reproducible pattern generation
    pub seed: u64,
    /// Viewport and pattern configuration
    pub world: WorldConfig,
    /// Engine configuration
    pub engine: EngineConfig,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            ticks: 10,
            seed: 0,
            world: WorldConfig::default(),
            engine: EngineConfig::default(),
        }
    }
}
