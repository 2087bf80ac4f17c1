//! World simulation engine.
//!
//! This module implements the unbounded sparse grid and the B3/S23
//! generation-transition pipeline that advances it.

pub mod world;
pub mod engine;

pub use world::World;
pub use engine::Engine;
