//! World simulation engine.
//!
//! This module implements Pilton's small world: point masses on a torus that move in
//! molecules, merge when they share a cell and split when their position lines up with the
//! clock.

pub mod grid;
pub mod molecule;
pub mod phases;
pub mod seed;
pub mod simulation;
pub mod state;

pub use grid::Occupancy;
pub use molecule::{find_molecule, molecule_of, partition};
pub use phases::{coalesce, decay_kind, decay_particle, decay_particles, move_particles, Decay};
pub use seed::seed_particles;
pub use simulation::{RunSummary, WorldEngine};
pub use state::WorldState;
