//! Immutable world state and the step transition.

use crate::phases::{coalesce, decay_particles, move_particles};
use pilton_core::{Error, GridDimensions, Particle, Result};
use serde::Serialize;
use tracing::trace;

/// Snapshot of the world at one timestep.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorldState {
    dims: GridDimensions,
    timestep: u64,
    particles: Vec<Particle>,
}

impl WorldState {
    /// An empty world at timestep 0.
    pub fn new(dims: GridDimensions) -> Self {
        Self {
            dims,
            timestep: 0,
            particles: Vec::new(),
        }
    }

    /// A world holding `particles` verbatim. Colocated particles are allowed and are only merged
    /// by the next step.
    pub fn with_particles(
        dims: GridDimensions,
        timestep: u64,
        particles: Vec<Particle>,
    ) -> Result<Self> {
        Self::validate_particles(dims, &particles)?;
        Ok(Self {
            dims,
            timestep,
            particles,
        })
    }

    /// Reject particles without mass or outside the grid.
    pub fn validate_particles(dims: GridDimensions, particles: &[Particle]) -> Result<()> {
        for particle in particles {
            if particle.mass() == 0 {
                return Err(Error::Validation(format!(
                    "particle {} must have a mass of at least 1",
                    particle
                )));
            }
            if !dims.contains(particle.position()) {
                return Err(Error::Validation(format!(
                    "particle {} lies outside the {} grid",
                    particle, dims
                )));
            }
        }
        Ok(())
    }

    pub fn dimensions(&self) -> GridDimensions {
        self.dims
    }

    pub fn timestep(&self) -> u64 {
        self.timestep
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn total_mass(&self) -> u64 {
        self.particles
            .iter()
            .fold(0u64, |acc, p| acc.saturating_add(p.mass()))
    }

    /// The state one step later: move, coalesce, decay, coalesce.
    ///
    /// The clock advances first, so every phase of step `t` sees `timestep == t`.
    pub fn next(&self) -> WorldState {
        let timestep = self.timestep + 1;

        let moved = move_particles(&self.particles, timestep, self.dims);
        let merged = coalesce(&moved);
        let decayed = decay_particles(&merged, timestep, self.dims);
        let particles = coalesce(&decayed);

        trace!(
            timestep,
            before = self.particles.len(),
            merged = merged.len(),
            fragments = decayed.len(),
            after = particles.len(),
            "Step phases complete"
        );

        WorldState {
            dims: self.dims,
            timestep,
            particles,
        }
    }
}
