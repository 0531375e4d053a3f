//! The per-step transforms: movement, coalescence and decay.
//!
//! Each phase takes a particle slice and returns a fresh list. None of them mutate their input.

use crate::molecule::partition;
use pilton_core::{Direction, GridDimensions, Particle, Position};
use std::collections::BTreeMap;

/// A particle acts on a step only when the step number is a multiple of its mass.
fn is_due(timestep: u64, mass: u64) -> bool {
    timestep.checked_rem(mass) == Some(0)
}

/// Move every due particle to the shared target of its molecule.
///
/// The target of a molecule is `(1 + Σx, 1 + Σy)` over all particles outside that molecule,
/// wrapped onto the torus. Every target is computed from the same input snapshot.
pub fn move_particles(
    particles: &[Particle],
    timestep: u64,
    dims: GridDimensions,
) -> Vec<Particle> {
    let total_x: i64 = particles.iter().map(|p| i64::from(p.x())).sum();
    let total_y: i64 = particles.iter().map(|p| i64::from(p.y())).sum();

    let mut moved = Vec::with_capacity(particles.len());
    for molecule in partition(particles, dims) {
        let inner_x: i64 = molecule.iter().map(|&i| i64::from(particles[i].x())).sum();
        let inner_y: i64 = molecule.iter().map(|&i| i64::from(particles[i].y())).sum();
        let target = Position::new(
            dims.wrap_x(1 + total_x - inner_x),
            dims.wrap_y(1 + total_y - inner_y),
        );

        for &i in &molecule {
            let particle = particles[i];
            if is_due(timestep, particle.mass()) {
                moved.push(Particle::at(target, particle.mass()));
            } else {
                moved.push(particle);
            }
        }
    }

    moved
}

/// Merge particles sharing a cell into one particle carrying the summed mass.
///
/// The result holds one particle per occupied cell, ordered by column then row.
pub fn coalesce(particles: &[Particle]) -> Vec<Particle> {
    let mut masses: BTreeMap<Position, u64> = BTreeMap::new();
    for particle in particles {
        let mass = masses.entry(particle.position()).or_insert(0);
        *mass = mass.saturating_add(particle.mass());
    }

    masses
        .into_iter()
        .map(|(pos, mass)| Particle::at(pos, mass))
        .collect()
}

/// How a particle splits on a given step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decay {
    /// Passes through unchanged
    Stable,
    /// Splits into the cells left and right of it
    Horizontal,
    /// Splits into the cells above and below it
    Vertical,
    /// Splits into the four diagonal cells
    Quad,
}

impl Decay {
    /// Offsets of the fragments. Empty for [`Decay::Stable`].
    pub fn directions(&self) -> &'static [Direction] {
        match self {
            Decay::Stable => &[],
            Decay::Horizontal => &Direction::HORIZONTAL,
            Decay::Vertical => &Direction::VERTICAL,
            Decay::Quad => &Direction::CORNERS,
        }
    }
}

pub fn decay_kind(particle: &Particle, timestep: u64, dims: GridDimensions) -> Decay {
    if !is_due(timestep, particle.mass()) {
        return Decay::Stable;
    }

    let x_decays = u64::try_from(particle.x()).ok() == Some(timestep % dims.cols() as u64);
    let y_decays = u64::try_from(particle.y()).ok() == Some(timestep % dims.rows() as u64);

    match (x_decays, y_decays) {
        (true, true) => Decay::Quad,
        (true, false) => Decay::Horizontal,
        (false, true) => Decay::Vertical,
        (false, false) => Decay::Stable,
    }
}

/// The fragments `particle` turns into on this step. A stable particle yields itself.
/// Fragments keep the full mass of their parent.
pub fn decay_particle(particle: &Particle, timestep: u64, dims: GridDimensions) -> Vec<Particle> {
    match decay_kind(particle, timestep, dims) {
        Decay::Stable => vec![*particle],
        kind => kind
            .directions()
            .iter()
            .map(|&dir| Particle::at(dims.wrap(particle.position().step(dir)), particle.mass()))
            .collect(),
    }
}

pub fn decay_particles(
    particles: &[Particle],
    timestep: u64,
    dims: GridDimensions,
) -> Vec<Particle> {
    particles
        .iter()
        .flat_map(|p| decay_particle(p, timestep, dims))
        .collect()
}
