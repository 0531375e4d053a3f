//! Initial population from a seed configuration.

use crate::phases::coalesce;
use crate::state::WorldState;
use pilton_core::{Error, GridDimensions, Particle, Result, SeedConfig};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

/// Build the particles described by `config`.
///
/// Explicit lists are validated and returned as given. Random scatters are reproducible for a
/// given seed and come back coalesced, one particle per cell.
pub fn seed_particles(config: &SeedConfig, dims: GridDimensions) -> Result<Vec<Particle>> {
    match config {
        SeedConfig::Explicit { particles } => {
            WorldState::validate_particles(dims, particles)?;
            Ok(particles.clone())
        }
        SeedConfig::Random {
            count,
            max_mass,
            seed,
        } => {
            if *max_mass == 0 {
                return Err(Error::Validation(
                    "random seed max_mass must be at least 1".to_string(),
                ));
            }

            let mut rng = ChaCha8Rng::seed_from_u64(*seed);
            let scattered: Vec<Particle> = (0..*count)
                .map(|_| {
                    Particle::new(
                        rng.gen_range(0..dims.cols()),
                        rng.gen_range(0..dims.rows()),
                        rng.gen_range(1..=*max_mass),
                    )
                })
                .collect();
            let particles = coalesce(&scattered);

            debug!(
                requested = count,
                placed = particles.len(),
                seed,
                "Scattered random particles"
            );
            Ok(particles)
        }
    }
}
