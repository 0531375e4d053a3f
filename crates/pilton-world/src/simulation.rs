//! Simulation engine driving a world one step at a time.

use crate::state::WorldState;
use pilton_core::{GridDimensions, Particle, Result, WorldConfig};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Mutable handle around a [`WorldState`].
///
/// The engine holds no locks. Callers sharing one engine between threads must synchronize
/// around it themselves.
#[derive(Debug, Clone)]
pub struct WorldEngine {
    state: WorldState,
}

impl WorldEngine {
    /// An empty 7x7 world at timestep 0.
    pub fn new() -> Self {
        Self::with_dimensions(GridDimensions::REFERENCE)
    }

    pub fn with_dimensions(dims: GridDimensions) -> Self {
        Self {
            state: WorldState::new(dims),
        }
    }

    pub fn from_config(config: &WorldConfig) -> Result<Self> {
        Ok(Self::with_dimensions(config.dimensions()?))
    }

    pub fn dimensions(&self) -> GridDimensions {
        self.state.dimensions()
    }

    /// Back to timestep 0 with no particles.
    pub fn reset(&mut self) {
        self.state = WorldState::new(self.state.dimensions());
    }

    /// Replace the particle collection with a copy of `particles`. The timestep is kept and
    /// colocated particles are stored as given.
    pub fn set_particles(&mut self, particles: &[Particle]) -> Result<()> {
        self.state = WorldState::with_particles(
            self.state.dimensions(),
            self.state.timestep(),
            particles.to_vec(),
        )?;
        Ok(())
    }

    /// Snapshot of the current particles.
    pub fn particles(&self) -> Vec<Particle> {
        self.state.particles().to_vec()
    }

    pub fn timestep(&self) -> u64 {
        self.state.timestep()
    }

    pub fn state(&self) -> &WorldState {
        &self.state
    }

    /// Advance the world by exactly one step.
    pub fn step(&mut self) {
        self.state = self.state.next();
    }

    /// Status line in the form `t=<timestep> particle count=<n>`.
    pub fn summary(&self) -> String {
        format!(
            "t={} particle count={}",
            self.state.timestep(),
            self.state.particles().len()
        )
    }

    /// Advance `steps` steps, logging a status line every `log_interval` steps (0 disables).
    #[instrument(skip(self), fields(start = self.state.timestep()))]
    pub fn run(&mut self, steps: u64, log_interval: u64) -> RunSummary {
        info!("Starting run for {} steps", steps);

        let mut peak_particle_count = self.state.particles().len();
        for i in 1..=steps {
            self.step();
            peak_particle_count = peak_particle_count.max(self.state.particles().len());

            if log_interval > 0 && i % log_interval == 0 {
                let listing: Vec<String> =
                    self.state.particles().iter().map(Particle::to_string).collect();
                debug!(
                    timestep = self.state.timestep(),
                    particles = %listing.join(" "),
                    "{}",
                    self.summary()
                );
            }
        }

        let result = RunSummary {
            final_timestep: self.state.timestep(),
            particle_count: self.state.particles().len(),
            total_mass: self.state.total_mass(),
            peak_particle_count,
        };

        info!(
            event = "run_summary",
            final_timestep = result.final_timestep,
            particle_count = result.particle_count,
            total_mass = result.total_mass,
            peak_particle_count = result.peak_particle_count,
            "Run complete"
        );

        result
    }
}

impl Default for WorldEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub final_timestep: u64,
    pub particle_count: usize,
    pub total_mass: u64,
    pub peak_particle_count: usize,
}
