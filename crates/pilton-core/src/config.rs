//! Configuration types for the simulation.

use crate::error::Result;
use crate::topology::{GridDimensions, CELL_COLS, CELL_ROWS};
use crate::types::Particle;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// World configuration parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Width of the world grid
    pub width: i32,
    /// Height of the world grid
    pub height: i32,
}

impl WorldConfig {
    pub fn dimensions(&self) -> Result<GridDimensions> {
        GridDimensions::new(self.width, self.height)
    }
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: CELL_COLS,
            height: CELL_ROWS,
        }
    }
}

/// How the initial particle population is produced
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SeedConfig {
    /// Use exactly these particles
    Explicit { particles: Vec<Particle> },
    /// Scatter `count` particles uniformly, masses drawn from `1..=max_mass`
    Random { count: usize, max_mass: u64, seed: u64 },
}

impl Default for SeedConfig {
    fn default() -> Self {
        SeedConfig::Explicit {
            particles: vec![Particle::new(3, 2, 1)],
        }
    }
}

/// Headless run configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Number of steps to advance
    pub num_steps: u64,
    /// Log a status line every this many steps (0 disables)
    pub log_interval: u64,
    /// World configuration
    pub world: WorldConfig,
    /// Initial population
    pub seed: SeedConfig,
}

impl RunConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Loading run configuration");
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            num_steps: 10,
            log_interval: 1,
            world: WorldConfig::default(),
            seed: SeedConfig::default(),
        }
    }
}
