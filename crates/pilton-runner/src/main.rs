//! Headless driver: seed a world, run it, print the final state as JSON.
//!
//! Usage: `pilton-runner [config.json]`. Without a path the reference universe is used.

mod telemetry;

use anyhow::{Context, Result};
use pilton_core::RunConfig;
use pilton_world::{seed_particles, RunSummary, WorldEngine, WorldState};
use serde::Serialize;
use tracing::info;

#[derive(Serialize)]
struct Report<'a> {
    summary: RunSummary,
    state: &'a WorldState,
}

fn main() -> Result<()> {
    telemetry::init_telemetry()?;

    let config = match std::env::args().nth(1) {
        Some(path) => RunConfig::from_json_file(&path)
            .with_context(|| format!("failed to load run configuration from {}", path))?,
        None => RunConfig::default(),
    };

    let mut engine = build_engine(&config)?;
    info!(
        dims = %engine.dimensions(),
        particles = engine.particles().len(),
        num_steps = config.num_steps,
        "Starting Pilton small world"
    );

    let summary = engine.run(config.num_steps, config.log_interval);

    let report = Report {
        summary,
        state: engine.state(),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}

fn build_engine(config: &RunConfig) -> Result<WorldEngine> {
    let mut engine =
        WorldEngine::from_config(&config.world).context("invalid world configuration")?;
    let particles =
        seed_particles(&config.seed, engine.dimensions()).context("invalid seed configuration")?;
    engine.set_particles(&particles)?;
    Ok(engine)
}
