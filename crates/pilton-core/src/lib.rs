//! Core types and utilities for the Pilton small-world particle simulation.

pub mod types;
pub mod topology;
pub mod config;
pub mod error;

pub use error::{Error, Result};
pub use types::*;
pub use topology::*;
pub use config::*;
