//! Core type definitions for the simulation.

use crate::topology::{is_axis_adjacent, GridDimensions};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 2D position on the torus
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn add(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// One unwrapped step in the given direction
    pub fn step(&self, dir: Direction) -> Self {
        let (dx, dy) = dir.to_delta();
        self.add(dx, dy)
    }
}

/// Grid direction. North is towards row 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl Direction {
    pub const SIDES: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    pub const CORNERS: [Direction; 4] = [
        Direction::NorthWest,
        Direction::NorthEast,
        Direction::SouthWest,
        Direction::SouthEast,
    ];

    pub const HORIZONTAL: [Direction; 2] = [Direction::West, Direction::East];

    pub const VERTICAL: [Direction; 2] = [Direction::North, Direction::South];

    pub fn to_delta(&self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
            Direction::NorthEast => (1, -1),
            Direction::NorthWest => (-1, -1),
            Direction::SouthEast => (1, 1),
            Direction::SouthWest => (-1, 1),
        }
    }
}

/// A point mass on the torus.
///
/// Particles are plain values: two particles with the same coordinates and mass are the same
/// particle as far as the simulation is concerned. Mass is expected to be at least 1; the
/// world validates this when particles are seeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Particle {
    x: i32,
    y: i32,
    mass: u64,
}

impl Particle {
    pub fn new(x: i32, y: i32, mass: u64) -> Self {
        Self { x, y, mass }
    }

    pub fn at(pos: Position, mass: u64) -> Self {
        Self::new(pos.x, pos.y, mass)
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn mass(&self) -> u64 {
        self.mass
    }

    pub fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }

    /// Same cell, regardless of mass.
    pub fn is_colocated(&self, other: &Particle) -> bool {
        self.x == other.x && self.y == other.y
    }

    pub fn is_adjacent(&self, other: &Particle, dims: GridDimensions) -> bool {
        is_axis_adjacent(self.position(), other.position(), dims)
    }
}

impl fmt::Display for Particle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x{}y{}m{}", self.x, self.y, self.mass)
    }
}
