//! Cell occupancy index over a particle slice.

use pilton_core::{GridDimensions, Particle, Position};
use std::collections::HashMap;

/// Maps occupied cells of the torus to the indices of the particles sitting in them.
///
/// Built once per phase from a particle slice; indices refer back into that slice. Only cells
/// holding a particle are stored, so the cost follows the particle count, not the grid size.
#[derive(Debug, Clone)]
pub struct Occupancy {
    dims: GridDimensions,
    cells: HashMap<Position, Vec<usize>>,
}

impl Occupancy {
    pub fn from_particles(dims: GridDimensions, particles: &[Particle]) -> Self {
        let mut cells: HashMap<Position, Vec<usize>> = HashMap::with_capacity(particles.len());
        for (index, particle) in particles.iter().enumerate() {
            cells
                .entry(dims.wrap(particle.position()))
                .or_default()
                .push(index);
        }
        Self { dims, cells }
    }

    /// Particle indices at position (with toroidal wrapping)
    pub fn get(&self, pos: Position) -> &[usize] {
        self.cells
            .get(&self.dims.wrap(pos))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Particle indices in the four side cells of `pos`. Diagonal cells are not included.
    ///
    /// On grids one or two cells wide the same cell can be reached from two sides, so an index
    /// may be yielded more than once.
    pub fn neighbors(&self, pos: Position) -> impl Iterator<Item = usize> + '_ {
        self.dims
            .side_neighbors(pos)
            .into_iter()
            .flat_map(move |side| self.get(side).iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_occupancy_creation() {
        let particles = [
            Particle::new(0, 0, 1),
            Particle::new(0, 0, 2),
            Particle::new(3, 4, 1),
        ];
        let occupancy = Occupancy::from_particles(GridDimensions::REFERENCE, &particles);

        assert_eq!(occupancy.get(Position::new(0, 0)), &[0, 1]);
        assert_eq!(occupancy.get(Position::new(3, 4)), &[2]);
        assert!(occupancy.get(Position::new(1, 1)).is_empty());
    }

    #[test]
    fn test_toroidal_wrapping() {
        let particles = [Particle::new(6, 6, 1)];
        let occupancy = Occupancy::from_particles(GridDimensions::REFERENCE, &particles);

        // Should wrap to (6, 6)
        assert_eq!(occupancy.get(Position::new(-1, -1)), &[0]);
        assert_eq!(occupancy.get(Position::new(13, 13)), &[0]);
    }

    #[test]
    fn test_neighbors() {
        let particles = [
            Particle::new(0, 0, 1),
            Particle::new(6, 0, 1),
            Particle::new(0, 1, 1),
            Particle::new(1, 1, 1),
        ];
        let occupancy = Occupancy::from_particles(GridDimensions::REFERENCE, &particles);
        let mut neighbors: Vec<usize> = occupancy.neighbors(Position::new(0, 0)).collect();
        neighbors.sort_unstable();

        // (1, 1) is diagonal
        assert_eq!(neighbors, vec![1, 2]);
    }

    #[test]
    fn test_sparse_on_huge_grid() {
        let dims = GridDimensions::new(i32::MAX, i32::MAX).unwrap();
        let particles = [
            Particle::new(0, 0, 1),
            Particle::new(i32::MAX - 1, 0, 1),
        ];
        let occupancy = Occupancy::from_particles(dims, &particles);

        // (0, 0) and its left neighbor across the seam
        assert_eq!(occupancy.neighbors(Position::new(0, 0)).collect::<Vec<_>>(), vec![1]);
    }
}
