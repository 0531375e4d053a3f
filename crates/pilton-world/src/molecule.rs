//! Molecule detection.
//!
//! A molecule is a maximal group of particles linked by chains of side-by-side neighbors. The
//! search works on indices into the particle slice, so colocated or value-equal particles stay
//! distinct members.

use crate::grid::Occupancy;
use pilton_core::{GridDimensions, Particle};
use std::collections::HashSet;

/// Indices of every particle in the molecule containing `particles[start]`, sorted ascending.
///
/// Returns an empty list if `start` is out of range.
pub fn find_molecule(start: usize, particles: &[Particle], dims: GridDimensions) -> Vec<usize> {
    if start >= particles.len() {
        return Vec::new();
    }
    let occupancy = Occupancy::from_particles(dims, particles);
    let mut visited = vec![false; particles.len()];
    let mut members = flood(start, particles, &occupancy, &mut visited);
    members.sort_unstable();
    members
}

/// The molecule containing the first particle equal to `target`, as a set of values.
pub fn molecule_of(
    target: &Particle,
    particles: &[Particle],
    dims: GridDimensions,
) -> Option<HashSet<Particle>> {
    let start = particles.iter().position(|p| p == target)?;
    Some(
        find_molecule(start, particles, dims)
            .into_iter()
            .map(|i| particles[i])
            .collect(),
    )
}

/// Split the particles into disjoint molecules. Every index appears in exactly one molecule;
/// molecules are ordered by their lowest index and each is sorted ascending.
pub fn partition(particles: &[Particle], dims: GridDimensions) -> Vec<Vec<usize>> {
    let occupancy = Occupancy::from_particles(dims, particles);
    let mut visited = vec![false; particles.len()];
    let mut molecules = Vec::new();

    for start in 0..particles.len() {
        if visited[start] {
            continue;
        }
        let mut members = flood(start, particles, &occupancy, &mut visited);
        members.sort_unstable();
        molecules.push(members);
    }

    molecules
}

fn flood(
    start: usize,
    particles: &[Particle],
    occupancy: &Occupancy,
    visited: &mut [bool],
) -> Vec<usize> {
    let mut members = Vec::new();
    let mut stack = vec![start];
    visited[start] = true;

    while let Some(current) = stack.pop() {
        members.push(current);
        for next in occupancy.neighbors(particles[current].position()) {
            if !visited[next] {
                visited[next] = true;
                stack.push(next);
            }
        }
    }

    members
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn unit_particles(coords: &[(i32, i32)]) -> Vec<Particle> {
        coords.iter().map(|&(x, y)| Particle::new(x, y, 1)).collect()
    }

    fn sample() -> Vec<Particle> {
        unit_particles(&[
            (6, 6),
            (5, 6),
            (6, 5),
            (5, 5),
            (6, 3),
            (5, 3),
            (3, 6),
            (3, 5),
            (3, 3),
        ])
    }

    #[test]
    fn test_partition_sample() {
        let molecules = partition(&sample(), GridDimensions::REFERENCE);
        assert_eq!(
            molecules,
            vec![vec![0, 1, 2, 3], vec![4, 5], vec![6, 7], vec![8]]
        );
    }

    #[test]
    fn test_molecule_of_every_member() {
        let particles = sample();
        let dims = GridDimensions::REFERENCE;
        let expected: Vec<HashSet<Particle>> = [
            &[(6, 6), (5, 6), (6, 5), (5, 5)][..],
            &[(6, 3), (5, 3)][..],
            &[(3, 6), (3, 5)][..],
            &[(3, 3)][..],
        ]
        .iter()
        .map(|coords| unit_particles(coords).into_iter().collect())
        .collect();

        for group in &expected {
            for p in group {
                assert_eq!(molecule_of(p, &particles, dims).as_ref(), Some(group));
            }
        }
    }

    #[test]
    fn test_molecule_wraps_around_edges() {
        let particles = unit_particles(&[(0, 3), (6, 3), (5, 3), (2, 2)]);
        let molecule = find_molecule(0, &particles, GridDimensions::REFERENCE);
        assert_eq!(molecule, vec![0, 1, 2]);
    }

    #[test]
    fn test_diagonal_chain_is_not_a_molecule() {
        let particles = unit_particles(&[(1, 1), (2, 2), (3, 3)]);
        assert_eq!(partition(&particles, GridDimensions::REFERENCE).len(), 3);
    }

    #[test]
    fn test_long_chain_discovered_from_any_member() {
        let dims = GridDimensions::new(40, 3).unwrap();
        let particles: Vec<Particle> = (0..30).map(|x| Particle::new(x, 1, 1)).collect();
        let all: Vec<usize> = (0..30).collect();
        for start in [0, 15, 29] {
            assert_eq!(find_molecule(start, &particles, dims), all);
        }
    }

    #[test]
    fn test_missing_target() {
        let particles = sample();
        let dims = GridDimensions::REFERENCE;
        assert!(find_molecule(99, &particles, dims).is_empty());
        assert!(molecule_of(&Particle::new(0, 0, 1), &particles, dims).is_none());
    }

    fn arb_world() -> impl Strategy<Value = (GridDimensions, Vec<Particle>)> {
        (1i32..9, 1i32..9).prop_flat_map(|(cols, rows)| {
            let dims = GridDimensions::new(cols, rows).unwrap();
            prop::collection::vec((0..cols, 0..rows, 1u64..4), 0..30).prop_map(move |raw| {
                let particles = raw
                    .into_iter()
                    .map(|(x, y, m)| Particle::new(x, y, m))
                    .collect();
                (dims, particles)
            })
        })
    }

    proptest! {
        #[test]
        fn prop_partition_covers_every_particle_once((dims, particles) in arb_world()) {
            let molecules = partition(&particles, dims);

            let mut seen = vec![0usize; particles.len()];
            for molecule in &molecules {
                prop_assert!(!molecule.is_empty());
                for &i in molecule {
                    seen[i] += 1;
                }
            }
            prop_assert!(seen.iter().all(|&count| count == 1));
        }

        #[test]
        fn prop_find_molecule_same_from_any_member((dims, particles) in arb_world()) {
            for molecule in partition(&particles, dims) {
                for &member in &molecule {
                    prop_assert_eq!(&find_molecule(member, &particles, dims), &molecule);
                }
            }
        }

        #[test]
        fn prop_molecules_are_not_adjacent((dims, particles) in arb_world()) {
            let molecules = partition(&particles, dims);
            for (a, first) in molecules.iter().enumerate() {
                for second in &molecules[a + 1..] {
                    for &i in first {
                        for &j in second {
                            prop_assert!(!particles[i].is_adjacent(&particles[j], dims));
                        }
                    }
                }
            }
        }
    }
}
