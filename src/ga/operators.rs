//! Bit-string crossover and mutation operators.
//!
//! # Crossover
//!
//! - [`two_point_crossover`]: exchange a random contiguous segment between
//!   two parents
//! - [`crossover`]: apply it to consecutive pairs of a parent list with a
//!   given probability
//!
//! # Mutation
//!
//! - [`flip_mutation`]: flip an exact number of distinct genes
//! - [`mutate`]: apply it to each child with a given probability
//!
//! Every operator takes the random source explicitly, so a seeded generator
//! reproduces the same cut points and flip positions.
//!
//! # References
//!
//! - De Jong (1975), *An Analysis of the Behavior of a Class of Genetic
//!   Adaptive Systems* (multi-point crossover)
//! - Eiben & Smith (2015), *Introduction to Evolutionary Computing*, §4.2

use super::types::Chromosome;
use rand::seq::index;
use rand::Rng;

// ============================================================================
// Crossover operators
// ============================================================================

/// Swaps the genes in `[lo, hi)` between `a` and `b`.
///
/// An empty range (`lo == hi`) leaves both untouched.
///
/// # Panics
/// Panics if the chromosomes have different lengths, `lo > hi`, or `hi`
/// exceeds the length.
pub fn swap_segment(a: &mut Chromosome, b: &mut Chromosome, lo: usize, hi: usize) {
    assert_eq!(a.len(), b.len(), "parents must have equal length");
    a.genes_mut()[lo..hi].swap_with_slice(&mut b.genes_mut()[lo..hi]);
}

/// Two-point crossover.
///
/// Draws two cut points in `0..len` independently (they may coincide),
/// orders them as `(lo, hi)` and exchanges the `[lo, hi)` segment.
///
/// # Complexity
/// O(n) time, O(n) space for the two children
///
/// # Panics
/// Panics if parents have different lengths.
pub fn two_point_crossover<R: Rng>(
    parent1: &Chromosome,
    parent2: &Chromosome,
    rng: &mut R,
) -> (Chromosome, Chromosome) {
    let mut child1 = parent1.clone();
    let mut child2 = parent2.clone();
    recombine(&mut child1, &mut child2, rng);
    (child1, child2)
}

/// Recombines consecutive pairs `(0, 1), (2, 3), …` of `parents`.
///
/// Each pair draws one uniform value; below `probability` the pair is
/// recombined by two-point crossover, otherwise it passes through. A
/// trailing unpaired parent passes through unchanged. The output has the
/// same length and pair order as the input.
pub fn crossover<R: Rng>(
    parents: Vec<Chromosome>,
    probability: f64,
    rng: &mut R,
) -> Vec<Chromosome> {
    let mut children = Vec::with_capacity(parents.len());
    let mut parents = parents.into_iter();

    while let Some(mut first) = parents.next() {
        match parents.next() {
            Some(mut second) => {
                if rng.random_range(0.0..1.0) < probability {
                    recombine(&mut first, &mut second, rng);
                }
                children.push(first);
                children.push(second);
            }
            None => children.push(first),
        }
    }

    children
}

/// In-place two-point crossover.
fn recombine<R: Rng>(a: &mut Chromosome, b: &mut Chromosome, rng: &mut R) {
    assert_eq!(a.len(), b.len(), "parents must have equal length");
    if a.is_empty() {
        return;
    }
    let (lo, hi) = random_cut_points(a.len(), rng);
    swap_segment(a, b, lo, hi);
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Flips exactly `count` distinct, uniformly chosen genes.
///
/// # Complexity
/// O(count) expected
///
/// # Panics
/// Panics if `count` exceeds the chromosome length.
pub fn flip_mutation<R: Rng>(chromosome: &mut Chromosome, count: usize, rng: &mut R) {
    let n = chromosome.len();
    assert!(
        count <= n,
        "cannot flip {count} distinct genes of a {n}-gene chromosome"
    );
    for i in index::sample(rng, n, count) {
        chromosome.flip(i);
    }
}

/// Mutates each child independently with probability `probability`.
///
/// A triggered mutation flips exactly `count` distinct genes; an untriggered
/// child is left untouched.
pub fn mutate<R: Rng>(children: &mut [Chromosome], count: usize, probability: f64, rng: &mut R) {
    for child in children.iter_mut() {
        if rng.random_range(0.0..1.0) < probability {
            flip_mutation(child, count, rng);
        }
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Two independent draws in `0..n`, returned in ascending order.
fn random_cut_points<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    let a = rng.random_range(0..n);
    let b = rng.random_range(0..n);
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

// ============================================================================
// Tests
// ============================================================================
