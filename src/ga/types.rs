//! Chromosome and population types.
//!
//! A [`Chromosome`] is plain data: one boolean gene per catalog item. It
//! carries no fitness; fitness is recomputed from the catalog whenever it is
//! needed, so cloning a chromosome always yields an independent copy.

use rand::Rng;

/// Bit-vector encoding of a candidate knapsack selection.
///
/// Gene `i` is `true` when item `i` of the catalog is included.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chromosome {
    genes: Vec<bool>,
}

/// An ordered, fixed-size set of chromosomes.
pub type Population = Vec<Chromosome>;

impl Chromosome {
    pub fn new(genes: Vec<bool>) -> Self {
        Self { genes }
    }

    /// Creates a chromosome whose genes are independent fair coin flips.
    pub fn random<R: Rng>(len: usize, rng: &mut R) -> Self {
        Self {
            genes: (0..len).map(|_| rng.random_bool(0.5)).collect(),
        }
    }

    pub fn genes(&self) -> &[bool] {
        &self.genes
    }

    pub fn genes_mut(&mut self) -> &mut [bool] {
        &mut self.genes
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Inverts the gene at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn flip(&mut self, index: usize) {
        self.genes[index] = !self.genes[index];
    }

    /// Indices of the included items, ascending.
    pub fn included(&self) -> impl Iterator<Item = usize> + '_ {
        self.genes
            .iter()
            .enumerate()
            .filter_map(|(i, &included)| included.then_some(i))
    }

    /// Number of positions at which `self` and `other` differ.
    ///
    /// # Panics
    /// Panics if the chromosomes have different lengths.
    pub fn hamming_distance(&self, other: &Chromosome) -> usize {
        assert_eq!(self.len(), other.len(), "chromosomes must have equal length");
        self.genes
            .iter()
            .zip(&other.genes)
            .filter(|(a, b)| a != b)
            .count()
    }
}

impl From<Vec<bool>> for Chromosome {
    fn from(genes: Vec<bool>) -> Self {
        Self::new(genes)
    }
}
