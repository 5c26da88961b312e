//! Human-readable projection of a population.
//!
//! Decoding is kept out of the evolutionary loop: the engine only needs
//! fitness statistics, while reports and charts want to know which items each
//! chromosome actually packs.

use super::fitness::{evaluate, total_weight};
use super::types::Chromosome;
use crate::catalog::Item;

/// One chromosome, scored and resolved to item names.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecodedKnapsack {
    pub fitness: f64,
    pub total_weight: f64,
    /// Names of the included items, in catalog order.
    pub included: Vec<String>,
}

impl DecodedKnapsack {
    /// Decodes a single chromosome.
    pub fn from_chromosome(chromosome: &Chromosome, items: &[Item], weight_limit: f64) -> Self {
        Self {
            fitness: evaluate(chromosome, items, weight_limit),
            total_weight: total_weight(chromosome, items),
            included: chromosome
                .included()
                .map(|i| items[i].name.clone())
                .collect(),
        }
    }
}

/// Decodes every chromosome of `population`, in population order.
pub fn decode(population: &[Chromosome], items: &[Item], weight_limit: f64) -> Vec<DecodedKnapsack> {
    population
        .iter()
        .map(|c| DecodedKnapsack::from_chromosome(c, items, weight_limit))
        .collect()
}
