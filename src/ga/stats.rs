//! Per-generation fitness statistics.

use super::fitness::evaluate;
use super::types::Chromosome;
use crate::catalog::Item;

/// Aggregate fitness of one generation.
///
/// `generation` is 0 for the random initial population and increases by one
/// per bred generation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats {
    pub generation: usize,
    pub max: f64,
    pub mean: f64,
    pub min: f64,
    pub count: usize,
}

impl GenerationStats {
    /// Aggregates already-computed fitness values.
    ///
    /// An empty slice yields zeros with `count == 0`.
    pub fn from_fitnesses(generation: usize, fitnesses: &[f64]) -> Self {
        if fitnesses.is_empty() {
            return Self {
                generation,
                max: 0.0,
                mean: 0.0,
                min: 0.0,
                count: 0,
            };
        }

        let (min, max, sum) = fitnesses.iter().fold(
            (f64::INFINITY, f64::NEG_INFINITY, 0.0),
            |(min, max, sum), &f| (min.min(f), max.max(f), sum + f),
        );

        Self {
            generation,
            max,
            mean: sum / fitnesses.len() as f64,
            min,
            count: fitnesses.len(),
        }
    }
}

/// Evaluates every chromosome of `population` and aggregates the result.
pub fn summarize(
    generation: usize,
    population: &[Chromosome],
    items: &[Item],
    weight_limit: f64,
) -> GenerationStats {
    let fitnesses: Vec<f64> = population
        .iter()
        .map(|c| evaluate(c, items, weight_limit))
        .collect();
    GenerationStats::from_fitnesses(generation, &fitnesses)
}
