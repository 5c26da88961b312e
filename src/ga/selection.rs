//! Fitness-proportionate parent selection.
//!
//! Parents are drawn **with replacement**, each draw picking chromosome `i`
//! with probability `fitness[i] / sum(fitness)`. Fitness here is maximized,
//! so raw fitness is the roulette weight; no inversion is needed.
//!
//! When the fitness sum is zero (typically a population of overweight
//! selections) there is no preference to express, and draws fall back to
//! uniform sampling over the whole population.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 1 (roulette wheel)
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use super::types::Chromosome;
use rand::Rng;

/// Draws `k` parents by roulette wheel, cloning each pick.
///
/// # Panics
/// Panics if `population` is empty or `fitnesses` has a different length.
pub fn select<R: Rng>(
    population: &[Chromosome],
    fitnesses: &[f64],
    k: usize,
    rng: &mut R,
) -> Vec<Chromosome> {
    assert!(
        !population.is_empty(),
        "cannot select from empty population"
    );
    assert_eq!(
        population.len(),
        fitnesses.len(),
        "one fitness value per chromosome"
    );

    let n = population.len();
    let cumulative = cumulative_weights(fitnesses);
    let total = cumulative[n - 1];

    if !(total > 0.0 && total.is_finite()) {
        log::trace!("zero total fitness, selecting {k} parents uniformly");
        return (0..k)
            .map(|_| population[rng.random_range(0..n)].clone())
            .collect();
    }

    (0..k)
        .map(|_| {
            let threshold = rng.random_range(0.0..total);
            population[roulette_index(&cumulative, threshold)].clone()
        })
        .collect()
}

/// Running sum of the weights. Negative weights count as zero.
fn cumulative_weights(fitnesses: &[f64]) -> Vec<f64> {
    fitnesses
        .iter()
        .scan(0.0, |acc, &f| {
            *acc += f.max(0.0);
            Some(*acc)
        })
        .collect()
}

/// First index whose cumulative weight exceeds `threshold`.
///
/// Zero-weight slots share their predecessor's cumulative value and are
/// therefore never returned while the total is positive.
fn roulette_index(cumulative: &[f64], threshold: f64) -> usize {
    cumulative
        .partition_point(|&c| c <= threshold)
        .min(cumulative.len() - 1) // floating-point fallback
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    fn make_population(n: usize) -> Vec<Chromosome> {
        // Distinct one-hot chromosomes so picks can be identified.
        (0..n)
            .map(|i| Chromosome::new((0..n).map(|j| i == j).collect()))
            .collect()
    }

    fn index_of(population: &[Chromosome], c: &Chromosome) -> usize {
        population
            .iter()
            .position(|p| p == c)
            .expect("selected chromosome comes from the population")
    }

    #[test]
    fn test_draws_exactly_k() {
        let pop = make_population(4);
        let mut rng = create_rng(42);
        for k in [0, 1, 4, 9] {
            assert_eq!(select(&pop, &[1.0, 2.0, 3.0, 4.0], k, &mut rng).len(), k);
        }
    }

    #[test]
    fn test_proportional_to_fitness() {
        let pop = make_population(4);
        let fitnesses = [10.0, 0.0, 30.0, 60.0];
        let mut rng = create_rng(42);

        let mut counts = [0u32; 4];
        let n = 10_000;
        for c in select(&pop, &fitnesses, n, &mut rng) {
            counts[index_of(&pop, &c)] += 1;
        }

        assert_eq!(counts[1], 0, "zero-fitness chromosome must never be drawn");
        assert!(
            (800..1_200).contains(&counts[0]),
            "expected ~10% for index 0, got {counts:?}"
        );
        assert!(
            (5_600..6_400).contains(&counts[3]),
            "expected ~60% for index 3, got {counts:?}"
        );
    }

    #[test]
    fn test_all_zero_fitness_is_uniform() {
        let pop = make_population(4);
        let mut rng = create_rng(42);

        let selected = select(&pop, &[0.0; 4], 10_000, &mut rng);
        assert_eq!(selected.len(), 10_000);

        let mut counts = [0u32; 4];
        for c in &selected {
            counts[index_of(&pop, c)] += 1;
        }
        for &c in &counts {
            assert!(c > 2_000, "expected uniform, got counts: {counts:?}");
        }
    }

    #[test]
    fn test_single_nonzero_always_selected() {
        let pop = make_population(3);
        let mut rng = create_rng(7);
        for c in select(&pop, &[0.0, 5.0, 0.0], 200, &mut rng) {
            assert_eq!(c, pop[1]);
        }
    }

    #[test]
    fn test_selected_copies_are_independent() {
        let pop = make_population(2);
        let mut rng = create_rng(1);
        let mut selected = select(&pop, &[1.0, 0.0], 2, &mut rng);
        selected[0].flip(1);
        assert_eq!(selected[1], pop[0]);
        assert_eq!(pop[0].genes(), &[true, false]);
    }

    #[test]
    fn test_roulette_index_boundaries() {
        let cumulative = [1.0, 1.0, 3.0];
        assert_eq!(roulette_index(&cumulative, 0.0), 0);
        assert_eq!(roulette_index(&cumulative, 0.999), 0);
        assert_eq!(roulette_index(&cumulative, 1.0), 2);
        assert_eq!(roulette_index(&cumulative, 2.999), 2);
        assert_eq!(roulette_index(&cumulative, 3.0), 2);
    }

    #[test]
    #[should_panic(expected = "cannot select from empty population")]
    fn test_empty_population_panics() {
        let pop: Vec<Chromosome> = vec![];
        let mut rng = create_rng(42);
        select(&pop, &[], 1, &mut rng);
    }
}
