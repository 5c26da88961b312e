//! Knapsack fitness.
//!
//! Fitness is the total value of the included items. Overweight selections
//! are not repaired or partially scored: they get 0.

use super::types::Chromosome;
use crate::catalog::Item;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Total weight of the items included by `chromosome`.
pub fn total_weight(chromosome: &Chromosome, items: &[Item]) -> f64 {
    chromosome
        .genes()
        .iter()
        .zip(items)
        .filter(|(&included, _)| included)
        .map(|(_, item)| item.weight)
        .sum()
}

/// Scores one chromosome against the catalog.
///
/// With `weight_limit > 0`, a selection is feasible only when its total
/// weight is strictly below the limit; a selection weighing exactly the limit
/// scores 0. With `weight_limit == 0` the constraint is off and the fitness
/// is the total value.
pub fn evaluate(chromosome: &Chromosome, items: &[Item], weight_limit: f64) -> f64 {
    debug_assert_eq!(chromosome.len(), items.len());

    let (weight, value) = chromosome
        .genes()
        .iter()
        .zip(items)
        .filter(|(&included, _)| included)
        .fold((0.0, 0.0), |(w, v), (_, item)| (w + item.weight, v + item.value));

    if weight_limit == 0.0 || weight < weight_limit {
        value
    } else {
        0.0
    }
}

/// Scores every chromosome, returning fitnesses in population order.
///
/// When `parallel` is set and the `parallel` feature is enabled, chromosomes
/// are scored on the rayon thread pool; the result order is unchanged.
pub fn evaluate_population(
    population: &[Chromosome],
    items: &[Item],
    weight_limit: f64,
    parallel: bool,
) -> Vec<f64> {
    if parallel {
        evaluate_parallel(population, items, weight_limit)
    } else {
        population
            .iter()
            .map(|c| evaluate(c, items, weight_limit))
            .collect()
    }
}

#[cfg(feature = "parallel")]
fn evaluate_parallel(population: &[Chromosome], items: &[Item], weight_limit: f64) -> Vec<f64> {
    population
        .par_iter()
        .map(|c| evaluate(c, items, weight_limit))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn evaluate_parallel(population: &[Chromosome], items: &[Item], weight_limit: f64) -> Vec<f64> {
    population
        .iter()
        .map(|c| evaluate(c, items, weight_limit))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<Item> {
        vec![
            Item::new("a", 2.0, 3.0),
            Item::new("b", 3.0, 4.0),
            Item::new("c", 4.0, 5.0),
            Item::new("d", 5.0, 6.0),
        ]
    }

    fn chrom(genes: &[bool]) -> Chromosome {
        Chromosome::new(genes.to_vec())
    }

    #[test]
    fn test_feasible_selections() {
        let items = items();
        assert_eq!(evaluate(&chrom(&[true, true, false, false]), &items, 8.0), 7.0);
        assert_eq!(evaluate(&chrom(&[false, false, false, true]), &items, 8.0), 6.0);
        assert_eq!(evaluate(&chrom(&[true, false, false, true]), &items, 8.0), 9.0);
    }

    #[test]
    fn test_overweight_scores_zero() {
        let items = items();
        assert_eq!(evaluate(&chrom(&[true, true, true, false]), &items, 8.0), 0.0);
    }

    #[test]
    fn test_weight_at_limit_is_infeasible() {
        let items = items();
        // a + b weigh exactly 5
        assert_eq!(evaluate(&chrom(&[true, true, false, false]), &items, 5.0), 0.0);
        assert_eq!(evaluate(&chrom(&[true, true, false, false]), &items, 5.5), 7.0);
    }

    #[test]
    fn test_zero_limit_disables_constraint() {
        let items = items();
        assert_eq!(evaluate(&chrom(&[true; 4]), &items, 0.0), 18.0);
    }

    #[test]
    fn test_empty_selection() {
        let items = items();
        assert_eq!(evaluate(&chrom(&[false; 4]), &items, 8.0), 0.0);
        assert_eq!(total_weight(&chrom(&[false; 4]), &items), 0.0);
    }

    #[test]
    fn test_total_weight() {
        let items = items();
        assert_eq!(total_weight(&chrom(&[true, false, true, false]), &items), 6.0);
    }

    #[test]
    fn test_evaluate_is_deterministic() {
        let items = items();
        let c = chrom(&[true, false, false, true]);
        let first = evaluate(&c, &items, 8.0);
        for _ in 0..10 {
            assert_eq!(evaluate(&c, &items, 8.0), first);
        }
    }

    #[test]
    fn test_evaluate_population_preserves_order() {
        let items = items();
        let population = vec![
            chrom(&[true, true, true, false]),
            chrom(&[true, false, false, true]),
            chrom(&[false, false, false, true]),
        ];
        assert_eq!(
            evaluate_population(&population, &items, 8.0, false),
            vec![0.0, 9.0, 6.0]
        );
        assert_eq!(
            evaluate_population(&population, &items, 8.0, true),
            vec![0.0, 9.0, 6.0]
        );
    }
}
