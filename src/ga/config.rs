//! Evolution configuration.
//!
//! [`EvolutionConfig`] holds all parameters that control the evolutionary loop.

use crate::catalog::ItemCatalog;
use crate::error::ConfigError;

/// Configuration for the knapsack evolution engine.
///
/// Controls population size, the weight constraint, operator probabilities
/// and the three termination conditions.
///
/// # Defaults
///
/// ```
/// use u_knapsack::ga::EvolutionConfig;
///
/// let config = EvolutionConfig::default();
/// assert_eq!(config.parents_count, 50);
/// assert_eq!(config.max_generations, 100);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_knapsack::ga::EvolutionConfig;
///
/// let config = EvolutionConfig::default()
///     .with_parents_count(20)
///     .with_weight_limit(15.0)
///     .with_mutations_count(3)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionConfig {
    /// Number of chromosomes in every generation.
    pub parents_count: usize,

    /// Maximum total weight, exclusive.
    ///
    /// A chromosome is feasible only when its total weight is strictly less
    /// than this limit; infeasible chromosomes score 0. Set to 0.0 to disable
    /// the constraint.
    pub weight_limit: f64,

    /// Maximum number of generations, counting the initial one.
    ///
    /// Set to 0 for no cap.
    pub max_generations: usize,

    /// Target fitness; the search stops once a generation's best reaches it.
    pub potential_fitness: f64,

    /// Consecutive generations without a strictly better maximum before
    /// stopping.
    ///
    /// Set to 0 to disable stagnation-based termination.
    pub no_improvement_limit: usize,

    /// Exact number of distinct genes flipped by a triggered mutation.
    pub mutations_count: usize,

    /// Probability of recombining a pair of parents (0.0–1.0).
    pub crossover_probability: f64,

    /// Probability of mutating a child (0.0–1.0).
    pub mutation_probability: f64,

    /// Whether to evaluate fitness in parallel using rayon.
    ///
    /// Only has an effect when the `parallel` feature is enabled.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            parents_count: 50,
            weight_limit: 0.0,
            max_generations: 100,
            potential_fitness: f64::INFINITY,
            no_improvement_limit: 20,
            mutations_count: 1,
            crossover_probability: 0.9,
            mutation_probability: 0.1,
            parallel: false,
            seed: None,
        }
    }
}

impl EvolutionConfig {
    /// Sets the population size.
    pub fn with_parents_count(mut self, n: usize) -> Self {
        self.parents_count = n;
        self
    }

    /// Sets the weight limit (0.0 to disable).
    pub fn with_weight_limit(mut self, limit: f64) -> Self {
        self.weight_limit = limit;
        self
    }

    /// Sets the generation cap (0 for unbounded).
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the target fitness.
    pub fn with_potential_fitness(mut self, target: f64) -> Self {
        self.potential_fitness = target;
        self
    }

    /// Sets the target fitness to the catalog's total value, so the search
    /// only stops early if it takes every item.
    pub fn with_potential_fitness_from(self, catalog: &ItemCatalog) -> Self {
        self.with_potential_fitness(catalog.total_value())
    }

    /// Sets the stagnation limit (0 to disable).
    pub fn with_no_improvement_limit(mut self, limit: usize) -> Self {
        self.no_improvement_limit = limit;
        self
    }

    /// Sets the number of genes flipped per mutation.
    pub fn with_mutations_count(mut self, n: usize) -> Self {
        self.mutations_count = n;
        self
    }

    /// Sets the crossover probability.
    ///
    /// Not clamped; out-of-range values are reported by [`validate`](Self::validate).
    pub fn with_crossover_probability(mut self, p: f64) -> Self {
        self.crossover_probability = p;
        self
    }

    /// Sets the mutation probability.
    ///
    /// Not clamped; out-of-range values are reported by [`validate`](Self::validate).
    pub fn with_mutation_probability(mut self, p: f64) -> Self {
        self.mutation_probability = p;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the catalog-independent parameters.
    ///
    /// The engine additionally rejects an empty catalog and a
    /// `mutations_count` longer than the chromosome.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.weight_limit.is_finite() || self.weight_limit < 0.0 {
            return Err(ConfigError::InvalidWeightLimit(self.weight_limit));
        }
        if self.parents_count < 2 {
            return Err(ConfigError::PopulationTooSmall(self.parents_count));
        }
        check_probability("crossover_probability", self.crossover_probability)?;
        check_probability("mutation_probability", self.mutation_probability)?;
        if self.potential_fitness.is_nan() {
            return Err(ConfigError::InvalidPotentialFitness);
        }
        Ok(())
    }
}

fn check_probability(name: &'static str, value: f64) -> Result<(), ConfigError> {
    // NaN fails the range check too.
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::ProbabilityOutOfRange { name, value })
    }
}
