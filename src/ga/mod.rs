//! Genetic algorithm for the 0/1 knapsack problem.
//!
//! Candidate solutions are bit strings over the item catalog. Each
//! generation is scored, parents are drawn by roulette wheel, consecutive
//! pairs are recombined by two-point crossover, and children are mutated by
//! flipping a fixed number of genes.
//!
//! # Key Types
//!
//! - [`EvolutionConfig`]: Algorithm parameters (population size, weight
//!   limit, operator probabilities, termination)
//! - [`EvolutionEngine`]: Executes the evolutionary loop one generation at a
//!   time
//! - [`GenerationStats`]: Max/mean/min fitness of one generation
//! - [`EvolutionResult`]: Final result of [`EvolutionEngine::run`]
//!
//! # Submodules
//!
//! - [`fitness`]: Knapsack fitness with the strict weight constraint
//! - [`selection`]: Fitness-proportionate selection with replacement
//! - [`operators`]: Two-point crossover and k-flip mutation
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Chu & Beasley (1998), "A Genetic Algorithm for the Multidimensional
//!   Knapsack Problem"

mod config;
mod decode;
pub mod fitness;
pub mod operators;
mod runner;
pub mod selection;
mod stats;
mod types;

pub use config::EvolutionConfig;
pub use decode::{decode, DecodedKnapsack};
pub use runner::{
    breed, check_termination, EngineState, EvolutionEngine, EvolutionResult, Generations,
    StepOutcome, StopReason,
};
pub use stats::{summarize, GenerationStats};
pub use types::{Chromosome, Population};
