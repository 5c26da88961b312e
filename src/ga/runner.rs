//! Evolution engine.
//!
//! [`EvolutionEngine`] drives the generational loop:
//! evaluation → termination check → selection → crossover → mutation → repeat.
//!
//! The engine is a small state machine. Construction produces generation 0;
//! each [`step`](EvolutionEngine::step) either breeds one more generation or
//! reports why the search stopped. Once stopped, the engine stays stopped.
//!
//! All mutable search state lives in [`EngineState`], which is advanced by
//! two free functions, [`check_termination`] and [`breed`], so the loop can
//! also be driven by hand with any random source.

use std::fmt;
use std::iter::FusedIterator;

use super::config::EvolutionConfig;
use super::decode::{decode, DecodedKnapsack};
use super::fitness::evaluate_population;
use super::operators::{crossover, mutate};
use super::selection::select;
use super::stats::GenerationStats;
use super::types::{Chromosome, Population};
use crate::catalog::{Item, ItemCatalog};
use crate::error::{ConfigError, Error, Result};
use crate::random::{rng_from_seed, EngineRng};
use rand::Rng;

/// Why the search ended.
///
/// Conditions are checked in declaration order; the first that holds wins.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StopReason {
    /// The history reached `max_generations` entries.
    MaxGenerations { limit: usize },
    /// The latest generation's best reached `potential_fitness`.
    PotentialFitnessReached { target: f64, best: f64 },
    /// `no_improvement_limit` generations passed without a better maximum.
    NoImprovement { streak: usize },
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopReason::MaxGenerations { limit } => {
                write!(f, "reached max generations ({limit})")
            }
            StopReason::PotentialFitnessReached { target, best } => {
                write!(f, "reached potential fitness {target} (best {best})")
            }
            StopReason::NoImprovement { streak } => {
                write!(f, "no improvement in {streak} generations")
            }
        }
    }
}

/// Result of a single [`EvolutionEngine::step`].
#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome {
    /// A new generation was bred.
    Continuing(GenerationStats),
    /// The search is over; `final_stats` describes the last generation.
    Stopped {
        reason: StopReason,
        final_stats: GenerationStats,
    },
}

/// Mutable state of a run.
#[derive(Debug, Clone)]
pub struct EngineState {
    population: Population,
    /// Fitness of `population[i]`, computed when the population was produced.
    fitnesses: Vec<f64>,
    history: Vec<GenerationStats>,
    no_improvement_streak: usize,
    best: Chromosome,
    best_fitness: f64,
}

impl EngineState {
    /// Creates generation 0: `parents_count` chromosomes with fair-coin genes.
    pub fn initialize<R: Rng>(items: &[Item], config: &EvolutionConfig, rng: &mut R) -> Self {
        let population: Population = (0..config.parents_count)
            .map(|_| Chromosome::random(items.len(), rng))
            .collect();
        let fitnesses =
            evaluate_population(&population, items, config.weight_limit, config.parallel);
        let stats = GenerationStats::from_fitnesses(0, &fitnesses);
        let best_idx = best_index(&fitnesses);

        Self {
            best: population[best_idx].clone(),
            best_fitness: fitnesses[best_idx],
            population,
            fitnesses,
            history: vec![stats],
            no_improvement_streak: 0,
        }
    }

    pub fn population(&self) -> &[Chromosome] {
        &self.population
    }

    /// Fitness of each chromosome of the current population, in order.
    pub fn fitnesses(&self) -> &[f64] {
        &self.fitnesses
    }

    /// Statistics of every generation so far, generation 0 first.
    pub fn history(&self) -> &[GenerationStats] {
        &self.history
    }

    pub fn no_improvement_streak(&self) -> usize {
        self.no_improvement_streak
    }

    /// Statistics of the current generation.
    pub fn latest(&self) -> &GenerationStats {
        self.history
            .last()
            .expect("history always holds generation 0")
    }

    /// Best chromosome seen over the whole run and its fitness.
    ///
    /// On ties the earliest one is kept.
    pub fn best(&self) -> (&Chromosome, f64) {
        (&self.best, self.best_fitness)
    }
}

/// Evaluates the termination policy against the current history.
///
/// Returns `None` when the search should continue.
pub fn check_termination(state: &EngineState, config: &EvolutionConfig) -> Option<StopReason> {
    if config.max_generations != 0 && state.history.len() >= config.max_generations {
        return Some(StopReason::MaxGenerations {
            limit: config.max_generations,
        });
    }

    let best = state.latest().max;
    if best >= config.potential_fitness {
        return Some(StopReason::PotentialFitnessReached {
            target: config.potential_fitness,
            best,
        });
    }

    if config.no_improvement_limit != 0
        && state.no_improvement_streak >= config.no_improvement_limit
    {
        return Some(StopReason::NoImprovement {
            streak: state.no_improvement_streak,
        });
    }

    None
}

/// Breeds the next generation and records it in `state`.
///
/// Selection draws `parents_count` parents by roulette wheel, consecutive
/// pairs are recombined, and each child may be mutated. The streak resets
/// when the new maximum strictly exceeds the previous generation's maximum
/// and grows by one otherwise.
///
/// # Panics
/// Panics if `config` was not validated against the catalog (empty
/// population, or `mutations_count` longer than the chromosome).
pub fn breed<R: Rng>(
    state: &mut EngineState,
    items: &[Item],
    config: &EvolutionConfig,
    rng: &mut R,
) -> GenerationStats {
    let parents = select(&state.population, &state.fitnesses, config.parents_count, rng);
    let mut children = crossover(parents, config.crossover_probability, rng);
    mutate(
        &mut children,
        config.mutations_count,
        config.mutation_probability,
        rng,
    );
    assert_eq!(
        children.len(),
        config.parents_count,
        "population size must stay constant"
    );

    let fitnesses = evaluate_population(&children, items, config.weight_limit, config.parallel);
    let stats = GenerationStats::from_fitnesses(state.history.len(), &fitnesses);

    if stats.max > state.latest().max {
        state.no_improvement_streak = 0;
    } else {
        state.no_improvement_streak += 1;
    }

    let best_idx = best_index(&fitnesses);
    if fitnesses[best_idx] > state.best_fitness {
        state.best = children[best_idx].clone();
        state.best_fitness = fitnesses[best_idx];
    }

    state.population = children;
    state.fitnesses = fitnesses;
    state.history.push(stats);
    stats
}

/// Index of the first maximal fitness.
fn best_index(fitnesses: &[f64]) -> usize {
    fitnesses
        .iter()
        .enumerate()
        .fold(0, |best, (i, &f)| if f > fitnesses[best] { i } else { best })
}

/// Summary of a finished run.
#[derive(Debug, Clone)]
pub struct EvolutionResult {
    pub stop_reason: StopReason,

    /// Statistics of every generation, generation 0 first.
    pub history: Vec<GenerationStats>,

    /// Best chromosome seen during the whole run.
    pub best: Chromosome,

    /// Fitness of `best`.
    pub best_fitness: f64,

    /// `best` resolved to item names.
    pub best_decoded: DecodedKnapsack,
}

impl EvolutionResult {
    /// Number of generations produced, including generation 0.
    pub fn generations(&self) -> usize {
        self.history.len()
    }
}

/// Evolutionary knapsack search.
///
/// # Usage
///
/// ```
/// use u_knapsack::catalog::{Item, ItemCatalog};
/// use u_knapsack::ga::{EvolutionConfig, EvolutionEngine};
///
/// let catalog = ItemCatalog::new(vec![
///     Item::new("map", 2.0, 3.0),
///     Item::new("compass", 3.0, 4.0),
///     Item::new("water", 4.0, 5.0),
///     Item::new("tent", 5.0, 6.0),
/// ])?;
/// let config = EvolutionConfig::default()
///     .with_parents_count(10)
///     .with_weight_limit(8.0)
///     .with_max_generations(20)
///     .with_seed(42);
///
/// let mut engine = EvolutionEngine::new(catalog, config)?;
/// for stats in engine.generations() {
///     println!("generation {}: best {}", stats.generation, stats.max);
/// }
/// println!("stopped: {}", engine.stop_reason().unwrap());
/// # Ok::<(), u_knapsack::Error>(())
/// ```
#[derive(Debug)]
pub struct EvolutionEngine<R = EngineRng> {
    catalog: ItemCatalog,
    config: EvolutionConfig,
    rng: R,
    state: EngineState,
    stop_reason: Option<StopReason>,
    /// Number of history entries already handed out by [`Generations`].
    reported: usize,
}

impl EvolutionEngine<EngineRng> {
    /// Creates an engine seeded from `config.seed` (random when `None`).
    pub fn new(catalog: ItemCatalog, config: EvolutionConfig) -> Result<Self> {
        let rng = rng_from_seed(config.seed);
        Self::with_rng(catalog, config, rng)
    }
}

impl<R: Rng> EvolutionEngine<R> {
    /// Creates an engine drawing all randomness from `rng`.
    ///
    /// `config.seed` is ignored.
    ///
    /// # Errors
    /// - [`Error::Configuration`] if the catalog is empty or `config` fails
    ///   [`EvolutionConfig::validate`]
    /// - [`Error::InvalidOperator`] if `mutations_count` exceeds the number
    ///   of items
    pub fn with_rng(catalog: ItemCatalog, config: EvolutionConfig, mut rng: R) -> Result<Self> {
        config.validate()?;
        if catalog.is_empty() {
            return Err(ConfigError::EmptyCatalog.into());
        }
        if config.mutations_count > catalog.len() {
            return Err(Error::InvalidOperator {
                mutations_count: config.mutations_count,
                chromosome_len: catalog.len(),
            });
        }

        let state = EngineState::initialize(catalog.items(), &config, &mut rng);
        log::info!(
            "initialized {} chromosomes over {} items (generation 0 best {})",
            config.parents_count,
            catalog.len(),
            state.latest().max
        );

        Ok(Self {
            catalog,
            config,
            rng,
            state,
            stop_reason: None,
            reported: 0,
        })
    }

    /// Advances the search by one generation.
    ///
    /// The termination policy is checked first, against the generations
    /// produced so far. Once an engine has stopped, every further call
    /// returns the same [`StepOutcome::Stopped`] without touching the state.
    pub fn step(&mut self) -> StepOutcome {
        if let Some(reason) = self.stop_reason {
            return StepOutcome::Stopped {
                reason,
                final_stats: *self.state.latest(),
            };
        }

        if let Some(reason) = check_termination(&self.state, &self.config) {
            log::info!(
                "stopped after {} generations: {reason}",
                self.state.history.len()
            );
            self.stop_reason = Some(reason);
            return StepOutcome::Stopped {
                reason,
                final_stats: *self.state.latest(),
            };
        }

        let stats = breed(
            &mut self.state,
            self.catalog.items(),
            &self.config,
            &mut self.rng,
        );
        log::debug!(
            "generation {}: max={} mean={:.3} min={} streak={}",
            stats.generation,
            stats.max,
            stats.mean,
            stats.min,
            self.state.no_improvement_streak
        );
        StepOutcome::Continuing(stats)
    }

    /// Lazy, forward-only sequence of generation statistics.
    ///
    /// Yields every generation not yet reported (generation 0 first on a
    /// fresh engine), then breeds new generations until the engine stops.
    /// Dropping the iterator early is fine; a later call resumes where it
    /// left off, and nothing is yielded twice.
    pub fn generations(&mut self) -> Generations<'_, R> {
        Generations { engine: self }
    }

    /// Runs the search to completion.
    ///
    /// Never returns if every termination condition is disabled
    /// (`max_generations == 0`, `no_improvement_limit == 0` and an
    /// unreachable `potential_fitness`).
    pub fn run(&mut self) -> EvolutionResult {
        let stop_reason = loop {
            if let StepOutcome::Stopped { reason, .. } = self.step() {
                break reason;
            }
        };
        self.reported = self.state.history.len();

        let (best, best_fitness) = self.state.best();
        EvolutionResult {
            stop_reason,
            history: self.state.history.clone(),
            best_decoded: DecodedKnapsack::from_chromosome(
                best,
                self.catalog.items(),
                self.config.weight_limit,
            ),
            best: best.clone(),
            best_fitness,
        }
    }

    pub fn catalog(&self) -> &ItemCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &EvolutionConfig {
        &self.config
    }

    pub fn state(&self) -> &EngineState {
        &self.state
    }

    pub fn history(&self) -> &[GenerationStats] {
        self.state.history()
    }

    pub fn population(&self) -> &[Chromosome] {
        self.state.population()
    }

    /// Why the search stopped, or `None` while it can still advance.
    pub fn stop_reason(&self) -> Option<StopReason> {
        self.stop_reason
    }

    pub fn is_stopped(&self) -> bool {
        self.stop_reason.is_some()
    }

    /// Decodes the current population for reporting.
    pub fn decode_current(&self) -> Vec<DecodedKnapsack> {
        decode(
            self.state.population(),
            self.catalog.items(),
            self.config.weight_limit,
        )
    }
}

/// Iterator returned by [`EvolutionEngine::generations`].
#[derive(Debug)]
pub struct Generations<'a, R = EngineRng> {
    engine: &'a mut EvolutionEngine<R>,
}

impl<R: Rng> Iterator for Generations<'_, R> {
    type Item = GenerationStats;

    fn next(&mut self) -> Option<GenerationStats> {
        let engine = &mut *self.engine;

        if let Some(stats) = engine.state.history.get(engine.reported).copied() {
            engine.reported += 1;
            return Some(stats);
        }

        match engine.step() {
            StepOutcome::Continuing(stats) => {
                engine.reported += 1;
                Some(stats)
            }
            StepOutcome::Stopped { .. } => None,
        }
    }
}

impl<R: Rng> FusedIterator for Generations<'_, R> {}

// ============================================================================
// Tests
// ============================================================================
