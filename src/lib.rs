//! Evolutionary search for the 0/1 knapsack problem.
//!
//! Given an ordered catalog of weighted, valued items and a weight limit,
//! the crate searches for a high-value subset with a generational genetic
//! algorithm:
//!
//! - **Catalog** ([`catalog`]): the immutable item list; gene `i` of every
//!   chromosome refers to item `i`. Loadable from JSON with the `serde`
//!   feature.
//! - **Genetic Algorithm** ([`ga`]): fitness evaluation, roulette-wheel
//!   selection, two-point crossover, k-flip mutation, and an engine that
//!   yields per-generation statistics until a stop condition fires.
//!
//! All randomness flows through one injectable generator ([`random`]), so a
//! seeded run is reproducible end-to-end.
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` on the public data types and the
//!   JSON catalog loader.
//! - `parallel`: rayon-based fitness evaluation within a generation.

pub mod catalog;
pub mod error;
pub mod ga;
pub mod random;

pub use error::{ConfigError, Error, Result};
