//! Elitist evolutionary engine.
//!
//! Users define their problem by implementing [`Problem`] plus exactly one
//! of [`SingleEvaluation`] or [`MultiEvaluation`]. [`Algorithm`] drives the
//! generational loop.
//!
//! # Core Traits
//!
//! - [`Problem`]: genotype, fitness and generator types; mutation and recombination
//! - [`SingleEvaluation`]: one fitness per individual, computed independently
//! - [`MultiEvaluation`]: one batch call per generation, with the elites in view
//!
//! # Key Types
//!
//! - [`Algorithm`]: owns the population and advances it one generation at a time
//! - [`Solution`]: a genotype paired with its fitness
//! - [`SingleAdapter`] / [`MultiAdapter`]: normalize both evaluation shapes
//! - [`RunConfig`] / [`RunResult`]: multi-generation runs with termination conditions
//! - [`EngineError`]: configuration errors and problem contract violations
//!
//! # Submodules
//!
//! - [`operators`]: Bernoulli draws, bit-flip, uniform crossover and swap helpers
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - De Jong (2006), *Evolutionary Computation: A Unified Approach*

mod adapter;
mod algorithm;
mod config;
mod error;
pub mod operators;
mod runner;
mod selection;
mod types;
mod variation;

pub use adapter::{
    FitnessOf, GeneratorOf, IndividualOf, MultiAdapter, ProblemAdapter, SingleAdapter,
};
pub use algorithm::Algorithm;
pub use config::RunConfig;
pub use error::{EngineError, Result};
pub use runner::RunResult;
pub use selection::binary_tournament;
pub use types::{MultiEvaluation, Problem, SingleEvaluation, Solution, SolutionOf};
pub use variation::breed;
