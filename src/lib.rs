//! Generic elitist evolutionary engine.
//!
//! Evolves a fixed-size population of user-defined genotypes across
//! discrete generations:
//!
//! - **Binary tournament selection** with replacement.
//! - **Variation**: recombination into any number of offspring, each
//!   mutated in place.
//! - **Evaluation**: either one fitness per individual
//!   ([`ga::SingleEvaluation`]) or a single batch call that also sees the
//!   current elites ([`ga::MultiEvaluation`]).
//! - **Elitist replacement**: the best `elite_count` solutions are kept at
//!   the front of the population by rank, not by identity.
//!
//! # Architecture
//!
//! The engine knows nothing about the problem domain. Genotype, fitness
//! and generator are associated types of the user's [`ga::Problem`];
//! the engine only orders fitness values and draws uniform indices.

pub mod ga;
pub mod random;
