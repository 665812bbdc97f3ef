//! Parent selection.
//!
//! The engine uses binary tournament selection with replacement: two
//! uniform draws, the better of the two wins.
//!
//! # References
//!
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use super::types::{Problem, SolutionOf};
use rand::Rng;

/// Binary tournament: draws two indices uniformly from `[0, n)` and
/// returns the one whose fitness is strictly better.
///
/// Ties keep the first draw, so the result depends only on the generator
/// state. Consumes exactly two draws.
///
/// # Panics
/// Panics if `population` is empty.
pub fn binary_tournament<P: Problem + ?Sized>(
    problem: &P,
    population: &[SolutionOf<P>],
    rng: &mut P::Generator,
) -> usize {
    assert!(
        !population.is_empty(),
        "cannot select from empty population"
    );

    let n = population.len();
    let i = rng.random_range(0..n);
    let j = rng.random_range(0..n);

    if problem.less(&population[j].fitness, &population[i].fitness) {
        j
    } else {
        i
    }
}
