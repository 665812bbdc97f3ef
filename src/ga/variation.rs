//! Offspring production: selection, recombination and mutation.

use super::adapter::{GeneratorOf, IndividualOf, ProblemAdapter};
use super::error::{EngineError, Result};
use super::selection::binary_tournament;
use super::types::SolutionOf;
use tracing::{trace, warn};

/// Produces exactly `target` mutated offspring from `population`.
///
/// Each round selects two parents by binary tournament, recombines them
/// and mutates the children in the order they were produced. Children
/// that do not fit in the remaining room are dropped unmutated.
///
/// # Errors
/// Returns [`EngineError::EmptyRecombination`] if a recombination yields
/// no offspring.
///
/// # Panics
/// Panics if `population` is empty while `target > 0`.
pub fn breed<A: ProblemAdapter>(
    adapter: &mut A,
    population: &[SolutionOf<A::Problem>],
    target: usize,
    rng: &mut GeneratorOf<A>,
) -> Result<Vec<IndividualOf<A>>> {
    let mut offspring = Vec::with_capacity(target);

    while offspring.len() < target {
        let p1 = binary_tournament(adapter.problem(), population, rng);
        let p2 = binary_tournament(adapter.problem(), population, rng);

        let children = adapter.recombine(
            &population[p1].individual,
            &population[p2].individual,
            rng,
        );
        if children.is_empty() {
            warn!(parent1 = p1, parent2 = p2, "recombination produced no offspring");
            return Err(EngineError::EmptyRecombination);
        }

        let room = target - offspring.len();
        if children.len() > room {
            trace!(
                produced = children.len(),
                discarded = children.len() - room,
                "truncating recombination output"
            );
        }

        for mut child in children.into_iter().take(room) {
            adapter.mutate(&mut child, rng);
            offspring.push(child);
        }
    }

    Ok(offspring)
}
