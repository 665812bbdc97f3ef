//! Problem adapters.
//!
//! The engine evaluates offspring through one batch-shaped contract,
//! [`ProblemAdapter::evaluate`]. [`SingleAdapter`] and [`MultiAdapter`]
//! map the two user-facing evaluation traits onto it. The choice is made
//! once, by the wrapper type, so dispatch is static.

use super::types::{MultiEvaluation, Problem, SingleEvaluation, SolutionOf};

/// Genotype type of an adapter's problem.
pub type IndividualOf<A> = <<A as ProblemAdapter>::Problem as Problem>::Individual;
/// Fitness type of an adapter's problem.
pub type FitnessOf<A> = <<A as ProblemAdapter>::Problem as Problem>::Fitness;
/// Generator type of an adapter's problem.
pub type GeneratorOf<A> = <<A as ProblemAdapter>::Problem as Problem>::Generator;

/// Uniform `mutate` / `recombine` / `evaluate` surface over a wrapped problem.
pub trait ProblemAdapter {
    /// The wrapped problem.
    type Problem: Problem;

    /// Shared access to the wrapped problem.
    fn problem(&self) -> &Self::Problem;

    /// Exclusive access to the wrapped problem.
    fn problem_mut(&mut self) -> &mut Self::Problem;

    /// Unwraps the problem.
    fn into_inner(self) -> Self::Problem;

    /// Appends one fitness per entry of `new_individuals` to `fitness_out`.
    fn evaluate(
        &mut self,
        new_individuals: &[<Self::Problem as Problem>::Individual],
        elites: &[SolutionOf<Self::Problem>],
        elite_count: usize,
        fitness_out: &mut Vec<<Self::Problem as Problem>::Fitness>,
        rng: &mut <Self::Problem as Problem>::Generator,
    );

    /// Forwards to [`Problem::mutate`].
    fn mutate(
        &mut self,
        individual: &mut <Self::Problem as Problem>::Individual,
        rng: &mut <Self::Problem as Problem>::Generator,
    ) {
        self.problem_mut().mutate(individual, rng);
    }

    /// Forwards to [`Problem::recombine`].
    fn recombine(
        &mut self,
        parent1: &<Self::Problem as Problem>::Individual,
        parent2: &<Self::Problem as Problem>::Individual,
        rng: &mut <Self::Problem as Problem>::Generator,
    ) -> Vec<<Self::Problem as Problem>::Individual> {
        self.problem_mut().recombine(parent1, parent2, rng)
    }
}

/// Adapts a [`SingleEvaluation`] problem: one `evaluate` call per
/// individual, in order, sharing the generator.
#[derive(Debug, Clone)]
pub struct SingleAdapter<P>(P);

impl<P: SingleEvaluation> SingleAdapter<P> {
    /// Wraps a single-evaluation problem.
    pub fn new(problem: P) -> Self {
        Self(problem)
    }
}

impl<P: SingleEvaluation> ProblemAdapter for SingleAdapter<P> {
    type Problem = P;

    fn problem(&self) -> &P {
        &self.0
    }

    fn problem_mut(&mut self) -> &mut P {
        &mut self.0
    }

    fn into_inner(self) -> P {
        self.0
    }

    fn evaluate(
        &mut self,
        new_individuals: &[P::Individual],
        _elites: &[SolutionOf<P>],
        _elite_count: usize,
        fitness_out: &mut Vec<P::Fitness>,
        rng: &mut P::Generator,
    ) {
        fitness_out.reserve(new_individuals.len());
        for individual in new_individuals {
            fitness_out.push(self.0.evaluate(individual, rng));
        }
    }
}

/// Adapts a [`MultiEvaluation`] problem: the batch call is forwarded as is.
#[derive(Debug, Clone)]
pub struct MultiAdapter<P>(P);

impl<P: MultiEvaluation> MultiAdapter<P> {
    /// Wraps a multi-evaluation problem.
    pub fn new(problem: P) -> Self {
        Self(problem)
    }
}

impl<P: MultiEvaluation> ProblemAdapter for MultiAdapter<P> {
    type Problem = P;

    fn problem(&self) -> &P {
        &self.0
    }

    fn problem_mut(&mut self) -> &mut P {
        &mut self.0
    }

    fn into_inner(self) -> P {
        self.0
    }

    fn evaluate(
        &mut self,
        new_individuals: &[P::Individual],
        elites: &[SolutionOf<P>],
        elite_count: usize,
        fitness_out: &mut Vec<P::Fitness>,
        rng: &mut P::Generator,
    ) {
        self.0
            .evaluate(new_individuals, elites, elite_count, fitness_out, rng);
    }
}
