//! The generational engine.
//!
//! [`Algorithm`] owns the population, the problem adapter and the
//! generator. Each [`iterate`](Algorithm::iterate) performs:
//! selection → recombination → mutation → evaluation → elitist replacement.

use super::adapter::{GeneratorOf, IndividualOf, MultiAdapter, ProblemAdapter, SingleAdapter};
use super::config::{check_elite_count, RunConfig};
use super::error::{EngineError, Result};
use super::types::{
    compare_fitness, MultiEvaluation, Problem, SingleEvaluation, Solution, SolutionOf,
};
use super::variation::breed;
use tracing::{debug, warn};

/// Elitist steady-state evolutionary engine.
///
/// The population has a fixed size `N`. After construction and after
/// every successful [`iterate`](Self::iterate), its first `elite_count`
/// entries are the `elite_count` best solutions, sorted by fitness; the
/// rest are in no particular order.
///
/// # Usage
///
/// ```ignore
/// let mut algorithm = Algorithm::single(problem, initial_population, 1, create_rng(17))?;
/// for _ in 0..100 {
///     algorithm.iterate()?;
/// }
/// println!("best: {:?}", algorithm.best().fitness);
/// ```
pub struct Algorithm<A: ProblemAdapter> {
    adapter: A,
    population: Vec<SolutionOf<A::Problem>>,
    elite_count: usize,
    generator: GeneratorOf<A>,
    generation: usize,
}

impl<P: SingleEvaluation> Algorithm<SingleAdapter<P>> {
    /// Creates an engine for a problem evaluated one individual at a time.
    ///
    /// See [`Algorithm::new`].
    pub fn single(
        problem: P,
        initial_population: Vec<P::Individual>,
        elite_count: usize,
        generator: P::Generator,
    ) -> Result<Self> {
        Self::new(
            SingleAdapter::new(problem),
            initial_population,
            elite_count,
            generator,
        )
    }
}

impl<P: MultiEvaluation> Algorithm<MultiAdapter<P>> {
    /// Creates an engine for a problem evaluated in batches.
    ///
    /// See [`Algorithm::new`].
    pub fn multi(
        problem: P,
        initial_population: Vec<P::Individual>,
        elite_count: usize,
        generator: P::Generator,
    ) -> Result<Self> {
        Self::new(
            MultiAdapter::new(problem),
            initial_population,
            elite_count,
            generator,
        )
    }
}

impl<A: ProblemAdapter> Algorithm<A> {
    /// Creates an engine and evaluates the initial population.
    ///
    /// A batch evaluation sees no elites and an elite count of 0 here,
    /// since there is no previous generation.
    ///
    /// # Errors
    /// - [`EngineError::InvalidEliteCount`] if
    ///   `elite_count >= initial_population.len()` (including an empty population).
    /// - [`EngineError::FitnessCountMismatch`] if evaluation does not
    ///   return one fitness per individual.
    pub fn new(
        mut adapter: A,
        initial_population: Vec<IndividualOf<A>>,
        elite_count: usize,
        mut generator: GeneratorOf<A>,
    ) -> Result<Self> {
        let size = initial_population.len();
        check_elite_count(elite_count, size)?;

        let mut fitness = Vec::with_capacity(size);
        adapter.evaluate(&initial_population, &[], 0, &mut fitness, &mut generator);
        check_fitness_count(size, &fitness)?;

        let population = initial_population
            .into_iter()
            .zip(fitness)
            .map(|(individual, fitness)| Solution::new(individual, fitness))
            .collect();

        let mut algorithm = Self {
            adapter,
            population,
            elite_count,
            generator,
            generation: 0,
        };
        algorithm.sort_population();

        debug!(
            population_size = size,
            elite_count,
            best = ?algorithm.best().fitness,
            "initial population evaluated"
        );
        Ok(algorithm)
    }

    /// Creates an engine using [`RunConfig::elite_count`].
    ///
    /// # Errors
    /// As [`Algorithm::new`], plus [`EngineError::InvalidConfig`] if the
    /// configuration fails [`RunConfig::validate`].
    pub fn from_config(
        adapter: A,
        initial_population: Vec<IndividualOf<A>>,
        config: &RunConfig,
        generator: GeneratorOf<A>,
    ) -> Result<Self> {
        config.validate_for(initial_population.len())?;
        Self::new(adapter, initial_population, config.elite_count, generator)
    }

    /// Advances one generation.
    ///
    /// Produces `N - elite_count` offspring, evaluates them, writes them
    /// over `population[elite_count..]` and re-establishes the elite prefix.
    /// Elites are not pinned: a former elite stays only while it still
    /// ranks among the best.
    ///
    /// # Errors
    /// [`EngineError::EmptyRecombination`] or
    /// [`EngineError::FitnessCountMismatch`] when the problem breaks its
    /// contract. The population is left exactly as it was.
    pub fn iterate(&mut self) -> Result<()> {
        let k = self.elite_count;
        let target = self.population.len() - k;

        let offspring = breed(
            &mut self.adapter,
            &self.population,
            target,
            &mut self.generator,
        )?;

        let mut fitness = Vec::with_capacity(target);
        self.adapter.evaluate(
            &offspring,
            &self.population[..k],
            k,
            &mut fitness,
            &mut self.generator,
        );
        check_fitness_count(offspring.len(), &fitness)?;

        for (slot, (individual, fitness)) in self.population[k..]
            .iter_mut()
            .zip(offspring.into_iter().zip(fitness))
        {
            *slot = Solution::new(individual, fitness);
        }
        self.sort_population();
        self.generation += 1;

        debug!(
            generation = self.generation,
            best = ?self.best().fitness,
            "generation complete"
        );
        Ok(())
    }

    /// The current population.
    ///
    /// `population()[..elite_count()]` holds the best solutions in
    /// ascending fitness order.
    pub fn population(&self) -> &[SolutionOf<A::Problem>] {
        &self.population
    }

    /// The best solution currently in the population.
    pub fn best(&self) -> &SolutionOf<A::Problem> {
        if self.elite_count > 0 {
            return &self.population[0];
        }
        let problem = self.adapter.problem();
        self.population
            .iter()
            .reduce(|best, s| {
                if problem.less(&s.fitness, &best.fitness) {
                    s
                } else {
                    best
                }
            })
            .expect("population is never empty")
    }

    /// Number of best solutions kept at the front of the population.
    pub fn elite_count(&self) -> usize {
        self.elite_count
    }

    /// Changes the elite count and immediately re-establishes the prefix.
    ///
    /// # Errors
    /// [`EngineError::InvalidEliteCount`] if `elite_count >= N`; the engine
    /// is left unchanged.
    pub fn set_elite_count(&mut self, elite_count: usize) -> Result<()> {
        check_elite_count(elite_count, self.population.len())?;
        self.elite_count = elite_count;
        self.sort_population();
        Ok(())
    }

    /// Number of completed generations.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// The wrapped problem.
    pub fn problem(&self) -> &A::Problem {
        self.adapter.problem()
    }

    /// Mutable access to the wrapped problem.
    pub fn problem_mut(&mut self) -> &mut A::Problem {
        self.adapter.problem_mut()
    }

    /// The problem adapter.
    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    /// The random generator.
    pub fn generator(&self) -> &GeneratorOf<A> {
        &self.generator
    }

    /// Mutable access to the random generator.
    ///
    /// Every draw taken here shifts all later engine draws.
    pub fn generator_mut(&mut self) -> &mut GeneratorOf<A> {
        &mut self.generator
    }

    /// Consumes the engine, returning the problem, population and generator.
    pub fn into_parts(self) -> (A::Problem, Vec<SolutionOf<A::Problem>>, GeneratorOf<A>) {
        (self.adapter.into_inner(), self.population, self.generator)
    }

    /// Moves the `elite_count` best solutions to the front, sorted.
    fn sort_population(&mut self) {
        let k = self.elite_count;
        if k == 0 {
            return;
        }
        let problem = self.adapter.problem();
        let order = |a: &SolutionOf<A::Problem>, b: &SolutionOf<A::Problem>| {
            compare_fitness(problem, &a.fitness, &b.fitness)
        };
        self.population.select_nth_unstable_by(k - 1, order);
        self.population[..k].sort_by(order);
    }
}

fn check_fitness_count<F>(expected: usize, fitness: &[F]) -> Result<()> {
    if fitness.len() != expected {
        warn!(
            expected,
            actual = fitness.len(),
            "evaluation broke the one-fitness-per-individual contract"
        );
        return Err(EngineError::FitnessCountMismatch {
            expected,
            actual: fitness.len(),
        });
    }
    Ok(())
}
