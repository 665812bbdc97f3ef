//! Multi-generation run driver.
//!
//! [`Algorithm::run`] repeats [`Algorithm::iterate`] until a termination
//! condition from [`RunConfig`] is met, tracking the best solution seen.

use super::adapter::{IndividualOf, ProblemAdapter};
use super::algorithm::Algorithm;
use super::config::RunConfig;
use super::error::Result;
use super::types::{Problem, Solution};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

/// Result of a run.
#[derive(Debug, Clone)]
pub struct RunResult<I, F> {
    /// The best solution seen during the run.
    pub best: Solution<I, F>,

    /// Number of generations executed by this run.
    pub generations: usize,

    /// Whether the run stopped on the stagnation limit.
    pub stagnated: bool,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Whether the run stopped on the time limit.
    pub timed_out: bool,

    /// Best fitness so far, before the first generation and after each one.
    pub fitness_history: Vec<F>,
}

impl<A> Algorithm<A>
where
    A: ProblemAdapter,
    IndividualOf<A>: Clone,
{
    /// Runs generations until a termination condition is met.
    ///
    /// # Errors
    /// [`EngineError::InvalidConfig`](super::EngineError::InvalidConfig) if
    /// `config` is invalid, or the first error returned by
    /// [`iterate`](Algorithm::iterate).
    pub fn run(
        &mut self,
        config: &RunConfig,
    ) -> Result<RunResult<IndividualOf<A>, <A::Problem as Problem>::Fitness>> {
        self.run_with_cancel(config, None)
    }

    /// Runs generations with an optional cancellation flag.
    ///
    /// The flag is checked before each generation; a generation in
    /// progress always completes.
    pub fn run_with_cancel(
        &mut self,
        config: &RunConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<RunResult<IndividualOf<A>, <A::Problem as Problem>::Fitness>> {
        config.validate()?;

        let start = Instant::now();
        let mut best = self.best().clone();
        let mut fitness_history = vec![best.fitness.clone()];

        let mut generations = 0usize;
        let mut stagnation_counter = 0usize;
        let mut stagnated = false;
        let mut cancelled = false;
        let mut timed_out = false;

        while generations < config.max_generations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }
            if let Some(limit) = config.time_limit_ms {
                if start.elapsed().as_millis() >= u128::from(limit) {
                    timed_out = true;
                    break;
                }
            }

            self.iterate()?;
            generations += 1;

            let current = self.best();
            if self.problem().less(&current.fitness, &best.fitness) {
                best = current.clone();
                stagnation_counter = 0;
            } else {
                stagnation_counter += 1;
            }
            fitness_history.push(best.fitness.clone());

            let generation = self.generation();
            self.problem_mut().on_generation(generation, &best.fitness);

            if config.stagnation_limit > 0 && stagnation_counter >= config.stagnation_limit {
                stagnated = true;
                break;
            }
        }

        info!(
            generations,
            stagnated,
            cancelled,
            timed_out,
            best = ?best.fitness,
            "run finished"
        );

        Ok(RunResult {
            best,
            generations,
            stagnated,
            cancelled,
            timed_out,
            fitness_history,
        })
    }
}
