//! Run configuration.
//!
//! [`RunConfig`] holds the parameters of the run driver: elitism and the
//! termination conditions. The generational step itself has no tunables.

use super::error::{EngineError, Result};

/// Configuration for [`Algorithm::run`](super::Algorithm::run).
///
/// # Defaults
///
/// ```
/// use u_evolve::ga::RunConfig;
///
/// let config = RunConfig::default();
/// assert_eq!(config.elite_count, 1);
/// assert_eq!(config.max_generations, 500);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_evolve::ga::RunConfig;
///
/// let config = RunConfig::default()
///     .with_elite_count(5)
///     .with_max_generations(100)
///     .with_stagnation_limit(0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunConfig {
    /// Number of best solutions kept at the front of the population.
    ///
    /// Used by [`Algorithm::from_config`](super::Algorithm::from_config).
    /// Must be smaller than the population size.
    pub elite_count: usize,

    /// Maximum number of generations before termination.
    pub max_generations: usize,

    /// Number of generations without strict improvement of the best
    /// fitness before stopping.
    ///
    /// Set to 0 to disable stagnation-based termination.
    pub stagnation_limit: usize,

    /// Optional wall-clock time limit in milliseconds.
    ///
    /// Checked before each generation, so the run may overshoot by one
    /// generation's worth of work. `None` disables it.
    pub time_limit_ms: Option<u64>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            elite_count: 1,
            max_generations: 500,
            stagnation_limit: 50,
            time_limit_ms: None,
        }
    }
}

impl RunConfig {
    /// Sets the elite count.
    pub fn with_elite_count(mut self, k: usize) -> Self {
        self.elite_count = k;
        self
    }

    /// Sets the maximum number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the stagnation limit (0 to disable).
    pub fn with_stagnation_limit(mut self, limit: usize) -> Self {
        self.stagnation_limit = limit;
        self
    }

    /// Sets the wall-clock time limit in milliseconds.
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    /// Preset for quick runs: 100 generations, stagnation after 20,
    /// 10 s time limit.
    pub fn fast() -> Self {
        Self {
            max_generations: 100,
            stagnation_limit: 20,
            time_limit_ms: Some(10_000),
            ..Self::default()
        }
    }

    /// Preset for balanced runs: 300 generations, stagnation after 50,
    /// 30 s time limit.
    pub fn balanced() -> Self {
        Self {
            max_generations: 300,
            stagnation_limit: 50,
            time_limit_ms: Some(30_000),
            ..Self::default()
        }
    }

    /// Preset for long runs: 1000 generations, stagnation after 100,
    /// 60 s time limit.
    pub fn quality() -> Self {
        Self {
            max_generations: 1000,
            stagnation_limit: 100,
            time_limit_ms: Some(60_000),
            ..Self::default()
        }
    }

    /// Validates the termination parameters.
    pub fn validate(&self) -> Result<()> {
        if self.max_generations == 0 {
            return Err(EngineError::InvalidConfig(
                "max_generations must be at least 1".into(),
            ));
        }
        if self.time_limit_ms == Some(0) {
            return Err(EngineError::InvalidConfig(
                "time_limit_ms must be positive or None".into(),
            ));
        }
        Ok(())
    }

    /// Validates the configuration against a population size.
    ///
    /// Also rejects `elite_count >= population_size`.
    pub fn validate_for(&self, population_size: usize) -> Result<()> {
        self.validate()?;
        check_elite_count(self.elite_count, population_size)
    }
}

/// Fails unless `elite_count < population_size`.
pub(crate) fn check_elite_count(elite_count: usize, population_size: usize) -> Result<()> {
    if elite_count >= population_size {
        return Err(EngineError::InvalidEliteCount {
            elite_count,
            population_size,
        });
    }
    Ok(())
}
