//! Errors reported by the engine.

/// Errors raised while constructing or advancing an [`Algorithm`](super::Algorithm).
///
/// [`InvalidEliteCount`](EngineError::InvalidEliteCount) and
/// [`InvalidConfig`](EngineError::InvalidConfig) are configuration errors.
/// The remaining variants indicate a broken problem implementation; the
/// engine reports them without touching its population, and retrying
/// cannot succeed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// `elite_count` must be strictly smaller than the population size.
    #[error("invalid elite_count {elite_count} for population of size {population_size}")]
    InvalidEliteCount {
        elite_count: usize,
        population_size: usize,
    },

    /// The evaluation step produced a different number of fitness values
    /// than it was given individuals.
    #[error("evaluation returned {actual} fitness values for {expected} individuals")]
    FitnessCountMismatch { expected: usize, actual: usize },

    /// A recombination returned no offspring.
    #[error("recombination produced no offspring")]
    EmptyRecombination,

    /// A run configuration parameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl EngineError {
    /// Returns `true` for errors caused by a misbehaving problem rather
    /// than by the caller's configuration.
    pub fn is_invariant_violation(&self) -> bool {
        matches!(
            self,
            EngineError::FitnessCountMismatch { .. } | EngineError::EmptyRecombination
        )
    }
}

/// Result alias for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;
