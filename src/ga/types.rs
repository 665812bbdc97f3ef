//! Core trait definitions for the evolutionary engine.
//!
//! [`Problem`] carries what every problem must provide: the genotype,
//! fitness and generator types plus the variation operators. Exactly one
//! of [`SingleEvaluation`] or [`MultiEvaluation`] supplies the fitness
//! function.

use rand::Rng;
use std::cmp::Ordering;
use std::fmt;

/// A genotype paired with its fitness.
///
/// Solutions are owned by the population; the engine never aliases two
/// population slots.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution<I, F> {
    /// The genotype.
    pub individual: I,
    /// Fitness of `individual`. Lower is better.
    pub fitness: F,
}

impl<I, F> Solution<I, F> {
    /// Pairs a genotype with its fitness.
    pub fn new(individual: I, fitness: F) -> Self {
        Self {
            individual,
            fitness,
        }
    }
}

/// Solution type of a problem.
pub type SolutionOf<P> = Solution<<P as Problem>::Individual, <P as Problem>::Fitness>;

/// Defines an optimization problem.
///
/// The engine always **minimizes**: a solution is better than another when
/// [`less`](Problem::less) says its fitness is smaller. For maximization,
/// negate the fitness or override `less`.
///
/// # Implementing
///
/// ```
/// use rand::Rng;
/// use u_evolve::ga::{Problem, SingleEvaluation};
/// use u_evolve::random::DefaultRng;
///
/// struct Sphere;
///
/// impl Problem for Sphere {
///     type Individual = Vec<f64>;
///     type Fitness = f64;
///     type Generator = DefaultRng;
///
///     fn mutate(&mut self, x: &mut Vec<f64>, rng: &mut DefaultRng) {
///         let i = rng.random_range(0..x.len());
///         x[i] += rng.random_range(-0.5..0.5);
///     }
///
///     fn recombine(&mut self, a: &Vec<f64>, b: &Vec<f64>, _rng: &mut DefaultRng) -> Vec<Vec<f64>> {
///         vec![a.iter().zip(b).map(|(x, y)| 0.5 * (x + y)).collect()]
///     }
/// }
///
/// impl SingleEvaluation for Sphere {
///     fn evaluate(&mut self, x: &Vec<f64>, _rng: &mut DefaultRng) -> f64 {
///         x.iter().map(|v| v * v).sum()
///     }
/// }
/// ```
pub trait Problem {
    /// The genotype representation.
    type Individual;

    /// The fitness type. Ordered by [`less`](Problem::less).
    type Fitness: PartialOrd + Clone + fmt::Debug;

    /// Source of uniform random draws, shared by every operator.
    type Generator: Rng;

    /// Mutates an individual in place.
    fn mutate(&mut self, individual: &mut Self::Individual, rng: &mut Self::Generator);

    /// Recombines two parents into one or more offspring.
    ///
    /// Conventionally returns two children. The engine accepts any
    /// non-empty batch and silently drops offspring it has no room for.
    fn recombine(
        &mut self,
        parent1: &Self::Individual,
        parent2: &Self::Individual,
        rng: &mut Self::Generator,
    ) -> Vec<Self::Individual>;

    /// Returns `true` when fitness `a` is strictly better than `b`.
    ///
    /// Defaults to `a < b`.
    fn less(&self, a: &Self::Fitness, b: &Self::Fitness) -> bool {
        a < b
    }

    /// Called by the run driver at the end of each generation with the
    /// current best fitness. The default implementation is a no-op.
    fn on_generation(&mut self, _generation: usize, _best_fitness: &Self::Fitness) {}
}

/// A problem whose fitness is computed one individual at a time.
pub trait SingleEvaluation: Problem {
    /// Computes the fitness of a single individual.
    ///
    /// Has no visibility into the rest of the population.
    fn evaluate(&mut self, individual: &Self::Individual, rng: &mut Self::Generator)
        -> Self::Fitness;
}

/// A problem whose fitness is computed for a whole batch at once.
///
/// The batch call sees the solutions currently held as elites, which
/// allows context-dependent fitness such as relative ranking.
pub trait MultiEvaluation: Problem {
    /// Appends exactly one fitness to `fitness_out` per entry of
    /// `new_individuals`, in the same order.
    ///
    /// `elites` holds the current elite prefix of the population (empty
    /// during the initial evaluation, where `elite_count` is 0).
    fn evaluate(
        &mut self,
        new_individuals: &[Self::Individual],
        elites: &[SolutionOf<Self>],
        elite_count: usize,
        fitness_out: &mut Vec<Self::Fitness>,
        rng: &mut Self::Generator,
    );
}

/// Total order derived from [`Problem::less`].
///
/// Incomparable values are treated as equal.
pub(crate) fn compare_fitness<P: Problem + ?Sized>(
    problem: &P,
    a: &P::Fitness,
    b: &P::Fitness,
) -> Ordering {
    if problem.less(a, b) {
        Ordering::Less
    } else if problem.less(b, a) {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::DefaultRng;

    struct Reversed;

    impl Problem for Reversed {
        type Individual = i32;
        type Fitness = i32;
        type Generator = DefaultRng;

        fn mutate(&mut self, _x: &mut i32, _rng: &mut DefaultRng) {}

        fn recombine(&mut self, a: &i32, _b: &i32, _rng: &mut DefaultRng) -> Vec<i32> {
            vec![*a]
        }

        fn less(&self, a: &i32, b: &i32) -> bool {
            a > b
        }
    }

    struct Plain;

    impl Problem for Plain {
        type Individual = ();
        type Fitness = f64;
        type Generator = DefaultRng;

        fn mutate(&mut self, _x: &mut (), _rng: &mut DefaultRng) {}

        fn recombine(&mut self, _a: &(), _b: &(), _rng: &mut DefaultRng) -> Vec<()> {
            vec![()]
        }
    }

    #[test]
    fn test_default_less_is_partial_ord() {
        assert!(Plain.less(&1.0, &2.0));
        assert!(!Plain.less(&2.0, &1.0));
        assert!(!Plain.less(&1.0, &1.0));
    }

    #[test]
    fn test_compare_uses_custom_less() {
        assert_eq!(compare_fitness(&Reversed, &5, &3), Ordering::Less);
        assert_eq!(compare_fitness(&Reversed, &3, &5), Ordering::Greater);
        assert_eq!(compare_fitness(&Reversed, &4, &4), Ordering::Equal);
    }

    #[test]
    fn test_nan_is_incomparable() {
        assert_eq!(compare_fitness(&Plain, &f64::NAN, &1.0), Ordering::Equal);
    }
}
