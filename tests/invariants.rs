//! Property tests for the size and elite-prefix invariants.

use proptest::prelude::*;
use rand::Rng;
use u_evolve::ga::{Algorithm, EngineError, Problem, SingleEvaluation, Solution};
use u_evolve::random::{create_rng, DefaultRng};

/// Recombination yields a configurable number of offspring; fitness is
/// the genotype's distance to zero.
struct Arity {
    arity: usize,
}

impl Problem for Arity {
    type Individual = i32;
    type Fitness = u32;
    type Generator = DefaultRng;

    fn mutate(&mut self, x: &mut i32, rng: &mut DefaultRng) {
        *x += rng.random_range(-3..=3);
    }

    fn recombine(&mut self, a: &i32, b: &i32, rng: &mut DefaultRng) -> Vec<i32> {
        (0..self.arity)
            .map(|_| if rng.random_bool(0.5) { *a } else { *b })
            .collect()
    }
}

impl SingleEvaluation for Arity {
    fn evaluate(&mut self, x: &i32, _rng: &mut DefaultRng) -> u32 {
        x.unsigned_abs()
    }
}

/// The elite prefix must hold the k smallest fitness values, sorted.
fn check_prefix(population: &[Solution<i32, u32>], k: usize) {
    let mut all: Vec<u32> = population.iter().map(|s| s.fitness).collect();
    all.sort_unstable();
    let prefix: Vec<u32> = population[..k].iter().map(|s| s.fitness).collect();
    assert_eq!(prefix, all[..k].to_vec());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn size_and_prefix_hold_every_generation(
        genes in prop::collection::vec(-1000i32..1000, 1..40),
        elite_seed in any::<usize>(),
        arity in 1usize..5,
        seed in any::<u64>(),
        generations in 0usize..15,
    ) {
        let n = genes.len();
        let k = elite_seed % n;
        let mut model = Algorithm::single(Arity { arity }, genes, k, create_rng(seed)).unwrap();
        check_prefix(model.population(), k);

        for _ in 0..generations {
            model.iterate().unwrap();
            prop_assert_eq!(model.population().len(), n);
            check_prefix(model.population(), k);
        }
    }

    #[test]
    fn elite_count_at_or_above_size_is_rejected(
        genes in prop::collection::vec(-10i32..10, 0..20),
        excess in 0usize..5,
    ) {
        let k = genes.len() + excess;
        let err = Algorithm::single(Arity { arity: 2 }, genes.clone(), k, create_rng(0))
            .err()
            .unwrap();
        prop_assert_eq!(
            err,
            EngineError::InvalidEliteCount { elite_count: k, population_size: genes.len() }
        );
    }

    #[test]
    fn same_seed_same_trajectory(
        genes in prop::collection::vec(-100i32..100, 2..20),
        seed in any::<u64>(),
    ) {
        let trajectory = || {
            let mut model =
                Algorithm::single(Arity { arity: 2 }, genes.clone(), 1, create_rng(seed)).unwrap();
            (0..5)
                .map(|_| {
                    model.iterate().unwrap();
                    model.population().to_vec()
                })
                .collect::<Vec<_>>()
        };
        prop_assert_eq!(trajectory(), trajectory());
    }
}
