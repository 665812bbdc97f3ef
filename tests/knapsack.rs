//! Bi-objective knapsack with lexicographic array fitness.

use rand::Rng;
use u_evolve::ga::operators::{bit_flip_mutation, draw, uniform_crossover};
use u_evolve::ga::{Algorithm, Problem, RunConfig, SingleAdapter, SingleEvaluation};
use u_evolve::random::{create_rng, DefaultRng};

const ITEM_COUNT: usize = 50;
const POPULATION_SIZE: usize = 100;
const ELITE_COUNT: usize = 5;

struct Knapsack {
    values: [Vec<f64>; 2],
    weights: Vec<f64>,
    capacity: f64,
    mutation_rate: f64,
    recombination_rate: f64,
}

impl Knapsack {
    fn random(rng: &mut DefaultRng) -> Self {
        let mut random_values = || -> Vec<f64> {
            (0..ITEM_COUNT).map(|_| rng.random()).collect()
        };
        let values = [random_values(), random_values()];
        let weights = random_values();
        Self {
            values,
            weights,
            capacity: 0.3 * ITEM_COUNT as f64,
            mutation_rate: 1.0 / ITEM_COUNT as f64,
            recombination_rate: 0.4,
        }
    }

    fn weight(&self, x: &[bool]) -> f64 {
        x.iter().zip(&self.weights).filter(|(t, _)| **t).map(|(_, w)| w).sum()
    }
}

impl Problem for Knapsack {
    type Individual = Vec<bool>;
    type Fitness = [f64; 2];
    type Generator = DefaultRng;

    fn mutate(&mut self, x: &mut Vec<bool>, rng: &mut DefaultRng) {
        bit_flip_mutation(x, self.mutation_rate, rng);
    }

    fn recombine(
        &mut self,
        parent1: &Vec<bool>,
        parent2: &Vec<bool>,
        rng: &mut DefaultRng,
    ) -> Vec<Vec<bool>> {
        if !draw(self.recombination_rate, rng) {
            return vec![parent1.clone(), parent2.clone()];
        }
        let (c1, c2) = uniform_crossover(parent1, parent2, rng);
        vec![c1, c2]
    }
}

impl SingleEvaluation for Knapsack {
    fn evaluate(&mut self, x: &Vec<bool>, _rng: &mut DefaultRng) -> [f64; 2] {
        if self.weight(x) > self.capacity {
            return [0.0, 0.0];
        }
        let mut result = [0.0; 2];
        for (r, values) in result.iter_mut().zip(&self.values) {
            *r = -x
                .iter()
                .zip(values)
                .filter(|(t, _)| **t)
                .map(|(_, v)| v)
                .sum::<f64>();
        }
        result
    }
}

fn setup(seed: u64) -> Algorithm<SingleAdapter<Knapsack>> {
    let mut rng = create_rng(seed);
    let initial_population: Vec<Vec<bool>> = (0..POPULATION_SIZE)
        .map(|_| (0..ITEM_COUNT).map(|_| draw(0.1, &mut rng)).collect())
        .collect();
    let problem = Knapsack::random(&mut rng);
    Algorithm::single(problem, initial_population, ELITE_COUNT, rng).unwrap()
}

#[test]
fn knapsack_improves_and_stays_feasible() {
    let mut algorithm = setup(17);
    let initial_best = algorithm.best().fitness;

    for _ in 0..100 {
        algorithm.iterate().unwrap();
    }

    let population = algorithm.population();
    assert_eq!(population.len(), POPULATION_SIZE);

    let best = &population[0];
    assert!(best.fitness <= initial_best);
    assert!(best.fitness[0] < 0.0, "best should carry some value");
    assert!(algorithm.problem().weight(&best.individual) <= algorithm.problem().capacity);

    for window in population[..ELITE_COUNT].windows(2) {
        assert!(window[0].fitness <= window[1].fitness);
    }
    for s in &population[ELITE_COUNT..] {
        assert!(!(s.fitness < population[ELITE_COUNT - 1].fitness));
    }
}

#[test]
fn knapsack_run_driver() {
    let mut algorithm = setup(5);
    let config = RunConfig::default()
        .with_max_generations(60)
        .with_stagnation_limit(0);

    let result = algorithm.run(&config).unwrap();

    assert_eq!(result.generations, 60);
    assert_eq!(result.fitness_history.len(), 61);
    assert_eq!(result.best.fitness, algorithm.best().fitness);
}
