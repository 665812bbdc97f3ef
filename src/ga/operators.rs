//! Reusable variation helpers for problem implementations.
//!
//! The engine never calls these itself; they are building blocks for
//! [`Problem::mutate`](super::Problem::mutate) and
//! [`Problem::recombine`](super::Problem::recombine).
//!
//! - [`draw`]: Bernoulli trial
//! - [`bit_flip_mutation`]: per-locus flip for binary genotypes
//! - [`uniform_crossover`]: per-locus mask, complementary children
//! - [`swap_mutation`]: exchange two random positions

use rand::Rng;

/// Returns `true` with probability `rate`.
///
/// Compares one uniform draw from `[0, 1)` against `rate`, so a rate of
/// 0 (or less) never fires and a rate of 1 (or more) always does. Always
/// consumes exactly one draw.
pub fn draw<R: Rng + ?Sized>(rate: f64, rng: &mut R) -> bool {
    rng.random::<f64>() < rate
}

/// Flips each bit independently with probability `rate`.
///
/// Consumes one draw per bit.
pub fn bit_flip_mutation<R: Rng + ?Sized>(bits: &mut [bool], rate: f64, rng: &mut R) {
    for bit in bits.iter_mut() {
        if draw(rate, rng) {
            *bit = !*bit;
        }
    }
}

/// Uniform crossover.
///
/// Draws a fair mask; the first child takes `parent1` where the mask is
/// set and `parent2` elsewhere, the second child the complement.
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if parents have different lengths.
pub fn uniform_crossover<T: Clone, R: Rng + ?Sized>(
    parent1: &[T],
    parent2: &[T],
    rng: &mut R,
) -> (Vec<T>, Vec<T>) {
    assert_eq!(
        parent1.len(),
        parent2.len(),
        "parents must have equal length"
    );

    let mut child1 = Vec::with_capacity(parent1.len());
    let mut child2 = Vec::with_capacity(parent1.len());
    for (a, b) in parent1.iter().zip(parent2) {
        if draw(0.5, rng) {
            child1.push(a.clone());
            child2.push(b.clone());
        } else {
            child1.push(b.clone());
            child2.push(a.clone());
        }
    }
    (child1, child2)
}

/// Swap mutation: exchange two random positions.
///
/// # Complexity
/// O(1)
pub fn swap_mutation<T, R: Rng + ?Sized>(genes: &mut [T], rng: &mut R) {
    let n = genes.len();
    if n < 2 {
        return;
    }
    let i = rng.random_range(0..n);
    let j = rng.random_range(0..n);
    genes.swap(i, j);
}
