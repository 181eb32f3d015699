//! Random access distributions for experiments and benchmarks

use rand::Rng;

/// Draw `n` integer weights uniformly from `1..=resolution` and normalise
/// them to a probability distribution.
///
/// Every weight is strictly positive. A `resolution` of zero is treated as one.
pub fn random_distribution<R: Rng + ?Sized>(n: usize, resolution: u32, rng: &mut R) -> Vec<f64> {
    let resolution = resolution.max(1);
    let draws: Vec<u32> = (0..n).map(|_| rng.gen_range(1..=resolution)).collect();
    let total: f64 = draws.iter().map(|&d| f64::from(d)).sum();
    draws.into_iter().map(|d| f64::from(d) / total).collect()
}
