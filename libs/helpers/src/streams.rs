use rand::{seq::SliceRandom, Rng, RngCore};
use rand_distr::{Distribution, Normal};

/// Uniform integers in `[low, high)`
pub fn uniform_stream(length: usize, low: i64, high: i64, rng: &mut dyn RngCore) -> Vec<i64> {
    (0..length).map(|_| rng.gen_range(low..high)).collect()
}

/// Rounded normal values: many duplicates around the mean
pub fn clustered_stream(length: usize, mean: f64, std_dev: f64, rng: &mut dyn RngCore) -> Vec<i64> {
    let normal = Normal::new(mean, std_dev).unwrap();
    (0..length)
        .map(|_| normal.sample(rng).round() as i64)
        .collect()
}

/// A random permutation of the values
pub fn shuffled(values: &[i64], rng: &mut dyn RngCore) -> Vec<i64> {
    let mut values = values.to_vec();
    values.shuffle(rng);
    values
}
