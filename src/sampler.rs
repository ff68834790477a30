//! Random origin/destination pairs.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::common::Point;
use crate::source::Population;

/// Draws the origin and destination of a trial from a [Population].
pub trait Sampler {
    /// Returns an `(origin, destination)` pair, both members of `population`.
    fn sample_pair(&mut self, population: &Population) -> (Point, Point);
}

#[derive(Debug, Clone)]
/// Uniform sampling with replacement, driven by an explicit random source.
///
/// Origin and destination are drawn independently, so both may be the same point.
pub struct RandomSampler<R> {
    rng: R,
}

impl<R: Rng> RandomSampler<R> {
    pub fn new(rng: R) -> Self {
        RandomSampler { rng }
    }

    /// Uniform index in `[0, population.len())`.
    pub fn sample_index(&mut self, population: &Population) -> usize {
        self.rng.gen_range(0..population.len())
    }
}

impl RandomSampler<StdRng> {
    /// Sampler seeded once from system entropy.
    pub fn from_entropy() -> Self {
        RandomSampler::new(StdRng::from_entropy())
    }

    /// Deterministic sampler, for repeatable runs.
    pub fn seeded(seed: u64) -> Self {
        RandomSampler::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Sampler for RandomSampler<R> {
    fn sample_pair(&mut self, population: &Population) -> (Point, Point) {
        let origin = population[self.sample_index(population)];
        let destination = population[self.sample_index(population)];

        (origin, destination)
    }
}

impl<S: Sampler + ?Sized> Sampler for &mut S {
    fn sample_pair(&mut self, population: &Population) -> (Point, Point) {
        (**self).sample_pair(population)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(size: usize) -> Population {
        Population::new(
            (0..size)
                .map(|i| Point::new(i as f64, (i * i) as f64))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn pairs_are_members() {
        let population = grid(7);
        let mut sampler = RandomSampler::seeded(7);

        for _ in 0..1000 {
            let (origin, destination) = sampler.sample_pair(&population);

            assert!(population.contains(&origin));
            assert!(population.contains(&destination));
        }
    }

    #[test]
    fn single_point_population() {
        let population = Population::new(vec![Point::new(1.0, 1.0)]).unwrap();
        let mut sampler = RandomSampler::from_entropy();

        let (origin, destination) = sampler.sample_pair(&population);

        assert_eq!(origin, destination);
    }

    #[test]
    fn same_seed_same_pairs() {
        let population = grid(50);
        let mut a = RandomSampler::seeded(42);
        let mut b = RandomSampler::seeded(42);

        for _ in 0..100 {
            assert_eq!(a.sample_pair(&population), b.sample_pair(&population));
        }
    }

    #[test]
    fn selection_frequency_is_uniform() {
        let size = 10;
        let draws = 100_000;
        let population = grid(size);
        let mut sampler = RandomSampler::seeded(1);

        let mut counts = vec![0usize; size];
        for _ in 0..draws {
            counts[sampler.sample_index(&population)] += 1;
        }

        let expected = draws as f64 / size as f64;
        for count in counts {
            let deviation = (count as f64 - expected).abs() / expected;
            assert!(deviation < 0.05, "count {count} too far from {expected}");
        }
    }

    #[test]
    fn draws_with_replacement() {
        let population = grid(2);
        let mut sampler = RandomSampler::seeded(3);

        let same = (0..1000)
            .map(|_| sampler.sample_pair(&population))
            .filter(|(origin, destination)| origin == destination)
            .count();

        assert!(same > 0);
    }
}
