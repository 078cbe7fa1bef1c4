//! Tournament selection and population fitness statistics.

// Statistics use intentional casts
#![allow(clippy::cast_precision_loss)]

use crate::gp::node::Symbol;
use crate::gp::solution::TreeSolution;
use rand::Rng;

/// Pick the fittest of `k` distinct population members, sampled uniformly.
///
/// Duplicates are resampled until `k` distinct members are gathered, so the
/// caller must guarantee `2 <= k <= population.len()`; an unsatisfiable
/// tournament size makes the distinctness loop spin forever. Returns the
/// winner's index; the population is never mutated.
pub fn tournament_select<S, R>(population: &[TreeSolution<S>], k: usize, rng: &mut R) -> usize
where
    S: Symbol,
    R: Rng,
{
    let mut entrants: Vec<usize> = Vec::with_capacity(k);
    while entrants.len() < k {
        let candidate = rng.gen_range(0..population.len());
        if !entrants.contains(&candidate) {
            entrants.push(candidate);
        }
    }

    let mut best = entrants[0];
    for &candidate in &entrants[1..] {
        if population[candidate].fitness() > population[best].fitness() {
            best = candidate;
        }
    }
    best
}

/// Summary statistics over a population's fitness values.
#[derive(Debug, Clone, Copy)]
pub struct FitnessStats {
    /// Mean fitness of the population.
    pub mean: f64,
    /// Best fitness in the population.
    pub best: f64,
    /// Worst fitness in the population.
    pub worst: f64,
    /// Standard deviation of fitness.
    pub std: f64,
}

impl FitnessStats {
    /// Compute statistics for a population.
    #[must_use]
    pub fn from_population<S: Symbol>(population: &[TreeSolution<S>]) -> Self {
        if population.is_empty() {
            return Self {
                mean: 0.0,
                best: 0.0,
                worst: 0.0,
                std: 0.0,
            };
        }

        let n = population.len() as f64;
        let mean = population.iter().map(TreeSolution::fitness).sum::<f64>() / n;
        let best = population
            .iter()
            .map(TreeSolution::fitness)
            .fold(f64::NEG_INFINITY, f64::max);
        let worst = population
            .iter()
            .map(TreeSolution::fitness)
            .fold(f64::INFINITY, f64::min);
        let variance = population
            .iter()
            .map(|s| (s.fitness() - mean).powi(2))
            .sum::<f64>()
            / n;

        Self {
            mean,
            best,
            worst,
            std: variance.sqrt(),
        }
    }
}
