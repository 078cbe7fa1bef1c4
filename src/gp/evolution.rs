//! The elitist generational loop.
//!
//! The engine owns the population, a seeded RNG and the run state. Each
//! generation it evaluates, sorts descending by fitness, carries the best
//! individual over unchanged, and refills the rest by a probabilistic choice
//! among crossover, mutation and plain reproduction. The run terminates when
//! the best individual meets the target fitness or after the configured
//! number of generations, whichever comes first.

// Allow new-best reporting on stderr
#![allow(clippy::print_stderr)]

use crate::gp::crossover::crossover;
use crate::gp::grammar::Grammar;
use crate::gp::init::ramped_half_and_half;
use crate::gp::mutation::{mutate, reproduce};
use crate::gp::node::Symbol;
use crate::gp::selection::{tournament_select, FitnessStats};
use crate::gp::solution::TreeSolution;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper bound on crossover + mutation probability; the remainder up to 1.0
/// is the plain-reproduction slice.
pub const OPERATOR_CEILING: f64 = 0.99;

/// Descending-sort key treating NaN fitness as worse than any real value.
fn fitness_rank<S: Symbol>(solution: &TreeSolution<S>) -> f64 {
    let fitness = solution.fitness();
    if fitness.is_nan() {
        f64::NEG_INFINITY
    } else {
        fitness
    }
}

/// Scores a whole population, one generation at a time.
///
/// For every individual the evaluator computes a raw domain value and a
/// monotonic, higher-is-better fitness derived from it, recording both via
/// [`TreeSolution::set_score`].
pub trait Evaluator<S: Symbol> {
    /// Evaluate and score every individual in the population.
    fn evaluate_population(&mut self, population: &mut [TreeSolution<S>]);
}

/// Construction parameters for an [`Engine`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Number of individuals per generation.
    pub population_size: usize,
    /// Generation limit; the run stops here regardless of fitness.
    pub max_generations: usize,
    /// Maximum tree depth budget for the variation operators.
    pub max_depth: usize,
    /// Maximum tree node-count budget for the variation operators.
    pub max_nodes: usize,
    /// Tournament size; must be at least 2 and at most the population size.
    pub tournament_size: usize,
    /// Probability of the mutation branch. The crossover probability is
    /// derived as [`OPERATOR_CEILING`] minus this value.
    pub mutation_probability: f64,
    /// Stop as soon as the generation best reaches this fitness.
    pub target_fitness: Option<f64>,
    /// RNG seed; a fixed seed makes the whole trajectory reproducible.
    pub seed: u64,
    /// Report every new all-time best to stderr.
    pub verbose: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            population_size: 500,
            max_generations: 100,
            max_depth: 7,
            max_nodes: 200,
            tournament_size: 7,
            mutation_probability: 0.14,
            target_fitness: None,
            seed: 42,
            verbose: false,
        }
    }
}

impl EngineConfig {
    /// The derived crossover probability.
    #[must_use]
    pub fn crossover_probability(&self) -> f64 {
        OPERATOR_CEILING - self.mutation_probability
    }
}

/// Run state of an [`Engine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// Generations are still being produced.
    Running,
    /// Target fitness or the generation limit was reached.
    Terminated,
}

/// Statistics for one evaluated generation.
#[derive(Debug, Clone, Copy)]
pub struct GenerationStats {
    /// Generation number, starting at 0.
    pub generation: usize,
    /// Best fitness in the generation.
    pub best_fitness: f64,
    /// Mean fitness of the generation.
    pub mean_fitness: f64,
    /// Standard deviation of the generation's fitness.
    pub fitness_std: f64,
}

/// Aggregate statistics for a whole run.
#[derive(Debug, Clone)]
pub struct EvolutionStats {
    /// Per-generation statistics, in order.
    pub generations: Vec<GenerationStats>,
    /// Best fitness seen across the whole run.
    pub best_fitness: f64,
    /// Generation in which the all-time best first appeared.
    pub best_generation: usize,
}

/// The generational loop tying initializer, selector and operators together.
///
/// The engine is strictly single-threaded; every random draw comes from one
/// seeded generator, so call order fully determines the trajectory.
pub struct Engine<'e, S, G, E> {
    config: EngineConfig,
    grammar: G,
    evaluator: &'e mut E,
    rng: SmallRng,
    population: Vec<TreeSolution<S>>,
    generation: usize,
    state: EngineState,
    all_time_best: Option<TreeSolution<S>>,
    best_generation: usize,
    history: Vec<GenerationStats>,
}

impl<S, G, E> fmt::Debug for Engine<'_, S, G, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("generation", &self.generation)
            .field("state", &self.state)
            .field("population", &self.population.len())
            .finish()
    }
}

impl<'e, S, G, E> Engine<'e, S, G, E>
where
    S: Symbol,
    G: Grammar<S>,
    E: Evaluator<S>,
{
    /// Build generation 0 with ramped half-and-half and enter the running
    /// state.
    pub fn new(config: EngineConfig, grammar: G, evaluator: &'e mut E) -> Self {
        let mut rng = SmallRng::seed_from_u64(config.seed);
        let population =
            ramped_half_and_half(&grammar, config.population_size, config.max_depth, &mut rng);
        Self {
            config,
            grammar,
            evaluator,
            rng,
            population,
            generation: 0,
            state: EngineState::Running,
            all_time_best: None,
            best_generation: 0,
            history: Vec::new(),
        }
    }

    /// Current run state.
    #[must_use]
    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Number of generations evaluated so far.
    #[must_use]
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// The best individual seen across the run, if any generation has been
    /// evaluated yet.
    #[must_use]
    pub fn best(&self) -> Option<&TreeSolution<S>> {
        self.all_time_best.as_ref()
    }

    /// Aggregate statistics for the generations evaluated so far.
    #[must_use]
    pub fn stats(&self) -> EvolutionStats {
        EvolutionStats {
            generations: self.history.clone(),
            best_fitness: self
                .all_time_best
                .as_ref()
                .map_or(f64::NEG_INFINITY, TreeSolution::fitness),
            best_generation: self.best_generation,
        }
    }

    /// Evaluate the current generation and, unless a stop condition fires,
    /// breed the next one.
    ///
    /// Returns the evaluated generation's statistics, or `None` once the
    /// engine has terminated.
    pub fn step(&mut self) -> Option<GenerationStats> {
        if self.state == EngineState::Terminated
            || self.generation >= self.config.max_generations
        {
            self.state = EngineState::Terminated;
            return None;
        }

        self.evaluator.evaluate_population(&mut self.population);
        // NaN fitness ranks below everything, so an unscorable individual
        // can never take the elite slot.
        self.population
            .sort_by(|a, b| fitness_rank(b).total_cmp(&fitness_rank(a)));

        let fitness_stats = FitnessStats::from_population(&self.population);
        let stats = GenerationStats {
            generation: self.generation,
            best_fitness: fitness_stats.best,
            mean_fitness: fitness_stats.mean,
            fitness_std: fitness_stats.std,
        };
        self.history.push(stats);

        let generation_best = &self.population[0];
        let improved = self
            .all_time_best
            .as_ref()
            .is_none_or(|best| fitness_rank(generation_best) > fitness_rank(best));
        if improved {
            self.all_time_best = Some(generation_best.clone());
            self.best_generation = self.generation;
            if self.config.verbose {
                eprintln!(
                    "Found new best in generation {}: fitness {:.4}",
                    self.generation,
                    generation_best.fitness()
                );
                eprintln!("  {}", generation_best.root());
            }
        }

        if let Some(target) = self.config.target_fitness {
            if generation_best.fitness() >= target {
                self.state = EngineState::Terminated;
                return Some(stats);
            }
        }

        self.breed_next_generation();
        self.generation += 1;
        if self.generation >= self.config.max_generations {
            self.state = EngineState::Terminated;
        }
        Some(stats)
    }

    /// Step until terminated and return the best individual of the run.
    pub fn run(&mut self) -> TreeSolution<S> {
        while self.step().is_some() {}
        self.all_time_best
            .clone()
            .unwrap_or_else(|| self.population[0].copy())
    }

    fn breed_next_generation(&mut self) {
        let crossover_p = self.config.crossover_probability();
        let mutation_p = self.config.mutation_probability;

        let mut next = Vec::with_capacity(self.config.population_size);
        // Elitism: the generation best survives unchanged, score included.
        next.push(self.population[0].clone());

        while next.len() < self.config.population_size {
            let draw = self.rng.gen_range(0.0..1.0);
            if draw < crossover_p {
                let first =
                    tournament_select(&self.population, self.config.tournament_size, &mut self.rng);
                let second =
                    tournament_select(&self.population, self.config.tournament_size, &mut self.rng);
                next.push(crossover(
                    &self.population[first],
                    &self.population[second],
                    self.config.max_depth,
                    self.config.max_nodes,
                    &mut self.rng,
                ));
            } else if draw < crossover_p + mutation_p {
                let index = self.rng.gen_range(0..self.population.len());
                next.push(mutate(
                    &self.population[index],
                    &self.grammar,
                    self.config.max_depth,
                    self.config.max_nodes,
                    &mut self.rng,
                ));
            } else {
                let index = self.rng.gen_range(0..self.population.len());
                next.push(reproduce(&self.population[index]));
            }
        }

        self.population = next;
    }
}
