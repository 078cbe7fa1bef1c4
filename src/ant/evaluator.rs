//! Fitness evaluation for ant programs.
#![allow(clippy::cast_precision_loss)]

use crate::ant::language::AntSymbol;
use crate::ant::simulator::Simulator;
use crate::ant::trail::Trail;
use crate::gp::{Evaluator, TreeSolution};

/// Default move budget per simulation.
pub const DEFAULT_MAX_MOVES: usize = 600;

/// Scores ant programs by the amount of food they collect on a trail.
#[derive(Debug)]
pub struct AntEvaluator {
    simulator: Simulator,
    max_moves: usize,
}

impl AntEvaluator {
    /// Create an evaluator with the default move budget.
    #[must_use]
    pub fn new(trail: Trail) -> Self {
        Self::with_max_moves(trail, DEFAULT_MAX_MOVES)
    }

    /// Create an evaluator with an explicit move budget.
    #[must_use]
    pub fn with_max_moves(trail: Trail, max_moves: usize) -> Self {
        Self {
            simulator: Simulator::new(trail),
            max_moves,
        }
    }

    /// The amount of food on the trail, the best achievable score.
    #[must_use]
    pub fn max_score(&self) -> usize {
        self.simulator.trail().food_count()
    }
}

impl Evaluator<AntSymbol> for AntEvaluator {
    fn evaluate_population(&mut self, population: &mut [TreeSolution<AntSymbol>]) {
        for solution in population {
            let collected = self.simulator.run(solution.root(), self.max_moves) as f64;
            solution.set_score(collected, collected);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gp::Node;

    #[test]
    fn test_evaluator_scores_collected_food() {
        let trail = Trail::parse_str("1x3\n011\n").unwrap();
        let mut evaluator = AntEvaluator::with_max_moves(trail, 2);
        let mut population = vec![TreeSolution::new(Node::new(AntSymbol::Move))];
        evaluator.evaluate_population(&mut population);
        assert!((population[0].fitness() - 2.0).abs() < f64::EPSILON);
        assert!((population[0].value() - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_max_score_matches_trail() {
        let trail = Trail::parse_str("2x2\n10\n01\n").unwrap();
        let evaluator = AntEvaluator::new(trail);
        assert_eq!(evaluator.max_score(), 2);
    }
}
