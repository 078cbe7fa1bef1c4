//! Fitness evaluation for expression trees.

use crate::gp::{Evaluator, TreeSolution};
use crate::symbolic::dataset::Dataset;
use crate::symbolic::language::{evaluate, MathSymbol};

/// Scores expressions by how closely they reproduce a dataset.
///
/// The value of a solution is its summed squared error over all samples; its
/// fitness is the reciprocal of that error, so a perfect fit has infinite
/// fitness.
#[derive(Debug)]
pub struct SymbolicEvaluator {
    dataset: Dataset,
    outputs: Vec<f64>,
}

impl SymbolicEvaluator {
    /// Create an evaluator over the given dataset.
    #[must_use]
    pub fn new(dataset: Dataset) -> Self {
        let outputs = Vec::with_capacity(dataset.sample_count());
        Self { dataset, outputs }
    }

    /// The dataset this evaluator scores against.
    #[must_use]
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }
}

impl Evaluator<MathSymbol> for SymbolicEvaluator {
    fn evaluate_population(&mut self, population: &mut [TreeSolution<MathSymbol>]) {
        for solution in population {
            self.outputs.clear();
            for sample in 0..self.dataset.sample_count() {
                self.outputs
                    .push(evaluate(solution.root(), self.dataset.input(sample)));
            }
            let error = self.dataset.squared_error(&self.outputs);
            solution.set_score(error, 1.0 / error);
        }
    }
}
