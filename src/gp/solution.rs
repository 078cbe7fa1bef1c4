//! Tree-backed individuals: a root node plus a value/fitness pair.

use crate::gp::node::{Node, Symbol};

/// One individual of the population: an owned program tree and its score.
///
/// `value` is the raw output of the problem's fitness function; `fitness` is
/// the derived higher-is-better ranking key. Both are set by the problem's
/// [`Evaluator`](crate::gp::Evaluator); the engine only reads them.
#[derive(Debug, Clone)]
pub struct TreeSolution<S> {
    root: Node<S>,
    value: f64,
    fitness: f64,
}

impl<S: Symbol> TreeSolution<S> {
    /// Wrap a tree into an unscored individual.
    #[must_use]
    pub fn new(root: Node<S>) -> Self {
        Self {
            root,
            value: 0.0,
            fitness: 0.0,
        }
    }

    /// The root of the program tree.
    pub fn root(&self) -> &Node<S> {
        &self.root
    }

    pub(crate) fn root_mut(&mut self) -> &mut Node<S> {
        &mut self.root
    }

    /// A new individual with a fully deep-copied tree and the score unset.
    #[must_use]
    pub fn copy(&self) -> Self {
        Self::new(self.root.clone())
    }

    /// Raw fitness-function output.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Higher-is-better ranking key.
    #[must_use]
    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    /// Record the evaluator's verdict.
    pub fn set_score(&mut self, value: f64, fitness: f64) {
        self.value = value;
        self.fitness = fitness;
    }

    /// Total node count, read from the root's cached size.
    #[must_use]
    pub fn size(&self) -> usize {
        self.root.size()
    }

    /// Every node of the tree in pre-order, root first.
    #[must_use]
    pub fn flatten(&self) -> Vec<&Node<S>> {
        self.root.flatten()
    }

    /// Recompute the cached subtree sizes across the whole tree.
    pub fn recompute_sizes(&mut self) {
        self.root.update_size();
    }

    /// Recompute the cached subtree heights across the whole tree.
    pub fn recompute_heights(&mut self) {
        self.root.update_height();
    }

    /// Recompute the cached depths across the whole tree, rooted at 0.
    pub fn recompute_depths(&mut self) {
        self.root.update_depth(0);
    }
}
