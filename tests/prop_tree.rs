//! Property-based tests for tree structure and the variation operators.
//!
//! These tests verify the cached-attribute invariants and the operator
//! budgets over randomized populations.
//! Run with: cargo test --release prop_tree

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use arbor::ant::{AntGrammar, AntSymbol};
use arbor::gp::{crossover, mutate, ramped_half_and_half, Node, MIN_DEPTH};
use arbor::symbolic::MathGrammar;

/// Check the attribute invariants over a whole subtree: size is one plus the
/// child sizes, height is one plus the tallest child, children sit one level
/// below their parent.
fn assert_attributes_consistent(node: &Node<AntSymbol>) {
    let mut size = 1;
    let mut height = 0;
    for child in node.children() {
        assert_eq!(child.depth(), node.depth() + 1);
        size += child.size();
        height = height.max(child.height() + 1);
        assert_attributes_consistent(child);
    }
    assert_eq!(node.size(), size);
    assert_eq!(node.height(), height);
}

fn deepest_node_depth(node: &Node<AntSymbol>) -> usize {
    node.flatten()
        .iter()
        .map(|n| n.depth())
        .max()
        .unwrap_or(0)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Ramped half-and-half produces the exact population size with
    /// consistent caches and heights inside the ramp.
    #[test]
    fn prop_init_population_well_formed(
        seed in any::<u64>(),
        population_size in 1usize..60,
        max_depth in MIN_DEPTH..8
    ) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let population =
            ramped_half_and_half(&AntGrammar, population_size, max_depth, &mut rng);
        prop_assert_eq!(population.len(), population_size);
        for solution in &population {
            assert_attributes_consistent(solution.root());
            prop_assert!(!solution.root().is_terminal());
            prop_assert!(solution.root().height() >= 1);
            prop_assert!(solution.root().height() <= max_depth - 1);
        }
    }

    /// Crossover output caches stay consistent and at least one of the two
    /// budget conditions holds.
    #[test]
    fn prop_crossover_respects_a_budget(
        seed in any::<u64>(),
        max_depth in 3usize..8,
        max_nodes in 10usize..120
    ) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let population = ramped_half_and_half(&AntGrammar, 2, max_depth, &mut rng);
        let child = crossover(&population[0], &population[1], max_depth, max_nodes, &mut rng);
        assert_attributes_consistent(child.root());
        prop_assert!(
            deepest_node_depth(child.root()) <= max_depth || child.size() < max_nodes,
            "both budgets exceeded: deepest {} size {}",
            deepest_node_depth(child.root()),
            child.size()
        );
    }

    /// Mutation output caches stay consistent and the regrown subtree never
    /// pushes a node past the depth budget.
    #[test]
    fn prop_mutation_respects_depth_budget(
        seed in any::<u64>(),
        max_depth in 3usize..8,
        max_nodes in 10usize..120
    ) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let population = ramped_half_and_half(&AntGrammar, 1, max_depth, &mut rng);
        let child = mutate(&population[0], &AntGrammar, max_depth, max_nodes, &mut rng);
        assert_attributes_consistent(child.root());
        prop_assert!(deepest_node_depth(child.root()) <= max_depth);
    }

    /// Operators never touch the parents they draw from.
    #[test]
    fn prop_parents_unmodified(
        seed in any::<u64>(),
        max_depth in 3usize..7
    ) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let population = ramped_half_and_half(&AntGrammar, 2, max_depth, &mut rng);
        let first_before = population[0].root().to_string();
        let second_before = population[1].root().to_string();
        let _child = crossover(&population[0], &population[1], max_depth, 60, &mut rng);
        let _mutant = mutate(&population[0], &AntGrammar, max_depth, 60, &mut rng);
        prop_assert_eq!(population[0].root().to_string(), first_before);
        prop_assert_eq!(population[1].root().to_string(), second_before);
    }

    /// A deep copy reproduces the structure but starts unscored.
    #[test]
    fn prop_copy_preserves_structure_resets_score(
        seed in any::<u64>(),
        max_depth in 3usize..7
    ) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut population = ramped_half_and_half(&AntGrammar, 1, max_depth, &mut rng);
        population[0].set_score(3.0, 7.0);
        let copy = population[0].copy();
        prop_assert_eq!(copy.root().to_string(), population[0].root().to_string());
        prop_assert_eq!(copy.size(), population[0].size());
        prop_assert!(copy.fitness().abs() < f64::EPSILON);
        prop_assert!(copy.value().abs() < f64::EPSILON);
    }

    /// The symbolic grammar feeds the same initializer contract: exact
    /// population size and consistent arities.
    #[test]
    fn prop_init_symbolic_well_formed(
        seed in any::<u64>(),
        population_size in 1usize..40,
        max_depth in MIN_DEPTH..7
    ) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let grammar = MathGrammar::new(2).with_constants(-5.0, 5.0);
        let population = ramped_half_and_half(&grammar, population_size, max_depth, &mut rng);
        prop_assert_eq!(population.len(), population_size);
        for solution in &population {
            for node in solution.root().flatten() {
                prop_assert_eq!(node.children().len(), node.arity());
            }
        }
    }
}
