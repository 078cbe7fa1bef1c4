//! Constrained subtree crossover.
//!
//! A random subtree of the second parent replaces a random child slot of a
//! random non-terminal in the first parent, provided the result respects the
//! depth or the size budget. When neither budget admits the swap the operator
//! degrades to an unmodified copy of one of the two parents; it never errors
//! and never silently violates both budgets.

use crate::gp::node::Symbol;
use crate::gp::solution::TreeSolution;
use rand::Rng;

/// Cross two parents into one child under the given budgets.
///
/// The acceptance test is a deliberately permissive OR of the two budget
/// checks: a swap passing only the size bound may still deepen the tree past
/// `max_depth`. The size term uses the first parent's original size.
#[must_use]
pub fn crossover<S, R>(
    first: &TreeSolution<S>,
    second: &TreeSolution<S>,
    max_depth: usize,
    max_nodes: usize,
    rng: &mut R,
) -> TreeSolution<S>
where
    S: Symbol,
    R: Rng,
{
    let mut child = first.copy();
    let first_size = first.size();

    // Swapping at a terminal of the first parent would be a no-op, so
    // resample until a non-terminal comes up. Roots are never terminal.
    let target = loop {
        let index = rng.gen_range(0..child.size());
        let node = child.root().get(index).expect("index within tree");
        if !node.is_terminal() {
            break index;
        }
    };

    let donor_parent = second.copy();
    let donor_index = rng.gen_range(0..donor_parent.size());
    let donor = donor_parent
        .root()
        .get(donor_index)
        .expect("index within tree");

    let node = child.root().get(target).expect("index within tree");
    let depth_ok = node.depth() + donor.height() < max_depth;
    let size_ok = first_size - node.size() + donor.size() < max_nodes;
    if !(depth_ok || size_ok) {
        return if rng.gen_bool(0.5) { child } else { donor_parent };
    }

    let slot = rng.gen_range(0..node.arity());
    let subtree = donor.clone();
    child
        .root_mut()
        .get_mut(target)
        .expect("index within tree")
        .replace_child(slot, subtree);

    child.recompute_sizes();
    child.recompute_depths();
    child.recompute_heights();
    child
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ant::AntGrammar;
    use crate::gp::init::ramped_half_and_half;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_child_attributes_consistent() {
        let mut rng = SmallRng::seed_from_u64(5);
        let parents = ramped_half_and_half(&AntGrammar, 2, 5, &mut rng);
        for _ in 0..200 {
            let child = crossover(&parents[0], &parents[1], 7, 200, &mut rng);
            for node in child.flatten() {
                let child_sizes: usize = node.children().iter().map(|c| c.size()).sum();
                assert_eq!(node.size(), 1 + child_sizes);
                for sub in node.children() {
                    assert_eq!(sub.depth(), node.depth() + 1);
                }
            }
        }
    }

    #[test]
    fn test_budget_disjunction_always_holds() {
        let mut rng = SmallRng::seed_from_u64(9);
        let max_depth = 6;
        let max_nodes = 40;
        let parents = ramped_half_and_half(&AntGrammar, 20, max_depth, &mut rng);
        for i in 0..parents.len() {
            for j in 0..parents.len() {
                let child = crossover(&parents[i], &parents[j], max_depth, max_nodes, &mut rng);
                let deepest = child.flatten().iter().map(|n| n.depth()).max().unwrap();
                assert!(
                    deepest <= max_depth || child.size() < max_nodes,
                    "both budgets violated: depth {deepest}, size {}",
                    child.size()
                );
            }
        }
    }

    #[test]
    fn test_impossible_budgets_fall_back_to_parent_copy() {
        let mut rng = SmallRng::seed_from_u64(3);
        let parents = ramped_half_and_half(&AntGrammar, 2, 4, &mut rng);
        let first = parents[0].root().to_string();
        let second = parents[1].root().to_string();
        for _ in 0..50 {
            let child = crossover(&parents[0], &parents[1], 0, 0, &mut rng);
            let rendered = child.root().to_string();
            assert!(rendered == first || rendered == second);
        }
    }

    #[test]
    fn test_parents_unmodified() {
        let mut rng = SmallRng::seed_from_u64(21);
        let parents = ramped_half_and_half(&AntGrammar, 2, 5, &mut rng);
        let before_first = parents[0].root().to_string();
        let before_second = parents[1].root().to_string();
        for _ in 0..100 {
            let _child = crossover(&parents[0], &parents[1], 7, 200, &mut rng);
        }
        assert_eq!(parents[0].root().to_string(), before_first);
        assert_eq!(parents[1].root().to_string(), before_second);
    }
}
