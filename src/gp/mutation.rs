//! Constrained subtree regrowth and plain reproduction.
//!
//! Mutation picks a random non-terminal in a copy of the parent and regrows
//! its entire subtree from the grammar. The regrowth is budget-aware from the
//! start: once the depth or the running node count comes within one arity of
//! its budget, all newly created children are forced terminal. Mutation
//! therefore always succeeds without a fallback.

use crate::gp::grammar::Grammar;
use crate::gp::node::{Node, Symbol};
use crate::gp::solution::TreeSolution;
use rand::Rng;

/// Regrow a random subtree of a copy of `parent` under the given budgets.
#[must_use]
pub fn mutate<S, G, R>(
    parent: &TreeSolution<S>,
    grammar: &G,
    max_depth: usize,
    max_nodes: usize,
    rng: &mut R,
) -> TreeSolution<S>
where
    S: Symbol,
    G: Grammar<S>,
    R: Rng,
{
    let mut mutated = parent.copy();

    // Regrowing below a terminal is impossible; resample until a
    // non-terminal comes up. Roots are never terminal.
    let target = loop {
        let index = rng.gen_range(0..mutated.size());
        let node = mutated.root().get(index).expect("index within tree");
        if !node.is_terminal() {
            break index;
        }
    };

    let mut count = 1;
    let node = mutated
        .root_mut()
        .get_mut(target)
        .expect("index within tree");
    regrow(node, grammar, max_depth, max_nodes, &mut count, rng);

    mutated.recompute_sizes();
    mutated.recompute_heights();
    mutated.recompute_depths();
    mutated
}

/// A verbatim copy of the parent, score included.
#[must_use]
pub fn reproduce<S: Symbol>(parent: &TreeSolution<S>) -> TreeSolution<S> {
    parent.clone()
}

/// Replace `node`'s children with freshly drawn subtrees, recursing until
/// every new branch terminates.
fn regrow<S, G, R>(
    node: &mut Node<S>,
    grammar: &G,
    max_depth: usize,
    max_nodes: usize,
    count: &mut usize,
    rng: &mut R,
) where
    S: Symbol,
    G: Grammar<S>,
    R: Rng,
{
    let arity = node.arity();
    if arity == 0 {
        return;
    }

    // Arity lookahead: a non-terminal child here could demand `arity` more
    // nodes one level deeper, so the budgets are checked that far ahead.
    let force_terminal =
        node.depth() + arity >= max_depth || *count + arity >= max_nodes;
    let children: Vec<Node<S>> = (0..arity)
        .map(|_| {
            let symbol = if force_terminal {
                grammar.terminal(rng)
            } else {
                grammar.any(rng)
            };
            Node::new(symbol)
        })
        .collect();
    *count += arity;

    node.set_children(children);
    for child in node.children_mut() {
        regrow(child, grammar, max_depth, max_nodes, count, rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ant::AntGrammar;
    use crate::gp::init::ramped_half_and_half;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_mutant_attributes_consistent() {
        let mut rng = SmallRng::seed_from_u64(31);
        let parents = ramped_half_and_half(&AntGrammar, 10, 6, &mut rng);
        for parent in &parents {
            let mutant = mutate(parent, &AntGrammar, 7, 200, &mut rng);
            for node in mutant.flatten() {
                let child_sizes: usize = node.children().iter().map(|c| c.size()).sum();
                assert_eq!(node.size(), 1 + child_sizes);
                let child_height = node.children().iter().map(|c| c.height()).max();
                assert_eq!(node.height(), child_height.map_or(0, |h| h + 1));
                for child in node.children() {
                    assert_eq!(child.depth(), node.depth() + 1);
                }
            }
        }
    }

    #[test]
    fn test_mutant_respects_depth_budget() {
        let mut rng = SmallRng::seed_from_u64(37);
        let max_depth = 6;
        let parents = ramped_half_and_half(&AntGrammar, 20, max_depth, &mut rng);
        for parent in &parents {
            for _ in 0..20 {
                let mutant = mutate(parent, &AntGrammar, max_depth, 200, &mut rng);
                let deepest = mutant.flatten().iter().map(|n| n.depth()).max().unwrap();
                assert!(deepest <= max_depth);
            }
        }
    }

    #[test]
    fn test_tight_node_budget_forces_small_regrowth() {
        let mut rng = SmallRng::seed_from_u64(41);
        let parents = ramped_half_and_half(&AntGrammar, 4, 4, &mut rng);
        for parent in &parents {
            for _ in 0..50 {
                // With max_nodes at the minimum the regrown subtree is the
                // picked node plus terminal children only.
                let mutant = mutate(parent, &AntGrammar, 20, 1, &mut rng);
                assert!(mutant.size() <= parent.size() + 3);
            }
        }
    }

    #[test]
    fn test_parent_unmodified() {
        let mut rng = SmallRng::seed_from_u64(43);
        let parents = ramped_half_and_half(&AntGrammar, 1, 5, &mut rng);
        let before = parents[0].root().to_string();
        for _ in 0..50 {
            let _mutant = mutate(&parents[0], &AntGrammar, 7, 200, &mut rng);
        }
        assert_eq!(parents[0].root().to_string(), before);
    }
}
