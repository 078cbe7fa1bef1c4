//! Ramped half-and-half population initialization.
//!
//! For each depth in `[MIN_DEPTH, max_depth]` a share of the population is
//! built with the *full* method (every branch expands to the exact depth) and
//! the rest with the *grow* method (branches may terminate early). Roots are
//! always non-terminal; a program of height 0 is meaningless.

use crate::gp::grammar::Grammar;
use crate::gp::node::{Node, Symbol};
use crate::gp::solution::TreeSolution;
use rand::Rng;

/// Smallest tree depth the initializer produces.
pub const MIN_DEPTH: usize = 2;

/// Build the starting population.
///
/// The per-depth quota is `population_size` divided evenly over the depth
/// buckets; when the range does not divide evenly the remainder is absorbed
/// by the deepest bucket. Half of each quota (rounded down) uses the full
/// method, the rest uses grow. Returns exactly `population_size` individuals.
pub fn ramped_half_and_half<S, G, R>(
    grammar: &G,
    population_size: usize,
    max_depth: usize,
    rng: &mut R,
) -> Vec<TreeSolution<S>>
where
    S: Symbol,
    G: Grammar<S>,
    R: Rng,
{
    let max_depth = max_depth.max(MIN_DEPTH);
    let buckets = max_depth - MIN_DEPTH + 1;
    let per_depth = population_size / buckets;

    let mut population = Vec::with_capacity(population_size);
    for depth in MIN_DEPTH..=max_depth {
        let quota = if depth == max_depth {
            population_size - population.len()
        } else {
            per_depth
        };
        let full_quota = quota / 2;
        for _ in 0..full_quota {
            population.push(full_tree(grammar, depth - 1, rng));
        }
        for _ in full_quota..quota {
            population.push(grow_tree(grammar, depth - 1, rng));
        }
    }
    population
}

/// A tree whose every branch reaches exactly `depth` levels below the root.
fn full_tree<S, G, R>(grammar: &G, depth: usize, rng: &mut R) -> TreeSolution<S>
where
    S: Symbol,
    G: Grammar<S>,
    R: Rng,
{
    let mut root = Node::new(grammar.non_terminal(rng));
    build(
        &mut root,
        depth,
        &|g: &G, remaining, r: &mut R| {
            if remaining == 0 {
                g.terminal(r)
            } else {
                g.non_terminal(r)
            }
        },
        grammar,
        rng,
    );
    finish(root)
}

/// A tree whose branches may terminate anywhere up to `depth` levels.
fn grow_tree<S, G, R>(grammar: &G, depth: usize, rng: &mut R) -> TreeSolution<S>
where
    S: Symbol,
    G: Grammar<S>,
    R: Rng,
{
    let mut root = Node::new(grammar.non_terminal(rng));
    build(
        &mut root,
        depth,
        &|g: &G, remaining, r: &mut R| {
            if remaining == 0 {
                g.terminal(r)
            } else {
                g.any(r)
            }
        },
        grammar,
        rng,
    );
    finish(root)
}

/// Expand `parent` until every branch terminates, drawing child symbols from
/// `pick` with the remaining depth budget.
fn build<S, G, R, F>(parent: &mut Node<S>, remaining: usize, pick: &F, grammar: &G, rng: &mut R)
where
    S: Symbol,
    G: Grammar<S>,
    R: Rng,
    F: Fn(&G, usize, &mut R) -> S,
{
    let remaining = remaining.saturating_sub(1);
    let arity = parent.arity();
    let children: Vec<Node<S>> = (0..arity)
        .map(|_| Node::new(pick(grammar, remaining, rng)))
        .collect();
    parent.set_children(children);
    for child in parent.children_mut() {
        if !child.is_terminal() {
            build(child, remaining, pick, grammar, rng);
        }
    }
}

fn finish<S: Symbol>(root: Node<S>) -> TreeSolution<S> {
    let mut solution = TreeSolution::new(root);
    solution.recompute_sizes();
    solution.recompute_heights();
    solution.recompute_depths();
    solution
}
