//! The grammar seam: random symbol supply for tree construction.

use crate::gp::node::Symbol;
use rand::Rng;

/// Registry of the node kinds a problem instance allows.
///
/// Registration happens once before a run starts; a grammar is immutable
/// while the engine runs. Every draw is uniform over the registered kinds of
/// the requested class. A grammar with no terminal kinds is a caller
/// configuration error and is not defended against here.
pub trait Grammar<S: Symbol> {
    /// A freshly drawn terminal (arity 0) symbol.
    fn terminal<R: Rng>(&self, rng: &mut R) -> S;

    /// A freshly drawn non-terminal (arity 1–3) symbol.
    fn non_terminal<R: Rng>(&self, rng: &mut R) -> S;

    /// A freshly drawn symbol of either kind, uniform over all registered
    /// kinds.
    fn any<R: Rng>(&self, rng: &mut R) -> S;
}
