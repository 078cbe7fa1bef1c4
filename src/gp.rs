//! The evolutionary core: trees, grammars, operators and the engine.
//!
//! Program trees are owned [`Node`] hierarchies carrying cached structural
//! attributes (depth, subtree size, subtree height). The engine evolves a
//! population of [`TreeSolution`]s through tournament selection, constrained
//! subtree crossover and constrained subtree regrowth, with elitist
//! carry-over between generations.
//!
//! # Example
//!
//! ```ignore
//! use arbor::gp::{Engine, EngineConfig};
//!
//! let config = EngineConfig::default();
//! let mut engine = Engine::new(config, grammar, &mut evaluator);
//! let best = engine.run();
//! println!("{} scored {}", best.root(), best.fitness());
//! ```

mod crossover;
mod evolution;
mod grammar;
mod init;
mod mutation;
mod node;
mod selection;
mod solution;

pub use crossover::crossover;
pub use evolution::{
    Engine, EngineConfig, EngineState, Evaluator, EvolutionStats, GenerationStats,
    OPERATOR_CEILING,
};
pub use grammar::Grammar;
pub use init::{ramped_half_and_half, MIN_DEPTH};
pub use mutation::{mutate, reproduce};
pub use node::{Node, Symbol, MAX_ARITY};
pub use selection::{tournament_select, FitnessStats};
pub use solution::TreeSolution;
