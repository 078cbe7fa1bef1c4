#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::unreadable_literal))]
//! Arbor: a tree-based genetic programming engine.
//!
//! This crate evolves executable program trees against pluggable problem
//! instances. Two instances ship with the crate: a foraging agent on a
//! toroidal grid ([`ant`]) and closed-form expression discovery against a
//! numeric dataset ([`symbolic`]). Both share one evolutionary core; only the
//! node vocabulary and the fitness evaluation differ.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │         Engine (generations)        │
//! ├─────────────────────────────────────┤
//! │  Selection │ Crossover │ Mutation   │
//! ├─────────────────────────────────────┤
//! │  Grammar + Evaluator (per problem)  │
//! ├─────────────────────────────────────┤
//! │    Node trees (cached attributes)   │
//! └─────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! use arbor::gp::{Engine, EngineConfig};
//! use arbor::ant::{AntEvaluator, AntGrammar, Trail};
//!
//! let trail = Trail::parse(path)?;
//! let mut evaluator = AntEvaluator::new(trail);
//! let mut engine = Engine::new(EngineConfig::default(), AntGrammar, &mut evaluator);
//! let best = engine.run();
//! ```

pub mod ant;
pub mod gp;
pub mod symbolic;

pub use gp::{Engine, EngineConfig, Evaluator, Grammar, Node, Symbol, TreeSolution};
