//! The ant-trail problem instance.
//!
//! Programs steer an agent over a toroidal grid scattered with food. The
//! vocabulary is three actions (move, turn left, turn right) and three
//! control nodes (food-ahead conditional, two- and three-way sequencing).
//! Fitness is the amount of food collected within a fixed move budget.

mod evaluator;
mod language;
mod simulator;
mod trail;

pub use evaluator::{AntEvaluator, DEFAULT_MAX_MOVES};
pub use language::{AntGrammar, AntSymbol};
pub use simulator::Simulator;
pub use trail::{Trail, TrailError};
