//! Symbolic-regression problem instance.
//!
//! Evolves closed-form mathematical expressions that approximate a numeric
//! dataset. The node vocabulary covers the four basic operators, a handful of
//! unary functions with protected semantics, random constants and dataset
//! variables. Fitness is the reciprocal of the summed squared error over all
//! dataset samples.

mod dataset;
mod evaluator;
mod language;

pub use dataset::{Dataset, DatasetError};
pub use evaluator::SymbolicEvaluator;
pub use language::{evaluate, MathGrammar, MathSymbol, SAFE_VALUE};
