//! Expression vocabulary and protected evaluation semantics.

use std::fmt;

use rand::Rng;

use crate::gp::{Grammar, Node, Symbol};

/// Result of a protected operation applied outside its domain.
pub const SAFE_VALUE: f64 = 1.0;

/// One element of the expression vocabulary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MathSymbol {
    /// Binary addition.
    Add,
    /// Binary subtraction.
    Sub,
    /// Binary multiplication.
    Mul,
    /// Protected binary division; division by zero yields [`SAFE_VALUE`].
    Div,
    /// Sine.
    Sin,
    /// Cosine.
    Cos,
    /// Protected square root; negative input yields [`SAFE_VALUE`].
    Sqrt,
    /// Protected base-10 logarithm; non-positive input yields [`SAFE_VALUE`].
    Log,
    /// Natural exponential.
    Exp,
    /// A fixed numeric constant.
    Const(f64),
    /// A dataset input variable, referenced by column index.
    Var(usize),
}

/// Every function symbol, used as the default allowed set.
const FUNCTIONS: [MathSymbol; 9] = [
    MathSymbol::Add,
    MathSymbol::Sub,
    MathSymbol::Mul,
    MathSymbol::Div,
    MathSymbol::Sin,
    MathSymbol::Cos,
    MathSymbol::Sqrt,
    MathSymbol::Log,
    MathSymbol::Exp,
];

impl MathSymbol {
    /// Look up a function symbol by its textual operator name.
    ///
    /// Recognized names are `+`, `-`, `*`, `/`, `sin`, `cos`, `sqrt`, `log`
    /// and `exp`. Terminals (constants and variables) have no names.
    #[must_use]
    pub fn function(name: &str) -> Option<Self> {
        match name {
            "+" => Some(Self::Add),
            "-" => Some(Self::Sub),
            "*" => Some(Self::Mul),
            "/" => Some(Self::Div),
            "sin" => Some(Self::Sin),
            "cos" => Some(Self::Cos),
            "sqrt" => Some(Self::Sqrt),
            "log" => Some(Self::Log),
            "exp" => Some(Self::Exp),
            _ => None,
        }
    }
}

impl Symbol for MathSymbol {
    fn arity(&self) -> usize {
        match self {
            Self::Add | Self::Sub | Self::Mul | Self::Div => 2,
            Self::Sin | Self::Cos | Self::Sqrt | Self::Log | Self::Exp => 1,
            Self::Const(_) | Self::Var(_) => 0,
        }
    }
}

impl fmt::Display for MathSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add => write!(f, "add"),
            Self::Sub => write!(f, "sub"),
            Self::Mul => write!(f, "mul"),
            Self::Div => write!(f, "div"),
            Self::Sin => write!(f, "sin"),
            Self::Cos => write!(f, "cos"),
            Self::Sqrt => write!(f, "sqrt"),
            Self::Log => write!(f, "log"),
            Self::Exp => write!(f, "exp"),
            Self::Const(value) => write!(f, "{value}"),
            Self::Var(index) => write!(f, "x{index}"),
        }
    }
}

/// Evaluate an expression tree against one input vector.
///
/// Variables index into `inputs`; protected functions fall back to
/// [`SAFE_VALUE`] outside their domain.
#[must_use]
#[allow(clippy::float_cmp)] // exact zero check, as the protected semantics demand
pub fn evaluate(node: &Node<MathSymbol>, inputs: &[f64]) -> f64 {
    let children = node.children();
    match *node.symbol() {
        MathSymbol::Add => evaluate(&children[0], inputs) + evaluate(&children[1], inputs),
        MathSymbol::Sub => evaluate(&children[0], inputs) - evaluate(&children[1], inputs),
        MathSymbol::Mul => evaluate(&children[0], inputs) * evaluate(&children[1], inputs),
        MathSymbol::Div => {
            let numerator = evaluate(&children[0], inputs);
            let denominator = evaluate(&children[1], inputs);
            if denominator == 0.0 {
                SAFE_VALUE
            } else {
                numerator / denominator
            }
        }
        MathSymbol::Sin => evaluate(&children[0], inputs).sin(),
        MathSymbol::Cos => evaluate(&children[0], inputs).cos(),
        MathSymbol::Sqrt => {
            let argument = evaluate(&children[0], inputs);
            if argument < 0.0 {
                SAFE_VALUE
            } else {
                argument.sqrt()
            }
        }
        MathSymbol::Log => {
            let argument = evaluate(&children[0], inputs);
            if argument <= 0.0 {
                SAFE_VALUE
            } else {
                argument.log10()
            }
        }
        MathSymbol::Exp => evaluate(&children[0], inputs).exp(),
        MathSymbol::Const(value) => value,
        MathSymbol::Var(index) => inputs[index],
    }
}

/// Uniform symbol source over an allowed function set, the dataset variables
/// and optionally random constants.
///
/// The allowed set is fixed once built. Constants draw a fresh value from the
/// configured range on every pick, so no two constant nodes need to agree.
#[derive(Debug, Clone)]
pub struct MathGrammar {
    functions: Vec<MathSymbol>,
    num_variables: usize,
    constant_range: Option<(f64, f64)>,
}

impl MathGrammar {
    /// Create a grammar over all function symbols and `num_variables` dataset
    /// variables, without constants.
    #[must_use]
    pub fn new(num_variables: usize) -> Self {
        debug_assert!(num_variables > 0);
        Self {
            functions: FUNCTIONS.to_vec(),
            num_variables,
            constant_range: None,
        }
    }

    /// Restrict the allowed function set. The set must not be empty.
    #[must_use]
    pub fn with_functions(mut self, functions: Vec<MathSymbol>) -> Self {
        debug_assert!(!functions.is_empty());
        self.functions = functions;
        self
    }

    /// Allow constant terminals drawn uniformly from `[min, max]`.
    #[must_use]
    pub fn with_constants(mut self, min: f64, max: f64) -> Self {
        debug_assert!(min <= max);
        self.constant_range = Some((min, max));
        self
    }
}

impl Grammar<MathSymbol> for MathGrammar {
    fn terminal<R: Rng>(&self, rng: &mut R) -> MathSymbol {
        let choices = self.num_variables + usize::from(self.constant_range.is_some());
        let pick = rng.gen_range(0..choices);
        if let Some((min, max)) = self.constant_range {
            if pick == self.num_variables {
                return MathSymbol::Const(rng.gen_range(min..=max));
            }
        }
        MathSymbol::Var(pick)
    }

    fn non_terminal<R: Rng>(&self, rng: &mut R) -> MathSymbol {
        self.functions[rng.gen_range(0..self.functions.len())]
    }

    fn any<R: Rng>(&self, rng: &mut R) -> MathSymbol {
        let terminals = self.num_variables + usize::from(self.constant_range.is_some());
        let pick = rng.gen_range(0..self.functions.len() + terminals);
        if pick < self.functions.len() {
            self.functions[pick]
        } else {
            self.terminal(rng)
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    use super::*;

    fn tree(symbol: MathSymbol, children: Vec<Node<MathSymbol>>) -> Node<MathSymbol> {
        let mut node = Node::new(symbol);
        node.set_children(children);
        node
    }

    fn leaf(symbol: MathSymbol) -> Node<MathSymbol> {
        Node::new(symbol)
    }

    #[test]
    fn test_basic_arithmetic() {
        // add(mul(x0, x0), 3)
        let root = tree(
            MathSymbol::Add,
            vec![
                tree(
                    MathSymbol::Mul,
                    vec![leaf(MathSymbol::Var(0)), leaf(MathSymbol::Var(0))],
                ),
                leaf(MathSymbol::Const(3.0)),
            ],
        );
        assert!((evaluate(&root, &[2.0]) - 7.0).abs() < 1e-12);
    }

    #[test]
    fn test_protected_division() {
        let root = tree(
            MathSymbol::Div,
            vec![leaf(MathSymbol::Const(4.0)), leaf(MathSymbol::Var(0))],
        );
        assert!((evaluate(&root, &[2.0]) - 2.0).abs() < 1e-12);
        assert!((evaluate(&root, &[0.0]) - SAFE_VALUE).abs() < 1e-12);
    }

    #[test]
    fn test_protected_log_and_sqrt() {
        let log = tree(MathSymbol::Log, vec![leaf(MathSymbol::Var(0))]);
        assert!((evaluate(&log, &[100.0]) - 2.0).abs() < 1e-12);
        assert!((evaluate(&log, &[0.0]) - SAFE_VALUE).abs() < 1e-12);
        assert!((evaluate(&log, &[-5.0]) - SAFE_VALUE).abs() < 1e-12);

        let sqrt = tree(MathSymbol::Sqrt, vec![leaf(MathSymbol::Var(0))]);
        assert!((evaluate(&sqrt, &[9.0]) - 3.0).abs() < 1e-12);
        assert!((evaluate(&sqrt, &[-1.0]) - SAFE_VALUE).abs() < 1e-12);
    }

    #[test]
    fn test_grammar_respects_allowed_set() {
        let mut rng = SmallRng::seed_from_u64(7);
        let grammar = MathGrammar::new(2)
            .with_functions(vec![MathSymbol::Add, MathSymbol::Sin])
            .with_constants(-1.0, 1.0);
        for _ in 0..200 {
            let function = grammar.non_terminal(&mut rng);
            assert!(function == MathSymbol::Add || function == MathSymbol::Sin);
            match grammar.terminal(&mut rng) {
                MathSymbol::Var(index) => assert!(index < 2),
                MathSymbol::Const(value) => assert!((-1.0..=1.0).contains(&value)),
                other => panic!("unexpected terminal {other}"),
            }
        }
    }

    #[test]
    fn test_function_names() {
        assert_eq!(MathSymbol::function("+"), Some(MathSymbol::Add));
        assert_eq!(MathSymbol::function("sqrt"), Some(MathSymbol::Sqrt));
        assert_eq!(MathSymbol::function("tan"), None);
    }
}
