//! Node vocabulary and grammar for the ant-trail problem.

use crate::gp::{Grammar, Symbol};
use rand::Rng;
use std::fmt;

/// One element of the ant vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AntSymbol {
    /// Step one cell forward, collecting any food there.
    Move,
    /// Turn 90° counter-clockwise in place.
    Left,
    /// Turn 90° clockwise in place.
    Right,
    /// Run the first child if the cell ahead holds food, else the second.
    IfFoodAhead,
    /// Run both children in order.
    Prog2,
    /// Run all three children in order.
    Prog3,
}

const TERMINALS: [AntSymbol; 3] = [AntSymbol::Move, AntSymbol::Left, AntSymbol::Right];
const NON_TERMINALS: [AntSymbol; 3] =
    [AntSymbol::IfFoodAhead, AntSymbol::Prog2, AntSymbol::Prog3];

impl Symbol for AntSymbol {
    fn arity(&self) -> usize {
        match self {
            AntSymbol::Move | AntSymbol::Left | AntSymbol::Right => 0,
            AntSymbol::IfFoodAhead | AntSymbol::Prog2 => 2,
            AntSymbol::Prog3 => 3,
        }
    }
}

impl fmt::Display for AntSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AntSymbol::Move => "move",
            AntSymbol::Left => "left",
            AntSymbol::Right => "right",
            AntSymbol::IfFoodAhead => "if-food-ahead",
            AntSymbol::Prog2 => "prog2",
            AntSymbol::Prog3 => "prog3",
        };
        write!(f, "{name}")
    }
}

/// The fixed ant grammar: all six symbols, uniform within each class.
#[derive(Debug, Clone, Copy, Default)]
pub struct AntGrammar;

impl Grammar<AntSymbol> for AntGrammar {
    fn terminal<R: Rng>(&self, rng: &mut R) -> AntSymbol {
        TERMINALS[rng.gen_range(0..TERMINALS.len())]
    }

    fn non_terminal<R: Rng>(&self, rng: &mut R) -> AntSymbol {
        NON_TERMINALS[rng.gen_range(0..NON_TERMINALS.len())]
    }

    fn any<R: Rng>(&self, rng: &mut R) -> AntSymbol {
        let index = rng.gen_range(0..TERMINALS.len() + NON_TERMINALS.len());
        if index < TERMINALS.len() {
            TERMINALS[index]
        } else {
            NON_TERMINALS[index - TERMINALS.len()]
        }
    }
}
