//! Toroidal grid simulation of one ant program.

use crate::ant::language::AntSymbol;
use crate::ant::trail::Trail;
use crate::gp::Node;

/// The four headings the ant can face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Heading {
    Up,
    Right,
    Down,
    Left,
}

impl Heading {
    fn turned_left(self) -> Self {
        match self {
            Heading::Up => Heading::Left,
            Heading::Left => Heading::Down,
            Heading::Down => Heading::Right,
            Heading::Right => Heading::Up,
        }
    }

    fn turned_right(self) -> Self {
        match self {
            Heading::Up => Heading::Right,
            Heading::Right => Heading::Down,
            Heading::Down => Heading::Left,
            Heading::Left => Heading::Up,
        }
    }
}

/// Executes ant programs against a trail.
///
/// The ant starts at the top-left cell facing right. Both axes wrap. Every
/// terminal (move or turn) costs one move from the budget; the budget is
/// checked between full program executions, so the final pass may run to
/// completion past it.
#[derive(Debug)]
pub struct Simulator {
    trail: Trail,
    food: Vec<bool>,
    row: usize,
    col: usize,
    heading: Heading,
    moves: usize,
    collected: usize,
}

impl Simulator {
    /// Create a simulator for the given trail.
    #[must_use]
    pub fn new(trail: Trail) -> Self {
        let food = Vec::with_capacity(trail.rows() * trail.cols());
        Self {
            trail,
            food,
            row: 0,
            col: 0,
            heading: Heading::Right,
            moves: 0,
            collected: 0,
        }
    }

    /// The trail this simulator runs on.
    #[must_use]
    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    /// Run `program` from a fresh start until the move budget is spent.
    /// Returns the amount of food collected.
    pub fn run(&mut self, program: &Node<AntSymbol>, max_moves: usize) -> usize {
        self.reset();
        while self.moves < max_moves {
            self.exec(program);
        }
        self.collected
    }

    fn reset(&mut self) {
        self.trail.fill(&mut self.food);
        self.row = 0;
        self.col = 0;
        self.heading = Heading::Right;
        self.moves = 0;
        self.collected = 0;
    }

    fn exec(&mut self, node: &Node<AntSymbol>) {
        match node.symbol() {
            AntSymbol::IfFoodAhead => {
                let branch = usize::from(!self.food_ahead());
                self.exec(&node.children()[branch]);
            }
            AntSymbol::Prog2 | AntSymbol::Prog3 => {
                for child in node.children() {
                    self.exec(child);
                }
            }
            AntSymbol::Move => {
                let (row, col) = self.cell_ahead();
                self.row = row;
                self.col = col;
                let index = row * self.trail.cols() + col;
                if self.food[index] {
                    self.food[index] = false;
                    self.collected += 1;
                }
                self.moves += 1;
            }
            AntSymbol::Left => {
                self.heading = self.heading.turned_left();
                self.moves += 1;
            }
            AntSymbol::Right => {
                self.heading = self.heading.turned_right();
                self.moves += 1;
            }
        }
    }

    fn cell_ahead(&self) -> (usize, usize) {
        let rows = self.trail.rows();
        let cols = self.trail.cols();
        match self.heading {
            Heading::Up => ((self.row + rows - 1) % rows, self.col),
            Heading::Down => ((self.row + 1) % rows, self.col),
            Heading::Left => (self.row, (self.col + cols - 1) % cols),
            Heading::Right => (self.row, (self.col + 1) % cols),
        }
    }

    fn food_ahead(&self) -> bool {
        let (row, col) = self.cell_ahead();
        self.food[row * self.trail.cols() + col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gp::Symbol;

    fn node(symbol: AntSymbol, children: Vec<Node<AntSymbol>>) -> Node<AntSymbol> {
        let mut n = Node::new(symbol);
        if symbol.arity() > 0 {
            n.set_children(children);
        }
        n
    }

    fn leaf(symbol: AntSymbol) -> Node<AntSymbol> {
        Node::new(symbol)
    }

    #[test]
    fn test_move_collects_and_wraps() {
        let trail = Trail::parse_str("1x4\n0111\n").unwrap();
        let mut simulator = Simulator::new(trail);
        let program = node(
            AntSymbol::Prog2,
            vec![leaf(AntSymbol::Move), leaf(AntSymbol::Move)],
        );
        // Budget 3 lets the program run twice: cells 1, 2, 3 then wrap to 0.
        let collected = simulator.run(&program, 3);
        assert_eq!(collected, 3);
    }

    #[test]
    fn test_if_food_ahead_branches() {
        let trail = Trail::parse_str("1x2\n01\n").unwrap();
        let mut simulator = Simulator::new(trail);
        let program = node(
            AntSymbol::IfFoodAhead,
            vec![leaf(AntSymbol::Move), leaf(AntSymbol::Left)],
        );
        // First pass: food ahead, move and collect. Second pass: nothing
        // ahead (already eaten), turn instead.
        let collected = simulator.run(&program, 2);
        assert_eq!(collected, 1);
    }

    #[test]
    fn test_turning_cycles_through_headings() {
        let trail = Trail::parse_str("2x2\n00\n00\n").unwrap();
        let mut simulator = Simulator::new(trail);
        let program = leaf(AntSymbol::Left);
        // Four turns return to the original heading; nothing collected.
        assert_eq!(simulator.run(&program, 4), 0);
        assert_eq!(simulator.heading, Heading::Right);
    }

    #[test]
    fn test_run_resets_state() {
        let trail = Trail::parse_str("1x2\n11\n").unwrap();
        let mut simulator = Simulator::new(trail);
        let program = leaf(AntSymbol::Move);
        assert_eq!(simulator.run(&program, 2), 2);
        assert_eq!(simulator.run(&program, 2), 2);
    }
}
