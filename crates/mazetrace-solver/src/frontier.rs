use std::collections::VecDeque;

use mazetrace_core::Coordinate;

/// The set of discovered cells waiting to be expanded.
///
/// The pop order is what distinguishes one search from another.
pub trait Frontier {
    /// Adds a discovered cell.
    fn push(&mut self, coord: Coordinate);
    /// Takes the next cell to expand.
    fn pop(&mut self) -> Option<Coordinate>;
}

/// First-in first-out frontier (breadth-first search).
#[derive(Debug, Clone, Default)]
pub struct Queue(VecDeque<Coordinate>);

impl Frontier for Queue {
    fn push(&mut self, coord: Coordinate) {
        self.0.push_back(coord);
    }

    fn pop(&mut self) -> Option<Coordinate> {
        self.0.pop_front()
    }
}

/// Last-in first-out frontier (depth-first search).
#[derive(Debug, Clone, Default)]
pub struct Stack(Vec<Coordinate>);

impl Frontier for Stack {
    fn push(&mut self, coord: Coordinate) {
        self.0.push(coord);
    }

    fn pop(&mut self) -> Option<Coordinate> {
        self.0.pop()
    }
}
