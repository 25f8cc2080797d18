use std::collections::HashMap;

use crate::Coordinate;

/// The output of one search: the exploration order and the solution path.
///
/// `visited` lists cells in the order the search explored them. `path` runs
/// from start to end inclusive, or is empty when the end is unreachable.
///
/// Lookups use the first occurrence of a coordinate, so duplicated entries in
/// either sequence never move a cell later in the replay.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trace {
    visited: Vec<Coordinate>,
    path: Vec<Coordinate>,
    visited_index: HashMap<Coordinate, usize>,
    path_index: HashMap<Coordinate, usize>,
}

impl Trace {
    /// Creates a trace and indexes both sequences.
    #[must_use]
    pub fn new(visited: Vec<Coordinate>, path: Vec<Coordinate>) -> Self {
        let visited_index = first_occurrences(&visited);
        let path_index = first_occurrences(&path);
        Self {
            visited,
            path,
            visited_index,
            path_index,
        }
    }

    /// The empty trace held before any solve completes.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Cells in exploration order.
    #[must_use]
    pub fn visited(&self) -> &[Coordinate] {
        &self.visited
    }

    /// Cells on the solution path, start to end.
    #[must_use]
    pub fn path(&self) -> &[Coordinate] {
        &self.path
    }

    /// First index of `coord` in the exploration order.
    #[must_use]
    #[inline]
    pub fn visited_position(&self, coord: Coordinate) -> Option<usize> {
        self.visited_index.get(&coord).copied()
    }

    /// First index of `coord` on the solution path.
    #[must_use]
    #[inline]
    pub fn path_position(&self, coord: Coordinate) -> Option<usize> {
        self.path_index.get(&coord).copied()
    }

    /// Combined length of both sequences.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.visited.len() + self.path.len()
    }

    /// Returns `true` if both sequences are empty.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.visited.is_empty() && self.path.is_empty()
    }

    /// Returns `true` if the search reached the end.
    #[must_use]
    #[inline]
    pub fn is_solved(&self) -> bool {
        !self.path.is_empty()
    }

    /// Returns `true` if the trace can be replayed (both sequences non-empty).
    #[must_use]
    #[inline]
    pub fn is_replayable(&self) -> bool {
        !self.visited.is_empty() && !self.path.is_empty()
    }
}

fn first_occurrences(cells: &[Coordinate]) -> HashMap<Coordinate, usize> {
    let mut index = HashMap::with_capacity(cells.len());
    for (i, &coord) in cells.iter().enumerate() {
        index.entry(coord).or_insert(i);
    }
    index
}
