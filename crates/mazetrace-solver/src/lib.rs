//! Local maze search producing replayable traces.
//!
//! Both searches record cells into the visited order at the moment they are
//! discovered (pushed onto the frontier), starting with the start cell, and
//! stop as soon as the end cell is taken off the frontier. The path is then
//! rebuilt from parent links.
//!
//! - [`Algorithm::Bfs`] uses a FIFO queue and expands neighbours up, right,
//!   down, left. Its path is a shortest path.
//! - [`Algorithm::Dfs`] uses a LIFO stack and shuffles the neighbour order on
//!   every expansion.
//!
//! An unreachable end yields a trace with an empty path and the full visited
//! order.
//!
//! # Examples
//!
//! ```
//! use mazetrace_core::{Algorithm, Coordinate, Grid};
//!
//! let grid: Grid = "...\n##.\n...".parse()?;
//! let trace = mazetrace_solver::solve(
//!     &grid,
//!     Algorithm::Bfs,
//!     Coordinate::new(0, 0),
//!     Coordinate::new(2, 0),
//! )?;
//! assert_eq!(trace.path().len(), 7);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::frontier::*;

use std::collections::HashMap;

use mazetrace_core::{Algorithm, Coordinate, Direction, Grid, MarkerError, Markers, Trace};
use rand::{Rng, seq::SliceRandom as _};

mod frontier;

/// Errors produced by [`solve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum SolverError {
    /// The start or end is outside the grid or on a wall.
    #[display("cannot search: {_0}")]
    InvalidEndpoint(MarkerError),
}

/// Searches `grid` from `start` to `end` with `algorithm`.
///
/// Depth-first search draws its neighbour order from the thread-local random
/// generator; use [`solve_with_rng`] for a reproducible run.
///
/// # Errors
///
/// Returns [`SolverError::InvalidEndpoint`] if `start` or `end` is outside the
/// grid or on a wall.
pub fn solve(
    grid: &Grid,
    algorithm: Algorithm,
    start: Coordinate,
    end: Coordinate,
) -> Result<Trace, SolverError> {
    solve_with_rng(grid, algorithm, start, end, &mut rand::rng())
}

/// Like [`solve`], drawing depth-first neighbour orders from `rng`.
///
/// # Errors
///
/// Returns [`SolverError::InvalidEndpoint`] if `start` or `end` is outside the
/// grid or on a wall.
pub fn solve_with_rng<R>(
    grid: &Grid,
    algorithm: Algorithm,
    start: Coordinate,
    end: Coordinate,
    rng: &mut R,
) -> Result<Trace, SolverError>
where
    R: Rng + ?Sized,
{
    Markers::new(grid, start, end)?;
    let trace = match algorithm {
        Algorithm::Bfs => search(grid, start, end, Queue::default(), || Direction::ALL),
        Algorithm::Dfs => search(grid, start, end, Stack::default(), || {
            let mut order = Direction::ALL;
            order.shuffle(rng);
            order
        }),
    };
    Ok(trace)
}

fn search<F>(
    grid: &Grid,
    start: Coordinate,
    end: Coordinate,
    mut frontier: F,
    mut order: impl FnMut() -> [Direction; 4],
) -> Trace
where
    F: Frontier,
{
    let mut parent = HashMap::from([(start, start)]);
    let mut visited = vec![start];
    frontier.push(start);

    while let Some(coord) = frontier.pop() {
        if coord == end {
            return Trace::new(visited, rebuild_path(&parent, start, end));
        }
        for direction in order() {
            let Some(next) = coord.step(direction) else {
                continue;
            };
            if !grid.is_open(next) || parent.contains_key(&next) {
                continue;
            }
            parent.insert(next, coord);
            visited.push(next);
            frontier.push(next);
        }
    }
    Trace::new(visited, Vec::new())
}

fn rebuild_path(
    parent: &HashMap<Coordinate, Coordinate>,
    start: Coordinate,
    end: Coordinate,
) -> Vec<Coordinate> {
    let mut path = vec![end];
    let mut current = end;
    while current != start {
        current = parent[&current];
        path.push(current);
    }
    path.reverse();
    path
}
