//! Core data types for the mazetrace workspace.
//!
//! This crate holds the pure data model shared by every other crate:
//!
//! - [`Grid`] and [`CellKind`]: the rectangular maze matrix.
//! - [`Coordinate`] and [`Direction`]: cell addressing and neighbour steps.
//! - [`Marker`] and [`Markers`]: the start/end designators, always on open cells.
//! - [`Trace`]: the visited order and solution path produced by a search.
//! - [`Algorithm`], [`MazeSize`] and [`SolveRequest`]: request parameters.
//!
//! Nothing here performs I/O or keeps time; validation is the only behavior.
//!
//! # Examples
//!
//! ```
//! use mazetrace_core::{CellKind, Coordinate, Grid, Markers};
//!
//! let grid: Grid = "\
//! ..#
//! .#.
//! ...
//! "
//! .parse()?;
//!
//! assert_eq!(grid.height(), 3);
//! assert_eq!(grid.kind(Coordinate::new(0, 2)), Some(CellKind::Wall));
//!
//! let markers = Markers::corners(&grid)?;
//! assert_eq!(markers.end(), Coordinate::new(2, 2));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{algorithm::*, coordinate::*, grid::*, marker::*, maze_size::*, request::*, trace::*};

mod algorithm;
mod coordinate;
mod grid;
mod marker;
mod maze_size;
mod request;
mod trace;
