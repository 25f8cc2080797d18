use crate::{Algorithm, Coordinate, Grid, Markers};

/// Everything the solver needs to search a maze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveRequest {
    /// The maze to search.
    pub maze: Grid,
    /// Which search to run.
    pub algorithm: Algorithm,
    /// Search origin.
    pub start: Coordinate,
    /// Search target.
    pub end: Coordinate,
}

impl SolveRequest {
    /// Builds a request from a grid and its markers.
    #[must_use]
    pub fn new(maze: Grid, algorithm: Algorithm, markers: Markers) -> Self {
        Self {
            maze,
            algorithm,
            start: markers.start(),
            end: markers.end(),
        }
    }
}
