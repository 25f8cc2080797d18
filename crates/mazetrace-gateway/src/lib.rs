//! Access to maze generation and search, local or remote.
//!
//! [`SolverGateway`] is the seam between the client and whatever produces
//! mazes and traces:
//!
//! - [`HttpGateway`] talks to a solver service over HTTP
//!   (`GET /generate-maze?size=N`, `POST /solve-maze`).
//! - [`LocalGateway`] runs the generator and the search in-process.
//!
//! Calls block; the client runs them on a worker thread.

pub use self::{error::*, http::*, local::*};

use mazetrace_core::{Grid, MazeSize, SolveRequest, Trace};

mod dto;
mod error;
mod http;
mod local;

/// Produces mazes and search traces.
pub trait SolverGateway: Send + Sync {
    /// Generates a square maze of side `size`.
    ///
    /// The returned grid has open default corners.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the maze cannot be obtained or is malformed.
    fn generate(&self, size: MazeSize) -> Result<Grid, GatewayError>;

    /// Runs the requested search.
    ///
    /// An unreachable end is a successful result with an empty path.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the search cannot be run or its result
    /// cannot be decoded.
    fn solve(&self, request: &SolveRequest) -> Result<Trace, GatewayError>;
}
