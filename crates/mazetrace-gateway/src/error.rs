use mazetrace_core::{GridError, MarkerError};
use mazetrace_solver::SolverError;

/// Errors produced by a [`SolverGateway`](crate::SolverGateway).
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::IsVariant)]
pub enum GatewayError {
    /// The request could not be sent or the response could not be read.
    #[display("request failed: {message}")]
    Http {
        /// Description from the HTTP client.
        message: String,
    },
    /// The server answered with a non-success status.
    #[display("server returned status {status}: {message}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The server's `error` message, or the status reason.
        message: String,
    },
    /// The response body is not the expected JSON.
    #[display("cannot decode response: {message}")]
    Decode {
        /// Description from the JSON decoder.
        message: String,
    },
    /// The returned maze is not a valid grid.
    #[display("invalid maze: {_0}")]
    InvalidMaze(GridError),
    /// A default corner of the returned maze is a wall.
    #[display("invalid maze: {_0}")]
    InvalidCorner(MarkerError),
    /// The in-process search rejected the request.
    #[display("{_0}")]
    Solver(SolverError),
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for GatewayError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode {
            message: err.to_string(),
        }
    }
}

impl From<GridError> for GatewayError {
    fn from(err: GridError) -> Self {
        Self::InvalidMaze(err)
    }
}

impl From<MarkerError> for GatewayError {
    fn from(err: MarkerError) -> Self {
        Self::InvalidCorner(err)
    }
}

impl From<SolverError> for GatewayError {
    fn from(err: SolverError) -> Self {
        Self::Solver(err)
    }
}
