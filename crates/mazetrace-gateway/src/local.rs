use mazetrace_core::{Grid, MazeSize, SolveRequest, Trace};
use mazetrace_generator::MazeGenerator;

use crate::{GatewayError, SolverGateway};

/// A [`SolverGateway`] that generates and searches in-process.
///
/// Used when no solver service is available.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalGateway {
    generator: MazeGenerator,
}

impl LocalGateway {
    /// Creates a local gateway.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SolverGateway for LocalGateway {
    fn generate(&self, size: MazeSize) -> Result<Grid, GatewayError> {
        let maze = self.generator.generate(size);
        log::info!("generated {size}x{size} maze locally (seed {})", maze.seed);
        Ok(maze.grid)
    }

    fn solve(&self, request: &SolveRequest) -> Result<Trace, GatewayError> {
        let trace = mazetrace_solver::solve(
            &request.maze,
            request.algorithm,
            request.start,
            request.end,
        )?;
        log::info!(
            "solved locally with {}: {} visits, path of {}",
            request.algorithm,
            trace.visited().len(),
            trace.path().len()
        );
        Ok(trace)
    }
}
