//! Wire bodies of the solver service.

use mazetrace_core::{Algorithm, CellKind, Coordinate, Grid, GridError, SolveRequest, Trace};
use serde::{Deserialize, Serialize};

/// `GET /generate-maze` success body.
///
/// The maze is kept as raw numbers so a malformed grid is reported as an
/// invalid maze rather than a decoding failure.
#[derive(Debug, Deserialize)]
pub(crate) struct GenerateResponseDto {
    pub(crate) maze: Vec<Vec<i64>>,
}

impl GenerateResponseDto {
    pub(crate) fn into_grid(self) -> Result<Grid, GridError> {
        let rows = self
            .maze
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(CellKind::try_from)
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Grid::from_rows(rows)
    }
}

/// `POST /solve-maze` request body.
#[derive(Debug, Serialize)]
pub(crate) struct SolveRequestDto<'a> {
    pub(crate) maze: &'a Grid,
    pub(crate) algorithm: Algorithm,
    pub(crate) start: Coordinate,
    pub(crate) end: Coordinate,
}

impl<'a> From<&'a SolveRequest> for SolveRequestDto<'a> {
    fn from(request: &'a SolveRequest) -> Self {
        Self {
            maze: &request.maze,
            algorithm: request.algorithm,
            start: request.start,
            end: request.end,
        }
    }
}

/// `POST /solve-maze` success body.
#[derive(Debug, Deserialize)]
pub(crate) struct SolveResponseDto {
    pub(crate) solution: Vec<Coordinate>,
    pub(crate) visited: Vec<Coordinate>,
}

impl From<SolveResponseDto> for Trace {
    fn from(dto: SolveResponseDto) -> Self {
        Self::new(dto.visited, dto.solution)
    }
}

/// Body of a non-success response, when the server sends one.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorDto {
    pub(crate) error: String,
}

#[cfg(test)]
mod tests {
    use mazetrace_core::{Algorithm, Coordinate, Grid, GridError, Markers, SolveRequest, Trace};

    use super::{GenerateResponseDto, SolveRequestDto, SolveResponseDto};

    #[test]
    fn solve_request_matches_wire_format() {
        let grid: Grid = ".#\n..".parse().unwrap();
        let markers = Markers::corners(&grid).unwrap();
        let request = SolveRequest::new(grid, Algorithm::Dfs, markers);
        let json = serde_json::to_value(SolveRequestDto::from(&request)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "maze": [[0, 1], [0, 0]],
                "algorithm": "dfs",
                "start": [0, 0],
                "end": [1, 1],
            })
        );
    }

    #[test]
    fn generate_response_reports_bad_cells_as_grid_errors() {
        let dto: GenerateResponseDto = serde_json::from_str(r#"{"maze": [[0, 2]]}"#).unwrap();
        assert_eq!(dto.into_grid(), Err(GridError::InvalidCellValue(2)));

        let dto: GenerateResponseDto = serde_json::from_str(r#"{"maze": [[0, -1]]}"#).unwrap();
        assert_eq!(dto.into_grid(), Err(GridError::InvalidCellValue(-1)));

        let dto: GenerateResponseDto = serde_json::from_str(r#"{"maze": [[256, 0]]}"#).unwrap();
        assert_eq!(dto.into_grid(), Err(GridError::InvalidCellValue(256)));

        let dto: GenerateResponseDto = serde_json::from_str(r#"{"maze": [[0, 1], [0]]}"#).unwrap();
        assert!(matches!(dto.into_grid(), Err(GridError::Ragged { .. })));
    }

    #[test]
    fn solve_response_becomes_trace() {
        let dto: SolveResponseDto =
            serde_json::from_str(r#"{"solution": [[0, 0], [0, 1]], "visited": [[0, 0], [0, 1], [1, 0]]}"#)
                .unwrap();
        let trace = Trace::from(dto);
        assert_eq!(trace.visited().len(), 3);
        assert_eq!(trace.path()[1], Coordinate::new(0, 1));
    }
}
