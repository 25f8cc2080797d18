use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::Coordinate;

/// The occupancy of a single maze cell.
///
/// Serialized as `0` (open) or `1` (wall).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::IsVariant,
)]
#[serde(try_from = "i64", into = "u8")]
pub enum CellKind {
    /// A walkable cell.
    Open,
    /// A blocked cell.
    Wall,
}

impl CellKind {
    /// Character used by the text form of a [`Grid`].
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Open => '.',
            Self::Wall => '#',
        }
    }
}

impl TryFrom<i64> for CellKind {
    type Error = GridError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Open),
            1 => Ok(Self::Wall),
            _ => Err(GridError::InvalidCellValue(value)),
        }
    }
}

impl From<CellKind> for u8 {
    fn from(kind: CellKind) -> Self {
        match kind {
            CellKind::Open => 0,
            CellKind::Wall => 1,
        }
    }
}

/// Errors produced while building a [`Grid`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridError {
    /// The grid has no rows or no columns.
    #[display("maze has no cells")]
    Empty,
    /// A row differs in length from the first row.
    #[display("maze row {row} has {len} cells, expected {expected}")]
    Ragged {
        /// Index of the offending row.
        row: usize,
        /// Length of the offending row.
        len: usize,
        /// Length of the first row.
        expected: usize,
    },
    /// A wire cell value other than `0` or `1`.
    #[display("invalid maze cell value {_0}")]
    InvalidCellValue(#[error(not(source))] i64),
    /// A text cell other than `.` or `#`.
    #[display("invalid maze cell character {_0:?}")]
    InvalidCellChar(#[error(not(source))] char),
}

/// A rectangular maze.
///
/// Cells are stored row-major. A grid always has at least one row and one
/// column, and every row has the same width. Once built, a grid is never
/// mutated; a new maze replaces it wholesale.
///
/// The wire form is an array of rows of `0|1` values. The text form (used by
/// [`Display`](fmt::Display) and [`FromStr`]) is one line per row with `.`
/// for open cells and `#` for walls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<CellKind>>", into = "Vec<Vec<CellKind>>")]
pub struct Grid {
    height: usize,
    width: usize,
    cells: Vec<CellKind>,
}

impl Grid {
    /// Builds a grid from rows of cells.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::Empty`] if there are no rows or the first row is
    /// empty, and [`GridError::Ragged`] if row lengths differ.
    pub fn from_rows<R>(rows: impl IntoIterator<Item = R>) -> Result<Self, GridError>
    where
        R: AsRef<[CellKind]>,
    {
        let mut height = 0;
        let mut width = None;
        let mut cells = Vec::new();
        for (row, cols) in rows.into_iter().enumerate() {
            let cols = cols.as_ref();
            let expected = *width.get_or_insert(cols.len());
            if cols.len() != expected {
                return Err(GridError::Ragged {
                    row,
                    len: cols.len(),
                    expected,
                });
            }
            cells.extend_from_slice(cols);
            height += 1;
        }
        let width = width.unwrap_or(0);
        if height == 0 || width == 0 {
            return Err(GridError::Empty);
        }
        Ok(Self {
            height,
            width,
            cells,
        })
    }

    /// Number of rows.
    #[must_use]
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of columns.
    #[must_use]
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns `true` if `coord` lies inside the grid.
    #[must_use]
    #[inline]
    pub fn contains(&self, coord: Coordinate) -> bool {
        coord.row < self.height && coord.col < self.width
    }

    /// Returns the kind of the cell at `coord`, or `None` when out of bounds.
    #[must_use]
    #[inline]
    pub fn kind(&self, coord: Coordinate) -> Option<CellKind> {
        self.contains(coord)
            .then(|| self.cells[coord.row * self.width + coord.col])
    }

    /// Returns `true` if `coord` is inside the grid and open.
    #[must_use]
    #[inline]
    pub fn is_open(&self, coord: Coordinate) -> bool {
        self.kind(coord).is_some_and(|kind| kind.is_open())
    }

    /// The bottom-right cell.
    #[must_use]
    pub fn last(&self) -> Coordinate {
        Coordinate::new(self.height - 1, self.width - 1)
    }

    /// Iterates over the rows as slices.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[CellKind]> + '_ {
        self.cells.chunks_exact(self.width)
    }

    /// Iterates over every coordinate in row-major order.
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        (0..self.height).flat_map(move |row| (0..self.width).map(move |col| Coordinate::new(row, col)))
    }

    /// Iterates over every open coordinate in row-major order.
    pub fn open_coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.coordinates().filter(|&coord| self.is_open(coord))
    }
}

impl TryFrom<Vec<Vec<CellKind>>> for Grid {
    type Error = GridError;

    fn try_from(rows: Vec<Vec<CellKind>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<Grid> for Vec<Vec<CellKind>> {
    fn from(grid: Grid) -> Self {
        grid.rows().map(<[CellKind]>::to_vec).collect()
    }
}

impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| {
                line.chars()
                    .map(|ch| match ch {
                        '.' => Ok(CellKind::Open),
                        '#' => Ok(CellKind::Wall),
                        _ => Err(GridError::InvalidCellChar(ch)),
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_rows(rows)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for kind in row {
                write!(f, "{}", kind.as_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
