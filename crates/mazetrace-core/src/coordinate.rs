use serde::{Deserialize, Serialize};

/// A cell address on a [`Grid`](crate::Grid), as `(row, col)`.
///
/// Serialized as a two-element array `[row, col]`, matching the solver
/// service wire format.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(from = "[usize; 2]", into = "[usize; 2]")]
#[display("({row}, {col})")]
pub struct Coordinate {
    /// Row index, counted from the top.
    pub row: usize,
    /// Column index, counted from the left.
    pub col: usize,
}

impl Coordinate {
    /// The top-left cell.
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Creates a coordinate from a row and a column.
    #[must_use]
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the coordinate one step away in `direction`.
    ///
    /// Returns `None` when the step would leave the non-negative quadrant.
    /// Upper bounds are not checked here; see [`Grid::contains`](crate::Grid::contains).
    #[must_use]
    #[inline]
    pub fn step(self, direction: Direction) -> Option<Self> {
        self.step_by(direction, 1)
    }

    /// Returns the coordinate `distance` steps away in `direction`.
    #[must_use]
    pub fn step_by(self, direction: Direction, distance: usize) -> Option<Self> {
        let Self { row, col } = self;
        match direction {
            Direction::Up => row.checked_sub(distance).map(|row| Self::new(row, col)),
            Direction::Right => col.checked_add(distance).map(|col| Self::new(row, col)),
            Direction::Down => row.checked_add(distance).map(|row| Self::new(row, col)),
            Direction::Left => col.checked_sub(distance).map(|col| Self::new(row, col)),
        }
    }
}

impl From<[usize; 2]> for Coordinate {
    fn from([row, col]: [usize; 2]) -> Self {
        Self::new(row, col)
    }
}

impl From<Coordinate> for [usize; 2] {
    fn from(coord: Coordinate) -> Self {
        [coord.row, coord.col]
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

/// One of the four orthogonal neighbour directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum Direction {
    /// Towards row 0.
    Up,
    /// Towards larger columns.
    Right,
    /// Towards larger rows.
    Down,
    /// Towards column 0.
    Left,
}

impl Direction {
    /// All directions in the order searches expand them: up, right, down, left.
    pub const ALL: [Self; 4] = [Self::Up, Self::Right, Self::Down, Self::Left];
}

#[cfg(test)]
mod tests {
    use super::{Coordinate, Direction};

    #[test]
    fn step_stops_at_zero_edges() {
        assert_eq!(Coordinate::ORIGIN.step(Direction::Up), None);
        assert_eq!(Coordinate::ORIGIN.step(Direction::Left), None);
        assert_eq!(
            Coordinate::ORIGIN.step(Direction::Down),
            Some(Coordinate::new(1, 0))
        );
        assert_eq!(
            Coordinate::new(3, 3).step_by(Direction::Left, 2),
            Some(Coordinate::new(3, 1))
        );
    }

    #[test]
    fn serializes_as_row_col_pair() {
        let coord = Coordinate::new(4, 7);
        assert_eq!(serde_json::to_string(&coord).unwrap(), "[4,7]");
        let parsed: Coordinate = serde_json::from_str("[2,9]").unwrap();
        assert_eq!(parsed, Coordinate::new(2, 9));
    }

    #[test]
    fn rejects_negative_components() {
        assert!(serde_json::from_str::<Coordinate>("[-1,0]").is_err());
        assert!(serde_json::from_str::<Coordinate>("[1]").is_err());
    }
}
