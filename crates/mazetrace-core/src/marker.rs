use crate::{Coordinate, Grid};

/// A start/end designator on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::IsVariant)]
pub enum Marker {
    /// Where the search begins.
    #[display("start")]
    Start,
    /// Where the search should arrive.
    #[display("end")]
    End,
}

/// Errors produced when a marker would violate the open-cell invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MarkerError {
    /// The coordinate lies outside the grid.
    #[display("{marker} marker {coord} is outside the maze")]
    OutOfBounds {
        /// The marker being placed.
        marker: Marker,
        /// The rejected coordinate.
        coord: Coordinate,
    },
    /// The coordinate references a wall.
    #[display("{marker} marker {coord} is on a wall")]
    Wall {
        /// The marker being placed.
        marker: Marker,
        /// The rejected coordinate.
        coord: Coordinate,
    },
}

/// The start and end coordinates for a maze.
///
/// Both coordinates reference open cells of the grid they were validated
/// against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Markers {
    start: Coordinate,
    end: Coordinate,
}

impl Markers {
    /// Creates markers after checking both coordinates against `grid`.
    ///
    /// # Errors
    ///
    /// Returns [`MarkerError`] if either coordinate is out of bounds or on a wall.
    pub fn new(grid: &Grid, start: Coordinate, end: Coordinate) -> Result<Self, MarkerError> {
        check(grid, Marker::Start, start)?;
        check(grid, Marker::End, end)?;
        Ok(Self { start, end })
    }

    /// Markers at the grid's default corners: `(0, 0)` and the bottom-right cell.
    ///
    /// # Errors
    ///
    /// Returns [`MarkerError::Wall`] if a corner is a wall.
    pub fn corners(grid: &Grid) -> Result<Self, MarkerError> {
        Self::new(grid, Coordinate::ORIGIN, grid.last())
    }

    /// The start coordinate.
    #[must_use]
    #[inline]
    pub fn start(&self) -> Coordinate {
        self.start
    }

    /// The end coordinate.
    #[must_use]
    #[inline]
    pub fn end(&self) -> Coordinate {
        self.end
    }

    /// The coordinate of `marker`.
    #[must_use]
    pub fn get(&self, marker: Marker) -> Coordinate {
        match marker {
            Marker::Start => self.start,
            Marker::End => self.end,
        }
    }

    /// Returns the marker sitting on `coord`, start taking precedence.
    #[must_use]
    pub fn at(&self, coord: Coordinate) -> Option<Marker> {
        if coord == self.start {
            Some(Marker::Start)
        } else if coord == self.end {
            Some(Marker::End)
        } else {
            None
        }
    }

    /// Moves `marker` to `coord`.
    ///
    /// On error the markers are left unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`MarkerError`] if `coord` is out of bounds or on a wall.
    pub fn place(&mut self, grid: &Grid, marker: Marker, coord: Coordinate) -> Result<(), MarkerError> {
        check(grid, marker, coord)?;
        match marker {
            Marker::Start => self.start = coord,
            Marker::End => self.end = coord,
        }
        Ok(())
    }
}

fn check(grid: &Grid, marker: Marker, coord: Coordinate) -> Result<(), MarkerError> {
    match grid.kind(coord) {
        None => Err(MarkerError::OutOfBounds { marker, coord }),
        Some(kind) if kind.is_wall() => Err(MarkerError::Wall { marker, coord }),
        Some(_) => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::{Marker, MarkerError, Markers};
    use crate::{Coordinate, Grid};

    fn grid() -> Grid {
        "
        ..#
        .#.
        ...
        "
        .parse()
        .unwrap()
    }

    #[test]
    fn corners_use_origin_and_last_cell() {
        let markers = Markers::corners(&grid()).unwrap();
        assert_eq!(markers.start(), Coordinate::new(0, 0));
        assert_eq!(markers.end(), Coordinate::new(2, 2));
        assert_eq!(markers.at(Coordinate::new(2, 2)), Some(Marker::End));
        assert_eq!(markers.at(Coordinate::new(1, 0)), None);
    }

    #[test]
    fn corners_reject_walled_corner() {
        let grid: Grid = ".#\n##".parse().unwrap();
        assert_eq!(
            Markers::corners(&grid),
            Err(MarkerError::Wall {
                marker: Marker::End,
                coord: Coordinate::new(1, 1)
            })
        );
    }

    #[test]
    fn place_keeps_markers_on_error() {
        let grid = grid();
        let mut markers = Markers::corners(&grid).unwrap();

        let err = markers
            .place(&grid, Marker::Start, Coordinate::new(1, 1))
            .unwrap_err();
        assert!(matches!(err, MarkerError::Wall { .. }));
        let err = markers
            .place(&grid, Marker::End, Coordinate::new(5, 0))
            .unwrap_err();
        assert!(matches!(err, MarkerError::OutOfBounds { .. }));
        assert_eq!(markers, Markers::corners(&grid).unwrap());

        markers
            .place(&grid, Marker::End, Coordinate::new(1, 2))
            .unwrap();
        assert_eq!(markers.get(Marker::End), Coordinate::new(1, 2));
    }
}
