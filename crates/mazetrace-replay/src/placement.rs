use mazetrace_core::{Coordinate, Grid, Marker, MarkerError, Markers};

/// State of the click-to-place machine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, derive_more::IsVariant)]
pub enum PlacementState {
    /// Clicks on the grid do nothing.
    #[default]
    Idle,
    /// The next open-cell click moves the start marker.
    AwaitingStart,
    /// The next open-cell click moves the end marker.
    AwaitingEnd,
}

impl PlacementState {
    /// The marker a click would move, if any.
    #[must_use]
    pub fn target(self) -> Option<Marker> {
        match self {
            Self::Idle => None,
            Self::AwaitingStart => Some(Marker::Start),
            Self::AwaitingEnd => Some(Marker::End),
        }
    }

    fn awaiting(marker: Marker) -> Self {
        match marker {
            Marker::Start => Self::AwaitingStart,
            Marker::End => Self::AwaitingEnd,
        }
    }
}

/// Errors produced by [`MarkerPlacement`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum PlacementError {
    /// A request is loading or a replay is running.
    #[display("markers cannot be moved while a maze is being generated or solved")]
    Busy,
    /// The clicked cell cannot hold the marker.
    #[display("invalid placement: {_0}")]
    #[from]
    Invalid(MarkerError),
}

/// Click-to-place state machine for the start and end markers.
///
/// A begin command arms the machine for one marker; the next click on an
/// open cell moves that marker and returns to [`PlacementState::Idle`]. Wall
/// and out-of-grid clicks are rejected without changing anything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MarkerPlacement {
    state: PlacementState,
}

impl MarkerPlacement {
    /// The current state.
    #[must_use]
    #[inline]
    pub fn state(&self) -> PlacementState {
        self.state
    }

    /// Arms the machine for `marker`.
    ///
    /// Arming while already awaiting the other marker re-targets the pending
    /// placement.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError::Busy`] when `busy` is set; the state is left
    /// unchanged.
    pub fn begin(&mut self, marker: Marker, busy: bool) -> Result<(), PlacementError> {
        if busy {
            return Err(PlacementError::Busy);
        }
        self.state = PlacementState::awaiting(marker);
        Ok(())
    }

    /// Returns to [`PlacementState::Idle`].
    pub fn cancel(&mut self) {
        self.state = PlacementState::Idle;
    }

    /// Handles a click on `coord`.
    ///
    /// Returns the marker that moved, or `None` when the machine was idle.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError::Invalid`] for a wall or out-of-grid click;
    /// the machine keeps awaiting and `markers` is unchanged.
    pub fn click(
        &mut self,
        coord: Coordinate,
        grid: &Grid,
        markers: &mut Markers,
    ) -> Result<Option<Marker>, PlacementError> {
        let Some(marker) = self.state.target() else {
            return Ok(None);
        };
        markers.place(grid, marker, coord)?;
        self.state = PlacementState::Idle;
        Ok(Some(marker))
    }
}
