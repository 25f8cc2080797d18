use mazetrace_core::{Coordinate, Grid, Markers, Trace};

use crate::AnimationStep;

/// Visual category of a maze cell at a given replay step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum CellCategory {
    /// The start marker.
    Start,
    /// The end marker.
    End,
    /// A wall.
    Wall,
    /// A revealed cell of the solution path.
    Path,
    /// A revealed explored cell.
    Visited,
    /// An open cell not yet revealed.
    Open,
}

impl CellCategory {
    /// Returns `true` for the categories the replay reveals over time.
    #[must_use]
    #[inline]
    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Path | Self::Visited)
    }
}

/// Classifies the cell at `coord`.
///
/// The first matching rule wins:
///
/// 1. the start marker → [`CellCategory::Start`]
/// 2. the end marker → [`CellCategory::End`]
/// 3. a wall (or outside the grid) → [`CellCategory::Wall`]
/// 4. path index `i` with `step > trace.visited().len() + i` → [`CellCategory::Path`]
/// 5. visited index `j` with `step > j` → [`CellCategory::Visited`]
/// 6. anything else → [`CellCategory::Open`]
///
/// Markers and walls therefore stay visible whatever the step, and nothing is
/// revealed at step 0.
///
/// # Examples
///
/// ```
/// use mazetrace_core::{Coordinate, Grid, Markers, Trace};
/// use mazetrace_replay::{AnimationStep, CellCategory, classify};
///
/// let grid: Grid = "...\n...\n...".parse()?;
/// let markers = Markers::corners(&grid)?;
/// let c = Coordinate::new;
/// let trace = Trace::new(
///     vec![c(0, 0), c(0, 1), c(1, 1), c(2, 1), c(2, 2)],
///     vec![c(0, 0), c(1, 1), c(2, 2)],
/// );
///
/// let at = |step| classify(c(1, 1), &grid, &markers, &trace, AnimationStep::new(step));
/// assert_eq!(at(2), CellCategory::Open);
/// assert_eq!(at(6), CellCategory::Visited);
/// assert_eq!(at(7), CellCategory::Path);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[must_use]
pub fn classify(
    coord: Coordinate,
    grid: &Grid,
    markers: &Markers,
    trace: &Trace,
    step: AnimationStep,
) -> CellCategory {
    if coord == markers.start() {
        return CellCategory::Start;
    }
    if coord == markers.end() {
        return CellCategory::End;
    }
    if grid.kind(coord).is_none_or(|kind| kind.is_wall()) {
        return CellCategory::Wall;
    }

    let step = step.get();
    if trace
        .path_position(coord)
        .is_some_and(|i| step > trace.visited().len() + i)
    {
        return CellCategory::Path;
    }
    if trace.visited_position(coord).is_some_and(|j| step > j) {
        return CellCategory::Visited;
    }
    CellCategory::Open
}

/// Everything [`classify`] needs, bundled for the rendering layer.
#[derive(Debug, Clone, Copy)]
pub struct ReplayView<'a> {
    grid: &'a Grid,
    markers: &'a Markers,
    trace: &'a Trace,
    step: AnimationStep,
}

impl<'a> ReplayView<'a> {
    /// Bundles the inputs of a classification pass.
    #[must_use]
    pub fn new(grid: &'a Grid, markers: &'a Markers, trace: &'a Trace, step: AnimationStep) -> Self {
        Self {
            grid,
            markers,
            trace,
            step,
        }
    }

    /// The grid being classified.
    #[must_use]
    pub fn grid(&self) -> &'a Grid {
        self.grid
    }

    /// The step the view was taken at.
    #[must_use]
    pub fn step(&self) -> AnimationStep {
        self.step
    }

    /// Classifies a single cell.
    #[must_use]
    pub fn classify(&self, coord: Coordinate) -> CellCategory {
        classify(coord, self.grid, self.markers, self.trace, self.step)
    }

    /// Classifies every cell in row-major order.
    pub fn categories(&self) -> impl Iterator<Item = (Coordinate, CellCategory)> + '_ {
        self.grid
            .coordinates()
            .map(move |coord| (coord, self.classify(coord)))
    }
}
