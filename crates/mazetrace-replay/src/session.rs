use std::time::{Duration, Instant};

use mazetrace_core::{Algorithm, Coordinate, Grid, Marker, Markers, SolveRequest, Trace};

use crate::{
    AnimationStep, Cadence, MarkerPlacement, PlacementError, PlacementState, ReplayScheduler,
    ReplayView, TickOutcome,
};

/// Identifies one generate or solve request.
///
/// Ids grow with every request; only the latest one may apply its result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
#[display("#{_0}")]
pub struct RequestId(u64);

/// The two request kinds sent to the solver service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::IsVariant)]
pub enum RequestKind {
    /// `generate-maze`.
    #[display("generate")]
    Generate,
    /// `solve-maze`.
    #[display("solve")]
    Solve,
}

/// What the session is doing.
///
/// Encodes the legal combinations of the loading and solving flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, derive_more::IsVariant)]
pub enum Phase {
    /// Waiting for user input.
    #[default]
    Idle,
    /// A request is in flight.
    Loading(RequestKind),
    /// A solved trace is being replayed.
    Replaying,
}

/// A user-visible failure of the last request.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::IsVariant)]
pub enum Failure {
    /// The request failed or returned something unusable.
    #[display("Failed to {request} maze: {message}")]
    Transport {
        /// Which request failed.
        request: RequestKind,
        /// Description of the failure.
        message: String,
    },
    /// The search could not reach the end marker.
    #[display("No solution found!")]
    NoSolutionFound,
}

impl Failure {
    /// Wraps an error from a request of kind `request`.
    pub fn transport(request: RequestKind, error: impl std::fmt::Display) -> Self {
        Self::Transport {
            request,
            message: error.to_string(),
        }
    }
}

/// Errors produced by [`Session`] commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SessionError {
    /// A solve was requested before any maze was generated.
    #[display("no maze to solve")]
    NoMaze,
}

/// A maze and its markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    /// The grid.
    pub grid: Grid,
    /// The start and end markers, always on open cells of `grid`.
    pub markers: Markers,
}

/// The client's single mutable state owner.
///
/// Every user command and every request result goes through here. New
/// requests cancel the replay before touching any state, and results carry
/// the [`RequestId`] they were issued under so a superseded result is
/// dropped instead of applied.
#[derive(Debug, Default)]
pub struct Session {
    maze: Option<Maze>,
    placement: MarkerPlacement,
    trace: Trace,
    scheduler: ReplayScheduler,
    phase: Phase,
    failure: Option<Failure>,
    request: RequestId,
}

impl Session {
    /// Creates an empty session replaying at `cadence`.
    #[must_use]
    pub fn new(cadence: Cadence) -> Self {
        Self {
            scheduler: ReplayScheduler::new(cadence),
            ..Self::default()
        }
    }

    /// The current maze, if one has been generated.
    #[must_use]
    pub fn maze(&self) -> Option<&Maze> {
        self.maze.as_ref()
    }

    /// The trace being replayed, empty when none.
    #[must_use]
    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    /// The current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The failure of the last request, if it has not been dismissed.
    #[must_use]
    pub fn failure(&self) -> Option<&Failure> {
        self.failure.as_ref()
    }

    /// The placement state.
    #[must_use]
    pub fn placement(&self) -> PlacementState {
        self.placement.state()
    }

    /// The replay step.
    #[must_use]
    pub fn step(&self) -> AnimationStep {
        self.scheduler.step()
    }

    /// The step at which the current replay ends.
    #[must_use]
    pub fn terminal_step(&self) -> AnimationStep {
        self.scheduler.terminal_step()
    }

    /// The replay cadence.
    #[must_use]
    pub fn cadence(&self) -> Cadence {
        self.scheduler.cadence()
    }

    /// The id of the latest request.
    #[must_use]
    pub fn latest_request(&self) -> RequestId {
        self.request
    }

    /// Returns `true` while a request is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.phase.is_loading()
    }

    /// Returns `true` while a solve is in flight or its replay is running.
    #[must_use]
    pub fn is_solving(&self) -> bool {
        matches!(
            self.phase,
            Phase::Loading(RequestKind::Solve) | Phase::Replaying
        )
    }

    /// Returns `true` unless the session is idle.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        !self.phase.is_idle()
    }

    /// A classification view of the current state, if a maze exists.
    #[must_use]
    pub fn view(&self) -> Option<ReplayView<'_>> {
        let maze = self.maze.as_ref()?;
        Some(ReplayView::new(
            &maze.grid,
            &maze.markers,
            &self.trace,
            self.scheduler.step(),
        ))
    }

    /// Starts a generate request and returns its id.
    pub fn begin_generate(&mut self) -> RequestId {
        self.begin(RequestKind::Generate)
    }

    /// Starts a solve request for the current maze.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoMaze`] if no maze has been generated; nothing
    /// changes in that case.
    pub fn begin_solve(
        &mut self,
        algorithm: Algorithm,
    ) -> Result<(RequestId, SolveRequest), SessionError> {
        let maze = self.maze.as_ref().ok_or(SessionError::NoMaze)?;
        let request = SolveRequest::new(maze.grid.clone(), algorithm, maze.markers);
        let id = self.begin(RequestKind::Solve);
        Ok((id, request))
    }

    fn begin(&mut self, kind: RequestKind) -> RequestId {
        self.scheduler.reset();
        self.trace = Trace::empty();
        self.failure = None;
        self.placement.cancel();
        self.request.0 += 1;
        self.phase = Phase::Loading(kind);
        log::info!("{kind} request {} started", self.request);
        self.request
    }

    fn accepts(&self, id: RequestId, kind: RequestKind) -> bool {
        if id == self.request && self.phase == Phase::Loading(kind) {
            return true;
        }
        log::warn!(
            "dropping stale {kind} response {id} (latest is {})",
            self.request
        );
        false
    }

    /// Applies the result of generate request `id`.
    ///
    /// On success the markers move to the default corners. On failure the
    /// previous maze stays. Returns `false` if `id` is not the latest
    /// request, in which case nothing changes.
    pub fn finish_generate(&mut self, id: RequestId, result: Result<Grid, Failure>) -> bool {
        if !self.accepts(id, RequestKind::Generate) {
            return false;
        }
        self.phase = Phase::Idle;
        let maze = result.and_then(|grid| {
            let markers = Markers::corners(&grid)
                .map_err(|err| Failure::transport(RequestKind::Generate, err))?;
            Ok(Maze { grid, markers })
        });
        match maze {
            Ok(maze) => {
                log::info!(
                    "generate request {id} finished: {}x{} maze",
                    maze.grid.height(),
                    maze.grid.width()
                );
                self.maze = Some(maze);
            }
            Err(failure) => self.fail(id, failure),
        }
        true
    }

    /// Applies the result of solve request `id` and starts the replay.
    ///
    /// An empty path records [`Failure::NoSolutionFound`] and leaves the
    /// trace empty. Returns `false` if `id` is not the latest request, in
    /// which case nothing changes.
    pub fn finish_solve(&mut self, id: RequestId, result: Result<Trace, Failure>, now: Instant) -> bool {
        if !self.accepts(id, RequestKind::Solve) {
            return false;
        }
        self.phase = Phase::Idle;
        let trace = match result {
            Ok(trace) if !trace.is_solved() => {
                log::info!(
                    "solve request {id} finished: no path after {} visits",
                    trace.visited().len()
                );
                self.failure = Some(Failure::NoSolutionFound);
                return true;
            }
            Ok(trace) => trace,
            Err(failure) => {
                self.fail(id, failure);
                return true;
            }
        };
        match self.scheduler.start(&trace, now) {
            Ok(_token) => {
                log::info!(
                    "solve request {id} finished: {} visits, path of {}",
                    trace.visited().len(),
                    trace.path().len()
                );
                self.trace = trace;
                self.phase = Phase::Replaying;
            }
            Err(err) => self.fail(id, Failure::transport(RequestKind::Solve, err)),
        }
        true
    }

    fn fail(&mut self, id: RequestId, failure: Failure) {
        log::warn!("request {id} failed: {failure}");
        self.failure = Some(failure);
    }

    /// Advances the replay if a tick is due.
    ///
    /// Returns the outcome of the delivered tick, if any. The phase returns
    /// to [`Phase::Idle`] once the replay finishes.
    pub fn poll_replay(&mut self, now: Instant) -> Option<TickOutcome> {
        let outcome = self.scheduler.poll(now)?;
        if outcome.is_finished() && self.phase.is_replaying() {
            self.phase = Phase::Idle;
        }
        Some(outcome)
    }

    /// Time until the replay needs another poll.
    #[must_use]
    pub fn time_until_next_tick(&self, now: Instant) -> Option<Duration> {
        self.scheduler.time_until_next_tick(now)
    }

    /// Changes the replay cadence without disturbing the current step.
    pub fn set_cadence(&mut self, cadence: Cadence, now: Instant) {
        self.scheduler.set_cadence(cadence, now);
    }

    /// Arms marker placement.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError::Busy`] unless the session is idle.
    pub fn begin_placement(&mut self, marker: Marker) -> Result<(), PlacementError> {
        self.placement.begin(marker, self.is_busy())
    }

    /// Disarms marker placement.
    pub fn cancel_placement(&mut self) {
        self.placement.cancel();
    }

    /// Handles a click on the grid.
    ///
    /// Returns the marker that moved, if any.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError::Busy`] unless the session is idle, and
    /// [`PlacementError::Invalid`] for a wall or out-of-grid click.
    pub fn click_cell(&mut self, coord: Coordinate) -> Result<Option<Marker>, PlacementError> {
        if self.is_busy() {
            return Err(PlacementError::Busy);
        }
        let Some(maze) = self.maze.as_mut() else {
            return Ok(None);
        };
        let moved = self.placement.click(coord, &maze.grid, &mut maze.markers)?;
        if let Some(marker) = moved {
            log::debug!("{marker} marker moved to {coord}");
        }
        Ok(moved)
    }

    /// Clears the surfaced failure.
    pub fn dismiss_failure(&mut self) {
        self.failure = None;
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use mazetrace_core::{Algorithm, Coordinate, Grid, Marker, Trace};

    use super::{Failure, Phase, RequestKind, Session, SessionError};
    use crate::{AnimationStep, CellCategory, PlacementError, TickOutcome};

    fn c(row: usize, col: usize) -> Coordinate {
        Coordinate::new(row, col)
    }

    fn open_grid() -> Grid {
        "...\n...\n...".parse().unwrap()
    }

    fn solved() -> Trace {
        Trace::new(
            vec![c(0, 0), c(0, 1), c(1, 1), c(2, 1), c(2, 2)],
            vec![c(0, 0), c(1, 1), c(2, 2)],
        )
    }

    fn with_maze() -> Session {
        let mut session = Session::default();
        let id = session.begin_generate();
        assert!(session.finish_generate(id, Ok(open_grid())));
        session
    }

    #[test]
    fn generate_sets_corner_markers() {
        let session = with_maze();
        let maze = session.maze().unwrap();
        assert_eq!(maze.markers.start(), c(0, 0));
        assert_eq!(maze.markers.end(), c(2, 2));
        assert_eq!(session.phase(), Phase::Idle);
    }

    #[test]
    fn solve_requires_a_maze() {
        let mut session = Session::default();
        assert_eq!(
            session.begin_solve(Algorithm::Bfs).unwrap_err(),
            SessionError::NoMaze
        );
        assert_eq!(session.phase(), Phase::Idle);
    }

    #[test]
    fn solve_replays_until_finished() {
        let mut session = with_maze();
        let (id, request) = session.begin_solve(Algorithm::Dfs).unwrap();
        assert_eq!(request.algorithm, Algorithm::Dfs);
        assert_eq!(request.end, c(2, 2));
        assert!(session.is_loading());
        assert!(session.is_solving());

        let mut now = Instant::now();
        assert!(session.finish_solve(id, Ok(solved()), now));
        assert_eq!(session.phase(), Phase::Replaying);
        assert!(session.is_solving());
        assert!(!session.is_loading());
        assert_eq!(session.step(), AnimationStep::new(1));

        let mut ticks = 0;
        while let Some(wait) = session.time_until_next_tick(now) {
            now += wait;
            session.poll_replay(now);
            ticks += 1;
        }
        assert_eq!(ticks, 9);
        assert_eq!(session.phase(), Phase::Idle);
        let view = session.view().unwrap();
        assert_eq!(view.classify(c(1, 1)), CellCategory::Path);
        assert_eq!(view.classify(c(2, 1)), CellCategory::Visited);
    }

    #[test]
    fn empty_path_is_no_solution() {
        let mut session = with_maze();
        let (id, _) = session.begin_solve(Algorithm::Bfs).unwrap();
        let unsolved = Trace::new(vec![c(0, 0), c(0, 1)], vec![]);
        assert!(session.finish_solve(id, Ok(unsolved), Instant::now()));
        assert_eq!(session.failure(), Some(&Failure::NoSolutionFound));
        assert_eq!(session.failure().unwrap().to_string(), "No solution found!");
        assert!(session.trace().is_empty());
        assert_eq!(session.phase(), Phase::Idle);
        assert_eq!(session.time_until_next_tick(Instant::now()), None);
    }

    #[test]
    fn transport_failure_keeps_previous_maze() {
        let mut session = with_maze();
        let id = session.begin_generate();
        let failure = Failure::transport(RequestKind::Generate, "connection refused");
        assert!(session.finish_generate(id, Err(failure)));
        assert_eq!(
            session.failure().unwrap().to_string(),
            "Failed to generate maze: connection refused"
        );
        assert_eq!(session.maze().unwrap().grid, open_grid());
        assert!(!session.is_busy());

        session.dismiss_failure();
        assert_eq!(session.failure(), None);
    }

    #[test]
    fn walled_corner_is_a_transport_failure() {
        let mut session = Session::default();
        let id = session.begin_generate();
        let grid: Grid = "..\n.#".parse().unwrap();
        assert!(session.finish_generate(id, Ok(grid)));
        assert!(session.failure().unwrap().is_transport());
        assert!(session.maze().is_none());
    }

    #[test]
    fn stale_responses_are_dropped() {
        let mut session = with_maze();
        let (old, _) = session.begin_solve(Algorithm::Bfs).unwrap();
        let new = session.begin_generate();
        assert!(new > old);

        assert!(!session.finish_solve(old, Ok(solved()), Instant::now()));
        assert_eq!(session.phase(), Phase::Loading(RequestKind::Generate));
        assert!(session.trace().is_empty());

        assert!(session.finish_generate(new, Ok(open_grid())));
        assert!(!session.finish_generate(new, Ok(open_grid())));
    }

    #[test]
    fn new_request_cancels_running_replay() {
        let mut session = with_maze();
        let (id, _) = session.begin_solve(Algorithm::Bfs).unwrap();
        let now = Instant::now();
        session.finish_solve(id, Ok(solved()), now);
        session.poll_replay(now + Duration::from_secs(1));
        assert_eq!(session.step(), AnimationStep::new(2));

        session.begin_generate();
        assert_eq!(session.step(), AnimationStep::ZERO);
        assert!(session.trace().is_empty());
        assert_eq!(session.time_until_next_tick(now), None);
        assert_eq!(session.poll_replay(now + Duration::from_secs(10)), None);
        assert_eq!(session.step(), AnimationStep::ZERO);
    }

    #[test]
    fn placement_is_blocked_while_busy() {
        let mut session = with_maze();
        let (id, _) = session.begin_solve(Algorithm::Bfs).unwrap();
        assert_eq!(session.begin_placement(Marker::Start), Err(PlacementError::Busy));
        assert_eq!(session.click_cell(c(0, 1)), Err(PlacementError::Busy));

        session.finish_solve(id, Ok(solved()), Instant::now());
        assert_eq!(session.begin_placement(Marker::End), Err(PlacementError::Busy));
    }

    #[test]
    fn placement_moves_markers_when_idle() {
        let mut session = with_maze();
        session.begin_placement(Marker::Start).unwrap();
        assert_eq!(session.click_cell(c(1, 0)), Ok(Some(Marker::Start)));
        assert_eq!(session.maze().unwrap().markers.start(), c(1, 0));
        assert_eq!(session.click_cell(c(1, 1)), Ok(None));
    }

    #[test]
    fn begin_generate_resets_placement() {
        let mut session = with_maze();
        session.begin_placement(Marker::End).unwrap();
        session.begin_generate();
        assert!(session.placement().is_idle());
    }

    #[test]
    fn finished_replay_outcome_is_reported() {
        let mut session = with_maze();
        let (id, _) = session.begin_solve(Algorithm::Bfs).unwrap();
        let trace = Trace::new(vec![c(0, 0)], vec![c(0, 0)]);
        let mut now = Instant::now();
        session.finish_solve(id, Ok(trace), now);
        let mut outcomes = Vec::new();
        while let Some(wait) = session.time_until_next_tick(now) {
            now += wait;
            outcomes.extend(session.poll_replay(now));
        }
        assert_eq!(
            outcomes,
            [
                TickOutcome::Advanced(AnimationStep::new(2)),
                TickOutcome::Advanced(AnimationStep::new(3)),
                TickOutcome::Finished,
            ]
        );
    }
}
