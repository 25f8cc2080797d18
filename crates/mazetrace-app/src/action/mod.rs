use std::mem;

use mazetrace_core::{Coordinate, Grid, Marker, Trace};
use mazetrace_replay::{Failure, RequestId};

use crate::state::Settings;

pub(crate) mod handler;

#[derive(Debug, derive_more::From)]
pub(crate) enum Action {
    App(AppAction),
    Ui(UiAction),
    Flow(FlowAction),
}

#[derive(Debug, derive_more::From)]
pub(crate) enum AppAction {
    Maze(MazeAction),
    Placement(PlacementAction),
    Settings(SettingsAction),
}

/// Results delivered by finished flows.
#[derive(Debug)]
pub(crate) enum MazeAction {
    ApplyGenerated {
        id: RequestId,
        result: Result<Grid, Failure>,
    },
    ApplySolved {
        id: RequestId,
        result: Result<Trace, Failure>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PlacementAction {
    Begin(Marker),
    ClickCell(Coordinate),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SettingsAction {
    UpdateSettings(Settings),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum UiAction {
    StartSpinner { id: SpinnerId, kind: SpinnerKind },
    StopSpinner { id: SpinnerId },
    /// Cancels a pending placement, or clears the error banner when no
    /// placement is pending.
    Dismiss,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FlowAction {
    GenerateMaze,
    SolveMaze,
}

impl From<MazeAction> for Action {
    fn from(action: MazeAction) -> Self {
        Action::App(action.into())
    }
}

impl From<PlacementAction> for Action {
    fn from(action: PlacementAction) -> Self {
        Action::App(action.into())
    }
}

impl From<SettingsAction> for Action {
    fn from(action: SettingsAction) -> Self {
        Action::App(action.into())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct SpinnerId(u64);

impl SpinnerId {
    #[must_use]
    pub(crate) fn new(value: u64) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SpinnerKind {
    GenerateMaze,
    SolveMaze,
}

#[derive(Debug, Default)]
pub(crate) struct ActionRequestQueue {
    actions: Vec<Action>,
}

impl ActionRequestQueue {
    pub(crate) fn request(&mut self, action: Action) {
        self.actions.push(action);
    }

    pub(crate) fn take_all(&mut self) -> Vec<Action> {
        mem::take(&mut self.actions)
    }
}

#[cfg(test)]
mod tests {
    use mazetrace_core::{Coordinate, Marker};

    use super::{Action, ActionRequestQueue, AppAction, FlowAction, PlacementAction};

    #[test]
    fn take_all_returns_actions_and_clears_queue() {
        let mut queue = ActionRequestQueue::default();
        queue.request(FlowAction::GenerateMaze.into());
        queue.request(PlacementAction::Begin(Marker::End).into());
        queue.request(PlacementAction::ClickCell(Coordinate::new(1, 2)).into());

        let drained = queue.take_all();
        assert_eq!(drained.len(), 3);
        assert!(matches!(drained[0], Action::Flow(FlowAction::GenerateMaze)));
        assert!(matches!(
            drained[1],
            Action::App(AppAction::Placement(PlacementAction::Begin(Marker::End)))
        ));
        assert!(matches!(
            drained[2],
            Action::App(AppAction::Placement(PlacementAction::ClickCell(coord)))
                if coord == Coordinate::new(1, 2)
        ));

        let drained_again = queue.take_all();
        assert!(drained_again.is_empty());
    }
}
