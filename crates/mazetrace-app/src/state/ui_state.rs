use crate::{
    action::{SpinnerId, SpinnerKind},
    flow::FlowExecutor,
    worker::Worker,
};

// UiState holds ephemeral UI-only state (flows, spinners, the worker). It is not persisted.
#[derive(Debug)]
pub(crate) struct UiState {
    pub(crate) executor: FlowExecutor,
    pub(crate) spinner_state: SpinnerState,
    pub(crate) worker: Worker,
}

impl UiState {
    #[must_use]
    pub(crate) fn new(worker: Worker) -> Self {
        Self {
            executor: FlowExecutor::new(),
            spinner_state: SpinnerState::default(),
            worker,
        }
    }

    /// Drops every running flow and the spinners they showed.
    pub(crate) fn cancel_flows(&mut self) {
        self.executor.cancel_all();
        self.spinner_state.clear();
    }
}

#[derive(Debug, Default)]
pub(crate) struct SpinnerState {
    active: Vec<SpinnerEntry>,
}

impl SpinnerState {
    pub(crate) fn start(&mut self, id: SpinnerId, kind: SpinnerKind) {
        self.active.push(SpinnerEntry { id, kind });
    }

    pub(crate) fn stop(&mut self, id: SpinnerId) {
        if let Some(index) = self.active.iter().position(|entry| entry.id == id) {
            self.active.remove(index);
        }
    }

    pub(crate) fn clear(&mut self) {
        self.active.clear();
    }

    #[must_use]
    pub(crate) fn is_active(&self) -> bool {
        !self.active.is_empty()
    }

    #[must_use]
    pub(crate) fn active_kind(&self) -> Option<SpinnerKind> {
        self.active.first().map(|entry| entry.kind)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SpinnerEntry {
    pub(crate) id: SpinnerId,
    pub(crate) kind: SpinnerKind,
}

#[cfg(test)]
mod tests {
    use super::SpinnerState;
    use crate::action::{SpinnerId, SpinnerKind};

    #[test]
    fn spinner_state_tracks_entries_by_id() {
        let mut state = SpinnerState::default();
        assert!(!state.is_active());

        state.start(SpinnerId::new(1), SpinnerKind::GenerateMaze);
        state.start(SpinnerId::new(2), SpinnerKind::SolveMaze);
        assert_eq!(state.active_kind(), Some(SpinnerKind::GenerateMaze));

        state.stop(SpinnerId::new(1));
        assert_eq!(state.active_kind(), Some(SpinnerKind::SolveMaze));
        state.stop(SpinnerId::new(7));
        assert!(state.is_active());

        state.clear();
        assert!(!state.is_active());
        assert_eq!(state.active_kind(), None);
    }
}
