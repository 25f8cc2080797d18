use std::time::Instant;

use crate::{
    action::{
        Action, ActionRequestQueue, AppAction, FlowAction, MazeAction, PlacementAction,
        SettingsAction, UiAction,
    },
    flow::tasks,
    state::{AppState, AppStateAccess, Settings, UiState},
};

#[derive(Debug)]
struct ActionContext<'a> {
    app_state: AppStateAccess<'a>,
    ui_state: &'a mut UiState,
}

pub(crate) fn handle_all(
    app_state: &mut AppState,
    ui_state: &mut UiState,
    action_queue: &mut ActionRequestQueue,
) {
    for action in action_queue.take_all() {
        handle(app_state, ui_state, action);
    }
}

pub(crate) fn handle(app_state: &mut AppState, ui_state: &mut UiState, action: Action) {
    let mut ctx = ActionContext {
        app_state: app_state.access(),
        ui_state,
    };

    match action {
        Action::App(AppAction::Maze(action)) => ctx.apply_result(action),
        Action::App(AppAction::Placement(action)) => ctx.place_marker(action),
        Action::App(AppAction::Settings(SettingsAction::UpdateSettings(settings))) => {
            ctx.update_settings(settings);
        }
        Action::Ui(UiAction::StartSpinner { id, kind }) => {
            ctx.ui_state.spinner_state.start(id, kind);
        }
        Action::Ui(UiAction::StopSpinner { id }) => {
            ctx.ui_state.spinner_state.stop(id);
        }
        Action::Ui(UiAction::Dismiss) => {
            let session = ctx.app_state.session_mut();
            if session.placement().is_idle() {
                session.dismiss_failure();
            } else {
                session.cancel_placement();
            }
        }
        Action::Flow(FlowAction::GenerateMaze) => ctx.generate_maze(),
        Action::Flow(FlowAction::SolveMaze) => ctx.solve_maze(),
    }
}

impl ActionContext<'_> {
    fn apply_result(&mut self, action: MazeAction) {
        let session = self.app_state.session_mut();
        match action {
            MazeAction::ApplyGenerated { id, result } => {
                session.finish_generate(id, result);
            }
            MazeAction::ApplySolved { id, result } => {
                session.finish_solve(id, result, Instant::now());
            }
        }
    }

    fn place_marker(&mut self, action: PlacementAction) {
        let session = self.app_state.session_mut();
        let result = match action {
            PlacementAction::Begin(marker) => session.begin_placement(marker),
            PlacementAction::ClickCell(coord) => session.click_cell(coord).map(|_| ()),
        };
        // Rejected placements leave the state as it was and are not surfaced.
        if let Err(err) = result {
            log::debug!("ignoring {action:?}: {err}");
        }
    }

    fn update_settings(&mut self, settings: Settings) {
        let current = self.app_state.as_ref().settings;
        if settings == current {
            return;
        }
        if settings.cadence != current.cadence {
            log::debug!("cadence changed to {}", settings.cadence);
            self.app_state
                .session_mut()
                .set_cadence(settings.cadence, Instant::now());
        }
        *self.app_state.settings_mut() = settings;
    }

    fn generate_maze(&mut self) {
        if self.app_state.as_ref().session.is_loading() {
            return;
        }
        let size = self.app_state.as_ref().settings.maze_size;
        self.ui_state.cancel_flows();
        let id = self.app_state.session_mut().begin_generate();
        tasks::spawn_generate_flow(
            &mut self.ui_state.executor,
            &self.ui_state.worker,
            id,
            size,
        );
    }

    fn solve_maze(&mut self) {
        if self.app_state.as_ref().session.is_loading() {
            return;
        }
        let algorithm = self.app_state.as_ref().settings.algorithm;
        if self.app_state.as_ref().session.maze().is_none() {
            log::debug!("ignoring solve request without a maze");
            return;
        }
        self.ui_state.cancel_flows();
        match self.app_state.session_mut().begin_solve(algorithm) {
            Ok((id, request)) => tasks::spawn_solve_flow(
                &mut self.ui_state.executor,
                &self.ui_state.worker,
                id,
                request,
            ),
            Err(err) => log::warn!("cannot solve: {err}"),
        }
    }
}
