use mazetrace_replay::{CellCategory, Session};

use crate::{
    state::{AppState, UiState},
    ui::{
        grid::{GridCell, GridViewModel, GridVisualState},
        main_screen::MainScreenViewModel,
        status_line::{StatusKind, StatusLineViewModel},
        toolbar::ToolbarViewModel,
    },
};

#[must_use]
pub(crate) fn build_toolbar_vm(app_state: &AppState, _ui_state: &UiState) -> ToolbarViewModel {
    let session = &app_state.session;
    let loading = session.is_loading();
    ToolbarViewModel {
        settings: app_state.settings,
        placement: session.placement(),
        can_generate: !loading,
        can_solve: !loading && session.maze().is_some(),
        can_place: !session.is_busy() && session.maze().is_some(),
        solving: session.is_solving(),
    }
}

#[must_use]
pub(crate) fn build_status_line_vm(session: &Session) -> StatusLineViewModel {
    StatusLineViewModel {
        status: StatusKind::from_parts(
            session.maze().is_some(),
            session.phase(),
            session.placement(),
            session.step(),
            session.terminal_step(),
        ),
        failure: session.failure().cloned(),
    }
}

#[must_use]
pub(crate) fn build_grid_vm(session: &Session) -> Option<GridViewModel> {
    let view = session.view()?;
    let grid = view.grid();
    let moving = session.placement().target();
    let moving_coord = moving.zip(session.maze()).map(|(marker, maze)| maze.markers.get(marker));

    let cells = view
        .categories()
        .map(|(coord, category)| {
            let mut visual_state = GridVisualState::empty();
            if moving.is_some() {
                if category == CellCategory::Wall {
                    visual_state |= GridVisualState::BLOCKED;
                } else {
                    visual_state |= GridVisualState::PLACEABLE;
                }
            }
            if moving_coord == Some(coord) {
                visual_state |= GridVisualState::MOVING_MARKER;
            }
            GridCell {
                coord,
                category,
                visual_state,
            }
        })
        .collect();
    Some(GridViewModel::new(grid.width(), grid.height(), cells))
}

#[must_use]
pub(crate) fn build_main_screen_vm(app_state: &AppState, ui_state: &UiState) -> MainScreenViewModel {
    MainScreenViewModel {
        toolbar_vm: build_toolbar_vm(app_state, ui_state),
        status_line_vm: build_status_line_vm(&app_state.session),
        grid_vm: build_grid_vm(&app_state.session),
    }
}

#[cfg(test)]
mod tests {
    use std::{sync::Arc, time::Instant};

    use mazetrace_core::{Coordinate, Grid, Marker, Trace};
    use mazetrace_gateway::LocalGateway;
    use mazetrace_replay::{CellCategory, Phase};

    use super::{build_grid_vm, build_toolbar_vm};
    use crate::{
        state::{AppState, Settings, UiState},
        ui::grid::GridVisualState,
        worker::Worker,
    };

    fn states_with_maze() -> (AppState, UiState) {
        let worker = Worker::spawn(Arc::new(LocalGateway::new())).unwrap();
        let mut app_state = AppState::new(Settings::default());
        let id = app_state.session.begin_generate();
        let grid: Grid = "..#\n#..\n...".parse().unwrap();
        app_state.session.finish_generate(id, Ok(grid));
        (app_state, UiState::new(worker))
    }

    #[test]
    fn toolbar_without_maze_only_generates() {
        let worker = Worker::spawn(Arc::new(LocalGateway::new())).unwrap();
        let app_state = AppState::new(Settings::default());
        let vm = build_toolbar_vm(&app_state, &UiState::new(worker));
        assert!(vm.can_generate);
        assert!(!vm.can_solve);
        assert!(!vm.can_place);
        assert!(!vm.solving);
    }

    #[test]
    fn toolbar_during_replay_allows_superseding_requests() {
        let (mut app_state, ui_state) = states_with_maze();
        let (id, _request) = app_state
            .session
            .begin_solve(app_state.settings.algorithm)
            .unwrap();
        let loading = build_toolbar_vm(&app_state, &ui_state);
        assert!(!loading.can_generate && !loading.can_solve && !loading.can_place);
        assert!(loading.solving);

        let trace = Trace::new(
            vec![Coordinate::new(0, 0), Coordinate::new(0, 1)],
            vec![Coordinate::new(0, 0), Coordinate::new(0, 1)],
        );
        app_state.session.finish_solve(id, Ok(trace), Instant::now());
        assert_eq!(app_state.session.phase(), Phase::Replaying);
        let replaying = build_toolbar_vm(&app_state, &ui_state);
        assert!(replaying.can_generate && replaying.can_solve);
        assert!(!replaying.can_place);
        assert!(replaying.solving);
    }

    #[test]
    fn grid_marks_targets_while_placing() {
        let (mut app_state, _ui_state) = states_with_maze();
        let idle = build_grid_vm(&app_state.session).unwrap();
        assert!(idle.cells().iter().all(|cell| cell.visual_state.is_empty()));
        assert_eq!(idle.cells()[0].category, CellCategory::Start);
        assert_eq!(idle.cells()[2].category, CellCategory::Wall);

        app_state.session.begin_placement(Marker::End).unwrap();
        let placing = build_grid_vm(&app_state.session).unwrap();
        let cell = |row: usize, col: usize| &placing.cells()[row * 3 + col];
        assert_eq!(cell(0, 2).visual_state, GridVisualState::BLOCKED);
        assert_eq!(cell(1, 1).visual_state, GridVisualState::PLACEABLE);
        assert_eq!(
            cell(2, 2).visual_state,
            GridVisualState::PLACEABLE | GridVisualState::MOVING_MARKER
        );
    }
}
