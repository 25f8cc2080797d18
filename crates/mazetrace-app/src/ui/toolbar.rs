use eframe::egui::{Button, ComboBox, DragValue, Slider, Ui};
use mazetrace_core::{Algorithm, Marker, MazeSize};
use mazetrace_replay::{Cadence, PlacementState};

use crate::{
    action::{ActionRequestQueue, FlowAction, PlacementAction, SettingsAction},
    state::Settings,
};

#[derive(Debug, Clone)]
#[expect(clippy::struct_excessive_bools)]
pub(crate) struct ToolbarViewModel {
    pub(crate) settings: Settings,
    pub(crate) placement: PlacementState,
    pub(crate) can_generate: bool,
    pub(crate) can_solve: bool,
    pub(crate) can_place: bool,
    pub(crate) solving: bool,
}

pub(crate) fn show(ui: &mut Ui, vm: &ToolbarViewModel, action_queue: &mut ActionRequestQueue) {
    let mut settings = vm.settings;
    let mut changed = false;

    ui.horizontal_wrapped(|ui| {
        ui.label("Maze size:");
        let mut size = settings.maze_size.get();
        let response = ui.add(
            DragValue::new(&mut size)
                .range(MazeSize::MIN.get()..=MazeSize::MAX.get())
                .speed(0.1),
        );
        if response.changed() {
            settings.maze_size = MazeSize::clamped(size);
            changed = true;
        }

        ui.separator();
        ui.label("Algorithm:");
        ComboBox::from_id_salt("algorithm")
            .selected_text(settings.algorithm.label())
            .show_ui(ui, |ui| {
                for algorithm in Algorithm::ALL {
                    changed |= ui
                        .selectable_value(&mut settings.algorithm, algorithm, algorithm.label())
                        .changed();
                }
            });

        ui.separator();
        ui.label("Step delay:");
        let mut millis = settings.cadence.millis();
        let response = ui.add(
            Slider::new(&mut millis, Cadence::MIN.millis()..=Cadence::MAX.millis()).suffix(" ms"),
        );
        if response.changed() {
            settings.cadence = Cadence::clamped(millis);
            changed = true;
        }
    });

    ui.horizontal_wrapped(|ui| {
        if ui
            .add_enabled(vm.can_generate, Button::new("Generate New Maze"))
            .on_hover_text("G")
            .clicked()
        {
            action_queue.request(FlowAction::GenerateMaze.into());
        }

        for (marker, label, shortcut) in [
            (Marker::Start, "Set Start Point", "S"),
            (Marker::End, "Set End Point", "E"),
        ] {
            let armed = vm.placement.target() == Some(marker);
            if ui
                .add_enabled(vm.can_place, Button::new(label).selected(armed))
                .on_hover_text(shortcut)
                .clicked()
            {
                action_queue.request(PlacementAction::Begin(marker).into());
            }
        }

        let solve_label = if vm.solving { "Solving..." } else { "Solve Maze" };
        if ui
            .add_enabled(vm.can_solve, Button::new(solve_label))
            .on_hover_text("Enter")
            .clicked()
        {
            action_queue.request(FlowAction::SolveMaze.into());
        }
    });

    if changed {
        action_queue.request(SettingsAction::UpdateSettings(settings).into());
    }
}
