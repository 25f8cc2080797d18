use eframe::egui::{Align, Button, Frame, Label, Layout, RichText, Sense, Ui, Vec2, Widget as _};
use mazetrace_replay::{AnimationStep, CellCategory, Failure, Phase, PlacementState};

use crate::{
    action::{ActionRequestQueue, UiAction},
    ui::{grid_theme::GridTheme, layout::LayoutScale},
};

#[derive(Debug, Clone)]
pub(crate) enum StatusKind {
    NoMaze,
    Ready,
    Loading,
    Placing(PlacementState),
    Replaying {
        step: AnimationStep,
        terminal: AnimationStep,
    },
}

impl StatusKind {
    #[must_use]
    pub(crate) fn from_parts(
        has_maze: bool,
        phase: Phase,
        placement: PlacementState,
        step: AnimationStep,
        terminal: AnimationStep,
    ) -> Self {
        match phase {
            Phase::Loading(_) => Self::Loading,
            Phase::Replaying => Self::Replaying { step, terminal },
            Phase::Idle if !has_maze => Self::NoMaze,
            Phase::Idle if !placement.is_idle() => Self::Placing(placement),
            Phase::Idle => Self::Ready,
        }
    }

    fn text(&self) -> String {
        match self {
            Self::NoMaze => "No maze yet. Press G to generate one.".to_owned(),
            Self::Ready => "Ready".to_owned(),
            Self::Loading => "Waiting for the solver...".to_owned(),
            Self::Placing(state) => match state.target() {
                Some(marker) => format!("Click an open cell to place the {marker} point (Esc to cancel)"),
                None => "Ready".to_owned(),
            },
            Self::Replaying { step, terminal } => {
                format!("Replaying step {} / {}", step.get(), terminal.get())
            }
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct StatusLineViewModel {
    pub(crate) status: StatusKind,
    pub(crate) failure: Option<Failure>,
}

const LEGEND: [(CellCategory, &str); 4] = [
    (CellCategory::Start, "Start"),
    (CellCategory::End, "End"),
    (CellCategory::Visited, "Visited"),
    (CellCategory::Path, "Path"),
];

pub(crate) fn show(
    ui: &mut Ui,
    vm: &StatusLineViewModel,
    scale: &LayoutScale,
    action_queue: &mut ActionRequestQueue,
) {
    let visuals = ui.visuals().clone();
    let theme = GridTheme::from_visuals(&visuals);
    let palette = theme.palette_for(&visuals);
    let swatch = Vec2::splat(scale.cell_size * 0.5);

    ui.horizontal(|ui| {
        for (category, label) in LEGEND {
            let (rect, _) = ui.allocate_exact_size(swatch, Sense::hover());
            ui.painter()
                .rect_filled(rect, 0.0, palette.category_color(category));
            ui.label(label);
            ui.add_space(scale.spacing.x);
        }
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            Label::new(RichText::new(vm.status.text())).ui(ui);
        });
    });

    if let Some(failure) = &vm.failure {
        Frame::group(ui.style())
            .fill(visuals.error_fg_color.gamma_multiply(0.15))
            .stroke((1.0, visuals.error_fg_color))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    Label::new(RichText::new(failure.to_string()).color(visuals.error_fg_color))
                        .ui(ui);
                    if ui.add(Button::new("Dismiss")).on_hover_text("Esc").clicked() {
                        action_queue.request(UiAction::Dismiss.into());
                    }
                });
            });
    }
}
