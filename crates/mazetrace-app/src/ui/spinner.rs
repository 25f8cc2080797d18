use eframe::egui::{Context, Id, Modal, Spinner};

use crate::action::SpinnerKind;

pub(crate) fn show(ctx: &Context, spinner: SpinnerKind) {
    ctx.request_repaint();
    let (id, heading, label) = match spinner {
        SpinnerKind::GenerateMaze => ("generating_maze", "Generating...", "Generating a new maze..."),
        SpinnerKind::SolveMaze => ("solving_maze", "Solving...", "Searching the maze..."),
    };
    Modal::new(Id::new(id)).show(ctx, |ui| {
        ui.heading(heading);
        ui.add(Spinner::new());
        ui.label(label);
    });
}
